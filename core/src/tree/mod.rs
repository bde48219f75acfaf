//! Source expression tree handed to the lowering engine by a reader.
//!
//! Nodes are immutable once built. Readers attach a `Location`/`Span` to the
//! nodes they produce; trees built in code (tests, macros) may leave them out.

pub mod kind;
pub mod node;

pub use kind::{Invocation, Number, SourceKind};
pub use node::SourceNode;
