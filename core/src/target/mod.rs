//! Imperative target tree produced by lowering.
//!
//! `TargetNode`s are plain structural records consumed by an execution
//! backend. The only mutation after construction is the location backfill
//! done by `ProgramUnit::fix_missing_locations`.

pub mod node;
pub mod op;
pub mod program;

pub use node::{TargetKind, TargetNode};
pub use op::{BinaryOperator, CompareOperator, ExprContext};
pub use program::ProgramUnit;
