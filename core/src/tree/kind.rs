//! file: core/src/tree/kind.rs
//! description: source tree node kinds.
//!
//! Defines `SourceKind`, the closed set of variants a reader can produce,
//! along with the `Invocation` descriptor carried by call expressions and the
//! `Number` value shared with the target tree.
//!
use serde::{Deserialize, Serialize};

use super::node::SourceNode;

/// A numeric literal value. Integers and floats stay distinct all the way to
/// the target tree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{}", v),
            Number::Float(v) if v.fract() == 0.0 && v.is_finite() => write!(f, "{:.1}", v),
            Number::Float(v) => write!(f, "{}", v),
        }
    }
}

/// The invocation descriptor of a call expression: the head symbol's text and
/// the ordered argument nodes that follow it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invocation {
    pub function: String,
    pub args: Vec<SourceNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SourceKind {
    Symbol { name: String },
    String { value: String },
    Number { value: Number },
    Bool { value: bool },
    Expression(Invocation),
    List { elements: Vec<SourceNode> },
}

impl SourceKind {
    /// Name of the variant, used in diagnostics.
    pub fn variant_name(&self) -> &'static str {
        match self {
            SourceKind::Symbol { .. } => "Symbol",
            SourceKind::String { .. } => "String",
            SourceKind::Number { .. } => "Number",
            SourceKind::Bool { .. } => "Bool",
            SourceKind::Expression(_) => "Expression",
            SourceKind::List { .. } => "List",
        }
    }
}
