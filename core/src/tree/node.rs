use serde::{Deserialize, Serialize};

use crate::location;

use super::kind::{Invocation, Number, SourceKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceNode {
    pub kind: SourceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<location::Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<location::Span>,
}

impl SourceNode {
    pub fn new(
        kind: SourceKind,
        location: Option<location::Location>,
        span: Option<location::Span>,
    ) -> Self {
        SourceNode { kind, location, span }
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Self::new(SourceKind::Symbol { name: name.into() }, None, None)
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::new(SourceKind::String { value: value.into() }, None, None)
    }

    pub fn int(value: i64) -> Self {
        Self::new(SourceKind::Number { value: Number::Int(value) }, None, None)
    }

    pub fn float(value: f64) -> Self {
        Self::new(SourceKind::Number { value: Number::Float(value) }, None, None)
    }

    pub fn boolean(value: bool) -> Self {
        Self::new(SourceKind::Bool { value }, None, None)
    }

    pub fn expression(function: impl Into<String>, args: Vec<SourceNode>) -> Self {
        Self::new(
            SourceKind::Expression(Invocation { function: function.into(), args }),
            None,
            None,
        )
    }

    pub fn list(elements: Vec<SourceNode>) -> Self {
        Self::new(SourceKind::List { elements }, None, None)
    }

    pub fn with_location(mut self, location: location::Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_span(mut self, span: location::Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn get_kind(&self) -> &SourceKind {
        &self.kind
    }

    pub fn get_location(&self) -> Option<&location::Location> {
        self.location.as_ref()
    }

    /// The invocation descriptor when this node is a call expression.
    pub fn invocation(&self) -> Option<&Invocation> {
        match &self.kind {
            SourceKind::Expression(inv) => Some(inv),
            _ => None,
        }
    }

    /// All arguments of a call expression, in order. Leaves and lists have none.
    pub fn children(&self) -> &[SourceNode] {
        match &self.kind {
            SourceKind::Expression(inv) => &inv.args,
            _ => &[],
        }
    }

    /// Raw token text of a leaf node, used where a form expects a name rather
    /// than an expression. Expressions and lists have no raw text.
    pub fn raw_text(&self) -> Option<String> {
        match &self.kind {
            SourceKind::Symbol { name } => Some(name.clone()),
            SourceKind::String { value } => Some(value.clone()),
            SourceKind::Number { value } => Some(value.to_string()),
            SourceKind::Bool { value } => Some(if *value { "true" } else { "false" }.to_string()),
            SourceKind::Expression(_) | SourceKind::List { .. } => None,
        }
    }
}

use std::fmt;

/// Renders the node back in surface syntax.
impl fmt::Display for SourceNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_seq(f: &mut fmt::Formatter<'_>, nodes: &[SourceNode]) -> fmt::Result {
            for (i, n) in nodes.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", n)?;
            }
            Ok(())
        }

        match &self.kind {
            SourceKind::Symbol { name } => write!(f, "{}", name),
            SourceKind::String { value } => write!(f, "{:?}", value),
            SourceKind::Number { value } => write!(f, "{}", value),
            SourceKind::Bool { value } => write!(f, "{}", value),
            SourceKind::Expression(inv) => {
                write!(f, "({}", inv.function)?;
                if !inv.args.is_empty() {
                    write!(f, " ")?;
                    write_seq(f, &inv.args)?;
                }
                write!(f, ")")
            }
            SourceKind::List { elements } => {
                write!(f, "[")?;
                write_seq(f, elements)?;
                write!(f, "]")
            }
        }
    }
}
