//! Leaf lowering. Each function is pure: the same value always lowers to the
//! same target node.

use crate::location::Location;
use crate::target::node::{FALSE_NAME, TRUE_NAME};
use crate::target::{ExprContext, TargetNode};
use crate::tree::{Number, SourceKind, SourceNode};

use super::err::LoweringError;

pub fn lower_literal(node: &SourceNode) -> Result<TargetNode, LoweringError> {
    let lowered = match &node.kind {
        SourceKind::String { value } => lower_string(value),
        SourceKind::Number { value } => lower_number(*value),
        SourceKind::Bool { value } => lower_bool(*value),
        SourceKind::Symbol { name } => lower_symbol(name),
        SourceKind::Expression(_) | SourceKind::List { .. } => {
            return Err(LoweringError::unknown_variant(node));
        }
    };
    Ok(lowered.with_location(node.location.clone()))
}

pub fn lower_string(value: &str) -> TargetNode {
    TargetNode::str(value)
}

pub fn lower_number(value: Number) -> TargetNode {
    TargetNode::num(value)
}

/// Booleans become references to the reserved `True`/`False` names.
pub fn lower_bool(value: bool) -> TargetNode {
    let id = if value { TRUE_NAME } else { FALSE_NAME };
    TargetNode::name(id, ExprContext::Load)
}

/// A bare symbol is always a read of that name.
pub fn lower_symbol(name: &str) -> TargetNode {
    TargetNode::name(name, ExprContext::Load)
}

/// Location helper for handlers that build a leaf from a raw token.
pub(crate) fn located(node: TargetNode, at: Option<&Location>) -> TargetNode {
    node.with_location(at.cloned())
}
