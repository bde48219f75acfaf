//! file: core/src/lower/mod.rs
//! description: source tree -> target tree lowering.
//!
//! `Lowerer` owns the structural and special form registries and walks a
//! source tree depth first. Children are lowered before their parent except
//! for structural forms, which read their raw arguments themselves.
//!
pub mod assemble;
pub mod err;
pub mod form;
pub mod lower_literal;
pub mod lower_special;
pub mod lower_structural;
pub mod registry;

use log::debug;

use crate::target::{ExprContext, TargetKind, TargetNode};
use crate::tree::{Invocation, SourceKind, SourceNode};

pub use self::assemble::assemble_program;
pub use self::err::{LoweringError, LoweringErrorKind};
pub use self::form::{ArgCursor, FormContext};
pub use self::registry::{FormRegistry, SpecialHandler, StructuralHandler};

pub type LowerResult = Result<Lowered, LoweringError>;

/// Result of lowering one source node: a single target node, or a flattened
/// statement sequence (what `do` produces).
#[derive(Debug, Clone, PartialEq)]
pub enum Lowered {
    Single(TargetNode),
    Sequence(Vec<TargetNode>),
}

impl Lowered {
    /// The single expression this result holds. `form` names the position's
    /// owner for the error raised when a sequence shows up instead.
    pub fn into_expr(self, form: &str, owner: &SourceNode) -> Result<TargetNode, LoweringError> {
        match self {
            Lowered::Single(node) => Ok(node),
            Lowered::Sequence(_) => Err(LoweringError::unexpected_sequence(form, owner)),
        }
    }

    /// Normalize to a statement list: a sequence is used as-is, a single node
    /// becomes a one-element list.
    pub fn into_body(self) -> Vec<TargetNode> {
        match self {
            Lowered::Single(node) => vec![node],
            Lowered::Sequence(nodes) => nodes,
        }
    }
}

/// Which lowering strategy applies to a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Strategy<'a> {
    Literal,
    Expression(&'a Invocation),
}

/// Classify a node by variant. `List` has no lowering of its own.
pub fn classify(node: &SourceNode) -> Result<Strategy<'_>, LoweringError> {
    match &node.kind {
        SourceKind::Symbol { .. }
        | SourceKind::String { .. }
        | SourceKind::Number { .. }
        | SourceKind::Bool { .. } => Ok(Strategy::Literal),
        SourceKind::Expression(inv) => Ok(Strategy::Expression(inv)),
        SourceKind::List { .. } => Err(LoweringError::unknown_variant(node)),
    }
}

#[derive(Debug, Clone)]
pub struct Lowerer {
    structural: FormRegistry<StructuralHandler>,
    special: FormRegistry<SpecialHandler>,
}

impl Lowerer {
    /// A lowerer with the default `def`/`defn` and operator/control forms.
    pub fn new() -> Self {
        Lowerer {
            structural: registry::default_structural_forms(),
            special: registry::default_special_forms(),
        }
    }

    pub fn with_forms(
        structural: FormRegistry<StructuralHandler>,
        special: FormRegistry<SpecialHandler>,
    ) -> Self {
        Lowerer { structural, special }
    }

    pub fn structural_forms(&self) -> &FormRegistry<StructuralHandler> {
        &self.structural
    }

    pub fn special_forms(&self) -> &FormRegistry<SpecialHandler> {
        &self.special
    }

    pub fn register_structural(&mut self, name: impl Into<String>, handler: StructuralHandler) {
        self.structural.register(name, handler);
    }

    pub fn register_special(&mut self, name: impl Into<String>, handler: SpecialHandler) {
        self.special.register(name, handler);
    }

    /// Lower any source node.
    pub fn lower(&self, node: &SourceNode) -> LowerResult {
        match classify(node)? {
            Strategy::Literal => lower_literal::lower_literal(node).map(Lowered::Single),
            Strategy::Expression(inv) => self.lower_expression(node, inv),
        }
    }

    /// Lower a node that must produce one expression (an operand, an argument,
    /// an assigned value).
    pub fn lower_expr(&self, node: &SourceNode, form: &str) -> Result<TargetNode, LoweringError> {
        self.lower(node).map_err(|e| e.inside(form))?.into_expr(form, node)
    }

    /// Dispatch a call expression: structural form, then special form, then
    /// a plain call.
    pub fn lower_expression(&self, node: &SourceNode, inv: &Invocation) -> LowerResult {
        let ctx = FormContext::new(node, inv);

        if let Some(handler) = self.structural.get(&inv.function) {
            debug!("lowering `{}` as a structural form", inv.function);
            return handler(self, ctx);
        }

        let children = self.lower_children(node)?;

        if let Some(handler) = self.special.get(&inv.function) {
            debug!("lowering `{}` as a special form ({} children)", inv.function, children.len());
            return handler(ctx, children);
        }

        lower_call(ctx, children).map(Lowered::Single)
    }

    /// Lower every child left to right. Failures without a form of their own
    /// are attributed to `node`'s head.
    pub fn lower_children(&self, node: &SourceNode) -> Result<Vec<Lowered>, LoweringError> {
        let head = node.invocation().map(|inv| inv.function.as_str());
        node.children()
            .iter()
            .map(|child| {
                self.lower(child).map_err(|e| match head {
                    Some(head) => e.inside(head),
                    None => e,
                })
            })
            .collect()
    }
}

impl Default for Lowerer {
    fn default() -> Self {
        Self::new()
    }
}

/// Plain function invocation: positional arguments only.
fn lower_call(ctx: FormContext<'_>, children: Vec<Lowered>) -> Result<TargetNode, LoweringError> {
    let args = children
        .into_iter()
        .map(|c| c.into_expr(ctx.form(), ctx.node))
        .collect::<Result<Vec<_>, _>>()?;
    let func = TargetNode::name(ctx.form(), ExprContext::Load).with_location(ctx.location());
    Ok(TargetNode::new(
        TargetKind::Call { func: Box::new(func), args },
        ctx.location(),
    ))
}
