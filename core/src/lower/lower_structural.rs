//! file: core/src/lower/lower_structural.rs
//! description: definition forms.
//!
//! `def` and `defn` have argument positions that are binding sites, not
//! expressions. They take those positions as raw token text through an
//! `ArgCursor` and lower only the value/body positions.
//!
use log::warn;

use crate::target::{ExprContext, TargetKind, TargetNode};
use crate::tree::SourceKind;

use super::form::FormContext;
use super::lower_literal::located;
use super::{LowerResult, Lowered, Lowerer};

/// `(def name value)` -> `name = value`
pub fn lower_def(lowerer: &Lowerer, ctx: FormContext<'_>) -> LowerResult {
    let mut cursor = ctx.cursor();
    let (name, name_node) = cursor.next_name("a symbol to bind")?;
    let value_node = cursor.next_arg()?;

    let extra = cursor.remaining().len();
    if extra > 0 {
        warn!("`def {}` ignores {} extra argument(s)", name, extra);
    }

    let value = lowerer.lower_expr(value_node, ctx.form())?;
    let target = located(TargetNode::name(name, ExprContext::Store), name_node.get_location());

    Ok(Lowered::Single(TargetNode::new(
        TargetKind::Assign { target: Box::new(target), value: Box::new(value) },
        ctx.location(),
    )))
}

/// `(defn name [params...] "doc"? body...)` -> `def name(params): body`
///
/// Only the last body form becomes the function body. When it is a `do`
/// sequence its statements are used directly.
pub fn lower_defn(lowerer: &Lowerer, ctx: FormContext<'_>) -> LowerResult {
    let mut cursor = ctx.cursor();
    let (name, _) = cursor.next_name("a function name")?;
    cursor.require_remaining(2)?;

    let params = cursor
        .next_name_list("a [parameter] list")?
        .into_iter()
        .map(|(param, node)| located(TargetNode::name(param, ExprContext::Param), node.get_location()))
        .collect::<Vec<_>>();

    let doc = cursor.next_if(|n| matches!(n.kind, SourceKind::String { .. }));

    let (_, body_forms) = cursor.split();
    let Some((last, earlier)) = body_forms.split_last() else {
        // a docstring with nothing after it
        return Err(ctx.arity_error(ctx.invocation.args.len() + 1, ctx.invocation.args.len()));
    };

    // every body form is lowered, only the last is kept
    for form in earlier {
        lowerer.lower(form).map_err(|e| e.inside(ctx.form()))?;
    }
    if !earlier.is_empty() {
        warn!("`defn {}` keeps only its last body form, dropping {}", name, earlier.len());
    }

    let mut body = lowerer.lower(last).map_err(|e| e.inside(ctx.form()))?.into_body();

    if let Some(doc) = doc {
        let text = doc.raw_text().unwrap_or_default();
        let doc_expr = located(TargetNode::str(text), doc.get_location());
        body.insert(
            0,
            TargetNode::new(TargetKind::Expr { value: Box::new(doc_expr) }, doc.location.clone()),
        );
    }

    Ok(Lowered::Single(TargetNode::new(
        TargetKind::FunctionDef { name, params, body },
        ctx.location(),
    )))
}
