//! file: core/src/lower/lower_special.rs
//! description: forms whose arguments are ordinary expressions but whose
//! result is not a call.
//!
//! Every handler receives the call's children already lowered, in order.
//!
use log::warn;

use crate::target::{BinaryOperator, CompareOperator, TargetKind, TargetNode};

use super::err::LoweringError;
use super::form::FormContext;
use super::{LowerResult, Lowered};

fn exprs(
    ctx: &FormContext<'_>,
    children: impl IntoIterator<Item = Lowered>,
) -> Result<Vec<TargetNode>, LoweringError> {
    children
        .into_iter()
        .map(|c| c.into_expr(ctx.form(), ctx.node))
        .collect()
}

fn single(ctx: &FormContext<'_>, kind: TargetKind) -> LowerResult {
    Ok(Lowered::Single(TargetNode::new(kind, ctx.location())))
}

/// `(print a b ...)`
pub fn lower_print(ctx: FormContext<'_>, children: Vec<Lowered>) -> LowerResult {
    let values = exprs(&ctx, children)?;
    single(&ctx, TargetKind::Print { values, newline: true })
}

/// `(+ a b c)` -> `(a + b) + c`
pub fn lower_binop(ctx: FormContext<'_>, children: Vec<Lowered>) -> LowerResult {
    let op = BinaryOperator::from_symbol(ctx.form())
        .ok_or_else(|| LoweringError::unbound_operator(ctx.form(), ctx.node))?;

    let found = children.len();
    let mut operands = children.into_iter();
    let (Some(first), Some(second)) = (operands.next(), operands.next()) else {
        return Err(ctx.arity_error(2, found));
    };

    let first = first.into_expr(ctx.form(), ctx.node)?;
    let folded = std::iter::once(second).chain(operands).try_fold(first, |left, right| {
        let right = right.into_expr(ctx.form(), ctx.node)?;
        Ok::<_, LoweringError>(TargetNode::new(
            TargetKind::BinOp { left: Box::new(left), op, right: Box::new(right) },
            ctx.location(),
        ))
    })?;
    Ok(Lowered::Single(folded))
}

/// `(< a b c)` -> `a < b < c`; one operator, repeated per comparator.
pub fn lower_compare(ctx: FormContext<'_>, children: Vec<Lowered>) -> LowerResult {
    let op = CompareOperator::from_symbol(ctx.form())
        .ok_or_else(|| LoweringError::unbound_operator(ctx.form(), ctx.node))?;

    let found = children.len();
    let mut operands = children.into_iter();
    let (Some(left), Some(first)) = (operands.next(), operands.next()) else {
        return Err(ctx.arity_error(2, found));
    };

    let left = left.into_expr(ctx.form(), ctx.node)?;
    let comparators = exprs(&ctx, std::iter::once(first).chain(operands))?;
    let ops = vec![op; comparators.len()];
    single(&ctx, TargetKind::Compare { left: Box::new(left), ops, comparators })
}

/// `(if test then else)`
pub fn lower_if(ctx: FormContext<'_>, children: Vec<Lowered>) -> LowerResult {
    let found = children.len();
    let mut it = children.into_iter();
    let (Some(test), Some(then), Some(orelse)) = (it.next(), it.next(), it.next()) else {
        return Err(ctx.arity_error(3, found));
    };
    if found > 3 {
        warn!("`if` ignores {} extra argument(s)", found - 3);
    }

    let test = test.into_expr(ctx.form(), ctx.node)?;
    single(
        &ctx,
        TargetKind::If { test: Box::new(test), body: then.into_body(), orelse: orelse.into_body() },
    )
}

/// `(do a b ...)` yields its children as one flat statement sequence.
pub fn lower_do(_ctx: FormContext<'_>, children: Vec<Lowered>) -> LowerResult {
    Ok(Lowered::Sequence(children.into_iter().flat_map(Lowered::into_body).collect()))
}

/// `(return ... value)`; only the last value is returned.
pub fn lower_return(ctx: FormContext<'_>, mut children: Vec<Lowered>) -> LowerResult {
    let Some(last) = children.pop() else {
        return Err(ctx.arity_error(1, 0));
    };
    if !children.is_empty() {
        warn!("`return` discards {} leading argument(s)", children.len());
    }
    let value = last.into_expr(ctx.form(), ctx.node)?;
    single(&ctx, TargetKind::Return { value: Box::new(value) })
}
