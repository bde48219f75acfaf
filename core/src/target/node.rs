//! file: core/src/target/node.rs
//! description: target tree node kinds.
//!
//! Defines `TargetKind` and the `TargetNode` wrapper that pairs a kind with
//! its (possibly backfilled) source location.
//!
use serde::{Deserialize, Serialize};

use crate::location::Location;
use crate::tree::Number;

use super::op::{BinaryOperator, CompareOperator, ExprContext};

/// Reserved identifier names booleans lower to.
pub const TRUE_NAME: &str = "True";
pub const FALSE_NAME: &str = "False";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "node")]
pub enum TargetKind {
    Name { id: String, ctx: ExprContext },
    Str { value: String },
    Num { value: Number },

    Call { func: Box<TargetNode>, args: Vec<TargetNode> },
    BinOp { left: Box<TargetNode>, op: BinaryOperator, right: Box<TargetNode> },
    Compare { left: Box<TargetNode>, ops: Vec<CompareOperator>, comparators: Vec<TargetNode> },

    If { test: Box<TargetNode>, body: Vec<TargetNode>, orelse: Vec<TargetNode> },
    Return { value: Box<TargetNode> },
    Assign { target: Box<TargetNode>, value: Box<TargetNode> },
    FunctionDef { name: String, params: Vec<TargetNode>, body: Vec<TargetNode> },
    Print { values: Vec<TargetNode>, newline: bool },
    /// An expression used in statement position (docstrings).
    Expr { value: Box<TargetNode> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetNode {
    pub kind: TargetKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl TargetNode {
    pub fn new(kind: TargetKind, location: Option<Location>) -> Self {
        TargetNode { kind, location }
    }

    pub fn name(id: impl Into<String>, ctx: ExprContext) -> Self {
        Self::new(TargetKind::Name { id: id.into(), ctx }, None)
    }

    pub fn str(value: impl Into<String>) -> Self {
        Self::new(TargetKind::Str { value: value.into() }, None)
    }

    pub fn num(value: Number) -> Self {
        Self::new(TargetKind::Num { value }, None)
    }

    pub fn with_location(mut self, location: Option<Location>) -> Self {
        self.location = location;
        self
    }

    pub fn get_kind(&self) -> &TargetKind {
        &self.kind
    }

    pub fn get_location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    /// Every direct child node, in source order.
    pub fn children(&self) -> Vec<&TargetNode> {
        match &self.kind {
            TargetKind::Name { .. } | TargetKind::Str { .. } | TargetKind::Num { .. } => Vec::new(),
            TargetKind::Call { func, args } => std::iter::once(func.as_ref()).chain(args.iter()).collect(),
            TargetKind::BinOp { left, right, .. } => vec![left.as_ref(), right.as_ref()],
            TargetKind::Compare { left, comparators, .. } => {
                std::iter::once(left.as_ref()).chain(comparators.iter()).collect()
            }
            TargetKind::If { test, body, orelse } => std::iter::once(test.as_ref())
                .chain(body.iter())
                .chain(orelse.iter())
                .collect(),
            TargetKind::Return { value } | TargetKind::Expr { value } => vec![value.as_ref()],
            TargetKind::Assign { target, value } => vec![target.as_ref(), value.as_ref()],
            TargetKind::FunctionDef { params, body, .. } => params.iter().chain(body.iter()).collect(),
            TargetKind::Print { values, .. } => values.iter().collect(),
        }
    }

    /// Mutable access to every direct child node, in source order.
    pub fn children_mut(&mut self) -> Vec<&mut TargetNode> {
        match &mut self.kind {
            TargetKind::Name { .. } | TargetKind::Str { .. } | TargetKind::Num { .. } => Vec::new(),
            TargetKind::Call { func, args } => {
                let mut out = vec![func.as_mut()];
                out.extend(args.iter_mut());
                out
            }
            TargetKind::BinOp { left, right, .. } => vec![left.as_mut(), right.as_mut()],
            TargetKind::Compare { left, comparators, .. } => {
                let mut out = vec![left.as_mut()];
                out.extend(comparators.iter_mut());
                out
            }
            TargetKind::If { test, body, orelse } => {
                let mut out = vec![test.as_mut()];
                out.extend(body.iter_mut());
                out.extend(orelse.iter_mut());
                out
            }
            TargetKind::Return { value } | TargetKind::Expr { value } => vec![value.as_mut()],
            TargetKind::Assign { target, value } => vec![target.as_mut(), value.as_mut()],
            TargetKind::FunctionDef { params, body, .. } => {
                params.iter_mut().chain(body.iter_mut()).collect()
            }
            TargetKind::Print { values, .. } => values.iter_mut().collect(),
        }
    }

    /// Parameter names of a function definition, in order.
    pub fn param_names(&self) -> Vec<&str> {
        match &self.kind {
            TargetKind::FunctionDef { params, .. } => params
                .iter()
                .filter_map(|p| match &p.kind {
                    TargetKind::Name { id, .. } => Some(id.as_str()),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Writes this node as a statement line (or block) at the given indent.
    pub(crate) fn write_stmt(&self, f: &mut std::fmt::Formatter<'_>, indent: usize) -> std::fmt::Result {
        let pad = "    ".repeat(indent);
        match &self.kind {
            TargetKind::If { test, body, orelse } => {
                writeln!(f, "{}if {}:", pad, test)?;
                write_block(f, body, indent + 1)?;
                if !orelse.is_empty() {
                    writeln!(f, "{}else:", pad)?;
                    write_block(f, orelse, indent + 1)?;
                }
                Ok(())
            }
            TargetKind::FunctionDef { name, params, body } => {
                write!(f, "{}def {}(", pad, name)?;
                write_comma_separated(f, params)?;
                writeln!(f, "):")?;
                write_block(f, body, indent + 1)
            }
            TargetKind::Return { value } => writeln!(f, "{}return {}", pad, value),
            TargetKind::Assign { target, value } => writeln!(f, "{}{} = {}", pad, target, value),
            TargetKind::Print { values, newline } => {
                write!(f, "{}print ", pad)?;
                write_comma_separated(f, values)?;
                if !newline {
                    write!(f, ",")?;
                }
                writeln!(f)
            }
            TargetKind::Expr { value } => writeln!(f, "{}{}", pad, value),
            _ => writeln!(f, "{}{}", pad, self),
        }
    }
}

fn write_block(f: &mut std::fmt::Formatter<'_>, body: &[TargetNode], indent: usize) -> std::fmt::Result {
    if body.is_empty() {
        return writeln!(f, "{}pass", "    ".repeat(indent));
    }
    for stmt in body {
        stmt.write_stmt(f, indent)?;
    }
    Ok(())
}

fn write_comma_separated(f: &mut std::fmt::Formatter<'_>, nodes: &[TargetNode]) -> std::fmt::Result {
    for (i, n) in nodes.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", n)?;
    }
    Ok(())
}

fn write_operand(f: &mut std::fmt::Formatter<'_>, node: &TargetNode) -> std::fmt::Result {
    match &node.kind {
        TargetKind::BinOp { .. } | TargetKind::Compare { .. } => write!(f, "({})", node),
        _ => write!(f, "{}", node),
    }
}

use std::fmt;

/// Expression rendering. Statement kinds render as their first line only;
/// use `ProgramUnit`'s `Display` for full listings.
impl fmt::Display for TargetNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TargetKind::Name { id, .. } => write!(f, "{}", id),
            TargetKind::Str { value } => write!(f, "{:?}", value),
            TargetKind::Num { value } => write!(f, "{}", value),
            TargetKind::Call { func, args } => {
                write!(f, "{}(", func)?;
                write_comma_separated(f, args)?;
                write!(f, ")")
            }
            TargetKind::BinOp { left, op, right } => {
                write_operand(f, left)?;
                write!(f, " {} ", op)?;
                write_operand(f, right)
            }
            TargetKind::Compare { left, ops, comparators } => {
                write_operand(f, left)?;
                for (op, c) in ops.iter().zip(comparators.iter()) {
                    write!(f, " {} ", op)?;
                    write_operand(f, c)?;
                }
                Ok(())
            }
            TargetKind::If { test, .. } => write!(f, "if {}: ...", test),
            TargetKind::Return { value } => write!(f, "return {}", value),
            TargetKind::Assign { target, value } => write!(f, "{} = {}", target, value),
            TargetKind::FunctionDef { name, params, .. } => {
                write!(f, "def {}(", name)?;
                write_comma_separated(f, params)?;
                write!(f, "): ...")
            }
            TargetKind::Print { values, .. } => {
                write!(f, "print ")?;
                write_comma_separated(f, values)
            }
            TargetKind::Expr { value } => write!(f, "{}", value),
        }
    }
}
