//! file: core/src/target/op.rs
//! description: operator enums and the symbol tables that map surface
//! operator names onto them.
//!
use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// Arithmetic operators a variadic operator form folds into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOperator {
    Add, // +
    Sub, // -
    Mul, // *
    Div, // /
}

/// Comparison operators usable in a comparison chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompareOperator {
    Eq,    // ==
    NotEq, // !=
    Lt,    // <
    LtE,   // <=
    Gt,    // >
    GtE,   // >=
    In,    // in
    NotIn, // not-in
    Is,    // is
    IsNot, // is-not
}

/// How an identifier reference is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExprContext {
    Load,
    Store,
    Param,
}

lazy_static! {
    pub static ref BINARY_OPERATORS: HashMap<&'static str, BinaryOperator> = {
        let mut m = HashMap::new();
        m.insert("+", BinaryOperator::Add);
        m.insert("-", BinaryOperator::Sub);
        m.insert("*", BinaryOperator::Mul);
        m.insert("/", BinaryOperator::Div);
        m
    };
    pub static ref COMPARE_OPERATORS: HashMap<&'static str, CompareOperator> = {
        let mut m = HashMap::new();
        m.insert("==", CompareOperator::Eq);
        m.insert("!=", CompareOperator::NotEq);
        m.insert("<", CompareOperator::Lt);
        m.insert("<=", CompareOperator::LtE);
        m.insert(">", CompareOperator::Gt);
        m.insert(">=", CompareOperator::GtE);
        m.insert("in", CompareOperator::In);
        m.insert("not-in", CompareOperator::NotIn);
        m.insert("is", CompareOperator::Is);
        m.insert("is-not", CompareOperator::IsNot);
        m
    };
}

impl BinaryOperator {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        BINARY_OPERATORS.get(symbol).copied()
    }
}

impl CompareOperator {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        COMPARE_OPERATORS.get(symbol).copied()
    }
}

use std::fmt;

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
        };
        write!(f, "{}", s)
    }
}

impl fmt::Display for CompareOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CompareOperator::Eq => "==",
            CompareOperator::NotEq => "!=",
            CompareOperator::Lt => "<",
            CompareOperator::LtE => "<=",
            CompareOperator::Gt => ">",
            CompareOperator::GtE => ">=",
            CompareOperator::In => "in",
            CompareOperator::NotIn => "not in",
            CompareOperator::Is => "is",
            CompareOperator::IsNot => "is not",
        };
        write!(f, "{}", s)
    }
}
