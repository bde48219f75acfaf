//! file: core/src/lower/registry.rs
//! description: name-keyed tables of form handlers.
//!
//! The dispatcher consults two registries: structural forms (raw arguments)
//! first, special forms (lowered arguments) second. Both are plain data, so
//! callers can add or replace forms without touching the dispatcher.
//!
use std::collections::HashMap;

use super::form::FormContext;
use super::{LowerResult, Lowered, Lowerer};

/// Handler for a form that must see its arguments before they are lowered.
pub type StructuralHandler = fn(&Lowerer, FormContext<'_>) -> LowerResult;

/// Handler for a form that receives its arguments already lowered, left to right.
pub type SpecialHandler = fn(FormContext<'_>, Vec<Lowered>) -> LowerResult;

#[derive(Debug, Clone)]
pub struct FormRegistry<H> {
    handlers: HashMap<String, H>,
}

impl<H: Copy> FormRegistry<H> {
    pub fn new() -> Self {
        FormRegistry { handlers: HashMap::new() }
    }

    /// Register `handler` under `name`, returning the handler it replaced.
    pub fn register(&mut self, name: impl Into<String>, handler: H) -> Option<H> {
        self.handlers.insert(name.into(), handler)
    }

    pub fn unregister(&mut self, name: &str) -> Option<H> {
        self.handlers.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<H> {
        self.handlers.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Registered form names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<H: Copy> Default for FormRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}

/// `def` and `defn`.
pub fn default_structural_forms() -> FormRegistry<StructuralHandler> {
    use super::lower_structural as s;

    let mut reg: FormRegistry<StructuralHandler> = FormRegistry::new();
    reg.register("def", s::lower_def);
    reg.register("defn", s::lower_defn);
    reg
}

/// `print`, the arithmetic and comparison operators, `if`, `do` and `return`.
pub fn default_special_forms() -> FormRegistry<SpecialHandler> {
    use super::lower_special as s;
    use crate::target::op::{BINARY_OPERATORS, COMPARE_OPERATORS};

    let mut reg: FormRegistry<SpecialHandler> = FormRegistry::new();
    reg.register("print", s::lower_print);
    for symbol in BINARY_OPERATORS.keys() {
        reg.register(*symbol, s::lower_binop);
    }
    for symbol in COMPARE_OPERATORS.keys() {
        reg.register(*symbol, s::lower_compare);
    }
    reg.register("if", s::lower_if);
    reg.register("do", s::lower_do);
    reg.register("return", s::lower_return);
    reg
}
