//! file: core/src/lower/form.rs
//! description: per-form context and the argument cursor structural forms
//! use to walk their raw argument list.
//!
//! Structural forms never mutate the source tree. They read name and
//! signature positions through an `ArgCursor` over the borrowed argument
//! slice, then lower only what is left.
//!
use crate::location::Location;
use crate::tree::{Invocation, SourceKind, SourceNode};

use super::err::LoweringError;

/// The call expression a form handler was dispatched for.
#[derive(Debug, Clone, Copy)]
pub struct FormContext<'a> {
    pub node: &'a SourceNode,
    pub invocation: &'a Invocation,
}

impl<'a> FormContext<'a> {
    pub fn new(node: &'a SourceNode, invocation: &'a Invocation) -> Self {
        FormContext { node, invocation }
    }

    /// Head symbol of the form.
    pub fn form(&self) -> &'a str {
        &self.invocation.function
    }

    pub fn location(&self) -> Option<Location> {
        self.node.location.clone()
    }

    pub fn cursor(&self) -> ArgCursor<'a> {
        ArgCursor::new(self.form(), self.node, &self.invocation.args)
    }

    pub fn arity_error(&self, expected: usize, found: usize) -> LoweringError {
        LoweringError::arity(self.form(), expected, found, self.node)
    }
}

/// Read-only cursor over a form's raw arguments.
#[derive(Debug, Clone)]
pub struct ArgCursor<'a> {
    form: &'a str,
    owner: &'a SourceNode,
    args: &'a [SourceNode],
    pos: usize,
}

impl<'a> ArgCursor<'a> {
    pub fn new(form: &'a str, owner: &'a SourceNode, args: &'a [SourceNode]) -> Self {
        ArgCursor { form, owner, args, pos: 0 }
    }

    pub fn peek(&self) -> Option<&'a SourceNode> {
        self.args.get(self.pos)
    }

    /// Take the next argument, failing with an arity error naming the form.
    pub fn next_arg(&mut self) -> Result<&'a SourceNode, LoweringError> {
        match self.args.get(self.pos) {
            Some(node) => {
                self.pos += 1;
                Ok(node)
            }
            None => Err(LoweringError::arity(self.form, self.pos + 1, self.args.len(), self.owner)),
        }
    }

    /// Take the next argument only when it satisfies `pred`.
    pub fn next_if(&mut self, pred: impl Fn(&SourceNode) -> bool) -> Option<&'a SourceNode> {
        let node = self.peek().filter(|n| pred(*n))?;
        self.pos += 1;
        Some(node)
    }

    /// Take the next argument as raw token text (a binding site, not an expression).
    pub fn next_name(&mut self, what: &str) -> Result<(String, &'a SourceNode), LoweringError> {
        let node = self.next_arg()?;
        match node.raw_text() {
            Some(text) => Ok((text, node)),
            None => Err(LoweringError::malformed(self.form, what, node)),
        }
    }

    /// Take the next argument as a bracketed list of raw names.
    pub fn next_name_list(&mut self, what: &str) -> Result<Vec<(String, &'a SourceNode)>, LoweringError> {
        let node = self.next_arg()?;
        let SourceKind::List { elements } = &node.kind else {
            return Err(LoweringError::malformed(self.form, what, node));
        };
        elements
            .iter()
            .map(|e| match e.raw_text() {
                Some(text) => Ok((text, e)),
                None => Err(LoweringError::malformed(self.form, what, e)),
            })
            .collect()
    }

    /// Fail unless at least `count` arguments are still unread.
    pub fn require_remaining(&self, count: usize) -> Result<(), LoweringError> {
        if self.remaining().len() < count {
            return Err(LoweringError::arity(self.form, self.pos + count, self.args.len(), self.owner));
        }
        Ok(())
    }

    pub fn remaining(&self) -> &'a [SourceNode] {
        &self.args[self.pos..]
    }

    /// Consume the cursor, returning (consumed prefix, remaining suffix).
    pub fn split(self) -> (&'a [SourceNode], &'a [SourceNode]) {
        self.args.split_at(self.pos)
    }
}
