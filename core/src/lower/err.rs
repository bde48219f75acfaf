use crate::error::{HyforgeErrorExt, Level};
use crate::location::{Location, Span};
use crate::tree::SourceNode;

/// What went wrong while lowering. Every kind is fatal for the whole pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoweringErrorKind {
    /// A node variant with no lowering entry reached the classifier.
    UnknownLiteralVariant,
    /// A form received fewer arguments than it requires.
    ArityError,
    /// An operator form was dispatched but its symbol is not in the operator table.
    UnboundOperator,
    /// A `do` sequence was used where a single expression is required.
    UnexpectedSequence,
    /// A name or parameter position holds a node with no raw token text.
    MalformedForm,
}

impl std::fmt::Display for LoweringErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LoweringErrorKind::UnknownLiteralVariant => "unknown literal variant",
            LoweringErrorKind::ArityError => "arity error",
            LoweringErrorKind::UnboundOperator => "unbound operator",
            LoweringErrorKind::UnexpectedSequence => "unexpected sequence",
            LoweringErrorKind::MalformedForm => "malformed form",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone)]
pub struct LoweringError {
    kind: LoweringErrorKind,
    form: Option<String>,
    level: Level,
    message: String,
    issuer: String,
    location: Option<Location>,
    span: Option<Span>,
}

impl LoweringError {
    pub fn with(
        kind: LoweringErrorKind,
        form: Option<String>,
        message: String,
        issuer: String,
        node: Option<&SourceNode>,
    ) -> Self {
        let level = match kind {
            LoweringErrorKind::UnboundOperator => Level::Critical,
            _ => Level::Error,
        };
        LoweringError {
            kind,
            form,
            level,
            message,
            issuer,
            location: node.and_then(|n| n.location.clone()),
            span: node.and_then(|n| n.span.clone()),
        }
    }

    pub fn unknown_variant(node: &SourceNode) -> Self {
        Self::with(
            LoweringErrorKind::UnknownLiteralVariant,
            None,
            format!("No lowering exists for a bare {} node.", node.kind.variant_name()),
            "hyforge.lower.classify".into(),
            Some(node),
        )
    }

    pub fn arity(form: &str, expected: usize, found: usize, node: &SourceNode) -> Self {
        Self::with(
            LoweringErrorKind::ArityError,
            Some(form.to_string()),
            format!("`{}` expects at least {} argument(s), found {}.", form, expected, found),
            format!("hyforge.lower.{}", form),
            Some(node),
        )
    }

    pub fn unbound_operator(form: &str, node: &SourceNode) -> Self {
        Self::with(
            LoweringErrorKind::UnboundOperator,
            Some(form.to_string()),
            format!("`{}` was dispatched as an operator but has no operator table entry.", form),
            "hyforge.lower.special".into(),
            Some(node),
        )
    }

    pub fn unexpected_sequence(form: &str, node: &SourceNode) -> Self {
        Self::with(
            LoweringErrorKind::UnexpectedSequence,
            Some(form.to_string()),
            format!("`{}` needs a single expression here but got a `do` sequence.", form),
            format!("hyforge.lower.{}", form),
            Some(node),
        )
    }

    pub fn malformed(form: &str, what: &str, node: &SourceNode) -> Self {
        Self::with(
            LoweringErrorKind::MalformedForm,
            Some(form.to_string()),
            format!("`{}` expects {}, found {}.", form, what, node),
            format!("hyforge.lower.{}", form),
            Some(node),
        )
    }

    /// Attribute an error raised below any form to the enclosing form `form`.
    pub fn inside(mut self, form: &str) -> Self {
        if self.form.is_none() {
            self.message = format!("{} Found inside `{}`.", self.message, form);
            self.form = Some(form.to_string());
        }
        self
    }

    pub fn kind(&self) -> LoweringErrorKind {
        self.kind
    }

    /// Head symbol of the form that failed, when the failure happened inside one.
    pub fn form(&self) -> Option<&str> {
        self.form.as_deref()
    }
}

impl std::fmt::Display for LoweringError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(loc) = &self.location {
            write!(f, "{}: {} (at {})", self.kind, self.message, loc)
        } else {
            write!(f, "{}: {}", self.kind, self.message)
        }
    }
}

impl std::error::Error for LoweringError {}

impl HyforgeErrorExt for LoweringError {
    fn level(&self) -> Level {
        self.level
    }

    fn message(&self) -> String {
        self.message.clone()
    }

    fn issuer(&self) -> String {
        self.issuer.clone()
    }

    fn span(&self) -> Option<Span> {
        self.span.clone()
    }

    fn location(&self) -> Option<Location> {
        self.location.clone()
    }
}

impl From<LoweringError> for Box<dyn HyforgeErrorExt> {
    fn from(err: LoweringError) -> Self {
        Box::new(err)
    }
}
