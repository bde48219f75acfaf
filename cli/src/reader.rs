//! file: cli/src/reader.rs
//! description: reads surface syntax into source trees for the lowering core.
//!
//! Parsing is done by the pest grammar in `grammar.pest`; this module walks
//! the resulting pairs and builds `SourceNode`s carrying file/line/column
//! locations.
//!
use pest::Parser;
use pest::iterators::Pair;
use pest_derive::Parser;

use hyforge_core::tree::SourceNode;
use hyforge_core::{HyforgeErrorExt, Level, Location, Span};

use crate::script::Script;

#[derive(Parser)]
#[grammar = "grammar.pest"]
pub struct ReaderParser;

#[derive(Debug, Clone)]
pub struct ReadError {
    level: Level,
    message: String,
    issuer: String,
    location: Option<Location>,
    span: Option<Span>,
}

impl ReadError {
    pub fn with(message: String, issuer: String, location: Option<Location>, span: Option<Span>) -> Self {
        ReadError { level: Level::Error, message, issuer, location, span }
    }
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(loc) = &self.location {
            write!(f, "{} (at {})", self.message, loc)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for ReadError {}

impl HyforgeErrorExt for ReadError {
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

fn location_of(pair: &Pair<Rule>, script: &Script) -> Location {
    let (line, column) = pair.as_span().start_pos().line_col();
    Location::new(script.name.clone(), line, column)
}

fn span_of(pair: &Pair<Rule>, script: &Script) -> Span {
    let span = pair.as_span();
    let (start_line, start_col) = span.start_pos().line_col();
    let (end_line, end_col) = span.end_pos().line_col();
    Span::new(
        Location::new(script.name.clone(), start_line, start_col),
        Location::new(script.name.clone(), end_line, end_col),
    )
}

fn error_at(pair: &Pair<Rule>, script: &Script, message: String) -> Box<dyn HyforgeErrorExt> {
    Box::new(ReadError::with(
        message,
        "hyforge.reader".into(),
        Some(location_of(pair, script)),
        Some(span_of(pair, script)),
    ))
}

/// Read every top-level form of `script`, in order.
pub fn read_forest(script: &Script) -> Result<Vec<SourceNode>, Box<dyn HyforgeErrorExt>> {
    let mut pairs = ReaderParser::parse(Rule::program, &script.content).map_err(|e| {
        let (line, column) = match e.line_col {
            pest::error::LineColLocation::Pos(pos) => pos,
            pest::error::LineColLocation::Span(start, _) => start,
        };
        let err: Box<dyn HyforgeErrorExt> = Box::new(ReadError::with(
            format!("Syntax error: {}", e.variant.message()),
            "hyforge.reader".into(),
            Some(Location::new(script.name.clone(), line, column)),
            None,
        ));
        err
    })?;

    let Some(program) = pairs.next() else {
        return Ok(Vec::new());
    };

    program
        .into_inner()
        .filter(|p| p.as_rule() != Rule::EOI)
        .map(|p| read_form(p, script))
        .collect()
}

fn read_form(pair: Pair<Rule>, script: &Script) -> Result<SourceNode, Box<dyn HyforgeErrorExt>> {
    let location = location_of(&pair, script);
    let span = span_of(&pair, script);

    let node = match pair.as_rule() {
        Rule::expression => {
            let mut inner = pair.clone().into_inner();
            let head = match inner.next() {
                Some(h) if h.as_rule() == Rule::symbol => h.as_str().to_string(),
                Some(h) => {
                    return Err(error_at(&h, script, format!("Expression head must be a symbol, found `{}`.", h.as_str())));
                }
                None => return Err(error_at(&pair, script, "Empty expression `()`.".into())),
            };
            let args = inner.map(|p| read_form(p, script)).collect::<Result<Vec<_>, _>>()?;
            SourceNode::expression(head, args)
        }
        Rule::list => {
            let elements = pair
                .clone()
                .into_inner()
                .map(|p| read_form(p, script))
                .collect::<Result<Vec<_>, _>>()?;
            SourceNode::list(elements)
        }
        Rule::string => {
            let raw = pair.clone().into_inner().next().map(|p| p.as_str()).unwrap_or_default();
            SourceNode::string(unescape(raw))
        }
        Rule::boolean => SourceNode::boolean(pair.as_str() == "true"),
        Rule::number => read_number(&pair, script)?,
        Rule::symbol => SourceNode::symbol(pair.as_str()),
        other => {
            return Err(error_at(&pair, script, format!("Unexpected rule {:?}.", other)));
        }
    };

    Ok(node.with_location(location).with_span(span))
}

fn read_number(pair: &Pair<Rule>, script: &Script) -> Result<SourceNode, Box<dyn HyforgeErrorExt>> {
    let text = pair.as_str();
    if text.contains('.') {
        text.parse::<f64>()
            .map(SourceNode::float)
            .map_err(|_| error_at(pair, script, format!("Invalid float literal `{}`.", text)))
    } else {
        text.parse::<i64>()
            .map(SourceNode::int)
            .map_err(|_| error_at(pair, script, format!("Integer literal `{}` is out of range.", text)))
    }
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
