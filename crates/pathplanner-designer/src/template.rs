//! Typed code templates.
//!
//! A template such as `mech.spin({velocity}, {.ms = {duration}});` is parsed
//! once into literal and placeholder segments. A placeholder is `{name}`
//! where `name` is an identifier; any other brace (C++ blocks, designated
//! initialisers) is kept as literal text. Rendering walks the segments, so
//! a substituted value is never re-scanned for placeholders.

use pathplanner_core::TemplateError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A parameter value supplied to a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Bool(b) => write!(f, "{}", b),
            ParamValue::Int(i) => write!(f, "{}", i),
            ParamValue::Float(v) => write!(f, "{}", v),
            ParamValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Text(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Text(v)
    }
}

/// Parameter name → value, ordered for deterministic iteration.
pub type ParamValues = BTreeMap<String, ParamValue>;

/// One piece of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A parsed code template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct CodeTemplate {
    source: String,
    segments: Vec<Segment>,
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Outcome of scanning from an opening brace.
enum Scan {
    /// `{name}` ending at the given byte offset (exclusive).
    Placeholder(String, usize),
    /// Not a placeholder; the brace is literal.
    Literal,
    /// Input ended before a closing brace.
    Unterminated,
    /// `{1abc}`: closed, but the name is not an identifier.
    BadName(String),
}

fn scan_placeholder(source: &str, open: usize) -> Scan {
    let rest = &source[open + 1..];
    let Some(close) = rest.find(|c: char| !is_ident_char(c)) else {
        return Scan::Unterminated;
    };
    let name = &rest[..close];
    if name.is_empty() || !rest[close..].starts_with('}') {
        return Scan::Literal;
    }
    if name.chars().next().is_some_and(is_ident_start) {
        Scan::Placeholder(name.to_string(), open + 1 + close + 1)
    } else {
        Scan::BadName(name.to_string())
    }
}

impl CodeTemplate {
    /// Parses leniently: anything that is not a well-formed `{identifier}`
    /// stays literal.
    pub fn parse(source: &str) -> Self {
        Self::parse_inner(source, false).unwrap_or_else(|_| Self {
            source: source.to_string(),
            segments: vec![Segment::Literal(source.to_string())],
        })
    }

    /// Parses strictly, reporting unterminated or malformed placeholders.
    pub fn parse_strict(source: &str) -> Result<Self, TemplateError> {
        Self::parse_inner(source, true)
    }

    fn parse_inner(source: &str, strict: bool) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut pos = 0;

        while let Some(offset) = source[pos..].find('{') {
            let open = pos + offset;
            literal.push_str(&source[pos..open]);
            match scan_placeholder(source, open) {
                Scan::Placeholder(name, end) => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder(name));
                    pos = end;
                    continue;
                }
                Scan::Unterminated if strict => {
                    return Err(TemplateError::UnterminatedPlaceholder { offset: open });
                }
                Scan::BadName(name) if strict => {
                    return Err(TemplateError::InvalidName { name });
                }
                _ => {
                    literal.push('{');
                    pos = open + 1;
                }
            }
        }
        literal.push_str(&source[pos..]);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    /// The original template text.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Placeholder names in order of first appearance.
    pub fn placeholders(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for seg in &self.segments {
            if let Segment::Placeholder(name) = seg {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// Renders with the given values. A placeholder without a value is
    /// written back as `{name}` so the gap is visible in the output.
    pub fn render(&self, values: &ParamValues) -> String {
        let mut out = String::with_capacity(self.source.len());
        for seg in &self.segments {
            match seg {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => match values.get(name) {
                    Some(value) => out.push_str(&value.to_string()),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                },
            }
        }
        out
    }
}

impl From<String> for CodeTemplate {
    fn from(source: String) -> Self {
        Self::parse(&source)
    }
}

impl From<&str> for CodeTemplate {
    fn from(source: &str) -> Self {
        Self::parse(source)
    }
}

impl From<CodeTemplate> for String {
    fn from(template: CodeTemplate) -> Self {
        template.source
    }
}

impl fmt::Display for CodeTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
