//! REM condition parsing.
//!
//! A condition is a single token `<field><op><value>` with `op` one of
//! `>`, `<`, `=`. Operators are scanned in that fixed order and the first one
//! present wins, regardless of where it sits in the token: `a=b>c` is a `>`
//! comparison of field `a=b` against `c`.

use std::fmt;

use crate::error::{CommandError, Result};
use crate::record::{OWNER_NAME, SHIFT_AMOUNT, SOURCE_TEXT};

/// External condition vocabulary and the record field each name maps to.
const FIELD_ALIASES: &[(&str, &str)] = &[
    ("owner", OWNER_NAME),
    ("text", SOURCE_TEXT),
    ("shift", SHIFT_AMOUNT),
];

/// Comparison operator of a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Gt,
    Lt,
    Eq,
}

impl Operator {
    /// Order used when scanning a condition.
    const SCAN_ORDER: [Operator; 3] = [Operator::Gt, Operator::Lt, Operator::Eq];

    pub fn symbol(&self) -> char {
        match self {
            Operator::Gt => '>',
            Operator::Lt => '<',
            Operator::Eq => '=',
        }
    }

    /// First operator present anywhere in `text`, by scan order, with the
    /// byte index of its first occurrence.
    fn detect(text: &str) -> Option<(Self, usize)> {
        Self::SCAN_ORDER
            .into_iter()
            .find_map(|op| text.find(op.symbol()).map(|idx| (op, idx)))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A parsed REM condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    /// Record field name after alias resolution.
    pub field: String,
    pub op: Operator,
    /// Right-hand operand, still unparsed.
    pub value: String,
}

impl Condition {
    pub fn new(field: impl Into<String>, op: Operator, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            op,
            value: value.into(),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.field, self.op, self.value)
    }
}

/// Map an external field name to the record field it refers to.
///
/// Names without an alias are returned unchanged.
pub fn resolve_field(name: &str) -> &str {
    FIELD_ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map_or(name, |(_, field)| *field)
}

/// Parse a condition token.
///
/// The token is split on the first occurrence of the detected operator.
pub fn parse_condition(raw: &str) -> Result<Condition> {
    let (op, idx) =
        Operator::detect(raw).ok_or_else(|| CommandError::NoOperator(raw.to_string()))?;

    let field = &raw[..idx];
    let value = &raw[idx + op.symbol().len_utf8()..];

    Ok(Condition::new(resolve_field(field), op, value))
}
