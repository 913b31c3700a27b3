//! Diagnostics produced while interpreting commands.
//!
//! Every variant is recoverable: the offending command is skipped and the
//! record collection is left exactly as it was.

use thiserror::Error;

/// A rejected ADD or REM command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// A required `key=value` argument is absent or empty.
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    /// A numeric argument did not parse as an integer.
    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    /// The `type` argument names no known record variant.
    #[error("unknown record type '{0}'")]
    UnknownType(String),

    /// The REM condition contains none of `>`, `<`, `=`.
    #[error("no comparison operator (>, <, =) in condition '{0}'")]
    NoOperator(String),

    /// REM was given without a condition.
    #[error("REM requires a condition")]
    MissingCondition,
}

pub type Result<T> = std::result::Result<T, CommandError>;
