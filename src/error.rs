/// Syntax errors.
///
/// Defines all error types that can occur while scanning or parsing an
/// expression: unexpected tokens, malformed literals, unknown characters,
/// unbalanced parentheses and text left over after a complete expression.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while computing a value: division by zero,
/// calls to unknown functions and out-of-range builtin arguments.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
use thiserror::Error;

/// Any failure that aborts an evaluation.
///
/// Every grammar level returns this error through `?`, so the first problem
/// detected unwinds straight to the session without running any further code
/// for that expression.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// The expression text is not well formed.
    #[error("Error! {0}")]
    Parse(#[from] ParseError),
    /// The expression is well formed but could not be computed.
    #[error("Error! {0}")]
    Runtime(#[from] RuntimeError),
}

impl EvalError {
    /// Byte offset in the source text where the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Parse(e) => e.position(),
            Self::Runtime(e) => e.position(),
        }
    }

    /// Returns `true` for syntax errors.
    #[must_use]
    pub const fn is_syntax(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}
