//! # calcexpr
//!
//! calcexpr evaluates arithmetic and logical expressions over doubles.
//! It supports persistent variables with compound assignment, comparisons
//! and logical operators yielding `1`/`0`, the comma operator, and a fixed
//! catalogue of builtin functions such as `sqrt`, `min`, `mod` and `if`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc, clippy::float_cmp)]

/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can abort an evaluation. Each error
/// carries the byte offset where it was detected, and its display text is
/// the message a session reports after a failure.
///
/// # Responsibilities
/// - Defines error enums for syntax and runtime failures.
/// - Wraps both in a single type propagated by every grammar level.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the evaluation of expressions.
///
/// This module ties together the lexer, the evaluator, the symbol table and
/// the builtin functions, and exposes the session used by front ends.
///
/// # Responsibilities
/// - Coordinates the lexer, evaluator and variable store.
/// - Provides entry points for evaluating user input.
/// - Manages the state that persists between evaluations.
pub mod interpreter;
/// General utilities for numeric conversion and formatting.
///
/// # Responsibilities
/// - Convert doubles to integer counts without undefined behaviour.
/// - Format results with a fixed number of significant digits.
pub mod util;

pub use error::EvalError;
pub use interpreter::session::{Session, SessionConfig};

/// Evaluates a single expression in a fresh session.
///
/// Variables assigned by the expression are discarded afterwards. Use a
/// [`Session`] to keep them between evaluations.
///
/// # Errors
/// Returns the first syntax or runtime error encountered.
///
/// # Examples
/// ```
/// use calcexpr::evaluate;
///
/// assert_eq!(evaluate("2 + 3 * 6").unwrap(), 20.0);
/// assert_eq!(evaluate("if(1 < 2, 22, 33)").unwrap(), 22.0);
///
/// // Division by zero is an error, not an infinity.
/// assert!(evaluate("2 / 0").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<f64, EvalError> {
    Session::new().try_evaluate(source)
}
