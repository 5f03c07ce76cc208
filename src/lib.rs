//! # arithex
//!
//! arithex evaluates arithmetic expressions written with integers, `+ - * /`
//! and parentheses. A pull-based tokenizer feeds a recursive-descent
//! evaluator that computes the result while it parses; no syntax tree is
//! built.

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
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::ParseError,
    interpreter::{evaluator::core::Evaluator, lexer::Tokenizer},
};

/// Provides the error type for malformed input.
///
/// This module defines every condition the evaluator can detect in malformed
/// input, each with the byte offset where it was found. The errors are
/// collected as diagnostics in lenient mode and returned in strict mode.
pub mod error;
/// Tokenizing and evaluation.
///
/// This module ties the lexer and the evaluator together. The evaluator pulls
/// tokens from the lexer with a single token of lookahead.
pub mod interpreter;
/// General numeric helpers.
pub mod util;

/// How malformed input is handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Recover and always produce a number. Unusable factors count as `0`
    /// and a missing `)` is ignored.
    #[default]
    Lenient,
    /// Reject the input on the first problem.
    Strict,
}

/// Evaluates `source` and always returns a number.
///
/// Malformed input is recovered from rather than rejected, so the result of a
/// malformed expression may be meaningless. Use [`try_evaluate`] to reject it
/// instead.
///
/// # Examples
/// ```
/// use arithex::evaluate;
///
/// assert_eq!(evaluate("3 + 5 * 2"), 13.0);
/// assert_eq!(evaluate("20 / (4 + 1)"), 4.0);
///
/// // Malformed input still yields a number.
/// assert_eq!(evaluate("+"), 0.0);
/// assert_eq!(evaluate("(3"), 3.0);
/// ```
#[must_use]
pub fn evaluate(source: &str) -> f64 {
    Evaluator::new(Tokenizer::new(source)).parse()
}

/// Evaluates `source`, rejecting malformed input.
///
/// # Errors
/// Returns the first problem found in `source`.
///
/// # Examples
/// ```
/// use arithex::{error::ParseError, try_evaluate};
///
/// assert_eq!(try_evaluate("((10 - 4) * 2)"), Ok(12.0));
/// assert!(matches!(try_evaluate("2 * "),
///                  Err(ParseError::UnexpectedEndOfInput { offset: 4 })));
/// ```
pub fn try_evaluate(source: &str) -> Result<f64, ParseError> {
    Evaluator::new(Tokenizer::new(source)).try_parse()
}

/// Evaluates `source` with the given [`Mode`].
///
/// # Errors
/// In [`Mode::Strict`], returns the first problem found in `source`. In
/// [`Mode::Lenient`] this never fails.
pub fn evaluate_with(source: &str, mode: Mode) -> Result<f64, ParseError> {
    match mode {
        Mode::Lenient => Ok(evaluate(source)),
        Mode::Strict => try_evaluate(source),
    }
}
