/// Evaluator state and entry points.
///
/// Holds the tokenizer, the lookahead token and the collected diagnostics,
/// and exposes lenient and strict evaluation.
pub mod core;

/// Grammar rules.
///
/// One method per precedence level (expression, term, factor), each
/// evaluating the text it matches.
pub mod grammar;

/// Binary arithmetic operators.
///
/// Maps operator tokens to operators and applies them to operands.
pub mod binary;
