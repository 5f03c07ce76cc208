/// The evaluator module parses tokens and computes results in one pass.
///
/// A recursive-descent grammar pulls tokens from the lexer one at a time and
/// evaluates as it goes, so no syntax tree is ever built.
///
/// # Responsibilities
/// - Encodes operator precedence and grouping through grammar rule nesting.
/// - Applies arithmetic operators left to right within a precedence level.
/// - Recovers from malformed input and records what went wrong.
pub mod evaluator;
/// The lexer module tokenizes source text on demand.
///
/// The lexer reads the raw source text and produces one token per request:
/// numbers, operators, parentheses, an end-of-input marker, or an invalid
/// marker for unknown characters.
///
/// # Responsibilities
/// - Skips whitespace between tokens.
/// - Converts digit runs into numeric values.
/// - Never fails; unknown characters become invalid tokens.
pub mod lexer;
