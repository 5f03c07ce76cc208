/// Parsing errors.
///
/// Defines the malformed-input conditions detected while evaluating an
/// expression: unexpected tokens, invalid characters, unterminated groups and
/// trailing input.
pub mod parse_error;

pub use parse_error::ParseError;
