/// Numeric helpers.
///
/// Conversion routines shared by the lexer and evaluator, such as turning a
/// run of decimal digits into a floating-point value.
pub mod num;
