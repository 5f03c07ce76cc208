/// Accumulates a run of ASCII decimal digits into an `f64`.
///
/// Digits are folded left to right as `value * 10 + digit`. There is no
/// overflow guard: long runs follow `f64` rounding and eventually saturate to
/// infinity. Non-digit bytes are not expected; the lexer only passes slices
/// matched by `[0-9]+`.
///
/// ## Parameters
/// - `digits`: The digit run to convert.
///
/// ## Returns
/// The accumulated value.
///
/// ## Example
/// ```
/// use arithex::util::num::accumulate_digits;
///
/// assert_eq!(accumulate_digits("123"), 123.0);
/// assert_eq!(accumulate_digits("007"), 7.0);
/// assert!(accumulate_digits(&"9".repeat(400)).is_infinite());
/// ```
#[must_use]
#[allow(clippy::suboptimal_flops)]
pub fn accumulate_digits(digits: &str) -> f64 {
    digits.bytes()
          .filter(u8::is_ascii_digit)
          .fold(0.0, |value, digit| value * 10.0 + f64::from(digit - b'0'))
}
