use thiserror::Error;

/// Represents all malformed-input conditions the evaluator can detect.
///
/// Every variant carries the byte offset in the source where the problem was
/// found. In lenient evaluation these are only collected as diagnostics; in
/// strict evaluation the first one is returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A token appeared where a number or `(` was required.
    #[error("Error at offset {offset}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// Description of the token encountered.
        token:  String,
        /// Byte offset of the token.
        offset: usize,
    },
    /// The input ended where a number or `(` was required.
    #[error("Error at offset {offset}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// Byte offset of the end of input.
        offset: usize,
    },
    /// A character outside the language was used as an operand.
    #[error("Error at offset {offset}: Invalid character {character:?}.")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character.
        offset:    usize,
    },
    /// A `(` was never matched by a `)`.
    #[error("Error at offset {offset}: Expected closing parenthesis ')' for the '(' at offset \
             {open} but none found.")]
    UnterminatedGroup {
        /// Byte offset of the opening parenthesis.
        open:   usize,
        /// Byte offset where the `)` was expected.
        offset: usize,
    },
    /// A `(` was opened deeper than the evaluator's nesting limit.
    #[error("Error at offset {offset}: Parentheses nested deeper than {limit} levels.")]
    NestingTooDeep {
        /// The nesting limit that was exceeded.
        limit:  usize,
        /// Byte offset of the `(` that went past the limit.
        offset: usize,
    },
    /// Tokens remained after a complete expression.
    #[error("Error at offset {offset}: Extra tokens after expression: {token}.")]
    UnexpectedTrailingTokens {
        /// Description of the first extra token.
        token:  String,
        /// Byte offset of the first extra token.
        offset: usize,
    },
}

impl ParseError {
    /// Byte offset in the source where the error was detected.
    ///
    /// # Example
    /// ```
    /// use arithex::error::ParseError;
    ///
    /// let err = ParseError::UnterminatedGroup { open: 0, offset: 2 };
    /// assert_eq!(err.offset(), 2);
    /// ```
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::UnexpectedToken { offset, .. }
            | Self::UnexpectedEndOfInput { offset }
            | Self::InvalidCharacter { offset, .. }
            | Self::UnterminatedGroup { offset, .. }
            | Self::NestingTooDeep { offset, .. }
            | Self::UnexpectedTrailingTokens { offset, .. } => *offset,
        }
    }
}
