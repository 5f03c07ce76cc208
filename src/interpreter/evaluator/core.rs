use std::ops::Range;

use crate::{
    error::ParseError,
    interpreter::lexer::{Token, Tokenizer},
};

/// Result type used by strict evaluation.
pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest parenthesis nesting the evaluator will descend into.
pub const MAX_DEPTH: usize = 256;

/// Evaluates an expression while parsing it.
///
/// The evaluator owns a [`Tokenizer`] and a single lookahead slot. The
/// lookahead always holds the next token the grammar has not consumed yet;
/// [`Evaluator::advance`] replaces it with a fresh token from the tokenizer.
/// No syntax tree is built: each grammar rule returns the value of the text
/// it matched.
///
/// Malformed input never aborts evaluation. Each problem is logged and kept
/// in [`Evaluator::diagnostics`], and the grammar carries on with a fallback
/// value. [`Evaluator::try_parse`] turns the first diagnostic into an error.
///
/// Groups nest at most [`MAX_DEPTH`] deep; a deeper group is reported and
/// skipped, which keeps the call stack bounded for any input.
///
/// An evaluator is single-use: it evaluates the source it was built with
/// once.
pub struct Evaluator<'s> {
    tokenizer:   Tokenizer<'s>,
    current:     Token,
    span:        Range<usize>,
    depth:       usize,
    diagnostics: Vec<ParseError>,
}

impl<'s> Evaluator<'s> {
    /// Creates an evaluator and pulls the first token into the lookahead.
    #[must_use]
    pub fn new(mut tokenizer: Tokenizer<'s>) -> Self {
        let current = tokenizer.next_token();
        let span = tokenizer.token_span();

        Self { tokenizer,
               current,
               span,
               depth: 0,
               diagnostics: Vec::new() }
    }

    /// Evaluates the whole input and returns its value.
    ///
    /// Always produces a number. Malformed input is recovered from as
    /// described on [`Evaluator`]; check [`Evaluator::diagnostics`] to learn
    /// whether that happened.
    ///
    /// # Example
    /// ```
    /// use arithex::interpreter::{evaluator::core::Evaluator, lexer::Tokenizer};
    ///
    /// let mut evaluator = Evaluator::new(Tokenizer::new("(3 + 5) * 2"));
    /// assert_eq!(evaluator.parse(), 16.0);
    /// assert!(evaluator.diagnostics().is_empty());
    /// ```
    pub fn parse(&mut self) -> f64 {
        let value = self.expression();

        if !self.current.is_end() {
            let error = self.invalid_character().unwrap_or_else(|| {
                             ParseError::UnexpectedTrailingTokens { token:  self.current.to_string(),
                                                                    offset: self.span.start, }
                         });
            self.report(error);
        }

        value
    }

    /// Evaluates the whole input, rejecting any malformed input.
    ///
    /// # Errors
    /// Returns the first problem found while evaluating, if any.
    ///
    /// # Example
    /// ```
    /// use arithex::{
    ///     error::ParseError,
    ///     interpreter::{evaluator::core::Evaluator, lexer::Tokenizer},
    /// };
    ///
    /// let mut evaluator = Evaluator::new(Tokenizer::new("(3"));
    /// assert_eq!(evaluator.try_parse(),
    ///            Err(ParseError::UnterminatedGroup { open: 0, offset: 2 }));
    /// ```
    pub fn try_parse(&mut self) -> ParseResult<f64> {
        let value = self.parse();

        match self.diagnostics.first() {
            Some(error) => Err(error.clone()),
            None => Ok(value),
        }
    }

    /// Problems recovered from so far, in the order they were found.
    #[must_use]
    pub fn diagnostics(&self) -> &[ParseError] {
        &self.diagnostics
    }

    /// The lookahead token.
    #[must_use]
    pub const fn current(&self) -> Token {
        self.current
    }

    /// Replaces the lookahead with the next token from the tokenizer.
    pub fn advance(&mut self) {
        self.current = self.tokenizer.next_token();
        self.span = self.tokenizer.token_span();
    }

    /// Byte offset of the lookahead token.
    pub(in crate::interpreter::evaluator) const fn offset(&self) -> usize {
        self.span.start
    }

    /// Records a recovered problem and logs it.
    pub(in crate::interpreter::evaluator) fn report(&mut self, error: ParseError) {
        log::warn!("{error}");
        self.diagnostics.push(error);
    }

    /// Current parenthesis nesting depth.
    pub(in crate::interpreter::evaluator) const fn depth(&self) -> usize {
        self.depth
    }

    pub(in crate::interpreter::evaluator) const fn enter_group(&mut self) {
        self.depth += 1;
    }

    pub(in crate::interpreter::evaluator) const fn leave_group(&mut self) {
        self.depth -= 1;
    }

    /// Builds the diagnostic for a lookahead that cannot start a factor.
    pub(in crate::interpreter::evaluator) fn unexpected_current(&self) -> ParseError {
        let offset = self.span.start;
        match self.current {
            Token::EndOfFile => ParseError::UnexpectedEndOfInput { offset },
            token => {
                self.invalid_character()
                    .unwrap_or_else(|| ParseError::UnexpectedToken { token: token.to_string(),
                                                                     offset })
            },
        }
    }

    /// The diagnostic for an [`Token::Invalid`] lookahead, if it is one.
    fn invalid_character(&self) -> Option<ParseError> {
        if self.current != Token::Invalid {
            return None;
        }

        self.tokenizer.token_text()
                      .chars()
                      .next()
                      .map(|character| ParseError::InvalidCharacter { character,
                                                                      offset: self.span.start })
    }
}
