use std::{fmt, iter::FusedIterator, ops::Range};

use logos::Logos;

use crate::util::num::accumulate_digits;

/// Raw lexemes recognized by the generated scanner.
///
/// This is the layer `logos` drives. [`Tokenizer`] turns these into public
/// [`Token`]s and owns the end-of-input behaviour.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
enum Lexeme {
    /// Unsigned decimal integer, accumulated digit by digit.
    #[regex(r"[0-9]+", |lex| accumulate_digits(lex.slice()))]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Any single character that does not start another lexeme.
    #[regex(r"[^0-9+\-*/() \t\n\r]")]
    Stray,
    /// Spaces, tabs and line breaks.
    #[regex(r"[ \t\n\r]+", logos::skip)]
    Whitespace,
}

/// Represents a lexical token of an arithmetic expression.
///
/// Numbers are converted to their value while lexing, so a token never
/// borrows from the source text.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Token {
    /// Numeric literal such as `42`.
    Number(f64),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// End of the input. Produced forever once reached.
    EndOfFile,
    /// A character the language does not know.
    Invalid,
}

impl Token {
    /// Returns `true` for [`Token::EndOfFile`].
    #[must_use]
    pub const fn is_end(self) -> bool {
        matches!(self, Self::EndOfFile)
    }
}

impl Lexeme {
    const fn into_token(self) -> Token {
        match self {
            Self::Number(value) => Token::Number(value),
            Self::Plus => Token::Plus,
            Self::Minus => Token::Minus,
            Self::Star => Token::Star,
            Self::Slash => Token::Slash,
            Self::LParen => Token::LParen,
            Self::RParen => Token::RParen,
            Self::Stray => Token::Invalid,
            // Skipped by the scanner, never produced.
            Self::Whitespace => Token::Invalid,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "number {value}"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::EndOfFile => write!(f, "end of input"),
            Self::Invalid => write!(f, "invalid character"),
        }
    }
}

/// Pull-based tokenizer over a borrowed source string.
///
/// Each call to [`Tokenizer::next_token`] scans exactly one token. The cursor
/// only moves forward and never passes the end of the source; once the end
/// is reached every further call returns [`Token::EndOfFile`].
///
/// # Example
/// ```
/// use arithex::interpreter::lexer::{Token, Tokenizer};
///
/// let mut tokenizer = Tokenizer::new("12 * (3)");
/// assert_eq!(tokenizer.next_token(), Token::Number(12.0));
/// assert_eq!(tokenizer.next_token(), Token::Star);
/// assert_eq!(tokenizer.next_token(), Token::LParen);
/// assert_eq!(tokenizer.next_token(), Token::Number(3.0));
/// assert_eq!(tokenizer.next_token(), Token::RParen);
/// assert_eq!(tokenizer.next_token(), Token::EndOfFile);
/// assert_eq!(tokenizer.next_token(), Token::EndOfFile);
/// ```
pub struct Tokenizer<'s> {
    source: &'s str,
    lexer:  logos::Lexer<'s, Lexeme>,
    cursor: usize,
    span:   Range<usize>,
}

impl<'s> Tokenizer<'s> {
    /// Creates a tokenizer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'s str) -> Self {
        Self { source,
               lexer: Lexeme::lexer(source),
               cursor: 0,
               span: 0..0 }
    }

    /// Scans and returns the next token.
    ///
    /// Never fails: characters outside the language come back as
    /// [`Token::Invalid`], one per character, and scanning continues after
    /// them.
    pub fn next_token(&mut self) -> Token {
        if self.cursor >= self.source.len() {
            self.span = self.source.len()..self.source.len();
            return Token::EndOfFile;
        }

        let token = match self.lexer.next() {
            Some(Ok(lexeme)) => lexeme.into_token(),
            Some(Err(())) => Token::Invalid,
            None => {
                // Only whitespace was left.
                self.cursor = self.source.len();
                self.span = self.cursor..self.cursor;
                return Token::EndOfFile;
            },
        };

        self.span = self.lexer.span();
        self.cursor = self.span.end;
        log::trace!("token {token:?} at {:?}", self.span);

        token
    }

    /// Byte offset of the first character not yet scanned.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Byte range of the most recently returned token.
    ///
    /// For [`Token::EndOfFile`] this is the empty range at the end of the
    /// source.
    #[must_use]
    pub fn token_span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// The text covered by the most recently returned token.
    #[must_use]
    pub fn token_text(&self) -> &'s str {
        &self.source[self.span.clone()]
    }
}

/// Yields every token before [`Token::EndOfFile`], then stops for good.
impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Token::EndOfFile => None,
            token => Some(token),
        }
    }
}

impl FusedIterator for Tokenizer<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_source_is_end_of_file() {
        let mut tokenizer = Tokenizer::new("");
        assert_eq!(tokenizer.next_token(), Token::EndOfFile);
        assert_eq!(tokenizer.cursor(), 0);
    }

    #[test]
    fn end_of_file_is_terminal() {
        let mut tokenizer = Tokenizer::new("7  \n\t");
        assert_eq!(tokenizer.next_token(), Token::Number(7.0));
        for _ in 0..5 {
            assert_eq!(tokenizer.next_token(), Token::EndOfFile);
            assert_eq!(tokenizer.cursor(), 5);
        }
    }

    #[test]
    fn cursor_advances_by_consumed_text() {
        let mut tokenizer = Tokenizer::new("  123+ (");
        assert_eq!(tokenizer.next_token(), Token::Number(123.0));
        assert_eq!(tokenizer.token_span(), 2..5);
        assert_eq!(tokenizer.cursor(), 5);
        assert_eq!(tokenizer.next_token(), Token::Plus);
        assert_eq!(tokenizer.cursor(), 6);
        assert_eq!(tokenizer.next_token(), Token::LParen);
        assert_eq!(tokenizer.cursor(), 8);
    }

    #[test]
    fn multi_digit_numbers_are_one_token() {
        let tokens: Vec<Token> = Tokenizer::new("123 + 1").collect();
        assert_eq!(tokens,
                   vec![Token::Number(123.0), Token::Plus, Token::Number(1.0)]);
    }

    #[test]
    fn minus_is_never_folded_into_a_number() {
        let tokens: Vec<Token> = Tokenizer::new("-4").collect();
        assert_eq!(tokens, vec![Token::Minus, Token::Number(4.0)]);
    }

    #[test]
    fn decimal_point_is_invalid() {
        let tokens: Vec<Token> = Tokenizer::new("1.5").collect();
        assert_eq!(tokens,
                   vec![Token::Number(1.0), Token::Invalid, Token::Number(5.0)]);
    }

    #[test]
    fn invalid_characters_consume_one_character_each() {
        let mut tokenizer = Tokenizer::new("$$é1");
        assert_eq!(tokenizer.next_token(), Token::Invalid);
        assert_eq!(tokenizer.token_text(), "$");
        assert_eq!(tokenizer.next_token(), Token::Invalid);
        assert_eq!(tokenizer.cursor(), 2);
        assert_eq!(tokenizer.next_token(), Token::Invalid);
        assert_eq!(tokenizer.token_text(), "é");
        assert_eq!(tokenizer.next_token(), Token::Number(1.0));
        assert_eq!(tokenizer.next_token(), Token::EndOfFile);
    }

    #[test]
    fn bare_operators_tokenize() {
        let tokens: Vec<Token> = Tokenizer::new("+-*/()").collect();
        assert_eq!(tokens,
                   vec![Token::Plus,
                        Token::Minus,
                        Token::Star,
                        Token::Slash,
                        Token::LParen,
                        Token::RParen]);
    }

    #[test]
    fn huge_literals_saturate_to_infinity() {
        let digits = "9".repeat(400);
        let mut tokenizer = Tokenizer::new(&digits);
        assert_eq!(tokenizer.next_token(), Token::Number(f64::INFINITY));
    }

    #[test]
    fn display_names_tokens() {
        assert_eq!(Token::Number(3.0).to_string(), "number 3");
        assert_eq!(Token::RParen.to_string(), "')'");
        assert_eq!(Token::EndOfFile.to_string(), "end of input");
    }
}
