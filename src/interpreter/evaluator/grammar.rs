use crate::{
    error::ParseError,
    interpreter::{
        evaluator::{
            binary::BinaryOperator,
            core::{Evaluator, MAX_DEPTH},
        },
        lexer::Token,
    },
};

impl Evaluator<'_> {
    /// Evaluates a sum or difference of terms.
    ///
    /// Operators are applied left to right, so `8 - 3 - 2` is `(8 - 3) - 2`.
    ///
    /// The rule is: `expression := term (("+" | "-") term)*`
    pub(crate) fn expression(&mut self) -> f64 {
        let mut value = self.term();

        while let Some(op) = BinaryOperator::additive(self.current()) {
            self.advance();
            let right = self.term();
            log::trace!("{value} {op} {right}");
            value = op.apply(value, right);
        }

        value
    }

    /// Evaluates a product or quotient of factors.
    ///
    /// The rule is: `term := factor (("*" | "/") factor)*`
    pub(crate) fn term(&mut self) -> f64 {
        let mut value = self.factor();

        while let Some(op) = BinaryOperator::multiplicative(self.current()) {
            self.advance();
            let right = self.factor();
            log::trace!("{value} {op} {right}");
            value = op.apply(value, right);
        }

        value
    }

    /// Evaluates a number literal or a parenthesized expression.
    ///
    /// A group missing its `)` is reported, and whatever token stands in the
    /// closer's place is consumed anyway. A group opened deeper than
    /// [`MAX_DEPTH`] is reported and skipped up to its matching `)`. An
    /// invalid character is reported and consumed; any other token is
    /// reported and left in place. In all of those cases the factor
    /// evaluates to `0`.
    ///
    /// The rule is: `factor := number | "(" expression ")"`
    pub(crate) fn factor(&mut self) -> f64 {
        match self.current() {
            Token::Number(value) => {
                self.advance();
                value
            },
            Token::LParen if self.depth() >= MAX_DEPTH => {
                let offset = self.offset();
                self.report(ParseError::NestingTooDeep { limit: MAX_DEPTH,
                                                         offset });
                self.skip_group();
                0.0
            },
            Token::LParen => {
                let open = self.offset();
                self.advance();
                self.enter_group();
                let value = self.expression();
                self.leave_group();

                if self.current() != Token::RParen {
                    let offset = self.offset();
                    self.report(ParseError::UnterminatedGroup { open, offset });
                }
                self.advance();

                value
            },
            Token::Invalid => {
                let error = self.unexpected_current();
                self.report(error);
                self.advance();
                0.0
            },
            _ => {
                let error = self.unexpected_current();
                self.report(error);
                0.0
            },
        }
    }

    /// Consumes a `(` and everything up to its matching `)`, or to the end
    /// of input when it has none.
    fn skip_group(&mut self) {
        let mut open = 0_usize;

        loop {
            match self.current() {
                Token::LParen => open += 1,
                Token::RParen => open -= 1,
                Token::EndOfFile => return,
                _ => {},
            }
            self.advance();

            if open == 0 {
                return;
            }
        }
    }
}
