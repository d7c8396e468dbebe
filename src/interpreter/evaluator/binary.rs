use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator, truth},
        lexer::Token,
    },
};

impl Evaluator<'_, '_> {
    /// Evaluates multiplication-level expressions.
    ///
    /// Handles left-associative operators `*`, `/` and `^`. Exponentiation
    /// shares this level, so `2 ^ 3 ^ 2` is `(2 ^ 3) ^ 2` and `2 * 3 ^ 2` is
    /// `(2 * 3) ^ 2`.
    ///
    /// The rule is: `term := primary (("*" | "/" | "^") primary)*`
    ///
    /// # Errors
    /// `DivisionByZero` when the divisor of `/` is exactly zero.
    pub(crate) fn term(&mut self, consume_first: bool) -> EvalResult<f64> {
        let mut left = self.primary(consume_first)?;
        loop {
            match self.lexer.current() {
                Some(Token::Caret) => left = left.powf(self.primary(true)?),
                Some(Token::Star) => left *= self.primary(true)?,
                Some(Token::Slash) => {
                    let position = self.lexer.token_start();
                    let divisor = self.primary(true)?;
                    if divisor == 0.0 {
                        return Err(RuntimeError::DivisionByZero { position }.into());
                    }
                    left /= divisor;
                },
                _ => return Ok(left),
            }
        }
    }

    /// Evaluates addition and subtraction expressions.
    ///
    /// The rule is: `additive := term (("+" | "-") term)*`
    pub(crate) fn add_subtract(&mut self, consume_first: bool) -> EvalResult<f64> {
        let mut left = self.term(consume_first)?;
        loop {
            match self.lexer.current() {
                Some(Token::Plus) => left += self.term(true)?,
                Some(Token::Minus) => left -= self.term(true)?,
                _ => return Ok(left),
            }
        }
    }

    /// Evaluates relational and equality operators.
    ///
    /// Each comparison yields `1.0` or `0.0`, and chains associate to the
    /// left: `1 < 2 < 3` compares `1.0 < 3`.
    ///
    /// The rule is: `comparison := additive (("<" | ">" | "<=" | ">=" | "==" |
    /// "!=") additive)*`
    pub(crate) fn comparison(&mut self, consume_first: bool) -> EvalResult<f64> {
        let mut left = self.add_subtract(consume_first)?;
        loop {
            left = match self.lexer.current() {
                Some(Token::Less) => truth(left < self.add_subtract(true)?),
                Some(Token::Greater) => truth(left > self.add_subtract(true)?),
                Some(Token::LessEqual) => truth(left <= self.add_subtract(true)?),
                Some(Token::GreaterEqual) => truth(left >= self.add_subtract(true)?),
                Some(Token::EqualEqual) => truth(left == self.add_subtract(true)?),
                Some(Token::BangEqual) => truth(left != self.add_subtract(true)?),
                _ => return Ok(left),
            };
        }
    }

    /// Evaluates logical `&&` and `||`.
    ///
    /// Both operands are always evaluated, so assignments on the right run
    /// even when the left side already decides the result.
    ///
    /// The rule is: `expression := comparison (("&&" | "||") comparison)*`
    pub(crate) fn expression(&mut self, consume_first: bool) -> EvalResult<f64> {
        let mut left = self.comparison(consume_first)?;
        loop {
            left = match self.lexer.current() {
                Some(Token::AndAnd) => {
                    let right = self.comparison(true)?;
                    truth(left != 0.0 && right != 0.0)
                },
                Some(Token::OrOr) => {
                    let right = self.comparison(true)?;
                    truth(left != 0.0 || right != 0.0)
                },
                _ => return Ok(left),
            };
        }
    }

    /// Evaluates comma separated expressions and yields the last value.
    ///
    /// This is the top-level production and the one used inside
    /// parentheses. Every element is evaluated for its side effects.
    ///
    /// The rule is: `comma_list := expression ("," expression)*`
    pub(crate) fn comma_list(&mut self, consume_first: bool) -> EvalResult<f64> {
        let mut left = self.expression(consume_first)?;
        while self.lexer.current() == Some(&Token::Comma) {
            left = self.expression(true)?;
        }
        Ok(left)
    }
}
