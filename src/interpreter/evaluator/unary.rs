use crate::{
    error::{ParseError, RuntimeError},
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator, truth},
            function::core::resolve,
        },
        lexer::Token,
    },
};

/// Assignment forms that may follow a variable name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AssignOperator {
    Set,
    Add,
    Sub,
    Mul,
    Div,
}

impl AssignOperator {
    const fn from_token(token: Option<&Token>) -> Option<Self> {
        match token {
            Some(Token::Equals) => Some(Self::Set),
            Some(Token::PlusAssign) => Some(Self::Add),
            Some(Token::MinusAssign) => Some(Self::Sub),
            Some(Token::StarAssign) => Some(Self::Mul),
            Some(Token::SlashAssign) => Some(Self::Div),
            _ => None,
        }
    }
}

impl Evaluator<'_, '_> {
    /// Evaluates a primary expression.
    ///
    /// Primary expressions form the base of the grammar:
    /// - numeric literals
    /// - variables, optionally followed by `=`, `+=`, `-=`, `*=` or `/=`
    /// - builtin function calls
    /// - unary `-` and `!`, applied to another primary
    /// - parenthesised comma lists
    ///
    /// Grammar:
    /// ```text
    ///     primary := NUMBER
    ///              | NAME "(" expression ("," expression)* ")"
    ///              | NAME (("=" | "+=" | "-=" | "*=" | "/=") expression)?
    ///              | ("-" | "!") primary
    ///              | "(" comma_list ")"
    /// ```
    ///
    /// # Errors
    /// - `UnexpectedToken` or `UnexpectedEndOfInput` when no operand starts
    ///   here.
    /// - `NestingTooDeep` when nesting exceeds the configured limit.
    /// - Anything raised by sub-expressions, calls and assignments.
    pub(crate) fn primary(&mut self, consume_first: bool) -> EvalResult<f64> {
        if consume_first {
            self.advance(false)?;
        }
        self.enter()?;
        let result = self.primary_current();
        self.leave();
        result
    }

    fn primary_current(&mut self) -> EvalResult<f64> {
        let position = self.lexer.token_start();
        match self.lexer.current().cloned() {
            Some(Token::Number(value)) => {
                self.advance(true)?;
                Ok(value)
            },
            Some(Token::Name(name)) => {
                self.advance(true)?;
                if self.lexer.current() == Some(&Token::LParen) {
                    self.call(&name, position)
                } else {
                    self.variable(&name)
                }
            },
            Some(Token::Minus) => Ok(-self.primary(true)?),
            Some(Token::Bang) => Ok(truth(self.primary(true)? == 0.0)),
            Some(Token::LParen) => {
                let value = self.comma_list(true)?;
                self.expect(&Token::RParen, ')')?;
                self.advance(true)?;
                Ok(value)
            },
            None if self.lexer.at_end() => Err(ParseError::UnexpectedEndOfInput { position }.into()),
            _ => Err(ParseError::UnexpectedToken { token: self.lexer.token_text().to_string(),
                                                   position }.into()),
        }
    }

    /// Reads a variable and applies an optional assignment.
    ///
    /// An unknown name is created on first use with a `NaN` value. The old
    /// value is read before the right-hand side is evaluated, so `a += (a =
    /// 1)` adds to the value `a` had before the inner assignment.
    fn variable(&mut self, name: &str) -> EvalResult<f64> {
        let current = self.symbols.lookup(name).unwrap_or_else(|| {
                                                    self.symbols.save(name, f64::NAN);
                                                    f64::NAN
                                                });

        let Some(op) = AssignOperator::from_token(self.lexer.current()) else {
            return Ok(current);
        };
        let op_position = self.lexer.token_start();
        let rhs = self.expression(true)?;

        let value = match op {
            AssignOperator::Set => rhs,
            AssignOperator::Add => current + rhs,
            AssignOperator::Sub => current - rhs,
            AssignOperator::Mul => current * rhs,
            AssignOperator::Div => {
                if rhs == 0.0 {
                    return Err(RuntimeError::DivisionByZero { position: op_position }.into());
                }
                current / rhs
            },
        };
        self.symbols.save(name, value);
        Ok(value)
    }

    /// Evaluates a builtin call whose name has been read and whose `(` is
    /// current.
    ///
    /// Every argument is a full logical expression, evaluated left to right
    /// before the builtin runs; there is no short-circuiting, so `if` still
    /// evaluates both branches.
    ///
    /// # Errors
    /// - `UnknownFunction` when no builtin of any arity has this name.
    /// - `ExpectedToken` when a `,` or the closing `)` is missing.
    fn call(&mut self, name: &str, position: usize) -> EvalResult<f64> {
        let Some(builtin) = resolve(name) else {
            return Err(RuntimeError::UnknownFunction { name: name.to_string(),
                                                       position }.into());
        };

        let count = builtin.arity.count();
        let mut args = [0.0; 3];
        for (index, slot) in args.iter_mut().take(count).enumerate() {
            if index > 0 {
                self.expect(&Token::Comma, ',')?;
            }
            *slot = self.expression(true)?;
        }
        self.expect(&Token::RParen, ')')?;
        self.advance(true)?;

        builtin.call(&args[..count], self.rng, position)
    }
}
