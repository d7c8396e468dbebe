use crate::{
    error::{EvalError, ParseError},
    interpreter::{
        evaluator::function::random::RandomSource,
        lexer::{Lexer, Token},
        symbols::SymbolTable,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing why the whole evaluation stopped.
pub type EvalResult<T> = Result<T, EvalError>;

/// State of one evaluation.
///
/// The evaluator reads tokens on demand and computes the value while it
/// parses; nothing is kept once [`Evaluator::run`] returns. The lexer and the
/// nesting counter belong to this call alone, while the symbol table and the
/// random source are borrowed from the session so their changes persist.
///
/// Every precedence level takes a `consume_first` flag. When set, the level
/// reads a fresh token before starting; otherwise it continues with the
/// token its caller left current. This gives the whole grammar a single
/// token of lookahead.
pub struct Evaluator<'src, 'env> {
    pub(crate) lexer:   Lexer<'src>,
    pub(crate) symbols: &'env mut SymbolTable,
    pub(crate) rng:     &'env mut RandomSource,
    depth:              usize,
    max_depth:          usize,
}

impl<'src, 'env> Evaluator<'src, 'env> {
    /// Creates an evaluator for `source`, positioned before its first token.
    #[must_use]
    pub fn new(source: &'src str,
               symbols: &'env mut SymbolTable,
               rng: &'env mut RandomSource,
               max_depth: usize)
               -> Self {
        Self { lexer: Lexer::new(source),
               symbols,
               rng,
               depth: 0,
               max_depth }
    }

    /// Evaluates the whole source text.
    ///
    /// The top-level production is the comma list; after it the input must
    /// be exhausted.
    ///
    /// # Errors
    /// Any syntax or runtime error; `UnexpectedTrailingText` when a complete
    /// expression is followed by more input.
    ///
    /// # Example
    /// ```
    /// use calcexpr::interpreter::{
    ///     evaluator::{core::Evaluator, function::random::RandomSource},
    ///     symbols::SymbolTable,
    /// };
    ///
    /// let mut symbols = SymbolTable::new();
    /// let mut rng = RandomSource::seeded(0);
    ///
    /// let v = Evaluator::new("a = 2, a * 21", &mut symbols, &mut rng, 64).run().unwrap();
    /// assert_eq!(v, 42.0);
    /// assert_eq!(symbols.lookup("a"), Some(2.0));
    /// ```
    pub fn run(mut self) -> EvalResult<f64> {
        let value = self.comma_list(true)?;
        if !self.lexer.at_end() {
            return Err(ParseError::UnexpectedTrailingText { text:     self.lexer.remaining().to_string(),
                                                            position: self.lexer.token_start(), }.into());
        }
        Ok(value)
    }

    /// Reads the next token.
    pub(crate) fn advance(&mut self, ignore_sign: bool) -> EvalResult<()> {
        Ok(self.lexer.next_token(ignore_sign)?)
    }

    /// Checks that the current token is `wanted` without consuming it.
    ///
    /// # Errors
    /// `ExpectedToken` naming `symbol` and the token actually found.
    pub(crate) fn expect(&self, wanted: &Token, symbol: char) -> EvalResult<()> {
        if self.lexer.current() == Some(wanted) {
            return Ok(());
        }
        Err(ParseError::ExpectedToken { expected: symbol,
                                        found:    self.lexer.token_text().to_string(),
                                        position: self.lexer.token_start(), }.into())
    }

    /// Enters one level of nesting, failing once the limit is reached.
    pub(crate) fn enter(&mut self) -> EvalResult<()> {
        if self.depth >= self.max_depth {
            return Err(ParseError::NestingTooDeep { limit:    self.max_depth,
                                                    position: self.lexer.token_start(), }.into());
        }
        self.depth += 1;
        Ok(())
    }

    /// Leaves a level entered with [`Evaluator::enter`].
    pub(crate) fn leave(&mut self) {
        self.depth -= 1;
    }
}

/// Maps a condition onto the `1.0` / `0.0` convention used for booleans.
#[must_use]
pub const fn truth(condition: bool) -> f64 {
    if condition { 1.0 } else { 0.0 }
}
