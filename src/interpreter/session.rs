use std::f64::consts::{E, PI};

use crate::interpreter::{
    evaluator::{
        core::{EvalResult, Evaluator},
        function::random::RandomSource,
    },
    symbols::SymbolTable,
};

/// Default limit on nested primaries (parentheses, calls, unary operators).
pub const DEFAULT_MAX_DEPTH: usize = 200;

/// Settings applied when a session is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Seed for the random builtins, or `None` to seed from the operating
    /// system.
    pub seed:      Option<u64>,
    /// Maximum nesting of primaries before evaluation is aborted.
    pub max_depth: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { seed:      None,
               max_depth: DEFAULT_MAX_DEPTH, }
    }
}

/// Stores the state shared by successive evaluations.
///
/// A session owns the symbol table, the random source and the message of the
/// last failure. Each call to [`Session::evaluate`] builds a fresh
/// [`Evaluator`] over these, so independent sessions never share state and
/// a single session is used from one place at a time.
///
/// ## Usage
///
/// ```
/// use calcexpr::Session;
///
/// let mut session = Session::new();
/// assert_eq!(session.evaluate("a = 42, b = 6, a * b"), 252.0);
/// assert_eq!(session.evaluate("a /= 7"), 6.0);
///
/// assert!(session.evaluate("2 / 0").is_nan());
/// assert!(session.last_error().contains("Divide by zero"));
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    symbols:    SymbolTable,
    rng:        RandomSource,
    last_error: String,
    max_depth:  usize,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a session with an empty symbol table and default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    /// Creates a session from explicit settings.
    #[must_use]
    pub fn with_config(config: SessionConfig) -> Self {
        let rng = config.seed.map_or_else(RandomSource::from_entropy, RandomSource::seeded);
        Self { symbols: SymbolTable::new(),
               rng,
               last_error: String::new(),
               max_depth: config.max_depth }
    }

    /// Evaluates `expression` and returns its value, or `NaN` on failure.
    ///
    /// After a failure the message is available from
    /// [`Session::last_error`]. A `NaN` produced by arithmetic, such as
    /// `sqrt(-1)`, is not a failure and leaves the message empty.
    pub fn evaluate(&mut self, expression: &str) -> f64 {
        self.try_evaluate(expression).unwrap_or(f64::NAN)
    }

    /// Evaluates `expression`, returning the error instead of `NaN`.
    ///
    /// `pi` and `e` are reset to their constants before every evaluation.
    /// Assignments made before a failure stay in the symbol table.
    ///
    /// # Errors
    /// The first syntax or runtime error encountered.
    pub fn try_evaluate(&mut self, expression: &str) -> EvalResult<f64> {
        self.last_error.clear();
        self.symbols.save("pi", PI);
        self.symbols.save("e", E);

        let result = Evaluator::new(expression, &mut self.symbols, &mut self.rng, self.max_depth).run();
        match &result {
            Ok(value) => tracing::debug!(expression, value, "evaluated"),
            Err(error) => {
                tracing::debug!(expression, %error, "evaluation failed");
                self.last_error = error.to_string();
            },
        }
        result
    }

    /// Message of the last failed evaluation, or `""` if it succeeded.
    #[must_use]
    pub fn last_error(&self) -> &str {
        &self.last_error
    }

    /// Pre-loads or overwrites a variable.
    ///
    /// The table grows as needed and an allocation failure aborts the
    /// process, so there is no failure to report.
    pub fn save_symbol(&mut self, name: &str, value: f64) {
        self.symbols.save(name, value);
    }

    /// Current value of a variable, or `None` if it was never set.
    #[must_use]
    pub fn lookup_symbol(&self, name: &str) -> Option<f64> {
        self.symbols.lookup(name)
    }

    /// Read access to the whole symbol table.
    #[must_use]
    pub const fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }
}
