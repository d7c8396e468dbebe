use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while computing a value.
pub enum RuntimeError {
    /// Division by exactly zero through `/` or `/=`.
    #[error("Divide by zero (at position {position})")]
    DivisionByZero {
        /// Byte offset of the divisor.
        position: usize,
    },
    /// `mod(a, b)` with `b == 0`.
    #[error("Divide by zero in mod (at position {position})")]
    ModuloByZero {
        /// Byte offset of the call.
        position: usize,
    },
    /// A name followed by `(` that matches no builtin of any arity.
    #[error("Function '{name}' not implemented (at position {position})")]
    UnknownFunction {
        /// The name that was called.
        name:     String,
        /// Byte offset of the name.
        position: usize,
    },
    /// A builtin received an argument it cannot work with.
    #[error("Invalid argument to {function}: {details} (at position {position})")]
    InvalidArgument {
        /// The builtin that rejected the argument.
        function: &'static str,
        /// Why the argument was rejected.
        details:  String,
        /// Byte offset of the call.
        position: usize,
    },
}

impl RuntimeError {
    /// Byte offset in the source text where the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::DivisionByZero { position }
            | Self::ModuloByZero { position }
            | Self::UnknownFunction { position, .. }
            | Self::InvalidArgument { position, .. } => *position,
        }
    }
}
