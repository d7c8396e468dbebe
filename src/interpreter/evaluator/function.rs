/// Library-backed single argument functions, `int`, `mod`, `pow` and `if`.
pub mod builtin;
/// The builtin catalogue and its lookup by name and arity.
pub mod core;
/// `min` and `max` function implementations.
///
/// Returns the smaller or larger of two values, with the comparison order of
/// a plain conditional so `NaN` handling is predictable.
pub mod min_max;
/// Random number source and the `rand`, `percent` and `roll` builtins.
pub mod random;
