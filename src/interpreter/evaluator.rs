/// Binary precedence levels.
///
/// Implements the left-associative loops for `* / ^`, `+ -`, comparisons,
/// `&& ||` and the comma operator.
pub mod binary;

/// Evaluation context and shared plumbing.
///
/// Contains the per-call evaluator state, the result type used by every
/// level, token expectations and the nesting guard.
pub mod core;

/// Builtin functions.
///
/// Holds the fixed catalogue of one, two and three argument functions and
/// the random source some of them draw from.
pub mod function;

/// Primary expressions.
///
/// Numbers, variables and assignments, function calls, unary `-` and `!`,
/// and parenthesised sub-expressions.
pub mod unary;
