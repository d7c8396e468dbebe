/// The evaluator module parses and computes expressions in one pass.
///
/// Six precedence levels call each other recursively, reading tokens from
/// the lexer as they go and producing a double without building a tree.
///
/// # Responsibilities
/// - Implements the grammar from the comma operator down to primaries.
/// - Resolves variables, assignments and builtin calls.
/// - Reports syntax and runtime errors such as division by zero.
pub mod evaluator;
/// The lexer module tokenizes source text on demand.
///
/// The lexer reads the raw expression and yields one token at a time:
/// numbers, names, operators and punctuation. Whether a sign starts a number
/// is decided per call by the evaluator.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source offsets.
/// - Recognizes composite operators before their one-character prefixes.
/// - Reports malformed literals and unexpected characters.
pub mod lexer;
/// Entry point for evaluating expressions.
///
/// A session owns the state that survives between evaluations and exposes
/// the public operations used by front ends.
pub mod session;
/// The variable store.
pub mod symbols;
