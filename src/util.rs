/// Numeric conversion and formatting helpers.
///
/// This module provides the conversions builtins need when a double is used
/// as a count or a probability, and the `%g`-style formatting used by the
/// command line driver to print results.
pub mod num;
