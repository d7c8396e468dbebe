/// Computes the minimum or maximum of two values.
///
/// The operation is selected by the `name` parameter, which must be `"min"` or
/// `"max"`. The comparison is a plain `<` or `>`, so when it fails because of
/// a `NaN` the second argument is returned.
///
/// # Parameters
/// - `name`: Either `"min"` or `"max"`.
/// - `args`: Slice containing exactly two arguments.
///
/// # Example
/// ```
/// use calcexpr::interpreter::evaluator::function::min_max::min_max;
///
/// assert_eq!(min_max("min", &[10.0, 20.0]), 10.0);
/// assert_eq!(min_max("max", &[2.5, 1.0]), 2.5);
/// ```
#[must_use]
pub fn min_max(name: &str, args: &[f64]) -> f64 {
    let (left, right) = (args[0], args[1]);
    let keep_left = if name == "min" { left < right } else { left > right };
    if keep_left { left } else { right }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_comparison_yields_second_argument() {
        assert!(min_max("min", &[1.0, f64::NAN]).is_nan());
        assert_eq!(min_max("max", &[f64::NAN, 3.0]), 3.0);
    }

    #[test]
    fn equal_values() {
        assert_eq!(min_max("min", &[4.0, 4.0]), 4.0);
    }
}
