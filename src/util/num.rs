/// Number of significant digits used when printing results.
pub const DISPLAY_PRECISION: usize = 16;

/// Truncates a double toward zero and converts it to an `i64`.
///
/// Values outside the `i64` range saturate at the nearest bound and `NaN`
/// becomes `0`, so builtins that take counts never see an undefined value.
///
/// ## Parameters
/// - `value`: The double to convert.
///
/// ## Returns
/// The integer part of `value`.
///
/// ## Example
/// ```
/// use calcexpr::util::num::truncate_to_i64;
///
/// assert_eq!(truncate_to_i64(3.9), 3);
/// assert_eq!(truncate_to_i64(-3.9), -3);
/// assert_eq!(truncate_to_i64(f64::NAN), 0);
/// assert_eq!(truncate_to_i64(1e300), i64::MAX);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn truncate_to_i64(value: f64) -> i64 {
    value as i64
}

/// Converts a non-negative count back into a double.
///
/// Counts produced by the random builtins are bounded by their `i64`
/// arguments, so the conversion only loses precision above `2^53`, where the
/// argument itself was already rounded.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn count_to_f64(value: i64) -> f64 {
    value as f64
}

/// Formats a double the way C's `%.*g` does.
///
/// The shortest of fixed and scientific notation is chosen based on the
/// decimal exponent, and trailing zeros of the fraction are removed.
///
/// ## Parameters
/// - `value`: The double to format.
/// - `precision`: Number of significant digits, at least one.
///
/// ## Example
/// ```
/// use calcexpr::util::num::format_general;
///
/// assert_eq!(format_general(252.0, 16), "252");
/// assert_eq!(format_general(0.1 + 0.2, 16), "0.3");
/// assert_eq!(format_general(1.53158e15, 16), "1531580000000000");
/// assert_eq!(format_general(1.5e20, 16), "1.5e+20");
/// assert_eq!(format_general(f64::NAN, 16), "nan");
/// ```
#[must_use]
pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let precision = precision.max(1);
    let scientific = format!("{value:.prec$e}", prec = precision - 1);
    let (mantissa, exponent) = scientific.split_once('e')
                                         .map_or((scientific.as_str(), 0), |(m, e)| {
                                             (m, e.parse::<i32>().unwrap_or(0))
                                         });

    let limit = i32::try_from(precision).unwrap_or(i32::MAX);
    if exponent < -4 || exponent >= limit {
        let mantissa = strip_fraction_zeros(mantissa);
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs());
    }

    let decimals = usize::try_from(limit - 1 - exponent).unwrap_or(0);
    strip_fraction_zeros(&format!("{value:.decimals$}")).to_string()
}

fn strip_fraction_zeros(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn general_format_switches_to_scientific_for_small_values() {
        assert_eq!(format_general(0.000_012_5, 16), "1.25e-05");
        assert_eq!(format_general(0.0001, 16), "0.0001");
    }

    #[test]
    fn general_format_trims_fraction() {
        assert_eq!(format_general(2.5, 16), "2.5");
        assert_eq!(format_general(-8.0, 16), "-8");
        assert_eq!(format_general(std::f64::consts::PI, 16), "3.141592653589793");
    }
}
