use crate::{
    error::RuntimeError,
    interpreter::evaluator::{core::EvalResult, function::random::RandomSource},
};

/// Largest positive integer exponent `pow` computes by repeated
/// multiplication.
pub const MAX_EXACT_EXPONENT: i32 = 64;

/// Generates single argument builtins that delegate to an `f64` method.
///
/// Domain errors are not reported: `sqrt(-1)` and `log(0)` produce the
/// `NaN` or infinity the library returns.
///
/// # Example
/// ```
/// use calcexpr::interpreter::evaluator::function::{builtin::sqrt, random::RandomSource};
///
/// let mut rng = RandomSource::seeded(0);
/// assert_eq!(sqrt(&[64.0], &mut rng, 0).unwrap(), 8.0);
/// assert!(sqrt(&[-1.0], &mut rng, 0).unwrap().is_nan());
/// ```
macro_rules! real_builtin {
    ($($fname:ident => $real_fn:ident),* $(,)?) => {
        $(
            pub fn $fname(args: &[f64], _rng: &mut RandomSource, _position: usize) -> EvalResult<f64> {
                Ok(args[0].$real_fn())
            }
        )*
    };
}

real_builtin! {
    abs => abs,
    acos => acos,
    asin => asin,
    atan => atan,
    atanh => atanh,
    ceil => ceil,
    cos => cos,
    cosh => cosh,
    exp => exp,
    floor => floor,
    log => ln,
    log10 => log10,
    sin => sin,
    sinh => sinh,
    sqrt => sqrt,
    tan => tan,
    tanh => tanh,
    int => trunc,
}

/// Floating point remainder of `args[0] / args[1]`, with the sign of the
/// dividend.
///
/// # Errors
/// `ModuloByZero` when the divisor is exactly zero.
pub fn modulo(args: &[f64], _rng: &mut RandomSource, position: usize) -> EvalResult<f64> {
    if args[1] == 0.0 {
        return Err(RuntimeError::ModuloByZero { position }.into());
    }
    Ok(args[0] % args[1])
}

/// Raises `args[0]` to the power `args[1]`.
///
/// Positive integer exponents up to [`MAX_EXACT_EXPONENT`] are computed by
/// repeated multiplication, which keeps small integral powers exact; other
/// exponents go through the general power function.
pub fn pow(args: &[f64], _rng: &mut RandomSource, _position: usize) -> EvalResult<f64> {
    let (base, exponent) = (args[0], args[1]);
    if exponent > 0.0
       && exponent <= f64::from(MAX_EXACT_EXPONENT)
       && exponent.fract() == 0.0
    {
        let mut result = base;
        let mut remaining = exponent;
        while remaining > 1.0 {
            result *= base;
            remaining -= 1.0;
        }
        return Ok(result);
    }
    Ok(base.powf(exponent))
}

/// `if(test, a, b)`: `a` when `test` is non-zero, otherwise `b`.
///
/// All three arguments have already been evaluated by the caller.
pub fn if_then_else(args: &[f64], _rng: &mut RandomSource, _position: usize) -> EvalResult<f64> {
    Ok(if args[0] == 0.0 { args[2] } else { args[1] })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EvalError;

    fn rng() -> RandomSource {
        RandomSource::seeded(7)
    }

    #[test]
    fn int_truncates_toward_zero() {
        assert_eq!(int(&[2.7], &mut rng(), 0), Ok(2.0));
        assert_eq!(int(&[-2.7], &mut rng(), 0), Ok(-2.0));
    }

    #[test]
    fn log_is_natural() {
        assert_eq!(log(&[1.0], &mut rng(), 0), Ok(0.0));
        assert_eq!(log10(&[100.0], &mut rng(), 0), Ok(2.0));
    }

    #[test]
    fn modulo_keeps_dividend_sign() {
        assert_eq!(modulo(&[7.0, 3.0], &mut rng(), 0), Ok(1.0));
        assert_eq!(modulo(&[-7.0, 3.0], &mut rng(), 0), Ok(-1.0));
        assert_eq!(modulo(&[7.5, 2.0], &mut rng(), 0), Ok(1.5));
    }

    #[test]
    fn modulo_by_zero_is_an_error() {
        assert_eq!(modulo(&[7.0, 0.0], &mut rng(), 4),
                   Err(EvalError::Runtime(RuntimeError::ModuloByZero { position: 4 })));
    }

    #[test]
    fn pow_multiplies_for_small_integer_exponents() {
        assert_eq!(pow(&[2.0, 10.0], &mut rng(), 0), Ok(1024.0));
        assert_eq!(pow(&[3.0, 20.0], &mut rng(), 0), Ok(3_486_784_401.0));
        assert_eq!(pow(&[-2.0, 3.0], &mut rng(), 0), Ok(-8.0));
    }

    #[test]
    fn pow_falls_back_to_powf() {
        assert_eq!(pow(&[4.0, 0.5], &mut rng(), 0), Ok(2.0));
        assert_eq!(pow(&[2.0, -1.0], &mut rng(), 0), Ok(0.5));
        assert_eq!(pow(&[5.0, 0.0], &mut rng(), 0), Ok(1.0));
        assert_eq!(pow(&[2.0, 65.0], &mut rng(), 0), Ok(2.0_f64.powf(65.0)));
    }

    #[test]
    fn if_selects_by_zero_test() {
        assert_eq!(if_then_else(&[1.0, 22.0, 33.0], &mut rng(), 0), Ok(22.0));
        assert_eq!(if_then_else(&[0.0, 22.0, 33.0], &mut rng(), 0), Ok(33.0));
        assert_eq!(if_then_else(&[f64::NAN, 22.0, 33.0], &mut rng(), 0), Ok(22.0));
    }
}
