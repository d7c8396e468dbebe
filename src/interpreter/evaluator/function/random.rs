use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::{count_to_f64, truncate_to_i64},
};

/// Largest number of dice a single `roll` call may throw.
pub const MAX_DICE: i64 = 1_000_000;

/// Pseudo-random generator owned by a session.
///
/// Its state carries over between evaluations of the same session. Seed it
/// with [`RandomSource::seeded`] for reproducible results.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Creates a deterministic source from `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// Creates a source seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    /// Uniform integer in `[0, bound)`, or `0` when `bound` is not positive.
    pub fn below(&mut self, bound: i64) -> i64 {
        if bound <= 0 {
            return 0;
        }
        self.rng.gen_range(0..bound)
    }

    /// Returns `true` with a probability of `percent` in a hundred.
    ///
    /// Zero or less is never true, a hundred or more is always true.
    pub fn chance(&mut self, percent: i64) -> bool {
        if percent <= 0 {
            return false;
        }
        if percent >= 100 {
            return true;
        }
        self.below(100) < percent
    }

    /// Sum of `dice` throws of a die with `sides` faces numbered from one.
    ///
    /// A die with no faces still counts one per throw.
    pub fn roll(&mut self, dice: i64, sides: i64) -> i64 {
        (0..dice).fold(0_i64, |total, _| total.saturating_add(self.below(sides) + 1))
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}

/// `rand(x)`: a whole number drawn uniformly from `[0, x)`.
///
/// `x` is truncated toward zero first; a result of zero or less (or `NaN`)
/// always yields `0`.
///
/// # Example
/// ```
/// use calcexpr::interpreter::evaluator::function::random::{RandomSource, rand};
///
/// let mut rng = RandomSource::seeded(42);
/// let r = rand(&[6.0], &mut rng, 0).unwrap();
/// assert!((0.0..6.0).contains(&r) && r.fract() == 0.0);
/// assert_eq!(rand(&[-3.0], &mut rng, 0).unwrap(), 0.0);
/// ```
pub fn rand(args: &[f64], rng: &mut RandomSource, _position: usize) -> EvalResult<f64> {
    Ok(count_to_f64(rng.below(truncate_to_i64(args[0]))))
}

/// `percent(x)`: `1` with a probability of `x` percent, otherwise `0`.
pub fn percent(args: &[f64], rng: &mut RandomSource, _position: usize) -> EvalResult<f64> {
    Ok(if rng.chance(truncate_to_i64(args[0])) { 1.0 } else { 0.0 })
}

/// `roll(n, sides)`: total of `n` dice with `sides` faces each.
///
/// # Errors
/// `InvalidArgument` when more than [`MAX_DICE`] dice are requested.
pub fn roll(args: &[f64], rng: &mut RandomSource, position: usize) -> EvalResult<f64> {
    let dice = truncate_to_i64(args[0]);
    if dice > MAX_DICE {
        return Err(RuntimeError::InvalidArgument { function: "roll",
                                                   details: format!("{dice} dice, at most {MAX_DICE} allowed"),
                                                   position }.into());
    }
    Ok(count_to_f64(rng.roll(dice, truncate_to_i64(args[1]))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = RandomSource::seeded(99);
        let mut b = RandomSource::seeded(99);
        let first: Vec<i64> = (0..20).map(|_| a.below(1000)).collect();
        let second: Vec<i64> = (0..20).map(|_| b.below(1000)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn below_stays_in_range() {
        let mut rng = RandomSource::seeded(3);
        for _ in 0..1000 {
            let n = rng.below(6);
            assert!((0..6).contains(&n));
        }
        assert_eq!(rng.below(0), 0);
        assert_eq!(rng.below(-10), 0);
    }

    #[test]
    fn chance_is_clamped() {
        let mut rng = RandomSource::seeded(5);
        for _ in 0..200 {
            assert!(!rng.chance(0));
            assert!(!rng.chance(-20));
            assert!(rng.chance(100));
            assert!(rng.chance(250));
        }
    }

    #[test]
    fn chance_of_one_percent_can_happen() {
        let mut rng = RandomSource::seeded(11);
        assert!((0..10_000).any(|_| rng.chance(1)));
    }

    #[test]
    fn chance_matches_its_percentage() {
        const DRAWS: u32 = 100_000;
        let mut rng = RandomSource::seeded(21);
        for percent in [1_i64, 30, 50, 99] {
            let hits = (0..DRAWS).filter(|_| rng.chance(percent)).count();
            let rate = f64::from(u32::try_from(hits).unwrap()) / f64::from(DRAWS);
            let expected = f64::from(u32::try_from(percent).unwrap()) / 100.0;
            assert!((rate - expected).abs() < 0.005, "chance({percent}) hit {rate}");
        }
    }

    #[test]
    fn below_is_uniform() {
        const DRAWS: usize = 100_000;
        let mut rng = RandomSource::seeded(4);
        let mut counts = [0_usize; 4];
        for _ in 0..DRAWS {
            counts[usize::try_from(rng.below(4)).unwrap()] += 1;
        }
        for (value, count) in counts.iter().enumerate() {
            let share = *count as f64 / DRAWS as f64;
            assert!((share - 0.25).abs() < 0.01, "{value} drawn {share} of the time");
        }
    }

    #[test]
    fn percent_builtin_matches_its_argument() {
        let mut rng = RandomSource::seeded(6);
        let hits: f64 = (0..100_000).map(|_| percent(&[30.9], &mut rng, 0).unwrap()).sum();
        assert!((hits / 100_000.0 - 0.30).abs() < 0.005, "percent(30.9) hit {hits}");
    }

    #[test]
    fn roll_sums_faces() {
        let mut rng = RandomSource::seeded(8);
        for _ in 0..200 {
            let total = rng.roll(3, 6);
            assert!((3..=18).contains(&total));
        }
        assert_eq!(rng.roll(0, 6), 0);
        assert_eq!(rng.roll(4, 0), 4);
    }

    #[test]
    fn roll_rejects_huge_dice_counts() {
        let mut rng = RandomSource::seeded(8);
        assert!(roll(&[1e12, 6.0], &mut rng, 0).is_err());
    }

    #[test]
    fn percent_returns_flags() {
        let mut rng = RandomSource::seeded(2);
        assert_eq!(percent(&[100.0], &mut rng, 0), Ok(1.0));
        assert_eq!(percent(&[0.0], &mut rng, 0), Ok(0.0));
    }
}
