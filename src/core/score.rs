//! Points awarded for winning a round
//!
//! Linear decay from [`BASE_POINTS`], losing [`POINTS_PER_GUESS`] for every
//! guess used (including the winning one), floored at zero.

/// Starting value before the per-guess deduction
pub const BASE_POINTS: u32 = 100;

/// Deduction per guess used
pub const POINTS_PER_GUESS: u32 = 10;

/// Points for a win that took `guess_count` guesses
///
/// Only meaningful for wins; a lost round awards nothing and never calls this.
///
/// # Examples
/// ```
/// use mastermind::core::score;
///
/// assert_eq!(score(1), 90);
/// assert_eq!(score(3), 70);
/// assert_eq!(score(11), 0);
/// ```
#[must_use]
pub fn score(guess_count: usize) -> u32 {
    let deduction = u32::try_from(guess_count)
        .unwrap_or(u32::MAX)
        .saturating_mul(POINTS_PER_GUESS);
    BASE_POINTS.saturating_sub(deduction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_decays_per_guess() {
        assert_eq!(score(1), 90);
        assert_eq!(score(2), 80);
        assert_eq!(score(3), 70);
    }

    #[test]
    fn score_floors_at_zero() {
        assert_eq!(score(10), 0);
        assert_eq!(score(11), 0);
        assert_eq!(score(20), 0);
        assert_eq!(score(usize::MAX), 0);
    }

    #[test]
    fn score_without_guesses_is_base() {
        assert_eq!(score(0), BASE_POINTS);
    }

    #[test]
    fn score_is_monotonic() {
        for n in 0..20 {
            assert!(score(n + 1) <= score(n));
        }
    }
}
