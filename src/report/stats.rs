//! pass@k estimation and percentage rounding.

/// Naive pass@k estimate: the probability that at least one of `k`
/// independent resamples at the observed success rate `c/n` succeeds,
/// computed as `1 - (1 - c/n)^k`.
///
/// This is the biased i.i.d. estimator, not the unbiased combinatorial
/// one; callers must not report it as unbiased. Returns 0.0 when there
/// is no data (`n == 0`).
pub fn pass_at_k(n: usize, c: usize, k: u32) -> f64 {
    if n == 0 {
        return 0.0;
    }
    let success_prob = c as f64 / n as f64;
    1.0 - (1.0 - success_prob).powi(k as i32)
}

/// Round a percentage to one decimal place, half away from zero.
///
/// Applied before any sort that reads the value, so ties are decided on
/// the rounded number.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_data_gives_zero() {
        assert_eq!(pass_at_k(0, 0, 1), 0.0);
        assert_eq!(pass_at_k(0, 0, 5), 0.0);
    }

    #[test]
    fn test_all_successes_give_exactly_one() {
        for k in 1..=10 {
            assert_eq!(pass_at_k(3, 3, k), 1.0);
            assert_eq!(pass_at_k(1, 1, k), 1.0);
        }
    }

    #[test]
    fn test_no_successes_give_zero() {
        assert_eq!(pass_at_k(5, 0, 1), 0.0);
        assert_eq!(pass_at_k(5, 0, 5), 0.0);
    }

    #[test]
    fn test_two_of_three_example() {
        // n=3, c=2: pass@1 = 2/3, pass@5 = 1 - (1/3)^5
        let p1 = pass_at_k(3, 2, 1);
        let p5 = pass_at_k(3, 2, 5);

        assert!((p1 - 2.0 / 3.0).abs() < 1e-12);
        assert!((p5 - (1.0 - (1.0f64 / 3.0).powi(5))).abs() < 1e-12);
        assert_eq!(round1(p1 * 100.0), 66.7);
        assert_eq!(round1(p5 * 100.0), 99.6);
    }

    #[test]
    fn test_monotone_in_k() {
        for c in 0..=4 {
            let mut prev = 0.0;
            for k in 1..=20 {
                let current = pass_at_k(4, c, k);
                assert!(current >= prev, "pass@{} decreased for c={}", k, c);
                prev = current;
            }
        }
    }

    #[test]
    fn test_round1_half_away_from_zero() {
        // 0.25 and 6.25 are exact in binary; banker's rounding would
        // give 0.2 and 6.2 here.
        assert_eq!(round1(0.25), 0.3);
        assert_eq!(round1(6.25), 6.3);
        assert_eq!(round1(99.99), 100.0);
        assert_eq!(round1(50.0), 50.0);
    }
}
