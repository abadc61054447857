use crate::error::{Result, SseError};

pub struct SseLoss;

impl SseLoss {
    /// Normalized SSE: sum((actual - predicted)²) / divisor
    pub fn loss(actual: &[f64], predicted: &[f64], divisor: f64) -> Result<f64> {
        check_divisor(divisor)?;
        Ok(Self::raw(actual, predicted)? / divisor)
    }

    /// Un-normalized sum of squared differences.
    pub fn raw(actual: &[f64], predicted: &[f64]) -> Result<f64> {
        check_lengths(actual, predicted)?;
        Ok(actual.iter().zip(predicted.iter())
            .map(|(a, p)| (a - p).powi(2))
            .sum())
    }

    /// Per-prediction gradient: -2·(actual - predicted) / divisor
    pub fn derivative(actual: &[f64], predicted: &[f64], divisor: f64) -> Result<Vec<f64>> {
        check_divisor(divisor)?;
        check_lengths(actual, predicted)?;
        Ok(actual.iter().zip(predicted.iter())
            .map(|(a, p)| -2.0 * (a - p) / divisor)
            .collect())
    }
}

// zip() would silently truncate the longer side.
fn check_lengths(actual: &[f64], predicted: &[f64]) -> Result<()> {
    if actual.len() != predicted.len() {
        return Err(SseError::invalid(format!(
            "{} actual values but {} predictions",
            actual.len(),
            predicted.len()
        )));
    }
    Ok(())
}

fn check_divisor(divisor: f64) -> Result<()> {
    if divisor == 0.0 || !divisor.is_finite() {
        return Err(SseError::invalid(format!("divisor must be finite and nonzero, got {divisor}")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::Rng;

    fn random_vec(rng: &mut impl Rng, n: usize) -> Vec<f64> {
        (0..n).map(|_| rng.gen_range(-1000.0..1000.0)).collect()
    }

    #[test]
    fn scenario_value() {
        let actual = [500.0, 1200.0, 800.0, 2000.0, 1400.0];
        let predicted = [570.0, 1060.0, 824.0, 2054.0, 1328.0];
        assert_eq!(SseLoss::raw(&actual, &predicted).unwrap(), 33176.0);
        assert_relative_eq!(SseLoss::loss(&actual, &predicted, 5.0).unwrap(), 6635.2);
    }

    #[test]
    fn matches_direct_sum() {
        let mut rng = rand::thread_rng();
        for n in [1, 2, 7, 64] {
            let a = random_vec(&mut rng, n);
            let p = random_vec(&mut rng, n);
            let d: f64 = rng.gen_range(0.5..10.0);
            let mut expected = 0.0;
            for i in 0..n {
                expected += (a[i] - p[i]) * (a[i] - p[i]);
            }
            assert_relative_eq!(SseLoss::loss(&a, &p, d).unwrap(), expected / d, max_relative = 1e-12);
        }
    }

    #[test]
    fn swapping_sequences_gives_same_result() {
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let n = rng.gen_range(1..50);
            let a = random_vec(&mut rng, n);
            let p = random_vec(&mut rng, n);
            let d: f64 = rng.gen_range(-10.0..-0.5);
            assert_eq!(SseLoss::loss(&a, &p, d).unwrap(), SseLoss::loss(&p, &a, d).unwrap());
        }
    }

    #[test]
    fn identical_sequences_give_zero() {
        let mut rng = rand::thread_rng();
        let a = random_vec(&mut rng, 16);
        for d in [1.0, 3.5, -2.0, 1e-9] {
            assert_eq!(SseLoss::loss(&a, &a, d).unwrap(), 0.0);
        }
    }

    #[test]
    fn empty_sequences_give_zero() {
        assert_eq!(SseLoss::loss(&[], &[], 1.0).unwrap(), 0.0);
    }

    #[test]
    fn mismatched_lengths_fail() {
        let actual = [500.0, 1200.0, 800.0, 2000.0, 1400.0];
        let predicted = [570.0, 1060.0, 824.0, 2054.0];
        assert!(SseLoss::loss(&actual, &predicted, 5.0).unwrap_err().is_invalid_input());
        assert!(SseLoss::raw(&predicted, &actual).unwrap_err().is_invalid_input());
        assert!(SseLoss::derivative(&actual, &predicted, 5.0).unwrap_err().is_invalid_input());
    }

    #[test]
    fn zero_or_non_finite_divisor_fails() {
        let a = [1.0, 2.0];
        for d in [0.0, -0.0, f64::NAN, f64::INFINITY] {
            assert!(SseLoss::loss(&a, &a, d).unwrap_err().is_invalid_input());
        }
    }

    #[test]
    fn derivative_points_toward_actual() {
        let grad = SseLoss::derivative(&[10.0, 0.0], &[12.0, -1.0], 2.0).unwrap();
        assert_eq!(grad, vec![2.0, -1.0]);
    }
}
