/// Default stabilizer added to the standard deviation.
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Spread at or below this fraction of `max(|mean|, 1)` counts as zero.
pub const RELATIVE_SPREAD_FLOOR: f64 = 1e-12;

/// Z-score normalization: `(x - mean) / (stddev + epsilon)`.
///
/// Uses the population standard deviation. A vector whose spread is only
/// rounding noise (see [`RELATIVE_SPREAD_FLOOR`]) normalizes to exactly 0,
/// and `epsilon` keeps a tiny real spread finite. Non-finite inputs are
/// treated as 0.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn z_score(values: &[f64], epsilon: f64) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }

    let clean: Vec<f64> = values
        .iter()
        .map(|&v| if v.is_finite() { v } else { 0.0 })
        .collect();

    let n = clean.len() as f64;
    let mean = clean.iter().sum::<f64>() / n;
    let variance = clean.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let sd = variance.sqrt();
    if sd <= RELATIVE_SPREAD_FLOOR * mean.abs().max(1.0) {
        return vec![0.0; clean.len()];
    }
    let denom = sd + epsilon;

    clean.iter().map(|v| (v - mean) / denom).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_approx_eq(actual: f64, expected: f64) {
        let tolerance = 1e-6;
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual ({actual}) != expected ({expected})"
        );
    }

    #[test]
    fn z_score_uses_population_stddev() {
        // mean 2, population stddev sqrt(2/3)
        let z = z_score(&[1.0, 2.0, 3.0], DEFAULT_EPSILON);
        let sd = (2.0_f64 / 3.0).sqrt();
        assert_approx_eq(z[0], -1.0 / sd);
        assert_approx_eq(z[1], 0.0);
        assert_approx_eq(z[2], 1.0 / sd);
    }

    #[test]
    fn constant_values_normalize_to_zero() {
        let z = z_score(&[2.0, 2.0, 2.0, 2.0], DEFAULT_EPSILON);
        assert!(z.iter().all(|&x| x == 0.0 && !x.is_nan()));
    }

    #[test]
    fn rounding_noise_normalizes_to_zero() {
        // Same value accumulated in different orders, off by a few ulps.
        let base = 0.1_f64 + 0.2 + 0.3;
        let noisy = [base, 0.3 + 0.2 + 0.1, base, 0.6];
        assert!(noisy.iter().any(|&v| v != base), "fixture needs ulp noise");
        let z = z_score(&noisy, DEFAULT_EPSILON);
        assert!(z.iter().all(|&x| x == 0.0), "got {z:?}");
    }

    #[test]
    fn small_real_spread_survives() {
        let z = z_score(&[1.0, 1.0 + 1e-6], DEFAULT_EPSILON);
        // sd = 5e-7, so epsilon shaves off about 0.2%.
        assert!(z[1] > 0.99 && z[1] < 1.0, "got {}", z[1]);
        assert_approx_eq(z[0], -z[1]);
    }

    #[test]
    fn empty_returns_empty() {
        assert!(z_score(&[], DEFAULT_EPSILON).is_empty());
    }

    #[test]
    fn non_finite_values_are_zeroed() {
        let z = z_score(&[f64::NAN, 1.0], DEFAULT_EPSILON);
        assert!(z.iter().all(|x| x.is_finite()));
        assert!(z[1] > z[0]);
    }
}
