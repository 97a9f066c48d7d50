/// Normalises a baseline value for output.
///
/// The value is first truncated toward zero at three decimal places and only
/// then rounded to two decimal places with midpoints going away from zero.
/// Truncating first drops floating point residue such as `43.33499999` that
/// would otherwise decide the final rounding step.
///
/// The truncated value is kept as a whole number of thousandths: scaling a
/// float like `0.285` back up by 100 lands just below `28.5`, while
/// `285 / 10` is exactly `28.5`.
#[inline]
pub fn round_baseline(value: f64) -> f64 {
    let thousandths = (value * 1000.0).trunc();
    (thousandths / 10.0).round() / 100.0
}

/// Arithmetic mean of a slice, `None` when the slice is empty.
#[inline]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().sum();
    Some(sum / values.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(round_baseline(43.333333), 43.33);
        assert_eq!(round_baseline(41.666666), 41.67);
        assert_eq!(round_baseline(50.0), 50.0);
    }

    #[test]
    fn midpoint_after_truncation_rounds_up() {
        assert_eq!(round_baseline(27.625), 27.63);
        assert_eq!(round_baseline(14.875), 14.88);
        assert_eq!(round_baseline(2.6259), 2.63);
    }

    #[test]
    fn inexact_midpoints_round_up() {
        assert_eq!(round_baseline(0.285), 0.29);
        assert_eq!(round_baseline(0.145), 0.15);
        assert_eq!(round_baseline(0.1455), 0.15);
        assert_eq!(round_baseline(1.0055), 1.01);
    }

    #[test]
    fn negative_midpoints_go_away_from_zero() {
        assert_eq!(round_baseline(-2.125), -2.13);
        assert_eq!(round_baseline(-2.1249), -2.12);
    }

    #[test]
    fn result_has_at_most_two_decimals() {
        for raw in [0.1234, 55.9199, 60.625, 36.616, 13.7549, 99.9999] {
            let r = round_baseline(raw);
            let scaled = r * 100.0;
            assert!((scaled - scaled.round()).abs() < 1e-6, "raw={raw}, rounded={r}");
        }
    }

    #[test]
    fn mean_of_empty_is_none() {
        assert!(mean(&[]).is_none());
        assert_eq!(mean(&[2.0, 4.0]), Some(3.0));
    }
}
