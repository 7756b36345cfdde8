use crate::core::AggregatePair;
use crate::utils::error::{Result, TrendError};

pub const DISPLAY_DECIMALS: i32 = 2;

/// Rounds half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Mean of `values[i] - values[i - 1]`; `None` below two values.
fn mean_first_difference(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }

    let diffs: Vec<f64> = values.windows(2).map(|pair| pair[1] - pair[0]).collect();
    Some(mean(&diffs))
}

/// Mean temperature and mean year-over-year change, rounded for display.
///
/// Both statistics are computed on the raw values and rounded exactly once.
pub fn aggregate(values: &[f64]) -> Result<AggregatePair> {
    if values.is_empty() {
        return Err(TrendError::invalid_input(
            "cannot aggregate an empty temperature sequence",
        ));
    }

    Ok(AggregatePair {
        mean: round_to(mean(values), DISPLAY_DECIMALS),
        mean_diff: mean_first_difference(values).map(|diff| round_to(diff, DISPLAY_DECIMALS)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_aggregate_reference_values() {
        let pair = aggregate(&[8.0, 8.2, 7.9, 8.4]).unwrap();

        assert_close(pair.mean, 8.13);
        assert_close(pair.mean_diff.unwrap(), 0.13);
    }

    #[test]
    fn test_mean_difference_matches_endpoint_formula() {
        let values = [14.2, 13.9, 14.8, 15.1, 14.6, 15.4];
        let by_steps = mean_first_difference(&values).unwrap();
        let by_endpoints = (values[5] - values[0]) / 5.0;
        assert!((by_steps - by_endpoints).abs() < 1e-12);
    }

    #[test]
    fn test_single_value_leaves_difference_undefined() {
        let pair = aggregate(&[9.87]).unwrap();
        assert_close(pair.mean, 9.87);
        assert_eq!(pair.mean_diff, None);
    }

    #[test]
    fn test_empty_sequence_is_invalid_input() {
        let err = aggregate(&[]).unwrap_err();
        assert!(matches!(err, TrendError::InvalidInputError { .. }));
    }

    #[test]
    fn test_negative_trend() {
        let pair = aggregate(&[10.0, 9.5, 9.0]).unwrap();
        assert_close(pair.mean, 9.5);
        assert_close(pair.mean_diff.unwrap(), -0.5);
    }

    #[test]
    fn test_rounding_is_applied_once() {
        // Rounding to three places first would give 0.125 and then 0.13.
        let pair = aggregate(&[0.1249, 0.1249]).unwrap();
        assert_close(pair.mean, 0.12);
    }

    #[test]
    fn test_round_to() {
        assert_close(round_to(8.125, 2), 8.13);
        assert_close(round_to(-0.125, 2), -0.13);
        assert_close(round_to(0.1333333, 2), 0.13);
    }
}
