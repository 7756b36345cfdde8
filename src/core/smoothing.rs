use crate::core::{Series, TrendPoint};
use crate::utils::error::{Result, TrendError};

/// Trailing rolling mean.
///
/// `output[i]` is the mean of `values[i + 1 - window..=i]`. The first
/// `window - 1` entries (or every entry, when the window is longer than the
/// input) are `None`.
///
/// # Errors
///
/// Returns `InvalidConfigurationError` when `window` is zero.
pub fn rolling_mean(values: &[f64], window: usize) -> Result<Vec<Option<f64>>> {
    if window == 0 {
        return Err(TrendError::invalid_configuration(
            "smoothing_window",
            window,
            "Window must be a positive number of years",
        ));
    }

    let warmup = (window - 1).min(values.len());
    let divisor = window as f64;

    let smoothed = std::iter::repeat(None)
        .take(warmup)
        .chain(
            values
                .windows(window)
                .map(|slice| Some(slice.iter().sum::<f64>() / divisor)),
        )
        .collect();

    Ok(smoothed)
}

/// Pairs each year of `series` with its rolling-mean value.
pub fn trend_points(series: &Series, window: usize) -> Result<Vec<TrendPoint>> {
    let smoothed = rolling_mean(&series.values(), window)?;

    Ok(series
        .iter()
        .zip(smoothed)
        .map(|(observation, smoothed_value)| TrendPoint {
            year: observation.year,
            smoothed_value,
        })
        .collect())
}
