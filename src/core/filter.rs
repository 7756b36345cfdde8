use crate::core::{Series, YearRange};

/// Keeps the observations whose year falls inside `range`, in input order.
pub fn filter_series(series: &Series, range: YearRange) -> Series {
    if range.is_empty() {
        return Series::default();
    }

    series
        .iter()
        .filter(|observation| range.contains(observation.year))
        .copied()
        .collect()
}
