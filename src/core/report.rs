use crate::core::filter::filter_series;
use crate::core::range::intersect;
use crate::core::smoothing::trend_points;
use crate::core::statistics::aggregate;
use crate::core::{AggregatePair, Report, Series, TrendPoint};
use crate::utils::error::{Result, TrendError};
use crate::utils::validation::validate_window;

pub const DEFAULT_LOCAL_NAME: &str = "Local";

/// Builds a [`Report`] comparing a global and a local temperature series
/// over the years they have in common.
#[derive(Debug, Clone)]
pub struct TrendReport {
    local_name: String,
}

impl Default for TrendReport {
    fn default() -> Self {
        Self::new(DEFAULT_LOCAL_NAME)
    }
}

impl TrendReport {
    pub fn new(local_name: impl Into<String>) -> Self {
        Self {
            local_name: local_name.into(),
        }
    }

    /// # Errors
    ///
    /// `InvalidInputError` if either series is empty, `InvalidConfigurationError`
    /// if `smoothing_window` is not positive. A missing overlap is not an
    /// error: the report then has no aggregates and empty trends.
    pub fn build(&self, global: &Series, local: &Series, smoothing_window: i64) -> Result<Report> {
        if global.is_empty() {
            return Err(TrendError::invalid_input("global series has no observations"));
        }
        if local.is_empty() {
            return Err(TrendError::invalid_input(format!(
                "{} series has no observations",
                self.local_name
            )));
        }
        let window = validate_window("smoothing_window", smoothing_window)?;

        let overlap = intersect(&global.years(), &local.years())?;
        let filtered_global = filter_series(global, overlap);
        let filtered_local = filter_series(local, overlap);

        tracing::debug!(
            "Overlap {} ({} years): {} global rows, {} local rows",
            overlap,
            overlap.span(),
            filtered_global.len(),
            filtered_local.len()
        );

        let mut report = Report {
            local_name: self.local_name.clone(),
            smoothing_window: window,
            overlap,
            filtered_global,
            filtered_local,
            global_aggregate: None,
            local_aggregate: None,
            global_trend: Vec::new(),
            local_trend: Vec::new(),
        };

        if !report.has_overlap() {
            tracing::warn!(
                "No overlapping years between global and {} series (range {})",
                self.local_name,
                overlap
            );
            return Ok(report);
        }

        let (global_aggregate, global_trend) = summarize(&report.filtered_global, window)?;
        let (local_aggregate, local_trend) = summarize(&report.filtered_local, window)?;

        report.global_aggregate = Some(global_aggregate);
        report.local_aggregate = Some(local_aggregate);
        report.global_trend = global_trend;
        report.local_trend = local_trend;

        Ok(report)
    }
}

fn summarize(series: &Series, window: usize) -> Result<(AggregatePair, Vec<TrendPoint>)> {
    let pair = aggregate(&series.values())?;
    let trend = trend_points(series, window)?;
    Ok((pair, trend))
}
