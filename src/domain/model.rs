use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of an annual temperature table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyObservation {
    pub year: i32,
    pub avg_temp: f64,
}

impl YearlyObservation {
    pub fn new(year: i32, avg_temp: f64) -> Self {
        Self { year, avg_temp }
    }
}

/// Observations ordered by year as they were read. Ordering and uniqueness
/// are the loader's responsibility; nothing here sorts or deduplicates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series {
    observations: Vec<YearlyObservation>,
}

impl Series {
    pub fn new(observations: Vec<YearlyObservation>) -> Self {
        Self { observations }
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &YearlyObservation> {
        self.observations.iter()
    }

    pub fn years(&self) -> Vec<i32> {
        self.observations.iter().map(|o| o.year).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.avg_temp).collect()
    }

    pub fn first_year(&self) -> Option<i32> {
        self.observations.first().map(|o| o.year)
    }

    pub fn last_year(&self) -> Option<i32> {
        self.observations.last().map(|o| o.year)
    }
}

impl FromIterator<YearlyObservation> for Series {
    fn from_iter<I: IntoIterator<Item = YearlyObservation>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a YearlyObservation;
    type IntoIter = std::slice::Iter<'a, YearlyObservation>;

    fn into_iter(self) -> Self::IntoIter {
        self.observations.iter()
    }
}

/// Closed interval of years. `min_year > max_year` encodes "no overlap".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub min_year: i32,
    pub max_year: i32,
}

impl YearRange {
    pub fn new(min_year: i32, max_year: i32) -> Self {
        Self { min_year, max_year }
    }

    pub fn is_empty(&self) -> bool {
        self.min_year > self.max_year
    }

    pub fn contains(&self, year: i32) -> bool {
        self.min_year <= year && year <= self.max_year
    }

    /// Number of calendar years covered, zero for an empty range.
    pub fn span(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (i64::from(self.max_year) - i64::from(self.min_year) + 1) as usize
        }
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min_year, self.max_year)
    }
}

/// Mean and mean first-difference, already rounded to two decimals. The
/// summary prints them with exactly two decimals (`0.50`, not `0.5`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregatePair {
    pub mean: f64,
    pub mean_diff: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub year: i32,
    pub smoothed_value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub local_name: String,
    pub smoothing_window: usize,
    pub overlap: YearRange,
    pub filtered_global: Series,
    pub filtered_local: Series,
    pub global_aggregate: Option<AggregatePair>,
    pub local_aggregate: Option<AggregatePair>,
    pub global_trend: Vec<TrendPoint>,
    pub local_trend: Vec<TrendPoint>,
}

impl Report {
    /// False when the two series share no year, or one of them has no rows
    /// inside the shared interval.
    pub fn has_overlap(&self) -> bool {
        !self.filtered_global.is_empty() && !self.filtered_local.is_empty()
    }

    pub fn defined_trend_points(&self) -> usize {
        self.global_trend
            .iter()
            .chain(self.local_trend.iter())
            .filter(|p| p.smoothed_value.is_some())
            .count()
    }
}
