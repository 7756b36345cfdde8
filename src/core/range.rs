use crate::core::YearRange;
use crate::utils::error::{Result, TrendError};

fn bounds(label: &str, years: &[i32]) -> Result<(i32, i32)> {
    let min = years.iter().copied().min();
    let max = years.iter().copied().max();
    match (min, max) {
        (Some(min), Some(max)) => Ok((min, max)),
        _ => Err(TrendError::invalid_input(format!(
            "cannot compute the year range of an empty {} year list",
            label
        ))),
    }
}

/// Overlapping year interval of two year lists.
///
/// The result may be empty (`min_year > max_year`) when the lists do not
/// overlap; callers must check `YearRange::is_empty` rather than expect an error.
pub fn intersect(years_a: &[i32], years_b: &[i32]) -> Result<YearRange> {
    let (min_a, max_a) = bounds("first", years_a)?;
    let (min_b, max_b) = bounds("second", years_b)?;

    Ok(YearRange::new(min_a.max(min_b), max_a.min(max_b)))
}
