use crate::domain::model::{Series, YearlyObservation};
use crate::utils::error::Result;
use serde::{Deserialize, Deserializer};

/// Row shape shared by the global and city tables. Extra columns such as
/// `city` or `country` are ignored.
#[derive(Debug, Deserialize)]
struct WeatherRow {
    year: i32,
    #[serde(deserialize_with = "blank_as_none")]
    avg_temp: Option<f64>,
}

/// An empty cell reads as `None`. The column itself stays required: a header
/// without `avg_temp` fails as a missing field.
fn blank_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer)
}

/// Parses a `year,avg_temp` table into a [`Series`], keeping file order.
///
/// Rows with a blank `avg_temp` are skipped; a row with an unparsable year or
/// temperature fails the whole read.
pub fn parse_weather_csv(label: &str, data: &[u8]) -> Result<Series> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(data);

    let mut observations = Vec::new();
    let mut skipped = 0usize;

    for row in reader.deserialize::<WeatherRow>() {
        let row = row?;
        match row.avg_temp {
            Some(avg_temp) => observations.push(YearlyObservation::new(row.year, avg_temp)),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        tracing::warn!(
            "Skipped {} {} rows without an avg_temp value",
            skipped,
            label
        );
    }

    let series = Series::new(observations);
    if let (Some(first), Some(last)) = (series.first_year(), series.last_year()) {
        tracing::debug!("Parsed {} {} rows ({}..{})", series.len(), label, first, last);
    }

    Ok(series)
}
