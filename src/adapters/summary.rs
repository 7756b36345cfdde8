use crate::domain::model::{AggregatePair, Report};

pub const UNITS: &str = "degrees (°C)";
pub const NO_OVERLAP_MESSAGE: &str = "No overlapping years between global and local series";

/// Always two decimals, so `0.5` prints as `0.50`. The value was already
/// rounded when the aggregate was built; this only pads.
fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "undefined".to_string(),
    }
}

fn aggregate_lines(prefix: &str, aggregate: &AggregatePair) -> [String; 2] {
    [
        format!(
            "{} average temperature : {} {}",
            prefix,
            format_value(Some(aggregate.mean)),
            UNITS
        ),
        format!(
            "{} average temperature differences : {} {}",
            prefix,
            format_value(aggregate.mean_diff),
            UNITS
        ),
    ]
}

/// Text lines for the aggregate statistics of a report.
pub fn summary_lines(report: &Report) -> Vec<String> {
    match (&report.global_aggregate, &report.local_aggregate) {
        (Some(global), Some(local)) => aggregate_lines("Global", global)
            .into_iter()
            .chain(aggregate_lines("Local", local))
            .collect(),
        _ => vec![format!("{} (range {})", NO_OVERLAP_MESSAGE, report.overlap)],
    }
}

pub fn render_summary(report: &Report) -> String {
    summary_lines(report).join("\n")
}
