use crate::domain::model::{Report, Series, TrendPoint};
use crate::utils::error::{Result, TrendError};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn from_path(path: &str) -> Result<Self> {
        let extension = std::path::Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("json") => Ok(Self::Json),
            _ => Err(TrendError::invalid_configuration(
                "export",
                path,
                "Export path must end in .csv or .json",
            )),
        }
    }
}

#[derive(Debug, Default, Serialize)]
struct TrendRow {
    year: i32,
    global_avg_temp: Option<f64>,
    global_trend: Option<f64>,
    local_avg_temp: Option<f64>,
    local_trend: Option<f64>,
}

fn merge_rows(report: &Report) -> Vec<TrendRow> {
    let mut rows: BTreeMap<i32, TrendRow> = BTreeMap::new();

    let mut fill = |series: &Series, trend: &[TrendPoint], is_global: bool| {
        for (observation, point) in series.iter().zip(trend.iter()) {
            let row = rows.entry(observation.year).or_insert_with(|| TrendRow {
                year: observation.year,
                ..TrendRow::default()
            });
            if is_global {
                row.global_avg_temp = Some(observation.avg_temp);
                row.global_trend = point.smoothed_value;
            } else {
                row.local_avg_temp = Some(observation.avg_temp);
                row.local_trend = point.smoothed_value;
            }
        }
    };

    fill(&report.filtered_global, &report.global_trend, true);
    fill(&report.filtered_local, &report.local_trend, false);

    rows.into_values().collect()
}

/// One row per overlapping year with raw and smoothed values side by side.
pub fn to_csv(report: &Report) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in merge_rows(report) {
        writer.serialize(row)?;
    }
    writer.flush()?;

    let bytes = writer
        .into_inner()
        .map_err(|e| TrendError::IoError(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| TrendError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

pub fn to_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn export(report: &Report, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Csv => to_csv(report),
        ExportFormat::Json => to_json(report),
    }
}
