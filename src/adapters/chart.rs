use crate::domain::model::{Report, TrendPoint};
use crate::utils::error::{Result, TrendError};
use plotters::prelude::*;

pub const CHART_TITLE: &str = "Exploration of Weather Trends";
pub const GLOBAL_LABEL: &str = "Global";
const CHART_SIZE: (u32, u32) = (1024, 640);

fn chart_error<E: std::fmt::Display>(err: E) -> TrendError {
    TrendError::ChartError {
        message: err.to_string(),
    }
}

fn defined(trend: &[TrendPoint]) -> Vec<(i32, f64)> {
    trend
        .iter()
        .filter_map(|point| point.smoothed_value.map(|value| (point.year, value)))
        .collect()
}

/// Axis bounds padded so a single point or a flat line still has extent.
fn axis_bounds(points: &[(i32, f64)]) -> Option<((i32, i32), (f64, f64))> {
    let first = points.first()?;
    let (mut x_min, mut x_max) = (first.0, first.0);
    let (mut y_min, mut y_max) = (first.1, first.1);

    for &(year, value) in points {
        x_min = x_min.min(year);
        x_max = x_max.max(year);
        y_min = y_min.min(value);
        y_max = y_max.max(value);
    }

    if x_min == x_max {
        x_max += 1;
    }
    let pad = ((y_max - y_min) * 0.05).max(0.5);

    Some(((x_min, x_max), (y_min - pad, y_max + pad)))
}

/// Draws both rolling-mean lines on a shared year axis as SVG.
///
/// Returns `Ok(None)` when neither trend has a defined point, which happens
/// when the series do not overlap or the window exceeds the overlap.
pub fn render_trend_chart(report: &Report) -> Result<Option<String>> {
    let global = defined(&report.global_trend);
    let local = defined(&report.local_trend);

    let all: Vec<(i32, f64)> = global.iter().chain(local.iter()).copied().collect();
    let Some(((x_min, x_max), (y_min, y_max))) = axis_bounds(&all) else {
        tracing::warn!("No defined trend points; skipping chart");
        return Ok(None);
    };

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(chart_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(CHART_TITLE, ("sans-serif", 24))
            .margin(16)
            .x_label_area_size(40)
            .y_label_area_size(56)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(chart_error)?;

        chart
            .configure_mesh()
            .x_desc("Years")
            .y_desc("Degrees (°C)")
            .draw()
            .map_err(chart_error)?;

        chart
            .draw_series(LineSeries::new(global, &BLUE))
            .map_err(chart_error)?
            .label(GLOBAL_LABEL)
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

        chart
            .draw_series(LineSeries::new(local, &RED))
            .map_err(chart_error)?
            .label(report.local_name.as_str())
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(chart_error)?;

        root.present().map_err(chart_error)?;
    }

    Ok(Some(svg))
}
