use crate::core::{Pipeline, Report};
use crate::utils::error::Result;

/// What a completed run produced.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub report: Report,
    pub written: Vec<String>,
}

pub struct TrendEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> TrendEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RunOutcome> {
        tracing::info!("Starting weather trend exploration");

        // Extract
        let (global, local) = self.pipeline.extract().await?;
        tracing::info!(
            "Loaded {} global and {} local observations",
            global.len(),
            local.len()
        );

        // Transform
        let report = self.pipeline.transform(global, local).await?;
        tracing::info!(
            "Overlap {} with {} global / {} local rows, {} smoothed points",
            report.overlap,
            report.filtered_global.len(),
            report.filtered_local.len(),
            report.defined_trend_points()
        );

        // Load
        let written = self.pipeline.load(report.clone()).await?;
        for path in &written {
            tracing::info!("Output saved to: {}", path);
        }

        Ok(RunOutcome { report, written })
    }
}
