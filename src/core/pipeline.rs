use crate::adapters::{chart, export, summary, weather_csv};
use crate::core::report::TrendReport;
use crate::core::{ConfigProvider, Pipeline, Report, Series, Storage};
use crate::utils::error::Result;

pub struct TrendPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> TrendPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    async fn read_series(&self, label: &str, path: &str) -> Result<Series> {
        tracing::debug!("Reading {} weather from: {}", label, path);
        let data = self.storage.read_file(path).await?;
        weather_csv::parse_weather_csv(label, &data)
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for TrendPipeline<S, C> {
    async fn extract(&self) -> Result<(Series, Series)> {
        let global = self
            .read_series("global", self.config.global_weather_path())
            .await?;
        let local = self
            .read_series(self.config.local_city(), self.config.local_weather_path())
            .await?;

        Ok((global, local))
    }

    async fn transform(&self, global: Series, local: Series) -> Result<Report> {
        TrendReport::new(self.config.local_city()).build(
            &global,
            &local,
            self.config.rolling_average(),
        )
    }

    async fn load(&self, report: Report) -> Result<Vec<String>> {
        let mut written = Vec::new();

        println!("{}", summary::render_summary(&report));

        if let Some(chart_path) = self.config.chart_output() {
            match chart::render_trend_chart(&report)? {
                Some(svg) => {
                    tracing::debug!("Writing chart ({} bytes) to {}", svg.len(), chart_path);
                    self.storage.write_file(chart_path, svg.as_bytes()).await?;
                    written.push(chart_path.to_string());
                }
                None => tracing::info!("Chart not written: no smoothed values to plot"),
            }
        }

        if let Some(export_path) = self.config.export_path() {
            let format = export::ExportFormat::from_path(export_path)?;
            let content = export::export(&report, format)?;
            tracing::debug!("Writing {:?} export to {}", format, export_path);
            self.storage
                .write_file(export_path, content.as_bytes())
                .await?;
            written.push(export_path.to_string());
        }

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::TrendError;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        async fn put(&self, path: &str, content: &str) {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), content.as_bytes().to_vec());
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                TrendError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockConfig {
        rolling_average: i64,
        chart_output: Option<String>,
        export_path: Option<String>,
    }

    impl MockConfig {
        fn new(rolling_average: i64) -> Self {
            Self {
                rolling_average,
                chart_output: Some("trends.svg".to_string()),
                export_path: None,
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn global_weather_path(&self) -> &str {
            "global.csv"
        }

        fn local_weather_path(&self) -> &str {
            "city.csv"
        }

        fn local_city(&self) -> &str {
            "Lisbon"
        }

        fn rolling_average(&self) -> i64 {
            self.rolling_average
        }

        fn chart_output(&self) -> Option<&str> {
            self.chart_output.as_deref()
        }

        fn export_path(&self) -> Option<&str> {
            self.export_path.as_deref()
        }
    }

    fn table(years: std::ops::RangeInclusive<i32>, base: f64) -> String {
        let mut text = String::from("year,avg_temp\n");
        for year in years {
            text.push_str(&format!("{},{:.2}\n", year, base + f64::from(year % 4) * 0.1));
        }
        text
    }

    async fn storage_with(global: &str, local: &str) -> MockStorage {
        let storage = MockStorage::default();
        storage.put("global.csv", global).await;
        storage.put("city.csv", local).await;
        storage
    }

    #[tokio::test]
    async fn test_extract_reads_both_series() {
        let storage = storage_with(&table(1900..=2015, 8.0), &table(1950..=2020, 15.0)).await;
        let pipeline = TrendPipeline::new(storage, MockConfig::new(5));

        let (global, local) = pipeline.extract().await.unwrap();
        assert_eq!(global.len(), 116);
        assert_eq!(local.len(), 71);
    }

    #[tokio::test]
    async fn test_extract_missing_file_fails() {
        let storage = MockStorage::default();
        storage.put("global.csv", &table(1900..=1910, 8.0)).await;
        let pipeline = TrendPipeline::new(storage, MockConfig::new(5));

        let err = pipeline.extract().await.unwrap_err();
        assert!(matches!(err, TrendError::IoError(_)));
    }

    #[tokio::test]
    async fn test_transform_uses_configured_window() {
        let storage = storage_with(&table(1900..=2015, 8.0), &table(1950..=2020, 15.0)).await;
        let pipeline = TrendPipeline::new(storage, MockConfig::new(5));

        let (global, local) = pipeline.extract().await.unwrap();
        let report = pipeline.transform(global, local).await.unwrap();

        assert_eq!(report.smoothing_window, 5);
        assert_eq!(report.local_name, "Lisbon");
        assert_eq!(report.global_trend.len(), 66);
    }

    #[tokio::test]
    async fn test_transform_rejects_zero_window() {
        let storage = storage_with(&table(1900..=1950, 8.0), &table(1920..=1960, 15.0)).await;
        let pipeline = TrendPipeline::new(storage, MockConfig::new(0));

        let (global, local) = pipeline.extract().await.unwrap();
        let err = pipeline.transform(global, local).await.unwrap_err();
        assert!(matches!(err, TrendError::InvalidConfigurationError { .. }));
    }

    #[tokio::test]
    async fn test_load_writes_chart_and_export() {
        let storage = storage_with(&table(1900..=1950, 8.0), &table(1920..=1960, 15.0)).await;
        let mut config = MockConfig::new(3);
        config.export_path = Some("report.json".to_string());
        let pipeline = TrendPipeline::new(storage.clone(), config);

        let (global, local) = pipeline.extract().await.unwrap();
        let report = pipeline.transform(global, local).await.unwrap();
        let written = pipeline.load(report).await.unwrap();

        assert_eq!(written, vec!["trends.svg".to_string(), "report.json".to_string()]);
        let svg = storage.get_file("trends.svg").await.unwrap();
        assert!(String::from_utf8(svg).unwrap().contains("Lisbon"));
        assert!(storage.get_file("report.json").await.is_some());
    }

    #[tokio::test]
    async fn test_load_without_overlap_skips_chart() {
        let storage = storage_with(&table(1900..=1950, 8.0), &table(1960..=2020, 15.0)).await;
        let pipeline = TrendPipeline::new(storage.clone(), MockConfig::new(5));

        let (global, local) = pipeline.extract().await.unwrap();
        let report = pipeline.transform(global, local).await.unwrap();
        let written = pipeline.load(report).await.unwrap();

        assert!(written.is_empty());
        assert!(storage.get_file("trends.svg").await.is_none());
    }
}
