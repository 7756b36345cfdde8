use crate::domain::model::{Report, Series};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn global_weather_path(&self) -> &str;
    fn local_weather_path(&self) -> &str;
    fn local_city(&self) -> &str;
    /// Raw value as supplied; `TrendReport::build` rejects non-positive windows.
    fn rolling_average(&self) -> i64;
    fn chart_output(&self) -> Option<&str>;
    fn export_path(&self) -> Option<&str>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    /// Loads the (global, local) series.
    async fn extract(&self) -> Result<(Series, Series)>;
    async fn transform(&self, global: Series, local: Series) -> Result<Report>;
    /// Presents the report and returns the paths of any files written.
    async fn load(&self, report: Report) -> Result<Vec<String>>;
}
