pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_path, validate_window, Validate,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CHART_OUTPUT: &str = "weather_trends.svg";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::Parser))]
#[cfg_attr(feature = "cli", command(name = "weather-trends"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Application that explores weather trends")
)]
pub struct CliConfig {
    /// Path of the global weather CSV (year, avg_temp)
    #[cfg_attr(feature = "cli", arg(long, visible_alias = "global_weather"))]
    pub global_weather: String,

    /// Path of the local weather CSV (year, avg_temp)
    #[cfg_attr(feature = "cli", arg(long, visible_alias = "local_weather"))]
    pub local_weather: String,

    /// Local city name used in the chart legend
    #[cfg_attr(feature = "cli", arg(long, visible_alias = "local_city"))]
    pub local_city: String,

    /// Number of years for the rolling average
    #[cfg_attr(
        feature = "cli",
        arg(long, visible_alias = "rolling_average", allow_negative_numbers = true)
    )]
    pub rolling_average: i64,

    /// Where to write the SVG chart
    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_CHART_OUTPUT))]
    pub chart_output: String,

    /// Skip chart rendering
    #[cfg_attr(feature = "cli", arg(long))]
    pub no_chart: bool,

    /// Optional report export (.csv or .json)
    #[cfg_attr(feature = "cli", arg(long))]
    pub export: Option<String>,

    /// Emit JSON log lines instead of compact text
    #[cfg_attr(feature = "cli", arg(long))]
    pub json_logs: bool,

    #[cfg_attr(feature = "cli", arg(long, short, help = "Enable verbose output"))]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn global_weather_path(&self) -> &str {
        &self.global_weather
    }

    fn local_weather_path(&self) -> &str {
        &self.local_weather
    }

    fn local_city(&self) -> &str {
        &self.local_city
    }

    fn rolling_average(&self) -> i64 {
        self.rolling_average
    }

    fn chart_output(&self) -> Option<&str> {
        if self.no_chart {
            None
        } else {
            Some(self.chart_output.as_str())
        }
    }

    fn export_path(&self) -> Option<&str> {
        self.export.as_deref()
    }
}

/// Checks shared by every configuration source.
pub(crate) fn validate_provider<C: ConfigProvider>(config: &C) -> Result<()> {
    validate_path("global_weather", config.global_weather_path())?;
    validate_file_extension("global_weather", config.global_weather_path(), &["csv"])?;
    validate_path("local_weather", config.local_weather_path())?;
    validate_file_extension("local_weather", config.local_weather_path(), &["csv"])?;
    validate_non_empty_string("local_city", config.local_city())?;
    validate_window("rolling_average", config.rolling_average())?;

    if let Some(chart) = config.chart_output() {
        validate_path("chart_output", chart)?;
        validate_file_extension("chart_output", chart, &["svg"])?;
    }
    if let Some(export) = config.export_path() {
        validate_path("export", export)?;
        validate_file_extension("export", export, &["csv", "json"])?;
    }

    Ok(())
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use crate::utils::error::TrendError;
    use clap::Parser;

    fn parse(args: &[&str]) -> CliConfig {
        let mut argv = vec!["weather-trends"];
        argv.extend_from_slice(args);
        CliConfig::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_parse_kebab_case_flags() {
        let config = parse(&[
            "--global-weather",
            "global.csv",
            "--local-weather",
            "lisbon.csv",
            "--local-city",
            "Lisbon",
            "--rolling-average",
            "7",
        ]);

        assert_eq!(config.global_weather_path(), "global.csv");
        assert_eq!(config.rolling_average(), 7);
        assert_eq!(config.chart_output(), Some(DEFAULT_CHART_OUTPUT));
        assert_eq!(config.export_path(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_underscore_aliases() {
        let config = parse(&[
            "--global_weather",
            "global.csv",
            "--local_weather",
            "porto.csv",
            "--local_city",
            "Porto",
            "--rolling_average",
            "10",
            "--no-chart",
            "--export",
            "out.json",
        ]);

        assert_eq!(config.local_city(), "Porto");
        assert_eq!(config.chart_output(), None);
        assert_eq!(config.export_path(), Some("out.json"));
    }

    #[test]
    fn test_missing_required_flag_is_rejected() {
        let result = CliConfig::try_parse_from(["weather-trends", "--global-weather", "g.csv"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_non_positive_window_fails_validation() {
        let config = parse(&[
            "--global-weather",
            "global.csv",
            "--local-weather",
            "lisbon.csv",
            "--local-city",
            "Lisbon",
            "--rolling-average",
            "-2",
        ]);

        assert!(matches!(
            config.validate(),
            Err(TrendError::InvalidConfigurationError { .. })
        ));
    }

    #[test]
    fn test_wrong_extensions_fail_validation() {
        let mut config = parse(&[
            "--global-weather",
            "global.txt",
            "--local-weather",
            "lisbon.csv",
            "--local-city",
            "Lisbon",
            "--rolling-average",
            "5",
        ]);
        assert!(config.validate().is_err());

        config.global_weather = "global.csv".to_string();
        config.chart_output = "chart.png".to_string();
        assert!(config.validate().is_err());
    }
}
