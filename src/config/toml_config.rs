use crate::config::{validate_provider, DEFAULT_CHART_OUTPUT};
use crate::core::ConfigProvider;
use crate::utils::error::{Result, TrendError};
use crate::utils::validation::{validate_required_field, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub inputs: InputsConfig,
    pub trend: TrendConfig,
    #[serde(default)]
    pub output: OutputConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputsConfig {
    pub global_weather: String,
    pub local_weather: String,
    pub local_city: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendConfig {
    pub rolling_average: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_chart_enabled")]
    pub chart: bool,
    pub chart_path: Option<String>,
    pub export_path: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            chart: default_chart_enabled(),
            chart_path: None,
            export_path: None,
        }
    }
}

fn default_chart_enabled() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TrendError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration text, expanding `${VAR}` references first.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TrendError::ConfigError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TrendError::ConfigError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn global_weather_path(&self) -> &str {
        &self.inputs.global_weather
    }

    fn local_weather_path(&self) -> &str {
        &self.inputs.local_weather
    }

    fn local_city(&self) -> &str {
        &self.inputs.local_city
    }

    /// Zero when absent; validation reports the missing key first.
    fn rolling_average(&self) -> i64 {
        self.trend.rolling_average.unwrap_or(0)
    }

    fn chart_output(&self) -> Option<&str> {
        if !self.output.chart {
            return None;
        }
        Some(
            self.output
                .chart_path
                .as_deref()
                .unwrap_or(DEFAULT_CHART_OUTPUT),
        )
    }

    fn export_path(&self) -> Option<&str> {
        self.output.export_path.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_required_field("trend.rolling_average", &self.trend.rolling_average)?;
        validate_provider(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const BASIC: &str = r#"
[inputs]
global_weather = "data/global.csv"
local_weather = "data/lisbon.csv"
local_city = "Lisbon"

[trend]
rolling_average = 10
"#;

    #[test]
    fn test_parse_basic_toml_config() {
        let config = TomlConfig::from_toml_str(BASIC).unwrap();

        assert_eq!(config.local_city(), "Lisbon");
        assert_eq!(config.rolling_average(), 10);
        assert_eq!(config.chart_output(), Some(DEFAULT_CHART_OUTPUT));
        assert_eq!(config.export_path(), None);
        assert!(!config.verbose());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_output_section() {
        let content = format!(
            "{}\n[output]\nchart = false\nexport_path = \"out/report.csv\"\n\n[logging]\nverbose = true\njson = true\n",
            BASIC
        );
        let config = TomlConfig::from_toml_str(&content).unwrap();

        assert_eq!(config.chart_output(), None);
        assert_eq!(config.export_path(), Some("out/report.csv"));
        assert!(config.verbose());
        assert!(config.json_logs());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("WEATHER_TRENDS_TEST_CITY", "Porto");

        let toml_content = r#"
[inputs]
global_weather = "global.csv"
local_weather = "porto.csv"
local_city = "${WEATHER_TRENDS_TEST_CITY}"

[trend]
rolling_average = 5
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.local_city(), "Porto");

        std::env::remove_var("WEATHER_TRENDS_TEST_CITY");
    }

    #[test]
    fn test_missing_window_is_reported() {
        let toml_content = r#"
[inputs]
global_weather = "global.csv"
local_weather = "porto.csv"
local_city = "Porto"

[trend]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(matches!(
            config.validate(),
            Err(TrendError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[inputs\nglobal_weather = 1").unwrap_err();
        assert!(matches!(err, TrendError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(BASIC.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.global_weather_path(), "data/global.csv");
    }
}
