pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, toml_config::TomlConfig, CliConfig};
pub use core::{engine::TrendEngine, pipeline::TrendPipeline, report::TrendReport};
pub use domain::model::{AggregatePair, Report, Series, TrendPoint, YearRange, YearlyObservation};
pub use utils::error::{Result, TrendError};
