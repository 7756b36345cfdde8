use clap::Parser;
use weather_trends::core::ConfigProvider;
use weather_trends::utils::{logger, validation::Validate};
use weather_trends::{LocalStorage, TomlConfig, TrendEngine, TrendPipeline};

#[derive(Parser)]
#[command(name = "toml-trends")]
#[command(about = "Weather trend explorer driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "weather-trends.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the rolling average window from the config
    #[arg(long, allow_negative_numbers = true)]
    rolling_average: Option<i64>,

    /// Validate the configuration and print what would run
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    let verbose = args.verbose || config.verbose();
    if config.json_logs() {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("📁 Loaded configuration from: {}", args.config);

    if let Some(window) = args.rolling_average {
        config.trend.rolling_average = Some(window);
        tracing::info!("🔧 Rolling average overridden to: {}", window);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    display_config_summary(&config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No files will be read or written");
        return Ok(());
    }

    let engine = TrendEngine::new(TrendPipeline::new(LocalStorage::default(), config));

    match engine.run().await {
        Ok(outcome) => {
            tracing::info!("✅ Weather trends explored successfully");
            for path in &outcome.written {
                println!("📁 Output saved to: {}", path);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            std::process::exit(e.severity().exit_code());
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig) {
    tracing::info!("📋 Configuration Summary:");
    tracing::info!("  Global weather: {}", config.global_weather_path());
    tracing::info!(
        "  Local weather: {} ({})",
        config.local_weather_path(),
        config.local_city()
    );
    tracing::info!("  Rolling average: {} years", config.rolling_average());
    match config.chart_output() {
        Some(path) => tracing::info!("  Chart: {}", path),
        None => tracing::info!("  Chart: disabled"),
    }
    if let Some(path) = config.export_path() {
        tracing::info!("  Export: {}", path);
    }
}
