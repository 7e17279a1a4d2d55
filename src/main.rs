//! Launch Dashboard
//!
//! Serves the dashboard, or answers the same selections on the command line.
//!
//! # Configuration
//!
//! `--config PATH`, else `./launchdash.toml`, else the user config directory.
//! Environment variables override the file:
//! - `LAUNCHDASH_DATA`: Dataset CSV (default: spacex_launch_dash.csv)
//! - `LAUNCHDASH_API_HOST`: Host to bind to (default: 127.0.0.1)
//! - `LAUNCHDASH_API_PORT`: Port to listen on (default: 8050)
//! - `LAUNCHDASH_LOG_LEVEL`, `LAUNCHDASH_LOG_FORMAT`: Logging
//! - `RUST_LOG`: Full filter directive, wins over the log level

use anyhow::Context;
use clap::{Parser, Subcommand};
use launch_dashboard::api::{serve, AppState};
use launch_dashboard::config::{generate_default_config, Config, LoggingConfig};
use launch_dashboard::dataset::Dataset;
use launch_dashboard::filter::{outcome_breakdown, payload_correlation, PayloadRange, SiteFilter};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "launch-dashboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interactive dashboard of rocket launch outcomes by site and payload")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Dataset CSV file (overrides config)
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the dashboard web server (default)
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// List launch sites and the payload range of the dataset
    Sites,

    /// Success/failure counts for a site
    Outcomes {
        /// Launch site, or ALL
        #[arg(default_value = "ALL")]
        site: String,
    },

    /// Launches within a payload range
    Payload {
        /// Launch site, or ALL
        #[arg(short, long, default_value = "ALL")]
        site: String,
        /// Lower payload bound in kg (default: dataset minimum)
        #[arg(long, allow_negative_numbers = true)]
        low: Option<f64>,
        /// Upper payload bound in kg (default: dataset maximum)
        #[arg(long, allow_negative_numbers = true)]
        high: Option<f64>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (mut config, config_source) = match &cli.config {
        Some(path) => (Config::load_with_env(path)?, Some(path.clone())),
        None => Config::load_default()?,
    };
    if let Some(data) = cli.data {
        config.dataset.path = data;
    }

    init_tracing(&config.logging);

    match &config_source {
        Some(path) => tracing::debug!("Loaded config from {:?}", path),
        None => tracing::debug!("Using default config with environment overrides"),
    }

    let command = cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
    });

    match command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.api.host = host;
            }
            if let Some(port) = port {
                config.api.port = port;
            }

            tracing::info!(
                "Starting launch dashboard v{} on {}",
                env!("CARGO_PKG_VERSION"),
                config.api.addr()
            );

            let dataset = load_dataset(&config)?;
            let state = AppState::new(dataset, config.dashboard.clone());
            serve(state, &config.api).await?;
        }

        Commands::Sites => {
            let dataset = load_dataset(&config)?;

            println!("{:<20} {:>8}", "SITE", "LAUNCHES");
            for site in dataset.sites() {
                let count = outcome_breakdown(&dataset, &SiteFilter::parse(site)).len();
                println!("{:<20} {:>8}", site, count);
            }
            match dataset.payload_bounds() {
                Some((min, max)) => println!("\nPayload range: {} - {} kg", min, max),
                None => println!("\nDataset is empty"),
            }
        }

        Commands::Outcomes { site } => {
            let dataset = load_dataset(&config)?;
            let result = outcome_breakdown(&dataset, &SiteFilter::parse(&site));

            println!("{}", result.title);
            println!("{:<8} {:>8} {:>8}", "CLASS", "COUNT", "SHARE");
            for slice in result.outcome_slices() {
                println!(
                    "{:<8} {:>8} {:>7.1}%",
                    slice.outcome,
                    slice.count,
                    slice.share * 100.0
                );
            }
        }

        Commands::Payload { site, low, high } => {
            let dataset = load_dataset(&config)?;
            let (min, max) = dataset.payload_bounds().unwrap_or((0.0, 0.0));
            let range = PayloadRange::new(low.unwrap_or(min), high.unwrap_or(max));
            let result = payload_correlation(&dataset, &SiteFilter::parse(&site), range);

            println!("{}", result.title);
            println!(
                "{:<20} {:>12} {:<10} {:>5}",
                "SITE", "PAYLOAD_KG", "BOOSTER", "CLASS"
            );
            for row in &result.rows {
                println!(
                    "{:<20} {:>12.1} {:<10} {:>5}",
                    row.launch_site, row.payload_mass_kg, row.booster_version_category, row.outcome
                );
            }
            println!("\n{} launches", result.len());
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("failed to write config to {:?}", path))?;
                    println!("Wrote default config to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

/// Load the dataset named by the config; any bad row is fatal
fn load_dataset(config: &Config) -> anyhow::Result<Arc<Dataset>> {
    let dataset = Dataset::load(&config.dataset.path)
        .with_context(|| format!("failed to load dataset {:?}", config.dataset.path))?;
    Ok(Arc::new(dataset))
}

/// Set up the tracing subscriber; logs go to stderr so command output stays clean
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "launch_dashboard={},tower_http=info",
            logging.level
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
