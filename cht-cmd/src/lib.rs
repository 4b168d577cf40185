//! Command implementations for the trend analyzer CLI.
//!
//! Provides subcommands for querying the heatwave trend endpoint from the
//! terminal and for inspecting the effective configuration.

use clap::{Subcommand, ValueEnum};
use std::path::PathBuf;

pub mod query;

/// How `trend` prints the series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Query heatwave events per year for a coordinate
    Trend {
        /// Latitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// First year of the range (inclusive)
        #[arg(short = 's', long)]
        start_year: String,

        /// Last year of the range (inclusive)
        #[arg(short = 'e', long)]
        end_year: String,

        /// Analytics endpoint (overrides the config file)
        #[arg(long)]
        endpoint: Option<String>,

        /// Path to a TOML config file
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,

        #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Print the effective configuration as TOML
    ShowConfig {
        /// Path to a TOML config file
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Trend {
            lat,
            lon,
            start_year,
            end_year,
            endpoint,
            config,
            format,
        } => {
            let config = query::load_config(config.as_deref(), endpoint)?;
            query::run_trend(&config, lat, lon, &start_year, &end_year, format).await
        }
        Command::ShowConfig { config } => {
            let config = query::load_config(config.as_deref(), None)?;
            print!("{}", config.to_toml_string()?);
            Ok(())
        }
    }
}
