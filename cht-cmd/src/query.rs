//! Trend query from the command line.

use crate::OutputFormat;
use anyhow::Context;
use cht_core::client::{prepare_request, ReqwestTransport, TrendClient};
use cht_core::config::AppConfig;
use cht_core::coordinate::Coordinate;
use cht_core::trend::TrendSeries;
use log::{info, warn};
use std::io::Write;
use std::path::Path;
use std::time::Duration;

/// Load the config file if one was given, then apply the endpoint override.
pub fn load_config(path: Option<&Path>, endpoint: Option<String>) -> anyhow::Result<AppConfig> {
    let config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            AppConfig::from_toml_str(&text)
                .with_context(|| format!("Invalid config {}", path.display()))?
        }
        None => AppConfig::default(),
    };
    Ok(match endpoint {
        Some(endpoint) => config.with_endpoint(endpoint),
        None => config,
    })
}

/// Validate the arguments, fetch the series and print it to stdout.
pub async fn run_trend(
    config: &AppConfig,
    lat: f64,
    lon: f64,
    start_year: &str,
    end_year: &str,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let coordinate = Coordinate::new(lat, lon)?;
    let request = prepare_request(coordinate, start_year, end_year, config.years.bounds())?;

    let transport = ReqwestTransport::new(Duration::from_secs(config.request_timeout_secs))?;
    let client = TrendClient::new(config.endpoint.clone(), transport);
    info!("Querying {} for {}", client.endpoint(), coordinate);

    let series = client.fetch_trend(&request).await?;

    let missing = series.missing_years(&request.range());
    if !missing.is_empty() {
        warn!("No data returned for years: {:?}", missing);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_series(&series, format, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Print a series in the requested format.
pub fn write_series<W: Write>(
    series: &TrendSeries,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => {
            writeln!(out, "{:>6}  {:>15}", "year", "heatwave_events")?;
            for point in series.points() {
                writeln!(out, "{:>6}  {:>15}", point.year, point.heatwave_events)?;
            }
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(out);
            wtr.write_record(["year", "heatwave_events"])?;
            for point in series.points() {
                wtr.write_record([point.year.to_string(), point.heatwave_events.to_string()])?;
            }
            wtr.flush()?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, series)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
