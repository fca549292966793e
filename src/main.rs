//! CLI entry point for the crime incident report generator.
//!
//! Runs the whole batch pipeline: load, normalize, aggregate, render charts
//! and maps, write everything under the output directory.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crime_report::{aggregate, charts, geo, loader, maps, report, timeparse};

#[derive(Parser)]
#[command(name = "crime_report")]
#[command(about = "Analyze a crime incident table and render charts and maps", long_about = None)]
struct Cli {
    /// Path to the delimited incident file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Directory for rendered SVG charts and HTML maps
    #[arg(short, long, default_value = "report")]
    out_dir: PathBuf,

    /// Number of top charges to report
    #[arg(short = 'n', long, default_value_t = 10)]
    top_n: usize,

    /// Initial zoom level for the map pages
    #[arg(short, long, default_value_t = 15)]
    zoom: u32,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/crime_report.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("crime_report.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    run(&cli)
}

#[tracing::instrument(skip(cli), fields(input = %cli.input.display()))]
fn run(cli: &Cli) -> Result<()> {
    let records = loader::load_incidents(&cli.input)?;
    let records = timeparse::normalize(records);

    report::log_sample(&records, 10);

    let top = aggregate::top_charges(&records, cli.top_n);
    report::log_top_charges(&top);

    let monthly = aggregate::counts_per_month(&records);
    let hourly = aggregate::counts_by_hour(&records);
    let daily = aggregate::counts_by_day_of_week(&records);
    let day_hour = aggregate::day_hour_matrix(&records);
    let month_bucket = aggregate::month_bucket_matrix(&records);

    let monthly_labels: Vec<(String, usize)> = monthly
        .iter()
        .map(|((year, month), count)| (format!("{year}-{month:02}"), *count))
        .collect();
    let hourly_labels: Vec<(String, usize)> =
        hourly.iter().map(|(h, c)| (h.to_string(), *c)).collect();
    let daily_labels: Vec<(String, usize)> =
        daily.iter().map(|(d, c)| (d.to_string(), *c)).collect();

    report::write_artifact(
        &cli.out_dir,
        "top_charges.svg",
        &charts::bar_chart(
            &format!("Top {} Most Common Charges", cli.top_n),
            "Charge",
            "Frequency",
            &top,
        ),
    )?;
    report::write_artifact(
        &cli.out_dir,
        "crimes_per_month.svg",
        &charts::bar_chart("Crimes per Month", "Month", "Number of Crimes", &monthly_labels),
    )?;
    report::write_artifact(
        &cli.out_dir,
        "crimes_by_hour.svg",
        &charts::bar_chart("Crime Frequency by Hour", "Hour", "Crime Count", &hourly_labels),
    )?;
    report::write_artifact(
        &cli.out_dir,
        "crimes_by_day.svg",
        &charts::bar_chart("Crime Frequency by Day", "Day", "Crime Count", &daily_labels),
    )?;
    report::write_artifact(
        &cli.out_dir,
        "day_hour_heatmap.svg",
        &charts::day_hour_heatmap(&day_hour),
    )?;
    report::write_artifact(
        &cli.out_dir,
        "monthly_time_period_trends.svg",
        &charts::month_bucket_lines(&month_bucket),
    )?;

    match geo::map_center(&records) {
        Some(center) => {
            let heat = geo::heatmap_points(&records);
            let markers = geo::marker_points(&records);

            report::write_artifact(
                &cli.out_dir,
                "crime_heatmap.html",
                &maps::heatmap_page(&heat, center, cli.zoom)?,
            )?;
            report::write_artifact(
                &cli.out_dir,
                "crime_cluster_map.html",
                &maps::cluster_page(&markers, center, cli.zoom)?,
            )?;

            info!(
                heat_points = heat.len(),
                markers = markers.len(),
                "Map pages written"
            );
        }
        None => {
            warn!("No records with valid coordinates, skipping map pages");
        }
    }

    info!(
        rows = records.len(),
        timestamped = records.iter().filter(|r| r.reported_at.is_some()).count(),
        out_dir = %cli.out_dir.display(),
        "Report complete"
    );

    Ok(())
}
