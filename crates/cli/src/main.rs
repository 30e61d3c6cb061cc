//! FRA Atlas CLI - vegetation-index analysis for forest-rights claims

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use fratlas_algorithms::analysis::{Recommendation, TrendReport};
use fratlas_algorithms::export::ExportOptions;
use fratlas_algorithms::timeseries::{EntropySource, RandomSource, SeededSource};
use fratlas_algorithms::{AnalysisConfig, NdviCalculator};
use fratlas_colormap::{render_overlay, OverlayParams};
use fratlas_core::io::{read_json, write_json};
use fratlas_core::TimeSeries;

// ─── CLI structure ──────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "fratlas")]
#[command(author, version, about = "Vegetation-index analysis for forest-rights claims", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// TOML configuration file (thresholds and algorithm parameters)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute NDVI from NIR and red reflectance
    Index {
        /// Near-infrared reflectance
        #[arg(long, allow_negative_numbers = true)]
        nir: f64,
        /// Red reflectance
        #[arg(long, allow_negative_numbers = true)]
        red: f64,
    },
    /// Classify an index value and show its map colour and health status
    Classify {
        /// Index value
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
    /// Generate a synthetic index series
    Generate {
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start: String,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end: String,
        /// Index lost per 30-day month
        #[arg(short, long)]
        rate: Option<f64>,
        /// Seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,
        /// Write the series as JSON instead of printing it
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Detect degradation events in a series file
    Detect {
        /// Series JSON file
        input: PathBuf,
        /// Minimum drop from baseline that raises an event
        #[arg(short, long)]
        threshold: Option<f64>,
    },
    /// Generate, detect and export in one run
    Analyze {
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start: String,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end: String,
        /// Index lost per 30-day month
        #[arg(short, long)]
        rate: Option<f64>,
        /// Seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,
        /// Minimum drop from baseline that raises an event
        #[arg(short, long)]
        threshold: Option<f64>,
        /// Write the analysis bundle to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Trend report and recommendations for a series file
    Report {
        /// Series JSON file
        input: PathBuf,
    },
    /// Render the claim overlay for a series as raw RGBA bytes
    Overlay {
        /// Series JSON file
        input: PathBuf,
        /// Output file (width * height * 4 bytes, row-major)
        #[arg(short, long)]
        output: PathBuf,
        #[arg(long, default_value = "200")]
        width: usize,
        #[arg(long, default_value = "200")]
        height: usize,
    },
}

#[derive(Serialize)]
struct ReportOutput {
    report: TrendReport,
    recommendation: Recommendation,
}

// ─── Helpers ────────────────────────────────────────────────────────────

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")
}

fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn load_config(path: Option<&Path>) -> Result<AnalysisConfig> {
    match path {
        Some(p) => {
            let config = AnalysisConfig::load(p)
                .with_context(|| format!("Failed to load config {}", p.display()))?;
            debug!("Config loaded from {}", p.display());
            Ok(config)
        }
        None => Ok(AnalysisConfig::default()),
    }
}

fn random_source(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => Box::new(SeededSource::new(seed)),
        None => Box::new(EntropySource::new()),
    }
}

fn read_series(path: &Path) -> Result<TimeSeries> {
    let pb = spinner("Reading series...");
    let series: TimeSeries = read_json(path)
        .with_context(|| format!("Failed to read series {}", path.display()))?;
    pb.finish_and_clear();
    info!("Input: {} samples", series.len());
    Ok(series)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", text);
    Ok(())
}

fn done(name: &str, path: &Path, elapsed: std::time::Duration) {
    println!("{} saved to: {}", name, path.display());
    println!("  Processing time: {:.2?}", elapsed);
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;

    let mut config = load_config(cli.config.as_deref())?;

    match cli.command {
        // ── Index ────────────────────────────────────────────────────
        Commands::Index { nir, red } => {
            let calc = NdviCalculator::from_config(&config).context("Invalid configuration")?;
            let index = calc.compute_index(nir, red);
            println!("NDVI: {:.4}", index);
            println!("Classification: {}", calc.classify(index));
            println!("Colour: {}", calc.color_for(index));
        }

        // ── Classify ─────────────────────────────────────────────────
        Commands::Classify { value } => {
            let calc = NdviCalculator::from_config(&config).context("Invalid configuration")?;
            let health = calc.assess(value);
            println!("Classification: {}", calc.classify(value));
            println!("Colour: {}", calc.color_for(value));
            println!("Health score: {}", health.health_score);
            println!("Recommendation: {}", health.recommendation);
        }

        // ── Generate ─────────────────────────────────────────────────
        Commands::Generate {
            start,
            end,
            rate,
            seed,
            output,
        } => {
            if let Some(rate) = rate {
                config.generator.degradation_rate = rate;
            }
            let calc = NdviCalculator::from_config(&config).context("Invalid configuration")?;
            let t0 = Instant::now();
            let series = calc
                .generate(&start, &end, config.generator.degradation_rate, random_source(seed))
                .context("Failed to generate series")?;
            let elapsed = t0.elapsed();
            info!("Generated {} samples", series.len());

            match output {
                Some(path) => {
                    write_json(&series, &path).context("Failed to write output")?;
                    done("Series", &path, elapsed);
                }
                None => print_json(&series)?,
            }
        }

        // ── Detect ───────────────────────────────────────────────────
        Commands::Detect { input, threshold } => {
            if let Some(threshold) = threshold {
                config.detection.alert_threshold = threshold;
            }
            let series = read_series(&input)?;
            let calc = NdviCalculator::from_config(&config).context("Invalid configuration")?;
            let changes = calc
                .detect_changes(&series)
                .context("Failed to detect changes")?;
            info!("{} events detected", changes.len());
            print_json(&changes)?;
        }

        // ── Analyze ──────────────────────────────────────────────────
        Commands::Analyze {
            start,
            end,
            rate,
            seed,
            threshold,
            output,
        } => {
            if let Some(rate) = rate {
                config.generator.degradation_rate = rate;
            }
            if let Some(threshold) = threshold {
                config.detection.alert_threshold = threshold;
            }
            let calc = NdviCalculator::from_config(&config).context("Invalid configuration")?;

            let pb = spinner("Analyzing...");
            let t0 = Instant::now();
            let series = calc
                .generate(&start, &end, config.generator.degradation_rate, random_source(seed))
                .context("Failed to generate series")?;
            let changes = calc
                .detect_changes(&series)
                .context("Failed to detect changes")?;
            let options = ExportOptions {
                download: output.is_some() || config.export.download,
                ..config.export.clone()
            };
            let export = calc
                .export(&series, &changes, &options)
                .context("Failed to export analysis")?;
            let elapsed = t0.elapsed();
            pb.finish_and_clear();

            let summary = &export.bundle.summary;
            info!(
                "{} samples, {} alerts, current health: {}",
                summary.total_data_points, summary.alerts_generated, summary.health_status
            );

            match (output, export.download) {
                (Some(path), Some(download)) => {
                    std::fs::write(&path, &download.bytes)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    done("Analysis", &path, elapsed);
                }
                (None, Some(download)) => {
                    std::fs::write(&download.filename, &download.bytes)
                        .with_context(|| format!("Failed to write {}", download.filename))?;
                    done("Analysis", Path::new(&download.filename), elapsed);
                }
                (_, None) => print_json(&export.bundle)?,
            }
        }

        // ── Report ───────────────────────────────────────────────────
        Commands::Report { input } => {
            let series = read_series(&input)?;
            let calc = NdviCalculator::from_config(&config).context("Invalid configuration")?;
            let (report, recommendation) =
                calc.analyze(&series).context("Failed to analyze series")?;
            print_json(&ReportOutput {
                report,
                recommendation,
            })?;
        }

        // ── Overlay ──────────────────────────────────────────────────
        Commands::Overlay {
            input,
            output,
            width,
            height,
        } => {
            let series = read_series(&input)?;
            let params = OverlayParams {
                width,
                height,
                thresholds: config.thresholds,
            };
            let t0 = Instant::now();
            let rgba = render_overlay(&series, &params);
            let elapsed = t0.elapsed();
            std::fs::write(&output, &rgba)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            info!("Overlay: {} x {} RGBA", width, height);
            done("Overlay", &output, elapsed);
        }
    }

    Ok(())
}
