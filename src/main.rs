use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dermatone::models::{AppConfig, ErrorPolicy, OutputFormat};
use dermatone::services::BatchService;
use tone_scale::{FitzpatrickType, QueryMode, SearchScope, ToneRecord};

#[derive(Parser)]
#[command(name = "dermatone")]
#[command(about = "Map detected skin tones onto the Fitzpatrick and von Luschan scales")]
struct Cli {
    /// YAML config file (falls back to $CONFIG_FILE)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconcile a tone detector CSV into the extended results table
    Reconcile {
        /// Detector output CSV (columns: file, skin tone, accuracy(0-100))
        #[arg(short, long)]
        input: PathBuf,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Search scope: "fitzpatrick_range" or "full_table"
        #[arg(long)]
        scope: Option<SearchScope>,

        /// Query vector: "weighted_tone" or "dominant_blend"
        #[arg(long)]
        query: Option<QueryMode>,

        /// Failure policy: "skip" or "abort"
        #[arg(long)]
        on_error: Option<ErrorPolicy>,

        /// Output format: "csv" or "json"
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },
    /// Reconcile a single color and print the match as JSON
    Classify {
        /// Detected skin tone, e.g. "#9d7a54"
        color: String,

        /// Detector accuracy in percent
        #[arg(short, long, default_value_t = 100.0)]
        accuracy: f64,

        /// Search scope: "fitzpatrick_range" or "full_table"
        #[arg(long)]
        scope: Option<SearchScope>,
    },
    /// Print the von Luschan scale with Fitzpatrick ranges and the anchor palette
    Scale,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dermatone=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config_path = cli
        .config
        .or_else(|| std::env::var("CONFIG_FILE").ok().map(PathBuf::from));
    let config = AppConfig::load(config_path.as_deref());

    match cli.command {
        Some(Commands::Reconcile {
            input,
            output,
            scope,
            query,
            on_error,
            format,
        }) => {
            let config = AppConfig {
                search_scope: scope.unwrap_or(config.search_scope),
                query: query.unwrap_or(config.query),
                on_error: on_error.unwrap_or(config.on_error),
                output_format: format.unwrap_or(config.output_format),
                ..config
            };
            run_reconcile_command(&config, &input, output.as_deref())
        }
        Some(Commands::Classify {
            color,
            accuracy,
            scope,
        }) => {
            let config = AppConfig {
                search_scope: scope.unwrap_or(config.search_scope),
                ..config
            };
            run_classify_command(&config, &color, accuracy)
        }
        Some(Commands::Scale) => run_scale_command(&config),
        None => {
            run_status_command(config_path.as_deref());
            Ok(())
        }
    }
}

/// Reconcile a detector CSV file
fn run_reconcile_command(
    config: &AppConfig,
    input: &Path,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let service = BatchService::from_config(config)?;
    let report = service.run_file(input, output, config.output_format)?;

    if !report.is_clean() {
        eprintln!(
            "{} of {} records could not be reconciled:",
            report.failures.len(),
            report.processed
        );
        for failure in &report.failures {
            eprintln!("  - {failure}");
        }
    }

    Ok(())
}

/// Reconcile one color and print the details
fn run_classify_command(config: &AppConfig, color: &str, accuracy: f64) -> anyhow::Result<()> {
    let reconciler = config.build_reconciler()?;
    let record = ToneRecord::new("-", color, accuracy);
    let tone_match = reconciler.match_tone(&record)?;

    println!("{}", serde_json::to_string_pretty(&tone_match)?);
    Ok(())
}

/// Print the active options and the reference tables
fn run_scale_command(config: &AppConfig) -> anyhow::Result<()> {
    let reconciler = config.build_reconciler()?;
    let scale = reconciler.scale();
    let anchors = reconciler.anchors();

    println!(
        "Search scope: {}, query: {}\n",
        reconciler.scope(),
        reconciler.query_mode()
    );
    println!("von Luschan scale:\n");
    println!("  type  rgb       fitzpatrick");
    for entry in scale.table() {
        let fitzpatrick = scale
            .fitzpatrick_of(entry.tone_type)
            .map(|t| t.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("  {:>4}  {}   {}", entry.tone_type, entry.rgb, fitzpatrick);
    }

    println!("\nFitzpatrick anchors:\n");
    for fitzpatrick in FitzpatrickType::ALL {
        let (start, end) = fitzpatrick.luschan_range();
        let colors: Vec<String> = fitzpatrick
            .anchor_indices()
            .iter()
            .map(|&idx| format!("[{idx}] {}", anchors.color(idx)))
            .collect();
        println!(
            "  type {fitzpatrick}: {:<28} von Luschan {}-{}",
            colors.join(", "),
            start + 1,
            end + 1
        );
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command(config_path: Option<&Path>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("Dermatone v{VERSION}");
    println!("Fitzpatrick / von Luschan skin tone reconciliation\n");

    println!("Configuration:");
    println!(
        "  CONFIG_FILE = {}",
        config_path
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(not set, using defaults)".to_string())
    );

    println!("\nCommands:");
    println!("  dermatone reconcile   Reconcile a tone detector CSV");
    println!("  dermatone classify    Reconcile a single color");
    println!("  dermatone scale       Print the reference scales");
    println!("\nRun 'dermatone --help' for more details.");
}
