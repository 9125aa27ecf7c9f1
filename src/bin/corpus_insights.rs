//! corpus-insights CLI
//!
//! Loads an article/summary CSV and prints analysis results as JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use corpus_insights::{
    AnalysisConfig, CorpusLoader, CorpusMetrics, CorpusReport, LengthSummary, RecordBrowser,
    TextField,
};
use serde_json::json;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "corpus-insights")]
#[command(about = "Length and word-frequency analysis of article/summary corpora", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// CSV file with article, highlights and t5_summary columns
    #[arg(short, long, default_value = "cnn_daily_t5.csv")]
    data: PathBuf,

    /// JSON analysis configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbosity level
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Character length of every record, with box-plot statistics
    Lengths {
        /// article, highlights or t5_summary
        field: String,
    },

    /// Most frequent words of a field
    TopWords {
        field: String,

        /// Number of words (defaults to the configured top_k)
        #[arg(short)]
        k: Option<usize>,
    },

    /// Word-cloud weights of a field
    Cloud {
        field: String,

        /// Maximum words (defaults to the configured cloud_max_words)
        #[arg(long)]
        max_words: Option<usize>,
    },

    /// Print one record, numbered from 1
    Show { line: String },

    /// Statistics for every configured field
    Report,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set subscriber")?;

    let config = match &cli.config {
        Some(path) => AnalysisConfig::from_path(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?,
        None => AnalysisConfig::default(),
    };

    let corpus = CorpusLoader::from_path(&cli.data)
        .with_context(|| format!("Failed to load {}", cli.data.display()))?;
    info!(records = corpus.len(), "Corpus ready");

    match cli.command {
        Commands::Lengths { field } => {
            let field: TextField = field.parse()?;
            let series = CorpusMetrics::lengths(&corpus, field);
            let summary = LengthSummary::from_series(&series);
            print_json(&json!({ "series": series, "summary": summary }))?;
        }
        Commands::TopWords { field, k } => {
            let field: TextField = field.parse()?;
            let analyzer = config.build_analyzer()?;
            let table = analyzer.top_words(&corpus, field, k.unwrap_or(config.top_k));
            print_json(&table)?;
        }
        Commands::Cloud { field, max_words } => {
            let field: TextField = field.parse()?;
            let analyzer = config.build_analyzer()?;
            let cloud =
                analyzer.word_cloud(&corpus, field, max_words.unwrap_or(config.cloud_max_words));
            print_json(&cloud)?;
        }
        Commands::Show { line } => {
            let browser = RecordBrowser::new(&corpus);
            let view = browser.view_line(&line)?;
            println!("Record {} of {}", view.line_number(), browser.len());
            for field in TextField::ALL {
                println!("\n== {} ==\n{}", field.label(), view.field(field));
            }
        }
        Commands::Report => {
            let report = CorpusReport::build(&corpus, &config)?;
            println!("{}", report.to_json_pretty()?);
        }
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
