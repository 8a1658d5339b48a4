//! Quality tagging CLI
//!
//! Reads documents (`{"id": ..., "text": ...}` per line) and writes one
//! attribute record per document. All logging goes to stderr so stdout can
//! carry the records.

use anyhow::Context;
use clap::Parser;
use quality_taggers::{builtin_taggers, TaggerRegistry};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use tagger_cli::{RunConfig, Runner};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "tagger-cli")]
#[command(version, about = "Score JSONL documents with document-quality taggers")]
struct Args {
    /// TOML run configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Comma-separated tagger names (overrides the config file)
    #[arg(short, long, value_delimiter = ',')]
    taggers: Option<Vec<String>>,

    /// Experiment name used as the attribute key prefix
    #[arg(short, long)]
    experiment: Option<String>,

    /// Input JSONL file, or "-" for stdin
    #[arg(short, long, default_value = "-")]
    input: String,

    /// Output JSONL file, or "-" for stdout
    #[arg(short, long, default_value = "-")]
    output: String,

    /// Per-document wall-clock budget in milliseconds
    #[arg(long)]
    max_document_ms: Option<u64>,

    /// Abort on the first failing document instead of skipping it
    #[arg(long)]
    fail_fast: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Print registered tagger names and exit
    #[arg(long)]
    list: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .context("Invalid log level")?;
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = load_config(&args)?;
    let registry = TaggerRegistry::from_taggers(builtin_taggers(config.excerpt_chars))?;

    if args.list {
        for name in registry.names() {
            println!("{}", name);
        }
        return Ok(());
    }

    tracing::info!("Starting tagger-cli v{}", env!("CARGO_PKG_VERSION"));
    let runner = Runner::new(&registry, config)?;

    let reader: Box<dyn BufRead> = if args.input == "-" {
        Box::new(io::stdin().lock())
    } else {
        let file = File::open(&args.input)
            .with_context(|| format!("Failed to open input: {}", args.input))?;
        Box::new(BufReader::new(file))
    };

    let writer: Box<dyn Write> = if args.output == "-" {
        Box::new(BufWriter::new(io::stdout().lock()))
    } else {
        let file = File::create(&args.output)
            .with_context(|| format!("Failed to create output: {}", args.output))?;
        Box::new(BufWriter::new(file))
    };

    let summary = runner.run(reader, writer)?;
    if summary.skipped > 0 {
        tracing::warn!(skipped = summary.skipped, "Some documents were skipped");
    }
    Ok(())
}

/// Config file (or defaults) with command-line overrides applied
fn load_config(args: &Args) -> anyhow::Result<RunConfig> {
    let mut config = match &args.config {
        Some(path) => RunConfig::from_file(path)?,
        None => RunConfig::default(),
    };

    if let Some(taggers) = &args.taggers {
        config.taggers = taggers.clone();
    }
    if let Some(experiment) = &args.experiment {
        config.experiment = experiment.clone();
    }
    if args.max_document_ms.is_some() {
        config.max_document_ms = args.max_document_ms;
    }
    if args.fail_fast {
        config.skip_failed_documents = false;
    }
    Ok(config)
}
