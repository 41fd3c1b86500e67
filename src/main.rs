use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use xfchess_counter::config::SetupLimits;
use xfchess_counter::{load_setup, report};

const STDOUT_PATH: &str = "-";

/// Count the moves and captures of every piece on a described board
#[derive(Parser, Debug)]
#[command(name = "xfchess-counter", version, about)]
struct Args {
    /// Board description to read
    #[arg(short, long, default_value = "input.txt")]
    input: PathBuf,

    /// Where to write the report, "-" for stdout
    #[arg(short, long, default_value = "output.txt")]
    output: PathBuf,

    /// JSON file with setup limits
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Smallest accepted board size, overriding the limits file
    #[arg(long)]
    min_size: Option<i32>,

    /// Largest accepted board size, overriding the limits file
    #[arg(long)]
    max_size: Option<i32>,

    /// Fewest accepted pieces, overriding the limits file
    #[arg(long)]
    min_pieces: Option<usize>,

    /// Log every placement
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let limits = match &args.config {
        Some(path) => SetupLimits::load(path)
            .with_context(|| format!("failed to load limits from {}", path.display()))?,
        None => SetupLimits::default(),
    }
    .with_overrides(args.min_size, args.max_size, args.min_pieces)
    .context("invalid limit overrides")?;

    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let outcome = load_setup(&text, &limits);
    match &outcome {
        Ok(setup) => info!("[COUNTER] Counted {} pieces", setup.order().len()),
        Err(err) => warn!("[COUNTER] Rejected {}: {}", args.input.display(), err),
    }

    write_report(&args.output, &report::render_outcome(&outcome))
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn write_report(output: &Path, text: &str) -> Result<()> {
    if output.as_os_str() == STDOUT_PATH {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(text.as_bytes())
            .context("failed to write report to stdout")?;
        return stdout.flush().context("failed to flush stdout");
    }

    fs::write(output, text).with_context(|| format!("failed to write {}", output.display()))
}
