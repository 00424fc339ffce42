use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use zcalc::calculator::OperatorLabels;
use zcalc::config::Config;
use zcalc::terminal;

/// A keypad calculator for the terminal.
///
/// Without KEYS, reads button labels from stdin (`:keypad`, `:copy`, `:quit`).
#[derive(Parser, Debug)]
#[command(name = "zcalc", version, about)]
struct Cli {
    /// Button labels to press in order, e.g. `9 sqrt` or `5 + 3 =`.
    #[arg(allow_hyphen_values = true)]
    keys: Vec<String>,

    /// Path to the config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print one JSON object per key pressed.
    #[arg(long, requires = "keys")]
    json: bool,

    /// Show operators as keypad symbols in equations.
    #[arg(long)]
    symbols: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let config_path = cli.config.unwrap_or_else(Config::default_path);
    let mut config = Config::load(&config_path)?;
    if cli.symbols {
        config.display.operator_labels = OperatorLabels::Symbols;
    }
    tracing::debug!(?config, "Loaded configuration");

    let engine = config.engine();
    if cli.keys.is_empty() {
        terminal::run_stdio(engine)
    } else {
        terminal::run_script(engine, &cli.keys, cli.json, io::stdout().lock(), io::stderr())
    }
}
