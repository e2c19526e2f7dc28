use anyhow::Context;
use clap::Parser;
use ginlog_core::config::{Config, Selection};
use ginlog_core::{Pipeline, Summary, Translator};
use ginlog_feeds::{FileSelector, LineSource};
use std::io::{IsTerminal, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ginlog",
    version,
    about = "Translate the newest rotated Gin log into common access-log lines"
)]
struct Cli {
    /// Directory holding rotated `gin*.log` files.
    dir: PathBuf,

    /// Read every matching file, oldest first, instead of only the newest.
    #[arg(long)]
    all: bool,

    /// TOML file layered over the built-in configuration.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Debug-level diagnostics on stderr.
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            err.print().context("failed to print usage")?;
            std::process::exit(1);
        }
    };

    init_tracing(cli.debug);

    let summary = run(&cli)?;
    tracing::info!(%summary, "done");
    Ok(())
}

fn run(cli: &Cli) -> anyhow::Result<Summary> {
    let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    let selection = if cli.all {
        Selection::All
    } else {
        config.files.selection
    };

    let files = FileSelector::new(&config.files).select(&cli.dir, selection)?;
    for file in &files {
        tracing::info!(file = %file.path.display(), generated = %file.generated, "selected log file");
    }

    let lines = LineSource::new(files.into_iter().map(|f| f.path)).read_all()?;

    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    let summary = Pipeline::new(Translator::new(&config.source)).run(&lines, &mut out)?;
    out.flush()?;
    Ok(summary)
}

/// Diagnostics go to stderr; stdout carries only rendered lines.
fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();
}
