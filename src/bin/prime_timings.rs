use clap::Parser;
use ginlog::sieve;
use std::io::Write;

/// Print `limit, seconds` rows timing the naive sieve over a range of limits.
#[derive(Parser)]
#[command(name = "prime-timings", version)]
struct Cli {
    /// First sieve limit.
    #[arg(long, default_value_t = 1_000)]
    start: u64,

    /// Limits stop before this value.
    #[arg(long, default_value_t = 1_000_000)]
    stop: u64,

    /// Distance between consecutive limits.
    #[arg(long, default_value_t = 1_000, value_parser = clap::value_parser!(u64).range(1..))]
    step: u64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for row in sieve::timings(cli.start as usize, cli.stop as usize, cli.step as usize) {
        writeln!(out, "{row}")?;
    }
    Ok(())
}
