use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use prime_counter::engine::report;
use prime_counter::{run, ChunkStrategy, RunConfig};

/// Count primes in a file of integers, single-threaded and then across a
/// fixed pool of worker threads.
#[derive(Debug, Parser)]
#[command(name = "prime_counter", version, about)]
struct Cli {
    /// Text file with one integer per line; blank and malformed lines are skipped
    input_file: PathBuf,

    /// Worker threads for the parallel pass [default: logical CPUs]
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
    threads: Option<u16>,

    /// How the remainder is spread across chunks: ceil or floor
    #[arg(long, default_value_t = ChunkStrategy::Ceil)]
    strategy: ChunkStrategy,

    /// Log to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = if verbose > 0 {
        EnvFilter::new(format!("prime_counter={default}"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: &Cli) -> anyhow::Result<()> {
    let mut config = RunConfig {
        strategy: cli.strategy,
        ..RunConfig::default()
    };
    if let Some(threads) = cli.threads {
        config.threads = usize::from(threads);
    }

    let summary = run(&cli.input_file, &config)
        .with_context(|| format!("counting primes in {}", cli.input_file.display()))?;
    report::print(&summary, std::io::stdout().lock()).context("writing report")?;
    Ok(())
}
