// main.rs - Command-line front end.
//
//   streakmatch run     --text FILE --output FILE [--strategy S]
//   streakmatch batch   --input-dir DIR --output-dir DIR [--strategies S,S]
//   streakmatch summary --results-dir DIR [--baseline S] [--candidate S] [--out FILE]

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use streakmatch::batch::run_batch;
use streakmatch::config::FileConfig;
use streakmatch::corpus::load_text;
use streakmatch::driver::Benchmark;
use streakmatch::error::{BenchError, Result};
use streakmatch::matcher::{Strategy, StrategySet};
use streakmatch::report::CsvReport;
use streakmatch::summary::{summarize_dir, write_summary};

#[derive(Parser, Debug)]
#[command(
    name = "streakmatch",
    version,
    about = "Benchmark exact string matchers on scaled repeat patterns"
)]
struct Cli {
    /// Only log warnings and errors unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Benchmark one text file with one strategy.
    Run {
        /// Text corpus to search.
        #[arg(long)]
        text: PathBuf,
        /// CSV file to write results to.
        #[arg(long)]
        output: PathBuf,
        /// naive, automaton (kmp) or memmem.
        #[arg(long, value_parser = parse_strategy)]
        strategy: Option<Strategy>,
        #[command(flatten)]
        params: BenchArgs,
    },
    /// Benchmark every file in a directory with several strategies.
    Batch {
        #[arg(long)]
        input_dir: PathBuf,
        #[arg(long)]
        output_dir: PathBuf,
        /// Comma-separated strategies, e.g. "automaton,naive".
        #[arg(long, value_parser = parse_strategy_set)]
        strategies: Option<StrategySet>,
        #[command(flatten)]
        params: BenchArgs,
    },
    /// Compare two strategies' batch results with Welch's t-test.
    Summary {
        #[arg(long)]
        results_dir: PathBuf,
        #[arg(long, value_parser = parse_strategy, default_value = "automaton")]
        baseline: Strategy,
        #[arg(long, value_parser = parse_strategy, default_value = "naive")]
        candidate: Strategy,
        /// Write the consolidated CSV here instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct BenchArgs {
    /// Base pattern to repeat.
    #[arg(long)]
    pattern: Option<String>,
    /// Timed trials per multiplier.
    #[arg(long)]
    trials: Option<usize>,
    /// Largest multiplier; runs 1..=N.
    #[arg(long)]
    max_multiplier: Option<usize>,
    /// TOML file with defaults for the options above.
    #[arg(long)]
    config: Option<PathBuf>,
}

impl BenchArgs {
    fn file_config(&self) -> Result<FileConfig> {
        match &self.config {
            Some(path) => FileConfig::load(path),
            None => Ok(FileConfig::default()),
        }
    }
}

fn parse_strategy(s: &str) -> std::result::Result<Strategy, String> {
    s.parse().map_err(|e: BenchError| e.to_string())
}

fn parse_strategy_set(s: &str) -> std::result::Result<StrategySet, String> {
    StrategySet::parse_list(s).map_err(|e| e.to_string())
}

fn init_tracing(quiet: bool) {
    let default = if quiet { "warn" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run_single(
    text: &Path,
    output: &Path,
    strategy: Option<Strategy>,
    params: &BenchArgs,
) -> Result<()> {
    let file = params.file_config()?;
    let config = file.resolve(params.pattern.as_deref(), params.trials, params.max_multiplier)?;
    let strategy = file.strategy_or(strategy);

    let text_bytes = load_text(text)?;
    let bench = Benchmark::new(&text_bytes, config)?;
    let report = CsvReport::create(output)?;
    let written = bench.run(&strategy, report)?;
    info!(
        records = written,
        %strategy,
        "benchmark complete; results saved to '{}'",
        output.display()
    );
    Ok(())
}

fn run_summary(
    dir: &Path,
    baseline: Strategy,
    candidate: Strategy,
    out: Option<&Path>,
) -> Result<()> {
    let rows = summarize_dir(dir, baseline, candidate)?;
    match out {
        Some(path) => {
            let file = File::create(path).map_err(|e| BenchError::Write {
                path: path.to_path_buf(),
                source: e,
            })?;
            write_summary(&rows, baseline, candidate, BufWriter::new(file)).map_err(|e| {
                BenchError::Write {
                    path: path.to_path_buf(),
                    source: e,
                }
            })?;
            info!(rows = rows.len(), "summary saved to '{}'", path.display());
        }
        None => write_summary(&rows, baseline, candidate, io::stdout().lock())?,
    }
    Ok(())
}

fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Run {
            text,
            output,
            strategy,
            params,
        } => run_single(&text, &output, strategy, &params),
        Command::Batch {
            input_dir,
            output_dir,
            strategies,
            params,
        } => {
            let file = params.file_config()?;
            let config =
                file.resolve(params.pattern.as_deref(), params.trials, params.max_multiplier)?;
            let strategies = file.strategies_or(strategies);
            let outputs = run_batch(&input_dir, &output_dir, &config, strategies)?;
            info!(files = outputs.len(), "batch complete");
            Ok(())
        }
        Command::Summary {
            results_dir,
            baseline,
            candidate,
            out,
        } => run_summary(&results_dir, baseline, candidate, out.as_deref()),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.quiet);

    match dispatch(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
