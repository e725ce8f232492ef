// batch.rs - Benchmark every corpus in a directory with several strategies.
//
// Inputs run in file-name order and strategies in their fixed order, so
// reruns produce the same files in the same sequence. Results land in
// `<output>/<strategy>_<stem>.csv`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::BenchConfig;
use crate::corpus::{list_inputs, load_text, stem};
use crate::driver::Benchmark;
use crate::error::{BenchError, Result};
use crate::matcher::{Strategy, StrategySet};
use crate::report::CsvReport;

/// One results file produced by a batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutput {
    pub input: PathBuf,
    pub strategy: Strategy,
    pub output: PathBuf,
    pub records: usize,
}

/// Path of the results file for `strategy` run over the input named `stem`.
pub fn results_path(output_dir: &Path, strategy: Strategy, stem: &str) -> PathBuf {
    output_dir.join(format!("{}_{}.csv", strategy.name(), stem))
}

/// Run `config` with each strategy in `strategies` over every file in `input_dir`.
pub fn run_batch(
    input_dir: &Path,
    output_dir: &Path,
    config: &BenchConfig,
    strategies: StrategySet,
) -> Result<Vec<BatchOutput>> {
    config.validate()?;
    if strategies.is_empty() {
        return Err(BenchError::invalid("no strategies selected"));
    }
    fs::create_dir_all(output_dir).map_err(|e| BenchError::write(output_dir, e))?;

    let inputs = list_inputs(input_dir)?;
    info!(
        inputs = inputs.len(),
        dir = %input_dir.display(),
        "starting batch"
    );

    let mut outputs = Vec::new();
    for input in inputs {
        let text = load_text(&input)?;
        let bench = Benchmark::new(&text, config.clone())?;
        let name = stem(&input);
        for strategy in strategies.strategies() {
            let output = results_path(output_dir, strategy, &name);
            info!(
                input = %input.display(),
                %strategy,
                output = %output.display(),
                "running"
            );
            let report = CsvReport::create(&output)?;
            let records = bench.run(&strategy, report)?;
            outputs.push(BatchOutput {
                input: input.clone(),
                strategy,
                output,
                records,
            });
        }
    }
    Ok(outputs)
}
