// summary.rs - Consolidated comparison of two strategies' results.
//
// For every input that has results from both strategies, and for every
// multiplier, reports mean and standard error of the timings plus a
// Welch t-test of baseline against candidate.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::{debug, info};

use crate::batch::results_path;
use crate::driver::BenchRecord;
use crate::error::{BenchError, Result};
use crate::matcher::Strategy;
use crate::report::{read_records, TIME_PRECISION};
use crate::stats::{mean, std_error, welch_t_test, WelchTest};

/// Mean and standard error of one strategy's timings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingStats {
    pub mean: f64,
    pub std_error: f64,
    pub samples: usize,
}

impl TimingStats {
    pub fn of(times: &[f64]) -> TimingStats {
        TimingStats {
            mean: mean(times),
            std_error: std_error(times),
            samples: times.len(),
        }
    }
}

/// One consolidated row: an input, a multiplier, and both strategies.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub data_file: String,
    pub multiplier: usize,
    pub baseline: TimingStats,
    pub candidate: TimingStats,
    pub welch: WelchTest,
}

/// Elapsed seconds grouped by multiplier, in ascending multiplier order.
fn times_by_multiplier(records: &[BenchRecord]) -> BTreeMap<usize, Vec<f64>> {
    let mut groups: BTreeMap<usize, Vec<f64>> = BTreeMap::new();
    for r in records {
        groups.entry(r.multiplier).or_default().push(r.elapsed_secs());
    }
    groups
}

/// Compare two runs over the same input, one row per baseline multiplier.
pub fn compare(
    data_file: &str,
    baseline: &[BenchRecord],
    candidate: &[BenchRecord],
) -> Vec<SummaryRow> {
    let cand = times_by_multiplier(candidate);
    times_by_multiplier(baseline)
        .into_iter()
        .map(|(multiplier, base_times)| {
            let cand_times = cand.get(&multiplier).map(Vec::as_slice).unwrap_or(&[]);
            SummaryRow {
                data_file: data_file.to_string(),
                multiplier,
                baseline: TimingStats::of(&base_times),
                candidate: TimingStats::of(cand_times),
                welch: welch_t_test(&base_times, cand_times),
            }
        })
        .collect()
}

/// Summarize every input in `results_dir` that both strategies have results for.
///
/// Rows are sorted by input stem, then multiplier.
pub fn summarize_dir(
    results_dir: &Path,
    baseline: Strategy,
    candidate: Strategy,
) -> Result<Vec<SummaryRow>> {
    if baseline == candidate {
        return Err(BenchError::invalid(format!(
            "baseline and candidate are both '{baseline}'"
        )));
    }
    let prefix = format!("{}_", baseline.name());
    let entries = fs::read_dir(results_dir).map_err(|e| BenchError::read(results_dir, e))?;

    let mut stems = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| BenchError::read(results_dir, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if let Some(stem) = name
            .strip_prefix(&prefix)
            .and_then(|rest| rest.strip_suffix(".csv"))
        {
            stems.push(stem.to_string());
        }
    }
    stems.sort();

    let mut rows = Vec::new();
    for stem in stems {
        let cand_path = results_path(results_dir, candidate, &stem);
        if !cand_path.is_file() {
            debug!(%stem, %candidate, "no candidate results; skipping");
            continue;
        }
        let base = read_records(results_path(results_dir, baseline, &stem))?;
        let cand = read_records(&cand_path)?;
        rows.extend(compare(&stem, &base, &cand));
    }
    info!(rows = rows.len(), %baseline, %candidate, "summary complete");
    Ok(rows)
}

/// Write `rows` as CSV, naming the statistic columns after the strategies.
pub fn write_summary<W: Write>(
    rows: &[SummaryRow],
    baseline: Strategy,
    candidate: Strategy,
    mut out: W,
) -> std::io::Result<()> {
    let (b, c) = (baseline.name(), candidate.name());
    writeln!(
        out,
        "data_file,multiplier,mean_{b},std_error_{b},mean_{c},std_error_{c},t_stat,p_value"
    )?;
    let p = TIME_PRECISION;
    for r in rows {
        writeln!(
            out,
            "{},{},{:.p$},{:.p$},{:.p$},{:.p$},{:.p$},{:.p$}",
            r.data_file,
            r.multiplier,
            r.baseline.mean,
            r.baseline.std_error,
            r.candidate.mean,
            r.candidate.std_error,
            r.welch.t,
            r.welch.p,
        )?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::streak::Streak;
    use std::time::Duration;

    fn records(multiplier: usize, micros: &[u64]) -> Vec<BenchRecord> {
        micros
            .iter()
            .enumerate()
            .map(|(i, &us)| BenchRecord {
                multiplier,
                trial: i + 1,
                streak: Streak::NONE,
                elapsed: Duration::from_micros(us),
            })
            .collect()
    }

    #[test]
    fn compare_groups_by_multiplier() {
        let mut base = records(1, &[1, 2, 3]);
        base.extend(records(2, &[4, 5, 6]));
        let cand = records(1, &[10, 20, 30]);
        let rows = compare("exon1", &base, &cand);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].multiplier, 1);
        assert!((rows[0].baseline.mean - 2e-6).abs() < 1e-15);
        assert!((rows[0].candidate.mean - 20e-6).abs() < 1e-15);
        assert!(rows[0].welch.t < 0.0);
        // Candidate never ran multiplier 2.
        assert_eq!(rows[1].candidate.samples, 0);
        assert!(rows[1].welch.p.is_nan());
    }

    #[test]
    fn write_summary_header_and_precision() {
        let rows = compare("g", &records(1, &[1, 3]), &records(1, &[2, 4]));
        let mut out = Vec::new();
        write_summary(&rows, Strategy::Automaton, Strategy::Naive, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            concat!(
                "data_file,multiplier,mean_automaton,std_error_automaton,",
                "mean_naive,std_error_naive,t_stat,p_value"
            )
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with("g,1,0.000002000,0.000001000,0.000003000,0.000001000,"));
    }

    #[test]
    fn same_strategy_rejected() {
        let err = summarize_dir(Path::new("."), Strategy::Naive, Strategy::Naive).unwrap_err();
        assert!(matches!(err, BenchError::InvalidInput(_)));
    }
}
