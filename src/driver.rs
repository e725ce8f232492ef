// driver.rs - Benchmark driver.
//
// Walks multipliers 1..=max and trials 1..=trials in order. Each trial
// times exactly one matcher call; pattern generation and streak analysis
// happen outside the timed interval.

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::config::BenchConfig;
use crate::error::Result;
use crate::matcher::Matcher;
use crate::pattern::Pattern;
use crate::streak::{longest_streak, Streak};

/// One row of benchmark output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchRecord {
    pub multiplier: usize,
    /// 1-based trial number within the multiplier.
    pub trial: usize,
    pub streak: Streak,
    pub elapsed: Duration,
}

impl BenchRecord {
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Destination for benchmark records, written in emission order.
pub trait RecordSink {
    fn record(&mut self, record: &BenchRecord) -> Result<()>;

    /// Called once after the last record.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

impl RecordSink for Vec<BenchRecord> {
    fn record(&mut self, record: &BenchRecord) -> Result<()> {
        self.push(*record);
        Ok(())
    }
}

impl<S: RecordSink + ?Sized> RecordSink for &mut S {
    fn record(&mut self, record: &BenchRecord) -> Result<()> {
        (**self).record(record)
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }
}

/// A benchmark over one immutable text.
///
/// # Examples
///
/// ```
/// use streakmatch::config::BenchConfig;
/// use streakmatch::driver::{BenchRecord, Benchmark};
/// use streakmatch::matcher::Strategy;
///
/// let text = b"cag".repeat(20);
/// let bench = Benchmark::new(&text, BenchConfig::new("cag", 2, 3)).unwrap();
/// let mut records: Vec<BenchRecord> = Vec::new();
/// bench.run(&Strategy::Automaton, &mut records).unwrap();
/// assert_eq!(records.len(), 6);
/// assert_eq!(records[0].streak.length, 20);
/// ```
#[derive(Debug)]
pub struct Benchmark<'t> {
    text: &'t [u8],
    config: BenchConfig,
}

impl<'t> Benchmark<'t> {
    /// Validate `config` and bind it to `text`.
    pub fn new(text: &'t [u8], config: BenchConfig) -> Result<Benchmark<'t>> {
        config.validate()?;
        Ok(Benchmark { text, config })
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    pub fn text(&self) -> &'t [u8] {
        self.text
    }

    /// Run every (multiplier, trial) pair and feed the records to `sink`.
    ///
    /// Returns the number of records written. A sink failure ends the run
    /// immediately; `finish` is only called after a complete run.
    pub fn run<M, S>(&self, matcher: &M, mut sink: S) -> Result<usize>
    where
        M: Matcher + ?Sized,
        S: RecordSink,
    {
        let mut written = 0;
        for multiplier in 1..=self.config.max_multiplier {
            let pattern = Pattern::repeated(&self.config.pattern, multiplier)?;
            info!(
                multiplier,
                pattern_len = pattern.len(),
                "benchmarking pattern of length {} (multiplier {})",
                pattern.len(),
                multiplier
            );
            if pattern.len() > self.text.len() {
                warn!(
                    multiplier,
                    pattern_len = pattern.len(),
                    text_len = self.text.len(),
                    "pattern is longer than the text; no occurrences possible"
                );
            }

            let mut offsets = Vec::with_capacity(self.text.len() / pattern.len());
            for trial in 1..=self.config.trials {
                let (streak, elapsed) = self.trial(matcher, &pattern, &mut offsets);
                let record = BenchRecord {
                    multiplier,
                    trial,
                    streak,
                    elapsed,
                };
                sink.record(&record)?;
                written += 1;
                info!("run {}: {:.9} seconds", trial, elapsed.as_secs_f64());
                debug!(
                    multiplier,
                    trial,
                    occurrences = offsets.len(),
                    max_streak = streak.length,
                    streak_start = streak.start_or_sentinel(),
                    "trial complete"
                );
            }
        }
        sink.finish()?;
        Ok(written)
    }

    /// Time a single matcher call into the reused `offsets` buffer.
    fn trial<M>(
        &self,
        matcher: &M,
        pattern: &Pattern,
        offsets: &mut Vec<usize>,
    ) -> (Streak, Duration)
    where
        M: Matcher + ?Sized,
    {
        offsets.clear();
        let start = Instant::now();
        matcher.find_all_into(self.text, pattern, offsets);
        let elapsed = start.elapsed();
        (longest_streak(offsets, pattern.len()), elapsed)
    }
}
