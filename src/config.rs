// config.rs - Benchmark parameters and the optional TOML config file.
//
// Precedence is command line, then config file, then the defaults below.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{BenchError, Result};
use crate::matcher::{Strategy, StrategySet};

pub const DEFAULT_PATTERN: &str = "CAG";
pub const DEFAULT_TRIALS: usize = 5;
pub const DEFAULT_MAX_MULTIPLIER: usize = 4;

/// Parameters of one benchmark run over one text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Base pattern, repeated once per multiplier.
    pub pattern: Vec<u8>,
    /// Timed trials per multiplier.
    pub trials: usize,
    /// Multipliers run from 1 up to and including this value.
    pub max_multiplier: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            pattern: DEFAULT_PATTERN.as_bytes().to_vec(),
            trials: DEFAULT_TRIALS,
            max_multiplier: DEFAULT_MAX_MULTIPLIER,
        }
    }
}

impl BenchConfig {
    pub fn new(pattern: impl Into<Vec<u8>>, trials: usize, max_multiplier: usize) -> Self {
        BenchConfig {
            pattern: pattern.into(),
            trials,
            max_multiplier,
        }
    }

    /// Reject parameters that would make the run meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.pattern.is_empty() {
            return Err(BenchError::invalid("base pattern must not be empty"));
        }
        if self.trials == 0 {
            return Err(BenchError::invalid("trial count must be at least 1"));
        }
        if self.max_multiplier == 0 {
            return Err(BenchError::invalid("maximum multiplier must be at least 1"));
        }
        Ok(())
    }

    /// Total number of records a run emits.
    pub fn record_count(&self) -> usize {
        self.trials.saturating_mul(self.max_multiplier)
    }
}

/// Contents of a `--config` TOML file. Every key is optional.
///
/// ```toml
/// pattern = "CAG"
/// trials = 100
/// max_multiplier = 8
/// strategy = "automaton"
/// strategies = ["automaton", "naive"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub pattern: Option<String>,
    pub trials: Option<usize>,
    pub max_multiplier: Option<usize>,
    pub strategy: Option<Strategy>,
    pub strategies: Option<Vec<Strategy>>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<FileConfig> {
        let raw = fs::read_to_string(path).map_err(|e| BenchError::read(path, e))?;
        Self::parse(&raw).map_err(|message| BenchError::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    pub fn parse(raw: &str) -> std::result::Result<FileConfig, String> {
        toml::from_str(raw).map_err(|e| e.to_string())
    }

    /// Layer command-line values over this file's values and the defaults.
    pub fn resolve(
        &self,
        pattern: Option<&str>,
        trials: Option<usize>,
        max_multiplier: Option<usize>,
    ) -> Result<BenchConfig> {
        let defaults = BenchConfig::default();
        let config = BenchConfig {
            pattern: pattern
                .or(self.pattern.as_deref())
                .map(|p| p.as_bytes().to_vec())
                .unwrap_or(defaults.pattern),
            trials: trials.or(self.trials).unwrap_or(defaults.trials),
            max_multiplier: max_multiplier
                .or(self.max_multiplier)
                .unwrap_or(defaults.max_multiplier),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn strategy_or(&self, cli: Option<Strategy>) -> Strategy {
        cli.or(self.strategy).unwrap_or(Strategy::Automaton)
    }

    pub fn strategies_or(&self, cli: Option<StrategySet>) -> StrategySet {
        cli.or_else(|| {
            self.strategies
                .as_ref()
                .filter(|list| !list.is_empty())
                .map(|list| list.iter().copied().collect())
        })
        .unwrap_or(StrategySet::AUTOMATON | StrategySet::NAIVE)
    }
}
