// prelude.rs - Convenient re-exports.
//
//! # Prelude
//!
//! ```
//! use streakmatch::prelude::*;
//!
//! let p = Pattern::repeated(b"ab", 2).unwrap();
//! assert_eq!(Strategy::Naive.find_all(b"abababab", &p), vec![0, 2, 4]);
//! ```

pub use crate::config::BenchConfig;
pub use crate::driver::{BenchRecord, Benchmark, RecordSink};
pub use crate::error::BenchError;
pub use crate::matcher::{Matcher, Strategy, StrategySet};
pub use crate::pattern::Pattern;
pub use crate::report::CsvReport;
pub use crate::streak::{longest_streak, Streak};
