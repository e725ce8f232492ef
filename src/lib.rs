//! # streakmatch
//!
//! Benchmarks exact string matching over raw bytes: a brute-force scan, a
//! prefix-function (Knuth-Morris-Pratt) automaton, and a
//! [`memchr::memmem`](https://docs.rs/memchr) reference, all reporting every
//! occurrence including overlapping ones.
//!
//! Patterns are scaled by repeating a base pattern (`CAG`, `CAGCAG`, ...) and
//! each run records how long the matcher took and the longest *streak* of
//! back-to-back occurrences, which characterizes tandem repeats in the text.
//!
//! ## Quick Start
//!
//! ```rust
//! use streakmatch::prelude::*;
//!
//! let text = b"xxCAGCAGCAGxxCAG";
//! let pattern = Pattern::new("CAG").unwrap();
//! let offsets = Strategy::Automaton.find_all(text, &pattern);
//! assert_eq!(offsets, vec![2, 5, 8, 13]);
//!
//! let streak = longest_streak(&offsets, pattern.len());
//! assert_eq!((streak.length, streak.start), (3, Some(2)));
//! ```
//!
//! Running a full benchmark into a CSV writer:
//!
//! ```rust
//! use streakmatch::prelude::*;
//!
//! let text = b"CAG".repeat(100);
//! let bench = Benchmark::new(&text, BenchConfig::new("CAG", 3, 2)).unwrap();
//! let mut report = CsvReport::new(Vec::new()).unwrap();
//! bench.run(&Strategy::Naive, &mut report).unwrap();
//! let csv = String::from_utf8(report.into_inner()).unwrap();
//! assert_eq!(csv.lines().count(), 1 + 3 * 2);
//! ```
//!
//! ## Module Structure
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`pattern`] | Non-empty patterns and the repeated-pattern generator |
//! | [`naive`] | Brute-force matcher |
//! | [`automaton`] | Prefix table and linear-time matcher |
//! | [`matcher`] | `Strategy` selection and the `Matcher` trait |
//! | [`streak`] | Longest back-to-back run analysis |
//! | [`driver`] | Timed multiplier/trial loop |
//! | [`report`] | CSV results writer and reader |
//! | [`corpus`] | Text loading and input directory listing |
//! | [`batch`] | Directory-wide runs over several strategies |
//! | [`stats`] | Mean, standard error, Welch's t-test |
//! | [`summary`] | Consolidated strategy comparison |
//! | [`config`] | Parameters, defaults and TOML config files |
//! | [`error`] | Error type |

pub mod automaton;
pub mod batch;
pub mod config;
pub mod corpus;
pub mod driver;
pub mod error;
pub mod matcher;
pub mod naive;
pub mod pattern;
pub mod prelude;
pub mod report;
pub mod stats;
pub mod streak;
pub mod summary;
