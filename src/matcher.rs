// matcher.rs - The closed set of exact-match strategies.
//
// Every strategy reports the same thing: all start offsets of the pattern
// in the text, overlapping occurrences included, in increasing order.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use memchr::memmem;
use serde::Deserialize;

use crate::error::BenchError;
use crate::pattern::Pattern;
use crate::{automaton, naive};

/// Anything that can list every occurrence of a pattern in a text.
pub trait Matcher {
    /// Append all occurrence offsets to `out`. Existing contents are kept.
    fn find_all_into(&self, text: &[u8], pattern: &Pattern, out: &mut Vec<usize>);

    /// Collect all occurrence offsets into a new vector.
    fn find_all(&self, text: &[u8], pattern: &Pattern) -> Vec<usize> {
        let mut out = Vec::new();
        self.find_all_into(text, pattern, &mut out);
        out
    }
}

/// Exact-match strategy selected by the caller.
///
/// # Examples
///
/// ```
/// use streakmatch::matcher::{Matcher, Strategy};
/// use streakmatch::pattern::Pattern;
///
/// let p = Pattern::new("aa").unwrap();
/// for strategy in Strategy::ALL {
///     assert_eq!(strategy.find_all(b"aaaa", &p), vec![0, 1, 2]);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Try every alignment, stop each at its first mismatch.
    Naive,
    /// Prefix-function automaton, linear time.
    Automaton,
    /// `memchr::memmem` restarted one byte past every hit.
    Memmem,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Naive, Strategy::Automaton, Strategy::Memmem];

    /// Short name used in file names and logs.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Naive => "naive",
            Strategy::Automaton => "automaton",
            Strategy::Memmem => "memmem",
        }
    }

    fn flag(self) -> StrategySet {
        match self {
            Strategy::Naive => StrategySet::NAIVE,
            Strategy::Automaton => StrategySet::AUTOMATON,
            Strategy::Memmem => StrategySet::MEMMEM,
        }
    }
}

impl Matcher for Strategy {
    fn find_all_into(&self, text: &[u8], pattern: &Pattern, out: &mut Vec<usize>) {
        match self {
            Strategy::Naive => naive::find_all_into(text, pattern, out),
            Strategy::Automaton => automaton::find_all_into(text, pattern, out),
            Strategy::Memmem => memmem_find_all_into(text, pattern, out),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "naive" | "brute_force" | "brute-force" => Ok(Strategy::Naive),
            "automaton" | "kmp" => Ok(Strategy::Automaton),
            "memmem" => Ok(Strategy::Memmem),
            other => Err(BenchError::invalid(format!("unknown strategy '{other}'"))),
        }
    }
}

fn memmem_find_all_into(text: &[u8], pattern: &[u8], out: &mut Vec<usize>) {
    if pattern.is_empty() || pattern.len() > text.len() {
        return;
    }
    let finder = memmem::Finder::new(pattern);
    let mut pos = 0;
    while let Some(hit) = finder.find(&text[pos..]) {
        out.push(pos + hit);
        pos += hit + 1;
        if text.len() - pos < pattern.len() {
            break;
        }
    }
}

bitflags! {
    /// A selection of strategies, iterated in `naive, automaton, memmem` order.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct StrategySet: u8 {
        const NAIVE = 1 << 0;
        const AUTOMATON = 1 << 1;
        const MEMMEM = 1 << 2;
    }
}

impl StrategySet {
    /// The selected strategies in their fixed order.
    pub fn strategies(self) -> impl Iterator<Item = Strategy> {
        Strategy::ALL
            .into_iter()
            .filter(move |s| self.contains(s.flag()))
    }

    /// Parse a comma-separated list such as `"automaton,naive"`.
    pub fn parse_list(list: &str) -> Result<StrategySet, BenchError> {
        let mut set = StrategySet::empty();
        for item in list.split(',').filter(|s| !s.trim().is_empty()) {
            set |= item.parse::<Strategy>()?.flag();
        }
        if set.is_empty() {
            return Err(BenchError::invalid("no strategies selected"));
        }
        Ok(set)
    }
}

impl From<Strategy> for StrategySet {
    fn from(s: Strategy) -> Self {
        s.flag()
    }
}

impl FromIterator<Strategy> for StrategySet {
    fn from_iter<I: IntoIterator<Item = Strategy>>(iter: I) -> Self {
        iter.into_iter()
            .fold(StrategySet::empty(), |set, s| set | s.flag())
    }
}
