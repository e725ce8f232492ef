// streak.rs - Longest run of back-to-back pattern occurrences.
//
// A streak is a maximal run of offsets where each one sits exactly one
// pattern length after the previous, i.e. the pattern repeated with
// nothing in between. Overlapping or gapped occurrences break a run.

use std::fmt;

/// Longest streak found in an offset sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Streak {
    /// Number of occurrences in the run; 0 when there were no occurrences.
    pub length: usize,
    /// Offset where the run begins; `None` when there were no occurrences.
    pub start: Option<usize>,
}

impl Streak {
    pub const NONE: Streak = Streak {
        length: 0,
        start: None,
    };

    /// Start offset as written to reports, with `-1` for no streak.
    pub fn start_or_sentinel(&self) -> i64 {
        self.start.map_or(-1, |s| s as i64)
    }

    /// Byte range of text covered by the run, for a pattern of length `m`.
    pub fn span(&self, m: usize) -> Option<std::ops::Range<usize>> {
        self.start.map(|s| s..s + self.length * m)
    }
}

impl fmt::Display for Streak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.start {
            Some(start) => write!(f, "{} repeats at offset {}", self.length, start),
            None => write!(f, "no occurrences"),
        }
    }
}

/// Find the longest run of `offsets` spaced exactly `pattern_len` apart.
///
/// `offsets` must be strictly increasing, as every matcher produces them.
/// When several runs share the maximum length the first one wins.
///
/// # Examples
///
/// ```
/// use streakmatch::streak::longest_streak;
///
/// let s = longest_streak(&[0, 3, 6, 10], 3);
/// assert_eq!((s.length, s.start), (3, Some(0)));
/// ```
pub fn longest_streak(offsets: &[usize], pattern_len: usize) -> Streak {
    let Some((&first, rest)) = offsets.split_first() else {
        return Streak::NONE;
    };

    let mut best = Streak {
        length: 1,
        start: Some(first),
    };
    let mut run_len = 1;
    let mut run_start = first;
    let mut prev = first;

    for &off in rest {
        if off - prev == pattern_len {
            run_len += 1;
            if run_len > best.length {
                best = Streak {
                    length: run_len,
                    start: Some(run_start),
                };
            }
        } else {
            run_len = 1;
            run_start = off;
        }
        prev = off;
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_offsets() {
        let s = longest_streak(&[], 3);
        assert_eq!(s, Streak::NONE);
        assert_eq!(s.start_or_sentinel(), -1);
        assert_eq!(s.to_string(), "no occurrences");
    }

    #[test]
    fn single_offset() {
        let s = longest_streak(&[42], 3);
        assert_eq!((s.length, s.start), (1, Some(42)));
    }

    #[test]
    fn run_broken_by_gap() {
        let s = longest_streak(&[0, 3, 6, 10], 3);
        assert_eq!((s.length, s.start), (3, Some(0)));
    }

    #[test]
    fn first_of_equal_runs_wins() {
        let s = longest_streak(&[0, 2, 4, 10, 12, 14], 2);
        assert_eq!((s.length, s.start), (3, Some(0)));
    }

    #[test]
    fn later_longer_run_wins() {
        let s = longest_streak(&[1, 4, 20, 23, 26, 29], 3);
        assert_eq!((s.length, s.start), (4, Some(20)));
    }

    #[test]
    fn overlapping_occurrences_do_not_chain() {
        // "aa" in "aaaa": offsets one apart, pattern length two.
        let s = longest_streak(&[0, 1, 2], 2);
        assert_eq!((s.length, s.start), (1, Some(0)));
    }

    #[test]
    fn span_covers_run() {
        let s = longest_streak(&[5, 8, 11], 3);
        assert_eq!(s.span(3), Some(5..14));
        assert_eq!(Streak::NONE.span(3), None);
        assert_eq!(s.to_string(), "3 repeats at offset 5");
    }
}
