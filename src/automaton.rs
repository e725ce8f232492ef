// automaton.rs - Prefix-function (Knuth-Morris-Pratt) exact matcher.
//
// The prefix table records, for every pattern prefix, how much of it can
// be kept after a mismatch. The scan never moves backwards in the text,
// so a full search costs O(n + m).

use std::ops::Index;

/// Prefix function of a pattern.
///
/// Entry `i` is the length of the longest proper prefix of the pattern that
/// is also a suffix of `pattern[..=i]`. Entry 0 is always 0 and entry `i`
/// never exceeds `i`.
///
/// # Examples
///
/// ```
/// use streakmatch::automaton::PrefixTable;
///
/// let table = PrefixTable::new(b"abab");
/// assert_eq!(table.as_slice(), &[0, 0, 1, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixTable {
    pi: Vec<usize>,
}

impl PrefixTable {
    /// Build the table for `pattern`. An empty pattern yields an empty table.
    pub fn new(pattern: &[u8]) -> PrefixTable {
        let m = pattern.len();
        let mut pi = vec![0; m];
        let mut k = 0;
        for q in 1..m {
            while k > 0 && pattern[k] != pattern[q] {
                k = pi[k - 1];
            }
            if pattern[k] == pattern[q] {
                k += 1;
            }
            pi[q] = k;
        }
        PrefixTable { pi }
    }

    pub fn len(&self) -> usize {
        self.pi.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pi.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.pi
    }

    /// Smallest period of the pattern: `m - pi[m - 1]`.
    ///
    /// A pattern built by repeating a primitive base `k` times has the
    /// base length as its period.
    pub fn period(&self) -> Option<usize> {
        let last = *self.pi.last()?;
        Some(self.pi.len() - last)
    }
}

impl Index<usize> for PrefixTable {
    type Output = usize;

    fn index(&self, i: usize) -> &usize {
        &self.pi[i]
    }
}

/// Append every start offset of `pattern` in `text` to `out`, in increasing order.
///
/// Builds a fresh [`PrefixTable`] and drops it on return. Overlapping
/// occurrences are reported: `"aa"` in `"aaa"` gives `0` and `1`.
pub fn find_all_into(text: &[u8], pattern: &[u8], out: &mut Vec<usize>) {
    let m = pattern.len();
    if m == 0 || m > text.len() {
        return;
    }
    let pi = PrefixTable::new(pattern);

    let mut q = 0;
    for (i, &c) in text.iter().enumerate() {
        while q > 0 && pattern[q] != c {
            q = pi[q - 1];
        }
        if pattern[q] == c {
            q += 1;
        }
        if q == m {
            out.push(i + 1 - m);
            q = pi[q - 1];
        }
    }
}

/// Collect every start offset of `pattern` in `text`.
pub fn find_all(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    let mut out = Vec::new();
    find_all_into(text, pattern, &mut out);
    out
}
