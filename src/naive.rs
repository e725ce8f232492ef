// naive.rs - Brute-force exact matcher.
//
// Tries every alignment and compares byte by byte, giving up on an
// alignment at its first mismatching byte.

/// Append every start offset of `pattern` in `text` to `out`, in increasing order.
///
/// Worst case is `O((n - m + 1) * m)`, reached on highly periodic text.
/// An empty pattern, or one longer than the text, appends nothing.
pub fn find_all_into(text: &[u8], pattern: &[u8], out: &mut Vec<usize>) {
    let m = pattern.len();
    if m == 0 || m > text.len() {
        return;
    }
    for s in 0..=text.len() - m {
        let mut matched = true;
        for j in 0..m {
            if text[s + j] != pattern[j] {
                matched = false;
                break;
            }
        }
        if matched {
            out.push(s);
        }
    }
}

/// Collect every start offset of `pattern` in `text`.
pub fn find_all(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    let mut out = Vec::new();
    find_all_into(text, pattern, &mut out);
    out
}
