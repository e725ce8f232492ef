// pattern.rs - Search patterns and the scaled pattern generator.
//
// A `Pattern` is never empty, so the matchers never have to decide what
// an empty needle means.

use std::ops::Deref;

use crate::error::{BenchError, Result};

/// A non-empty byte pattern to search for.
///
/// # Examples
///
/// ```
/// use streakmatch::pattern::Pattern;
///
/// let p = Pattern::repeated(b"cag", 4).unwrap();
/// assert_eq!(p.as_bytes(), b"cagcagcagcag");
/// assert_eq!(p.len(), 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    bytes: Vec<u8>,
}

impl Pattern {
    /// Wrap `bytes` as a pattern. Fails if `bytes` is empty.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Pattern> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(BenchError::invalid("pattern must not be empty"));
        }
        Ok(Pattern { bytes })
    }

    /// Build `base` concatenated `multiplier` times. See [`generate`].
    pub fn repeated(base: &[u8], multiplier: usize) -> Result<Pattern> {
        generate(base, multiplier).map(|bytes| Pattern { bytes })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Length in bytes; always at least 1.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }
}

impl Deref for Pattern {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes
    }
}

impl AsRef<[u8]> for Pattern {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// Repeat `base` `multiplier` times with no separator.
///
/// Both `base.len()` and `multiplier` must be at least 1. A total length
/// that does not fit in `usize` is rejected rather than wrapped.
pub fn generate(base: &[u8], multiplier: usize) -> Result<Vec<u8>> {
    if base.is_empty() {
        return Err(BenchError::invalid("base pattern must not be empty"));
    }
    if multiplier == 0 {
        return Err(BenchError::invalid("pattern multiplier must be at least 1"));
    }
    if base.len().checked_mul(multiplier).is_none() {
        return Err(BenchError::invalid(format!(
            "a {}-byte pattern cannot be repeated {} times",
            base.len(),
            multiplier
        )));
    }
    Ok(base.repeat(multiplier))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_cag_times_four() {
        let p = generate(b"cag", 4).unwrap();
        assert_eq!(p, b"cagcagcagcag");
        assert_eq!(p.len(), 12);
    }

    #[test]
    fn generate_multiplier_one_is_copy() {
        assert_eq!(generate(b"GATTACA", 1).unwrap(), b"GATTACA");
    }

    #[test]
    fn generate_rejects_empty_base() {
        let err = generate(b"", 3).unwrap_err();
        assert!(matches!(err, BenchError::InvalidInput(_)));
    }

    #[test]
    fn generate_rejects_zero_multiplier() {
        let err = generate(b"cag", 0).unwrap_err();
        assert!(matches!(err, BenchError::InvalidInput(_)));
    }

    #[test]
    fn generate_rejects_overflow() {
        let err = generate(b"ab", usize::MAX).unwrap_err();
        assert!(err.to_string().contains("cannot be repeated"));
    }

    #[test]
    fn pattern_new_rejects_empty() {
        assert!(Pattern::new(Vec::new()).is_err());
        assert_eq!(Pattern::new("x").unwrap().len(), 1);
    }

    #[test]
    fn pattern_derefs_to_bytes() {
        let p = Pattern::repeated(b"ab", 3).unwrap();
        assert_eq!(&p[..2], b"ab");
        assert_eq!(p.into_bytes(), b"ababab".to_vec());
    }
}
