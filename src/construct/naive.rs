//! [`crate::SaMethod::Reference`]: a naive comparison-sort suffix array
//! builder with no auxiliary data structures, used as ground truth in
//! property tests and for inputs too small to benefit from induced sorting.

use super::sais::naive_sort;

/// Suffix-sort `s` by directly comparing suffixes, returning a suffix array
/// of length `s.len() + 1` (position `s.len()` is the implicit terminator,
/// see the `construct` module docs).
pub fn build(s: &[u8]) -> Vec<u32> {
    let mut sa = vec![0u32; s.len() + 1];
    naive_sort(s, &mut sa[..]);
    sa
}
