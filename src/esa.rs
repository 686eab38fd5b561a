//! The ESA container (§3 "Ownership / lifecycle", §6 external interfaces).

use crate::cld::cld as build_cld;
use crate::construct::build_sa;
use crate::error::EsaError;
use crate::interval::{new_interval, EsaInterval};
use crate::lcp::lcp as build_lcp;
use crate::method::SaMethod;
use crate::text;

/// An enhanced suffix array over an immutable byte string.
///
/// Owns the sentinel-terminated text, its suffix array, LCP array and
/// child array. Constructed once via [`Esa::new`] or
/// [`Esa::new_reverse_complement`]; every other operation is a read-only
/// view or query. Cheap to share between threads: a fully built `Esa` is
/// `Send + Sync` and queries ([`Esa::get_interval`], [`Esa::get_match`])
/// take `&self`.
#[derive(Debug, Clone)]
pub struct Esa {
    pub(crate) text: Vec<u8>,
    pub(crate) sa: Vec<u32>,
    pub(crate) lcp: Vec<i64>,
    pub(crate) cld: Vec<i64>,
    strand_size: usize,
}

impl Esa {
    /// Build a forward-only index over `bytes`.
    pub fn new(bytes: &[u8], method: SaMethod) -> Result<Self, EsaError> {
        let (full_text, strand_size) = text::build(bytes)?;
        Self::from_full_text(full_text, strand_size, method)
    }

    /// Build a bidirectional index over `bytes`, appending the reverse
    /// complement of `bytes` as a second strand (§4.5).
    pub fn new_reverse_complement(bytes: &[u8], method: SaMethod) -> Result<Self, EsaError> {
        let (full_text, strand_size) = text::build_reverse_complement(bytes)?;
        Self::from_full_text(full_text, strand_size, method)
    }

    fn from_full_text(
        full_text: Vec<u8>,
        strand_size: usize,
        method: SaMethod,
    ) -> Result<Self, EsaError> {
        debug_assert!(!full_text.is_empty());
        let content = &full_text[..full_text.len() - 1];
        let sa = build_sa(content, method)?;
        let lcp = build_lcp(&full_text, &sa);
        let cld = build_cld(&lcp);

        log::trace!(
            "built esa: {} bytes indexed, strand_size={}",
            full_text.len(),
            strand_size
        );

        Ok(Esa {
            text: full_text,
            sa,
            lcp,
            cld,
            strand_size,
        })
    }

    /// The sentinel-terminated text `S` (§3). Length `n+1` in forward-only
    /// mode, `2k+2` in bidirectional mode.
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    /// The suffix array `SA`. Length `n+1`, matching [`Esa::text`].
    pub fn sa(&self) -> &[u32] {
        &self.sa
    }

    /// The LCP array. Length `n+2`.
    pub fn lcp(&self) -> &[i64] {
        &self.lcp
    }

    /// The child array `CLD`. Length `n+2`.
    pub fn cld(&self) -> &[i64] {
        &self.cld
    }

    /// Length of the original forward strand (§3 "Strand size"). Equal to
    /// `text().len() - 1` in forward-only mode.
    pub fn strand_size(&self) -> usize {
        self.strand_size
    }

    /// Whether this index was built with [`Esa::new_reverse_complement`].
    pub fn is_bidirectional(&self) -> bool {
        self.text.len() != self.strand_size + 1
    }

    /// Map a position in [`Esa::text`] that falls on the reverse-complement
    /// strand back to the corresponding forward-strand position (§4.5).
    ///
    /// Returns `None` for a position on the forward strand or the
    /// separator/sentinel bytes themselves.
    pub fn reverse_strand_to_forward(&self, pos: usize) -> Option<usize> {
        let k = self.strand_size;
        if pos > k && pos <= 2 * k {
            Some(2 * k - pos)
        } else {
            None
        }
    }

    /// The root interval `[0, |S|-1]`, the entry point for descent.
    pub(crate) fn root_interval(&self) -> EsaInterval {
        new_interval(&self.lcp, &self.cld, 0, (self.text.len() - 1) as i64)
    }

    pub(crate) fn new_interval(&self, start: i64, end: i64) -> EsaInterval {
        new_interval(&self.lcp, &self.cld, start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sa_is_a_permutation() {
        let esa = Esa::new(b"ACAAACATAT", SaMethod::Default).unwrap();
        let mut sorted: Vec<u32> = esa.sa().to_vec();
        sorted.sort_unstable();
        let expected: Vec<u32> = (0..esa.sa().len() as u32).collect();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn sa_ordering_is_lexicographic() {
        let esa = Esa::new(b"ACAAACATAT", SaMethod::Default).unwrap();
        let s = esa.text();
        let sa = esa.sa();
        for i in 1..sa.len() {
            assert!(s[sa[i - 1] as usize..] < s[sa[i] as usize..]);
        }
    }

    #[test]
    fn empty_input_indexes_to_sentinel_alone() {
        let esa = Esa::new(b"", SaMethod::Default).unwrap();
        assert_eq!(esa.text(), &[text::SENTINEL]);
        assert_eq!(esa.sa(), &[0]);
        assert_eq!(esa.strand_size(), 0);
    }

    #[test]
    fn rejects_reserved_bytes() {
        assert!(Esa::new(b"AC\0GT", SaMethod::Default).is_err());
    }

    #[test]
    fn bidirectional_flag_and_strand_mapping() {
        let esa = Esa::new_reverse_complement(b"ACGT", SaMethod::Default).unwrap();
        assert!(esa.is_bidirectional());
        assert_eq!(esa.strand_size(), 4);
        // position 5 is inside the reverse-complement strand (offset 0 of R)
        assert_eq!(esa.reverse_strand_to_forward(5), Some(3));
        assert_eq!(esa.reverse_strand_to_forward(1), None);
    }

    #[test]
    fn forward_only_index_is_not_bidirectional() {
        let esa = Esa::new(b"ACGT", SaMethod::Default).unwrap();
        assert!(!esa.is_bidirectional());
    }
}
