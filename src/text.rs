//! Sentinel-terminated text construction (§3, §4.5).
//!
//! Two byte values are reserved so that ordinary byte comparison alone is
//! enough to drive LCP/CLD/matching without a widened alphabet: `0x00` is
//! the primary sentinel `$`, and `0x01` is the bidirectional-mode strand
//! separator `#`. Both sort below every other byte value, and `# < $`,
//! satisfying §4.5's ordering invariant. Caller input must not contain
//! either reserved byte; [`build`] and [`build_reverse_complement`] reject
//! it with [`EsaError::ReservedByteInInput`].

use crate::error::EsaError;
use crate::revcomp::reverse_complement;

/// Primary sentinel `$`: terminates every indexed text, sorts below all
/// legitimate bytes.
pub const SENTINEL: u8 = 0x00;

/// Strand separator `#`, used only in bidirectional mode. Sorts below all
/// legitimate bytes and below [`SENTINEL`].
pub const SEPARATOR: u8 = 0x01;

fn check_reserved_bytes(bytes: &[u8]) -> Result<(), EsaError> {
    for (offset, &b) in bytes.iter().enumerate() {
        if b == SENTINEL || b == SEPARATOR {
            return Err(EsaError::ReservedByteInInput { byte: b, offset });
        }
    }
    Ok(())
}

/// Build the forward-only sentinel-terminated text `F $` and its strand
/// size (`|F|`).
pub fn build(bytes: &[u8]) -> Result<(Vec<u8>, usize), EsaError> {
    check_reserved_bytes(bytes)?;
    let mut s = Vec::with_capacity(bytes.len() + 1);
    s.extend_from_slice(bytes);
    s.push(SENTINEL);
    Ok((s, bytes.len()))
}

/// Build the bidirectional text `F # R $`, where `R` is the reverse
/// complement of `F`, and its strand size (`|F|`).
pub fn build_reverse_complement(bytes: &[u8]) -> Result<(Vec<u8>, usize), EsaError> {
    check_reserved_bytes(bytes)?;
    let r = reverse_complement(bytes);
    let mut s = Vec::with_capacity(bytes.len() * 2 + 2);
    s.extend_from_slice(bytes);
    s.push(SEPARATOR);
    s.extend_from_slice(&r);
    s.push(SENTINEL);
    Ok((s, bytes.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_text_appends_sentinel() {
        let (s, k) = build(b"banana").unwrap();
        assert_eq!(s, b"banana\0");
        assert_eq!(k, 6);
    }

    #[test]
    fn empty_input_is_just_the_sentinel() {
        let (s, k) = build(b"").unwrap();
        assert_eq!(s, vec![SENTINEL]);
        assert_eq!(k, 0);
    }

    #[test]
    fn reverse_complement_text_shape() {
        let (s, k) = build_reverse_complement(b"ACGT").unwrap();
        assert_eq!(k, 4);
        assert_eq!(s.len(), 2 * k + 2);
        assert_eq!(&s[..4], b"ACGT");
        assert_eq!(s[4], SEPARATOR);
        assert_eq!(&s[5..9], b"ACGT"); // revcomp(ACGT) == ACGT
        assert_eq!(s[9], SENTINEL);
    }

    #[test]
    fn rejects_sentinel_byte_in_input() {
        let err = build(b"AC\0GT").unwrap_err();
        assert_eq!(
            err,
            EsaError::ReservedByteInInput {
                byte: SENTINEL,
                offset: 2
            }
        );
    }

    #[test]
    fn rejects_separator_byte_in_input() {
        let err = build_reverse_complement(b"AC\x01GT").unwrap_err();
        assert_eq!(
            err,
            EsaError::ReservedByteInInput {
                byte: SEPARATOR,
                offset: 2
            }
        );
    }
}
