//! [`crate::SaMethod::HighPerformance`]: delegates suffix sorting to the
//! external `libdivsufsort` via the `cdivsufsort` crate.
//!
//! The source this crate is adapted from reinterpreted its own `Vec<u32>`
//! output buffer as a `&mut [i32]` through raw pointer reconstruction of the
//! slice header, to hand it straight to the native sorter without a copy.
//! That aliasing trick is exactly what the design notes this crate follows
//! forbid: the safe version below lets `cdivsufsort` sort into its own
//! `i32` buffer and then explicitly converts each element into the `u32`
//! index space this crate uses everywhere else.

use crate::error::EsaError;

/// Maximum input length indexable through the native `i32`-indexed sort
/// `libdivsufsort` performs; tighter than [`super::MAX_LENGTH`].
pub const MAX_LENGTH: usize = std::i32::MAX as usize;

/// Suffix-sort `s` using `libdivsufsort`, returning a suffix array of
/// length `s.len() + 1` (position `s.len()` is the implicit terminator,
/// see the `construct` module docs).
///
/// Callers go through [`super::build_sa`], which already enforces
/// [`MAX_LENGTH`] before dispatching here, so this does not re-check it.
pub fn build(s: &[u8]) -> Result<Vec<u32>, EsaError> {
    let mut native_sa = vec![0i32; s.len()];
    cdivsufsort::sort_in_place(s, &mut native_sa[..]);

    let mut sa = Vec::with_capacity(s.len() + 1);
    sa.push(s.len() as u32);
    for &idx in &native_sa {
        if idx < 0 {
            return Err(EsaError::SaBuilderFailure(format!(
                "libdivsufsort produced a negative index: {}",
                idx
            )));
        }
        sa.push(idx as u32);
    }
    Ok(sa)
}
