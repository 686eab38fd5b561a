//! Suffix array construction strategies behind the [`crate::SaMethod`]
//! contract (§9.1 of the design: each strategy returns the suffix array of
//! `s`, treating the position one past the end of `s` as an implicit,
//! always-smallest terminator — callers do not append an explicit sentinel
//! byte to `s` itself before calling `build_sa`; [`crate::Esa`] applies that
//! convention consistently when it indexes a literal sentinel-terminated
//! text alongside this suffix array).

mod highperf;
mod naive;
pub(crate) mod sais;

use crate::error::EsaError;
use crate::method::SaMethod;

/// Maximum input length [`SaMethod::Default`] and [`SaMethod::Reference`]
/// can index: both store offsets in a `u32`-indexed suffix array, with two
/// values (`u32::MAX`, `u32::MAX - 1`) reserved so the implicit terminator
/// and any internal NIL marker stay distinguishable from real offsets.
/// [`SaMethod::HighPerformance`] is additionally constrained by the native
/// `i32` sort it wraps and carries its own, tighter bound
/// ([`highperf::MAX_LENGTH`]).
pub const MAX_LENGTH: usize = (std::u32::MAX - 2) as usize;

/// Build a suffix array for `s`, with the implicit terminator convention
/// described in the module docs, using the given strategy.
///
/// Returns a suffix array of length `s.len() + 1`, where `sa[0] == s.len()`
/// (the implicit terminator sorts first).
pub fn build_sa(s: &[u8], method: SaMethod) -> Result<Vec<u32>, EsaError> {
    match method {
        SaMethod::Reference => {
            check_length(s, MAX_LENGTH)?;
            log::debug!(
                "constructing suffix array for {} bytes via naive comparison sort",
                s.len()
            );
            Ok(naive::build(s))
        }
        SaMethod::Default => {
            check_length(s, MAX_LENGTH)?;
            log::debug!("constructing suffix array for {} bytes via SA-IS", s.len());
            let mut sa = vec![0u32; s.len() + 1];
            sais::construct(s, &mut sa[..]);
            Ok(sa)
        }
        SaMethod::HighPerformance => {
            check_length(s, highperf::MAX_LENGTH)?;
            log::debug!(
                "constructing suffix array for {} bytes via libdivsufsort",
                s.len()
            );
            highperf::build(s)
        }
    }
}

fn check_length(s: &[u8], max: usize) -> Result<(), EsaError> {
    if s.len() >= max {
        Err(EsaError::InputTooLarge { len: s.len(), max })
    } else {
        Ok(())
    }
}
