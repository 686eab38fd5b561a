use thiserror::Error;

/// Domain errors surfaced by ESA construction.
///
/// Query operations ([`crate::Esa::get_interval`], [`crate::Esa::get_match`])
/// are total functions and never return this type; only construction can
/// fail.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum EsaError {
    /// The selected [`crate::SaMethod`] did not resolve to a known
    /// construction strategy.
    ///
    /// `SaMethod` is a closed enum, so this variant is unreachable through
    /// the safe public API; it documents the failure mode that the source
    /// this crate was distilled from surfaced as a fatal runtime default.
    #[error("invalid suffix array construction method: {0}")]
    InvalidSaMethod(String),

    /// The input meets or exceeds the maximum length the selected
    /// [`crate::SaMethod`] can index; each strategy carries its own bound.
    #[error("input of {len} bytes meets or exceeds the maximum indexable length of {max}")]
    InputTooLarge {
        /// Length of the rejected input, in bytes.
        len: usize,
        /// Maximum length the selected `SaMethod` strategy can index.
        max: usize,
    },

    /// The external suffix array builder used by
    /// [`crate::SaMethod::HighPerformance`] reported a failure.
    #[error("suffix array builder failed: {0}")]
    SaBuilderFailure(String),

    /// The input contains a byte reserved for use as a sentinel (`$`) or,
    /// in bidirectional mode, the strand separator (`#`). Per §3/§4.5 of
    /// the design, both must compare strictly below every legitimate input
    /// byte, which this crate implements by reserving the two lowest byte
    /// values rather than widening the alphabet.
    #[error("input contains reserved sentinel byte 0x{byte:02x} at offset {offset}")]
    ReservedByteInInput {
        /// The offending byte value (`0x00` or `0x01`).
        byte: u8,
        /// Offset of the first occurrence within the caller-supplied input.
        offset: usize,
    },
}
