/// Selects which suffix array construction strategy backs an [`crate::Esa`].
///
/// All three strategies satisfy the same contract: given sentinel-terminated
/// bytes, produce the suffix array of those exact bytes. They differ only in
/// asymptotic cost and the auxiliary machinery required to get there.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SaMethod {
    /// Induced-sort (SA-IS) construction over the byte alphabet, falling
    /// back to [`SaMethod::Reference`] below a small-input threshold. Linear
    /// time, no external native dependencies. The default choice.
    Default,
    /// Delegates to an external divsufsort-family suffix-sorting library.
    /// Fastest on large inputs; crosses an FFI boundary.
    HighPerformance,
    /// Naive comparison-sort construction. Quadratic-ish in the worst case,
    /// but simple enough to trust as ground truth in tests, and always
    /// available regardless of input size.
    Reference,
}

impl Default for SaMethod {
    fn default() -> Self {
        SaMethod::Default
    }
}
