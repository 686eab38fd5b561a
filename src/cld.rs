//! Child array construction via a monotonic stack scan (§4.2), plus the two
//! helper accessors that resolve its overloaded slot meaning (§9.2).

/// Compute the child array for LCP array `lcp` (length `n+2`, including its
/// leading and trailing `-1` sentinels).
///
/// Returns a vector of length `lcp.len()` (i.e. `n+2`): `cld[0] == lcp.len()
/// - 1` (the root sentinel, the last valid index of `lcp`/`cld`) and every
/// other slot stores either a left-child or a right-child pointer depending
/// on the local LCP profile, resolved via [`left_child`]/[`right_child`].
pub fn cld(lcp: &[i64]) -> Vec<i64> {
    let n = lcp.len() - 1;
    let mut out = vec![0i64; lcp.len()];
    out[0] = n as i64;

    // Monotonic stack of LCP-interval boundary indices, bounded by the
    // LCP-interval tree depth (at most n+1); pre-reserved to avoid
    // reallocation during the scan.
    let mut stack: Vec<usize> = Vec::with_capacity(lcp.len());
    stack.push(0);

    for k in 1..=n {
        while lcp[k] < lcp[*stack.last().unwrap()] {
            let mut last = stack.pop().unwrap();
            while lcp[*stack.last().unwrap()] == lcp[last] {
                out[*stack.last().unwrap()] = last as i64;
                last = stack.pop().unwrap();
            }
            if lcp[k] < lcp[*stack.last().unwrap()] {
                out[*stack.last().unwrap()] = last as i64;
            } else {
                out[k - 1] = last as i64;
            }
        }
        stack.push(k);
    }

    out
}

/// Left-child pointer at position `i` (`CLD[i+1].L`), valid when
/// `lcp[i] > lcp[i + 1]`.
#[inline]
pub fn left_child(lcp: &[i64], cld: &[i64], i: usize) -> usize {
    debug_assert!(lcp[i] > lcp[i + 1]);
    cld[i] as usize
}

/// Right-child / next-sibling pointer at position `i` (`CLD[i].R`), valid
/// when `lcp[i] <= lcp[i + 1]`.
#[inline]
pub fn right_child(lcp: &[i64], cld: &[i64], i: usize) -> usize {
    debug_assert!(lcp[i] <= lcp[i + 1]);
    cld[i] as usize
}
