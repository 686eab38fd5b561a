//! LCP array construction via the Kasai algorithm (§4.1).

/// Compute the LCP array for sentinel-terminated text `s` and its suffix
/// array `sa` (`|s| == |sa|`).
///
/// Returns a vector of length `sa.len() + 1`: `lcp[0] == -1`, `lcp[i]` for
/// `1 <= i <= n` is the longest common prefix length of the suffixes at
/// `sa[i-1]` and `sa[i]`, and a trailing `-1` is appended unconditionally
/// (§9's resolved open question) so every consumer can safely read
/// `lcp[n+1]`.
pub fn lcp(s: &[u8], sa: &[u32]) -> Vec<i64> {
    debug_assert_eq!(s.len(), sa.len());

    let n = sa.len();
    let mut isa = vec![0u32; n];
    for (rank, &pos) in sa.iter().enumerate() {
        isa[pos as usize] = rank as u32;
    }

    let mut out = vec![0i64; n];
    out[0] = -1;

    let mut l: usize = 0;
    for i in 0..n {
        let j = isa[i] as usize;
        if j == 0 {
            continue;
        }
        let k = sa[j - 1] as usize;
        while i + l < n && k + l < n && s[k + l] == s[i + l] {
            l += 1;
        }
        out[j] = l as i64;
        l = l.saturating_sub(1);
    }

    out.push(-1);
    out
}
