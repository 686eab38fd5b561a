//! The matcher (§4.4): `get_interval` descends one edge of the implicit
//! suffix tree, `get_match` repeatedly descends to find the longest prefix
//! of a query that occurs anywhere in the indexed text.

use crate::cld::right_child;
use crate::esa::Esa;
use crate::interval::EsaInterval;

impl Esa {
    /// Descend one edge of the implicit suffix tree from `i` on character
    /// `c`, returning the maximal sub-interval of `i` whose suffixes share
    /// `c` at depth `i.l`, or [`EsaInterval::EMPTY`] if no such child
    /// exists.
    pub fn get_interval(&self, i: EsaInterval, c: u8) -> EsaInterval {
        if i.is_empty() {
            return EsaInterval::EMPTY;
        }

        let sa = &self.sa;
        let s = &self.text;

        if i.is_singleton() {
            return if s[sa[i.start as usize] as usize] == c {
                i
            } else {
                EsaInterval::EMPTY
            };
        }

        let l = i.l as usize;
        let mut lower = i.start;
        let mut upper = i.mid;

        while self.lcp[upper as usize] == i.l {
            if s[sa[lower as usize] as usize + l] == c {
                return self.new_interval(lower, upper - 1);
            }
            lower = upper;
            if lower == i.end {
                break;
            }
            upper = right_child(&self.lcp, &self.cld, upper as usize) as i64;
        }

        if s[sa[lower as usize] as usize + l] == c {
            self.new_interval(lower, i.end)
        } else {
            EsaInterval::EMPTY
        }
    }

    /// Find the longest prefix of `query` that occurs anywhere in the
    /// indexed text, returning an interval whose `l` field is that length
    /// and whose `[start, end]` is the SA range of all occurrences.
    ///
    /// Returns [`EsaInterval::EMPTY`] if not even the first character of
    /// `query` occurs in the text. Never fails: this is a total function.
    pub fn get_match(&self, query: &[u8]) -> EsaInterval {
        let m = query.len();
        let mut cur = self.root_interval();
        let mut k = 0usize;

        while k < m {
            let child = self.get_interval(cur, query[k]);
            if child.is_empty() {
                if k == 0 {
                    return EsaInterval::EMPTY;
                }
                cur.l = k as i64;
                return cur;
            }
            k += 1;
            cur = child;

            let mut l = cur.l as usize;
            if cur.is_singleton() || l > m {
                l = m;
            }
            let sa_idx = self.sa[cur.start as usize] as usize;
            // a singleton's suffix may run out before the query does; never
            // compare past the text itself.
            let remaining = self.text.len() - sa_idx;
            if l > remaining {
                l = remaining;
            }
            while k < l {
                if self.text[sa_idx + k] != query[k] {
                    cur.l = k as i64;
                    return cur;
                }
                k += 1;
            }
            if cur.is_singleton() && k < m {
                cur.l = k as i64;
                return cur;
            }
        }

        cur.l = m as i64;
        cur
    }
}

#[cfg(test)]
mod tests {
    use crate::method::SaMethod;
    use crate::Esa;

    fn naive_longest_match(text: &[u8], query: &[u8]) -> (usize, Vec<usize>) {
        // text excludes the sentinel.
        let mut best_len = 0;
        let mut positions = Vec::new();
        for start in 0..=text.len() {
            let suffix = &text[start.min(text.len())..];
            let n = Iterator::zip(suffix.iter(), query.iter())
                .take_while(|(&a, &b)| a == b)
                .count();
            if n > best_len {
                best_len = n;
                positions.clear();
                positions.push(start);
            } else if n == best_len && n > 0 {
                positions.push(start);
            }
        }
        (best_len, positions)
    }

    fn assert_match_matches_naive(text: &[u8], query: &[u8]) {
        let esa = Esa::new(text, SaMethod::Default).unwrap();
        let m = esa.get_match(query);
        let (expected_len, _) = naive_longest_match(text, query);
        if expected_len == 0 {
            assert!(m.is_empty(), "text={:?} query={:?}", text, query);
        } else {
            assert!(!m.is_empty());
            assert_eq!(m.l as usize, expected_len, "text={:?} query={:?}", text, query);
            for k in m.start..=m.end {
                let pos = esa.sa()[k as usize] as usize;
                assert_eq!(&esa.text()[pos..pos + expected_len], &query[..expected_len]);
            }
        }
    }

    #[test]
    fn spec_table_scenarios() {
        assert_match_matches_naive(b"ACAAACATAT", b"ACAT");
        assert_match_matches_naive(b"ACTTCACAAA", b"CACAA");
        assert_match_matches_naive(b"AAGTAAGG", b"GTAAG");
        assert_match_matches_naive(b"AAGTAAGG", b"M");
        assert_match_matches_naive(b"TCTAATGAATATGTAGGATACGAATCGG", b"GAATA");
    }

    #[test]
    fn reverse_complement_scenario() {
        let esa = Esa::new_reverse_complement(b"ACAAACATAT", SaMethod::Default).unwrap();
        let m = esa.get_match(b"ATGT");
        assert_eq!(m.l, 4);
        assert!(!m.is_empty());
    }

    #[test]
    fn empty_query_returns_root_with_zero_length() {
        let esa = Esa::new(b"ACAAACATAT", SaMethod::Default).unwrap();
        let m = esa.get_match(b"");
        assert_eq!(m.l, 0);
        assert!(!m.is_empty());
        assert_eq!(m.start, 0);
        assert_eq!(m.end, (esa.sa().len() - 1) as i64);
    }

    #[test]
    fn query_longer_than_a_short_suffix_does_not_read_past_the_text() {
        // the query's own bytes happen to equal the sentinel, so the inline
        // singleton-extension loop can't rely on a natural mismatch at the
        // text's end to stop it; it must stop because the suffix itself ran
        // out of bytes.
        let esa = Esa::new(b"A", SaMethod::Default).unwrap();
        let m = esa.get_match(&[b'A', 0x00, b'B']);
        assert_eq!(m.l, 2);
        assert!(!m.is_empty());
    }

    #[test]
    fn single_character_present_and_absent() {
        let esa = Esa::new(b"ACAAACATAT", SaMethod::Default).unwrap();
        assert_eq!(esa.get_match(b"A").l, 1);
        assert!(esa.get_match(b"Z").is_empty());
    }

    #[test]
    fn query_longer_than_text_and_equal_to_text() {
        let text = b"ACAAACATAT";
        let esa = Esa::new(text, SaMethod::Default).unwrap();
        assert_eq!(esa.get_match(text).l as usize, text.len());

        let mut longer = text.to_vec();
        longer.push(b'Z');
        assert_eq!(esa.get_match(&longer).l as usize, text.len());
    }

    #[test]
    fn self_match_totality() {
        let text = b"TCTAATGAATATGTAGGATACGAATCGG";
        let esa = Esa::new(text, SaMethod::Default).unwrap();
        for start in 0..text.len() {
            let suffix = &text[start..];
            let m = esa.get_match(suffix);
            assert_eq!(m.l as usize, suffix.len(), "suffix starting at {}", start);
        }
    }

    #[test]
    fn idempotent_queries() {
        let esa = Esa::new(b"ACAAACATAT", SaMethod::Default).unwrap();
        let a = esa.get_match(b"ACAT");
        let b = esa.get_match(b"ACAT");
        assert_eq!(a, b);
    }

    #[test]
    fn get_interval_children_share_the_extension_byte() {
        let esa = Esa::new(b"ACAAACATAT", SaMethod::Default).unwrap();
        let root = esa.root_interval();
        for &c in b"ACGT" {
            let child = esa.get_interval(root, c);
            if child.is_empty() {
                continue;
            }
            for k in child.start..=child.end {
                let pos = esa.sa()[k as usize] as usize;
                assert_eq!(esa.text()[pos + root.l as usize], c);
            }
        }
    }
}
