//! Enhanced suffix array construction and longest-prefix matching for
//! in-memory byte strings, with an optional bidirectional mode for
//! nucleotide sequences.
//!
//! An [`Esa`] bundles a sentinel-terminated text with its suffix array (SA),
//! LCP array and child array (CLD), which together simulate the implicit
//! suffix tree of the text without ever materializing it as a tree of nodes.
//! Construction builds the SA via one of three interchangeable
//! [`SaMethod`] strategies, the LCP array via Kasai's algorithm, and the
//! CLD array via the Abouelhoda-Kurtz-Ohlebusch (AKO) monotonic-stack scan.
//! Matching ([`Esa::get_match`]) then walks LCP-intervals top-down,
//! descending one edge per distinct byte of the query and skipping
//! redundant byte comparisons along the way.
//!
//! ```
//! use esa::{Esa, SaMethod};
//!
//! let index = Esa::new(b"ACAAACATAT", SaMethod::Default).unwrap();
//! let m = index.get_match(b"ACAT");
//! assert_eq!(m.l, 4);
//! assert!(!m.is_empty());
//! ```

mod cld;
mod construct;
mod error;
mod esa;
mod interval;
mod lcp;
mod matcher;
mod method;
mod revcomp;
mod text;

pub use crate::cld::{cld, left_child, right_child};
pub use crate::construct::build_sa;
pub use crate::error::EsaError;
pub use crate::esa::Esa;
pub use crate::interval::EsaInterval;
pub use crate::lcp::lcp;
pub use crate::method::SaMethod;
