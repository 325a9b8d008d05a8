//! `nuctools` is a small toolkit for working with nuclide identifiers
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use nuctools_format as format;

#[doc(inline)]
pub use nuctools_elements as elements;

#[doc(inline)]
pub use nuctools_nuclide as nuclide;
