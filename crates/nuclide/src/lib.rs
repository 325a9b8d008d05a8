//! Parsing and encoding of nuclide identifiers
//!
//! Converts between loosely formatted plaintext nuclide names and the
//! canonical `ZZZAAAM = 10000*Z + 10*A + M` integer identifiers, where Z is the
//! atomic number, A the mass number, and M the isomer index.
//!
//! ## Quickstart example
//!
//! ```rust
//! # use nuctools_nuclide::{nuclide_to_zzzaaam, zzzaaam_to_string, DecodeOptions};
//! // Any reasonable plaintext name to an identifier
//! let code = nuclide_to_zzzaaam("Co-60m").unwrap();
//! assert_eq!(code, 270601);
//!
//! // and back again
//! let options = DecodeOptions::builder().include_z(true).build();
//! assert_eq!(zzzaaam_to_string(270601, &options).unwrap(), "27-Co-60m1");
//! ```
//!
//! The same names can be rendered as LaTeX markup for plot labels.
//!
//! ```rust
//! # use nuctools_nuclide::nuclide_to_latex;
//! assert_eq!(nuclide_to_latex("241Pu", true).unwrap(), "$^{241}_{94}$Pu");
//! ```
//!
//! ## Core concepts
//!
//! Plaintext names are first split into a [Nuclide], which keeps the symbol,
//! [MassNumber], and isomer label exactly as they were written. The label is
//! only interpreted as an [IsomerState] when an identifier is needed.
//!
//! ### Name formats
//!
//! Names may be written mass first (`60mCo`, `241Pu`) or symbol first
//! (`Co60m`, `Pu-241`), with any spaces, hyphens, or underscores in between.
//! The lower case particles `n`, `p`, `d`, and `t` are understood, so `1n`
//! is a neutron and `2d` a deuteron.
//!
//! ### Natural abundance
//!
//! A mass of `nat` is fine for display, but has no ZZZAAAM identifier since
//! it is not a specific isotope.
//!
//! ### Isomer notation
//!
//! Isomers may be written in FISPACT-II style (`m`, `n`, `o`, ...) or ENSDF
//! style (`m1`, `m2`, `m3`, ...). Converting an identifier back to a name
//! always uses the ENSDF style.
//!
//! ```rust
//! # use nuctools_nuclide::{nuclide_to_zzzaaam, DecodeOptions};
//! let code = nuclide_to_zzzaaam("Hf178n").unwrap();
//! assert_eq!(DecodeOptions::default().decode(code.value()).unwrap(), "Hf-178m2");
//! ```

// Modules
mod error;
mod latex;
mod nuclide;
mod options;
mod parser;
mod zzzaaam;

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use nuclide::{atomic_number, IsomerState, MassNumber, Nuclide};

#[doc(inline)]
pub use options::{DecodeOptions, DecodeOptionsBuilder};

#[doc(inline)]
pub use parser::parse_nuclide;

#[doc(inline)]
pub use latex::{latex_form, nuclide_to_latex};

#[doc(inline)]
pub use zzzaaam::{nuclide_to_zzzaaam, zzzaaam_to_string, Zzzaaam};
