//! Periodic table lookups for nuclide identifiers
//!
//! A fixed table of every element from hydrogen to oganesson, with the free
//! neutron sitting at Z = 0 by convention. The table is static data that
//! never changes, so every lookup is safe to call from anywhere.
//!
//! ## Quickstart example
//!
//! ```rust
//! # use nuctools_elements::{symbol_of, z_of, name_of};
//! // Symbol for an atomic number
//! assert_eq!(symbol_of(27).unwrap(), "Co");
//!
//! // Atomic number for a symbol, in any case
//! assert_eq!(z_of("co").unwrap(), 27);
//!
//! // Full name
//! assert_eq!(name_of(27).unwrap(), "Cobalt");
//! ```
//!
//! Failed lookups are explicit errors rather than sentinel values.
//!
//! ```rust
//! # use nuctools_elements::{symbol_of, z_of, Error};
//! assert_eq!(symbol_of(119), Err(Error::InvalidAtomicNumber { z: 119 }));
//! assert!(z_of("Abc").is_err());
//! ```

// Modules
mod element;
mod error;
mod lookup;
mod table;

#[doc(inline)]
pub use element::Element;

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use lookup::{
    element, element_by_symbol, elements, lookup, mass_of, name_of, symbol_of, z_of,
};

#[doc(inline)]
pub use table::MAX_Z;
