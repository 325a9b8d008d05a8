//! Result and Error types for the nuclide codec

/// Type alias for `Result<T, nuclide::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for `nuctools-nuclide`
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// Failed element table lookup
    #[error("element lookup failed")]
    Element(#[from] nuctools_elements::Error),

    /// Text that can not be made into a usable nuclide
    #[error("could not interpret \"{text}\" as a nuclide, {reason}")]
    InvalidNuclideText { text: String, reason: String },

    /// Natural abundance given where a specific isotope is required
    #[error("must specify a specific nuclide, not natural abundances (\"{text}\")")]
    NonSpecificIsotope { text: String },

    /// Mass number will not fit into the three AAA digits
    #[error("mass number {mass} is outside of 0 to 999 (inclusive)")]
    MassOutOfRange { mass: u32 },

    /// Isomer index will not fit into the single M digit
    #[error("isomer index {m} is outside of 0 to 9 (inclusive)")]
    IsomerOutOfRange { m: u8 },

    /// Identifier too large to be a ZZZAAAM value
    #[error("{code} is too large to be converted to a ZZZAAAM identifier")]
    CodeOutOfRange { code: u32 },
}
