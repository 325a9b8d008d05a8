//! Result and Error types for the element lookups

/// Type alias for `Result<T, elements::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for `nuctools-elements`
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// Atomic number outside of the table
    #[error("Z={z} is not valid, please select a number from 0 to 118 (inclusive)")]
    InvalidAtomicNumber { z: i64 },

    /// Symbols are only ever 1 or 2 characters
    #[error("\"{symbol}\" is too long for an elemental symbol (1 or 2 characters)")]
    SymbolTooLong { symbol: String },

    /// Symbol not found in the table, even after fixing the case
    #[error("no element found for \"{symbol}\"")]
    UnknownSymbol { symbol: String },
}
