// internal modules
use crate::error::Result;
use crate::zzzaaam::zzzaaam_to_string;

/// Formatting options for turning ZZZAAAM identifiers into names
///
/// The fields are left public for direct use, but a builder is also
/// implemented. By default the output is `<Symbol>-<A>[m<M>]`.
///
/// ```rust
/// # use nuctools_nuclide::DecodeOptions;
/// let options = DecodeOptions::builder()
///     .include_z(true)
///     .delimiter(" ")
///     .build();
///
/// assert_eq!(options.decode(270601).unwrap(), "27 Co 60m1");
/// ```
///
/// Identifiers from tools that drop the isomer digit (ZZZAAA) are handled by
/// setting `as_zzzaaa`.
///
/// ```rust
/// # use nuctools_nuclide::DecodeOptions;
/// let options = DecodeOptions::builder()
///     .as_zzzaaa(true)
///     .build();
///
/// assert_eq!(options.decode(27060).unwrap(), "Co-60");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Prefix the name with the atomic number
    pub include_z: bool,
    /// Input is ZZZAAA, i.e. missing the trailing isomer digit
    pub as_zzzaaa: bool,
    /// Separator placed between every part of the name
    pub delimiter: String,
}

impl DecodeOptions {
    /// Start a [DecodeOptionsBuilder] with default values
    pub fn builder() -> DecodeOptionsBuilder {
        DecodeOptionsBuilder::default()
    }

    /// Convert a raw identifier to a name with these options
    pub fn decode(&self, code: u32) -> Result<String> {
        zzzaaam_to_string(code, self)
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptionsBuilder::default().build()
    }
}

/// Builder implementation for [DecodeOptions]
///
/// Allows for chained setter calls, and any number of parameters can be set
/// this way (including none). Call [build()](DecodeOptionsBuilder::build) to
/// get the final [DecodeOptions].
#[derive(Debug)]
pub struct DecodeOptionsBuilder {
    include_z: bool,
    as_zzzaaa: bool,
    delimiter: String,
}

impl DecodeOptionsBuilder {
    /// Create a new instance of the builder with default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the [DecodeOptions] type
    pub fn build(self) -> DecodeOptions {
        DecodeOptions {
            include_z: self.include_z,
            as_zzzaaa: self.as_zzzaaa,
            delimiter: self.delimiter,
        }
    }

    /// Prefix the name with the atomic number (default `false`)
    pub fn include_z(mut self, include_z: bool) -> Self {
        self.include_z = include_z;
        self
    }

    /// Treat input as ZZZAAA identifiers (default `false`)
    ///
    /// The value is multiplied by 10 before decoding, so the result is always
    /// the ground state.
    pub fn as_zzzaaa(mut self, as_zzzaaa: bool) -> Self {
        self.as_zzzaaa = as_zzzaaa;
        self
    }

    /// Separator between parts of the name (default `-`)
    pub fn delimiter(mut self, delimiter: &str) -> Self {
        self.delimiter = delimiter.to_string();
        self
    }
}

impl Default for DecodeOptionsBuilder {
    fn default() -> Self {
        Self {
            include_z: false,
            as_zzzaaa: false,
            delimiter: "-".to_string(),
        }
    }
}
