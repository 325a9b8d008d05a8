//! Canonical ZZZAAAM identifiers

// nuctools modules
use nuctools_elements::{symbol_of, MAX_Z};
use nuctools_format::{f, strip_separators};

// internal modules
use crate::error::{Error, Result};
use crate::nuclide::IsomerState;
use crate::options::DecodeOptions;
use crate::parser::parse_nuclide;

// external crates
use log::{debug, error};
use serde::{Deserialize, Serialize};

/// Integer identifier of the form `ZZZAAAM = 10000*Z + 10*A + M`
///
/// Packs the atomic number (Z), mass number (A), and isomer index (M) into a
/// single integer. This is lossless for Z up to 118, A up to 999, and M up to
/// 9, and sorts by Z, then A, then M.
///
/// ```rust
/// # use nuctools_nuclide::Zzzaaam;
/// let code = Zzzaaam::new(27, 60, 1).unwrap();
///
/// assert_eq!(code, 270601);
/// assert_eq!(code.z(), 27);
/// assert_eq!(code.a(), 60);
/// assert_eq!(code.m(), 1);
/// ```
///
/// Any `u32` converts directly with `From`, but it is only when something
/// needs the element symbol that an atomic number above 118 is an error.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Zzzaaam(u32);

impl Zzzaaam {
    /// Build an identifier from its parts
    ///
    /// Fails if any part will not fit into its digits.
    pub fn new(z: u8, a: u32, m: u8) -> Result<Self> {
        if z > MAX_Z {
            return Err(nuctools_elements::Error::InvalidAtomicNumber { z: z as i64 }.into());
        }

        if a > 999 {
            return Err(Error::MassOutOfRange { mass: a });
        }

        if m > 9 {
            return Err(Error::IsomerOutOfRange { m });
        }

        Ok(Self(10000 * z as u32 + 10 * a + m as u32))
    }

    /// Convert an identifier that is missing the isomer digit
    ///
    /// ```rust
    /// # use nuctools_nuclide::Zzzaaam;
    /// assert_eq!(Zzzaaam::from_zzzaaa(27060).unwrap(), 270600);
    /// ```
    pub fn from_zzzaaa(code: u32) -> Result<Self> {
        code.checked_mul(10)
            .map(Self)
            .ok_or(Error::CodeOutOfRange { code })
    }

    /// Atomic number Z
    pub fn z(&self) -> u32 {
        self.0 / 10000
    }

    /// Mass number A
    pub fn a(&self) -> u32 {
        (self.0 % 10000) / 10
    }

    /// Isomer index M, 0 for the ground state
    pub fn m(&self) -> u8 {
        (self.0 % 10) as u8
    }

    /// Isomer state for the M digit
    pub fn isomer_state(&self) -> IsomerState {
        IsomerState::from(self.m())
    }

    /// The raw integer value
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Readable name for the identifier using the chosen formatting options
    ///
    /// The output is `[Z<delimiter>]<Symbol><delimiter><A>[m<M>]`, where the
    /// leading atomic number only appears if requested. Excited states are
    /// always written as `m1`, `m2`, etc. whatever label was used to encode
    /// them.
    ///
    /// ```rust
    /// # use nuctools_nuclide::{Zzzaaam, DecodeOptions};
    /// let code = Zzzaaam::from(270601);
    ///
    /// let options = DecodeOptions::default();
    /// assert_eq!(code.to_string_with(&options).unwrap(), "Co-60m1");
    ///
    /// let options = DecodeOptions::builder().include_z(true).build();
    /// assert_eq!(code.to_string_with(&options).unwrap(), "27-Co-60m1");
    /// ```
    pub fn to_string_with(&self, options: &DecodeOptions) -> Result<String> {
        let z = self.z();
        let symbol = symbol_of(z as i64)?;
        let delimiter = &options.delimiter;

        let mut s = match options.include_z {
            true => f!("{z}{delimiter}"),
            false => String::new(),
        };
        s += &f!("{symbol}{delimiter}{}{}", self.a(), self.isomer_state());
        Ok(s)
    }
}

impl From<u32> for Zzzaaam {
    fn from(code: u32) -> Self {
        Self(code)
    }
}

impl From<Zzzaaam> for u32 {
    fn from(code: Zzzaaam) -> Self {
        code.0
    }
}

impl PartialEq<u32> for Zzzaaam {
    fn eq(&self, other: &u32) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for Zzzaaam {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Convert a plaintext nuclide name to a ZZZAAAM identifier
///
/// See [parse_nuclide](crate::parse_nuclide) for the names accepted. The
/// particles `n`, `p`, `d`, and `t` are treated as Z = 0, 1, 1, and 1.
///
/// ```rust
/// # use nuctools_nuclide::nuclide_to_zzzaaam;
/// assert_eq!(nuclide_to_zzzaaam("Co-60m").unwrap(), 270601);
/// assert_eq!(nuclide_to_zzzaaam("241Pu").unwrap(), 942410);
/// assert_eq!(nuclide_to_zzzaaam("1n").unwrap(), 10);
/// ```
///
/// A specific isotope is required, so natural abundances are always rejected.
///
/// ```rust
/// # use nuctools_nuclide::{nuclide_to_zzzaaam, Error};
/// assert!(matches!(
///     nuclide_to_zzzaaam("natU"),
///     Err(Error::NonSpecificIsotope { .. })
/// ));
/// ```
pub fn nuclide_to_zzzaaam(text: &str) -> Result<Zzzaaam> {
    if strip_separators(text).contains("nat") {
        error!("Must specify a specific nuclide, not natural abundances");
        return Err(Error::NonSpecificIsotope {
            text: text.to_string(),
        });
    }

    let code = parse_nuclide(text)?.zzzaaam()?;
    debug!("Converted \"{text}\" to {code}");
    Ok(code)
}

/// Convert a ZZZAAAM identifier to a readable name
///
/// Shorthand for [Zzzaaam::to_string_with()] on a raw integer, including the
/// conversion from ZZZAAA if `options.as_zzzaaa` is set.
///
/// ```rust
/// # use nuctools_nuclide::{zzzaaam_to_string, DecodeOptions};
/// let options = DecodeOptions::builder()
///     .include_z(true)
///     .build();
///
/// assert_eq!(zzzaaam_to_string(270601, &options).unwrap(), "27-Co-60m1");
///
/// let options = DecodeOptions::builder()
///     .as_zzzaaa(true)
///     .delimiter("_")
///     .build();
///
/// assert_eq!(zzzaaam_to_string(94241, &options).unwrap(), "Pu_241");
/// ```
pub fn zzzaaam_to_string(code: u32, options: &DecodeOptions) -> Result<String> {
    let code = match options.as_zzzaaa {
        true => Zzzaaam::from_zzzaaa(code)?,
        false => Zzzaaam::from(code),
    };
    code.to_string_with(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decompose() {
        let code = Zzzaaam::from(1182943);
        assert_eq!(code.z(), 118);
        assert_eq!(code.a(), 294);
        assert_eq!(code.m(), 3);
        assert_eq!(code.isomer_state(), IsomerState::Excited(3));
        assert_eq!(u32::from(code), 1182943);
        assert_eq!(code.to_string(), "1182943");
    }

    #[test]
    fn parts_out_of_range() {
        assert_eq!(
            Zzzaaam::new(119, 1, 0),
            Err(Error::Element(
                nuctools_elements::Error::InvalidAtomicNumber { z: 119 }
            ))
        );
        assert_eq!(
            Zzzaaam::new(1, 1000, 0),
            Err(Error::MassOutOfRange { mass: 1000 })
        );
        assert_eq!(
            Zzzaaam::new(1, 1, 10),
            Err(Error::IsomerOutOfRange { m: 10 })
        );
    }

    #[test]
    fn zzzaaa_overflow() {
        assert_eq!(
            Zzzaaam::from_zzzaaa(u32::MAX),
            Err(Error::CodeOutOfRange { code: u32::MAX })
        );
    }

    #[test]
    fn ordering() {
        let mut codes = [
            Zzzaaam::new(27, 60, 1).unwrap(),
            Zzzaaam::new(26, 56, 0).unwrap(),
            Zzzaaam::new(27, 60, 0).unwrap(),
            Zzzaaam::new(27, 59, 0).unwrap(),
        ];
        codes.sort();
        assert_eq!(codes, [260560u32, 270590, 270600, 270601].map(Zzzaaam::from));
    }

    #[test]
    fn decode_neutron() {
        let options = DecodeOptions::default();
        assert_eq!(zzzaaam_to_string(10, &options).unwrap(), "n-1");
    }

    #[test]
    fn decode_invalid_z() {
        let options = DecodeOptions::default();
        assert!(matches!(
            zzzaaam_to_string(1190010, &options),
            Err(Error::Element(_))
        ));
    }

    #[test]
    fn natural_anywhere() {
        assert!(matches!(
            nuclide_to_zzzaaam("U-nat"),
            Err(Error::NonSpecificIsotope { .. })
        ));
        assert!(matches!(
            nuclide_to_zzzaaam("n_a_t_U"),
            Err(Error::NonSpecificIsotope { .. })
        ));
    }
}
