//! Common data structures

// nuctools modules
use nuctools_elements::z_of;
use nuctools_format::f;

// internal modules
use crate::error::{Error, Result};
use crate::latex::render_latex;
use crate::parser::parse_nuclide;
use crate::zzzaaam::Zzzaaam;

// external crates
use log::warn;
use serde::{Deserialize, Serialize};

/// Atomic number for an element symbol or a lower case particle label
///
/// The particle labels `n`, `p`, `d`, and `t` are checked first, and are case
/// sensitive. Anything else is looked up in the element table.
///
/// ```rust
/// # use nuctools_nuclide::atomic_number;
/// assert_eq!(atomic_number("n").unwrap(), 0);
/// assert_eq!(atomic_number("d").unwrap(), 1);
/// assert_eq!(atomic_number("N").unwrap(), 7);
/// assert_eq!(atomic_number("co").unwrap(), 27);
/// ```
pub fn atomic_number(symbol: &str) -> Result<u8> {
    match symbol {
        "n" => Ok(0),
        "p" | "d" | "t" => Ok(1),
        _ => Ok(z_of(symbol)?),
    }
}

/// Mass number of a nuclide
///
/// Either a specific number of nucleons, or the natural abundance of the
/// element's isotopes.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MassNumber {
    /// Natural abundance, written as `nat`
    Natural,
    /// Specific isotope
    Number(u32),
}

impl std::fmt::Display for MassNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            MassNumber::Natural => write!(f, "nat"),
            MassNumber::Number(a) => write!(f, "{a}"),
        }
    }
}

/// Variants of excited states
///
/// A nuclide can either be in the ground state, or some excited state.
///
/// Labels are accepted in either the FISPACT-II style of single letters or the
/// ENSDF style of numbered states:
///
/// | Index | Labels      |
/// | ----- | ----------- |
/// | 0     | `""`, `g`   |
/// | 1     | `m`, `m1`   |
/// | 2     | `n`, `m2`   |
/// | 3     | `o`, `m3`   |
/// | 4     | `p`, `m4`   |
/// | 5     | `q`, `m5`   |
///
/// Displaying an excited state always uses the ENSDF notation.
///
/// ```rust
/// # use nuctools_nuclide::IsomerState;
/// let state = IsomerState::from_label("n");
/// assert_eq!(state, IsomerState::Excited(2));
/// assert_eq!(state.to_string(), "m2");
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum IsomerState {
    /// Ground state, M = 0
    #[default]
    Ground,
    /// Excited state with isomer index M
    ///
    /// `Excited(0)` is treated as the ground state everywhere.
    Excited(u8),
}

impl IsomerState {
    /// Interpret an isomer label
    ///
    /// Surrounding whitespace is ignored, but the match is otherwise exact and
    /// case sensitive. Unknown labels are assumed to be the ground state with a
    /// warning.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "" | "g" => IsomerState::Ground,
            "m" | "m1" => IsomerState::Excited(1),
            "n" | "m2" => IsomerState::Excited(2),
            "o" | "m3" => IsomerState::Excited(3),
            "p" | "m4" => IsomerState::Excited(4),
            "q" | "m5" => IsomerState::Excited(5),
            unknown => {
                warn!("Unknown isomeric state \"{unknown}\", assumed ground state");
                IsomerState::Ground
            }
        }
    }

    /// Isomer index M, where 0 is the ground state
    pub fn index(&self) -> u8 {
        match self {
            IsomerState::Ground => 0,
            IsomerState::Excited(m) => *m,
        }
    }
}

impl From<u8> for IsomerState {
    fn from(m: u8) -> Self {
        match m {
            0 => IsomerState::Ground,
            m => IsomerState::Excited(m),
        }
    }
}

impl std::fmt::Display for IsomerState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let state = match self.index() {
            0 => String::new(),
            e => f!("m{e}"),
        };
        write!(f, "{state}")
    }
}

/// Parts of a plaintext nuclide name
///
/// The `FromStr` trait is implemented and will split a loosely formatted
/// string into its symbol, mass number, and isomer label. See
/// [parse_nuclide] for the full set of rules.
///
/// ```rust
/// # use nuctools_nuclide::{Nuclide, MassNumber};
/// let nuclide: Nuclide = "Co-60m".parse().unwrap();
///
/// assert_eq!(
///     nuclide,
///     Nuclide {
///         symbol: "Co".to_string(),
///         mass: Some(MassNumber::Number(60)),
///         isomer: "m".to_string(),
///     }
/// );
/// ```
///
/// The isomer label is kept exactly as written, and only interpreted when
/// needed through [isomer_state()](Nuclide::isomer_state).
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Nuclide {
    /// Element symbol, or one of the particles `n`, `p`, `d`, `t`
    pub symbol: String,
    /// Mass number, if any was given
    pub mass: Option<MassNumber>,
    /// Raw isomer label as written e.g. 'm', 'm1', 'n'
    pub isomer: String,
}

impl Nuclide {
    /// Simple formatted string to identify the nuclide
    ///
    /// ```rust
    /// # use nuctools_nuclide::Nuclide;
    /// let nuclide: Nuclide = "60m-Co".parse().unwrap();
    /// assert_eq!(nuclide.name(), "Co60m");
    /// ```
    pub fn name(&self) -> String {
        let mass = match self.mass {
            Some(m) => m.to_string(),
            None => String::new(),
        };
        f!("{}{}{}", self.symbol, mass, self.isomer)
    }

    /// True for natural abundance rather than a specific isotope
    pub fn is_natural(&self) -> bool {
        self.mass == Some(MassNumber::Natural)
    }

    /// Atomic number, see [atomic_number()] for the particle conventions
    pub fn atomic_number(&self) -> Result<u8> {
        if self.symbol.is_empty() {
            return Err(Error::InvalidNuclideText {
                text: self.name(),
                reason: "no element symbol".to_string(),
            });
        }
        atomic_number(&self.symbol)
    }

    /// Specific mass number required for anything but display
    pub fn mass_number(&self) -> Result<u32> {
        match self.mass {
            Some(MassNumber::Number(a)) => Ok(a),
            Some(MassNumber::Natural) => Err(Error::NonSpecificIsotope { text: self.name() }),
            None => Err(Error::InvalidNuclideText {
                text: self.name(),
                reason: "no mass number".to_string(),
            }),
        }
    }

    /// Interpret the raw isomer label
    ///
    /// Unknown labels log a warning and are taken as the ground state.
    pub fn isomer_state(&self) -> IsomerState {
        IsomerState::from_label(&self.isomer)
    }

    /// Encode as a ZZZAAAM identifier
    ///
    /// ```rust
    /// # use nuctools_nuclide::Nuclide;
    /// let nuclide: Nuclide = "Co-60m".parse().unwrap();
    /// assert_eq!(nuclide.zzzaaam().unwrap(), 270601);
    /// ```
    pub fn zzzaaam(&self) -> Result<Zzzaaam> {
        let z = self.atomic_number()?;
        let a = self.mass_number()?;
        let m = self.isomer_state().index();
        Zzzaaam::new(z, a, m)
    }

    /// LaTeX markup with the mass and isomer as a superscript
    ///
    /// If `include_z` is set the atomic number is added as a subscript, and
    /// the symbol must then be a known element or particle.
    ///
    /// ```rust
    /// # use nuctools_nuclide::Nuclide;
    /// let nuclide: Nuclide = "Co-60m".parse().unwrap();
    /// assert_eq!(nuclide.latex(false).unwrap(), "$^{60m}$Co");
    /// assert_eq!(nuclide.latex(true).unwrap(), "$^{60m}_{27}$Co");
    /// ```
    pub fn latex(&self, include_z: bool) -> Result<String> {
        let z = match include_z {
            true => Some(self.atomic_number()?),
            false => None,
        };

        let mass = match self.mass {
            Some(m) => m.to_string(),
            None => String::new(),
        };

        Ok(render_latex(&mass, &self.isomer, z, &self.symbol))
    }
}

impl std::str::FromStr for Nuclide {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_nuclide(s)
    }
}

impl std::fmt::Display for Nuclide {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<Zzzaaam> for Nuclide {
    type Error = crate::error::Error;

    /// Rebuild the parts of a nuclide from an identifier
    ///
    /// The isomer label is always in the numbered `m<M>` form.
    fn try_from(code: Zzzaaam) -> Result<Self> {
        let symbol = nuctools_elements::symbol_of(code.z() as i64)?;
        Ok(Nuclide {
            symbol: symbol.to_string(),
            mass: Some(MassNumber::Number(code.a())),
            isomer: IsomerState::from(code.m()).to_string(),
        })
    }
}
