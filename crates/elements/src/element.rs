// external crates
use serde::Serialize;

/// A single entry in the periodic table
///
/// All instances live in a static table for the lifetime of the program, so
/// lookups hand out `&'static Element` references rather than copies.
///
/// ```rust
/// # use nuctools_elements::{element, Element};
/// let cobalt: &Element = element(27).unwrap();
///
/// assert_eq!(cobalt.symbol, "Co");
/// assert_eq!(cobalt.name, "Cobalt");
/// assert_eq!(cobalt.to_string(), "Co");
/// ```
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Element {
    /// Atomic number, with 0 reserved for the neutron
    pub z: u8,
    /// Chemical symbol e.g. 'He', 'Co'
    pub symbol: &'static str,
    /// Full name e.g. 'Helium', 'Cobalt'
    pub name: &'static str,
    /// Average atomic mass (u)
    pub mass: f64,
}

impl Element {
    pub(crate) const fn new(z: u8, symbol: &'static str, name: &'static str, mass: f64) -> Self {
        Self {
            z,
            symbol,
            name,
            mass,
        }
    }

    /// True only for the Z = 0 neutron entry
    pub fn is_neutron(&self) -> bool {
        self.z == 0
    }
}

impl std::str::FromStr for Element {
    type Err = crate::error::Error;

    /// Accepts either an atomic number or a symbol, see [lookup](crate::lookup)
    fn from_str(s: &str) -> crate::error::Result<Self> {
        crate::lookup(s).copied()
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol)
    }
}
