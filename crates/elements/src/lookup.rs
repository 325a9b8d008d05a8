// nuctools modules
use nuctools_format::normalise_symbol;

// internal modules
use crate::element::Element;
use crate::error::{Error, Result};
use crate::table::{ELEMENTS, MAX_Z};

// external crates
use log::trace;

/// Every element in the table, ordered by atomic number
///
/// ```rust
/// # use nuctools_elements::elements;
/// assert_eq!(elements().len(), 119);
/// assert_eq!(elements()[92].symbol, "U");
/// ```
pub fn elements() -> &'static [Element] {
    &ELEMENTS
}

/// Get the [Element] for an atomic number
///
/// Any integer is accepted, but only 0 to 118 (inclusive) are valid.
///
/// ```rust
/// # use nuctools_elements::element;
/// assert_eq!(element(26).unwrap().name, "Iron");
/// assert!(element(-1).is_err());
/// assert!(element(119).is_err());
/// ```
pub fn element(z: i64) -> Result<&'static Element> {
    if !(0..=MAX_Z as i64).contains(&z) {
        return Err(Error::InvalidAtomicNumber { z });
    }
    Ok(&ELEMENTS[z as usize])
}

/// Get the [Element] for a chemical symbol
///
/// See [z_of] for how the symbol is interpreted.
pub fn element_by_symbol(symbol: &str) -> Result<&'static Element> {
    let z = z_of(symbol)?;
    Ok(&ELEMENTS[z as usize])
}

/// Chemical symbol for an atomic number
///
/// ```rust
/// # use nuctools_elements::symbol_of;
/// assert_eq!(symbol_of(0).unwrap(), "n");
/// assert_eq!(symbol_of(1).unwrap(), "H");
/// assert_eq!(symbol_of(92).unwrap(), "U");
/// ```
pub fn symbol_of(z: i64) -> Result<&'static str> {
    Ok(element(z)?.symbol)
}

/// Atomic number for a chemical symbol
///
/// Surrounding whitespace is ignored and the case does not matter, so `fe`,
/// `Fe`, and `FE` are all iron. The literal `XX` is accepted as the neutron.
///
/// ```rust
/// # use nuctools_elements::z_of;
/// assert_eq!(z_of("Fe").unwrap(), 26);
/// assert_eq!(z_of(" fE ").unwrap(), 26);
/// assert_eq!(z_of("XX").unwrap(), 0);
/// ```
///
/// Note that a lone `n` is nitrogen like any other case of `N`. Particle
/// labels are not chemical symbols.
pub fn z_of(symbol: &str) -> Result<u8> {
    let trimmed = symbol.trim();

    if trimmed.chars().count() > 2 {
        return Err(Error::SymbolTooLong {
            symbol: symbol.to_string(),
        });
    }

    // neutron exception is case sensitive and happens before normalisation
    if trimmed == "XX" {
        return Ok(0);
    }

    let normalised = normalise_symbol(trimmed);
    trace!("Looking up symbol \"{normalised}\"");

    // neutron 'n' is skipped, everything normalised has an upper case start
    ELEMENTS
        .iter()
        .skip(1)
        .find(|e| e.symbol == normalised)
        .map(|e| e.z)
        .ok_or_else(|| Error::UnknownSymbol {
            symbol: symbol.to_string(),
        })
}

/// Full element name for an atomic number
///
/// ```rust
/// # use nuctools_elements::name_of;
/// assert_eq!(name_of(0).unwrap(), "neutron");
/// assert_eq!(name_of(55).unwrap(), "Caesium");
/// ```
pub fn name_of(z: i64) -> Result<&'static str> {
    Ok(element(z)?.name)
}

/// Average atomic mass (u) for an atomic number
///
/// ```rust
/// # use nuctools_elements::mass_of;
/// assert_eq!(mass_of(6).unwrap(), 12.0107);
/// ```
pub fn mass_of(z: i64) -> Result<f64> {
    Ok(element(z)?.mass)
}

/// Find an element from either an atomic number or a symbol
///
/// Anything that parses as an integer is treated as an atomic number,
/// otherwise it is treated as a symbol.
///
/// ```rust
/// # use nuctools_elements::lookup;
/// assert_eq!(lookup("27").unwrap().symbol, "Co");
/// assert_eq!(lookup("co").unwrap().z, 27);
/// assert!(lookup("Cobalt").is_err());
/// ```
pub fn lookup(z_or_symbol: &str) -> Result<&'static Element> {
    match z_or_symbol.trim().parse::<i64>() {
        Ok(z) => element(z),
        Err(_) => element_by_symbol(z_or_symbol),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutron_entry() {
        assert_eq!(symbol_of(0), Ok("n"));
        assert_eq!(z_of("XX"), Ok(0));
        assert_eq!(z_of(" XX "), Ok(0));
        assert!(element(0).unwrap().is_neutron());
    }

    #[test]
    fn neutron_exception_is_case_sensitive() {
        assert_eq!(
            z_of("xx"),
            Err(Error::UnknownSymbol {
                symbol: "xx".to_string()
            })
        );
        assert!(z_of("Xx").is_err());
    }

    #[test]
    fn lone_n_is_nitrogen() {
        assert_eq!(z_of("n"), Ok(7));
        assert_eq!(z_of("N"), Ok(7));
    }

    #[test]
    fn out_of_range() {
        assert_eq!(symbol_of(-1), Err(Error::InvalidAtomicNumber { z: -1 }));
        assert_eq!(symbol_of(119), Err(Error::InvalidAtomicNumber { z: 119 }));
        assert!(name_of(i64::MAX).is_err());
        assert!(mass_of(i64::MIN).is_err());
    }

    #[test]
    fn bad_symbols() {
        assert_eq!(
            z_of("Fee"),
            Err(Error::SymbolTooLong {
                symbol: "Fee".to_string()
            })
        );
        assert!(matches!(z_of(""), Err(Error::UnknownSymbol { .. })));
        assert!(matches!(z_of("   "), Err(Error::UnknownSymbol { .. })));
        assert!(matches!(z_of("Qq"), Err(Error::UnknownSymbol { .. })));
    }

    #[test]
    fn lookup_either_form() {
        assert_eq!(lookup(" 92 ").unwrap().symbol, "U");
        assert_eq!(lookup("U").unwrap().z, 92);
        assert_eq!(lookup("-3"), Err(Error::InvalidAtomicNumber { z: -3 }));
    }
}
