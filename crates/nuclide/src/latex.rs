//! LaTeX markup for nuclides
//!
//! The mass number and isomer label are a superscript before the symbol, with
//! the atomic number optionally as a subscript beneath it. Only the scripts are
//! in math mode so the markup drops straight into plot labels and documents.
//!
//! ```text
//!   $^{60m}$Co
//!   $^{60m}_{27}$Co
//! ```

// nuctools modules
use nuctools_elements::symbol_of;
use nuctools_format::f;

// internal modules
use crate::error::Result;
use crate::nuclide::{IsomerState, MassNumber};
use crate::parser::parse_nuclide;

/// Convert a plaintext nuclide name to LaTeX markup
///
/// See [parse_nuclide](crate::parse_nuclide) for the names accepted. The
/// isomer label is kept exactly as it was written.
///
/// ```rust
/// # use nuctools_nuclide::nuclide_to_latex;
/// assert_eq!(nuclide_to_latex("Co-60m", false).unwrap(), "$^{60m}$Co");
/// assert_eq!(nuclide_to_latex("Co-60m", true).unwrap(), "$^{60m}_{27}$Co");
/// ```
///
/// Unlike ZZZAAAM identifiers, natural abundances are fine here.
///
/// ```rust
/// # use nuctools_nuclide::nuclide_to_latex;
/// assert_eq!(nuclide_to_latex("natU", false).unwrap(), "$^{nat}$U");
/// ```
pub fn nuclide_to_latex(text: &str, include_z: bool) -> Result<String> {
    parse_nuclide(text)?.latex(include_z)
}

/// LaTeX markup for a nuclide that is already split into parts
///
/// The excited state is written in the numbered `m<M>` form.
///
/// ```rust
/// # use nuctools_nuclide::{latex_form, IsomerState, MassNumber};
/// let latex = latex_form(43, MassNumber::Number(99), IsomerState::Excited(1));
/// assert_eq!(latex.unwrap(), "$^{99m1}$Tc");
///
/// let latex = latex_form(6, MassNumber::Natural, IsomerState::Ground);
/// assert_eq!(latex.unwrap(), "$^{nat}$C");
/// ```
pub fn latex_form(z: i64, mass: MassNumber, state: IsomerState) -> Result<String> {
    let symbol = symbol_of(z)?;
    Ok(render_latex(
        &mass.to_string(),
        &state.to_string(),
        None,
        symbol,
    ))
}

pub(crate) fn render_latex(mass: &str, isomer: &str, z: Option<u8>, symbol: &str) -> String {
    match z {
        Some(z) => f!("$^{{{mass}{isomer}}}_{{{z}}}${symbol}"),
        None => f!("$^{{{mass}{isomer}}}${symbol}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn markup() {
        assert_eq!(render_latex("60", "m", None, "Co"), "$^{60m}$Co");
        assert_eq!(render_latex("60", "m", Some(27), "Co"), "$^{60m}_{27}$Co");
        assert_eq!(render_latex("", "", None, "Co"), "$^{}$Co");
    }

    #[test]
    fn particles() {
        assert_eq!(nuclide_to_latex("1n", true).unwrap(), "$^{1}_{0}$n");
        assert_eq!(nuclide_to_latex("2d", true).unwrap(), "$^{2}_{1}$d");
        assert_eq!(nuclide_to_latex("3-t", false).unwrap(), "$^{3}$t");
    }

    #[test]
    fn natural_with_z() {
        assert_eq!(nuclide_to_latex("U-nat", true).unwrap(), "$^{nat}_{92}$U");
    }

    #[test]
    fn element_only() {
        assert_eq!(nuclide_to_latex("Fe", false).unwrap(), "$^{}$Fe");
    }

    #[test]
    fn unknown_symbol_with_z() {
        // fine without the subscript, but Z has to be found otherwise
        assert_eq!(nuclide_to_latex("Qq-1", false).unwrap(), "$^{1}$Qq");
        assert!(matches!(
            nuclide_to_latex("Qq-1", true),
            Err(Error::Element(_))
        ));
    }

    #[test]
    fn invalid_parts() {
        assert!(latex_form(119, MassNumber::Number(1), IsomerState::Ground).is_err());
    }
}
