//! Common string formatting shared by the nuctools crates
//!
//! These are left public for convenience.
//!
//! For example, normalising the case of element symbols or tidying up the
//! separators people put into nuclide names are useful everywhere.

// Alias for the format! macro out of laziness
pub use std::format as f;

/// Characters commonly used to separate parts of a nuclide name
///
/// e.g. `Co-60m`, `Co 60m`, `Co_60m`
pub const SEPARATORS: [char; 3] = [' ', '-', '_'];

/// Formats an element symbol as upper case followed by lower case
///
/// Everything after the first character is forced to lower case so that any
/// mix of cases ends up identical.
///
/// ```rust
/// # use nuctools_format::normalise_symbol;
/// assert_eq!(normalise_symbol("fe"), "Fe");
/// assert_eq!(normalise_symbol("FE"), "Fe");
/// assert_eq!(normalise_symbol("u"), "U");
/// ```
pub fn normalise_symbol(s: &str) -> String {
    let mut c = s.chars();
    match c.next() {
        Some(f) => f.to_uppercase().collect::<String>() + &c.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Removes every separator character from a string
///
/// Anything in [SEPARATORS] is dropped, wherever it appears.
///
/// ```rust
/// # use nuctools_format::strip_separators;
/// assert_eq!(strip_separators("Co-60 m"), "Co60m");
/// assert_eq!(strip_separators("_U_nat_"), "Unat");
/// ```
pub fn strip_separators(s: &str) -> String {
    s.chars().filter(|c| !SEPARATORS.contains(c)).collect()
}

/// Creates a centred banner for command line tools
///
/// ```rust
/// # use nuctools_format::banner;
/// assert_eq!(banner("abc", 7), "-------\n  abc  \n-------");
/// ```
pub fn banner(title: &str, width: usize) -> String {
    let mut s = f!("{:-<1$}\n", "", width);
    s += &f!("{:^1$}\n", title, width);
    s += &f!("{:-<1$}", "", width);
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_strings() {
        assert_eq!(normalise_symbol(""), "");
        assert_eq!(strip_separators(""), "");
    }

    #[test]
    fn symbol_case() {
        assert_eq!(normalise_symbol("co"), "Co");
        assert_eq!(normalise_symbol("cO"), "Co");
        assert_eq!(normalise_symbol("Co"), "Co");
        assert_eq!(normalise_symbol("XX"), "Xx");
    }

    #[test]
    fn only_separators() {
        assert_eq!(strip_separators(" -_ _- "), "");
        assert_eq!(strip_separators("241Pu"), "241Pu");
    }
}
