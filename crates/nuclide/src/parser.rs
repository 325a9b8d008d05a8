//! State machine for splitting plaintext nuclide names into parts
//!
//! Separators are removed first, then the name must follow one of two
//! orderings:
//!
//! - Mass first, e.g. `60mCo`, `241Pu`, `natU`
//! - Symbol first, e.g. `Co60m`, `Pu241`, `Unat`
//!
//! Each state consumes one part of the name and hands the remainder to the
//! next state. The ordering decides both which state comes next and which rule
//! a state applies.
//!
//! ```text
//!  MassFirst    Start -> Mass -> Isomer -> Symbol -> Done
//!               Start --(nat)-----------> Symbol -> Done
//!
//!  SymbolFirst  Start -> Symbol -> Mass -> Isomer -> Done
//!               Start -> Symbol --(nat)-----------> Done
//! ```

// nuctools modules
use nuctools_format::{f, strip_separators};

// internal modules
use crate::error::{Error, Result};
use crate::nuclide::{MassNumber, Nuclide};

// external crates
use log::{debug, trace};

// nom parser combinators
use nom::branch::alt;
use nom::bytes::complete::{tag, take_while};
use nom::character::complete::{digit0, satisfy};
use nom::combinator::{opt, recognize};
use nom::error::{Error as NomError, ErrorKind};
use nom::{Err, IResult};

/// Split a plaintext nuclide name into its parts
///
/// A huge variety of formats are supported, but they all follow these rules:
///
/// - Spaces, hyphens, and underscores are ignored anywhere
/// - Isomer labels immediately follow the mass number, and are either a single
///   lower case letter or end in a digit (`m`, `n`, `m1`, `m2`, ...)
/// - Mass numbers are non-negative integers or `nat` for natural abundance, in
///   which case there is no isomer label
/// - Lone lower case particles with a mass (`1n`, `2d`, `3t`) are accepted
///
/// ```rust
/// # use nuctools_nuclide::{parse_nuclide, MassNumber};
/// let nuclide = parse_nuclide("241Pu").unwrap();
/// assert_eq!(nuclide.symbol, "Pu");
/// assert_eq!(nuclide.mass, Some(MassNumber::Number(241)));
/// assert_eq!(nuclide.isomer, "");
///
/// let nuclide = parse_nuclide("Eu-152 m2").unwrap();
/// assert_eq!(nuclide.symbol, "Eu");
/// assert_eq!(nuclide.mass, Some(MassNumber::Number(152)));
/// assert_eq!(nuclide.isomer, "m2");
///
/// let nuclide = parse_nuclide("nat-U").unwrap();
/// assert_eq!(nuclide.symbol, "U");
/// assert_eq!(nuclide.mass, Some(MassNumber::Natural));
/// ```
///
/// Beyond an empty name or a mass number too large to store, no validation is
/// done here. Anything odd will produce a best-effort result, and it is left to
/// the symbol lookup or the encoder to reject it.
pub fn parse_nuclide(text: &str) -> Result<Nuclide> {
    let cleaned = strip_separators(text);

    if cleaned.is_empty() {
        return Err(Error::InvalidNuclideText {
            text: text.to_string(),
            reason: "nothing left after removing separators".to_string(),
        });
    }

    let order = Order::of(&cleaned);

    // symbol first names may have the natural tag anywhere
    let (cleaned, is_natural) = if order == Order::SymbolFirst && cleaned.contains("nat") {
        (cleaned.replace("nat", ""), true)
    } else {
        (cleaned, false)
    };

    let mut parts = Parts {
        natural: is_natural,
        ..Default::default()
    };

    debug!("Parsing \"{cleaned}\" as {order:?}");

    let mut state = State::Start(&cleaned);
    while state != State::Done {
        trace!("  {state:?}");
        state = step(state, order, &mut parts).map_err(|e| Error::InvalidNuclideText {
            text: text.to_string(),
            reason: e,
        })?;
    }

    parts.into_nuclide().map_err(|e| Error::InvalidNuclideText {
        text: text.to_string(),
        reason: e,
    })
}

/// Which part of the name comes first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Order {
    MassFirst,
    SymbolFirst,
}

impl Order {
    fn of(i: &str) -> Self {
        if natural(i).is_ok() || i.starts_with(|c: char| c.is_ascii_digit()) {
            Order::MassFirst
        } else {
            Order::SymbolFirst
        }
    }
}

/// Parser states, holding whatever input is still to be consumed
#[derive(Debug, PartialEq, Eq)]
enum State<'a> {
    Start(&'a str),
    Mass(&'a str),
    Isomer(&'a str),
    Symbol(&'a str),
    Done,
}

/// Parts collected while stepping through the states
#[derive(Debug, Default)]
struct Parts<'a> {
    symbol: String,
    digits: &'a str,
    natural: bool,
    isomer: String,
}

impl Parts<'_> {
    fn into_nuclide(mut self) -> core::result::Result<Nuclide, String> {
        // lower case particles end up as an isomer with no symbol, e.g. "1n"
        if self.symbol.is_empty() && !self.isomer.is_empty() {
            self.symbol = std::mem::take(&mut self.isomer);
        }

        let mass = if self.natural {
            Some(MassNumber::Natural)
        } else if self.digits.is_empty() {
            None
        } else {
            let a = self
                .digits
                .parse::<u32>()
                .map_err(|_| f!("mass number {} is too large", self.digits))?;
            Some(MassNumber::Number(a))
        };

        Ok(Nuclide {
            symbol: self.symbol,
            mass,
            isomer: self.isomer,
        })
    }
}

/// Apply the rule for the current state and decide the next
fn step<'a>(
    state: State<'a>,
    order: Order,
    parts: &mut Parts<'a>,
) -> core::result::Result<State<'a>, String> {
    let next = match (state, order) {
        (State::Start(i), Order::MassFirst) => match natural(i) {
            Ok((i, _)) => {
                parts.natural = true;
                State::Symbol(i)
            }
            Err(_) => State::Mass(i),
        },
        (State::Start(i), Order::SymbolFirst) => State::Symbol(i),

        (State::Mass(i), _) => {
            let (i, mass) = digits(i).map_err(failed)?;
            parts.digits = mass;
            State::Isomer(i)
        }

        (State::Isomer(i), Order::MassFirst) => {
            let (i, isomer) = trailing_isomer(i).map_err(failed)?;
            parts.isomer = isomer.unwrap_or_default().to_string();
            State::Symbol(i)
        }
        (State::Isomer(i), Order::SymbolFirst) => {
            parts.isomer = i.to_string();
            State::Done
        }

        (State::Symbol(i), Order::MassFirst) => {
            parts.symbol = i.chars().filter(|c| c.is_alphabetic()).collect();
            State::Done
        }
        (State::Symbol(i), Order::SymbolFirst) => {
            let (i, symbol) = letters(i).map_err(failed)?;
            parts.symbol = symbol.to_string();
            match parts.natural {
                true => State::Done,
                false => State::Mass(i),
            }
        }

        (State::Done, _) => State::Done,
    };
    Ok(next)
}

fn failed(e: Err<NomError<&str>>) -> String {
    f!("parser failed ({e})")
}

/// The natural abundance tag
fn natural(i: &str) -> IResult<&str, &str> {
    tag("nat")(i)
}

/// Run of ASCII digits, possibly empty
fn digits(i: &str) -> IResult<&str, &str> {
    digit0(i)
}

/// Run of alphabetic characters, possibly empty
fn letters(i: &str) -> IResult<&str, &str> {
    take_while(|c: char| c.is_alphabetic())(i)
}

/// Isomer label directly after a leading mass number
///
/// If there is another digit anywhere later in the name then the label ends
/// with the last of them. Otherwise it can only be a single lower case letter.
fn trailing_isomer(i: &str) -> IResult<&str, Option<&str>> {
    opt(alt((up_to_last_digit, single_lowercase)))(i)
}

/// Everything up to and including the last digit in the input
fn up_to_last_digit(i: &str) -> IResult<&str, &str> {
    match i.rfind(|c: char| c.is_ascii_digit()) {
        Some(idx) => Ok((&i[idx + 1..], &i[..=idx])),
        None => Err(Err::Error(NomError::new(i, ErrorKind::Digit))),
    }
}

/// One lower case letter
fn single_lowercase(i: &str) -> IResult<&str, &str> {
    recognize(satisfy(|c: char| c.is_alphabetic() && c.is_lowercase()))(i)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(text: &str) -> (String, Option<MassNumber>, String) {
        let n = parse_nuclide(text).unwrap();
        (n.symbol, n.mass, n.isomer)
    }

    fn number(a: u32) -> Option<MassNumber> {
        Some(MassNumber::Number(a))
    }

    #[test]
    fn ordering() {
        assert_eq!(Order::of("60Co"), Order::MassFirst);
        assert_eq!(Order::of("natU"), Order::MassFirst);
        assert_eq!(Order::of("Co60"), Order::SymbolFirst);
        assert_eq!(Order::of("Unat"), Order::SymbolFirst);
        assert_eq!(Order::of("Nat"), Order::SymbolFirst);
    }

    #[test]
    fn isomer_after_mass() {
        assert_eq!(up_to_last_digit("m1Co"), Ok(("Co", "m1")));
        assert_eq!(up_to_last_digit("m12Co"), Ok(("Co", "m12")));
        assert!(up_to_last_digit("mCo").is_err());
        assert_eq!(trailing_isomer("mCo"), Ok(("Co", Some("m"))));
        assert_eq!(trailing_isomer("Co"), Ok(("Co", None)));
        assert_eq!(trailing_isomer(""), Ok(("", None)));
    }

    #[test]
    fn mass_first() {
        assert_eq!(parts("241Pu"), ("Pu".into(), number(241), "".into()));
        assert_eq!(parts("60mCo"), ("Co".into(), number(60), "m".into()));
        assert_eq!(parts("60m1Co"), ("Co".into(), number(60), "m1".into()));
        assert_eq!(parts("60-m2-Co"), ("Co".into(), number(60), "m2".into()));
        assert_eq!(parts("0060Co"), ("Co".into(), number(60), "".into()));
    }

    #[test]
    fn mass_first_symbol_is_every_letter() {
        // non-alphabetic characters after the isomer are dropped
        assert_eq!(parts("60Co*"), ("Co".into(), number(60), "".into()));
        assert_eq!(parts("60m1C.o"), ("Co".into(), number(60), "m1".into()));
    }

    #[test]
    fn mass_first_lowercase_symbol() {
        // a lower case first letter is taken as the isomer
        assert_eq!(parts("60co"), ("o".into(), number(60), "c".into()));
    }

    #[test]
    fn mass_only() {
        assert_eq!(parts("60"), ("".into(), number(60), "".into()));
    }

    #[test]
    fn symbol_first() {
        assert_eq!(parts("Co60"), ("Co".into(), number(60), "".into()));
        assert_eq!(parts("Co-60m"), ("Co".into(), number(60), "m".into()));
        assert_eq!(parts("Co_60_m1"), ("Co".into(), number(60), "m1".into()));
        assert_eq!(parts("Tc99m"), ("Tc".into(), number(99), "m".into()));
        assert_eq!(parts("Co"), ("Co".into(), None, "".into()));
    }

    #[test]
    fn symbol_first_isomer_is_verbatim() {
        assert_eq!(parts("Hf178m2x"), ("Hf".into(), number(178), "m2x".into()));
        assert_eq!(parts("Co60*"), ("Co".into(), number(60), "*".into()));
    }

    #[test]
    fn natural_abundance() {
        let nat = Some(MassNumber::Natural);
        assert_eq!(parts("natU"), ("U".into(), nat, "".into()));
        assert_eq!(parts("nat-Fe"), ("Fe".into(), nat, "".into()));
        assert_eq!(parts("Unat"), ("U".into(), nat, "".into()));
        assert_eq!(parts("U-nat"), ("U".into(), nat, "".into()));
        assert_eq!(parts("C_nat"), ("C".into(), nat, "".into()));
    }

    #[test]
    fn particles() {
        assert_eq!(parts("1n"), ("n".into(), number(1), "".into()));
        assert_eq!(parts("1p"), ("p".into(), number(1), "".into()));
        assert_eq!(parts("2d"), ("d".into(), number(2), "".into()));
        assert_eq!(parts("3t"), ("t".into(), number(3), "".into()));
        assert_eq!(parts("n"), ("n".into(), None, "".into()));
    }

    #[test]
    fn bad_text() {
        assert!(matches!(
            parse_nuclide(""),
            Err(Error::InvalidNuclideText { .. })
        ));
        assert!(matches!(
            parse_nuclide(" - _ "),
            Err(Error::InvalidNuclideText { .. })
        ));
        assert!(matches!(
            parse_nuclide("99999999999Co"),
            Err(Error::InvalidNuclideText { .. })
        ));
    }
}
