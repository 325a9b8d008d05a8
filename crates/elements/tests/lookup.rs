//! Integration tests for the element table lookups

use nuctools_elements::{elements, lookup, symbol_of, z_of, Element, Error};
use rstest::{fixture, rstest};

#[fixture]
fn table() -> &'static [Element] {
    elements()
}

#[rstest]
#[case(0, "n")]
#[case(1, "H")]
#[case(26, "Fe")]
#[case(27, "Co")]
#[case(53, "I")]
#[case(92, "U")]
#[case(94, "Pu")]
#[case(118, "Og")]
fn symbol_for_atomic_number(#[case] z: i64, #[case] symbol: &str) {
    assert_eq!(symbol_of(z).unwrap(), symbol);
}

#[rstest]
#[case(-1)]
#[case(119)]
#[case(1000)]
fn invalid_atomic_number(#[case] z: i64) {
    assert_eq!(symbol_of(z), Err(Error::InvalidAtomicNumber { z }));
}

#[rstest]
fn case_insensitive_symbols(table: &'static [Element]) {
    // skip the neutron, 'n' is not a chemical symbol
    for element in table.iter().skip(1) {
        let s = element.symbol;
        let z = z_of(s).unwrap();
        assert_eq!(z, element.z);
        assert_eq!(z_of(&s.to_lowercase()).unwrap(), z);
        assert_eq!(z_of(&s.to_uppercase()).unwrap(), z);
    }
}

#[rstest]
fn symbol_round_trip(table: &'static [Element]) {
    for element in table.iter().skip(1) {
        let z = z_of(element.symbol).unwrap();
        assert_eq!(symbol_of(z as i64).unwrap(), element.symbol);
    }
}

#[rstest]
#[case("Fe", 26)]
#[case("fe", 26)]
#[case("FE", 26)]
#[case(" Fe ", 26)]
#[case("XX", 0)]
#[case("u", 92)]
fn atomic_number_for_symbol(#[case] symbol: &str, #[case] z: u8) {
    assert_eq!(z_of(symbol).unwrap(), z);
}

#[test]
fn element_from_str() {
    let element: Element = "Au".parse().unwrap();
    assert_eq!(element.z, 79);
    assert_eq!(element.name, "Gold");

    let element: Element = "79".parse().unwrap();
    assert_eq!(element.symbol, "Au");

    assert!("Gold".parse::<Element>().is_err());
}

#[test]
fn serialise_element() {
    let element = lookup("He").unwrap();
    let json = serde_json::to_string(element).unwrap();
    assert_eq!(
        json,
        r#"{"z":2,"symbol":"He","name":"Helium","mass":4.002602}"#
    );
}
