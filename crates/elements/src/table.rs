//! Static periodic table data
//!
//! Indexed by atomic number, with the free neutron taking Z = 0 by
//! convention. Masses are the standard (average) atomic masses in u, or the
//! mass number of the longest-lived isotope for elements with no stable
//! isotopes.

use crate::element::Element;

/// Highest atomic number in the table (oganesson)
pub const MAX_Z: u8 = 118;

pub(crate) static ELEMENTS: [Element; MAX_Z as usize + 1] = [
    Element::new(0, "n", "neutron", 1.008664),
    Element::new(1, "H", "Hydrogen", 1.007),
    Element::new(2, "He", "Helium", 4.002602),
    Element::new(3, "Li", "Lithium", 6.941),
    Element::new(4, "Be", "Beryllium", 9.012182),
    Element::new(5, "B", "Boron", 10.811),
    Element::new(6, "C", "Carbon", 12.0107),
    Element::new(7, "N", "Nitrogen", 14.0067),
    Element::new(8, "O", "Oxygen", 15.9994),
    Element::new(9, "F", "Fluorine", 18.9984032),
    Element::new(10, "Ne", "Neon", 20.1797),
    Element::new(11, "Na", "Sodium", 22.98976928),
    Element::new(12, "Mg", "Magnesium", 24.305),
    Element::new(13, "Al", "Aluminium", 26.9815386),
    Element::new(14, "Si", "Silicon", 28.0855),
    Element::new(15, "P", "Phosphorus", 30.973762),
    Element::new(16, "S", "Sulfur", 32.065),
    Element::new(17, "Cl", "Chlorine", 35.453),
    Element::new(18, "Ar", "Argon", 39.948),
    Element::new(19, "K", "Potassium", 39.0983),
    Element::new(20, "Ca", "Calcium", 40.078),
    Element::new(21, "Sc", "Scandium", 44.955912),
    Element::new(22, "Ti", "Titanium", 47.867),
    Element::new(23, "V", "Vanadium", 50.9415),
    Element::new(24, "Cr", "Chromium", 51.9961),
    Element::new(25, "Mn", "Manganese", 54.938045),
    Element::new(26, "Fe", "Iron", 55.845),
    Element::new(27, "Co", "Cobalt", 58.933195),
    Element::new(28, "Ni", "Nickel", 58.6934),
    Element::new(29, "Cu", "Copper", 63.546),
    Element::new(30, "Zn", "Zinc", 65.38),
    Element::new(31, "Ga", "Gallium", 69.723),
    Element::new(32, "Ge", "Germanium", 72.63),
    Element::new(33, "As", "Arsenic", 74.9216),
    Element::new(34, "Se", "Selenium", 78.96),
    Element::new(35, "Br", "Bromine", 79.904),
    Element::new(36, "Kr", "Krypton", 83.798),
    Element::new(37, "Rb", "Rubidium", 85.4678),
    Element::new(38, "Sr", "Strontium", 87.62),
    Element::new(39, "Y", "Yttrium", 88.90585),
    Element::new(40, "Zr", "Zirconium", 91.224),
    Element::new(41, "Nb", "Niobium", 92.90638),
    Element::new(42, "Mo", "Molybdenum", 95.96),
    Element::new(43, "Tc", "Technetium", 98.0),
    Element::new(44, "Ru", "Ruthenium", 101.07),
    Element::new(45, "Rh", "Rhodium", 102.9055),
    Element::new(46, "Pd", "Palladium", 106.42),
    Element::new(47, "Ag", "Silver", 107.8682),
    Element::new(48, "Cd", "Cadmium", 112.411),
    Element::new(49, "In", "Indium", 114.818),
    Element::new(50, "Sn", "Tin", 118.71),
    Element::new(51, "Sb", "Antimony", 121.76),
    Element::new(52, "Te", "Tellurium", 127.6),
    Element::new(53, "I", "Iodine", 126.90447),
    Element::new(54, "Xe", "Xenon", 131.293),
    Element::new(55, "Cs", "Caesium", 132.9054519),
    Element::new(56, "Ba", "Barium", 137.327),
    Element::new(57, "La", "Lanthanum", 138.90547),
    Element::new(58, "Ce", "Cerium", 140.116),
    Element::new(59, "Pr", "Praseodymium", 140.90765),
    Element::new(60, "Nd", "Neodymium", 144.242),
    Element::new(61, "Pm", "Promethium", 145.0),
    Element::new(62, "Sm", "Samarium", 150.36),
    Element::new(63, "Eu", "Europium", 151.964),
    Element::new(64, "Gd", "Gadolinium", 157.25),
    Element::new(65, "Tb", "Terbium", 158.92535),
    Element::new(66, "Dy", "Dysprosium", 162.5),
    Element::new(67, "Ho", "Holmium", 164.93032),
    Element::new(68, "Er", "Erbium", 167.259),
    Element::new(69, "Tm", "Thulium", 168.93421),
    Element::new(70, "Yb", "Ytterbium", 173.054),
    Element::new(71, "Lu", "Lutetium", 174.9668),
    Element::new(72, "Hf", "Hafnium", 178.49),
    Element::new(73, "Ta", "Tantalum", 180.94788),
    Element::new(74, "W", "Tungsten", 183.84),
    Element::new(75, "Re", "Rhenium", 186.207),
    Element::new(76, "Os", "Osmium", 190.23),
    Element::new(77, "Ir", "Iridium", 192.217),
    Element::new(78, "Pt", "Platinum", 195.084),
    Element::new(79, "Au", "Gold", 196.966569),
    Element::new(80, "Hg", "Mercury", 200.59),
    Element::new(81, "Tl", "Thallium", 204.3833),
    Element::new(82, "Pb", "Lead", 207.2),
    Element::new(83, "Bi", "Bismuth", 208.9804),
    Element::new(84, "Po", "Polonium", 209.0),
    Element::new(85, "At", "Astatine", 210.0),
    Element::new(86, "Rn", "Radon", 222.0),
    Element::new(87, "Fr", "Francium", 223.0),
    Element::new(88, "Ra", "Radium", 226.0),
    Element::new(89, "Ac", "Actinium", 227.0),
    Element::new(90, "Th", "Thorium", 232.03806),
    Element::new(91, "Pa", "Protactinium", 231.03588),
    Element::new(92, "U", "Uranium", 238.02891),
    Element::new(93, "Np", "Neptunium", 237.0),
    Element::new(94, "Pu", "Plutonium", 244.0),
    Element::new(95, "Am", "Americium", 243.0),
    Element::new(96, "Cm", "Curium", 247.0),
    Element::new(97, "Bk", "Berkelium", 247.0),
    Element::new(98, "Cf", "Californium", 251.0),
    Element::new(99, "Es", "Einsteinium", 252.0),
    Element::new(100, "Fm", "Fermium", 257.0),
    Element::new(101, "Md", "Mendelevium", 258.0),
    Element::new(102, "No", "Nobelium", 259.0),
    Element::new(103, "Lr", "Lawrencium", 266.0),
    Element::new(104, "Rf", "Rutherfordium", 267.0),
    Element::new(105, "Db", "Dubnium", 268.0),
    Element::new(106, "Sg", "Seaborgium", 269.0),
    Element::new(107, "Bh", "Bohrium", 270.0),
    Element::new(108, "Hs", "Hassium", 277.0),
    Element::new(109, "Mt", "Meitnerium", 278.0),
    Element::new(110, "Ds", "Darmstadtium", 281.0),
    Element::new(111, "Rg", "Roentgenium", 282.0),
    Element::new(112, "Cn", "Copernicium", 285.0),
    Element::new(113, "Nh", "Nihonium", 286.0),
    Element::new(114, "Fl", "Flerovium", 289.0),
    Element::new(115, "Mc", "Moscovium", 290.0),
    Element::new(116, "Lv", "Livermorium", 293.0),
    Element::new(117, "Ts", "Tennessine", 294.0),
    Element::new(118, "Og", "Oganesson", 294.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexed_by_atomic_number() {
        for (i, element) in ELEMENTS.iter().enumerate() {
            assert_eq!(element.z as usize, i);
        }
    }

    #[test]
    fn symbol_formatting() {
        // neutron is the only lower case symbol
        for element in ELEMENTS.iter().skip(1) {
            let mut c = element.symbol.chars();
            assert!(c.next().unwrap().is_ascii_uppercase());
            assert!(c.all(|c| c.is_ascii_lowercase()));
            assert!(element.symbol.len() <= 2);
        }
    }

    #[test]
    fn symbols_are_unique() {
        let mut symbols = ELEMENTS.iter().map(|e| e.symbol).collect::<Vec<&str>>();
        symbols.sort();
        symbols.dedup();
        assert_eq!(symbols.len(), ELEMENTS.len());
    }
}
