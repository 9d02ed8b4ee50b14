use crate::core::models::element::{Element, ElementCategory};

const AM: ElementCategory = ElementCategory::AlkaliMetal;
const AE: ElementCategory = ElementCategory::AlkalineEarthMetal;
const TM: ElementCategory = ElementCategory::TransitionMetal;
const PT: ElementCategory = ElementCategory::PostTransitionMetal;
const MD: ElementCategory = ElementCategory::Metalloid;
const NM: ElementCategory = ElementCategory::ReactiveNonmetal;
const HA: ElementCategory = ElementCategory::Halogen;
const NG: ElementCategory = ElementCategory::NobleGas;
const LN: ElementCategory = ElementCategory::Lanthanide;
const AN: ElementCategory = ElementCategory::Actinide;
const UK: ElementCategory = ElementCategory::Unknown;

/// `(atomic number, symbol, name, group, period, category, atomic weight)`.
///
/// Group 0 marks the f-block, which has no group number. Weights of elements
/// without stable isotopes are the mass number of the longest-lived isotope.
type Row = (u8, &'static str, &'static str, u8, u8, ElementCategory, f64);

#[rustfmt::skip]
const ELEMENTS: [Row; 118] = [
    (1, "H", "Hydrogen", 1, 1, NM, 1.008),
    (2, "He", "Helium", 18, 1, NG, 4.0026),
    (3, "Li", "Lithium", 1, 2, AM, 6.94),
    (4, "Be", "Beryllium", 2, 2, AE, 9.0122),
    (5, "B", "Boron", 13, 2, MD, 10.81),
    (6, "C", "Carbon", 14, 2, NM, 12.011),
    (7, "N", "Nitrogen", 15, 2, NM, 14.007),
    (8, "O", "Oxygen", 16, 2, NM, 15.999),
    (9, "F", "Fluorine", 17, 2, HA, 18.998),
    (10, "Ne", "Neon", 18, 2, NG, 20.180),
    (11, "Na", "Sodium", 1, 3, AM, 22.990),
    (12, "Mg", "Magnesium", 2, 3, AE, 24.305),
    (13, "Al", "Aluminium", 13, 3, PT, 26.982),
    (14, "Si", "Silicon", 14, 3, MD, 28.085),
    (15, "P", "Phosphorus", 15, 3, NM, 30.974),
    (16, "S", "Sulfur", 16, 3, NM, 32.06),
    (17, "Cl", "Chlorine", 17, 3, HA, 35.45),
    (18, "Ar", "Argon", 18, 3, NG, 39.948),
    (19, "K", "Potassium", 1, 4, AM, 39.098),
    (20, "Ca", "Calcium", 2, 4, AE, 40.078),
    (21, "Sc", "Scandium", 3, 4, TM, 44.956),
    (22, "Ti", "Titanium", 4, 4, TM, 47.867),
    (23, "V", "Vanadium", 5, 4, TM, 50.942),
    (24, "Cr", "Chromium", 6, 4, TM, 51.996),
    (25, "Mn", "Manganese", 7, 4, TM, 54.938),
    (26, "Fe", "Iron", 8, 4, TM, 55.845),
    (27, "Co", "Cobalt", 9, 4, TM, 58.933),
    (28, "Ni", "Nickel", 10, 4, TM, 58.693),
    (29, "Cu", "Copper", 11, 4, TM, 63.546),
    (30, "Zn", "Zinc", 12, 4, TM, 65.38),
    (31, "Ga", "Gallium", 13, 4, PT, 69.723),
    (32, "Ge", "Germanium", 14, 4, MD, 72.630),
    (33, "As", "Arsenic", 15, 4, MD, 74.922),
    (34, "Se", "Selenium", 16, 4, NM, 78.971),
    (35, "Br", "Bromine", 17, 4, HA, 79.904),
    (36, "Kr", "Krypton", 18, 4, NG, 83.798),
    (37, "Rb", "Rubidium", 1, 5, AM, 85.468),
    (38, "Sr", "Strontium", 2, 5, AE, 87.62),
    (39, "Y", "Yttrium", 3, 5, TM, 88.906),
    (40, "Zr", "Zirconium", 4, 5, TM, 91.224),
    (41, "Nb", "Niobium", 5, 5, TM, 92.906),
    (42, "Mo", "Molybdenum", 6, 5, TM, 95.95),
    (43, "Tc", "Technetium", 7, 5, TM, 98.0),
    (44, "Ru", "Ruthenium", 8, 5, TM, 101.07),
    (45, "Rh", "Rhodium", 9, 5, TM, 102.91),
    (46, "Pd", "Palladium", 10, 5, TM, 106.42),
    (47, "Ag", "Silver", 11, 5, TM, 107.87),
    (48, "Cd", "Cadmium", 12, 5, TM, 112.41),
    (49, "In", "Indium", 13, 5, PT, 114.82),
    (50, "Sn", "Tin", 14, 5, PT, 118.71),
    (51, "Sb", "Antimony", 15, 5, MD, 121.76),
    (52, "Te", "Tellurium", 16, 5, MD, 127.60),
    (53, "I", "Iodine", 17, 5, HA, 126.90),
    (54, "Xe", "Xenon", 18, 5, NG, 131.29),
    (55, "Cs", "Caesium", 1, 6, AM, 132.91),
    (56, "Ba", "Barium", 2, 6, AE, 137.33),
    (57, "La", "Lanthanum", 3, 6, LN, 138.91),
    (58, "Ce", "Cerium", 0, 6, LN, 140.12),
    (59, "Pr", "Praseodymium", 0, 6, LN, 140.91),
    (60, "Nd", "Neodymium", 0, 6, LN, 144.24),
    (61, "Pm", "Promethium", 0, 6, LN, 145.0),
    (62, "Sm", "Samarium", 0, 6, LN, 150.36),
    (63, "Eu", "Europium", 0, 6, LN, 151.96),
    (64, "Gd", "Gadolinium", 0, 6, LN, 157.25),
    (65, "Tb", "Terbium", 0, 6, LN, 158.93),
    (66, "Dy", "Dysprosium", 0, 6, LN, 162.50),
    (67, "Ho", "Holmium", 0, 6, LN, 164.93),
    (68, "Er", "Erbium", 0, 6, LN, 167.26),
    (69, "Tm", "Thulium", 0, 6, LN, 168.93),
    (70, "Yb", "Ytterbium", 0, 6, LN, 173.05),
    (71, "Lu", "Lutetium", 0, 6, LN, 174.97),
    (72, "Hf", "Hafnium", 4, 6, TM, 178.49),
    (73, "Ta", "Tantalum", 5, 6, TM, 180.95),
    (74, "W", "Tungsten", 6, 6, TM, 183.84),
    (75, "Re", "Rhenium", 7, 6, TM, 186.21),
    (76, "Os", "Osmium", 8, 6, TM, 190.23),
    (77, "Ir", "Iridium", 9, 6, TM, 192.22),
    (78, "Pt", "Platinum", 10, 6, TM, 195.08),
    (79, "Au", "Gold", 11, 6, TM, 196.97),
    (80, "Hg", "Mercury", 12, 6, TM, 200.59),
    (81, "Tl", "Thallium", 13, 6, PT, 204.38),
    (82, "Pb", "Lead", 14, 6, PT, 207.2),
    (83, "Bi", "Bismuth", 15, 6, PT, 208.98),
    (84, "Po", "Polonium", 16, 6, PT, 209.0),
    (85, "At", "Astatine", 17, 6, HA, 210.0),
    (86, "Rn", "Radon", 18, 6, NG, 222.0),
    (87, "Fr", "Francium", 1, 7, AM, 223.0),
    (88, "Ra", "Radium", 2, 7, AE, 226.0),
    (89, "Ac", "Actinium", 3, 7, AN, 227.0),
    (90, "Th", "Thorium", 0, 7, AN, 232.04),
    (91, "Pa", "Protactinium", 0, 7, AN, 231.04),
    (92, "U", "Uranium", 0, 7, AN, 238.03),
    (93, "Np", "Neptunium", 0, 7, AN, 237.0),
    (94, "Pu", "Plutonium", 0, 7, AN, 244.0),
    (95, "Am", "Americium", 0, 7, AN, 243.0),
    (96, "Cm", "Curium", 0, 7, AN, 247.0),
    (97, "Bk", "Berkelium", 0, 7, AN, 247.0),
    (98, "Cf", "Californium", 0, 7, AN, 251.0),
    (99, "Es", "Einsteinium", 0, 7, AN, 252.0),
    (100, "Fm", "Fermium", 0, 7, AN, 257.0),
    (101, "Md", "Mendelevium", 0, 7, AN, 258.0),
    (102, "No", "Nobelium", 0, 7, AN, 259.0),
    (103, "Lr", "Lawrencium", 0, 7, AN, 266.0),
    (104, "Rf", "Rutherfordium", 4, 7, TM, 267.0),
    (105, "Db", "Dubnium", 5, 7, TM, 268.0),
    (106, "Sg", "Seaborgium", 6, 7, TM, 269.0),
    (107, "Bh", "Bohrium", 7, 7, TM, 270.0),
    (108, "Hs", "Hassium", 8, 7, TM, 277.0),
    (109, "Mt", "Meitnerium", 9, 7, UK, 278.0),
    (110, "Ds", "Darmstadtium", 10, 7, UK, 281.0),
    (111, "Rg", "Roentgenium", 11, 7, UK, 282.0),
    (112, "Cn", "Copernicium", 12, 7, TM, 285.0),
    (113, "Nh", "Nihonium", 13, 7, UK, 286.0),
    (114, "Fl", "Flerovium", 14, 7, PT, 289.0),
    (115, "Mc", "Moscovium", 15, 7, UK, 290.0),
    (116, "Lv", "Livermorium", 16, 7, UK, 293.0),
    (117, "Ts", "Tennessine", 17, 7, UK, 294.0),
    (118, "Og", "Oganesson", 18, 7, UK, 294.0),
];

pub(super) fn builtin_elements() -> Vec<Element> {
    ELEMENTS
        .iter()
        .map(
            |&(atomic_number, symbol, name, group, period, category, weight)| Element {
                atomic_number,
                symbol: symbol.to_string(),
                name: name.to_string(),
                group: (group != 0).then_some(group),
                period,
                category,
                atomic_weight: Some(weight),
            },
        )
        .collect()
}
