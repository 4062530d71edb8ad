/* ************************************************************************ **
** This file is part of spgen, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::UnknownElement;

use std::collections::HashMap;
use std::fmt;

/// Represents a specific atomic number.
///
/// Only elements up to `MAX_ATOMIC_NUMBER` are supported.
/// This limitation enables methods to return `&'static str`.
#[derive(Copy, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct Element(u16);

pub const MAX_ATOMIC_NUMBER: u32 = 112;

impl Element {
    fn is_valid_number(n: u32) -> bool
    { 1 <= n && n <= MAX_ATOMIC_NUMBER }

    /// Exact, case-sensitive lookup by chemical symbol.
    pub fn from_symbol(s: &str) -> Result<Self, UnknownElement>
    {
        let &n = SYMBOL_TO_NUMBER.get(s).ok_or_else(|| UnknownElement(s.to_string()))?;
        debug_assert!(Self::is_valid_number(n.into()));
        Ok(Element(n))
    }

    pub fn atomic_number(&self) -> u32
    { self.0.into() }

    pub fn symbol(&self) -> &'static str
    { self.row().1 }

    /// Standard atomic weight in amu.
    ///
    /// For elements with no stable isotope, this is the mass of the
    /// longest-lived known isotope.
    pub fn mass(&self) -> f64
    { self.row().2 }

    fn row(&self) -> &'static ElementRow
    { &ELEMENTS[usize::from(self.0) - 1] }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { fmt::Display::fmt(self.symbol(), f) }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { fmt::Debug::fmt(self.symbol(), f) }
}

//---------------------------------------------------------------------

/// Source of per-symbol atomic masses.
pub trait MassTable {
    fn mass_of(&self, symbol: &str) -> Option<f64>;

    fn require_mass(&self, symbol: &str) -> Result<f64, UnknownElement>
    { self.mass_of(symbol).ok_or_else(|| UnknownElement(symbol.to_string())) }
}

/// The standard atomic weights of the periodic table.
#[derive(Debug, Copy, Clone, Default)]
pub struct StandardMasses;

impl MassTable for StandardMasses {
    fn mass_of(&self, symbol: &str) -> Option<f64>
    { Element::from_symbol(symbol).ok().map(|e| e.mass()) }
}

impl MassTable for HashMap<String, f64> {
    fn mass_of(&self, symbol: &str) -> Option<f64>
    { self.get(symbol).cloned() }
}

impl<'a, T: MassTable + ?Sized> MassTable for &'a T {
    fn mass_of(&self, symbol: &str) -> Option<f64>
    { (**self).mass_of(symbol) }
}

/// Consults `overrides` first, then falls back to `base`.
///
/// Overrides may name symbols that `base` does not know about,
/// which is how isotopes or pseudo-species get a mass.
#[derive(Debug, Clone)]
pub struct Overrides<'a, T: ?Sized> {
    pub overrides: &'a HashMap<String, f64>,
    pub base: &'a T,
}

impl<'a, T: MassTable + ?Sized> MassTable for Overrides<'a, T> {
    fn mass_of(&self, symbol: &str) -> Option<f64>
    {
        self.overrides.get(symbol).cloned()
            .or_else(|| self.base.mass_of(symbol))
    }
}

//---------------------------------------------------------------------

type ElementRow = (u16, &'static str, f64);

// (atomic number, symbol, standard atomic weight)
const ELEMENTS: &'static [ElementRow] = &[
    (001, "H",  1.008),
    (002, "He", 4.002602),
    (003, "Li", 6.94),
    (004, "Be", 9.0121831),
    (005, "B",  10.81),
    (006, "C",  12.011),
    (007, "N",  14.007),
    (008, "O",  15.999),
    (009, "F",  18.998403163),
    (010, "Ne", 20.1797),
    (011, "Na", 22.98976928),
    (012, "Mg", 24.305),
    (013, "Al", 26.9815385),
    (014, "Si", 28.085),
    (015, "P",  30.973761998),
    (016, "S",  32.06),
    (017, "Cl", 35.45),
    (018, "Ar", 39.948),
    (019, "K",  39.0983),
    (020, "Ca", 40.078),
    (021, "Sc", 44.955908),
    (022, "Ti", 47.867),
    (023, "V",  50.9415),
    (024, "Cr", 51.9961),
    (025, "Mn", 54.938044),
    (026, "Fe", 55.845),
    (027, "Co", 58.933194),
    (028, "Ni", 58.6934),
    (029, "Cu", 63.546),
    (030, "Zn", 65.38),
    (031, "Ga", 69.723),
    (032, "Ge", 72.630),
    (033, "As", 74.921595),
    (034, "Se", 78.971),
    (035, "Br", 79.904),
    (036, "Kr", 83.798),
    (037, "Rb", 85.4678),
    (038, "Sr", 87.62),
    (039, "Y",  88.90584),
    (040, "Zr", 91.224),
    (041, "Nb", 92.90637),
    (042, "Mo", 95.95),
    (043, "Tc", 97.90721),
    (044, "Ru", 101.07),
    (045, "Rh", 102.90550),
    (046, "Pd", 106.42),
    (047, "Ag", 107.8682),
    (048, "Cd", 112.414),
    (049, "In", 114.818),
    (050, "Sn", 118.710),
    (051, "Sb", 121.760),
    (052, "Te", 127.60),
    (053, "I",  126.90447),
    (054, "Xe", 131.293),
    (055, "Cs", 132.90545196),
    (056, "Ba", 137.327),
    (057, "La", 138.90547),
    (058, "Ce", 140.116),
    (059, "Pr", 140.90766),
    (060, "Nd", 144.242),
    (061, "Pm", 144.91276),
    (062, "Sm", 150.36),
    (063, "Eu", 151.964),
    (064, "Gd", 157.25),
    (065, "Tb", 158.92535),
    (066, "Dy", 162.500),
    (067, "Ho", 164.93033),
    (068, "Er", 167.259),
    (069, "Tm", 168.93422),
    (070, "Yb", 173.054),
    (071, "Lu", 174.9668),
    (072, "Hf", 178.49),
    (073, "Ta", 180.94788),
    (074, "W",  183.84),
    (075, "Re", 186.207),
    (076, "Os", 190.23),
    (077, "Ir", 192.217),
    (078, "Pt", 195.084),
    (079, "Au", 196.966569),
    (080, "Hg", 200.592),
    (081, "Tl", 204.38),
    (082, "Pb", 207.2),
    (083, "Bi", 208.98040),
    (084, "Po", 208.98243),
    (085, "At", 209.98715),
    (086, "Rn", 222.01758),
    (087, "Fr", 223.01974),
    (088, "Ra", 226.02541),
    (089, "Ac", 227.02775),
    (090, "Th", 232.0377),
    (091, "Pa", 231.03588),
    (092, "U",  238.02891),
    (093, "Np", 237.04817),
    (094, "Pu", 244.06421),
    (095, "Am", 243.06138),
    (096, "Cm", 247.07035),
    (097, "Bk", 247.07031),
    (098, "Cf", 251.07959),
    (099, "Es", 252.0830),
    (100, "Fm", 257.09511),
    (101, "Md", 258.09843),
    (102, "No", 259.1010),
    (103, "Lr", 262.110),
    (104, "Rf", 267.122),
    (105, "Db", 268.126),
    (106, "Sg", 271.134),
    (107, "Bh", 270.133),
    (108, "Hs", 269.1338),
    (109, "Mt", 278.156),
    (110, "Ds", 281.165),
    (111, "Rg", 281.166),
    (112, "Cn", 285.177),
];

lazy_static!{
    static ref SYMBOL_TO_NUMBER: HashMap<&'static str, u16> =
    {
        ELEMENTS.iter()
            .map(|&(num, sym, _)| (sym, num))
            .collect()
    };
}
