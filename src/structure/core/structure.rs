use crate::{Lattice, Coords};
use crate::math::V3;

/// Pairs [`Coords`] together with their [`Lattice`], and per-atom metadata.
///
/// [`Coords`]: enum.Coords.html
/// [`Lattice`]: struct.Lattice.html
#[derive(Debug, Clone, PartialEq)]
pub struct Structure<M = ()> {
    pub(crate) lattice: Lattice,
    pub(crate) coords: Coords,
    pub(crate) meta: Vec<M>,
}

/// The species of an atom in a generated cell.
///
/// The mass is whatever the caller's mass table said at the time the
/// cell was built; it is not re-derived from the symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub symbol: String,
    pub mass: f64,
}

/// A Structure whose metadata is a symbol and mass per atom.
pub type AtomStructure = Structure<Atom>;

impl<M> Structure<M> {
    /// # Panics
    ///
    /// Panics if the number of metadata items does not match the coords.
    pub fn new<Ms>(lattice: Lattice, coords: Coords, meta: Ms) -> Self
    where Ms: IntoIterator<Item=M>,
    {
        let meta: Vec<_> = meta.into_iter().collect();
        assert_eq!(coords.len(), meta.len());
        Self { lattice, coords, meta }
    }

    pub fn num_atoms(&self) -> usize { self.coords.len() }
    pub fn lattice(&self) -> &Lattice { &self.lattice }
    pub fn coords(&self) -> &Coords { &self.coords }
    pub fn metadata(&self) -> &[M] { &self.meta }

    pub fn to_carts(&self) -> Vec<V3> { self.coords.to_carts(&self.lattice) }
    pub fn to_fracs(&self) -> Vec<V3> { self.coords.to_fracs(&self.lattice) }
}
