use crate::Lattice;
use crate::math::V3;

/// Wrapper type for coordinates used as input to some APIs.
///
/// This allows a function to support either cartesian coordinates,
/// or fractional coordinates with respect to some lattice.
#[derive(Debug, Clone, PartialEq)]
pub enum Coords {
    Carts(Vec<V3>),
    Fracs(Vec<V3>),
}

impl Coords {
    pub fn len(&self) -> usize
    { self.as_slice().len() }

    pub fn is_empty(&self) -> bool
    { self.as_slice().is_empty() }

    fn as_slice(&self) -> &[V3]
    { match *self {
        Coords::Carts(ref c) => c,
        Coords::Fracs(ref c) => c,
    }}
}

// conversions
impl Coords {
    pub fn into_carts(self, lattice: &Lattice) -> Vec<V3>
    { match self {
        Coords::Carts(c) => c,
        Coords::Fracs(c) => crate::util::dot_n3_33(&c, lattice.matrix()),
    }}

    pub fn to_carts(&self, lattice: &Lattice) -> Vec<V3>
    { match *self {
        Coords::Carts(ref c) => c.clone(),
        Coords::Fracs(ref c) => crate::util::dot_n3_33(c, lattice.matrix()),
    }}

    pub fn to_fracs(&self, lattice: &Lattice) -> Vec<V3>
    { match *self {
        Coords::Carts(ref c) => crate::util::dot_n3_33(c, lattice.inverse_matrix()),
        Coords::Fracs(ref c) => c.clone(),
    }}
}
