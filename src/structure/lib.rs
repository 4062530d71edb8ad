//! Periodic structures, and the lattices they live in.
//!
//! Lattice matrices in this crate are **row-based**: each row of
//! [`Lattice::matrix`] is a cartesian lattice vector, and cartesian
//! coordinates are obtained from fractional coordinates as `frac * matrix`.

#[macro_use] extern crate log;
#[macro_use] extern crate itertools;
#[macro_use] extern crate failure;
#[macro_use] extern crate lazy_static;
#[cfg_attr(test, macro_use)] extern crate spgen_assert_close;
#[cfg(test)] extern crate ordered_float;

pub mod math;
pub mod supercell {
    pub use crate::algo::supercell::{diagonal, diagonal_with, SupercellToken};
}

mod core;
mod algo;
mod element;
mod errors;
mod util;

//---------------------------
// public reexports; API

pub use crate::math::{V3, M33};

pub use crate::core::lattice::Lattice;
pub use crate::core::cellpar::{CellParams, Orientation, ANGLE_EPS, MIN_UNIT_VOLUME, ORTHOGONALITY_TOL};
pub use crate::core::coords::Coords;
pub use crate::core::structure::{Structure, Atom, AtomStructure};

pub use crate::element::{Element, MassTable, StandardMasses, Overrides};

pub use crate::errors::{GeometryError, ReplicationError, UnknownElement};
