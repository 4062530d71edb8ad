//! Generation of crystal unit cells from space group data.
//!
//! A [`SpaceGroupEntry`] is expanded into its full list of [`FracOp`]s,
//! which are applied to a basis of fractional positions to produce the
//! symmetrically equivalent sites of the unit cell.  Together with a
//! lattice built from cell parameters, these make up a [`Cell`].
//!
//! Nothing in this crate performs I/O; symmetry tables and mass tables are
//! always passed in explicitly.

#[macro_use] extern crate log;
#[macro_use] extern crate itertools;
#[macro_use] extern crate failure;
#[cfg(test)] #[macro_use] extern crate spgen_assert_close;

mod errors;
mod table;
mod symmops;
mod sites;
mod cell;

#[cfg(test)]
mod test_data;

pub use crate::errors::{Error, Result};
pub use crate::table::{SpaceGroupId, SpaceGroupEntry, SymmetryTable};
pub use crate::symmops::FracOp;
pub use crate::sites::{equivalent_sites, EquivalentSites, OnDuplicates, SYMPREC};
pub use crate::cell::{Cell, Crystal, build_unit_cell, build_supercell};
