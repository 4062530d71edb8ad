/* ************************************************************************ **
** This file is part of spgen, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! A flat, serializable form of a generated cell, for use by other tools.
//!
//! The field names follow the conventions of ASE's `Atoms` (`symbols`,
//! `positions`, `cell`, `pbc`, `masses`), plus the data needed to recover
//! how the cell was generated.

use crate::{FailResult, FailOk};

use spgen_structure::{V3, Lattice, Coords, Structure, Atom};
use spgen_spacegroup::{Cell, SpaceGroupId};

use std::io::{Read, Write};

#[derive(Debug, Clone, PartialEq)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CellRecord {
    /// One per atom.
    pub symbols: Vec<String>,
    /// One per atom.
    pub masses: Vec<f64>,
    /// Cartesian positions, one per atom.
    pub positions: Vec<V3>,
    /// Lattice vectors as rows.
    pub cell: [V3; 3],
    #[serde(default = "defaults::pbc")]
    pub pbc: [bool; 3],
    pub spacegroup: SpaceGroupRecord,
    /// Basis index of each unit cell site.
    pub kinds: Vec<usize>,
    /// Fractional unit cell sites, parallel to `kinds`.
    pub scaled_positions: Vec<V3>,
    /// Number of unit cell images along each lattice vector.
    #[serde(default = "defaults::periods")]
    pub periods: [u32; 3],
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[derive(Serialize, Deserialize)]
pub struct SpaceGroupRecord {
    pub number: u32,
    pub setting: u32,
}

mod defaults {
    pub fn pbc() -> [bool; 3] { [true; 3] }
    pub fn periods() -> [u32; 3] { [1; 3] }
}

impl CellRecord {
    pub fn from_cell(cell: &Cell) -> Self {
        let SpaceGroupId { number, setting } = cell.spacegroup();
        CellRecord {
            symbols: cell.symbols().into_iter().map(|s| s.to_string()).collect(),
            masses: cell.masses(),
            positions: cell.positions(),
            cell: *cell.lattice().vectors(),
            pbc: [true; 3],
            spacegroup: SpaceGroupRecord { number, setting },
            kinds: cell.kinds().to_vec(),
            scaled_positions: cell.sites().to_vec(),
            periods: cell.periods(),
        }
    }

    /// Validate the record and rebuild the cell it describes.
    pub fn into_cell(self) -> FailResult<Cell> {
        let CellRecord {
            symbols, masses, positions, cell, pbc,
            spacegroup: SpaceGroupRecord { number, setting },
            kinds, scaled_positions, periods,
        } = self;

        if pbc != [true; 3] {
            bail!("only fully periodic cells are supported (pbc: {:?})", pbc);
        }
        if symbols.len() != positions.len() || masses.len() != positions.len() {
            bail!(
                "record has {} positions but {} symbols and {} masses",
                positions.len(), symbols.len(), masses.len(),
            );
        }

        let lattice = Lattice::from_vectors(&cell);
        let volume = lattice.volume();
        if !(volume.is_finite() && volume.abs() > 0.0) {
            bail!("cell vectors {:?} are degenerate", cell);
        }

        let atoms = zip_atoms(symbols, masses);
        let structure = Structure::new(lattice, Coords::Carts(positions), atoms);
        let cell = Cell::from_parts(
            structure,
            SpaceGroupId::new(number, setting),
            kinds,
            scaled_positions,
            periods,
        )?;
        Ok(cell)
    }
}

fn zip_atoms(symbols: Vec<String>, masses: Vec<f64>) -> Vec<Atom> {
    symbols.into_iter().zip(masses)
        .map(|(symbol, mass)| Atom { symbol, mass })
        .collect()
}

pub fn write_json(mut w: impl Write, cell: &Cell) -> FailResult<()>
{ _write_json(&mut w, cell) }

// Monomorphized to ensure serde_json code is generated in this crate
fn _write_json(w: &mut dyn Write, cell: &Cell) -> FailResult<()>
{FailOk({
    let record = CellRecord::from_cell(cell);
    serde_json::to_writer_pretty(&mut *w, &record)?;
    writeln!(w)?;
    w.flush()?;
})}

pub fn read_json(mut r: impl Read) -> FailResult<Cell>
{ _read_json(&mut r) }

// Monomorphized to ensure serde_json code is generated in this crate
fn _read_json(r: &mut dyn Read) -> FailResult<Cell>
{
    let record: CellRecord = serde_json::from_reader(r)?;
    trace!("read cell record with {} atoms", record.positions.len());
    record.into_cell()
}
