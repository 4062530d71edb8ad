/* ************************************************************************ **
** This file is part of spgen, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::{Error, Result, SpaceGroupId, SymmetryTable, OnDuplicates};

use spgen_structure::{V3, Lattice, Coords, Structure, Atom, AtomStructure};
use spgen_structure::{CellParams, Orientation, MassTable};
use spgen_structure::supercell;

use std::convert::TryFrom;

/// Everything needed to describe a crystal in terms of its symmetry.
#[derive(Debug, Clone, PartialEq)]
pub struct Crystal {
    pub spacegroup: SpaceGroupId,
    /// Fractional positions.  Each one's index in this list is its "kind".
    pub basis: Vec<V3>,
    /// Chemical symbol for each basis position.
    pub symbols: Vec<String>,
    pub cellpar: CellParams,
    pub orientation: Orientation,
    pub on_duplicates: OnDuplicates,
}

impl Crystal {
    /// A crystal in the default orientation, keeping the first kind
    /// to produce any site.
    pub fn new<S>(spacegroup: SpaceGroupId, basis: Vec<(S, V3)>, cellpar: CellParams) -> Self
    where S: Into<String>,
    {
        let (symbols, basis): (Vec<String>, Vec<V3>) = basis.into_iter().map(|(s, v)| (s.into(), v)).unzip();
        Crystal {
            spacegroup, basis, symbols, cellpar,
            orientation: Default::default(),
            on_duplicates: Default::default(),
        }
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self
    { self.orientation = orientation; self }

    pub fn with_on_duplicates(mut self, on_duplicates: OnDuplicates) -> Self
    { self.on_duplicates = on_duplicates; self }
}

/// A generated unit cell or supercell.
///
/// Atoms are stored in cartesian coordinates.  Atom `i` comes from unit cell
/// site `i % num_sites`; in a supercell, each whole copy of the unit cell
/// appears consecutively.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    structure: AtomStructure,
    spacegroup: SpaceGroupId,
    kinds: Vec<usize>,
    sites: Vec<V3>,
    periods: [u32; 3],
}

impl Cell {
    /// Reassemble a cell from its components, such as after deserialization.
    ///
    /// `kinds` and `sites` describe the unit cell, and `structure` must
    /// contain one copy of the unit cell's atoms per image.
    pub fn from_parts(
        structure: AtomStructure,
        spacegroup: SpaceGroupId,
        kinds: Vec<usize>,
        sites: Vec<V3>,
        periods: [u32; 3],
    ) -> Result<Self> {
        let inconsistent = |msg: String| Err(Error::StructuralInconsistency(msg));

        if kinds.len() != sites.len() {
            return inconsistent(format!("{} kinds for {} sites", kinds.len(), sites.len()));
        }
        if periods.iter().any(|&n| n == 0) {
            return inconsistent(format!("supercell periods {:?} must be positive", periods));
        }
        let expected_atoms = num_cells(periods).and_then(|n| n.checked_mul(sites.len()));
        if expected_atoms != Some(structure.num_atoms()) {
            return inconsistent(format!(
                "{} atoms cannot be {:?} images of a {}-site cell",
                structure.num_atoms(), periods, sites.len(),
            ));
        }
        Ok(Cell { structure, spacegroup, kinds, sites, periods })
    }

    pub fn structure(&self) -> &AtomStructure { &self.structure }
    pub fn atoms(&self) -> &[Atom] { self.structure.metadata() }
    pub fn num_atoms(&self) -> usize { self.structure.num_atoms() }
    pub fn lattice(&self) -> &Lattice { self.structure.lattice() }
    pub fn spacegroup(&self) -> SpaceGroupId { self.spacegroup }

    /// Cartesian positions.
    pub fn positions(&self) -> Vec<V3> { self.structure.to_carts() }

    /// Fractional positions with respect to this cell's own lattice.
    pub fn fracs(&self) -> Vec<V3> { self.structure.to_fracs() }

    /// Lengths of the three lattice vectors.
    pub fn lengths(&self) -> [f64; 3] { self.lattice().norms() }

    /// Basis index of each site of the unit cell.
    pub fn kinds(&self) -> &[usize] { &self.kinds }

    /// Fractional sites of the unit cell, with respect to the unit cell lattice.
    pub fn sites(&self) -> &[V3] { &self.sites }

    /// Number of unit cell images along each lattice vector.
    pub fn periods(&self) -> [u32; 3] { self.periods }

    /// Basis index of each atom.
    pub fn atom_kinds(&self) -> Vec<usize> {
        self.kinds.iter().cloned().cycle().take(self.num_atoms()).collect()
    }

    pub fn symbols(&self) -> Vec<&str> {
        self.atoms().iter().map(|a| &a.symbol[..]).collect()
    }

    pub fn masses(&self) -> Vec<f64> {
        self.atoms().iter().map(|a| a.mass).collect()
    }

    /// Chemical formula such as `Na4Cl4`, with symbols in order of
    /// first appearance.
    pub fn formula(&self) -> String {
        let mut counts: Vec<(&str, usize)> = vec![];
        for symbol in self.symbols() {
            match counts.iter_mut().find(|entry| entry.0 == symbol) {
                Some(entry) => entry.1 += 1,
                None => counts.push((symbol, 1)),
            }
        }
        counts.into_iter()
            .map(|(symbol, count)| match count {
                1 => symbol.to_string(),
                _ => format!("{}{}", symbol, count),
            })
            .collect()
    }
}

/// Generate the unit cell of a crystal.
///
/// Either every atom is produced, or an error is returned; nothing is
/// built for invalid input.
pub fn build_unit_cell<T>(table: &SymmetryTable, masses: &T, crystal: &Crystal) -> Result<Cell>
where T: MassTable + ?Sized,
{
    let SpaceGroupId { number, setting } = crystal.spacegroup;
    let entry = table.lookup(number, setting)?;

    if crystal.basis.len() != crystal.symbols.len() {
        return Err(Error::BasisMismatch {
            basis: crystal.basis.len(),
            symbols: crystal.symbols.len(),
        });
    }

    let lattice = Lattice::from_cellpar(&crystal.cellpar, &crystal.orientation)?;

    let ops = entry.symmetry_ops();
    let sites = crate::equivalent_sites(&crystal.basis, &ops, crystal.on_duplicates)?;

    let basis_atoms = crystal.symbols.iter()
        .map(|symbol| -> Result<Atom> {
            let mass = masses.require_mass(symbol)?;
            Ok(Atom { symbol: symbol.clone(), mass })
        })
        .collect::<Result<Vec<_>>>()?;

    let atoms = sites.kinds.iter().map(|&kind| basis_atoms[kind].clone());
    let carts = Coords::Fracs(sites.sites.clone()).into_carts(&lattice);
    let structure = Structure::new(lattice, Coords::Carts(carts), atoms);

    let cell = Cell {
        structure,
        spacegroup: crystal.spacegroup,
        kinds: sites.kinds,
        sites: sites.sites,
        periods: [1, 1, 1],
    };
    debug!("Built {} in space group {}", cell.formula(), crystal.spacegroup);
    Ok(cell)
}

/// Tile a cell `dims[k]` times along each of its lattice vectors.
///
/// Images are produced in order of `(i, j, k)` with `k` varying fastest;
/// each image holds a full copy of the input's atoms in their original order.
pub fn build_supercell(cell: &Cell, dims: [i64; 3]) -> Result<Cell> {
    let mut counts = [0u32; 3];
    for (count, &n) in counts.iter_mut().zip(&dims) {
        *count = match u32::try_from(n) {
            Ok(n) if n > 0 => n,
            _ => return Err(Error::InvalidReplication(dims)),
        };
    }

    let mut periods = cell.periods;
    for (period, &count) in periods.iter_mut().zip(&counts) {
        *period = period.checked_mul(count).ok_or_else(|| too_large(cell, dims))?;
    }
    num_cells(periods)
        .and_then(|n| n.checked_mul(cell.sites.len()))
        .ok_or_else(|| too_large(cell, dims))?;

    let (structure, _) = supercell::diagonal(counts, cell.structure.clone())?;
    debug!("Built {:?} supercell with {} atoms", dims, structure.num_atoms());

    Ok(Cell {
        structure,
        spacegroup: cell.spacegroup,
        kinds: cell.kinds.clone(),
        sites: cell.sites.clone(),
        periods,
    })
}

// `None` on overflow
fn num_cells(periods: [u32; 3]) -> Option<usize> {
    periods.iter().try_fold(1usize, |acc, &n| acc.checked_mul(n as usize))
}

fn too_large(cell: &Cell, dims: [i64; 3]) -> Error {
    Error::StructuralInconsistency(format!(
        "a {:?} supercell of a cell with periods {:?} is too large",
        dims, cell.periods,
    ))
}
