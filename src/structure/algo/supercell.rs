use crate::{Structure, Lattice, Coords, ReplicationError};
use crate::math::{self, V3};

/// Tile a structure `dims[k]` times along each lattice vector.
///
/// Images are produced one whole copy of the input at a time, in the order
/// of `sc_indices` (first index outermost); within each image the atoms keep
/// their original order.  The output has cartesian coords.
pub fn diagonal<M>(dims: [u32; 3], structure: Structure<M>)
-> Result<(Structure<M>, SupercellToken), ReplicationError>
where M: Clone,
{
    diagonal_with(dims, structure, |meta, _| meta.clone())
}

/// `diagonal`, with a callback producing the metadata of each image
/// from the original metadata and the image's index.
pub fn diagonal_with<M, M2, F>(dims: [u32; 3], structure: Structure<M>, mut make_meta: F)
-> Result<(Structure<M2>, SupercellToken), ReplicationError>
where F: FnMut(&M, [u32; 3]) -> M2,
{
    if dims.iter().any(|&n| n == 0) {
        return Err(ReplicationError(dims.map(i64::from)));
    }

    let Structure { lattice, coords, meta } = structure;

    let integer_lattice = Lattice::diagonal(&dims.map(f64::from));
    let token = SupercellToken { periods: dims };
    let final_size = token.num_cells() * coords.len();

    let carts = coords.into_carts(&lattice);
    let mut new_carts = Vec::with_capacity(final_size);
    let mut new_meta = Vec::with_capacity(final_size);
    for (idx, offset) in izip!(sc_indices(dims), sc_lattice_vecs(dims, &lattice)) {
        let old_len = new_carts.len();
        new_carts.extend_from_slice(&carts);
        crate::util::translate_mut_n3_3(&mut new_carts[old_len..], &offset);

        new_meta.extend(meta.iter().map(|m| make_meta(m, idx)));
    }
    trace!("Built {:?} supercell with {} atoms", dims, new_carts.len());

    let structure = Structure {
        lattice: &integer_lattice * &lattice,
        coords: Coords::Carts(new_carts),
        meta: new_meta,
    };
    Ok((structure, token))
}

/// Contains enough information to relate data on a supercell produced by
/// this library back to the original cell.
#[derive(Debug, Clone, PartialEq)]
pub struct SupercellToken {
    periods: [u32; 3],
}

impl SupercellToken {
    pub fn periods(&self) -> [u32; 3]
    { self.periods }

    pub fn num_cells(&self) -> usize
    { self.periods.iter().map(|&n| n as usize).product() }
}

// supercell indices in the library's preferred order
fn sc_indices(periods: [u32; 3]) -> Vec<[u32; 3]> {
    let mut out = vec![];
    for ia in 0..periods[0] {
        for ib in 0..periods[1] {
            for ic in 0..periods[2] {
                out.push([ia, ib, ic]);
            }
        }
    }
    out
}

// supercell image offsets in the library's preferred order
fn sc_lattice_vecs(periods: [u32; 3], lattice: &Lattice) -> Vec<V3> {
    sc_indices(periods).into_iter()
        .map(|idx| math::vec_mat(&idx.map(f64::from), lattice.matrix()))
        .collect()
}
