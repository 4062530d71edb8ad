use crate::SpaceGroupEntry;

use spgen_structure::{math, V3, M33};

/// A spacegroup operation in fractional coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct FracOp {
    /// Acts on fractional coordinates as column vectors.
    pub rot: M33,
    /// Reduced into `[0, 1)`.
    pub trans: V3,
}

impl Default for FracOp {
    fn default() -> Self
    { Self::eye() }
}

impl FracOp {
    pub fn new(rot: &M33, trans: &V3) -> Self
    { FracOp { rot: *rot, trans: *trans } }

    pub fn eye() -> Self
    { FracOp::new(&math::EYE, &[0.0; 3]) }

    /// Image of a fractional position, reduced into the unit cell.
    pub fn apply(&self, frac: &V3) -> V3
    {
        let image = math::matrix(&self.rot) * math::vector(frac) + math::vector(&self.trans);
        math::reduce_frac(&math::from_vector(&image))
    }
}

impl SpaceGroupEntry {
    /// Expand the entry into every operation of the group.
    ///
    /// The order is significant, as it determines the order of generated
    /// sites: parity is outermost (`+1` before `-1`), then subtranslations,
    /// then the stored rotation/translation pairs.
    pub fn symmetry_ops(&self) -> Vec<FracOp> {
        let parities: &[f64] = match self.is_centrosymmetric() {
            true => &[1.0, -1.0],
            false => &[1.0],
        };

        let mut ops = Vec::with_capacity(self.num_ops());
        for &parity in parities {
            for sub in self.subtranslations() {
                for (rot, trans) in izip!(self.rotations(), self.translations()) {
                    ops.push(FracOp {
                        rot: math::from_matrix(&(math::matrix(rot) * parity)),
                        trans: math::reduce_frac(&math::from_vector(&(math::vector(trans) + math::vector(sub)))),
                    });
                }
            }
        }
        debug_assert_eq!(ops.len(), self.num_ops());
        trace!("Space group {}: {} symmetry operations", self.id(), ops.len());
        ops
    }
}
