use std::ops::Mul;

use nalgebra::Matrix3;

use spgen_assert_close::{CheckClose, Tolerances, CheckCloseError};

use crate::math::{self, V3, M33};
use crate::CellParams;

/// Defines a vector basis for periodic boundary conditions in three dimensions.
///
/// This is a linear transformation between "fractional" data and "cartesian"
/// data.  The matrix is row-based; `frac * matrix == cart`.
#[derive(Debug, Clone)]
pub struct Lattice {
    matrix: M33,
    inverse: M33,
}

// Manual impl that doesn't compare the inverse.
impl PartialEq<Lattice> for Lattice {
    fn eq(&self, other: &Lattice) -> bool {
        // deconstruct to get errors when new fields are added
        let Lattice { ref matrix, inverse: _ } = *self;
        matrix == &other.matrix
    }
}

impl Lattice {
    /// Create a lattice from a matrix where the rows are lattice vectors.
    ///
    /// A singular matrix gets an inverse full of NaN; such a lattice can
    /// still take fractional coordinates to cartesian, but not the reverse.
    pub fn new(matrix: &M33) -> Self {
        let inverse = math::matrix(matrix).try_inverse()
            .unwrap_or_else(|| Matrix3::from_element(f64::NAN));
        Lattice { matrix: *matrix, inverse: math::from_matrix(&inverse) }
    }

    #[inline(always)]
    pub fn from_vectors(vectors: &[V3; 3]) -> Self
    { Self::new(vectors) }

    /// Matrix where lattice vectors are rows.
    #[inline]
    pub fn matrix(&self) -> &M33
    { &self.matrix }

    /// Get the (precomputed) inverse of the matrix where lattice vectors are rows.
    #[inline]
    pub fn inverse_matrix(&self) -> &M33
    { &self.inverse }

    #[inline]
    pub fn vectors(&self) -> &[V3; 3]
    { &self.matrix }

    /// The lengths of the three lattice vectors.
    pub fn norms(&self) -> [f64; 3]
    { self.matrix.map(|v| math::vector(&v).norm()) }

    /// Get the (positive) volume of the lattice cell.
    pub fn volume(&self) -> f64
    { math::matrix(&self.matrix).determinant().abs() }

    /// Recover lengths and angles (in degrees).
    ///
    /// This forgets the orientation of the cell.  Angles are not snapped,
    /// so a cell built with 90 degree angles may come back as 89.99999999.
    pub fn cellpar(&self) -> CellParams
    {
        let [a, b, c] = *self.vectors();
        let angle = |u: &V3, v: &V3| {
            let (u, v) = (math::vector(u), math::vector(v));
            let cos = u.dot(&v) / (u.norm() * v.norm());
            cos.max(-1.0).min(1.0).acos().to_degrees()
        };
        let [la, lb, lc] = self.norms();
        CellParams::new(la, lb, lc, angle(&b, &c), angle(&a, &c), angle(&a, &b))
    }
}

/// Helper constructors
impl Lattice {
    /// The identity lattice.
    #[inline]
    pub fn eye() -> Self { Self::cubic(1.0) }

    #[inline]
    pub fn diagonal(&[x, y, z]: &[f64; 3]) -> Self { Self::orthorhombic(x, y, z) }

    // NOTE: Only helpers for lattices whose matrices are dead obvious.
    //       Anything else should go through `from_cellpar`, which
    //       documents the orientation it produces.

    /// A cubic lattice ((a, a, a), (90, 90, 90))
    #[inline]
    pub fn cubic(a: f64) -> Self { Self::orthorhombic(a, a, a) }

    /// An orthorhombic lattice ((a, b, c), (90, 90, 90))
    #[inline]
    pub fn orthorhombic(a: f64, b: f64, c: f64) -> Self
    { Self::new(&[[a, 0., 0.], [0., b, 0.], [0., 0., c]]) }
}

/// Defaults to the identity matrix.
impl Default for Lattice {
    #[inline]
    fn default() -> Lattice { Lattice::eye() }
}

// Row-based product.  For a diagonal left-hand side this scales
// each lattice vector independently.
impl<'a, 'b> Mul<&'b Lattice> for &'a Lattice {
    type Output = Lattice;

    #[inline(always)]
    fn mul(self, other: &'b Lattice) -> Lattice {
        // Let the inverse be computed from scratch,
        // for sustained accuracy after many products
        Lattice::new(&math::from_matrix(&(math::matrix(self.matrix()) * math::matrix(other.matrix()))))
    }
}

impl CheckClose for Lattice {
    fn check_close(&self, other: &Lattice, tol: Tolerances) -> Result<(), CheckCloseError>
    { self.matrix().check_close(other.matrix(), tol) }
}
