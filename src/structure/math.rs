//! Plain arrays at API boundaries, `nalgebra` for the arithmetic.
//!
//! Matrices are arrays of rows.  Whether a matrix acts on row vectors
//! (`vec_mat`) or on column vectors (`mat_vec`) is decided at each call site;
//! lattices use the former and symmetry rotations the latter.

use nalgebra::{Matrix3, Vector3};

/// A 3-vector.
pub type V3 = [f64; 3];
/// A 3x3 matrix, stored as rows.
pub type M33 = [[f64; 3]; 3];

pub const EYE: M33 = [
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
];

#[inline]
pub fn vector(v: &V3) -> Vector3<f64>
{ Vector3::new(v[0], v[1], v[2]) }

#[inline]
pub fn from_vector(v: &Vector3<f64>) -> V3
{ [v[0], v[1], v[2]] }

/// The matrix whose rows are `m[0]`, `m[1]`, `m[2]`.
#[inline]
pub fn matrix(m: &M33) -> Matrix3<f64>
{
    Matrix3::new(
        m[0][0], m[0][1], m[0][2],
        m[1][0], m[1][1], m[1][2],
        m[2][0], m[2][1], m[2][2],
    )
}

#[inline]
pub fn from_matrix(m: &Matrix3<f64>) -> M33
{[
    [m[(0, 0)], m[(0, 1)], m[(0, 2)]],
    [m[(1, 0)], m[(1, 1)], m[(1, 2)]],
    [m[(2, 0)], m[(2, 1)], m[(2, 2)]],
]}

/// Row vector times matrix; `v M`.
#[inline]
pub fn vec_mat(v: &V3, m: &M33) -> V3
{ from_vector(&matrix(m).tr_mul(&vector(v))) }

/// Matrix times column vector; `M v`.
#[inline]
pub fn mat_vec(m: &M33, v: &V3) -> V3
{ from_vector(&(matrix(m) * vector(v))) }

/// Reduce each component into `[0, 1)`.
///
/// The remainder takes the sign of the dividend, so negative inputs are
/// folded back up by adding 1.  A tiny negative input rounds to exactly
/// `1.0` during the fold, and is then taken to be `0.0`.
pub fn reduce_frac(v: &V3) -> V3
{
    let mut out = [v[0] % 1.0, v[1] % 1.0, v[2] % 1.0];
    for x in &mut out {
        if *x < 0.0 {
            *x += 1.0;
        }
        if *x >= 1.0 {
            *x = 0.0;
        }
    }
    out
}
