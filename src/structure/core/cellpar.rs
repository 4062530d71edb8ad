/* ************************************************************************ **
** This file is part of spgen, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Lattices from `(a, b, c, alpha, beta, gamma)`.

use nalgebra::Vector3;

use crate::math::{self, V3, M33};
use crate::{Lattice, GeometryError};

/// Angles (in degrees) this close to +/-90 are treated as exactly 90,
/// so that their cosine is exactly zero.
pub const ANGLE_EPS: f64 = 1e-6;

/// Smallest accepted volume of a cell with unit lengths.
pub const MIN_UNIT_VOLUME: f64 = 1e-10;

/// Largest tolerated cosine between `a_direction` and `ab_normal`.
pub const ORTHOGONALITY_TOL: f64 = 1e-5;

/// Cell lengths and angles.
///
/// Angles are in degrees. `alpha` is the angle between b and c,
/// `beta` between a and c, and `gamma` between a and b.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CellParams {
    pub lengths: [f64; 3],
    pub angles: [f64; 3],
}

/// Where the cell points in cartesian space.
///
/// The first lattice vector lies along `a_direction`, and the first two
/// lattice vectors span the plane normal to `ab_normal`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Orientation {
    pub a_direction: V3,
    pub ab_normal: V3,
}

impl CellParams {
    pub fn new(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) -> Self
    { CellParams { lengths: [a, b, c], angles: [alpha, beta, gamma] } }

    pub fn cubic(a: f64) -> Self
    { Self::new(a, a, a, 90.0, 90.0, 90.0) }

    /// `[a, b, c, alpha, beta, gamma]`
    pub fn to_array(&self) -> [f64; 6]
    {
        let ([a, b, c], [alpha, beta, gamma]) = (self.lengths, self.angles);
        [a, b, c, alpha, beta, gamma]
    }

    /// Check ranges: positive lengths, `alpha` and `beta` strictly between
    /// 0 and 180, and `gamma` in `[-180, 180]` but not zero.
    ///
    /// A negative `gamma` is a legitimate convention (it flips the sign
    /// of the second lattice vector's y component).
    pub fn validate(&self) -> Result<(), GeometryError>
    {
        if !self.lengths.iter().all(|&x| x > 0.0 && x.is_finite()) {
            return Err(GeometryError::NonPositiveLength(self.lengths));
        }

        let [alpha, beta, gamma] = self.angles;
        for &(name, value) in &[("alpha", alpha), ("beta", beta)] {
            if !(0.0 < value && value < 180.0) {
                return Err(GeometryError::AngleOutOfRange { name, value });
            }
        }
        if !(-180.0 <= gamma && gamma <= 180.0) || gamma == 0.0 {
            return Err(GeometryError::AngleOutOfRange { name: "gamma", value: gamma });
        }
        Ok(())
    }

    /// The cell in its standard orientation: a along x, b in the xy plane.
    ///
    /// Rows are `a (1, 0, 0)`, `b (cos γ, sin γ, 0)`, `c (cos β, cy, cz)`.
    pub fn standard_matrix(&self) -> Result<M33, GeometryError>
    {
        let [a, b, c] = self.lengths;
        let [alpha, beta, gamma] = self.angles;

        let cos_alpha = snapped_cos(alpha);
        let cos_beta = snapped_cos(beta);
        let (cos_gamma, sin_gamma) = snapped_cos_sin_gamma(gamma);

        let cy = (cos_alpha - cos_beta * cos_gamma) / sin_gamma;
        let cz_sqr = 1.0 - cos_beta * cos_beta - cy * cy;
        // written to also catch NaN
        if !(cz_sqr >= 0.0) {
            return Err(GeometryError::InconsistentAngles { angles: self.angles, cz_sqr });
        }
        let cz = cz_sqr.sqrt();
        // volume / (a * b * c)
        if !((sin_gamma * cz).abs() >= MIN_UNIT_VOLUME) {
            return Err(GeometryError::DegenerateCell { angles: self.angles });
        }

        Ok([
            [a, 0.0, 0.0],
            [b * cos_gamma, b * sin_gamma, 0.0],
            [c * cos_beta, c * cy, c * cz],
        ])
    }
}

impl From<[f64; 6]> for CellParams {
    fn from([a, b, c, alpha, beta, gamma]: [f64; 6]) -> Self
    { CellParams::new(a, b, c, alpha, beta, gamma) }
}

fn snapped_cos(angle: f64) -> f64
{
    if (angle.abs() - 90.0).abs() < ANGLE_EPS {
        if angle.abs() != 90.0 {
            debug!("Treating angle {} as exactly 90 degrees", angle);
        }
        0.0
    } else {
        angle.to_radians().cos()
    }
}

// the sign of gamma decides the sign of sin(gamma) near +/-90
fn snapped_cos_sin_gamma(gamma: f64) -> (f64, f64)
{
    if (gamma - 90.0).abs() < ANGLE_EPS {
        (0.0, 1.0)
    } else if (gamma + 90.0).abs() < ANGLE_EPS {
        (0.0, -1.0)
    } else {
        let rad = gamma.to_radians();
        (rad.cos(), rad.sin())
    }
}

impl Default for Orientation {
    fn default() -> Self
    { Orientation { a_direction: [1.0, 0.0, 0.0], ab_normal: [0.0, 0.0, 1.0] } }
}

impl Orientation {
    pub fn new(a_direction: V3, ab_normal: V3) -> Self
    { Orientation { a_direction, ab_normal } }

    /// Pick `a_direction` for a given normal: the x axis, unless the normal
    /// lies along x, in which case the z axis.
    pub fn from_ab_normal(ab_normal: V3) -> Self
    {
        let a_direction = match math::vector(&ab_normal).cross(&Vector3::x()).norm() < 1e-5 {
            true => [0.0, 0.0, 1.0],
            false => [1.0, 0.0, 0.0],
        };
        Orientation { a_direction, ab_normal }
    }

    /// The cartesian frame whose rows are `x`, `y`, `z`.
    ///
    /// `z` is the unit normal.  `x` is the unit `a_direction` with its
    /// component along the (unnormalized) `ab_normal` projected out, and is
    /// NOT renormalized afterwards; since the input is required to be
    /// orthogonal to within `ORTHOGONALITY_TOL`, the error is second order.
    pub fn frame(&self) -> Result<M33, GeometryError>
    {
        let a_direction = math::vector(&self.a_direction);
        let ab_normal = math::vector(&self.ab_normal);

        let a_norm = a_direction.norm();
        if !(a_norm > 0.0 && a_norm.is_finite()) {
            return Err(GeometryError::DegenerateVector("a-direction"));
        }
        let n_norm = ab_normal.norm();
        if !(n_norm > 0.0 && n_norm.is_finite()) {
            return Err(GeometryError::DegenerateVector("ab-normal"));
        }

        let cosine = a_direction.dot(&ab_normal) / (a_norm * n_norm);
        if cosine.abs() > ORTHOGONALITY_TOL {
            return Err(GeometryError::NonOrthogonalOrientation { cosine });
        }

        let z = ab_normal / n_norm;
        let x = {
            let x = a_direction / a_norm;
            x - z * x.dot(&ab_normal)
        };
        let y = z.cross(&x);
        Ok([math::from_vector(&x), math::from_vector(&y), math::from_vector(&z)])
    }
}

impl Lattice {
    /// Build a lattice from cell parameters and an orientation.
    ///
    /// The result is `standard_matrix * frame`, so its rows are the
    /// cell vectors expressed in the orientation's cartesian frame.
    pub fn from_cellpar(params: &CellParams, orientation: &Orientation) -> Result<Lattice, GeometryError>
    {
        params.validate()?;
        let frame = orientation.frame()?;
        let abc = params.standard_matrix()?;
        trace!("standard cell matrix: {:?}", abc);
        Ok(Lattice::new(&math::from_matrix(&(math::matrix(&abc) * math::matrix(&frame)))))
    }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;

    fn build(par: [f64; 6]) -> Result<Lattice, GeometryError>
    { Lattice::from_cellpar(&par.into(), &Orientation::default()) }

    #[test]
    fn cubic_is_exact() {
        let lattice = build([5.64, 5.64, 5.64, 90.0, 90.0, 90.0]).unwrap();
        assert_eq!(lattice, Lattice::cubic(5.64));
        assert_close!(abs=1e-12, lattice.norms(), [5.64; 3]);
    }

    #[test]
    fn near_right_angles_are_snapped() {
        let exact = build([3.0, 4.0, 5.0, 90.0, 90.0, 90.0]).unwrap();
        for &par in &[
            [3.0, 4.0, 5.0, 90.0000001, 90.0, 90.0],
            [3.0, 4.0, 5.0, 90.0, 89.9999999, 90.0],
            [3.0, 4.0, 5.0, 90.0, 90.0, 90.0000001],
        ] {
            assert_eq!(build(par).unwrap(), exact);
        }
    }

    #[test]
    fn negative_gamma_flips_b() {
        let pos = build([2.0, 2.0, 2.0, 90.0, 90.0, 90.0]).unwrap();
        let neg = build([2.0, 2.0, 2.0, 90.0, 90.0, -90.0]).unwrap();
        assert_eq!(pos.vectors()[1], [0.0, 2.0, 0.0]);
        assert_eq!(neg.vectors()[1], [0.0, -2.0, 0.0]);
    }

    #[test]
    fn hexagonal() {
        let lattice = build([3.0, 3.0, 5.0, 90.0, 90.0, 120.0]).unwrap();
        let s = 3.0 * 3f64.sqrt() / 2.0;
        assert_close!(abs=1e-12, lattice.vectors(), &[
            [3.0, 0.0, 0.0],
            [-1.5, s, 0.0],
            [0.0, 0.0, 5.0],
        ]);
        assert_close!(abs=1e-9, lattice.cellpar().angles, [90.0, 90.0, 120.0]);
    }

    #[test]
    fn triclinic_roundtrips_through_cellpar() {
        let par = CellParams::new(4.1, 5.2, 6.3, 75.0, 85.0, 100.0);
        let lattice = Lattice::from_cellpar(&par, &Orientation::default()).unwrap();
        let back = lattice.cellpar();
        assert_close!(abs=1e-9, back.to_array(), par.to_array());
        assert_close!(rel=1e-12, lattice.volume(), {
            let [a, b, c] = par.lengths;
            let [ca, cb, cg] = par.angles.map(|x: f64| x.to_radians().cos());
            a * b * c * (1.0 - ca * ca - cb * cb - cg * cg + 2.0 * ca * cb * cg).sqrt()
        });
    }

    #[test]
    fn rotated_frame() {
        // a along y, normal along x: the cell is rotated so that
        // a -> y, b -> z, c -> x
        let orientation = Orientation::new([0.0, 1.0, 0.0], [1.0, 0.0, 0.0]);
        let par = CellParams::new(1.0, 2.0, 3.0, 90.0, 90.0, 90.0);
        let lattice = Lattice::from_cellpar(&par, &orientation).unwrap();
        assert_close!(abs=1e-15, lattice.vectors(), &[
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 2.0],
            [3.0, 0.0, 0.0],
        ]);
    }

    #[test]
    fn default_a_direction() {
        assert_eq!(Orientation::from_ab_normal([0.0, 0.0, 1.0]), Orientation::default());
        assert_eq!(
            Orientation::from_ab_normal([-2.0, 0.0, 0.0]).a_direction,
            [0.0, 0.0, 1.0],
        );
        Orientation::from_ab_normal([1.0, 0.0, 0.0]).frame().unwrap();
    }

    #[test]
    fn errors() {
        let par = CellParams::cubic(1.0);
        let skewed = Orientation::new([1.0, 0.0, 0.1], [0.0, 0.0, 1.0]);
        match Lattice::from_cellpar(&par, &skewed) {
            Err(GeometryError::NonOrthogonalOrientation { .. }) => {},
            r => panic!("unexpected: {:?}", r),
        }

        let zero = Orientation::new([0.0; 3], [0.0, 0.0, 1.0]);
        assert_eq!(
            Lattice::from_cellpar(&par, &zero),
            Err(GeometryError::DegenerateVector("a-direction")),
        );

        assert_eq!(
            build([1.0, -1.0, 1.0, 90.0, 90.0, 90.0]),
            Err(GeometryError::NonPositiveLength([1.0, -1.0, 1.0])),
        );
        assert_eq!(
            build([1.0, 1.0, 1.0, 180.0, 90.0, 90.0]),
            Err(GeometryError::AngleOutOfRange { name: "alpha", value: 180.0 }),
        );
        assert_eq!(
            build([1.0, 1.0, 1.0, 90.0, 90.0, 0.0]),
            Err(GeometryError::AngleOutOfRange { name: "gamma", value: 0.0 }),
        );

        // each angle fine on its own, but no such cell exists
        match build([1.0, 1.0, 1.0, 30.0, 30.0, 120.0]) {
            Err(GeometryError::InconsistentAngles { .. }) => {},
            r => panic!("unexpected: {:?}", r),
        }
    }

    #[test]
    fn flat_cells() {
        // sin(180 degrees) is not exactly zero in floating point
        for &par in &[
            [1.0, 1.0, 1.0, 90.0, 90.0, 180.0],
            [1.0, 1.0, 1.0, 90.0, 90.0, -180.0],
            [2.0, 3.0, 4.0, 90.0, 90.0, 179.99999999999],
        ] {
            assert_eq!(
                build(par),
                Err(GeometryError::DegenerateCell { angles: [par[3], par[4], par[5]] }),
            );
        }
        assert!(build([1.0, 1.0, 1.0, 90.0, 90.0, 179.0]).is_ok());
    }
}
