//! `assert_close!` and friends.
//!
//! Fractional coordinates and lattice vectors in this workspace are compared
//! against reference values that were computed by a different sequence of
//! floating point operations, so exact equality is rarely the right test.

#[macro_use]
extern crate failure;
use std::fmt;

/// Relative tolerance used when none is given.
pub const DEFAULT_REL_TOL: f64 = 1e-9;

/// Assert that two values are close.
///
/// ```
/// # #[macro_use] extern crate spgen_assert_close;
/// # fn main() {
/// assert_close!(1.0, 1.0 + 1e-12);
/// assert_close!(abs=1e-6, [0.0, 2.82, 5.64], [1e-8, 2.82, 5.64]);
/// assert_close!(rel=1e-3, abs=0.0, 1000.0, 1000.5, "in {}", "a message");
/// # }
/// ```
///
/// Tolerances are given as leading `abs=` and/or `rel=` arguments.
/// Unspecified tolerances default to `rel=DEFAULT_REL_TOL` and `abs=0.0`.
#[macro_export]
macro_rules! assert_close {
    ($($t:tt)*) => {
        $crate::__assert_close_parse!{
            [abs = 0.0] [rel = $crate::DEFAULT_REL_TOL] $($t)*
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __assert_close_parse {
    ([abs = $_old:expr] $rel:tt abs=$tol:expr, $($rest:tt)*) => {
        $crate::__assert_close_parse!{ [abs = $tol] $rel $($rest)* }
    };
    ($abs:tt [rel = $_old:expr] rel=$tol:expr, $($rest:tt)*) => {
        $crate::__assert_close_parse!{ $abs [rel = $tol] $($rest)* }
    };
    ([abs = $abs:expr] [rel = $rel:expr] $a:expr, $b:expr $(,)*) => {
        $crate::__assert_close_parse!{ [abs = $abs] [rel = $rel] $a, $b, "not nearly equal!" }
    };
    ([abs = $abs:expr] [rel = $rel:expr] $a:expr, $b:expr, $($fmt:tt)+) => {{
        let tol = $crate::Tolerances { abs: $abs, rel: $rel };
        // a `match` keeps temporaries in the arguments alive
        match (&$a, &$b) {
            (a, b) => {
                if let Err(e) = $crate::CheckClose::check_close(a, b, tol) {
                    panic!(
                        "{} (tolerances: rel={}, abs={})\n left: {:?}\nright: {:?}\n{}",
                        format!($($fmt)+), tol.rel, tol.abs, a, b, e,
                    );
                }
            },
        }
    }};
}

/// Python's `math.isclose`, which is symmetric in `a` and `b`.
pub fn is_close(a: f64, b: f64, Tolerances { abs, rel }: Tolerances) -> bool {
    assert!(rel >= 0.0);
    assert!(abs >= 0.0);

    // infinities of the same sign
    if a == b { return true; }
    if a.is_infinite() || b.is_infinite() { return false; }

    // NaN falls through to here and compares false
    (a - b).abs() <= abs.max(rel * a.abs()).max(rel * b.abs())
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tolerances {
    pub abs: f64,
    pub rel: f64,
}

impl Tolerances {
    pub fn abs(abs: f64) -> Self
    { Tolerances { abs, rel: 0.0 } }
}

/// The first pair of scalars that failed a closeness check.
#[derive(Debug, Fail)]
pub struct CheckCloseError {
    /// Index path to the failing element, outermost first.
    pub index: Vec<usize>,
    pub values: (f64, f64),
    pub tol: Tolerances,
}

impl fmt::Display for CheckCloseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (left, right) = self.values;
        write!(f, "failed at index {:?}:\n  left: {:?}\n right: {:?}", self.index, left, right)
    }
}

impl CheckCloseError {
    fn within(mut self, index: usize) -> Self {
        self.index.insert(0, index);
        self
    }
}

pub trait CheckClose<Rhs: ?Sized = Self> {
    /// Test that all scalars of self and other are close.
    ///
    /// # Panics
    ///
    /// Implementations for containers panic on a length mismatch,
    /// since that indicates a bug in the test rather than imprecision.
    fn check_close(&self, other: &Rhs, tol: Tolerances) -> Result<(), CheckCloseError>;
}

impl CheckClose for f64 {
    fn check_close(&self, other: &f64, tol: Tolerances) -> Result<(), CheckCloseError> {
        match is_close(*self, *other, tol) {
            true => Ok(()),
            false => Err(CheckCloseError { index: vec![], values: (*self, *other), tol }),
        }
    }
}

impl<'a, T: ?Sized + CheckClose> CheckClose for &'a T {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError>
    { (**self).check_close(*other, tol) }
}

impl<T: CheckClose> CheckClose for [T] {
    fn check_close(&self, other: &[T], tol: Tolerances) -> Result<(), CheckCloseError> {
        assert_eq!(self.len(), other.len(), "length mismatch in check_close");
        for (i, (a, b)) in self.iter().zip(other).enumerate() {
            a.check_close(b, tol).map_err(|e| e.within(i))?;
        }
        Ok(())
    }
}

impl<T: CheckClose> CheckClose for Vec<T> {
    fn check_close(&self, other: &Vec<T>, tol: Tolerances) -> Result<(), CheckCloseError>
    { self[..].check_close(&other[..], tol) }
}

impl<T: CheckClose, const N: usize> CheckClose for [T; N] {
    fn check_close(&self, other: &[T; N], tol: Tolerances) -> Result<(), CheckCloseError>
    { self[..].check_close(&other[..], tol) }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;

    #[test]
    fn macro_forms() {
        assert_close!(1.0, 1.0);
        assert_close!(abs=1e-8, 1.0, 1.0 + 1e-9);
        assert_close!(rel=1e-8, abs=1e-8, 1.0, 1.0);
        assert_close!(abs=1e-8, rel=1e-8, 1.0, 1.0,);
        assert_close!(abs=1e-3, vec![[0.0, 0.5, 1.0]], vec![[1e-4, 0.5, 1.0]], "{}", "msg");
    }

    #[test]
    fn temporaries_in_arguments() {
        fn row(x: f64) -> Vec<[f64; 3]> { vec![[x, 0.0, 0.0]] }
        assert_close!(abs=1e-12, &row(1.0)[..], &row(1.0 + 1e-13)[..]);
        assert_close!(row(2.0).as_slice(), row(2.0).as_slice());
    }

    #[test]
    fn reports_index_path() {
        let a = vec![[0.0, 0.0, 0.0], [0.0, 0.25, 0.0]];
        let b = vec![[0.0, 0.0, 0.0], [0.0, 0.75, 0.0]];
        let err = a.check_close(&b, Tolerances::abs(1e-3)).unwrap_err();
        assert_eq!(err.index, vec![1, 1]);
        assert_eq!(err.values, (0.25, 0.75));
    }

    #[test]
    fn nan_is_never_close() {
        assert!(!is_close(::std::f64::NAN, ::std::f64::NAN, Tolerances::abs(1.0)));
    }

    #[test]
    #[should_panic]
    fn not_close() {
        assert_close!(abs=0.0, rel=0.0, 1.0, 1.1);
    }

    #[test]
    #[should_panic(expected = "length mismatch")]
    fn length_mismatch() {
        assert_close!(abs=1.0, vec![1.0], vec![1.0, 2.0]);
    }
}
