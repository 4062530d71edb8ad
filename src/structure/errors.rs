/// Cell parameters or orientation vectors that cannot describe a cell.
#[derive(Debug, Fail, Clone, PartialEq)]
pub enum GeometryError {
    #[fail(display = "cell lengths must be positive and finite, got {:?}", _0)]
    NonPositiveLength([f64; 3]),

    #[fail(display = "cell angle {} = {} degrees is out of range", name, value)]
    AngleOutOfRange { name: &'static str, value: f64 },

    #[fail(display = "orientation vector '{}' has zero (or non-finite) length", _0)]
    DegenerateVector(&'static str),

    #[fail(display = "a-direction and ab-normal are not orthogonal (cosine between them: {})", cosine)]
    NonOrthogonalOrientation { cosine: f64 },

    #[fail(display = "cell angles {:?} are inconsistent (squared z component of c: {})", angles, cz_sqr)]
    InconsistentAngles { angles: [f64; 3], cz_sqr: f64 },

    #[fail(display = "cell angles {:?} give a cell with no volume", angles)]
    DegenerateCell { angles: [f64; 3] },
}

/// A supercell was requested with a multiplier that is not a positive integer.
#[derive(Debug, Fail, Clone, PartialEq)]
#[fail(display = "supercell multipliers must be positive, got {:?}", _0)]
pub struct ReplicationError(pub [i64; 3]);

/// No mass is known for an element symbol.
#[derive(Debug, Fail, Clone, PartialEq)]
#[fail(display = "unknown element: {:?}", _0)]
pub struct UnknownElement(pub String);
