use spgen_structure::{GeometryError, ReplicationError, UnknownElement, V3};

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can stop the construction of a cell.
///
/// None of these are recoverable for the input that produced them.
#[derive(Debug, Fail, Clone, PartialEq)]
pub enum Error {
    #[fail(display = "invalid geometry: {}", _0)]
    InvalidGeometry(#[cause] GeometryError),

    #[fail(display = "no symmetry data for space group {} (setting {})", number, setting)]
    UnknownSpaceGroup { number: u32, setting: u32 },

    #[fail(display = "no mass known for element {:?}", _0)]
    UnknownElement(String),

    #[fail(display = "supercell multipliers must be positive, got {:?}", _0)]
    InvalidReplication([i64; 3]),

    #[fail(display = "inconsistent structural data: {}", _0)]
    StructuralInconsistency(String),

    #[fail(display = "basis has {} positions but {} symbols were given", basis, symbols)]
    BasisMismatch { basis: usize, symbols: usize },

    #[fail(display = "site {:?} of kind {} was already generated by kind {}", site, kind, existing_kind)]
    DuplicateSite { kind: usize, existing_kind: usize, site: V3 },
}

impl From<GeometryError> for Error {
    fn from(e: GeometryError) -> Self
    { Error::InvalidGeometry(e) }
}

impl From<UnknownElement> for Error {
    fn from(UnknownElement(symbol): UnknownElement) -> Self
    { Error::UnknownElement(symbol) }
}

impl From<ReplicationError> for Error {
    fn from(ReplicationError(dims): ReplicationError) -> Self
    { Error::InvalidReplication(dims) }
}
