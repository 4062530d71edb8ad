pub(crate) mod lattice;
pub(crate) mod cellpar;
pub(crate) mod coords;
pub(crate) mod structure;
