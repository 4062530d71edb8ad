//! Crystal unit cells and supercells from space group symmetry data.
//!
//! This crate only gathers the workspace members under one name;
//! see the individual crates for documentation.

pub use spgen_structure as structure;
pub use spgen_spacegroup as spacegroup;
pub use spgen_structure_io as structure_io;
pub use spgen_tasks as tasks;
