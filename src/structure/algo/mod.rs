pub(crate) mod supercell;
