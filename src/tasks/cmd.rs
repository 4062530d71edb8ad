use crate::FailResult;
use crate::config::Settings;

use spgen_structure::{StandardMasses, Overrides};
use spgen_spacegroup::{Cell, SymmetryTable, build_unit_cell, build_supercell};

/// Build the cell described by a config, including any supercell.
pub fn generate(settings: &Settings, table: &SymmetryTable) -> FailResult<Cell>
{
    let crystal = settings.crystal();
    let masses = Overrides { overrides: &settings.masses, base: &StandardMasses };

    let unit = build_unit_cell(table, &masses, &crystal)?;
    info!("Unit cell: {} ({} atoms)", unit.formula(), unit.num_atoms());
    trace!("Lattice lengths: {:?}", unit.lengths());

    let cell = match settings.supercell {
        [1, 1, 1] => unit,
        dims => {
            let cell = build_supercell(&unit, dims)?;
            info!("Supercell {:?}: {} atoms", dims, cell.num_atoms());
            cell
        },
    };
    Ok(cell)
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use crate::config::{BasisSite, SpaceGroup};
    use spgen_spacegroup::{Error, SpaceGroupEntry, SpaceGroupId};

    fn table() -> SymmetryTable {
        let eye = spgen_structure::math::EYE;
        let p1 = SpaceGroupEntry::new(SpaceGroupId::new(1, 1), vec![eye], vec![[0.0; 3]], vec![[0.0; 3]], false);
        SymmetryTable::from_entries(vec![p1.unwrap()]).unwrap()
    }

    fn settings() -> Settings {
        Settings {
            spacegroup: SpaceGroup { number: 1, setting: 1 },
            basis: vec![
                BasisSite { symbol: "D".into(), frac: [0.0, 0.0, 0.0] },
                BasisSite { symbol: "H".into(), frac: [0.0, 0.0, 0.5] },
            ],
            cellpar: [2.0, 2.0, 3.0, 90.0, 90.0, 90.0],
            orientation: Default::default(),
            supercell: [1, 1, 1],
            on_duplicates: Default::default(),
            masses: vec![("D".to_string(), 2.014)].into_iter().collect(),
        }
    }

    #[test]
    fn mass_overrides() {
        let cell = generate(&settings(), &table()).unwrap();
        assert_eq!(cell.masses(), vec![2.014, 1.008]);
        assert_close!(cell.positions()[1], [0.0, 0.0, 1.5]);
    }

    #[test]
    fn supercell() {
        let mut settings = settings();
        settings.supercell = [1, 3, 1];
        let cell = generate(&settings, &table()).unwrap();
        assert_eq!(cell.num_atoms(), 6);
        assert_eq!(cell.formula(), "D3H3");
        assert_close!(cell.lengths(), [2.0, 6.0, 3.0]);

        settings.supercell = [1, -3, 1];
        let err = generate(&settings, &table()).unwrap_err();
        assert_eq!(err.downcast::<Error>().unwrap(), Error::InvalidReplication([1, -3, 1]));
    }

    #[test]
    fn unknown_element() {
        let mut settings = settings();
        settings.masses.clear();
        let err = generate(&settings, &table()).unwrap_err();
        assert_eq!(err.downcast::<Error>().unwrap(), Error::UnknownElement("D".into()));
    }
}
