#[macro_use] extern crate pretty_assertions;
#[macro_use] extern crate spgen_assert_close;

use spgen_spacegroup::{Crystal, Error, OnDuplicates, SpaceGroupId, SymmetryTable};
use spgen_spacegroup::{build_unit_cell, build_supercell, equivalent_sites};
use spgen_structure::{CellParams, GeometryError, Lattice, Orientation, StandardMasses};
use spgen_structure_io::{interchange, spacegroups};
use spgen_tasks::{Settings, YamlRead};

use std::fs::File;

fn table() -> SymmetryTable {
    spacegroups::load_path("tests/resources/spacegroups.yaml").unwrap()
}

fn settings(path: &str) -> Settings {
    Settings::from_reader(File::open(path).unwrap()).unwrap()
}

fn crystal(number: u32, basis: Vec<(&str, [f64; 3])>, a: f64) -> Crystal {
    Crystal::new(SpaceGroupId::new(number, 1), basis, CellParams::cubic(a))
}

#[test]
fn fixture_table() {
    let table = table();
    assert_eq!(table.len(), 6);
    assert_eq!(table.lookup(225, 1).unwrap().symbol(), Some("F m -3 m"));
    assert_eq!(table.lookup(225, 1).unwrap().num_ops(), 192);
    assert_eq!(
        table.lookup(230, 1).unwrap_err(),
        Error::UnknownSpaceGroup { number: 230, setting: 1 },
    );
}

#[test]
fn rock_salt() {
    let cell = build_unit_cell(&table(), &StandardMasses, &settings("tests/resources/nacl.yaml").crystal()).unwrap();

    assert_eq!(cell.num_atoms(), 8);
    assert_eq!(cell.symbols(), vec!["Na", "Na", "Na", "Na", "Cl", "Cl", "Cl", "Cl"]);
    assert_close!(abs=1e-10, cell.lattice().matrix(), Lattice::cubic(5.64).matrix());
    assert_close!(abs=1e-10, cell.lengths(), [5.64; 3]);

    for pos in cell.positions() {
        for &x in &pos {
            assert!([0.0, 2.82, 5.64].iter().any(|&y| (x - y).abs() < 1e-3), "{:?}", pos);
        }
    }
}

#[test]
fn multiplicities() {
    let table = table();
    let count = |crystal: Crystal| build_unit_cell(&table, &StandardMasses, &crystal).unwrap().num_atoms();

    assert_eq!(count(crystal(225, vec![("Al", [0.0; 3])], 4.05)), 4);
    assert_eq!(count(crystal(229, vec![("Fe", [0.0; 3])], 2.87)), 2);
    assert_eq!(count(crystal(221, vec![("Po", [0.0; 3])], 3.35)), 1);
    assert_eq!(count(crystal(221, vec![("Cs", [0.0; 3]), ("Cl", [0.5; 3])], 4.12)), 2);
    // fluorite: the 8c site
    assert_eq!(count(crystal(225, vec![("Ca", [0.0; 3]), ("F", [0.25; 3])], 5.46)), 12);
}

#[test]
fn general_positions_are_never_merged() {
    let table = table();
    for id in table.ids() {
        let entry = table.get(id).unwrap();
        let ops = entry.symmetry_ops();
        let sites = equivalent_sites(&[[0.01, 0.02, 0.03]], &ops, OnDuplicates::Error).unwrap();
        assert_eq!(sites.len(), entry.num_ops(), "{}", id);

        // generating again from the output changes nothing
        let again = equivalent_sites(&sites.sites, &ops, OnDuplicates::Keep).unwrap();
        assert_eq!(again.sites, sites.sites, "{}", id);
    }
}

#[test]
fn bad_orientation() {
    let crystal = settings("tests/resources/nonorthogonal.yaml").crystal();
    match build_unit_cell(&table(), &StandardMasses, &crystal) {
        Err(Error::InvalidGeometry(GeometryError::NonOrthogonalOrientation { .. })) => {},
        r => panic!("{:?}", r),
    }
}

#[test]
fn near_right_angle() {
    let table = table();
    let mut crystal = crystal(225, vec![("Na", [0.0; 3]), ("Cl", [0.5; 3])], 5.64);
    let exact = build_unit_cell(&table, &StandardMasses, &crystal).unwrap();

    crystal.cellpar = CellParams::new(5.64, 5.64, 5.64, 90.0000001, 90.0, 90.0);
    let nearly = build_unit_cell(&table, &StandardMasses, &crystal).unwrap();
    assert_eq!(exact, nearly);
}

#[test]
fn supercells() {
    let table = table();
    let mut crystal = crystal(225, vec![("Na", [0.0; 3]), ("Cl", [0.5; 3])], 5.64);
    crystal.orientation = Orientation::new([1.0, 1.0, 0.0], [0.0, 0.0, 1.0]);
    let cell = build_unit_cell(&table, &StandardMasses, &crystal).unwrap();

    assert_eq!(build_supercell(&cell, [1, 1, 1]).unwrap(), cell);

    let sc = build_supercell(&cell, [3, 2, 1]).unwrap();
    assert_eq!(sc.num_atoms(), 6 * cell.num_atoms());
    let (unit, big) = (cell.lattice().vectors(), sc.lattice().vectors());
    for k in 0..3 {
        let n = [3.0, 2.0, 1.0][k];
        assert_close!(abs=1e-10, big[k], [n * unit[k][0], n * unit[k][1], n * unit[k][2]]);
    }

    assert_eq!(build_supercell(&cell, [0, 1, 1]), Err(Error::InvalidReplication([0, 1, 1])));
}

#[test]
fn config_with_supercell_and_masses() {
    let cell = spgen_tasks::cmd::generate(&settings("tests/resources/fe-supercell.yaml"), &table()).unwrap();
    assert_eq!(cell.num_atoms(), 8);
    assert_eq!(cell.formula(), "Fe8");
    assert_eq!(cell.masses(), vec![56.0; 8]);
    assert_eq!(cell.periods(), [2, 2, 1]);
    assert_close!(abs=1e-10, cell.lengths(), [5.74, 5.74, 2.87]);
}

#[test]
fn interchange_roundtrip() {
    let cell = build_unit_cell(&table(), &StandardMasses, &settings("tests/resources/nacl.yaml").crystal()).unwrap();
    let cell = build_supercell(&cell, [1, 2, 1]).unwrap();

    let mut json = vec![];
    interchange::write_json(&mut json, &cell).unwrap();
    let back = interchange::read_json(&json[..]).unwrap();

    assert_eq!(back.symbols(), cell.symbols());
    assert_eq!(back.kinds(), cell.kinds());
    assert_eq!(back.periods(), cell.periods());
    assert_close!(abs=1e-6, back.positions(), cell.positions());
    assert_close!(abs=1e-6, back.lattice().matrix(), cell.lattice().matrix());
}
