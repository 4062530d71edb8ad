//! Symmetry data for a handful of space groups, for use in unit tests.

use crate::{SpaceGroupEntry, SpaceGroupId, SymmetryTable};
use spgen_structure::{math, M33, V3};

const ZERO: V3 = [0.0; 3];

/// The 24 proper rotations of the cube, identity first.
pub(crate) fn cubic_rotations() -> Vec<M33> {
    let perms: [[usize; 3]; 6] = [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];
    let mut out = vec![];
    for perm in &perms {
        for signs in 0..8 {
            let mut m = [[0.0; 3]; 3];
            for i in 0..3 {
                m[i][perm[i]] = if (signs >> i) & 1 == 1 { -1.0 } else { 1.0 };
            }
            if math::matrix(&m).determinant() > 0.0 {
                out.push(m);
            }
        }
    }
    assert_eq!(out.len(), 24);
    out
}

fn entry(number: u32, symbol: &str, rotations: Vec<M33>, translations: Vec<V3>, subtranslations: Vec<V3>, centro: bool) -> SpaceGroupEntry {
    SpaceGroupEntry::new(SpaceGroupId::new(number, 1), rotations, translations, subtranslations, centro)
        .unwrap()
        .with_symbol(symbol)
}

pub(crate) fn p1() -> SpaceGroupEntry
{ entry(1, "P 1", vec![math::EYE], vec![ZERO], vec![ZERO], false) }

pub(crate) fn p_1() -> SpaceGroupEntry
{ entry(2, "P -1", vec![math::EYE], vec![ZERO], vec![ZERO], true) }

pub(crate) fn p2_1() -> SpaceGroupEntry {
    let screw = [[-1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, -1.0]];
    entry(4, "P 21", vec![math::EYE, screw], vec![ZERO, [0.0, 0.5, 0.0]], vec![ZERO], false)
}

pub(crate) fn fm_3m() -> SpaceGroupEntry {
    let rotations = cubic_rotations();
    let translations = vec![ZERO; rotations.len()];
    let subtranslations = vec![ZERO, [0.0, 0.5, 0.5], [0.5, 0.0, 0.5], [0.5, 0.5, 0.0]];
    entry(225, "F m -3 m", rotations, translations, subtranslations, true)
}

pub(crate) fn im_3m() -> SpaceGroupEntry {
    let rotations = cubic_rotations();
    let translations = vec![ZERO; rotations.len()];
    entry(229, "I m -3 m", rotations, translations, vec![ZERO, [0.5, 0.5, 0.5]], true)
}

pub(crate) fn table() -> SymmetryTable {
    SymmetryTable::from_entries(vec![p1(), p_1(), p2_1(), fm_3m(), im_3m()]).unwrap()
}
