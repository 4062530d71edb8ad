// FIXME kill these once there's utilities that support these
//       operations on variable length slices/vecs
#[cfg(test)]
use ordered_float::NotNan;

use crate::math::{self, V3, M33};

pub(crate) fn dot_n3_33(coords: &[V3], m: &M33) -> Vec<V3>
{ coords.iter().map(|v| math::vec_mat(v, m)).collect() }

pub(crate) fn translate_mut_n3_3(coords: &mut [V3], t: &V3)
{
    for row in coords {
        *row = math::from_vector(&(math::vector(row) + math::vector(t)));
    }
}

#[cfg(test)]
pub(crate) fn eq_unordered_n3(a: &[V3], b: &[V3]) -> bool {
    let sorted = |coords: &[V3]| {
        let mut out: Vec<_> = coords.iter()
            .map(|v| v.map(|x| NotNan::new(x).unwrap()))
            .collect();
        out.sort();
        out
    };
    sorted(a) == sorted(b)
}
