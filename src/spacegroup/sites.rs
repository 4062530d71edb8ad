/* ************************************************************************ **
** This file is part of spgen, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::{Error, Result, FracOp};

use spgen_structure::V3;

/// Absolute tolerance, in fractional units, under which two sites are
/// considered to be the same site.
pub const SYMPREC: f64 = 1e-3;

/// What to do when two different basis kinds generate the same site.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum OnDuplicates {
    /// The site keeps the first kind that generated it.
    Keep,
    /// The site takes the most recent kind that generated it.
    Replace,
    /// Like `Keep`, but log a warning.
    Warn,
    /// Fail with `Error::DuplicateSite`.
    Error,
}

impl Default for OnDuplicates {
    fn default() -> Self { OnDuplicates::Keep }
}

/// Sites of a unit cell, along with the index of the basis
/// position that generated each one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EquivalentSites {
    pub sites: Vec<V3>,
    pub kinds: Vec<usize>,
}

impl EquivalentSites {
    pub fn len(&self) -> usize { self.sites.len() }
    pub fn is_empty(&self) -> bool { self.sites.is_empty() }
}

/// Apply every operation to every basis position, keeping each distinct
/// site once, in the order in which they were first found.
///
/// Sites are compared component by component; the comparison is not a
/// distance.  A difference of one whole cell along an axis also counts as
/// a match, so that a position reduced to `1.0 - ε` is identified with
/// one at `0.0`.
pub fn equivalent_sites(
    basis: &[V3],
    ops: &[FracOp],
    on_duplicates: OnDuplicates,
) -> Result<EquivalentSites> {
    let mut out = EquivalentSites::default();

    for (kind, position) in basis.iter().enumerate() {
        let num_before = out.len();
        for op in ops {
            let candidate = op.apply(position);

            let existing = out.sites.iter().position(|site| same_site(site, &candidate));
            let index = match existing {
                None => {
                    out.sites.push(candidate);
                    out.kinds.push(kind);
                    continue;
                },
                Some(index) => index,
            };

            let existing_kind = out.kinds[index];
            if existing_kind == kind {
                continue;
            }
            match on_duplicates {
                OnDuplicates::Keep => {},
                OnDuplicates::Replace => out.kinds[index] = kind,
                OnDuplicates::Warn => {
                    warn!(
                        "site {:?} from basis position {} was already generated by basis position {}",
                        candidate, kind, existing_kind,
                    );
                },
                OnDuplicates::Error => {
                    return Err(Error::DuplicateSite { kind, existing_kind, site: candidate });
                },
            }
        }
        trace!("basis position {} ({:?}) generated {} new sites", kind, position, out.len() - num_before);
    }
    debug!("{} basis positions expanded into {} sites", basis.len(), out.len());
    Ok(out)
}

fn same_site(a: &V3, b: &V3) -> bool {
    (0..3).all(|k| {
        let d = (a[k] - b[k]).abs();
        d < SYMPREC || (d - 1.0).abs() < SYMPREC
    })
}
