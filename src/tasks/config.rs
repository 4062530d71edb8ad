/* ************************************************************************ **
** This file is part of spgen, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! The crystal description read by `spgen-crystal`.
//!
//! ```yaml
//! spacegroup: { number: 225, setting: 1 }
//! basis:
//!   - { symbol: Na, frac: [0.0, 0.0, 0.0] }
//!   - { symbol: Cl, frac: [0.5, 0.5, 0.5] }
//! cellpar: [5.64, 5.64, 5.64, 90, 90, 90]
//! orientation: { a-direction: [1, 0, 0], ab-normal: [0, 0, 1] }
//! supercell: [2, 2, 2]
//! on-duplicates: warn
//! masses: { Na: 23.0 }
//! ```
//!
//! Only `spacegroup`, `basis` and `cellpar` are required.

// NOTE: Please use the YamlRead trait rather than serde_yaml::from_reader,
//       so that unrecognized keys are reported.

use spgen_structure::{V3, CellParams, Orientation};
use spgen_spacegroup::{self as spacegroup, Crystal, SpaceGroupId};

use std::collections::HashMap;
use std::io::Read;

/// Provides an alternative to serde_yaml::from_reader that warns about
/// config keys that were not used.
pub trait YamlRead: for <'de> serde::Deserialize<'de> {
    fn from_reader(mut r: impl Read) -> Result<Self, serde_yaml::Error>
    { YamlRead::from_dyn_reader(&mut r) }

    fn from_dyn_reader(r: &mut dyn Read) -> Result<Self, serde_yaml::Error> {
        // serde_ignored needs a Deserializer, and serde_yaml::Value is one.
        Self::from_value(value_from_dyn_reader(r)?)
    }

    fn from_value(value: serde_yaml::Value) -> Result<Self, serde_yaml::Error>;
}

macro_rules! derive_yaml_read {
    ($Type:ty) => {
        impl YamlRead for $Type {
            fn from_value(value: serde_yaml::Value) -> Result<$Type, serde_yaml::Error> {
                serde_ignored::deserialize(
                    value,
                    |path| warn!("Unused config item (possible typo?): {}", path),
                )
            }
        }
    };
}

derive_yaml_read!{serde_yaml::Value}
derive_yaml_read!{Settings}

// (this exists solely for codegen reasons)
fn value_from_dyn_reader(r: &mut dyn Read) -> Result<serde_yaml::Value, serde_yaml::Error>
{ serde_yaml::from_reader(r) }

#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    pub spacegroup: SpaceGroup,

    /// Symmetrically distinct sites.  Order matters; it determines
    /// the order of atoms in the output.
    pub basis: Vec<BasisSite>,

    /// `[a, b, c, alpha, beta, gamma]`, lengths in angstrom, angles in degrees.
    pub cellpar: [f64; 6],

    #[serde(default)]
    pub orientation: OrientationSettings,

    /// Number of unit cell images along each lattice vector.
    #[serde(default = "defaults::supercell")]
    pub supercell: [i64; 3],

    #[serde(default)]
    pub on_duplicates: OnDuplicates,

    /// Masses by symbol, taking priority over the periodic table.
    #[serde(default)]
    pub masses: HashMap<String, f64>,
}

#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct SpaceGroup {
    pub number: u32,
    #[serde(default = "defaults::setting")]
    pub setting: u32,
}

#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct BasisSite {
    pub symbol: String,
    /// Fractional coordinates.
    pub frac: V3,
}

#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct OrientationSettings {
    /// Direction of the first lattice vector.
    ///
    /// Default: `[1, 0, 0]`, or `[0, 0, 1]` if that is parallel to `ab-normal`.
    #[serde(default)]
    pub a_direction: Option<V3>,

    /// Normal to the plane of the first two lattice vectors.  Default: `[0, 0, 1]`.
    #[serde(default)]
    pub ab_normal: Option<V3>,
}

#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum OnDuplicates { Keep, Replace, Warn, Error }

impl Default for OnDuplicates {
    fn default() -> Self { OnDuplicates::Keep }
}

mod defaults {
    pub fn setting() -> u32 { 1 }
    pub fn supercell() -> [i64; 3] { [1, 1, 1] }
}

impl From<OnDuplicates> for spacegroup::OnDuplicates {
    fn from(x: OnDuplicates) -> Self {
        match x {
            OnDuplicates::Keep => spacegroup::OnDuplicates::Keep,
            OnDuplicates::Replace => spacegroup::OnDuplicates::Replace,
            OnDuplicates::Warn => spacegroup::OnDuplicates::Warn,
            OnDuplicates::Error => spacegroup::OnDuplicates::Error,
        }
    }
}

impl OrientationSettings {
    pub fn resolve(&self) -> Orientation {
        match (self.a_direction, self.ab_normal) {
            (None, None) => Orientation::default(),
            (None, Some(normal)) => Orientation::from_ab_normal(normal),
            (Some(a), None) => Orientation::new(a, Orientation::default().ab_normal),
            (Some(a), Some(normal)) => Orientation::new(a, normal),
        }
    }
}

impl Settings {
    pub fn crystal(&self) -> Crystal {
        let SpaceGroup { number, setting } = self.spacegroup;
        let basis = self.basis.iter().map(|site| (site.symbol.clone(), site.frac)).collect();
        Crystal::new(SpaceGroupId::new(number, setting), basis, CellParams::from(self.cellpar))
            .with_orientation(self.orientation.resolve())
            .with_on_duplicates(self.on_duplicates.into())
    }
}
