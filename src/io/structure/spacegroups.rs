/* ************************************************************************ **
** This file is part of spgen, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Loading of symmetry tables from pre-parsed YAML or JSON data.
//!
//! A document is a list of entries:
//!
//! ```yaml
//! - number: 229
//!   setting: 1                # default 1
//!   symbol: I m -3 m          # optional
//!   centrosymmetric: true     # default false
//!   rotations: [[[1, 0, 0], [0, 1, 0], [0, 0, 1]], ...]
//!   translations: [[0, 0, 0], ...]
//!   subtranslations: [[0, 0, 0], [0.5, 0.5, 0.5]]   # default [[0, 0, 0]]
//! ```

use crate::FailResult;

use spgen_spacegroup::{SpaceGroupEntry, SpaceGroupId, SymmetryTable};

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

mod cereal {
    use spgen_structure::{V3, M33};

    #[derive(Debug, Clone)]
    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "kebab-case")]
    pub struct Entry {
        pub number: u32,
        #[serde(default = "defaults::setting")]
        pub setting: u32,
        #[serde(default)]
        pub symbol: Option<String>,
        #[serde(default)]
        pub centrosymmetric: bool,
        pub rotations: Vec<M33>,
        pub translations: Vec<V3>,
        #[serde(default = "defaults::subtranslations")]
        pub subtranslations: Vec<V3>,
    }

    mod defaults {
        use super::*;

        pub fn setting() -> u32 { 1 }
        pub fn subtranslations() -> Vec<V3> { vec![[0.0; 3]] }
    }
}

pub fn load_yaml(mut file: impl Read) -> FailResult<SymmetryTable>
{ _load_yaml(&mut file) }

// Monomorphized to ensure YAML parsing code is generated in this crate
fn _load_yaml(file: &mut dyn Read) -> FailResult<SymmetryTable>
{
    let cereal = serde_yaml::from_reader(file)?;
    table_from_cereal(cereal)
}

pub fn load_json(mut file: impl Read) -> FailResult<SymmetryTable>
{ _load_json(&mut file) }

// Monomorphized to ensure JSON parsing code is generated in this crate
fn _load_json(file: &mut dyn Read) -> FailResult<SymmetryTable>
{
    let cereal = serde_json::from_reader(file)?;
    table_from_cereal(cereal)
}

/// Load a table from a file, as JSON if the extension is `.json`
/// and as YAML otherwise.
pub fn load_path(path: impl AsRef<Path>) -> FailResult<SymmetryTable>
{ _load_path(path.as_ref()) }

fn _load_path(path: &Path) -> FailResult<SymmetryTable>
{
    let file = File::open(path).map_err(|e| format_err!("{}: {}", path.display(), e))?;
    let file = BufReader::new(file);
    let table = match path.extension().and_then(|s| s.to_str()) {
        Some("json") => load_json(file)?,
        _ => load_yaml(file)?,
    };
    debug!("Loaded {} space group settings from {}", table.len(), path.display());
    Ok(table)
}

fn table_from_cereal(entries: Vec<cereal::Entry>) -> FailResult<SymmetryTable>
{
    let entries = entries.into_iter()
        .map(|entry| -> Result<_, spgen_spacegroup::Error> {
            let cereal::Entry {
                number, setting, symbol, centrosymmetric,
                rotations, translations, subtranslations,
            } = entry;
            let id = SpaceGroupId::new(number, setting);
            let entry = SpaceGroupEntry::new(id, rotations, translations, subtranslations, centrosymmetric)?;
            Ok(match symbol {
                Some(symbol) => entry.with_symbol(symbol),
                None => entry,
            })
        })
        .collect::<Result<Vec<SpaceGroupEntry>, _>>()?;

    Ok(SymmetryTable::from_entries(entries)?)
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use spgen_spacegroup::Error;

    const P21_YAML: &'static str = "
- number: 4
  symbol: P 1 21 1
  rotations:
  - [[1, 0, 0], [0, 1, 0], [0, 0, 1]]
  - [[-1, 0, 0], [0, 1, 0], [0, 0, -1]]
  translations:
  - [0, 0, 0]
  - [0, 0.5, 0]
- number: 2
  setting: 1
  centrosymmetric: true
  rotations: [[[1, 0, 0], [0, 1, 0], [0, 0, 1]]]
  translations: [[0, 0, 0]]
  subtranslations: [[0, 0, 0]]
";

    #[test]
    fn yaml() {
        let table = load_yaml(P21_YAML.as_bytes()).unwrap();
        assert_eq!(table.len(), 2);

        let p21 = table.lookup(4, 1).unwrap();
        assert_eq!(p21.symbol(), Some("P 1 21 1"));
        assert!(!p21.is_centrosymmetric());
        assert_eq!(p21.subtranslations(), &[[0.0; 3]]);
        assert_eq!(p21.translations()[1], [0.0, 0.5, 0.0]);
        assert_eq!(p21.rotations()[1][2], [0.0, 0.0, -1.0]);

        let p_1 = table.lookup(2, 1).unwrap();
        assert_eq!(p_1.symbol(), None);
        assert_eq!(p_1.num_ops(), 2);
    }

    #[test]
    fn json() {
        let json = r#"[
            {"number": 1, "rotations": [[[1, 0, 0], [0, 1, 0], [0, 0, 1]]], "translations": [[0, 0, 0]]},
            {"number": 1, "setting": 2, "rotations": [[[1, 0, 0], [0, 1, 0], [0, 0, 1]]], "translations": [[0, 0, 0]]}
        ]"#;
        let table = load_json(json.as_bytes()).unwrap();
        assert_eq!(table.ids(), vec![SpaceGroupId::new(1, 1), SpaceGroupId::new(1, 2)]);
    }

    #[test]
    fn inconsistent_entry() {
        let yaml = "
- number: 3
  rotations: [[[1, 0, 0], [0, 1, 0], [0, 0, 1]], [[-1, 0, 0], [0, 1, 0], [0, 0, -1]]]
  translations: [[0, 0, 0]]
";
        let err = load_yaml(yaml.as_bytes()).unwrap_err();
        match err.downcast::<Error>() {
            Ok(Error::StructuralInconsistency(_)) => {},
            r => panic!("{:?}", r),
        }
    }

    #[test]
    fn malformed() {
        assert!(load_yaml("- number: 3\n  rotations: 4\n".as_bytes()).is_err());
        assert!(load_json("{}".as_bytes()).is_err());
    }
}
