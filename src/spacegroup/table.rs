use crate::{Error, Result};

use spgen_structure::{V3, M33};

use std::collections::HashMap;
use std::fmt;

/// Key of a space group in a [`SymmetryTable`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpaceGroupId {
    /// International table number, `1..=230`.
    pub number: u32,
    /// Origin choice or axis setting, conventionally 1 or 2.
    pub setting: u32,
}

impl SpaceGroupId {
    pub fn new(number: u32, setting: u32) -> Self
    { SpaceGroupId { number, setting } }
}

impl fmt::Display for SpaceGroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { write!(f, "{}:{}", self.number, self.setting) }
}

/// Symmetry data for one setting of a space group.
///
/// Rotations and translations are paired by index; each pair is one
/// operation of the group modulo centering and inversion.  A constructed
/// entry always has as many translations as rotations.
#[derive(Debug, Clone, PartialEq)]
pub struct SpaceGroupEntry {
    id: SpaceGroupId,
    symbol: Option<String>,
    rotations: Vec<M33>,
    translations: Vec<V3>,
    subtranslations: Vec<V3>,
    centrosymmetric: bool,
}

impl SpaceGroupEntry {
    pub fn new(
        id: SpaceGroupId,
        rotations: Vec<M33>,
        translations: Vec<V3>,
        subtranslations: Vec<V3>,
        centrosymmetric: bool,
    ) -> Result<Self> {
        let inconsistent = |msg: String| Err(Error::StructuralInconsistency(format!("space group {}: {}", id, msg)));

        if id.number == 0 || id.setting == 0 {
            return inconsistent("number and setting must be positive".to_string());
        }
        if rotations.len() != translations.len() {
            return inconsistent(format!(
                "{} rotations but {} translations",
                rotations.len(), translations.len(),
            ));
        }
        if rotations.is_empty() {
            return inconsistent("no rotations".to_string());
        }
        if subtranslations.is_empty() {
            return inconsistent("no subtranslations".to_string());
        }
        Ok(SpaceGroupEntry { id, symbol: None, rotations, translations, subtranslations, centrosymmetric })
    }

    /// Attach a Hermann-Mauguin symbol.
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self
    { self.symbol = Some(symbol.into()); self }

    pub fn id(&self) -> SpaceGroupId { self.id }
    pub fn number(&self) -> u32 { self.id.number }
    pub fn setting(&self) -> u32 { self.id.setting }
    pub fn symbol(&self) -> Option<&str> { self.symbol.as_ref().map(|s| &s[..]) }
    pub fn rotations(&self) -> &[M33] { &self.rotations }
    pub fn translations(&self) -> &[V3] { &self.translations }
    pub fn subtranslations(&self) -> &[V3] { &self.subtranslations }
    pub fn is_centrosymmetric(&self) -> bool { self.centrosymmetric }

    /// Number of operations produced by `symmetry_ops`.
    pub fn num_ops(&self) -> usize {
        let parities = if self.centrosymmetric { 2 } else { 1 };
        parities * self.subtranslations.len() * self.rotations.len()
    }
}

/// Read-only lookup of space group data by number and setting.
///
/// Built once and shared by reference between any number of cell
/// constructions.
#[derive(Debug, Clone, Default)]
pub struct SymmetryTable {
    entries: HashMap<SpaceGroupId, SpaceGroupEntry>,
}

impl SymmetryTable {
    pub fn new() -> Self
    { Default::default() }

    pub fn from_entries<I>(entries: I) -> Result<Self>
    where I: IntoIterator<Item=SpaceGroupEntry>,
    {
        let mut table = SymmetryTable::new();
        for entry in entries {
            table.insert(entry)?;
        }
        Ok(table)
    }

    /// Add an entry.  Fails if its number and setting are already present.
    pub fn insert(&mut self, entry: SpaceGroupEntry) -> Result<()> {
        let id = entry.id();
        if self.entries.contains_key(&id) {
            return Err(Error::StructuralInconsistency(format!("duplicate entry for space group {}", id)));
        }
        self.entries.insert(id, entry);
        Ok(())
    }

    pub fn lookup(&self, number: u32, setting: u32) -> Result<&SpaceGroupEntry> {
        self.get(SpaceGroupId::new(number, setting))
            .ok_or(Error::UnknownSpaceGroup { number, setting })
    }

    pub fn get(&self, id: SpaceGroupId) -> Option<&SpaceGroupEntry>
    { self.entries.get(&id) }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// All keys, sorted.
    pub fn ids(&self) -> Vec<SpaceGroupId> {
        let mut ids: Vec<_> = self.entries.keys().cloned().collect();
        ids.sort();
        ids
    }
}
