//! Name-keyed, alphabetically sorted collection of liabilities.

use fin_core::{cmp_names, names_match, Liability, LiabilityKind};
use rust_decimal::Decimal;
use serde::Serialize;

/// At most one entry per name (case-insensitive), kept sorted by name after
/// every structural change.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Ledger {
    entries: Vec<Liability>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Liability] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Liability> {
        self.position(name).map(|i| &self.entries[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| names_match(e.name(), name))
    }

    pub fn iter_kind(&self, kind: LiabilityKind) -> impl Iterator<Item = &Liability> {
        self.entries.iter().filter(move |e| e.kind() == kind)
    }

    pub fn total(&self) -> Decimal {
        self.entries.iter().map(Liability::cost).sum()
    }

    pub fn total_of(&self, kind: LiabilityKind) -> Decimal {
        self.iter_kind(kind).map(Liability::cost).sum()
    }

    /// Insert `entry`, or structurally replace the entry already holding its
    /// name. Returns the replaced entry.
    pub fn upsert(&mut self, entry: Liability) -> Option<Liability> {
        let previous = match self.position(entry.name()) {
            Some(i) => Some(std::mem::replace(&mut self.entries[i], entry)),
            None => {
                self.entries.push(entry);
                None
            }
        };
        self.sort();
        previous
    }

    /// Swap the entry named `name` for `entry`. If `entry` is renamed onto
    /// another existing name, that entry is dropped so names stay unique.
    /// Unknown names change nothing.
    pub fn replace(&mut self, name: &str, entry: Liability) -> Option<Liability> {
        let index = self.position(name)?;
        let previous = std::mem::replace(&mut self.entries[index], entry);
        let renamed_onto = self
            .entries
            .iter()
            .enumerate()
            .position(|(i, e)| i != index && names_match(e.name(), self.entries[index].name()));
        if let Some(dup) = renamed_onto {
            self.entries.remove(dup);
        }
        self.sort();
        Some(previous)
    }

    pub fn remove(&mut self, name: &str) -> Option<Liability> {
        let index = self.position(name)?;
        Some(self.entries.remove(index))
    }

    /// Stable, case-insensitive sort by name.
    pub(crate) fn sort(&mut self) {
        self.entries.sort_by(|a, b| cmp_names(a.name(), b.name()));
    }
}

impl FromIterator<Liability> for Ledger {
    fn from_iter<I: IntoIterator<Item = Liability>>(iter: I) -> Self {
        let mut ledger = Ledger::new();
        for entry in iter {
            ledger.upsert(entry);
        }
        ledger
    }
}
