//! Name tables used for procedural person generation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A list of candidate names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NameTable {
    /// First names drawn for male people.
    MaleFirstNames,
    /// First names drawn for female people.
    FemaleFirstNames,
    /// Family names.
    Surnames,
}

impl NameTable {
    pub const ALL: [NameTable; 3] = [
        NameTable::MaleFirstNames,
        NameTable::FemaleFirstNames,
        NameTable::Surnames,
    ];

    /// Backing table name in the name store.
    pub fn table_name(self) -> &'static str {
        match self {
            NameTable::MaleFirstNames => "MaleFirstNames",
            NameTable::FemaleFirstNames => "FemaleFirstNames",
            NameTable::Surnames => "Surnames",
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum NameLookupError {
    #[error("name store unavailable: {0}")]
    Unavailable(String),
}

/// Source of candidate names, keyed by table.
pub trait NameSource {
    fn names(&self, table: NameTable) -> Result<Vec<String>, NameLookupError>;
}

/// In-memory name lists, typically loaded once from the name store.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NamePool {
    #[serde(default)]
    pub male_first_names: Vec<String>,
    #[serde(default)]
    pub female_first_names: Vec<String>,
    #[serde(default)]
    pub surnames: Vec<String>,
}

impl NamePool {
    pub fn table(&self, table: NameTable) -> &[String] {
        match table {
            NameTable::MaleFirstNames => &self.male_first_names,
            NameTable::FemaleFirstNames => &self.female_first_names,
            NameTable::Surnames => &self.surnames,
        }
    }

    pub fn table_mut(&mut self, table: NameTable) -> &mut Vec<String> {
        match table {
            NameTable::MaleFirstNames => &mut self.male_first_names,
            NameTable::FemaleFirstNames => &mut self.female_first_names,
            NameTable::Surnames => &mut self.surnames,
        }
    }
}

impl NameSource for NamePool {
    fn names(&self, table: NameTable) -> Result<Vec<String>, NameLookupError> {
        Ok(self.table(table).to_vec())
    }
}
