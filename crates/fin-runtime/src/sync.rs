//! Derived-ledger synchronization.
//!
//! Each asset category owns two bills in the household ledger,
//! `"<Category> Insurance"` and `"<Category> Maintenance"`, whose costs are the
//! category's summed charges. [`reconcile`] rewrites those two entries from
//! freshly computed totals and leaves every other entry alone.

use crate::ledger::Ledger;
use fin_core::{AssetCategory, Liability};
use fin_econ::Charges;
use serde::Serialize;

/// What a reconciliation did to the ledger.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ReconcileReport {
    /// Entries that did not exist before.
    pub inserted: Vec<String>,
    /// Entries rewritten in place, whether or not the cost moved.
    pub updated: Vec<String>,
    /// Entries dropped because the category is empty.
    pub removed: Vec<String>,
}

impl ReconcileReport {
    /// True when an entry appeared or disappeared.
    pub fn is_structural(&self) -> bool {
        !self.inserted.is_empty() || !self.removed.is_empty()
    }
}

/// Bring `category`'s derived entries in line with `charges`.
///
/// `charges` is `None` when the category holds no assets; both derived
/// entries are then removed if present. Otherwise each derived entry is
/// structurally replaced (matching its name case-insensitively) or inserted.
/// The ledger is re-sorted afterwards. Running it twice with the same charges
/// leaves names, costs, and order unchanged.
pub fn reconcile(
    ledger: &mut Ledger,
    category: AssetCategory,
    charges: Option<Charges>,
) -> ReconcileReport {
    let mut report = ReconcileReport::default();
    let entries = [category.insurance_entry(), category.maintenance_entry()];
    match charges {
        Some(charges) => {
            for (name, cost) in entries.into_iter().zip([charges.insurance, charges.maintenance]) {
                match ledger.upsert(Liability::bill(name, cost)) {
                    Some(_) => report.updated.push(name.to_string()),
                    None => report.inserted.push(name.to_string()),
                }
            }
        }
        None => {
            for name in entries {
                if ledger.remove(name).is_some() {
                    report.removed.push(name.to_string());
                }
            }
        }
    }
    ledger.sort();
    report
}
