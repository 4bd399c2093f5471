//! Ledger lines: recurring costs owed by the household.

use crate::changes::{Changes, Field};
use crate::names_match;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Expenses vary month to month (food, clothing); bills are fixed
/// (insurance, utilities). Derived asset charges are bills.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LiabilityKind {
    /// Variable cost entered by the player.
    Expense,
    /// Fixed cost, including every derived asset charge.
    Bill,
}

/// A named monthly cost. The name is the entry's key within a ledger.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Liability {
    kind: LiabilityKind,
    name: String,
    cost: Decimal,
}

impl Liability {
    pub fn new(kind: LiabilityKind, name: impl Into<String>, cost: Decimal) -> Self {
        Self {
            kind,
            name: name.into(),
            cost,
        }
    }

    pub fn expense(name: impl Into<String>, cost: Decimal) -> Self {
        Self::new(LiabilityKind::Expense, name, cost)
    }

    pub fn bill(name: impl Into<String>, cost: Decimal) -> Self {
        Self::new(LiabilityKind::Bill, name, cost)
    }

    pub fn kind(&self) -> LiabilityKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cost(&self) -> Decimal {
        self.cost
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Changes {
        self.name = name.into();
        vec![Field::Name]
    }

    pub fn set_cost(&mut self, cost: Decimal) -> Changes {
        self.cost = cost;
        vec![Field::Cost]
    }
}

/// Structural equality: same kind, same cost, names equal ignoring case.
pub fn same_liability(left: &Liability, right: &Liability) -> bool {
    left.kind == right.kind && left.cost == right.cost && names_match(&left.name, &right.name)
}
