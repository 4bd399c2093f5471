#![deny(warnings)]

//! Runtime for the finances game: the household aggregate, its ledger and
//! derived-entry reconciliation, scenario loading, person generation, and
//! the session that ties them together with change observers.

pub mod generate;
pub mod household;
pub mod ledger;
pub mod scenario;
pub mod session;
pub mod sync;

pub use generate::{generate_person, random_birth_date};
pub use household::Household;
pub use ledger::Ledger;
pub use scenario::{generate_household, LineItem, Scenario, ScenarioError};
pub use session::{Session, FALLBACK_FIRST_NAME};
pub use sync::{reconcile, ReconcileReport};
