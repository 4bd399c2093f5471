//! Typed change notifications.
//!
//! Setters on domain entities return the list of [`Field`]s they changed,
//! derived display fields included. Aggregates wrap those into
//! [`ChangeEvent`]s tagged with the [`Subject`] that owns the field.

use serde::Serialize;

/// A named, externally visible field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Field {
    // Person
    FirstName,
    LastName,
    /// Derived "First Last" display name (also an asset's or liability's name).
    Name,
    /// Derived "Last, First" display name.
    LastFirst,
    BirthDate,
    EducationLevel,
    Jobs,
    // Asset
    Value,
    Year,
    Condition,
    Payment,
    Status,
    Make,
    Model,
    /// Derived "Year Make Model" display string of a vehicle.
    YearMakeModel,
    // Liability
    Cost,
    // Household
    People,
    Ledger,
    Homes,
    Vehicles,
    Money,
}

/// Fields changed by a single mutation, in emission order.
pub type Changes = Vec<Field>;

/// Owner of a changed field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Subject {
    /// The household's own fields and collections.
    Household,
    /// Person at this position in the household's people list.
    Person(usize),
}

/// One notification: `field` on `subject` changed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChangeEvent {
    pub subject: Subject,
    pub field: Field,
}

impl ChangeEvent {
    pub fn household(field: Field) -> Self {
        Self {
            subject: Subject::Household,
            field,
        }
    }

    pub fn person(index: usize, field: Field) -> Self {
        Self {
            subject: Subject::Person(index),
            field,
        }
    }
}

/// Receiver of change notifications.
pub trait ChangeSink {
    fn notify(&mut self, event: &ChangeEvent);
}

impl<F: FnMut(&ChangeEvent)> ChangeSink for F {
    fn notify(&mut self, event: &ChangeEvent) {
        self(event)
    }
}
