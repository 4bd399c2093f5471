//! Homes, vehicles, and the closed [`Asset`] variant over them.

use crate::changes::{Changes, Field};
use crate::{names_match, Condition, HomeStatus, VehicleStatus};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Asset category; each one owns two derived ledger entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetCategory {
    /// Houses and apartments.
    Home,
    /// Cars and other vehicles.
    Vehicle,
}

impl AssetCategory {
    pub const ALL: [AssetCategory; 2] = [AssetCategory::Home, AssetCategory::Vehicle];

    pub fn label(self) -> &'static str {
        match self {
            AssetCategory::Home => "Home",
            AssetCategory::Vehicle => "Vehicle",
        }
    }

    /// Ledger name of the category's insurance total.
    pub fn insurance_entry(self) -> &'static str {
        match self {
            AssetCategory::Home => "Home Insurance",
            AssetCategory::Vehicle => "Vehicle Insurance",
        }
    }

    /// Ledger name of the category's maintenance total.
    pub fn maintenance_entry(self) -> &'static str {
        match self {
            AssetCategory::Home => "Home Maintenance",
            AssetCategory::Vehicle => "Vehicle Maintenance",
        }
    }

    /// Household field notified when the category's list changes.
    pub fn field(self) -> Field {
        match self {
            AssetCategory::Home => Field::Homes,
            AssetCategory::Vehicle => Field::Vehicles,
        }
    }
}

/// A place to live.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Home {
    name: String,
    value: Decimal,
    year: i32,
    condition: Condition,
    #[serde(default)]
    payment: Decimal,
    status: HomeStatus,
}

impl Home {
    pub fn new(
        name: impl Into<String>,
        value: Decimal,
        year: i32,
        condition: Condition,
        payment: Decimal,
        status: HomeStatus,
    ) -> Self {
        Self {
            name: name.into(),
            value,
            year,
            condition,
            payment,
            status,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn value(&self) -> Decimal {
        self.value
    }
    pub fn year(&self) -> i32 {
        self.year
    }
    pub fn condition(&self) -> Condition {
        self.condition
    }
    /// Monthly rent or mortgage payment.
    pub fn payment(&self) -> Decimal {
        self.payment
    }
    pub fn status(&self) -> HomeStatus {
        self.status
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Changes {
        self.name = name.into();
        vec![Field::Name]
    }
    pub fn set_value(&mut self, value: Decimal) -> Changes {
        self.value = value;
        vec![Field::Value]
    }
    pub fn set_year(&mut self, year: i32) -> Changes {
        self.year = year;
        vec![Field::Year]
    }
    pub fn set_condition(&mut self, condition: Condition) -> Changes {
        self.condition = condition;
        vec![Field::Condition]
    }
    pub fn set_payment(&mut self, payment: Decimal) -> Changes {
        self.payment = payment;
        vec![Field::Payment]
    }
    pub fn set_status(&mut self, status: HomeStatus) -> Changes {
        self.status = status;
        vec![Field::Status]
    }
}

/// Something to drive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    name: String,
    value: Decimal,
    year: i32,
    condition: Condition,
    #[serde(default)]
    payment: Decimal,
    status: VehicleStatus,
    make: String,
    model: String,
}

impl Vehicle {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        value: Decimal,
        year: i32,
        condition: Condition,
        payment: Decimal,
        status: VehicleStatus,
        make: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value,
            year,
            condition,
            payment,
            status,
            make: make.into(),
            model: model.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn value(&self) -> Decimal {
        self.value
    }
    pub fn year(&self) -> i32 {
        self.year
    }
    pub fn condition(&self) -> Condition {
        self.condition
    }
    /// Monthly finance or lease payment.
    pub fn payment(&self) -> Decimal {
        self.payment
    }
    pub fn status(&self) -> VehicleStatus {
        self.status
    }
    pub fn make(&self) -> &str {
        &self.make
    }
    pub fn model(&self) -> &str {
        &self.model
    }

    /// "2012 Mazda Mazda 3".
    pub fn year_make_model(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Changes {
        self.name = name.into();
        vec![Field::Name]
    }
    pub fn set_value(&mut self, value: Decimal) -> Changes {
        self.value = value;
        vec![Field::Value]
    }
    pub fn set_year(&mut self, year: i32) -> Changes {
        self.year = year;
        vec![Field::Year, Field::YearMakeModel]
    }
    pub fn set_condition(&mut self, condition: Condition) -> Changes {
        self.condition = condition;
        vec![Field::Condition]
    }
    pub fn set_payment(&mut self, payment: Decimal) -> Changes {
        self.payment = payment;
        vec![Field::Payment]
    }
    pub fn set_status(&mut self, status: VehicleStatus) -> Changes {
        self.status = status;
        vec![Field::Status]
    }
    pub fn set_make(&mut self, make: impl Into<String>) -> Changes {
        self.make = make.into();
        vec![Field::Make, Field::YearMakeModel]
    }
    pub fn set_model(&mut self, model: impl Into<String>) -> Changes {
        self.model = model.into();
        vec![Field::Model, Field::YearMakeModel]
    }
}

/// Anything the household owns that generates insurance and maintenance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Asset {
    Home(Home),
    Vehicle(Vehicle),
}

impl Asset {
    pub fn category(&self) -> AssetCategory {
        match self {
            Asset::Home(_) => AssetCategory::Home,
            Asset::Vehicle(_) => AssetCategory::Vehicle,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Asset::Home(h) => h.name(),
            Asset::Vehicle(v) => v.name(),
        }
    }

    pub fn value(&self) -> Decimal {
        match self {
            Asset::Home(h) => h.value(),
            Asset::Vehicle(v) => v.value(),
        }
    }

    pub fn year(&self) -> i32 {
        match self {
            Asset::Home(h) => h.year(),
            Asset::Vehicle(v) => v.year(),
        }
    }

    pub fn condition(&self) -> Condition {
        match self {
            Asset::Home(h) => h.condition(),
            Asset::Vehicle(v) => v.condition(),
        }
    }

    pub fn payment(&self) -> Decimal {
        match self {
            Asset::Home(h) => h.payment(),
            Asset::Vehicle(v) => v.payment(),
        }
    }
}

impl From<Home> for Asset {
    fn from(h: Home) -> Self {
        Asset::Home(h)
    }
}

impl From<Vehicle> for Asset {
    fn from(v: Vehicle) -> Self {
        Asset::Vehicle(v)
    }
}

/// Structural equality on every field, name compared case-insensitively.
pub fn same_home(left: &Home, right: &Home) -> bool {
    names_match(&left.name, &right.name)
        && left.value == right.value
        && left.year == right.year
        && left.condition == right.condition
        && left.payment == right.payment
        && left.status == right.status
}

/// Structural equality on every field, name compared case-insensitively.
pub fn same_vehicle(left: &Vehicle, right: &Vehicle) -> bool {
    names_match(&left.name, &right.name)
        && left.value == right.value
        && left.year == right.year
        && left.condition == right.condition
        && left.payment == right.payment
        && left.status == right.status
        && left.make == right.make
        && left.model == right.model
}

/// Structural equality across the asset variants; different variants never match.
pub fn same_asset(left: &Asset, right: &Asset) -> bool {
    match (left, right) {
        (Asset::Home(a), Asset::Home(b)) => same_home(a, b),
        (Asset::Vehicle(a), Asset::Vehicle(b)) => same_vehicle(a, b),
        _ => false,
    }
}
