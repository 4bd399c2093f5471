//! Starting-state configuration loaded from YAML.

use crate::household::Household;
use chrono::NaiveDate;
use fin_core::{
    validate_asset, validate_liabilities, validate_person, Asset, Condition, EducationLevel, Home,
    HomeStatus, Job, Liability, Person, ValidationError, Vehicle, VehicleStatus, WorkSchedule,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("reading scenario: {0}")]
    Io(#[from] std::io::Error),
    #[error("parsing scenario: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid scenario: {0}")]
    Invalid(#[from] ValidationError),
}

/// A named monthly cost as written in a scenario file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub cost: Decimal,
}

impl LineItem {
    fn new(name: &str, cost: Decimal) -> Self {
        Self {
            name: name.to_string(),
            cost,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Date the game starts on; ages and generated birth dates use it.
    pub start_date: NaiveDate,
    pub money: Decimal,
    #[serde(default)]
    pub seed: u64,
    /// The first person is the household's primary person.
    pub people: Vec<Person>,
    #[serde(default)]
    pub expenses: Vec<LineItem>,
    #[serde(default)]
    pub bills: Vec<LineItem>,
    #[serde(default)]
    pub homes: Vec<Home>,
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
}

impl Default for Scenario {
    fn default() -> Self {
        let born = NaiveDate::from_ymd_opt(1995, 1, 1).unwrap_or_default();
        let quincy = Person::new(
            "Quincy",
            "Quirk",
            born,
            EducationLevel::HighSchool,
            vec![
                Job::hourly(
                    "Teach Students Today!",
                    "Tutor",
                    EducationLevel::HighSchool,
                    Decimal::new(10, 0),
                    WorkSchedule::full_time(),
                ),
                Job::hourly(
                    "McDonald's",
                    "Cook",
                    EducationLevel::None,
                    Decimal::new(8, 0),
                    WorkSchedule::full_time(),
                ),
            ],
        );
        Self {
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
            money: Decimal::new(1_253_434, 2),
            seed: 42,
            people: vec![quincy],
            expenses: vec![
                LineItem::new("Car Insurance", Decimal::new(13562, 2)),
                LineItem::new("Rent", Decimal::new(350, 0)),
                LineItem::new("Cell Phone", Decimal::new(50, 0)),
            ],
            bills: Vec::new(),
            homes: vec![Home::new(
                "My Small Apartment",
                Decimal::new(50_000, 0),
                2008,
                Condition::Good,
                Decimal::new(750, 0),
                HomeStatus::Rent,
            )],
            vehicles: vec![Vehicle::new(
                "Mazda, Bro!",
                Decimal::new(6000, 0),
                2012,
                Condition::Good,
                Decimal::ZERO,
                VehicleStatus::Own,
                "Mazda",
                "Mazda 3",
            )],
        }
    }
}

impl Scenario {
    pub fn from_yaml_str(text: &str) -> Result<Self, ScenarioError> {
        let scenario: Scenario = serde_yaml::from_str(text)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let scenario = Self::from_yaml_str(&text)?;
        info!(path = %path.display(), people = scenario.people.len(), "scenario loaded");
        Ok(scenario)
    }

    /// Expenses then bills, as ledger lines.
    pub fn liabilities(&self) -> Vec<Liability> {
        let expenses = self
            .expenses
            .iter()
            .map(|l| Liability::expense(l.name.clone(), l.cost));
        let bills = self
            .bills
            .iter()
            .map(|l| Liability::bill(l.name.clone(), l.cost));
        expenses.chain(bills).collect()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.people.is_empty() {
            return Err(ValidationError::NoPeople);
        }
        if self.money < Decimal::ZERO {
            return Err(ValidationError::NegativeMoney("starting money".to_string()));
        }
        for person in &self.people {
            validate_person(person)?;
        }
        validate_liabilities(&self.liabilities())?;
        for home in &self.homes {
            validate_asset(&Asset::Home(home.clone()))?;
        }
        for vehicle in &self.vehicles {
            validate_asset(&Asset::Vehicle(vehicle.clone()))?;
        }
        Ok(())
    }
}

/// Build the scenario's household through the household's own mutation
/// API, then discard the construction change log.
pub fn generate_household(scenario: &Scenario) -> Result<Household, ValidationError> {
    scenario.validate()?;
    let mut people = scenario.people.iter().cloned();
    let founder = people.next().ok_or(ValidationError::NoPeople)?;
    let mut household = Household::new(founder);
    for person in people {
        household.add_person(person);
    }
    for entry in scenario.liabilities() {
        household.add_liability(entry);
    }
    for home in &scenario.homes {
        household.add_home(home.clone());
    }
    for vehicle in &scenario.vehicles {
        household.add_vehicle(vehicle.clone());
    }
    household.set_money(scenario.money);
    household.drain_changes();
    info!(
        people = household.people().len(),
        homes = household.homes().len(),
        vehicles = household.vehicles().len(),
        ledger = household.ledger().len(),
        "household generated"
    );
    Ok(household)
}
