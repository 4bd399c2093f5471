#![deny(warnings)]

//! Core domain models and invariants for the finances game.
//!
//! This crate defines the serializable entities a household is built from
//! (people, jobs, homes, vehicles, ledger lines) together with their mutation
//! APIs, the typed change notifications those APIs emit, and validation
//! helpers used when loading starting scenarios.

pub mod asset;
pub mod changes;
pub mod job;
pub mod liability;
pub mod names;
pub mod person;

pub use asset::{same_asset, same_home, same_vehicle, Asset, AssetCategory, Home, Vehicle};
pub use changes::{ChangeEvent, ChangeSink, Changes, Field, Subject};
pub use job::{same_job, CompensationMode, Job, Wages, WorkSchedule};
pub use liability::{same_liability, Liability, LiabilityKind};
pub use names::{NameLookupError, NamePool, NameSource, NameTable};
pub use person::Person;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use thiserror::Error;

/// Highest level of education a person has achieved.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum EducationLevel {
    /// No formal education.
    #[default]
    None,
    /// Enrolled in school.
    CurrentStudent,
    /// Left high school without finishing.
    Dropout,
    /// High school diploma.
    HighSchool,
    /// Trade or vocational certificate.
    TradeSchool,
    /// Associate degree.
    Associate,
    /// Bachelor's degree.
    Bachelor,
    /// Master's degree.
    Master,
    /// Doctoral degree.
    Doctorate,
}

impl EducationLevel {
    pub const ALL: [EducationLevel; 9] = [
        EducationLevel::None,
        EducationLevel::CurrentStudent,
        EducationLevel::Dropout,
        EducationLevel::HighSchool,
        EducationLevel::TradeSchool,
        EducationLevel::Associate,
        EducationLevel::Bachelor,
        EducationLevel::Master,
        EducationLevel::Doctorate,
    ];
}

/// Physical condition of a home or vehicle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    /// Like new.
    Excellent,
    /// Normal wear.
    Good,
    /// Needs some repairs.
    Fair,
    /// Needs major repairs.
    Poor,
    /// Barely usable.
    Terrible,
}

/// Ownership status of a home.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HomeStatus {
    /// Rented; the tenant pays reduced maintenance.
    Rent,
    /// Owned outright.
    Own,
    /// Owned with a mortgage.
    Mortgage,
}

/// Ownership status of a vehicle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleStatus {
    /// Bought on finance.
    Finance,
    /// Leased.
    Lease,
    /// Owned outright.
    Own,
}

/// Case-insensitive name equality used for every keyed lookup.
pub fn names_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Case-insensitive ordering used to keep name-sorted lists.
pub fn cmp_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Validation errors for domain invariants.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A name field is blank.
    #[error("{0} must not be blank")]
    BlankName(&'static str),
    /// Price, cost, wage, or value must be non-negative.
    #[error("negative monetary value for {0}")]
    NegativeMoney(String),
    /// Hours or days must be non-negative.
    #[error("negative schedule value for {0}")]
    NegativeSchedule(String),
    /// Year outside supported range [1900, 2100].
    #[error("year {0} is out of supported range [1900, 2100]")]
    YearOutOfRange(i32),
    /// A household needs at least one person.
    #[error("a household needs at least one person")]
    NoPeople,
    /// Two ledger lines share a name.
    #[error("duplicate ledger entry: {0}")]
    DuplicateLiability(String),
}

fn non_negative(value: Decimal, what: impl Into<String>) -> Result<(), ValidationError> {
    if value < Decimal::ZERO {
        return Err(ValidationError::NegativeMoney(what.into()));
    }
    Ok(())
}

fn not_blank(value: &str, what: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::BlankName(what));
    }
    Ok(())
}

/// Validate a job's names, wage rates, schedule, and travel expense.
pub fn validate_job(job: &Job) -> Result<(), ValidationError> {
    not_blank(job.employer_name(), "employer name")?;
    not_blank(job.title(), "job title")?;
    let w = job.wages();
    for (value, what) in [
        (w.hourly_rate, "hourly rate"),
        (w.daily_salary, "daily salary"),
        (w.weekly_salary, "weekly salary"),
        (w.monthly_salary, "monthly salary"),
        (job.daily_travel_expense(), "daily travel expense"),
    ] {
        non_negative(value, format!("{} at {}", what, job.employer_name()))?;
    }
    let s = job.schedule();
    for (value, what) in [
        (s.hours_per_day, "hours per day"),
        (s.hours_per_week, "hours per week"),
        (s.hours_per_month, "hours per month"),
        (s.days_per_week, "days per week"),
        (s.days_per_month, "days per month"),
    ] {
        if value < Decimal::ZERO {
            return Err(ValidationError::NegativeSchedule(format!(
                "{} at {}",
                what,
                job.employer_name()
            )));
        }
    }
    Ok(())
}

/// Validate a person and all of their jobs.
pub fn validate_person(person: &Person) -> Result<(), ValidationError> {
    not_blank(person.first_name(), "first name")?;
    not_blank(person.last_name(), "last name")?;
    for job in person.jobs() {
        validate_job(job)?;
    }
    Ok(())
}

/// Validate an asset's name, year, value, and payment.
pub fn validate_asset(asset: &Asset) -> Result<(), ValidationError> {
    not_blank(asset.name(), "asset name")?;
    if !(1900..=2100).contains(&asset.year()) {
        return Err(ValidationError::YearOutOfRange(asset.year()));
    }
    non_negative(asset.value(), format!("value of {}", asset.name()))?;
    non_negative(asset.payment(), format!("payment of {}", asset.name()))?;
    Ok(())
}

/// Validate a ledger line.
pub fn validate_liability(liability: &Liability) -> Result<(), ValidationError> {
    not_blank(liability.name(), "ledger entry name")?;
    non_negative(liability.cost(), format!("cost of {}", liability.name()))
}

/// Validate a set of ledger lines, including name uniqueness.
pub fn validate_liabilities<'a, I>(lines: I) -> Result<(), ValidationError>
where
    I: IntoIterator<Item = &'a Liability>,
{
    let mut seen: Vec<String> = Vec::new();
    for line in lines {
        validate_liability(line)?;
        let key = line.name().to_lowercase();
        if seen.contains(&key) {
            return Err(ValidationError::DuplicateLiability(line.name().to_string()));
        }
        seen.push(key);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn tutor() -> Job {
        Job::hourly(
            "Teach Students Today!",
            "Tutor",
            EducationLevel::HighSchool,
            Decimal::new(10, 0),
            WorkSchedule::full_time(),
        )
    }

    #[test]
    fn names_compare_case_insensitively() {
        assert!(names_match("Home Insurance", "home INSURANCE"));
        assert!(!names_match("Home Insurance", "Home Maintenance"));
        assert_eq!(cmp_names("apple", "Banana"), Ordering::Less);
        assert_eq!(cmp_names("Zed", "alpha"), Ordering::Greater);
    }

    #[test]
    fn education_levels_are_ordered() {
        assert!(EducationLevel::HighSchool < EducationLevel::Bachelor);
        assert_eq!(EducationLevel::ALL.len(), 9);
        assert_eq!(EducationLevel::default(), EducationLevel::None);
    }

    #[test]
    fn valid_job_passes() {
        assert_eq!(validate_job(&tutor()), Ok(()));
    }

    #[test]
    fn negative_rate_is_rejected() {
        let job = Job::hourly(
            "Acme",
            "Clerk",
            EducationLevel::None,
            Decimal::new(-1, 0),
            WorkSchedule::full_time(),
        );
        assert!(matches!(
            validate_job(&job),
            Err(ValidationError::NegativeMoney(_))
        ));
    }

    #[test]
    fn blank_person_name_is_rejected() {
        let p = Person::new(
            " ",
            "Quirk",
            NaiveDate::from_ymd_opt(1995, 1, 1).unwrap(),
            EducationLevel::HighSchool,
            vec![tutor()],
        );
        assert_eq!(
            validate_person(&p),
            Err(ValidationError::BlankName("first name"))
        );
    }

    #[test]
    fn asset_year_is_bounded() {
        let home = Home::new(
            "Cabin",
            Decimal::new(1000, 0),
            1850,
            Condition::Fair,
            Decimal::ZERO,
            HomeStatus::Own,
        );
        assert_eq!(
            validate_asset(&Asset::Home(home)),
            Err(ValidationError::YearOutOfRange(1850))
        );
    }

    #[test]
    fn duplicate_ledger_names_are_rejected() {
        let lines = [
            Liability::expense("Rent", Decimal::new(350, 0)),
            Liability::bill("rent", Decimal::new(10, 0)),
        ];
        assert_eq!(
            validate_liabilities(lines.iter()),
            Err(ValidationError::DuplicateLiability("rent".to_string()))
        );
    }

    proptest! {
        #[test]
        fn case_changes_keep_names_matching(s in "[a-zA-Z ]{0,20}") {
            prop_assert!(names_match(&s, &s.to_uppercase()));
            prop_assert_eq!(cmp_names(&s, &s.to_lowercase()), Ordering::Equal);
        }
    }
}
