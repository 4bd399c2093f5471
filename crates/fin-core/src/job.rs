//! Jobs and their wage structure.

use crate::{names_match, EducationLevel};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a job pays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompensationMode {
    /// Paid per hour, with overtime.
    Hourly,
    /// Paid fixed daily, weekly, and monthly amounts.
    Salary,
}

/// Wage rates for both compensation modes. Only the fields of the job's
/// active mode contribute to income.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wages {
    /// Pay per hour worked (hourly mode).
    #[serde(default)]
    pub hourly_rate: Decimal,
    /// Fixed pay per day (salary mode).
    #[serde(default)]
    pub daily_salary: Decimal,
    /// Fixed pay per week (salary mode).
    #[serde(default)]
    pub weekly_salary: Decimal,
    /// Fixed pay per month (salary mode).
    #[serde(default)]
    pub monthly_salary: Decimal,
}

/// Hours and days worked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkSchedule {
    /// Hours on a working day.
    pub hours_per_day: Decimal,
    /// Hours per week; overtime thresholds are checked against this.
    pub hours_per_week: Decimal,
    /// Hours per month.
    pub hours_per_month: Decimal,
    /// Working days per week.
    pub days_per_week: Decimal,
    /// Working days per month; travel cost accrues on each.
    pub days_per_month: Decimal,
}

impl WorkSchedule {
    /// 8 hours a day, 5 days a week, 20 days a month.
    pub fn full_time() -> Self {
        Self {
            hours_per_day: Decimal::new(8, 0),
            hours_per_week: Decimal::new(40, 0),
            hours_per_month: Decimal::new(160, 0),
            days_per_week: Decimal::new(5, 0),
            days_per_month: Decimal::new(20, 0),
        }
    }
}

/// A position held by a person. Immutable: edits replace the whole job.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Job {
    employer_name: String,
    title: String,
    minimum_education: EducationLevel,
    mode: CompensationMode,
    wages: Wages,
    schedule: WorkSchedule,
    #[serde(default)]
    daily_travel_expense: Decimal,
}

impl Job {
    /// An hourly job paying `hourly_rate`.
    pub fn hourly(
        employer_name: impl Into<String>,
        title: impl Into<String>,
        minimum_education: EducationLevel,
        hourly_rate: Decimal,
        schedule: WorkSchedule,
    ) -> Self {
        Self {
            employer_name: employer_name.into(),
            title: title.into(),
            minimum_education,
            mode: CompensationMode::Hourly,
            wages: Wages {
                hourly_rate,
                ..Wages::default()
            },
            schedule,
            daily_travel_expense: Decimal::ZERO,
        }
    }

    /// A salaried job paying fixed daily, weekly and monthly amounts.
    pub fn salaried(
        employer_name: impl Into<String>,
        title: impl Into<String>,
        minimum_education: EducationLevel,
        wages: Wages,
        schedule: WorkSchedule,
    ) -> Self {
        Self {
            employer_name: employer_name.into(),
            title: title.into(),
            minimum_education,
            mode: CompensationMode::Salary,
            wages,
            schedule,
            daily_travel_expense: Decimal::ZERO,
        }
    }

    /// Same job with a daily commute cost.
    pub fn with_travel_expense(mut self, daily: Decimal) -> Self {
        self.daily_travel_expense = daily;
        self
    }

    pub fn employer_name(&self) -> &str {
        &self.employer_name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn minimum_education(&self) -> EducationLevel {
        self.minimum_education
    }

    pub fn mode(&self) -> CompensationMode {
        self.mode
    }

    pub fn is_salary(&self) -> bool {
        self.mode == CompensationMode::Salary
    }

    pub fn wages(&self) -> &Wages {
        &self.wages
    }

    pub fn schedule(&self) -> &WorkSchedule {
        &self.schedule
    }

    pub fn daily_travel_expense(&self) -> Decimal {
        self.daily_travel_expense
    }
}

/// Structural equality: employer and title compared case-insensitively,
/// compensation mode, wages and schedule compared exactly.
pub fn same_job(left: &Job, right: &Job) -> bool {
    names_match(&left.employer_name, &right.employer_name)
        && names_match(&left.title, &right.title)
        && left.mode == right.mode
        && left.wages == right.wages
        && left.schedule == right.schedule
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cook() -> Job {
        Job::hourly(
            "McDonald's",
            "Cook",
            EducationLevel::None,
            Decimal::new(8, 0),
            WorkSchedule::full_time(),
        )
    }

    #[test]
    fn hourly_job_leaves_salary_fields_zero() {
        let job = cook();
        assert!(!job.is_salary());
        assert_eq!(job.wages().hourly_rate, Decimal::new(8, 0));
        assert_eq!(job.wages().monthly_salary, Decimal::ZERO);
    }

    #[test]
    fn same_job_ignores_name_case() {
        let a = cook();
        let b = Job::hourly(
            "MCDONALD'S",
            "cook",
            EducationLevel::HighSchool,
            Decimal::new(8, 0),
            WorkSchedule::full_time(),
        );
        assert!(same_job(&a, &b));
    }

    #[test]
    fn same_job_compares_pay() {
        let a = cook();
        let b = Job::hourly(
            "McDonald's",
            "Cook",
            EducationLevel::None,
            Decimal::new(9, 0),
            WorkSchedule::full_time(),
        );
        assert!(!same_job(&a, &b));
    }

    #[test]
    fn travel_expense_builder() {
        let job = cook().with_travel_expense(Decimal::new(450, 2));
        assert_eq!(job.daily_travel_expense(), Decimal::new(450, 2));
    }
}
