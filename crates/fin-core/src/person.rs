//! People and their jobs.

use crate::changes::{Changes, Field};
use crate::{cmp_names, EducationLevel, Job};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A living member of a household.
///
/// Jobs are kept sorted by employer name (case-insensitive) after every
/// mutation. All setters return the fields they changed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "PersonRecord")]
pub struct Person {
    first_name: String,
    last_name: String,
    birth_date: NaiveDate,
    education_level: EducationLevel,
    jobs: Vec<Job>,
}

#[derive(Deserialize)]
struct PersonRecord {
    first_name: String,
    last_name: String,
    birth_date: NaiveDate,
    #[serde(default)]
    education_level: EducationLevel,
    #[serde(default)]
    jobs: Vec<Job>,
}

impl From<PersonRecord> for Person {
    fn from(r: PersonRecord) -> Self {
        Person::new(
            r.first_name,
            r.last_name,
            r.birth_date,
            r.education_level,
            r.jobs,
        )
    }
}

impl Person {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_date: NaiveDate,
        education_level: EducationLevel,
        jobs: Vec<Job>,
    ) -> Self {
        let mut person = Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            birth_date,
            education_level,
            jobs,
        };
        person.sort_jobs();
        person
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// "First Last".
    pub fn name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// "Last, First".
    pub fn last_first(&self) -> String {
        format!("{}, {}", self.last_name, self.first_name)
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn education_level(&self) -> EducationLevel {
        self.education_level
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Whole years lived as of `on`.
    pub fn age_on(&self, on: NaiveDate) -> u32 {
        on.years_since(self.birth_date).unwrap_or(0)
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) -> Changes {
        self.first_name = first_name.into();
        vec![Field::FirstName, Field::Name, Field::LastFirst]
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) -> Changes {
        self.last_name = last_name.into();
        vec![Field::LastName, Field::Name, Field::LastFirst]
    }

    pub fn set_birth_date(&mut self, birth_date: NaiveDate) -> Changes {
        self.birth_date = birth_date;
        vec![Field::BirthDate]
    }

    pub fn set_education_level(&mut self, level: EducationLevel) -> Changes {
        self.education_level = level;
        vec![Field::EducationLevel]
    }

    pub fn add_job(&mut self, job: Job) -> Changes {
        self.jobs.push(job);
        self.sort_jobs();
        vec![Field::Jobs]
    }

    /// Substitute the job at `index`. Out-of-range indices change nothing.
    pub fn replace_job(&mut self, index: usize, job: Job) -> Changes {
        match self.jobs.get_mut(index) {
            Some(slot) => {
                *slot = job;
                self.sort_jobs();
                vec![Field::Jobs]
            }
            None => Vec::new(),
        }
    }

    /// Drop the job at `index`. Out-of-range indices change nothing.
    pub fn remove_job(&mut self, index: usize) -> Changes {
        if index >= self.jobs.len() {
            return Vec::new();
        }
        self.jobs.remove(index);
        vec![Field::Jobs]
    }

    fn sort_jobs(&mut self) {
        self.jobs
            .sort_by(|a, b| cmp_names(a.employer_name(), b.employer_name()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WorkSchedule;
    use rust_decimal::Decimal;

    fn job(employer: &str) -> Job {
        Job::hourly(
            employer,
            "Clerk",
            EducationLevel::None,
            Decimal::new(10, 0),
            WorkSchedule::full_time(),
        )
    }

    fn quincy() -> Person {
        Person::new(
            "Quincy",
            "Quirk",
            NaiveDate::from_ymd_opt(1995, 1, 1).unwrap(),
            EducationLevel::HighSchool,
            vec![job("Zed's"), job("acme")],
        )
    }

    fn employers(p: &Person) -> Vec<&str> {
        p.jobs().iter().map(|j| j.employer_name()).collect()
    }

    #[test]
    fn display_names() {
        let p = quincy();
        assert_eq!(p.name(), "Quincy Quirk");
        assert_eq!(p.last_first(), "Quirk, Quincy");
    }

    #[test]
    fn jobs_sorted_on_construction_and_add() {
        let mut p = quincy();
        assert_eq!(employers(&p), vec!["acme", "Zed's"]);
        assert_eq!(p.add_job(job("McDonald's")), vec![Field::Jobs]);
        assert_eq!(employers(&p), vec!["acme", "McDonald's", "Zed's"]);
    }

    #[test]
    fn replace_job_resorts() {
        let mut p = quincy();
        p.replace_job(0, job("Zebra Co"));
        assert_eq!(employers(&p), vec!["Zebra Co", "Zed's"]);
    }

    #[test]
    fn out_of_range_job_edits_are_silent() {
        let mut p = quincy();
        assert!(p.replace_job(7, job("X")).is_empty());
        assert!(p.remove_job(7).is_empty());
        assert_eq!(p.jobs().len(), 2);
    }

    #[test]
    fn name_change_notifies_derived_fields() {
        let mut p = quincy();
        let changed = p.set_first_name("Quinn");
        assert_eq!(changed, vec![Field::FirstName, Field::Name, Field::LastFirst]);
        assert_eq!(p.name(), "Quinn Quirk");
    }

    #[test]
    fn age_counts_whole_years() {
        let p = quincy();
        assert_eq!(p.age_on(NaiveDate::from_ymd_opt(2020, 12, 31).unwrap()), 25);
        assert_eq!(p.age_on(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap()), 26);
    }

    #[test]
    fn deserialization_sorts_jobs() {
        let json = r#"{
            "first_name": "A", "last_name": "B", "birth_date": "2000-01-01",
            "jobs": [
              {"employer_name": "b", "title": "t", "minimum_education": "None",
               "mode": "Hourly", "wages": {"hourly_rate": "1"},
               "schedule": {"hours_per_day": "8", "hours_per_week": "40",
                            "hours_per_month": "160", "days_per_week": "5",
                            "days_per_month": "20"}},
              {"employer_name": "a", "title": "t", "minimum_education": "None",
               "mode": "Hourly", "wages": {"hourly_rate": "1"},
               "schedule": {"hours_per_day": "8", "hours_per_week": "40",
                            "hours_per_month": "160", "days_per_week": "5",
                            "days_per_month": "20"}}
            ]
        }"#;
        let p: Person = serde_json::from_str(json).unwrap();
        assert_eq!(employers(&p), vec!["a", "b"]);
        assert_eq!(p.education_level(), EducationLevel::None);
    }
}
