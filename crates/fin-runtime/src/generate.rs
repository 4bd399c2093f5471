//! Procedural generation of new household members.

use chrono::{Datelike, NaiveDate};
use fin_core::{EducationLevel, NameSource, NameTable, Person};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::warn;

/// Earliest birth date a generated person can have.
pub fn earliest_birth_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1950, 1, 1).unwrap_or_default()
}

/// Draw a birth date uniformly from [1950-01-01, `today`].
pub fn random_birth_date<R: Rng>(rng: &mut R, today: NaiveDate) -> NaiveDate {
    let lo = earliest_birth_date().num_days_from_ce();
    let hi = today.num_days_from_ce().max(lo);
    NaiveDate::from_num_days_from_ce_opt(rng.gen_range(lo..=hi)).unwrap_or(today)
}

/// Generate a jobless person with the given last name.
///
/// The sex is drawn at random and decides which first-name table is
/// consulted. The table is read once; if it is empty or the source fails,
/// `fallback_first_name` is used instead.
pub fn generate_person<R: Rng>(
    rng: &mut R,
    names: &dyn NameSource,
    last_name: &str,
    today: NaiveDate,
    fallback_first_name: &str,
) -> Person {
    let table = if rng.gen_bool(0.5) {
        NameTable::MaleFirstNames
    } else {
        NameTable::FemaleFirstNames
    };
    let first_name = match names.names(table) {
        Ok(candidates) => match candidates.choose(rng) {
            Some(name) => name.clone(),
            None => {
                warn!(table = table.table_name(), "name table empty, using fallback");
                fallback_first_name.to_string()
            }
        },
        Err(e) => {
            warn!(table = table.table_name(), error = %e, "name lookup failed, using fallback");
            fallback_first_name.to_string()
        }
    };
    let birth_date = random_birth_date(rng, today);
    let education_level = EducationLevel::ALL
        .choose(rng)
        .copied()
        .unwrap_or_default();
    Person::new(first_name, last_name, birth_date, education_level, Vec::new())
}
