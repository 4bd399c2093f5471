//! Income from jobs: hourly wages with overtime, or fixed salary.

use fin_core::{CompensationMode, Job, Person};
use rust_decimal::Decimal;

/// Accounting period for income figures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PayPeriod {
    Day,
    Week,
    Month,
}

/// Weekly hours paid at the base rate before overtime applies.
pub const WEEKLY_OVERTIME_THRESHOLD: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

/// Weekly-hours threshold used by the monthly overtime calculation.
pub const MONTHLY_OVERTIME_THRESHOLD: Decimal = Decimal::from_parts(160, 0, 0, false, 0);

/// Premium per overtime hour, as a multiple of the hourly rate.
pub const OVERTIME_PREMIUM: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

fn overtime(rate: Decimal, hours: Decimal, threshold: Decimal) -> Decimal {
    let excess = (hours - threshold).max(Decimal::ZERO);
    excess * rate * OVERTIME_PREMIUM
}

/// Hourly rate times hours per day. No overtime on a single day.
pub fn daily_wages(job: &Job) -> Decimal {
    job.wages().hourly_rate * job.schedule().hours_per_day
}

/// Hourly rate times hours per week, plus the overtime premium for every
/// hour past 40.
pub fn weekly_wages(job: &Job) -> Decimal {
    let rate = job.wages().hourly_rate;
    let hours = job.schedule().hours_per_week;
    rate * hours + overtime(rate, hours, WEEKLY_OVERTIME_THRESHOLD)
}

/// Hourly rate times hours per month, plus the overtime premium for weekly
/// hours past 160.
///
/// The threshold is compared against the *weekly* hours field, not the
/// monthly one, which means realistic schedules never earn monthly overtime.
/// Kept as the game has always computed it.
pub fn monthly_wages(job: &Job) -> Decimal {
    let rate = job.wages().hourly_rate;
    let schedule = job.schedule();
    rate * schedule.hours_per_month
        + overtime(rate, schedule.hours_per_week, MONTHLY_OVERTIME_THRESHOLD)
}

pub fn daily_income(job: &Job) -> Decimal {
    income(job, PayPeriod::Day)
}

pub fn weekly_income(job: &Job) -> Decimal {
    income(job, PayPeriod::Week)
}

pub fn monthly_income(job: &Job) -> Decimal {
    income(job, PayPeriod::Month)
}

/// Income for one period, dispatching on the job's compensation mode.
/// Salaried jobs pay the stored salary figure; hourly fields are ignored.
pub fn income(job: &Job, period: PayPeriod) -> Decimal {
    match (job.mode(), period) {
        (CompensationMode::Hourly, PayPeriod::Day) => daily_wages(job),
        (CompensationMode::Hourly, PayPeriod::Week) => weekly_wages(job),
        (CompensationMode::Hourly, PayPeriod::Month) => monthly_wages(job),
        (CompensationMode::Salary, PayPeriod::Day) => job.wages().daily_salary,
        (CompensationMode::Salary, PayPeriod::Week) => job.wages().weekly_salary,
        (CompensationMode::Salary, PayPeriod::Month) => job.wages().monthly_salary,
    }
}

/// Commuting cost for a month of work. Tracked apart from income.
pub fn monthly_travel_cost(job: &Job) -> Decimal {
    job.daily_travel_expense() * job.schedule().days_per_month
}

/// Income summed over all of a person's jobs.
pub fn person_income(person: &Person, period: PayPeriod) -> Decimal {
    person.jobs().iter().map(|job| income(job, period)).sum()
}

/// Commuting cost summed over all of a person's jobs.
pub fn person_monthly_travel_cost(person: &Person) -> Decimal {
    person.jobs().iter().map(monthly_travel_cost).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use fin_core::{EducationLevel, Wages, WorkSchedule};
    use proptest::prelude::*;

    fn schedule(per_day: i64, per_week: i64, per_month: i64) -> WorkSchedule {
        WorkSchedule {
            hours_per_day: Decimal::from(per_day),
            hours_per_week: Decimal::from(per_week),
            hours_per_month: Decimal::from(per_month),
            ..WorkSchedule::full_time()
        }
    }

    fn hourly(rate: Decimal, s: WorkSchedule) -> Job {
        Job::hourly("Acme", "Welder", EducationLevel::TradeSchool, rate, s)
    }

    fn salaried(monthly: i64) -> Job {
        let wages = Wages {
            hourly_rate: Decimal::new(99, 0),
            daily_salary: Decimal::from(monthly) / Decimal::from(20),
            weekly_salary: Decimal::from(monthly) / Decimal::from(4),
            monthly_salary: Decimal::from(monthly),
        };
        Job::salaried(
            "Teach Students Today!",
            "Tutor",
            EducationLevel::HighSchool,
            wages,
            WorkSchedule::full_time(),
        )
    }

    #[test]
    fn constants() {
        assert_eq!(WEEKLY_OVERTIME_THRESHOLD, Decimal::new(40, 0));
        assert_eq!(MONTHLY_OVERTIME_THRESHOLD, Decimal::new(160, 0));
        assert_eq!(OVERTIME_PREMIUM, Decimal::new(15, 1));
    }

    #[test]
    fn full_time_hourly() {
        let job = hourly(Decimal::new(10, 0), WorkSchedule::full_time());
        assert_eq!(daily_income(&job), Decimal::new(80, 0));
        assert_eq!(weekly_income(&job), Decimal::new(400, 0));
        assert_eq!(monthly_income(&job), Decimal::new(1600, 0));
    }

    #[test]
    fn weekly_overtime() {
        let job = hourly(Decimal::new(1000, 2), schedule(9, 45, 180));
        // 10 * 45 + (45 - 40) * 10 * 1.5
        assert_eq!(weekly_wages(&job), Decimal::new(52500, 2));
    }

    #[test]
    fn monthly_overtime_uses_weekly_hours() {
        // 180 monthly hours exceed 160, but the threshold is checked against
        // the 45 weekly hours, so no monthly overtime is paid.
        let job = hourly(Decimal::new(10, 0), schedule(9, 45, 180));
        assert_eq!(monthly_wages(&job), Decimal::new(1800, 0));

        // Only a weekly figure above 160 triggers it.
        let job = hourly(Decimal::new(10, 0), schedule(24, 168, 672));
        assert_eq!(
            monthly_wages(&job),
            Decimal::new(6720, 0) + Decimal::new(120, 0)
        );
    }

    #[test]
    fn salary_ignores_hourly_fields() {
        let job = salaried(1600);
        assert_eq!(monthly_income(&job), Decimal::new(1600, 0));
        assert_eq!(weekly_income(&job), Decimal::new(400, 0));
        assert_eq!(daily_income(&job), Decimal::new(80, 0));
        // The hourly formulas still describe the stored rate.
        assert_eq!(monthly_wages(&job), Decimal::new(99 * 160, 0));
    }

    #[test]
    fn travel_is_separate_from_income() {
        let job = hourly(Decimal::new(8, 0), WorkSchedule::full_time())
            .with_travel_expense(Decimal::new(5, 0));
        assert_eq!(monthly_travel_cost(&job), Decimal::new(100, 0));
        assert_eq!(monthly_income(&job), Decimal::new(1280, 0));
    }

    #[test]
    fn person_sums_across_jobs() {
        let person = Person::new(
            "Quincy",
            "Quirk",
            NaiveDate::from_ymd_opt(1995, 1, 1).unwrap(),
            EducationLevel::HighSchool,
            vec![
                salaried(1600),
                hourly(Decimal::new(8, 0), WorkSchedule::full_time())
                    .with_travel_expense(Decimal::new(250, 2)),
            ],
        );
        assert_eq!(
            person_income(&person, PayPeriod::Month),
            Decimal::new(2880, 0)
        );
        assert_eq!(person_income(&person, PayPeriod::Day), Decimal::new(144, 0));
        assert_eq!(person_monthly_travel_cost(&person), Decimal::new(50, 0));
    }

    #[test]
    fn jobless_person_earns_nothing() {
        let person = Person::new(
            "A",
            "B",
            NaiveDate::from_ymd_opt(2010, 6, 1).unwrap(),
            EducationLevel::CurrentStudent,
            vec![],
        );
        assert_eq!(person_income(&person, PayPeriod::Week), Decimal::ZERO);
    }

    proptest! {
        #[test]
        fn hourly_income_is_non_negative(rate_cents in 0i64..100_000,
                                         day in 0i64..24,
                                         week in 0i64..168,
                                         month in 0i64..744) {
            let job = hourly(Decimal::new(rate_cents, 2), schedule(day, week, month));
            for period in [PayPeriod::Day, PayPeriod::Week, PayPeriod::Month] {
                prop_assert!(income(&job, period) >= Decimal::ZERO);
            }
        }

        #[test]
        fn weekly_overtime_only_past_forty(week in 0i64..=40) {
            let job = hourly(Decimal::new(1234, 2), schedule(8, week, 160));
            prop_assert_eq!(weekly_wages(&job), Decimal::new(1234, 2) * Decimal::from(week));
        }
    }
}
