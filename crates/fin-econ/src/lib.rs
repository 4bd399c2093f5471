#![deny(warnings)]

//! Economic models for the finances game.
//!
//! Pure, total functions over domain snapshots:
//! - Asset valuation: monthly insurance and maintenance for homes and vehicles
//! - Compensation: daily/weekly/monthly income for hourly and salaried jobs,
//!   and per-person aggregation of income and travel cost
//!
//! Nothing here mutates its input or fails; all money is `Decimal`.

pub mod compensation;
pub mod valuation;

pub use compensation::{
    daily_income, income, monthly_income, monthly_travel_cost, person_income,
    person_monthly_travel_cost, weekly_income, PayPeriod,
};
pub use valuation::{
    home_charges, home_insurance, home_maintenance, insurance, maintenance, vehicle_charges,
    vehicle_insurance, vehicle_maintenance, Charges,
};
