#![deny(warnings)]

//! Headless CLI: load a scenario, optionally grow the family, and print the
//! household's finances.

use anyhow::Result;
use chrono::NaiveDate;
use fin_core::{ChangeEvent, NamePool};
use fin_runtime::{Household, Scenario, Session};
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default)]
struct Args {
    scenario: Option<String>,
    seed: Option<u64>,
    family: usize,
    names_db: Option<String>,
    json: bool,
}

fn parse_args() -> Args {
    let mut args = Args::default();
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--scenario" => args.scenario = it.next(),
            "--seed" => args.seed = parse_value("--seed", it.next()),
            "--family" => args.family = parse_value("--family", it.next()).unwrap_or(0),
            "--names-db" => args.names_db = it.next(),
            "--json" => args.json = true,
            _ => {}
        }
    }
    args
}

/// Parse a flag's value, warning and yielding `None` when it is missing or
/// malformed.
fn parse_value<T: FromStr>(flag: &str, value: Option<String>) -> Option<T> {
    let Some(raw) = value else {
        warn!(flag, "missing value, using default");
        return None;
    };
    let parsed: Option<T> = raw.parse().ok();
    if parsed.is_none() {
        warn!(flag, value = %raw, "invalid value, using default");
    }
    parsed
}

fn read_name_store(url: &str) -> Result<NamePool> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        let pool = persistence::init_db(url).await?;
        persistence::load_name_pool(&pool).await
    })
}

/// Names from the store at `url`. An unusable store yields an empty pool so
/// generation falls back to its default first name.
fn load_names(url: Option<&str>) -> NamePool {
    let Some(url) = url else {
        return NamePool::default();
    };
    match read_name_store(url) {
        Ok(names) => names,
        Err(e) => {
            warn!(error = %e, "name store unavailable, using fallback names");
            NamePool::default()
        }
    }
}

fn money(d: Decimal) -> String {
    format!("${:.2}", d)
}

fn print_summary(household: &Household, today: NaiveDate) {
    println!(
        "Household | people: {} | money: {}",
        household.people().len(),
        money(household.money())
    );
    for person in household.people() {
        println!(
            "  {} | age {} | {:?} | jobs: {}",
            person.last_first(),
            person.age_on(today),
            person.education_level(),
            person.jobs().len()
        );
    }
    println!(
        "Income | daily: {} | weekly: {} | monthly: {}",
        money(household.daily_income()),
        money(household.weekly_income()),
        money(household.monthly_income())
    );
    println!("Ledger ({} lines):", household.ledger().len());
    for entry in household.ledger().entries() {
        println!("  {:<24} {:>12} {:?}", entry.name(), money(entry.cost()), entry.kind());
    }
    println!(
        "Monthly | expenses: {} | bills: {} | travel: {} | asset payments: {} | net: {}",
        money(household.monthly_expenses()),
        money(household.monthly_bills()),
        money(household.monthly_travel_cost()),
        money(household.monthly_asset_payments()),
        money(household.monthly_net())
    );
}

fn main() -> Result<()> {
    // Logging setup
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args();
    info!(?args, git = env!("GIT_SHA"), built = env!("BUILD_DATE"), "starting CLI");

    let scenario = match &args.scenario {
        Some(path) => Scenario::load(path)?,
        None => Scenario::default(),
    };
    let names = load_names(args.names_db.as_deref());
    let seed = args.seed.unwrap_or(scenario.seed);
    let mut session = Session::start_with_seed(&scenario, names, seed)?;
    session.subscribe(|e: &ChangeEvent| debug!(subject = ?e.subject, field = ?e.field, "changed"));

    for _ in 0..args.family {
        session.generate_family_member();
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(session.household())?);
    } else {
        print_summary(session.household(), session.current_date());
    }
    Ok(())
}
