//! The household aggregate: people, assets, ledger, and money.
//!
//! Every mutation goes through a method here so that the derived ledger
//! entries are reconciled before the method returns, and so that each
//! externally visible change is recorded exactly once in the change log.

use crate::ledger::Ledger;
use crate::sync::{self, ReconcileReport};
use fin_core::{
    cmp_names, names_match, same_asset, Asset, AssetCategory, ChangeEvent, Changes, Field, Home,
    Liability, LiabilityKind, Person, Vehicle,
};
use fin_econ::{home_charges, person_income, person_monthly_travel_cost, vehicle_charges};
use fin_econ::{Charges, PayPeriod};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

/// Everything the player owns and owes.
///
/// Holds at least one person at all times. Homes, vehicles, and ledger
/// entries stay sorted by name, and the ledger carries the insurance and
/// maintenance bills of every non-empty asset category.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Household {
    /// Members, in the order they joined; the first is the primary person.
    people: Vec<Person>,
    /// Manual expenses and bills plus the derived asset charges.
    ledger: Ledger,
    homes: Vec<Home>,
    vehicles: Vec<Vehicle>,
    /// Cash on hand.
    money: Decimal,
    /// Notifications recorded since the last drain.
    #[serde(skip)]
    changes: Vec<ChangeEvent>,
}

impl Household {
    /// A household of one with no money, assets, or ledger entries.
    pub fn new(founder: Person) -> Self {
        Self {
            people: vec![founder],
            ledger: Ledger::new(),
            homes: Vec::new(),
            vehicles: Vec::new(),
            money: Decimal::ZERO,
            changes: Vec::new(),
        }
    }

    // ---- reads ----

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn person(&self, index: usize) -> Option<&Person> {
        self.people.get(index)
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn homes(&self) -> &[Home] {
        &self.homes
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn money(&self) -> Decimal {
        self.money
    }

    pub fn asset_count(&self, category: AssetCategory) -> usize {
        match category {
            AssetCategory::Home => self.homes.len(),
            AssetCategory::Vehicle => self.vehicles.len(),
        }
    }

    pub fn asset(&self, category: AssetCategory, index: usize) -> Option<Asset> {
        match category {
            AssetCategory::Home => self.homes.get(index).cloned().map(Asset::Home),
            AssetCategory::Vehicle => self.vehicles.get(index).cloned().map(Asset::Vehicle),
        }
    }

    /// Index of the first asset structurally equal to `asset` within its category.
    pub fn position_of(&self, asset: &Asset) -> Option<usize> {
        let category = asset.category();
        (0..self.asset_count(category)).find(|&i| {
            self.asset(category, i)
                .is_some_and(|candidate| same_asset(&candidate, asset))
        })
    }

    /// Current insurance and maintenance totals, `None` for an empty category.
    pub fn charges(&self, category: AssetCategory) -> Option<Charges> {
        match category {
            AssetCategory::Home => home_charges(&self.homes),
            AssetCategory::Vehicle => vehicle_charges(&self.vehicles),
        }
    }

    // ---- aggregation ----

    pub fn income(&self, period: PayPeriod) -> Decimal {
        self.people.iter().map(|p| person_income(p, period)).sum()
    }

    pub fn daily_income(&self) -> Decimal {
        self.income(PayPeriod::Day)
    }

    pub fn weekly_income(&self) -> Decimal {
        self.income(PayPeriod::Week)
    }

    pub fn monthly_income(&self) -> Decimal {
        self.income(PayPeriod::Month)
    }

    pub fn monthly_travel_cost(&self) -> Decimal {
        self.people.iter().map(person_monthly_travel_cost).sum()
    }

    pub fn monthly_bills(&self) -> Decimal {
        self.ledger.total_of(LiabilityKind::Bill)
    }

    pub fn monthly_expenses(&self) -> Decimal {
        self.ledger.total_of(LiabilityKind::Expense)
    }

    /// Rent, mortgage, finance, and lease payments across all assets.
    pub fn monthly_asset_payments(&self) -> Decimal {
        let homes: Decimal = self.homes.iter().map(Home::payment).sum();
        let vehicles: Decimal = self.vehicles.iter().map(Vehicle::payment).sum();
        homes + vehicles
    }

    /// Monthly income minus ledger, travel, and asset payments.
    pub fn monthly_net(&self) -> Decimal {
        self.monthly_income()
            - self.ledger.total()
            - self.monthly_travel_cost()
            - self.monthly_asset_payments()
    }

    // ---- change log ----

    /// Notifications recorded since the last drain.
    pub fn pending_changes(&self) -> &[ChangeEvent] {
        &self.changes
    }

    pub fn drain_changes(&mut self) -> Vec<ChangeEvent> {
        std::mem::take(&mut self.changes)
    }

    fn emit(&mut self, field: Field) {
        self.changes.push(ChangeEvent::household(field));
    }

    // ---- people ----

    pub fn add_person(&mut self, person: Person) {
        self.people.push(person);
        self.emit(Field::People);
    }

    /// Substitute the person at `index`, returning the previous one.
    pub fn replace_person(&mut self, index: usize, person: Person) -> Option<Person> {
        let slot = self.people.get_mut(index)?;
        let previous = std::mem::replace(slot, person);
        self.emit(Field::People);
        Some(previous)
    }

    /// Remove the person at `index`. Refused, with no notification, when it
    /// would leave the household empty.
    pub fn remove_person(&mut self, index: usize) -> Option<Person> {
        if self.people.len() <= 1 || index >= self.people.len() {
            debug!(index, people = self.people.len(), "person removal rejected");
            return None;
        }
        let removed = self.people.remove(index);
        self.emit(Field::People);
        Some(removed)
    }

    /// Edit the person at `index` through its own mutation API. Each field
    /// the edit reports is recorded against that person.
    pub fn edit_person<F>(&mut self, index: usize, edit: F) -> Changes
    where
        F: FnOnce(&mut Person) -> Changes,
    {
        let Some(person) = self.people.get_mut(index) else {
            return Vec::new();
        };
        let changed = edit(person);
        self.changes
            .extend(changed.iter().map(|&f| ChangeEvent::person(index, f)));
        changed
    }

    // ---- assets ----

    pub fn add_asset(&mut self, asset: impl Into<Asset>) {
        let asset = asset.into();
        let category = asset.category();
        match asset {
            Asset::Home(h) => self.homes.push(h),
            Asset::Vehicle(v) => self.vehicles.push(v),
        }
        self.assets_changed(category);
    }

    pub fn add_home(&mut self, home: Home) {
        self.add_asset(home);
    }

    pub fn add_vehicle(&mut self, vehicle: Vehicle) {
        self.add_asset(vehicle);
    }

    /// Substitute the asset at `index` of `asset`'s category.
    pub fn replace_asset(&mut self, index: usize, asset: impl Into<Asset>) -> Option<Asset> {
        let asset = asset.into();
        let category = asset.category();
        let previous = match asset {
            Asset::Home(h) => {
                let slot = self.homes.get_mut(index)?;
                Asset::Home(std::mem::replace(slot, h))
            }
            Asset::Vehicle(v) => {
                let slot = self.vehicles.get_mut(index)?;
                Asset::Vehicle(std::mem::replace(slot, v))
            }
        };
        self.assets_changed(category);
        Some(previous)
    }

    pub fn replace_home(&mut self, index: usize, home: Home) -> Option<Home> {
        match self.replace_asset(index, home)? {
            Asset::Home(h) => Some(h),
            Asset::Vehicle(_) => None,
        }
    }

    pub fn replace_vehicle(&mut self, index: usize, vehicle: Vehicle) -> Option<Vehicle> {
        match self.replace_asset(index, vehicle)? {
            Asset::Vehicle(v) => Some(v),
            Asset::Home(_) => None,
        }
    }

    pub fn remove_asset(&mut self, category: AssetCategory, index: usize) -> Option<Asset> {
        let removed = match category {
            AssetCategory::Home if index < self.homes.len() => {
                Asset::Home(self.homes.remove(index))
            }
            AssetCategory::Vehicle if index < self.vehicles.len() => {
                Asset::Vehicle(self.vehicles.remove(index))
            }
            _ => return None,
        };
        self.assets_changed(category);
        Some(removed)
    }

    pub fn remove_home(&mut self, index: usize) -> Option<Home> {
        match self.remove_asset(AssetCategory::Home, index)? {
            Asset::Home(h) => Some(h),
            Asset::Vehicle(_) => None,
        }
    }

    pub fn remove_vehicle(&mut self, index: usize) -> Option<Vehicle> {
        match self.remove_asset(AssetCategory::Vehicle, index)? {
            Asset::Vehicle(v) => Some(v),
            Asset::Home(_) => None,
        }
    }

    fn assets_changed(&mut self, category: AssetCategory) {
        match category {
            AssetCategory::Home => self.homes.sort_by(|a, b| cmp_names(a.name(), b.name())),
            AssetCategory::Vehicle => self
                .vehicles
                .sort_by(|a, b| cmp_names(a.name(), b.name())),
        }
        self.emit(category.field());
        self.reconcile(category);
    }

    // ---- ledger ----

    /// Recompute `category`'s derived entries and record one ledger
    /// notification.
    pub fn reconcile(&mut self, category: AssetCategory) -> ReconcileReport {
        let report = self.sync(category);
        self.emit(Field::Ledger);
        report
    }

    fn sync(&mut self, category: AssetCategory) -> ReconcileReport {
        let charges = self.charges(category);
        let report = sync::reconcile(&mut self.ledger, category, charges);
        debug!(
            category = category.label(),
            inserted = ?report.inserted,
            updated = ?report.updated,
            removed = ?report.removed,
            "ledger reconciled"
        );
        report
    }

    /// Re-derive any category whose entry names were touched by a manual edit,
    /// so a manual entry can never shadow a live derived one.
    fn resync_touched(&mut self, touched: &[&str]) {
        for category in AssetCategory::ALL {
            let owns = touched.iter().any(|name| {
                names_match(name, category.insurance_entry())
                    || names_match(name, category.maintenance_entry())
            });
            if owns && self.asset_count(category) > 0 {
                self.sync(category);
            }
        }
    }

    /// Insert a manual ledger line, replacing any entry with the same name.
    pub fn add_liability(&mut self, entry: Liability) -> Option<Liability> {
        let name = entry.name().to_string();
        let previous = self.ledger.upsert(entry);
        self.resync_touched(&[&name]);
        self.emit(Field::Ledger);
        previous
    }

    pub fn add_expense(&mut self, name: impl Into<String>, cost: Decimal) -> Option<Liability> {
        self.add_liability(Liability::expense(name, cost))
    }

    pub fn add_bill(&mut self, name: impl Into<String>, cost: Decimal) -> Option<Liability> {
        self.add_liability(Liability::bill(name, cost))
    }

    /// Swap the entry named `name` for `entry`. Unknown names change nothing.
    pub fn replace_liability(&mut self, name: &str, entry: Liability) -> Option<Liability> {
        let new_name = entry.name().to_string();
        let previous = self.ledger.replace(name, entry)?;
        self.resync_touched(&[name, &new_name]);
        self.emit(Field::Ledger);
        Some(previous)
    }

    /// Drop the entry named `name`. Unknown names, and derived entries of a
    /// category that still holds assets, change nothing and return `None`.
    pub fn remove_liability(&mut self, name: &str) -> Option<Liability> {
        if self.is_live_derived(name) {
            debug!(name, "derived entry removal rejected");
            return None;
        }
        let removed = self.ledger.remove(name)?;
        self.emit(Field::Ledger);
        Some(removed)
    }

    /// True when `name` is a derived entry of a category with assets.
    fn is_live_derived(&self, name: &str) -> bool {
        AssetCategory::ALL.into_iter().any(|category| {
            self.asset_count(category) > 0
                && (names_match(name, category.insurance_entry())
                    || names_match(name, category.maintenance_entry()))
        })
    }

    // ---- money ----

    pub fn set_money(&mut self, money: Decimal) {
        self.money = money;
        self.emit(Field::Money);
    }

    pub fn adjust_money(&mut self, delta: Decimal) {
        self.set_money(self.money + delta);
    }
}
