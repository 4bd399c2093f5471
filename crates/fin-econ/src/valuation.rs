//! Insurance and maintenance charges for homes and vehicles.

use fin_core::{Asset, Condition, Home, HomeStatus, Vehicle, VehicleStatus};
use rust_decimal::Decimal;

/// Monthly insurance and maintenance totals for one asset category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Charges {
    /// Summed monthly insurance.
    pub insurance: Decimal,
    /// Summed monthly maintenance.
    pub maintenance: Decimal,
}

impl Charges {
    pub fn total(&self) -> Decimal {
        self.insurance + self.maintenance
    }
}

/// Maintenance rate for owned property and vehicles, by condition.
fn owner_rate(condition: Condition) -> Decimal {
    match condition {
        Condition::Excellent => Decimal::new(1, 2),
        Condition::Good => Decimal::new(2, 2),
        Condition::Fair => Decimal::new(35, 3),
        Condition::Poor => Decimal::new(10, 2),
        Condition::Terrible => Decimal::new(25, 2),
    }
}

/// Tenants cover a tenth of what an owner would.
fn tenant_rate(condition: Condition) -> Decimal {
    match condition {
        Condition::Excellent => Decimal::new(1, 3),
        Condition::Good => Decimal::new(2, 3),
        Condition::Fair => Decimal::new(35, 4),
        Condition::Poor => Decimal::new(1, 2),
        Condition::Terrible => Decimal::new(25, 3),
    }
}

/// Monthly home insurance: value / 4000 when renting, value / 1000 otherwise.
pub fn home_insurance(home: &Home) -> Decimal {
    let divisor = match home.status() {
        HomeStatus::Rent => Decimal::new(4000, 0),
        HomeStatus::Own | HomeStatus::Mortgage => Decimal::new(1000, 0),
    };
    home.value() / divisor
}

/// Monthly home maintenance: value times a condition rate, a tenth of the
/// owner rate when renting.
pub fn home_maintenance(home: &Home) -> Decimal {
    let rate = match home.status() {
        HomeStatus::Own | HomeStatus::Mortgage => owner_rate(home.condition()),
        HomeStatus::Rent => tenant_rate(home.condition()),
    };
    home.value() * rate
}

/// Monthly vehicle insurance: value / 100 when financed or leased, value / 200 when owned.
pub fn vehicle_insurance(vehicle: &Vehicle) -> Decimal {
    let divisor = match vehicle.status() {
        VehicleStatus::Finance | VehicleStatus::Lease => Decimal::new(100, 0),
        VehicleStatus::Own => Decimal::new(200, 0),
    };
    vehicle.value() / divisor
}

/// Monthly vehicle maintenance: value times a condition rate.
pub fn vehicle_maintenance(vehicle: &Vehicle) -> Decimal {
    vehicle.value() * owner_rate(vehicle.condition())
}

pub fn insurance(asset: &Asset) -> Decimal {
    match asset {
        Asset::Home(h) => home_insurance(h),
        Asset::Vehicle(v) => vehicle_insurance(v),
    }
}

pub fn maintenance(asset: &Asset) -> Decimal {
    match asset {
        Asset::Home(h) => home_maintenance(h),
        Asset::Vehicle(v) => vehicle_maintenance(v),
    }
}

/// Sum both charges over a category. Returns `None` for an empty category,
/// which owns no ledger entries at all.
pub fn home_charges(homes: &[Home]) -> Option<Charges> {
    sum_charges(homes.iter().map(|h| (home_insurance(h), home_maintenance(h))))
}

/// See [`home_charges`].
pub fn vehicle_charges(vehicles: &[Vehicle]) -> Option<Charges> {
    sum_charges(
        vehicles
            .iter()
            .map(|v| (vehicle_insurance(v), vehicle_maintenance(v))),
    )
}

fn sum_charges<I>(per_asset: I) -> Option<Charges>
where
    I: Iterator<Item = (Decimal, Decimal)>,
{
    let mut any = false;
    let mut charges = Charges::default();
    for (insurance, maintenance) in per_asset {
        any = true;
        charges.insurance += insurance;
        charges.maintenance += maintenance;
    }
    any.then_some(charges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn home(value: i64, status: HomeStatus, condition: Condition) -> Home {
        Home::new(
            "Home",
            Decimal::new(value, 0),
            2008,
            condition,
            Decimal::ZERO,
            status,
        )
    }

    fn vehicle(value: i64, status: VehicleStatus, condition: Condition) -> Vehicle {
        Vehicle::new(
            "Car",
            Decimal::new(value, 0),
            2012,
            condition,
            Decimal::ZERO,
            status,
            "Mazda",
            "Mazda 3",
        )
    }

    #[test]
    fn rented_home_charges() {
        let h = home(50_000, HomeStatus::Rent, Condition::Good);
        assert_eq!(home_insurance(&h), Decimal::new(1250, 2));
        assert_eq!(home_maintenance(&h), Decimal::new(100, 0));
    }

    #[test]
    fn owned_and_mortgaged_homes_charge_alike() {
        let own = home(200_000, HomeStatus::Own, Condition::Fair);
        let mortgage = home(200_000, HomeStatus::Mortgage, Condition::Fair);
        assert_eq!(home_insurance(&own), Decimal::new(200, 0));
        assert_eq!(home_maintenance(&own), Decimal::new(7000, 0));
        assert_eq!(home_insurance(&own), home_insurance(&mortgage));
        assert_eq!(home_maintenance(&own), home_maintenance(&mortgage));
    }

    #[test]
    fn owned_vehicle_charges() {
        let v = vehicle(6000, VehicleStatus::Own, Condition::Good);
        assert_eq!(vehicle_insurance(&v), Decimal::new(30, 0));
        assert_eq!(vehicle_maintenance(&v), Decimal::new(120, 0));
    }

    #[test]
    fn financed_and_leased_vehicles_insure_at_one_percent() {
        for status in [VehicleStatus::Finance, VehicleStatus::Lease] {
            let v = vehicle(20_000, status, Condition::Terrible);
            assert_eq!(vehicle_insurance(&v), Decimal::new(200, 0));
            assert_eq!(vehicle_maintenance(&v), Decimal::new(5000, 0));
        }
    }

    #[test]
    fn condition_rate_table() {
        let d = |units: i64, scale: u32| Decimal::new(units, scale);
        let expected = [
            (Condition::Excellent, d(10, 0), d(1, 0)),
            (Condition::Good, d(20, 0), d(2, 0)),
            (Condition::Fair, d(35, 0), d(35, 1)),
            (Condition::Poor, d(100, 0), d(10, 0)),
            (Condition::Terrible, d(250, 0), d(25, 0)),
        ];
        for (condition, owner, tenant) in expected {
            let owned = home(1000, HomeStatus::Own, condition);
            let rented = home(1000, HomeStatus::Rent, condition);
            assert_eq!(home_maintenance(&owned), owner);
            assert_eq!(home_maintenance(&rented), tenant);
            let v = vehicle(1000, VehicleStatus::Own, condition);
            assert_eq!(vehicle_maintenance(&v), owner);
        }
    }

    #[test]
    fn asset_dispatch_matches_typed_functions() {
        let h = home(50_000, HomeStatus::Rent, Condition::Good);
        let v = vehicle(6000, VehicleStatus::Own, Condition::Good);
        assert_eq!(insurance(&Asset::from(h.clone())), home_insurance(&h));
        assert_eq!(maintenance(&Asset::from(v.clone())), vehicle_maintenance(&v));
    }

    #[test]
    fn category_sums() {
        assert_eq!(home_charges(&[]), None);
        let cars = [
            vehicle(6000, VehicleStatus::Own, Condition::Good),
            vehicle(10_000, VehicleStatus::Lease, Condition::Excellent),
        ];
        let c = vehicle_charges(&cars).unwrap();
        assert_eq!(c.insurance, Decimal::new(130, 0));
        assert_eq!(c.maintenance, Decimal::new(220, 0));
        assert_eq!(c.total(), Decimal::new(350, 0));
    }

    #[test]
    fn valuation_does_not_mutate() {
        let h = home(50_000, HomeStatus::Rent, Condition::Good);
        let before = h.clone();
        let _ = home_insurance(&h);
        let _ = home_maintenance(&h);
        assert_eq!(h, before);
    }

    proptest! {
        #[test]
        fn charges_are_non_negative(value in 0i64..10_000_000, cents in 0u32..100) {
            let v = Vehicle::new("Car", Decimal::new(value * 100 + cents as i64, 2), 2000,
                Condition::Poor, Decimal::ZERO, VehicleStatus::Finance, "M", "X");
            prop_assert!(vehicle_insurance(&v) >= Decimal::ZERO);
            prop_assert!(vehicle_maintenance(&v) >= Decimal::ZERO);
        }
    }
}
