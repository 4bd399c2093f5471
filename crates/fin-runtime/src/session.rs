//! Game session: the household plus everything a running game needs
//! around it.

use crate::generate::generate_person;
use crate::household::Household;
use crate::scenario::{generate_household, Scenario};
use chrono::NaiveDate;
use fin_core::{ChangeSink, NamePool, ValidationError};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

/// First name given to generated people when no name table is usable.
pub const FALLBACK_FIRST_NAME: &str = "Quinn";

pub struct Session {
    household: Household,
    current_date: NaiveDate,
    names: NamePool,
    rng: ChaCha8Rng,
    observers: Vec<Box<dyn ChangeSink>>,
}

impl Session {
    /// Start a game from `scenario`, seeding the RNG from the scenario seed.
    pub fn start(scenario: &Scenario, names: NamePool) -> Result<Self, ValidationError> {
        Self::start_with_seed(scenario, names, scenario.seed)
    }

    pub fn start_with_seed(
        scenario: &Scenario,
        names: NamePool,
        seed: u64,
    ) -> Result<Self, ValidationError> {
        let household = generate_household(scenario)?;
        info!(seed, date = %scenario.start_date, "session started");
        Ok(Self {
            household,
            current_date: scenario.start_date,
            names,
            rng: ChaCha8Rng::seed_from_u64(seed),
            observers: Vec::new(),
        })
    }

    pub fn household(&self) -> &Household {
        &self.household
    }

    pub fn current_date(&self) -> NaiveDate {
        self.current_date
    }

    pub fn names(&self) -> &NamePool {
        &self.names
    }

    /// Register a receiver for every change made through [`Session::mutate`].
    pub fn subscribe(&mut self, sink: impl ChangeSink + 'static) {
        self.observers.push(Box::new(sink));
    }

    /// Run `op` against the household, then deliver its change events to
    /// every subscriber in subscription order.
    pub fn mutate<T>(&mut self, op: impl FnOnce(&mut Household) -> T) -> T {
        let out = op(&mut self.household);
        let events = self.household.drain_changes();
        for event in &events {
            for sink in self.observers.iter_mut() {
                sink.notify(event);
            }
        }
        out
    }

    /// Generate a relative sharing the primary person's last name, add them
    /// to the household, and return their index.
    pub fn generate_family_member(&mut self) -> usize {
        let last_name = self
            .household
            .people()
            .first()
            .map(|p| p.last_name().to_string())
            .unwrap_or_default();
        let person = generate_person(
            &mut self.rng,
            &self.names,
            &last_name,
            self.current_date,
            FALLBACK_FIRST_NAME,
        );
        info!(name = %person.name(), "family member generated");
        self.mutate(|h| {
            h.add_person(person);
            h.people().len() - 1
        })
    }
}
