//! The in-memory city catalog served for the lifetime of the process.

pub mod domain;
mod import;

pub use domain::{CityRecord, ClimateLevel, CostLevel};
pub use import::{CatalogImportError, CatalogImporter};

use crate::describe;
use crate::ranking::{self, Criterion};
use std::fmt;

/// Ordered collection of cities. Duplicate names are allowed.
///
/// A catalog is built once at startup and only ever read afterwards; ranking
/// produces new sequences instead of reordering the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    cities: Vec<CityRecord>,
}

impl Catalog {
    pub fn new(cities: Vec<CityRecord>) -> Self {
        Self { cities }
    }

    /// The built-in seed list.
    pub fn seed() -> Self {
        use ClimateLevel::*;
        use CostLevel::*;

        Self::new(vec![
            CityRecord::new("Barcelona", 1_600_000, Reasonable, Great),
            CityRecord::new("Seattle", 652_405, Expensive, Good),
            CityRecord::new("New York", 8_406_000, Expensive, Good),
            CityRecord::new("Copenhagen", 562_379, Expensive, Poor),
            CityRecord::new("Stockholm", 789_024, Expensive, Poor),
            CityRecord::new("Deviltown", 1_233_567_890, VeryExpensive, Nasty),
            CityRecord::new("Paradisio", 1_000_000, Cheap, Perfect),
        ])
    }

    pub fn cities(&self) -> &[CityRecord] {
        &self.cities
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn ranked_by(&self, criterion: Criterion) -> Vec<CityRecord> {
        ranking::rank_by(&self.cities, criterion)
    }

    /// Comma separated city names in catalog order.
    pub fn names(&self) -> String {
        describe::names(&self.cities)
    }
}

impl From<Vec<CityRecord>> for Catalog {
    fn from(cities: Vec<CityRecord>) -> Self {
        Self::new(cities)
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&describe::describe_catalog(&self.cities))
    }
}
