//! Orders cities from worst to best by a single criterion.

use crate::catalog::CityRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A basis for ordering the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Name,
    Population,
    Cost,
    Climate,
}

impl Criterion {
    pub const fn ordered() -> [Self; 4] {
        [Self::Name, Self::Population, Self::Cost, Self::Climate]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Population => "population",
            Self::Cost => "cost",
            Self::Climate => "climate",
        }
    }

    /// Ascending comparison: worse cities sort first.
    pub fn compare(self, left: &CityRecord, right: &CityRecord) -> Ordering {
        match self {
            Self::Name => left.name.as_bytes().cmp(right.name.as_bytes()),
            Self::Population => left.population.cmp(&right.population),
            Self::Cost => left.cost.cmp(&right.cost),
            Self::Climate => left.climate.cmp(&right.climate),
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Criterion {
    type Err = RankingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ordered()
            .into_iter()
            .find(|criterion| criterion.key() == value)
            .ok_or_else(|| RankingError::UnsupportedCriterion {
                criterion: value.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RankingError {
    #[error("unsupported criterion '{criterion}' (expected one of: name, population, cost, climate)")]
    UnsupportedCriterion { criterion: String },
}

/// Returns a copy of `cities` sorted ascending by `criterion`.
///
/// The sort is stable: cities with equal keys keep their input order.
pub fn rank_by(cities: &[CityRecord], criterion: Criterion) -> Vec<CityRecord> {
    let mut ranked = cities.to_vec();
    ranked.sort_by(|left, right| criterion.compare(left, right));
    ranked
}

/// Ranks by a criterion given by name, rejecting names outside the supported set.
pub fn rank_by_key(cities: &[CityRecord], key: &str) -> Result<Vec<CityRecord>, RankingError> {
    let criterion = key.parse::<Criterion>()?;
    Ok(rank_by(cities, criterion))
}
