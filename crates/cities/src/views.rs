//! Static route table mapping each city page to the ranking it shows.

use crate::catalog::{Catalog, CityRecord, ClimateLevel, CostLevel};
use crate::describe::{describe, format_population};
use crate::ranking::Criterion;
use serde::Serialize;

/// The pages the service renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CityView {
    Index,
    ByCost,
    ByClimate,
    ByPopulation,
}

impl CityView {
    pub const fn ordered() -> [Self; 4] {
        [Self::Index, Self::ByCost, Self::ByClimate, Self::ByPopulation]
    }

    pub const fn path(self) -> &'static str {
        match self {
            Self::Index => "/",
            Self::ByCost => "/by-cost",
            Self::ByClimate => "/by-climate",
            Self::ByPopulation => "/by-population",
        }
    }

    pub const fn criterion(self) -> Option<Criterion> {
        match self {
            Self::Index => None,
            Self::ByCost => Some(Criterion::Cost),
            Self::ByClimate => Some(Criterion::Climate),
            Self::ByPopulation => Some(Criterion::Population),
        }
    }

    pub fn title(self) -> String {
        match self.criterion() {
            Some(criterion) => format!("By {}", criterion.key()),
            None => "Welcome".to_string(),
        }
    }

    /// Builds the page for this view. The catalog itself is never reordered.
    pub fn page(self, catalog: &Catalog) -> CityPage {
        let cities = match self.criterion() {
            Some(criterion) => catalog.ranked_by(criterion),
            None => catalog.cities().to_vec(),
        };

        CityPage {
            title: self.title(),
            criterion: self.criterion(),
            cities,
        }
    }
}

/// Everything the rendering layer needs for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityPage {
    pub title: String,
    pub criterion: Option<Criterion>,
    pub cities: Vec<CityRecord>,
}

impl CityPage {
    pub fn criterion_label(&self) -> Option<&'static str> {
        self.criterion.map(Criterion::key)
    }
}

/// Turns a page into a response body.
pub trait PageRenderer: Send + Sync {
    fn render(&self, page: &CityPage) -> String;
}

/// Serializable view of a city, with display labels alongside raw values.
#[derive(Debug, Clone, Serialize)]
pub struct CitySummary {
    pub name: String,
    pub population: u64,
    pub population_label: String,
    pub cost: CostLevel,
    pub cost_label: &'static str,
    pub climate: ClimateLevel,
    pub climate_label: &'static str,
    pub description: String,
}

impl From<&CityRecord> for CitySummary {
    fn from(city: &CityRecord) -> Self {
        Self {
            name: city.name.clone(),
            population: city.population,
            population_label: format_population(city.population),
            cost: city.cost,
            cost_label: city.cost.label(),
            climate: city.climate,
            climate_label: city.climate.label(),
            description: describe(city),
        }
    }
}
