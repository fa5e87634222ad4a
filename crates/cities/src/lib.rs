//! City catalog, ranking rules, and the page contract for the cities service.

pub mod catalog;
pub mod config;
pub mod describe;
pub mod error;
pub mod ranking;
pub mod telemetry;
pub mod views;

pub use catalog::{Catalog, CityRecord, ClimateLevel, CostLevel};
pub use ranking::{rank_by, rank_by_key, Criterion, RankingError};
pub use views::{CityPage, CityView, PageRenderer};
