use super::domain::{CityRecord, ClimateLevel, CostLevel};
use super::Catalog;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum CatalogImportError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: unknown {field} level '{value}'")]
    UnknownLevel {
        row: usize,
        field: &'static str,
        value: String,
    },
}

/// Builds a [`Catalog`] from a CSV export with a `name,population,cost,climate` header.
pub struct CatalogImporter;

impl CatalogImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Catalog, CatalogImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut cities = Vec::new();

        for (index, record) in csv_reader.deserialize::<CityRow>().enumerate() {
            let row = record?;
            // Header is line 1.
            cities.push(row.into_record(index + 2)?);
        }

        Ok(cities.into())
    }
}

#[derive(Debug, Deserialize)]
struct CityRow {
    #[serde(default)]
    name: String,
    population: u64,
    cost: String,
    climate: String,
}

impl CityRow {
    fn into_record(self, row: usize) -> Result<CityRecord, CatalogImportError> {
        let cost =
            CostLevel::from_label(&self.cost).ok_or_else(|| CatalogImportError::UnknownLevel {
                row,
                field: "cost",
                value: self.cost.clone(),
            })?;
        let climate = ClimateLevel::from_label(&self.climate).ok_or_else(|| {
            CatalogImportError::UnknownLevel {
                row,
                field: "climate",
                value: self.climate.clone(),
            }
        })?;

        Ok(CityRecord::new(self.name, self.population, cost, climate))
    }
}
