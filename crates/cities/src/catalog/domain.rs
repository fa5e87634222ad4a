use serde::{Deserialize, Serialize};
use std::fmt;

/// Cost of living, ordered from cheapest to most expensive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostLevel {
    Cheap,
    VeryReasonable,
    Reasonable,
    Expensive,
    VeryExpensive,
}

impl CostLevel {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Cheap,
            Self::VeryReasonable,
            Self::Reasonable,
            Self::Expensive,
            Self::VeryExpensive,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Cheap => "cheap",
            Self::VeryReasonable => "very reasonable",
            Self::Reasonable => "reasonable",
            Self::Expensive => "expensive",
            Self::VeryExpensive => "very expensive",
        }
    }

    /// Looks a level up by its label, ignoring case and `_`/`-` separators.
    pub fn from_label(value: &str) -> Option<Self> {
        let wanted = normalize_label(value);
        Self::ordered()
            .into_iter()
            .find(|level| level.label() == wanted)
    }
}

impl fmt::Display for CostLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Quality of the typical weather, ordered from nasty to perfect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClimateLevel {
    Nasty,
    Poor,
    Good,
    Great,
    Perfect,
}

impl ClimateLevel {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Nasty,
            Self::Poor,
            Self::Good,
            Self::Great,
            Self::Perfect,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Nasty => "nasty",
            Self::Poor => "poor",
            Self::Good => "good",
            Self::Great => "great",
            Self::Perfect => "perfect",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        let wanted = normalize_label(value);
        Self::ordered()
            .into_iter()
            .find(|level| level.label() == wanted)
    }
}

impl fmt::Display for ClimateLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn normalize_label(value: &str) -> String {
    value
        .replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_ascii_lowercase()
}

/// A place where we might want to live.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CityRecord {
    pub name: String,
    pub population: u64,
    pub cost: CostLevel,
    pub climate: ClimateLevel,
}

impl CityRecord {
    pub fn new(
        name: impl Into<String>,
        population: u64,
        cost: CostLevel,
        climate: ClimateLevel,
    ) -> Self {
        Self {
            name: name.into(),
            population,
            cost,
            climate,
        }
    }
}

impl fmt::Display for CityRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::describe::describe(self))
    }
}
