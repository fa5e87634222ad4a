//! Human readable descriptions of cities, used for pages and log output.

use crate::catalog::CityRecord;
use tracing::debug;

/// Rendered in place of a city whose name was left empty.
pub const EMPTY_NAME_SENTINEL: &str = "city with empty name, you dummy!";

/// Formats a population the way the city pages show it.
///
/// Millions render with one decimal (`8.4M`). Smaller values get a single
/// space before the last three digits (`652 405`); no further grouping is
/// applied.
pub fn format_population(population: u64) -> String {
    if population >= 1_000_000 {
        return format!("{:.1}M", population as f64 / 1e6);
    }

    let digits = population.to_string();
    if digits.len() > 3 {
        let split = digits.len() - 3;
        format!("{} {}", &digits[..split], &digits[split..])
    } else {
        digits
    }
}

pub fn describe(city: &CityRecord) -> String {
    if city.name.is_empty() {
        debug!(population = city.population, "city record has an empty name");
        return EMPTY_NAME_SENTINEL.to_string();
    }

    format!(
        "{}: {}, cost: {}, climate: {}",
        city.name,
        format_population(city.population),
        city.cost,
        city.climate
    )
}

/// One `  * <description>` line per city, in the given order.
pub fn describe_catalog(cities: &[CityRecord]) -> String {
    cities
        .iter()
        .map(|city| format!("  * {}", describe(city)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn names(cities: &[CityRecord]) -> String {
    cities
        .iter()
        .map(|city| city.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
