//! Embedded Plant Catalog
//!
//! Seed data bundled at compile time; parsed on demand, no runtime I/O.

use crate::models::Plant;

const CATALOG_JSON: &str = include_str!("../assets/plants.json");

/// Parse the embedded catalog
pub fn load_catalog() -> Result<Vec<Plant>, String> {
    serde_json::from_str(CATALOG_JSON).map_err(|e| e.to_string())
}

/// Look up a single plant by id
pub fn find_plant(plant_id: &str) -> Result<Option<Plant>, String> {
    Ok(load_catalog()?.into_iter().find(|p| p.plant_id == plant_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_parses() {
        let catalog = load_catalog().unwrap();
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_find_plant_by_id() {
        let plant = find_plant("malus-pumila").unwrap().unwrap();
        assert_eq!(plant.name, "Apple");
        assert_eq!(plant.watering_interval, 30);
        assert_eq!(plant.grow_zone_number, 3);
    }

    #[test]
    fn test_find_unknown_plant() {
        assert_eq!(find_plant("rosa-rubiginosa").unwrap(), None);
    }

    #[test]
    fn test_watering_interval_defaults_to_weekly() {
        // The sunflower entry has no wateringInterval field
        let plant = find_plant("helianthus-annuus").unwrap().unwrap();
        assert_eq!(plant.watering_interval, 7);
    }
}
