//! UI Components
//!
//! Leptos components for the plant detail screen.

mod plant_description;
mod plant_detail;
mod plant_name;
mod plant_watering;

pub use plant_description::PlantDescription;
pub use plant_detail::{PlantDetailDescription, PlantDetailsContent};
pub use plant_name::PlantName;
pub use plant_watering::PlantWatering;
