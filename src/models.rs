//! Frontend Models
//!
//! Data structures matching the embedded catalog records.

use serde::{Deserialize, Serialize};

/// Plant record (matches the catalog JSON)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    pub plant_id: String,
    pub name: String,
    /// HTML-formatted care description
    pub description: String,
    pub grow_zone_number: u32,
    /// Days between waterings
    #[serde(default = "default_watering_interval")]
    pub watering_interval: u32,
    #[serde(default)]
    pub image_url: String,
}

fn default_watering_interval() -> u32 {
    7
}
