//! Plant Detail View-Model
//!
//! Owns the observable "current plant" value consumed by the detail
//! screen. The value is absent until a load resolves.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::data;
use crate::models::Plant;

/// Simulated repository latency
const LOAD_DELAY_MS: u32 = 150;

/// Observable source for the detail screen
#[derive(Clone, Copy)]
pub struct PlantDetailViewModel {
    /// Current plant, absent until loaded - read
    pub plant: ReadSignal<Option<Plant>>,
    set_plant: WriteSignal<Option<Plant>>,
}

impl PlantDetailViewModel {
    pub fn new() -> Self {
        let (plant, set_plant) = signal(None);
        Self { plant, set_plant }
    }

    /// Resolve a plant from the catalog on a deferred task
    pub fn load(&self, plant_id: &str) {
        let set_plant = self.set_plant;
        let plant_id = plant_id.to_string();
        spawn_local(async move {
            TimeoutFuture::new(LOAD_DELAY_MS).await;
            match data::find_plant(&plant_id) {
                Ok(Some(plant)) => {
                    log::debug!("[VM] loaded plant {}", plant.plant_id);
                    set_plant.set(Some(plant));
                }
                Ok(None) => log::warn!("[VM] unknown plant id: {}", plant_id),
                Err(e) => log::warn!("[VM] catalog error: {}", e),
            }
        });
    }
}
