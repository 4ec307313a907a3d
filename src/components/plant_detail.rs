//! Plant Detail Screen
//!
//! Observes the view-model's current plant and composes the detail
//! column once it is populated.

use leptos::prelude::*;

use crate::models::Plant;
use crate::viewmodel::PlantDetailViewModel;

use super::{PlantDescription, PlantName, PlantWatering};

/// Detail column for one plant record: name, watering needs,
/// description, in that order
#[component]
pub fn PlantDetailsContent(plant: Plant) -> impl IntoView {
    view! {
        <div
            class="plant-details"
            style="display: flex; flex-direction: column; width: 100%;"
        >
            <PlantName name=plant.name />
            <PlantWatering watering_interval=plant.watering_interval />
            <PlantDescription description=plant.description />
        </div>
    }
}

/// Detail screen bound to the view-model; renders nothing until a
/// plant arrives
#[component]
pub fn PlantDetailDescription(view_model: PlantDetailViewModel) -> impl IntoView {
    move || {
        view_model
            .plant
            .get()
            .map(|plant| view! { <PlantDetailsContent plant=plant /> })
    }
}
