//! Plant Watering Block
//!
//! Header label plus the pluralized watering interval phrase.

use leptos::prelude::*;

use crate::i18n::{self, Locale};
use crate::theme::use_theme;

/// Watering needs for the given interval in days
#[component]
pub fn PlantWatering(watering_interval: u32) -> impl IntoView {
    let theme = use_theme();
    let locale = use_context::<Locale>().unwrap_or_default();

    let header_style = format!(
        "color: {}; font-weight: bold; margin-top: {}px; padding: 0 {}px;",
        theme.colors.primary_container, theme.dimens.margin_normal, theme.dimens.margin_small,
    );
    let phrase_style = format!(
        "margin-top: {}px; padding: 0 {}px;",
        theme.dimens.margin_normal, theme.dimens.margin_small,
    );

    view! {
        <div
            class="plant-watering"
            style="display: flex; flex-direction: column; align-items: center; width: 100%;"
        >
            <span class="watering-header" style=header_style>
                {i18n::watering_header(locale)}
            </span>
            <span class="watering-interval" style=phrase_style>
                {i18n::watering_needs(locale, watering_interval)}
            </span>
        </div>
    }
}
