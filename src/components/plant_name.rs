//! Plant Name Label

use leptos::prelude::*;

use crate::theme::use_theme;

/// Centered plant name in the headline-small style
#[component]
pub fn PlantName(name: String) -> impl IntoView {
    let theme = use_theme();
    let style = format!(
        "{} margin: 0; padding: 0 {}px; width: 100%; box-sizing: border-box; text-align: center;",
        theme.typography.headline_small.css(),
        theme.dimens.margin_small,
    );

    view! {
        <h1 class="plant-name" style=style>{name}</h1>
    }
}
