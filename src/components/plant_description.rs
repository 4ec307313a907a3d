//! Plant Description
//!
//! Renders the HTML-formatted description through the rich-text host
//! (`inner_html`), links staying tappable.

use leptos::prelude::*;

use crate::richtext;
use crate::theme::use_theme;

/// Description area; the conversion is memoized on the description
/// value so re-renders do not re-parse
#[component]
pub fn PlantDescription(description: String) -> impl IntoView {
    let theme = use_theme();
    let rendered = Memo::new(move |_| richtext::from_html(&description));
    let style = format!(
        "min-height: {}px; padding: {}px; {}",
        theme.dimens.plant_description_min_height,
        theme.dimens.margin_normal,
        theme.typography.body_medium.css(),
    );

    view! {
        <div class="plant-description" style=style inner_html=move || rendered.get()></div>
    }
}
