//! Greenhouse Frontend App
//!
//! Mounts the plant detail screen against its view-model and provides
//! theme and locale to the component tree.

use leptos::prelude::*;

use crate::components::PlantDetailDescription;
use crate::i18n::Locale;
use crate::theme::Theme;
use crate::viewmodel::PlantDetailViewModel;

/// Plant featured on startup
const FEATURED_PLANT_ID: &str = "malus-pumila";

#[component]
pub fn App() -> impl IntoView {
    let view_model = PlantDetailViewModel::new();
    let theme = Theme::default();
    let locale = Locale::detect();

    // Provide resources to all children
    provide_context(theme);
    provide_context(locale);

    // Kick off the initial load on mount
    Effect::new(move |_| {
        log::debug!("[APP] loading featured plant {}", FEATURED_PLANT_ID);
        view_model.load(FEATURED_PLANT_ID);
    });

    let layout_style = format!(
        "min-height: 100vh; background: {}; color: {};",
        theme.colors.surface, theme.colors.on_surface,
    );

    view! {
        <div class="app-layout" style=layout_style>
            <main class="main-content" style="max-width: 640px; margin: 0 auto;">
                <PlantDetailDescription view_model=view_model />
            </main>
        </div>
    }
}
