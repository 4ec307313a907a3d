//! Theme Resources
//!
//! Typography, color scheme, and dimension constants shared via context.

use leptos::prelude::*;

/// One text style, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font_size: f32,
    pub line_height: f32,
    pub font_weight: u16,
}

impl TextStyle {
    /// Inline CSS for this style
    pub fn css(&self) -> String {
        format!(
            "font-size: {}px; line-height: {}px; font-weight: {};",
            self.font_size, self.line_height, self.font_weight
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Typography {
    pub headline_small: TextStyle,
    pub body_medium: TextStyle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    /// Accent used by section headers
    pub primary_container: &'static str,
    pub surface: &'static str,
    pub on_surface: &'static str,
}

/// Layout constants, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimens {
    pub margin_small: f32,
    pub margin_normal: f32,
    /// Keeps short descriptions from collapsing the layout
    pub plant_description_min_height: f32,
}

/// Active theme provided via context
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub typography: Typography,
    pub colors: ColorScheme,
    pub dimens: Dimens,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            typography: Typography {
                headline_small: TextStyle {
                    font_size: 24.0,
                    line_height: 32.0,
                    font_weight: 400,
                },
                body_medium: TextStyle {
                    font_size: 14.0,
                    line_height: 20.0,
                    font_weight: 400,
                },
            },
            colors: ColorScheme {
                primary_container: "#2e7d32",
                surface: "#fdfdf6",
                on_surface: "#1a1c19",
            },
            dimens: Dimens {
                margin_small: 8.0,
                margin_normal: 16.0,
                plant_description_min_height: 120.0,
            },
        }
    }
}

/// Theme from context, default when no provider is present
pub fn use_theme() -> Theme {
    use_context::<Theme>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_style_css() {
        let css = Theme::default().typography.headline_small.css();
        assert_eq!(css, "font-size: 24px; line-height: 32px; font-weight: 400;");
    }
}
