// HeadlineScope - ui/theme.rs
//
// Colour scheme, sentiment colour mapping, and layout constants.
// No dependencies on app state or business logic.

use crate::core::model::SentimentCategory;
use egui::Color32;

/// Colour for a sentiment category (table text and chart bars).
pub fn sentiment_colour(category: SentimentCategory) -> Color32 {
    match category {
        SentimentCategory::Positive => Color32::from_rgb(34, 197, 94),  // Green 500
        SentimentCategory::Negative => Color32::from_rgb(239, 68, 68),  // Red 500
        SentimentCategory::Neutral => Color32::from_rgb(156, 163, 175), // Gray 400
    }
}

/// Bar colour for the top-words chart.
pub const WORD_BAR: Color32 = Color32::from_rgb(59, 130, 246); // Blue 500

/// Empty-state warning text.
pub const WARNING_TEXT: Color32 = Color32::from_rgb(253, 186, 116); // Orange 300

/// Layout constants.
pub const SIDE_PANEL_WIDTH: f32 = 380.0;
pub const BAR_HEIGHT: f32 = 16.0;
pub const BAR_MAX_WIDTH: f32 = 260.0;
pub const CHART_LABEL_WIDTH: f32 = 90.0;

/// Apply dark/light visuals and scale every text style from `font_size`.
pub fn apply(ctx: &egui::Context, dark_mode: bool, font_size: f32) {
    ctx.set_visuals(if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });
    ctx.style_mut(|style| {
        for (text_style, font_id) in style.text_styles.iter_mut() {
            font_id.size = match text_style {
                egui::TextStyle::Heading => font_size * 1.4,
                egui::TextStyle::Small => font_size * 0.8,
                _ => font_size,
            };
        }
    });
}
