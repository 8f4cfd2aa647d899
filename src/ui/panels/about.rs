// HeadlineScope - ui/panels/about.rs
//
// About dialog: shown from the Help menu.
// Rendered as a centred, non-resizable, non-collapsible modal window.

use crate::app::state::AppState;
use crate::core::lexicon::Lexicon;
use crate::core::sentiment::{NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};
use crate::core::tokenize::StopwordSet;
use crate::util::constants;

/// Render the About dialog (if `state.show_about` is true).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_about {
        return;
    }

    let mut open = true;
    egui::Window::new(format!("About {}", constants::APP_NAME))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .min_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(8.0);

            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(format!("\u{1f4f0}  {}", constants::APP_NAME))
                        .size(28.0)
                        .strong(),
                );
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new(format!("v{}", constants::APP_VERSION))
                        .size(14.0)
                        .weak(),
                );
            });

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(8.0);

            ui.vertical_centered(|ui| {
                ui.label("Front-page headlines with lexicon sentiment");
                ui.label("and word-frequency analysis.");
            });

            ui.add_space(10.0);

            ui.vertical_centered(|ui| {
                ui.label("Source:");
                ui.hyperlink_to(&state.source_url, &state.source_url);
            });

            ui.add_space(10.0);

            egui::Grid::new("about_model_grid")
                .num_columns(2)
                .spacing([16.0, 4.0])
                .show(ui, |ui| {
                    ui.label("Sentiment lexicon:");
                    ui.label(format!("{} entries", Lexicon::builtin().len()));
                    ui.end_row();

                    ui.label("Thresholds:");
                    ui.label(format!(
                        "positive > {POSITIVE_THRESHOLD}, negative < {NEGATIVE_THRESHOLD}"
                    ));
                    ui.end_row();

                    ui.label("Stopwords:");
                    ui.label(format!("{} words", StopwordSet::english().len()));
                    ui.end_row();

                    ui.label("Top words shown:");
                    ui.label(state.top_n.to_string());
                    ui.end_row();
                });

            ui.add_space(8.0);
            ui.separator();
            ui.add_space(6.0);

            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("MIT License \u{00b7} \u{00a9} 2026 Swatto")
                        .small()
                        .weak(),
                );
                ui.label(egui::RichText::new("Built with Rust & egui").small().weak());
            });

            ui.add_space(8.0);
        });

    if !open {
        state.show_about = false;
    }
}
