// HeadlineScope - ui/panels/summary.rs
//
// Run summary modal window.
// Shows what the last refresh fetched, how extraction went, and overall
// analysis statistics.

use crate::app::pipeline::PipelineOutcome;
use crate::app::state::AppState;
use crate::core::extract::ExtractionReport;
use crate::core::model::SentimentCategory;
use crate::ui::theme;

/// Render the summary dialog (if state.show_summary is true).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_summary {
        return;
    }

    let mut open = true;
    egui::Window::new("Run Summary")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .min_width(380.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            match &state.last_run {
                None => {
                    ui.label("No refresh has completed yet.");
                }
                Some(run) => {
                    // -----------------------------------------------------------------
                    // Source
                    // -----------------------------------------------------------------
                    ui.strong("Source");
                    egui::Grid::new("summary_source")
                        .num_columns(2)
                        .spacing([16.0, 4.0])
                        .show(ui, |ui| {
                            ui.label("URL:");
                            ui.label(&run.source_url);
                            ui.end_row();

                            ui.label("Fetched at:");
                            ui.label(
                                run.fetched_at
                                    .with_timezone(&chrono::Local)
                                    .format("%Y-%m-%d %H:%M:%S")
                                    .to_string(),
                            );
                            ui.end_row();

                            ui.label("Outcome:");
                            ui.label(run.status_message());
                            ui.end_row();
                        });

                    match &run.outcome {
                        PipelineOutcome::FetchFailed(_) => {}
                        PipelineOutcome::NoHeadlines { report, .. } => {
                            ui.add_space(8.0);
                            ui.separator();
                            extraction_grid(ui, report);
                        }
                        PipelineOutcome::Analysed { report, analysis } => {
                            ui.add_space(8.0);
                            ui.separator();
                            extraction_grid(ui, report);

                            // ---------------------------------------------------------
                            // Analysis
                            // ---------------------------------------------------------
                            ui.add_space(8.0);
                            ui.separator();
                            ui.strong("Analysis");
                            let counts = analysis.sentiment_counts();
                            egui::Grid::new("summary_analysis")
                                .num_columns(2)
                                .spacing([16.0, 4.0])
                                .show(ui, |ui| {
                                    ui.label("Headlines:");
                                    ui.label(analysis.headline_count().to_string());
                                    ui.end_row();

                                    for &category in SentimentCategory::all() {
                                        ui.label(format!("{}:", category.label()));
                                        ui.colored_label(
                                            theme::sentiment_colour(category),
                                            counts.get(category).to_string(),
                                        );
                                        ui.end_row();
                                    }

                                    ui.label("Mean polarity:");
                                    ui.label(format!("{:+.3}", analysis.mean_polarity()));
                                    ui.end_row();

                                    ui.label("Words counted:");
                                    ui.label(analysis.word_frequencies.total().to_string());
                                    ui.end_row();

                                    ui.label("Distinct words:");
                                    ui.label(analysis.word_frequencies.len().to_string());
                                    ui.end_row();
                                });
                        }
                    }
                }
            }

            ui.add_space(8.0);
            ui.separator();
            if ui.button("Close").clicked() {
                state.show_summary = false;
            }
        });

    if !open {
        state.show_summary = false;
    }
}

fn extraction_grid(ui: &mut egui::Ui, report: &ExtractionReport) {
    ui.strong("Extraction");
    egui::Grid::new("summary_extraction")
        .num_columns(2)
        .spacing([16.0, 4.0])
        .show(ui, |ui| {
            ui.label("Title-line links:");
            ui.label(report.title_line_links.to_string());
            ui.end_row();

            ui.label("Legacy title links:");
            ui.label(report.legacy_links.to_string());
            ui.end_row();

            ui.label("\"More\" links skipped:");
            ui.label(report.more_links_skipped.to_string());
            ui.end_row();

            ui.label("Duplicates skipped:");
            ui.label(report.duplicates_skipped.to_string());
            ui.end_row();
        });
}
