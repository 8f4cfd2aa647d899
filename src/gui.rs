// HeadlineScope - gui.rs
//
// Top-level eframe::App implementation.
// Wires together all UI panels and manages the refresh lifecycle.

use crate::app::cache::CachedFetcher;
use crate::app::fetch::{Fetcher, HttpFetcher};
use crate::app::refresh::{RefreshManager, RefreshProgress};
use crate::app::state::AppState;
use crate::core::export;
use crate::core::report::EMPTY_STATE_MESSAGE;
use crate::core::tokenize::StopwordSet;
use crate::ui;
use crate::util::constants;
use crate::util::error::ExportError;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Export targets offered by the Export menu.
#[derive(Debug, Clone, Copy)]
enum ExportKind {
    SentimentCsv,
    WordsCsv,
    SnapshotJson,
}

impl ExportKind {
    fn filter(self) -> (&'static str, &'static [&'static str]) {
        match self {
            ExportKind::SentimentCsv | ExportKind::WordsCsv => ("CSV", &["csv"]),
            ExportKind::SnapshotJson => ("JSON", &["json"]),
        }
    }

    fn default_file_name(self) -> &'static str {
        match self {
            ExportKind::SentimentCsv => constants::DEFAULT_SENTIMENT_CSV_NAME,
            ExportKind::WordsCsv => constants::DEFAULT_WORDS_CSV_NAME,
            ExportKind::SnapshotJson => constants::DEFAULT_SNAPSHOT_JSON_NAME,
        }
    }
}

/// The HeadlineScope application.
pub struct HeadlineScopeApp {
    pub state: AppState,
    refresh_manager: RefreshManager,
    cache: Arc<CachedFetcher<HttpFetcher>>,
    export_dir: PathBuf,
}

impl HeadlineScopeApp {
    /// Create the application and kick off the first refresh.
    pub fn new(
        state: AppState,
        cache: Arc<CachedFetcher<HttpFetcher>>,
        export_dir: PathBuf,
    ) -> Self {
        let fetcher: Arc<dyn Fetcher> = cache.clone();
        let mut app = Self {
            state,
            refresh_manager: RefreshManager::new(fetcher, StopwordSet::english()),
            cache,
            export_dir,
        };
        app.start_refresh(false);
        app
    }

    /// Start a refresh. `force` drops the cached page first.
    fn start_refresh(&mut self, force: bool) {
        if force {
            self.cache.invalidate(&self.state.source_url);
        }
        self.state.begin_refresh();
        self.refresh_manager
            .start_refresh(self.state.source_url.clone());
    }

    fn export(&mut self, kind: ExportKind) {
        let Some(run) = self.state.last_run.as_ref() else {
            return;
        };
        let (filter_name, extensions) = kind.filter();
        let Some(dest) = rfd::FileDialog::new()
            .set_directory(&self.export_dir)
            .add_filter(filter_name, extensions)
            .set_file_name(kind.default_file_name())
            .save_file()
        else {
            return;
        };

        let snapshot = run.snapshot(self.state.top_n);
        let result = create_file(&dest).and_then(|file| match kind {
            ExportKind::SentimentCsv => {
                export::export_sentiment_csv(snapshot.sentiments, file, &dest)
            }
            ExportKind::WordsCsv => export::export_top_words_csv(&snapshot.top_words, file, &dest),
            ExportKind::SnapshotJson => export::export_json(&snapshot, file, &dest),
        });

        self.state.status_message = match result {
            Ok(n) => {
                tracing::info!(path = %dest.display(), rows = n, "Export complete");
                format!("Exported {n} rows to {}.", dest.display())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Export failed");
                format!("Export failed: {e}")
            }
        };
    }
}

fn create_file(path: &Path) -> Result<std::fs::File, ExportError> {
    std::fs::File::create(path).map_err(|e| ExportError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

impl eframe::App for HeadlineScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll for refresh progress
        for msg in self.refresh_manager.poll_progress() {
            match msg {
                RefreshProgress::Started { url } => {
                    tracing::debug!(url = %url, "Refresh worker running");
                }
                RefreshProgress::Completed(run) => {
                    self.state.finish_refresh(*run);
                }
            }
        }
        if self.state.refresh_in_progress && !self.refresh_manager.is_running() {
            // Worker vanished without reporting.
            self.state.refresh_in_progress = false;
            self.state.status_message = "Refresh aborted unexpectedly.".to_string();
        }
        // Keep polling while the worker runs.
        if self.state.refresh_in_progress {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        let has_data = self.state.analysis().is_some();

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    ui.add_enabled_ui(!self.state.refresh_in_progress, |ui| {
                        if ui.button("Refresh").clicked() {
                            self.start_refresh(true);
                            ui.close_menu();
                        }
                    });
                    ui.separator();
                    ui.add_enabled_ui(has_data, |ui| {
                        ui.menu_button("Export", |ui| {
                            if ui.button("Sentiment Table (CSV)...").clicked() {
                                self.export(ExportKind::SentimentCsv);
                                ui.close_menu();
                            }
                            if ui.button("Top Words (CSV)...").clicked() {
                                self.export(ExportKind::WordsCsv);
                                ui.close_menu();
                            }
                            if ui.button("Full Snapshot (JSON)...").clicked() {
                                self.export(ExportKind::SnapshotJson);
                                ui.close_menu();
                            }
                        });
                    });
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("View", |ui| {
                    if ui.button("Run Summary").clicked() {
                        self.state.show_summary = true;
                        ui.close_menu();
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.state.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.state.refresh_in_progress {
                    ui.spinner();
                }
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if self.state.debug_mode {
                        ui.label(
                            egui::RichText::new("DEBUG")
                                .color(ui::theme::WARNING_TEXT)
                                .strong(),
                        );
                        ui.separator();
                    }
                    if let Some(analysis) = self.state.analysis() {
                        ui.label(format!("{} headlines", analysis.headline_count()));
                    }
                });
            });
        });

        // Right panel: charts and top words
        if let Some(analysis) = self.state.analysis() {
            let top_words = analysis.top_words(self.state.top_n);
            egui::SidePanel::right("charts")
                .default_width(ui::theme::SIDE_PANEL_WIDTH)
                .resizable(true)
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical()
                        .id_salt("charts_scroll")
                        .show(ui, |ui| {
                            ui::panels::charts::sentiment_counts(ui, &analysis.sentiment_counts());
                            ui.add_space(12.0);
                            ui.separator();
                            ui::panels::charts::top_words(ui, &top_words);
                            ui.add_space(12.0);
                            ui.separator();
                            ui::panels::words::render(ui, &top_words);
                        });
                });
        }

        // Central panel: sentiment table or empty state
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(analysis) = self.state.analysis() {
                ui::panels::headlines::render(ui, &analysis.sentiments);
            } else if let Some(reason) = self.state.empty_reason() {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.label(
                        egui::RichText::new(EMPTY_STATE_MESSAGE)
                            .color(ui::theme::WARNING_TEXT)
                            .strong(),
                    );
                    ui.add_space(6.0);
                    ui.weak(reason);
                });
            } else {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.spinner();
                    ui.label("Fetching headlines...");
                });
            }
        });

        // Dialogs (modal-ish)
        ui::panels::summary::render(ctx, &mut self.state);
        ui::panels::about::render(ctx, &mut self.state);
    }
}
