// HeadlineScope - ui/panels/charts.rs
//
// Painter-drawn horizontal bar charts: headlines per sentiment category and
// the top-N word frequencies. Bars are scaled to the largest value shown.

use crate::core::aggregate::WordCount;
use crate::core::model::{SentimentCategory, SentimentCounts};
use crate::ui::theme;

/// Bar chart of headline counts per sentiment category.
pub fn sentiment_counts(ui: &mut egui::Ui, counts: &SentimentCounts) {
    ui.strong("Sentiment Distribution");
    let max = SentimentCategory::all()
        .iter()
        .map(|&c| counts.get(c))
        .max()
        .unwrap_or(0);

    egui::Grid::new("sentiment_chart")
        .num_columns(3)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            for &category in SentimentCategory::all() {
                let count = counts.get(category);
                bar_row(
                    ui,
                    category.label(),
                    count,
                    max,
                    theme::sentiment_colour(category),
                );
            }
        });
}

/// Horizontal bar chart of the most frequent words.
pub fn top_words(ui: &mut egui::Ui, words: &[WordCount]) {
    ui.strong(format!("Top {} Most Common Words", words.len()));
    // Sorted descending, so the first row is the maximum.
    let max = words.first().map(|w| w.count).unwrap_or(0);

    egui::Grid::new("word_chart")
        .num_columns(3)
        .spacing([8.0, 3.0])
        .show(ui, |ui| {
            for row in words {
                bar_row(ui, &row.word, row.count, max, theme::WORD_BAR);
            }
        });
}

fn bar_row(ui: &mut egui::Ui, label: &str, value: usize, max: usize, colour: egui::Color32) {
    ui.add_sized(
        [theme::CHART_LABEL_WIDTH, theme::BAR_HEIGHT],
        egui::Label::new(label).truncate(),
    );

    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(theme::BAR_MAX_WIDTH, theme::BAR_HEIGHT),
        egui::Sense::hover(),
    );
    if max > 0 && value > 0 {
        let fraction = value as f32 / max as f32;
        let bar = egui::Rect::from_min_size(
            rect.min,
            egui::vec2((rect.width() * fraction).max(2.0), rect.height()),
        );
        ui.painter().rect_filled(bar, 2.0, colour);
    }
    response.on_hover_text(format!("{label}: {value}"));

    ui.label(value.to_string());
    ui.end_row();
}
