// HeadlineScope - ui/panels/headlines.rs
//
// Sentiment table: one row per headline, in extraction order.

use crate::core::model::SentimentRecord;
use crate::ui::theme;

pub fn render(ui: &mut egui::Ui, records: &[SentimentRecord]) {
    ui.heading("Headline Sentiment Analysis");
    ui.add_space(4.0);

    egui::ScrollArea::vertical()
        .id_salt("headline_table")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            egui::Grid::new("headline_grid")
                .num_columns(3)
                .striped(true)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    ui.strong("Headline");
                    ui.strong("Sentiment");
                    ui.strong("Polarity");
                    ui.end_row();

                    for record in records {
                        ui.add(egui::Label::new(record.headline.as_str()).wrap());
                        ui.colored_label(
                            theme::sentiment_colour(record.category),
                            record.category.label(),
                        );
                        ui.label(
                            egui::RichText::new(format!("{:+.3}", record.polarity)).monospace(),
                        );
                        ui.end_row();
                    }
                });
        });
}
