// HeadlineScope - ui/panels/words.rs
//
// Top-N word table.

use crate::core::aggregate::WordCount;

pub fn render(ui: &mut egui::Ui, words: &[WordCount]) {
    if words.is_empty() {
        ui.weak("No words left after stopword filtering.");
        return;
    }

    egui::Grid::new("word_table")
        .num_columns(3)
        .striped(true)
        .spacing([16.0, 3.0])
        .show(ui, |ui| {
            ui.strong("#");
            ui.strong("Word");
            ui.strong("Frequency");
            ui.end_row();

            for (rank, row) in words.iter().enumerate() {
                ui.label((rank + 1).to_string());
                ui.label(egui::RichText::new(&row.word).monospace());
                ui.label(row.count.to_string());
                ui.end_row();
            }
        });
}
