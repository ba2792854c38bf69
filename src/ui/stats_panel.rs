use egui;

use super::UiState;
use crate::content;

/// Headline metrics with count-up animation, three tiles per row.
pub fn draw_stats(ctx: &egui::Context, ui_state: &UiState) {
    egui::Window::new("Impact at Scale")
        .anchor(egui::Align2::LEFT_BOTTOM, [16.0, -16.0])
        .resizable(false)
        .show(ctx, |ui| {
            egui::Grid::new("stats_grid")
                .num_columns(3)
                .spacing([24.0, 10.0])
                .show(ui, |ui| {
                    for (i, (stat, counter)) in content::STATS
                        .iter()
                        .zip(&ui_state.counters)
                        .enumerate()
                    {
                        ui.vertical(|ui| {
                            ui.label(
                                egui::RichText::new(format!(
                                    "{}{}",
                                    counter.value(),
                                    stat.suffix
                                ))
                                .heading()
                                .strong(),
                            );
                            ui.label(egui::RichText::new(stat.label).small());
                            ui.label(egui::RichText::new(stat.description).small().weak());
                        });
                        if i % 3 == 2 {
                            ui.end_row();
                        }
                    }
                });
        });
}
