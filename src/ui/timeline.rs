use egui;

use super::UiState;
use crate::content;

/// Career phase list, newest first. Clicking a phase expands its detail;
/// clicking again collapses it.
pub fn draw_timeline(ctx: &egui::Context, ui_state: &mut UiState) {
    egui::SidePanel::right("timeline")
        .default_width(320.0)
        .show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading("Career Timeline");
            ui.add_space(6.0);

            egui::ScrollArea::vertical().show(ui, |ui| {
                for (i, phase) in content::CAREER_PHASES.iter().enumerate() {
                    let (r, g, b) = phase.color_rgb;
                    let color = egui::Color32::from_rgb(r, g, b);
                    let selected = ui_state.selected_phase == Some(i);

                    let header = format!("{} — {}", phase.years, phase.label);
                    if ui
                        .selectable_label(selected, egui::RichText::new(header).color(color))
                        .clicked()
                    {
                        ui_state.selected_phase = if selected { None } else { Some(i) };
                    }

                    if selected {
                        ui.add_space(2.0);
                        ui.label(egui::RichText::new(phase.title).strong());
                        ui.label(phase.project);
                        ui.label(egui::RichText::new(phase.impact).italics());
                        ui.add_space(2.0);
                        ui.horizontal_wrapped(|ui| {
                            for tech in phase.tech {
                                tech_chip(ui, tech, color);
                            }
                        });
                        ui.add_space(2.0);
                    }
                    ui.separator();
                }
            });
        });
}

fn tech_chip(ui: &mut egui::Ui, label: &str, color: egui::Color32) {
    ui.group(|ui| {
        ui.label(egui::RichText::new(label).small().color(color));
    });
}
