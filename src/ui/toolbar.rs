use egui;

use super::UiState;
use crate::content;
use crate::field::ParticleField;
use crate::radar::RadarView;
use crate::theme::ThemeStore;

/// Slim status strip + compact controls.
pub fn draw_toolbar(
    ctx: &egui::Context,
    view: &mut RadarView,
    store: &mut ThemeStore,
    ui_state: &mut UiState,
    field: &ParticleField,
) {
    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.add_space(3.0);
        ui.horizontal_wrapped(|ui| {
            title_badge(ui, "ORBIT");

            ui.separator();
            compact_group(ui, "Quadrant", |ui| {
                if ui
                    .selectable_label(view.active_quadrant.is_none(), "All")
                    .clicked()
                {
                    view.clear_quadrant();
                }
                for (i, name) in content::QUADRANTS.iter().enumerate() {
                    if ui
                        .selectable_label(view.active_quadrant == Some(i), *name)
                        .clicked()
                    {
                        view.toggle_quadrant(i);
                    }
                }
            });

            compact_group(ui, "Theme", |ui| {
                if ui.button(store.theme().label()).clicked() {
                    store.toggle();
                }
            });

            compact_group(ui, "Field", |ui| {
                let pause_label = if ui_state.paused { "Play" } else { "Pause" };
                if ui.button(pause_label).clicked() {
                    ui_state.paused = !ui_state.paused;
                }
            });

            compact_group(ui, "Panels", |ui| {
                ui.toggle_value(&mut ui_state.show_timeline, "Timeline");
                let had_stats = ui_state.show_stats;
                ui.toggle_value(&mut ui_state.show_stats, "Stats");
                if !had_stats && ui_state.show_stats {
                    ui_state.restart_counters();
                }
            });
        });

        ui.add_space(4.0);
        ui.horizontal_wrapped(|ui| {
            metric_chip(ui, "Particles", format!("{}", field.len()));
            metric_chip(ui, "Blips", format!("{}", content::BLIPS.len()));
            let filter = view
                .active_quadrant
                .map(|q| content::QUADRANTS[q])
                .unwrap_or("All");
            metric_chip(ui, "Filter", filter.to_string());
            metric_chip(ui, "Theme", store.theme().label().to_string());
        });
        ui.add_space(3.0);
    });
}

fn title_badge(ui: &mut egui::Ui, label: &str) {
    let text = egui::RichText::new(label)
        .strong()
        .color(egui::Color32::from_rgb(20, 184, 166));
    ui.label(text);
}

fn compact_group(ui: &mut egui::Ui, heading: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    ui.group(|ui| {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(heading).small().weak());
            add_contents(ui);
        });
    });
}

fn metric_chip(ui: &mut egui::Ui, key: &str, value: String) {
    let text = egui::RichText::new(format!("{key}: {value}")).small();
    ui.group(|ui| {
        ui.label(text);
    });
}
