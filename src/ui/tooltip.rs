use egui;

use crate::content;
use crate::radar::Blip;

/// Floating detail card for the hovered blip. Follows hover state exactly:
/// no debounce, no close animation.
pub fn draw_tooltip(ctx: &egui::Context, blip: &Blip) {
    let (r, g, b) = blip.ring.color_rgb();
    let ring_color = egui::Color32::from_rgb(r, g, b);

    egui::Window::new("blip_tooltip")
        .title_bar(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_BOTTOM, [0.0, -24.0])
        .show(ctx, |ui| {
            ui.set_max_width(280.0);
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("●").color(ring_color));
                ui.label(egui::RichText::new(blip.label).strong());
                ui.label(
                    egui::RichText::new(blip.ring.label().to_uppercase())
                        .small()
                        .color(ring_color),
                );
            });
            ui.label(egui::RichText::new(blip.description).small());
            ui.label(
                egui::RichText::new(content::QUADRANTS[blip.quadrant])
                    .small()
                    .weak(),
            );
        });
}
