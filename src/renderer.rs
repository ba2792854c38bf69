use macroquad::prelude::*;

use crate::config;
use crate::field::ParticleField;
use crate::palette::Palette;
use crate::radar::{Blip, ChartFrame, PlacedBlip, RadarView, Ring};

/// Draw the whole scene back to front: background, particle field, radar
/// chart, HUD. The egui overlay is drawn afterwards by the caller.
pub fn draw(
    field: &ParticleField,
    layout: &[PlacedBlip],
    view: &RadarView,
    catalog: &[Blip],
    frame: &ChartFrame,
    palette: &Palette,
    paused: bool,
) {
    clear_background(palette.background);
    draw_field(field, palette);
    draw_radar(layout, view, catalog, frame, palette);
    draw_hud(palette, paused);
}

fn draw_field(field: &ParticleField, palette: &Palette) {
    // Links under the dots, each pair once.
    field.for_each_link(|a, b, alpha| {
        draw_line(
            a.x,
            a.y,
            b.x,
            b.y,
            config::FIELD_LINK_THICKNESS,
            Palette::with_alpha(palette.link, alpha),
        );
    });

    for p in field.particles() {
        let pulse = p.pulse_factor();
        draw_circle(
            p.pos.x,
            p.pos.y,
            p.size * pulse,
            Palette::with_alpha(palette.particle, p.opacity * pulse),
        );
    }
}

fn draw_radar(
    layout: &[PlacedBlip],
    view: &RadarView,
    catalog: &[Blip],
    frame: &ChartFrame,
    palette: &Palette,
) {
    let center = frame.center();
    let half = frame.size * 0.5;

    // Rings, outermost first so inner strokes stay visible.
    for ring in [Ring::Assess, Ring::Trial, Ring::Adopt] {
        draw_circle_lines(
            center.x,
            center.y,
            ring.outer_radius() * half * config::RADAR_MARGIN,
            1.0,
            palette.ring_line,
        );
    }

    // Quadrant spokes.
    let outer = Ring::Assess.outer_radius() * half * config::RADAR_MARGIN;
    for angle_deg in [0.0f32, 90.0, 180.0, 270.0] {
        let dir = Vec2::from_angle(angle_deg.to_radians());
        let end = center + dir * outer;
        draw_line(center.x, center.y, end.x, end.y, 1.0, palette.spoke);
    }

    // Ring labels up the vertical axis.
    for ring in Ring::ALL {
        let r = ring.outer_radius() * half * config::RADAR_MARGIN;
        draw_text(
            ring.label(),
            center.x + 8.0,
            center.y - r + 14.0,
            16.0,
            Palette::with_alpha(palette.ring_color(ring), 0.7),
        );
    }

    // Blips: marker, hover emphasis, label.
    for placed in layout {
        let blip = &catalog[placed.index];
        let pos = frame.to_screen(placed.pos);
        let opacity = view.blip_opacity(blip);
        let hovered = view.is_hovered(placed.index);
        let ring_color = palette.ring_color(blip.ring);

        let marker_radius = if hovered {
            config::RADAR_BLIP_RADIUS_HOVERED
        } else {
            config::RADAR_BLIP_RADIUS
        };
        let marker_alpha = if hovered { 1.0 } else { 0.85 };
        draw_circle(
            pos.x,
            pos.y,
            marker_radius,
            Palette::with_alpha(ring_color, marker_alpha * opacity),
        );

        if hovered {
            draw_circle_lines(
                pos.x,
                pos.y,
                config::RADAR_HOVER_RING_RADIUS,
                1.5,
                Palette::with_alpha(ring_color, 0.4 * opacity),
            );
        }

        let label_color = if hovered {
            ring_color
        } else {
            palette.text_muted
        };
        let font_size = 14.0;
        let width = measure_text(blip.label, None, font_size as u16, 1.0).width;
        draw_text(
            blip.label,
            pos.x - width * 0.5,
            pos.y - 10.0,
            font_size,
            Palette::with_alpha(label_color, opacity),
        );
    }
}

fn draw_hud(palette: &Palette, paused: bool) {
    let fps_text = format!("FPS: {}", get_fps());
    draw_text(&fps_text, 10.0, screen_height() - 12.0, 16.0, palette.text_faint);

    if paused {
        let pause_text = "FIELD PAUSED (Space to resume)";
        let tw = measure_text(pause_text, None, 20, 1.0).width;
        let x = screen_width() * 0.5 - tw * 0.5;
        draw_text(pause_text, x, screen_height() - 14.0, 20.0, palette.text_muted);
    }
}
