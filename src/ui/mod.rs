pub mod stats_panel;
pub mod timeline;
pub mod toolbar;
pub mod tooltip;

use crate::config;
use crate::content;
use crate::counter::CountUp;
use crate::field::ParticleField;
use crate::radar::RadarView;
use crate::theme::{Theme, ThemeStore};

/// Tracks which overlay panels are open, plus the state they own.
pub struct UiState {
    pub show_timeline: bool,
    pub show_stats: bool,
    pub paused: bool,
    pub selected_phase: Option<usize>,
    pub counters: Vec<CountUp>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            show_timeline: false,
            show_stats: true,
            paused: false,
            selected_phase: None,
            counters: content::STATS
                .iter()
                .map(|s| CountUp::new(s.value, config::COUNTER_DURATION))
                .collect(),
        }
    }

    /// Advance stat animations; only runs while the panel is visible.
    pub fn tick_counters(&mut self, dt: f32) {
        if self.show_stats {
            for c in &mut self.counters {
                c.tick(dt);
            }
        }
    }

    pub fn restart_counters(&mut self) {
        for c in &mut self.counters {
            c.restart();
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Draw all egui overlay panels.
pub fn draw_ui(
    view: &mut RadarView,
    store: &mut ThemeStore,
    ui_state: &mut UiState,
    field: &ParticleField,
) {
    egui_macroquad::ui(|ctx| {
        // The overlay follows the scene theme.
        ctx.set_visuals(match store.theme() {
            Theme::Dark => egui::Visuals::dark(),
            Theme::Light => egui::Visuals::light(),
        });

        toolbar::draw_toolbar(ctx, view, store, ui_state, field);

        if let Some(blip) = view.hovered.and_then(|i| content::BLIPS.get(i)) {
            tooltip::draw_tooltip(ctx, blip);
        }

        if ui_state.show_timeline {
            timeline::draw_timeline(ctx, ui_state);
        }

        if ui_state.show_stats {
            stats_panel::draw_stats(ctx, ui_state);
        }
    });

    egui_macroquad::draw();
}
