use macroquad::prelude::*;

mod config;
mod content;
mod counter;
mod field;
mod palette;
mod qa;
mod radar;
mod renderer;
mod theme;
mod ui;

use field::ParticleField;
use palette::Palette;
use radar::{ChartFrame, RadarView};
use theme::ThemeStore;
use ui::UiState;

fn window_conf() -> Conf {
    Conf {
        window_title: "ORBIT — Tech Radar".to_string(),
        window_width: 1280,
        window_height: 800,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let args: Vec<String> = std::env::args().collect();
    let qa_opts = qa::QaOptions::from_args(&args);
    let seed = qa_opts.map(|o| o.seed).unwrap_or(42);
    let mut director = qa_opts.map(qa::QaDirector::new);
    if let Some(opts) = qa_opts {
        eprintln!(
            "[ORBIT] QA mode: scenario={}, ticks={}, seed={}",
            opts.scenario.label(),
            opts.ticks,
            opts.seed
        );
    }

    let mut store = ThemeStore::open(config::SETTINGS_FILE);
    let mut field = ParticleField::new(screen_width(), screen_height(), seed);
    let mut view = RadarView::new();
    let mut ui_state = UiState::new();
    let mut last_size = vec2(screen_width(), screen_height());

    loop {
        // A resize throws the whole particle set away and regenerates it.
        let size = vec2(screen_width(), screen_height());
        if size != last_size {
            last_size = size;
            field.resize(size.x, size.y);
        }

        let frame = ChartFrame::centered(size.x, size.y);
        let layout = radar::compute_layout(content::BLIPS, frame.size);

        // Pointer input goes to the scene only when egui doesn't claim it.
        let mut egui_wants_pointer = false;
        egui_macroquad::cfg(|ctx| {
            egui_wants_pointer = ctx.wants_pointer_input();
        });
        if egui_wants_pointer {
            field.clear_pointer();
            view.set_hovered(None);
        } else {
            let mouse = Vec2::from(mouse_position());
            field.set_pointer(mouse);
            view.set_hovered(radar::hit_test(&layout, frame.to_local(mouse)));
        }

        if is_key_pressed(KeyCode::Space) {
            ui_state.paused = !ui_state.paused;
        }
        if is_key_pressed(KeyCode::T) {
            store.toggle();
        }
        for (key, quadrant) in [
            (KeyCode::Key1, 0),
            (KeyCode::Key2, 1),
            (KeyCode::Key3, 2),
            (KeyCode::Key4, 3),
        ] {
            if is_key_pressed(key) {
                view.toggle_quadrant(quadrant);
            }
        }
        if is_key_pressed(KeyCode::Escape) {
            view.clear_quadrant();
        }

        let mut qa_done = false;
        if let Some(d) = director.as_mut() {
            d.apply(&mut field, &mut view, &mut store, &mut ui_state.paused);
            qa_done = d.finished();
        }
        if qa_done {
            if let Some(d) = director.take() {
                let code = d.finish(&field, &view, &store);
                std::process::exit(code);
            }
        }

        if !ui_state.paused {
            field.tick();
        }
        ui_state.tick_counters(get_frame_time());

        let palette = Palette::for_theme(store.theme());
        renderer::draw(
            &field,
            &layout,
            &view,
            content::BLIPS,
            &frame,
            palette,
            ui_state.paused,
        );

        ui::draw_ui(&mut view, &mut store, &mut ui_state, &field);

        next_frame().await;
    }
}
