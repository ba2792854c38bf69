use serde::Serialize;
use std::path::PathBuf;

use crate::config;
use crate::content;
use crate::field::ParticleField;
use crate::radar::{self, RadarView};
use crate::theme::{Theme, ThemeStore};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum QaScenario {
    Baseline,
    ResizeProbe,
}

impl QaScenario {
    pub fn parse_cli(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "baseline" => Some(Self::Baseline),
            "resize" | "resize-probe" => Some(Self::ResizeProbe),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Baseline => "baseline",
            Self::ResizeProbe => "resize_probe",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct QaOptions {
    pub scenario: QaScenario,
    pub ticks: u64,
    pub seed: u64,
}

impl QaOptions {
    /// Parse `--qa <scenario> [--ticks N] [--seed N]`. None means the app
    /// runs interactively.
    pub fn from_args(args: &[String]) -> Option<Self> {
        let mut scenario = None;
        let mut ticks = 240u64;
        let mut seed = 42u64;
        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--qa" => {
                    scenario = args.get(i + 1).and_then(|v| QaScenario::parse_cli(v));
                    i += 2;
                }
                "--ticks" => {
                    if let Some(v) = args.get(i + 1).and_then(|v| v.parse().ok()) {
                        ticks = v;
                    }
                    i += 2;
                }
                "--seed" => {
                    if let Some(v) = args.get(i + 1).and_then(|v| v.parse().ok()) {
                        seed = v;
                    }
                    i += 2;
                }
                _ => i += 1,
            }
        }
        scenario.map(|scenario| Self {
            scenario,
            ticks,
            seed,
        })
    }
}

#[derive(Clone, Debug)]
enum QaAction {
    ToggleQuadrant(usize),
    ClearFilter,
    HoverBlip(&'static str),
    ClearHover,
    ToggleTheme,
    SetPaused(bool),
    ResizeField(f32, f32),
}

#[derive(Clone, Debug, Serialize)]
pub struct QaActionLog {
    pub tick: u64,
    pub action: String,
    pub details: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct QaCheck {
    pub name: String,
    pub passed: bool,
    pub details: String,
}

#[derive(Debug, Serialize)]
pub struct QaReport {
    pub scenario: String,
    pub seed: u64,
    pub final_tick: u64,
    pub action_count: usize,
    pub overall_status: String,
    pub checks: Vec<QaCheck>,
    pub actions: Vec<QaActionLog>,
}

/// Drives the app through a scripted scenario, observes invariants every
/// frame and writes a JSON report at the end.
pub struct QaDirector {
    opts: QaOptions,
    schedule: Vec<(u64, QaAction)>,
    next_action_idx: usize,
    action_logs: Vec<QaActionLog>,
    checks: Vec<QaCheck>,
    tick: u64,
    theme_at_start: Option<Theme>,
    out_of_bounds_samples: u64,
    non_finite_samples: u64,
}

impl QaDirector {
    pub fn new(opts: QaOptions) -> Self {
        Self {
            opts,
            schedule: build_schedule(opts.scenario),
            next_action_idx: 0,
            action_logs: Vec::new(),
            checks: Vec::new(),
            tick: 0,
            theme_at_start: None,
            out_of_bounds_samples: 0,
            non_finite_samples: 0,
        }
    }

    pub fn finished(&self) -> bool {
        self.tick >= self.opts.ticks
    }

    /// Run once per frame before the update step: apply due actions, then
    /// sample field invariants.
    pub fn apply(
        &mut self,
        field: &mut ParticleField,
        view: &mut RadarView,
        store: &mut ThemeStore,
        paused: &mut bool,
    ) {
        if self.theme_at_start.is_none() {
            self.theme_at_start = Some(store.theme());
        }

        while self.next_action_idx < self.schedule.len()
            && self.schedule[self.next_action_idx].0 <= self.tick
        {
            let (tick, action) = self.schedule[self.next_action_idx].clone();
            self.execute_action(tick, &action, field, view, store, paused);
            self.next_action_idx += 1;
        }

        self.observe_field(field);
        self.tick += 1;
    }

    fn execute_action(
        &mut self,
        tick: u64,
        action: &QaAction,
        field: &mut ParticleField,
        view: &mut RadarView,
        store: &mut ThemeStore,
        paused: &mut bool,
    ) {
        match action {
            QaAction::ToggleQuadrant(q) => {
                let before = view.active_quadrant;
                view.toggle_quadrant(*q);
                self.record_action(
                    tick,
                    "ToggleQuadrant".to_string(),
                    format!("quadrant={q}, before={before:?}, after={:?}", view.active_quadrant),
                );
            }
            QaAction::ClearFilter => {
                view.clear_quadrant();
                self.record_action(tick, "ClearFilter".to_string(), String::new());
            }
            QaAction::HoverBlip(label) => {
                let index = content::BLIPS.iter().position(|b| b.label == *label);
                view.set_hovered(index);
                self.record_check(
                    "hover_target_exists".to_string(),
                    index.is_some(),
                    format!("label={label}"),
                );
                self.record_action(tick, "HoverBlip".to_string(), format!("label={label}"));
            }
            QaAction::ClearHover => {
                view.set_hovered(None);
                self.record_action(tick, "ClearHover".to_string(), String::new());
            }
            QaAction::ToggleTheme => {
                let theme = store.toggle();
                self.record_action(
                    tick,
                    "ToggleTheme".to_string(),
                    format!("theme={}", theme.label()),
                );
            }
            QaAction::SetPaused(value) => {
                *paused = *value;
                self.record_action(tick, "SetPaused".to_string(), format!("paused={value}"));
            }
            QaAction::ResizeField(w, h) => {
                field.resize(*w, *h);
                let expected = ParticleField::particle_count_for(*w, *h);
                self.record_check(
                    "resize_population_matches_density".to_string(),
                    field.len() == expected,
                    format!("size={w}x{h}, expected={expected}, got={}", field.len()),
                );
                self.record_action(tick, "ResizeField".to_string(), format!("size={w}x{h}"));
            }
        }
    }

    fn observe_field(&mut self, field: &ParticleField) {
        let bounds = field.bounds();
        for p in field.particles() {
            if !p.pos.x.is_finite() || !p.pos.y.is_finite() {
                self.non_finite_samples += 1;
            } else if p.pos.x < 0.0 || p.pos.x > bounds.x || p.pos.y < 0.0 || p.pos.y > bounds.y {
                self.out_of_bounds_samples += 1;
            }
        }
    }

    /// Evaluate the scenario-independent invariants once the run is over.
    fn run_final_checks(&mut self, field: &ParticleField, view: &RadarView, store: &ThemeStore) {
        let bounds = field.bounds();
        let expected = ParticleField::particle_count_for(bounds.x, bounds.y);
        self.record_check(
            "particle_count_matches_density".to_string(),
            field.len() == expected,
            format!("expected={expected}, got={}", field.len()),
        );
        self.record_check(
            "particles_within_bounds".to_string(),
            self.out_of_bounds_samples == 0,
            format!("out_of_bounds_samples={}", self.out_of_bounds_samples),
        );
        self.record_check(
            "particle_positions_finite".to_string(),
            self.non_finite_samples == 0,
            format!("non_finite_samples={}", self.non_finite_samples),
        );

        let a = radar::compute_layout(content::BLIPS, 520.0);
        let b = radar::compute_layout(content::BLIPS, 520.0);
        let identical = a.len() == b.len()
            && a.iter().zip(&b).all(|(pa, pb)| {
                pa.pos.x.to_bits() == pb.pos.x.to_bits()
                    && pa.pos.y.to_bits() == pb.pos.y.to_bits()
            });
        self.record_check(
            "radar_layout_deterministic".to_string(),
            identical,
            format!("blips={}", a.len()),
        );

        let groups = radar::group_indices(content::BLIPS);
        let grouped: usize = groups.values().map(|g| g.len()).sum();
        self.record_check(
            "radar_groups_partition_catalog".to_string(),
            grouped == content::BLIPS.len(),
            format!("grouped={grouped}, catalog={}", content::BLIPS.len()),
        );

        let mut probe = RadarView::new();
        probe.toggle_quadrant(2);
        probe.toggle_quadrant(2);
        self.record_check(
            "filter_double_toggle_clears".to_string(),
            probe.active_quadrant.is_none(),
            format!("after={:?}", probe.active_quadrant),
        );

        self.record_check(
            "final_filter_state_clean".to_string(),
            view.active_quadrant.is_none(),
            format!("active_quadrant={:?}", view.active_quadrant),
        );

        // Baseline toggles the theme an even number of times.
        if self.opts.scenario == QaScenario::Baseline {
            let same = self.theme_at_start == Some(store.theme());
            self.record_check(
                "theme_returned_to_start".to_string(),
                same,
                format!(
                    "start={:?}, end={}",
                    self.theme_at_start.map(Theme::label),
                    store.theme().label()
                ),
            );
        }

        self.check_theme_round_trip();
    }

    fn check_theme_round_trip(&mut self) {
        let path: PathBuf = std::env::temp_dir().join(format!(
            "orbit_qa_theme_probe_{}_{}.json",
            self.opts.scenario.label(),
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        let mut probe = ThemeStore::open(&path);
        let toggled = probe.toggle();
        let reopened = ThemeStore::open(&path);
        self.record_check(
            "theme_persists_across_reload".to_string(),
            reopened.theme() == toggled,
            format!(
                "written={}, reloaded={}",
                toggled.label(),
                reopened.theme().label()
            ),
        );
        let _ = std::fs::remove_file(&path);
    }

    fn report(&self) -> QaReport {
        let all_passed = self.checks.iter().all(|c| c.passed);
        QaReport {
            scenario: self.opts.scenario.label().to_string(),
            seed: self.opts.seed,
            final_tick: self.tick,
            action_count: self.action_logs.len(),
            overall_status: if all_passed { "PASS" } else { "FAIL" }.to_string(),
            checks: self.checks.clone(),
            actions: self.action_logs.clone(),
        }
    }

    /// Final checks + report file. Returns the process exit code.
    pub fn finish(mut self, field: &ParticleField, view: &RadarView, store: &ThemeStore) -> i32 {
        self.run_final_checks(field, view, store);
        let report = self.report();

        match serde_json::to_string_pretty(&report) {
            Ok(json) => match std::fs::write(config::QA_REPORT_FILE, json) {
                Ok(()) => eprintln!("[ORBIT] QA report written to {}", config::QA_REPORT_FILE),
                Err(e) => eprintln!("[ORBIT] QA report write failed: {e}"),
            },
            Err(e) => eprintln!("[ORBIT] QA report serialization failed: {e}"),
        }

        let failed: Vec<&str> = report
            .checks
            .iter()
            .filter(|c| !c.passed)
            .map(|c| c.name.as_str())
            .collect();
        eprintln!(
            "[ORBIT] QA {} — {} ({} checks, {} actions{})",
            report.scenario,
            report.overall_status,
            report.checks.len(),
            report.action_count,
            if failed.is_empty() {
                String::new()
            } else {
                format!(", failed: {}", failed.join(", "))
            }
        );

        if report.overall_status == "PASS" {
            0
        } else {
            1
        }
    }

    fn record_action(&mut self, tick: u64, action: String, details: String) {
        self.action_logs.push(QaActionLog {
            tick,
            action,
            details,
        });
    }

    fn record_check(&mut self, name: String, passed: bool, details: String) {
        self.checks.push(QaCheck {
            name,
            passed,
            details,
        });
    }
}

fn build_schedule(scenario: QaScenario) -> Vec<(u64, QaAction)> {
    match scenario {
        QaScenario::Baseline => vec![
            (10, QaAction::ToggleQuadrant(1)),
            (40, QaAction::ToggleQuadrant(1)),
            (60, QaAction::ToggleQuadrant(2)),
            (80, QaAction::HoverBlip("Kubernetes")),
            (120, QaAction::ClearHover),
            (130, QaAction::ToggleTheme),
            (150, QaAction::ToggleTheme),
            (160, QaAction::SetPaused(true)),
            (180, QaAction::SetPaused(false)),
            (200, QaAction::ClearFilter),
        ],
        QaScenario::ResizeProbe => vec![
            (20, QaAction::ResizeField(800.0, 600.0)),
            (60, QaAction::ResizeField(400.0, 300.0)),
            (100, QaAction::ResizeField(1280.0, 800.0)),
            (140, QaAction::ResizeField(333.0, 777.0)),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_store(name: &str) -> ThemeStore {
        let path = std::env::temp_dir().join(format!(
            "orbit_qa_{}_{}.json",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        ThemeStore::open(path)
    }

    #[test]
    fn scenario_parses_from_cli_spellings() {
        assert_eq!(QaScenario::parse_cli("baseline"), Some(QaScenario::Baseline));
        assert_eq!(QaScenario::parse_cli("RESIZE"), Some(QaScenario::ResizeProbe));
        assert_eq!(
            QaScenario::parse_cli("resize-probe"),
            Some(QaScenario::ResizeProbe)
        );
        assert_eq!(QaScenario::parse_cli("nope"), None);
    }

    #[test]
    fn options_parse_overrides_and_default_off() {
        let off: Vec<String> = vec!["orbit".into()];
        assert!(QaOptions::from_args(&off).is_none());

        let on: Vec<String> = ["orbit", "--qa", "baseline", "--ticks", "60", "--seed", "9"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let opts = QaOptions::from_args(&on).unwrap();
        assert_eq!(opts.scenario, QaScenario::Baseline);
        assert_eq!(opts.ticks, 60);
        assert_eq!(opts.seed, 9);
    }

    #[test]
    fn schedules_are_tick_ordered() {
        for scenario in [QaScenario::Baseline, QaScenario::ResizeProbe] {
            let schedule = build_schedule(scenario);
            for pair in schedule.windows(2) {
                assert!(pair[0].0 <= pair[1].0);
            }
        }
    }

    #[test]
    fn baseline_run_passes_all_checks() {
        let opts = QaOptions {
            scenario: QaScenario::Baseline,
            ticks: 240,
            seed: 7,
        };
        let mut director = QaDirector::new(opts);
        let mut field = ParticleField::new(800.0, 600.0, opts.seed);
        let mut view = RadarView::new();
        let mut store = scratch_store("baseline");
        let mut paused = false;

        while !director.finished() {
            director.apply(&mut field, &mut view, &mut store, &mut paused);
            if !paused {
                field.tick();
            }
        }

        director.run_final_checks(&field, &view, &store);
        let report = director.report();
        assert_eq!(report.overall_status, "PASS", "checks: {:?}", report.checks);
        assert_eq!(report.final_tick, 240);
        assert!(report.action_count >= 10);
    }

    #[test]
    fn resize_probe_repopulates_per_density() {
        let opts = QaOptions {
            scenario: QaScenario::ResizeProbe,
            ticks: 200,
            seed: 7,
        };
        let mut director = QaDirector::new(opts);
        let mut field = ParticleField::new(1024.0, 768.0, opts.seed);
        let mut view = RadarView::new();
        let mut store = scratch_store("resize");
        let mut paused = false;

        while !director.finished() {
            director.apply(&mut field, &mut view, &mut store, &mut paused);
            field.tick();
        }

        assert_eq!(field.len(), ParticleField::particle_count_for(333.0, 777.0));
        director.run_final_checks(&field, &view, &store);
        let report = director.report();
        assert_eq!(report.overall_status, "PASS", "checks: {:?}", report.checks);
    }
}
