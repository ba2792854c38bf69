use std::collections::BTreeMap;

use macroquad::prelude::*;

use crate::config;

/// Adoption ring, innermost to outermost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Ring {
    Adopt,
    Trial,
    Assess,
}

impl Ring {
    pub const ALL: [Self; 3] = [Self::Adopt, Self::Trial, Self::Assess];

    pub fn label(self) -> &'static str {
        match self {
            Self::Adopt => "Adopt",
            Self::Trial => "Trial",
            Self::Assess => "Assess",
        }
    }

    /// Normalized outer radius, as a fraction of the chart half-width.
    pub fn outer_radius(self) -> f32 {
        match self {
            Self::Adopt => 0.33,
            Self::Trial => 0.63,
            Self::Assess => 0.90,
        }
    }

    /// Outer radius of the next ring inward; zero inside the innermost ring.
    pub fn inner_radius(self) -> f32 {
        match self {
            Self::Adopt => 0.0,
            Self::Trial => Self::Adopt.outer_radius(),
            Self::Assess => Self::Trial.outer_radius(),
        }
    }

    pub fn color_rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Adopt => (20, 184, 166),
            Self::Trial => (217, 119, 6),
            Self::Assess => (154, 148, 136),
        }
    }
}

/// One catalog entry plotted on the chart. The catalog is static content
/// owned outside this module; quadrant is trusted to be 0..4.
#[derive(Clone, Copy, Debug)]
pub struct Blip {
    pub label: &'static str,
    pub ring: Ring,
    pub quadrant: usize,
    pub description: &'static str,
}

/// Composite grouping key. A typed pair, so label text can never collide
/// with a separator the way a concatenated string key could.
pub type GroupKey = (usize, Ring);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedBlip {
    /// Index into the catalog this layout was computed from.
    pub index: usize,
    /// Chart-local position; the chart spans `0..size` on both axes.
    pub pos: Vec2,
}

/// Partition the catalog into `(quadrant, ring)` groups, preserving source
/// order within each group.
pub fn group_indices(catalog: &[Blip]) -> BTreeMap<GroupKey, Vec<usize>> {
    let mut groups: BTreeMap<GroupKey, Vec<usize>> = BTreeMap::new();
    for (i, blip) in catalog.iter().enumerate() {
        groups.entry((blip.quadrant, blip.ring)).or_default().push(i);
    }
    groups
}

/// Deterministic placement for the whole catalog. Pure: identical catalog
/// and size always produce bit-identical positions.
pub fn compute_layout(catalog: &[Blip], size: f32) -> Vec<PlacedBlip> {
    let groups = group_indices(catalog);
    catalog
        .iter()
        .enumerate()
        .map(|(i, blip)| {
            let group = &groups[&(blip.quadrant, blip.ring)];
            let idx = group.iter().position(|&k| k == i).unwrap_or(0);
            PlacedBlip {
                index: i,
                pos: blip_position(blip, idx, group.len(), size),
            }
        })
        .collect()
}

/// Position of one blip at `index` within its `(quadrant, ring)` group of
/// `total` members: evenly spread over the padded quadrant arc, at the radial
/// midpoint of its ring band, with a small cyclic radial jitter.
fn blip_position(blip: &Blip, index: usize, total: usize, size: f32) -> Vec2 {
    let half = size * 0.5;
    let mid_radius = (blip.ring.inner_radius() + blip.ring.outer_radius()) * 0.5
        * half
        * config::RADAR_MARGIN;

    let quad_start = blip.quadrant as f32 * 90.0;
    let pad = config::RADAR_ARC_PADDING_DEG;
    let usable_arc = 90.0 - pad * 2.0;
    let step = if total > 1 {
        usable_arc / (total as f32 - 1.0)
    } else {
        0.0
    };
    let angle = (quad_start + pad + step * index as f32).to_radians();

    // Cycles -1, 0, +1 to pull same-angle neighbors apart. Cosmetic only;
    // repeats for groups larger than 3.
    let jitter = (index as i32 % 3 - 1) as f32 * half * config::RADAR_JITTER_SCALE;

    let r = mid_radius + jitter;
    vec2(half + r * angle.cos(), half + r * angle.sin())
}

/// Nearest blip within the pick radius of a chart-local point.
pub fn hit_test(layout: &[PlacedBlip], local: Vec2) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for placed in layout {
        let d = placed.pos.distance(local);
        if d <= config::RADAR_PICK_RADIUS && best.map_or(true, |(_, bd)| d < bd) {
            best = Some((placed.index, d));
        }
    }
    best.map(|(i, _)| i)
}

/// Ephemeral per-session view state: quadrant filter and hover selection.
#[derive(Clone, Copy, Debug, Default)]
pub struct RadarView {
    pub active_quadrant: Option<usize>,
    pub hovered: Option<usize>,
}

impl RadarView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selecting the active quadrant again clears the filter.
    pub fn toggle_quadrant(&mut self, quadrant: usize) {
        if self.active_quadrant == Some(quadrant) {
            self.active_quadrant = None;
        } else {
            self.active_quadrant = Some(quadrant);
        }
    }

    pub fn clear_quadrant(&mut self) {
        self.active_quadrant = None;
    }

    /// At most one blip is hovered; a new hover replaces the old one
    /// immediately.
    pub fn set_hovered(&mut self, index: Option<usize>) {
        self.hovered = index;
    }

    pub fn is_hovered(&self, index: usize) -> bool {
        self.hovered == Some(index)
    }

    /// Filtered-out blips dim instead of disappearing, so the layout never
    /// shifts under the pointer.
    pub fn blip_opacity(&self, blip: &Blip) -> f32 {
        match self.active_quadrant {
            Some(q) if blip.quadrant != q => config::RADAR_DIMMED_OPACITY,
            _ => 1.0,
        }
    }
}

/// Where the chart sits on screen. Layout runs in chart-local coordinates;
/// the frame converts to and from screen space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartFrame {
    pub origin: Vec2,
    pub size: f32,
}

impl ChartFrame {
    pub fn centered(screen_w: f32, screen_h: f32) -> Self {
        let size = screen_w.min(screen_h) * config::RADAR_SCREEN_FRACTION;
        Self {
            origin: vec2((screen_w - size) * 0.5, (screen_h - size) * 0.5),
            size,
        }
    }

    pub fn to_local(&self, screen: Vec2) -> Vec2 {
        screen - self.origin
    }

    pub fn to_screen(&self, local: Vec2) -> Vec2 {
        local + self.origin
    }

    pub fn center(&self) -> Vec2 {
        self.origin + Vec2::splat(self.size * 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: f32 = 520.0;

    fn blip(label: &'static str, ring: Ring, quadrant: usize) -> Blip {
        Blip {
            label,
            ring,
            quadrant,
            description: "",
        }
    }

    fn sample_catalog() -> Vec<Blip> {
        vec![
            blip("a", Ring::Adopt, 0),
            blip("b", Ring::Adopt, 0),
            blip("c", Ring::Trial, 0),
            blip("d", Ring::Assess, 0),
            blip("e", Ring::Adopt, 1),
            blip("f", Ring::Trial, 2),
            blip("g", Ring::Assess, 3),
            blip("h", Ring::Assess, 3),
        ]
    }

    fn angle_deg(pos: Vec2, size: f32) -> f32 {
        let c = size * 0.5;
        (pos.y - c).atan2(pos.x - c).to_degrees().rem_euclid(360.0)
    }

    fn radius(pos: Vec2, size: f32) -> f32 {
        let c = size * 0.5;
        pos.distance(vec2(c, c))
    }

    #[test]
    fn layout_is_bit_identical_across_calls() {
        let catalog = sample_catalog();
        let a = compute_layout(&catalog, SIZE);
        let b = compute_layout(&catalog, SIZE);
        assert_eq!(a.len(), b.len());
        for (pa, pb) in a.iter().zip(&b) {
            assert_eq!(pa.pos.x.to_bits(), pb.pos.x.to_bits());
            assert_eq!(pa.pos.y.to_bits(), pb.pos.y.to_bits());
        }
    }

    #[test]
    fn groups_partition_the_catalog() {
        let catalog = sample_catalog();
        let groups = group_indices(&catalog);
        let mut seen = vec![false; catalog.len()];
        for ((quadrant, ring), members) in &groups {
            for &i in members {
                assert!(!seen[i], "blip {i} grouped twice");
                seen[i] = true;
                assert_eq!(catalog[i].quadrant, *quadrant);
                assert_eq!(catalog[i].ring, *ring);
            }
        }
        assert!(seen.iter().all(|&s| s), "some blip missing from every group");
    }

    #[test]
    fn angles_stay_inside_the_padded_arc() {
        let catalog = sample_catalog();
        for placed in compute_layout(&catalog, SIZE) {
            let q = catalog[placed.index].quadrant as f32;
            let angle = angle_deg(placed.pos, SIZE);
            assert!(
                angle >= q * 90.0 + 12.0 - 1e-3 && angle <= q * 90.0 + 78.0 + 1e-3,
                "blip {} at {angle}° escapes quadrant {q}",
                catalog[placed.index].label
            );
        }
    }

    #[test]
    fn adopt_sits_inside_assess() {
        let catalog = sample_catalog();
        let layout = compute_layout(&catalog, SIZE);
        // "a" is Adopt and "d" is Assess, both in quadrant 0.
        let adopt_r = radius(layout[0].pos, SIZE);
        let assess_r = radius(layout[3].pos, SIZE);
        assert!(adopt_r < assess_r);
    }

    #[test]
    fn three_adopt_blips_spread_evenly_across_quadrant_zero() {
        let catalog = vec![
            blip("x", Ring::Adopt, 0),
            blip("y", Ring::Adopt, 0),
            blip("z", Ring::Adopt, 0),
        ];
        let layout = compute_layout(&catalog, SIZE);
        let angles: Vec<f32> = layout.iter().map(|p| angle_deg(p.pos, SIZE)).collect();
        assert!((angles[0] - 12.0).abs() < 1e-3);
        assert!((angles[1] - 45.0).abs() < 1e-3);
        assert!((angles[2] - 78.0).abs() < 1e-3);

        // Jitter indices 0,1,2 give offsets -1, 0, +1 times the fixed scale.
        let half = SIZE * 0.5;
        let base = (Ring::Adopt.outer_radius() * 0.5) * half * 0.92;
        let j = half * 0.06;
        assert!((radius(layout[0].pos, SIZE) - (base - j)).abs() < 1e-2);
        assert!((radius(layout[1].pos, SIZE) - base).abs() < 1e-2);
        assert!((radius(layout[2].pos, SIZE) - (base + j)).abs() < 1e-2);
    }

    #[test]
    fn singleton_group_lands_at_the_arc_start() {
        let catalog = vec![blip("solo", Ring::Trial, 1)];
        let layout = compute_layout(&catalog, SIZE);
        let angle = angle_deg(layout[0].pos, SIZE);
        assert!((angle - 102.0).abs() < 1e-3); // 1*90 + 12, step is zero
    }

    #[test]
    fn quadrant_filter_toggles_off_on_repeat() {
        let mut view = RadarView::new();
        view.toggle_quadrant(2);
        assert_eq!(view.active_quadrant, Some(2));
        view.toggle_quadrant(2);
        assert_eq!(view.active_quadrant, None);

        view.toggle_quadrant(1);
        view.toggle_quadrant(3);
        assert_eq!(view.active_quadrant, Some(3));
    }

    #[test]
    fn filter_dims_other_quadrants_without_removing_them() {
        let catalog = sample_catalog();
        let mut view = RadarView::new();
        view.toggle_quadrant(0);
        let layout = compute_layout(&catalog, SIZE);
        assert_eq!(layout.len(), catalog.len());
        assert_eq!(view.blip_opacity(&catalog[0]), 1.0);
        assert_eq!(view.blip_opacity(&catalog[4]), 0.15);
    }

    #[test]
    fn hover_replaces_and_clears_instantly() {
        let mut view = RadarView::new();
        view.set_hovered(Some(3));
        assert!(view.is_hovered(3));
        view.set_hovered(Some(5));
        assert!(!view.is_hovered(3));
        assert!(view.is_hovered(5));
        view.set_hovered(None);
        assert_eq!(view.hovered, None);
    }

    #[test]
    fn hit_test_picks_nearest_within_radius() {
        let catalog = sample_catalog();
        let layout = compute_layout(&catalog, SIZE);
        let target = layout[2];
        assert_eq!(hit_test(&layout, target.pos), Some(target.index));
        assert_eq!(
            hit_test(&layout, target.pos + vec2(3.0, -2.0)),
            Some(target.index)
        );
        assert_eq!(hit_test(&layout, vec2(-500.0, -500.0)), None);
    }

    #[test]
    fn chart_frame_round_trips_coordinates() {
        let frame = ChartFrame::centered(1280.0, 800.0);
        let p = vec2(617.0, 431.0);
        let back = frame.to_screen(frame.to_local(p));
        assert!((back - p).length() < 1e-5);
        assert_eq!(frame.size, 800.0 * 0.78);
    }
}
