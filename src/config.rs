// All tunable constants in one place.

// Particle field
pub const FIELD_DENSITY_DIVISOR: f32 = 15_000.0; // one particle per this many px²
pub const FIELD_VELOCITY_RANGE: f32 = 0.15; // per-axis, px/frame
pub const FIELD_SIZE_MIN: f32 = 0.5;
pub const FIELD_SIZE_MAX: f32 = 2.0;
pub const FIELD_OPACITY_MIN: f32 = 0.1;
pub const FIELD_OPACITY_MAX: f32 = 0.6;
pub const FIELD_PULSE_SPEED_MIN: f32 = 0.005;
pub const FIELD_PULSE_SPEED_MAX: f32 = 0.025;
pub const FIELD_REPULSION_RADIUS: f32 = 150.0;
pub const FIELD_REPULSION_STRENGTH: f32 = 0.15;
pub const FIELD_DAMPING: f32 = 0.99;
pub const FIELD_LINK_DISTANCE: f32 = 120.0;
pub const FIELD_LINK_ALPHA: f32 = 0.15;
pub const FIELD_LINK_THICKNESS: f32 = 0.5;
pub const POINTER_OFFSCREEN: (f32, f32) = (-1000.0, -1000.0);

// Radar chart
pub const RADAR_MARGIN: f32 = 0.92; // fraction of half-width left for labels
pub const RADAR_ARC_PADDING_DEG: f32 = 12.0; // reserved at each end of a quadrant
pub const RADAR_JITTER_SCALE: f32 = 0.06; // radial jitter, fraction of half-width
pub const RADAR_BLIP_RADIUS: f32 = 5.0;
pub const RADAR_BLIP_RADIUS_HOVERED: f32 = 8.0;
pub const RADAR_HOVER_RING_RADIUS: f32 = 14.0;
pub const RADAR_PICK_RADIUS: f32 = 12.0; // pointer hit-test distance
pub const RADAR_DIMMED_OPACITY: f32 = 0.15; // filtered-out blips stay visible
pub const RADAR_SCREEN_FRACTION: f32 = 0.78; // chart size vs min(window dims)

// Stat counters
pub const COUNTER_DURATION: f32 = 2.0; // seconds, ease-out cubic

// Persistence
pub const SETTINGS_FILE: &str = "orbit_settings.json";
pub const QA_REPORT_FILE: &str = "orbit_qa_report.json";
