use macroquad::prelude::Color;

use crate::radar::Ring;
use crate::theme::Theme;

/// Frame colors for one theme. Resolved once per frame from the active
/// theme and passed down; nothing reads theme state ambiently.
pub struct Palette {
    pub background: Color,
    pub particle: Color,
    pub link: Color,
    pub ring_line: Color,
    pub spoke: Color,
    pub text_primary: Color,
    pub text_muted: Color,
    pub text_faint: Color,
    pub accent: Color,
}

const TEAL: Color = Color::new(0.078, 0.722, 0.651, 1.0);

static DARK: Palette = Palette {
    background: Color::new(0.051, 0.047, 0.039, 1.0),
    particle: TEAL,
    link: TEAL,
    ring_line: Color::new(0.149, 0.141, 0.125, 1.0),
    spoke: Color::new(0.102, 0.094, 0.086, 1.0),
    text_primary: Color::new(0.91, 0.894, 0.871, 1.0),
    text_muted: Color::new(0.604, 0.58, 0.533, 1.0),
    text_faint: Color::new(0.361, 0.341, 0.306, 1.0),
    accent: TEAL,
};

static LIGHT: Palette = Palette {
    background: Color::new(0.98, 0.976, 0.968, 1.0),
    particle: Color::new(0.035, 0.58, 0.52, 1.0),
    link: Color::new(0.035, 0.58, 0.52, 1.0),
    ring_line: Color::new(0.82, 0.8, 0.76, 1.0),
    spoke: Color::new(0.88, 0.865, 0.835, 1.0),
    text_primary: Color::new(0.102, 0.094, 0.086, 1.0),
    text_muted: Color::new(0.42, 0.4, 0.36, 1.0),
    text_faint: Color::new(0.62, 0.6, 0.56, 1.0),
    accent: Color::new(0.035, 0.58, 0.52, 1.0),
};

impl Palette {
    pub fn for_theme(theme: Theme) -> &'static Palette {
        match theme {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
        }
    }

    pub fn ring_color(&self, ring: Ring) -> Color {
        let (r, g, b) = ring.color_rgb();
        Color::from_rgba(r, g, b, 255)
    }

    /// `base` with its alpha multiplied; used for pulse and dim fades.
    pub fn with_alpha(base: Color, alpha: f32) -> Color {
        Color::new(base.r, base.g, base.b, base.a * alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn themes_resolve_to_distinct_backgrounds() {
        let dark = Palette::for_theme(Theme::Dark);
        let light = Palette::for_theme(Theme::Light);
        assert!(dark.background.r < light.background.r);
    }

    #[test]
    fn with_alpha_scales_only_alpha() {
        let c = Palette::with_alpha(TEAL, 0.5);
        assert_eq!(c.r, TEAL.r);
        assert_eq!(c.a, 0.5);
    }
}
