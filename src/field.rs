use macroquad::prelude::*;
use ::rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config;

/// One point of the ambient background field. Size, opacity and pulse speed
/// are fixed at creation; only position, velocity and pulse phase evolve.
#[derive(Clone, Copy)]
pub struct Particle {
    pub pos: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub opacity: f32,
    pulse: f32,
    pulse_speed: f32,
}

impl Particle {
    /// Sine modulation applied to size and opacity, in [0.4, 1.0].
    pub fn pulse_factor(&self) -> f32 {
        self.pulse.sin() * 0.3 + 0.7
    }
}

/// Ambient particle field: softly pulsing points repelled by the pointer and
/// joined by short-range links. One `tick()` equals one frame; the caller's
/// frame loop is the only scheduler.
pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Vec2,
    pointer: Vec2,
    rng: ChaCha8Rng,
}

impl ParticleField {
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        let mut field = Self {
            particles: Vec::new(),
            bounds: vec2(width, height),
            pointer: config::POINTER_OFFSCREEN.into(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        field.populate();
        field
    }

    /// Density-based population target: one particle per 15,000 px².
    pub fn particle_count_for(width: f32, height: f32) -> usize {
        (width * height / config::FIELD_DENSITY_DIVISOR).floor() as usize
    }

    /// Discard the whole set and regenerate for the new bounds. Old particle
    /// state never carries across a resize.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = vec2(width, height);
        self.populate();
    }

    fn populate(&mut self) {
        let count = Self::particle_count_for(self.bounds.x, self.bounds.y);
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            let v = config::FIELD_VELOCITY_RANGE;
            self.particles.push(Particle {
                pos: vec2(
                    self.rng.gen_range(0.0..self.bounds.x),
                    self.rng.gen_range(0.0..self.bounds.y),
                ),
                velocity: vec2(self.rng.gen_range(-v..v), self.rng.gen_range(-v..v)),
                size: self.rng.gen_range(config::FIELD_SIZE_MIN..config::FIELD_SIZE_MAX),
                opacity: self
                    .rng
                    .gen_range(config::FIELD_OPACITY_MIN..config::FIELD_OPACITY_MAX),
                pulse: self.rng.gen_range(0.0..std::f32::consts::TAU),
                pulse_speed: self
                    .rng
                    .gen_range(config::FIELD_PULSE_SPEED_MIN..config::FIELD_PULSE_SPEED_MAX),
            });
        }
    }

    pub fn set_pointer(&mut self, pos: Vec2) {
        self.pointer = pos;
    }

    /// Park the pointer far off-canvas so repulsion becomes a no-op.
    pub fn clear_pointer(&mut self) {
        self.pointer = config::POINTER_OFFSCREEN.into();
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// Advance every particle one frame: pulse, pointer repulsion, damping,
    /// Euler integration, toroidal wrap.
    pub fn tick(&mut self) {
        let pointer = self.pointer;
        for p in &mut self.particles {
            p.pulse += p.pulse_speed;

            let away = p.pos - pointer;
            let dist = away.length();
            if dist < config::FIELD_REPULSION_RADIUS && dist > 0.0 {
                let force =
                    (config::FIELD_REPULSION_RADIUS - dist) / config::FIELD_REPULSION_RADIUS;
                p.velocity += away / dist * force * config::FIELD_REPULSION_STRENGTH;
            }

            p.velocity *= config::FIELD_DAMPING;
            p.pos += p.velocity;

            // Wrap, never clamp: leaving one edge re-enters at the opposite one.
            if p.pos.x < 0.0 {
                p.pos.x = self.bounds.x;
            } else if p.pos.x > self.bounds.x {
                p.pos.x = 0.0;
            }
            if p.pos.y < 0.0 {
                p.pos.y = self.bounds.y;
            } else if p.pos.y > self.bounds.y {
                p.pos.y = 0.0;
            }
        }
    }

    /// Visit every unique unordered pair closer than the link distance.
    /// Quadratic on purpose: density caps counts in the low hundreds.
    pub fn for_each_link(&self, mut visit: impl FnMut(Vec2, Vec2, f32)) {
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let a = self.particles[i].pos;
                let b = self.particles[j].pos;
                let dist = a.distance(b);
                if dist < config::FIELD_LINK_DISTANCE {
                    visit(a, b, link_alpha(dist));
                }
            }
        }
    }
}

/// Link opacity: linear falloff, fully transparent at the cutoff distance.
pub fn link_alpha(dist: f32) -> f32 {
    (1.0 - dist / config::FIELD_LINK_DISTANCE) * config::FIELD_LINK_ALPHA
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particle_count_follows_density_formula() {
        assert_eq!(ParticleField::particle_count_for(800.0, 600.0), 32);
        assert_eq!(ParticleField::particle_count_for(0.0, 600.0), 0);
        assert_eq!(ParticleField::particle_count_for(100.0, 100.0), 0);

        let field = ParticleField::new(800.0, 600.0, 7);
        assert_eq!(field.len(), 32);
    }

    #[test]
    fn creation_respects_attribute_ranges() {
        let field = ParticleField::new(800.0, 600.0, 7);
        for p in field.particles() {
            assert!(p.pos.x >= 0.0 && p.pos.x < 800.0);
            assert!(p.pos.y >= 0.0 && p.pos.y < 600.0);
            assert!(p.velocity.x.abs() <= 0.15 && p.velocity.y.abs() <= 0.15);
            assert!(p.size >= 0.5 && p.size <= 2.0);
            assert!(p.opacity >= 0.1 && p.opacity <= 0.6);
            let f = p.pulse_factor();
            assert!((0.4..=1.0).contains(&f));
        }
    }

    #[test]
    fn same_seed_same_field() {
        let a = ParticleField::new(800.0, 600.0, 99);
        let b = ParticleField::new(800.0, 600.0, 99);
        for (pa, pb) in a.particles().iter().zip(b.particles()) {
            assert_eq!(pa.pos, pb.pos);
            assert_eq!(pa.velocity, pb.velocity);
        }
    }

    #[test]
    fn overflow_wraps_to_opposite_edge() {
        let mut field = ParticleField::new(800.0, 600.0, 7);
        field.particles[0].pos = vec2(805.0, 300.0);
        field.particles[0].velocity = Vec2::ZERO;
        field.tick();
        assert_eq!(field.particles[0].pos.x, 0.0);

        field.particles[0].pos = vec2(300.0, -3.0);
        field.particles[0].velocity = Vec2::ZERO;
        field.tick();
        assert_eq!(field.particles[0].pos.y, 600.0);
    }

    #[test]
    fn pointer_repels_and_damping_settles() {
        let mut field = ParticleField::new(800.0, 600.0, 7);
        field.particles.truncate(1);
        field.particles[0].pos = vec2(410.0, 300.0);
        field.particles[0].velocity = Vec2::ZERO;
        field.set_pointer(vec2(400.0, 300.0));
        field.tick();
        // Pushed along +x, directly away from the pointer.
        assert!(field.particles[0].velocity.x > 0.0);
        assert_eq!(field.particles[0].velocity.y, 0.0);

        field.clear_pointer();
        let speed_before = field.particles[0].velocity.length();
        for _ in 0..200 {
            field.tick();
        }
        assert!(field.particles[0].velocity.length() < speed_before);
    }

    #[test]
    fn pointer_exactly_on_particle_is_harmless() {
        let mut field = ParticleField::new(800.0, 600.0, 7);
        field.particles.truncate(1);
        field.particles[0].pos = vec2(400.0, 300.0);
        field.particles[0].velocity = Vec2::ZERO;
        field.set_pointer(vec2(400.0, 300.0));
        field.tick();
        assert!(field.particles[0].pos.x.is_finite());
        assert!(field.particles[0].velocity.x.is_finite());
    }

    #[test]
    fn link_alpha_is_symmetric_and_fades_at_cutoff() {
        // Alpha depends only on the scalar distance, so A→B equals B→A.
        assert_eq!(link_alpha(37.5), link_alpha(37.5));
        assert!((link_alpha(0.0) - 0.15).abs() < 1e-6);
        assert!(link_alpha(120.0).abs() < 1e-6);
        assert!(link_alpha(60.0) > link_alpha(90.0));
    }

    #[test]
    fn links_are_each_reported_once() {
        let mut field = ParticleField::new(800.0, 600.0, 7);
        field.particles.truncate(3);
        field.particles[0].pos = vec2(100.0, 100.0);
        field.particles[1].pos = vec2(150.0, 100.0);
        field.particles[2].pos = vec2(700.0, 500.0);
        let mut seen = Vec::new();
        field.for_each_link(|a, b, alpha| seen.push((a, b, alpha)));
        assert_eq!(seen.len(), 1);
        assert!((seen[0].2 - link_alpha(50.0)).abs() < 1e-6);
    }

    #[test]
    fn resize_discards_previous_set() {
        let mut field = ParticleField::new(800.0, 600.0, 7);
        assert_eq!(field.len(), 32);
        field.resize(400.0, 300.0);
        assert_eq!(field.len(), 8);
        for p in field.particles() {
            assert!(p.pos.x < 400.0 && p.pos.y < 300.0);
        }
    }
}
