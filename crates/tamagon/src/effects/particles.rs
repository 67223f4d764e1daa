//! Ambient particles drifting across a full-window overlay.

use eframe::egui::{self, Color32, Pos2, Vec2};
use rand::Rng;

use super::FrameEffect;
use crate::theme::Theme;

pub const PARTICLE_COUNT: usize = 30;
/// Global opacity of the overlay the particles are painted on.
pub const OVERLAY_OPACITY: f32 = 0.4;

#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Pos2,
    pub radius: f32,
    pub color: Color32,
    pub velocity: Vec2,
    pub opacity: f32,
}

pub struct ParticleField {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
}

impl ParticleField {
    pub fn new(width: f32, height: f32) -> Self {
        Self::seeded(
            PARTICLE_COUNT,
            width,
            height,
            &crate::theme::particle_palette(),
            &mut rand::rng(),
        )
    }

    pub fn seeded<R: Rng>(
        count: usize,
        width: f32,
        height: f32,
        colors: &[Color32],
        rng: &mut R,
    ) -> Self {
        let width = width.max(0.0);
        let height = height.max(0.0);
        let particles = (0..count)
            .map(|_| Particle {
                pos: Pos2::new(rng.random::<f32>() * width, rng.random::<f32>() * height),
                radius: rng.random_range(1.0..4.0),
                color: if colors.is_empty() {
                    Color32::WHITE
                } else {
                    colors[rng.random_range(0..colors.len())]
                },
                velocity: Vec2::new(rng.random_range(-0.25..0.25), rng.random_range(-0.25..0.25)),
                opacity: rng.random_range(0.2..0.7),
            })
            .map(|mut p| {
                // random::<f32>() * width can round up to width itself.
                p.pos = Pos2::new(wrap(p.pos.x, width), wrap(p.pos.y, height));
                p
            })
            .collect();
        Self {
            particles,
            width,
            height,
        }
    }

    #[cfg(test)]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Match the overlay to a new viewport. Particles keep their identity and
    /// are folded back into the new bounds.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        for p in &mut self.particles {
            p.pos = Pos2::new(wrap(p.pos.x, self.width), wrap(p.pos.y, self.height));
        }
    }

    pub fn paint(&self, painter: &egui::Painter, origin: Pos2) {
        for p in &self.particles {
            let color = Theme::with_opacity(p.color, p.opacity * OVERLAY_OPACITY);
            painter.circle_filled(origin + p.pos.to_vec2(), p.radius, color);
        }
    }
}

impl FrameEffect for ParticleField {
    fn step(&mut self) {
        for p in &mut self.particles {
            let next = p.pos + p.velocity;
            p.pos = Pos2::new(wrap(next.x, self.width), wrap(next.y, self.height));
        }
    }
}

/// Fold `v` into `[0, extent)`. A degenerate extent pins the value to 0.
fn wrap(v: f32, extent: f32) -> f32 {
    if extent <= 0.0 || !v.is_finite() {
        return 0.0;
    }
    let folded = v.rem_euclid(extent);
    // rem_euclid of a tiny negative value rounds up to `extent` in f32.
    if folded >= extent { 0.0 } else { folded }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn field(width: f32, height: f32) -> ParticleField {
        let mut rng = StdRng::seed_from_u64(7);
        ParticleField::seeded(
            PARTICLE_COUNT,
            width,
            height,
            &crate::theme::particle_palette(),
            &mut rng,
        )
    }

    fn assert_in_bounds(f: &ParticleField) {
        let size = f.size();
        for p in f.particles() {
            assert!(
                p.pos.x >= 0.0 && p.pos.x < size.x && p.pos.y >= 0.0 && p.pos.y < size.y,
                "particle escaped: {:?} in {:?}",
                p.pos,
                size
            );
        }
    }

    #[test]
    fn seeds_within_ranges() {
        let f = field(800.0, 600.0);
        let palette = crate::theme::particle_palette();
        assert_eq!(f.particles().len(), PARTICLE_COUNT);
        for p in f.particles() {
            assert!((1.0..4.0).contains(&p.radius));
            assert!((0.2..0.7).contains(&p.opacity));
            assert!((-0.25..0.25).contains(&p.velocity.x));
            assert!((-0.25..0.25).contains(&p.velocity.y));
            assert!(palette.contains(&p.color));
        }
        assert_in_bounds(&f);
    }

    #[test]
    fn stays_in_bounds_over_many_steps() {
        let mut f = field(320.0, 240.0);
        for _ in 0..10_000 {
            f.step();
        }
        assert_in_bounds(&f);
    }

    #[test]
    fn crossing_an_edge_wraps_to_the_opposite_side() {
        let mut f = field(100.0, 100.0);
        f.particles[0].pos = Pos2::new(99.9, 0.1);
        f.particles[0].velocity = Vec2::new(0.2, -0.2);
        f.step();
        let p = &f.particles()[0];
        assert!(p.pos.x < 1.0, "x wrapped to {}", p.pos.x);
        assert!(p.pos.y > 99.0, "y wrapped to {}", p.pos.y);
    }

    #[test]
    fn resize_keeps_particles_and_folds_them_in() {
        let mut f = field(1000.0, 1000.0);
        let colors: Vec<_> = f.particles().iter().map(|p| p.color).collect();
        f.resize(50.0, 40.0);
        assert_eq!(f.size(), Vec2::new(50.0, 40.0));
        let after: Vec<_> = f.particles().iter().map(|p| p.color).collect();
        assert_eq!(colors, after);
        assert_in_bounds(&f);
    }

    #[test]
    fn wrap_handles_edges() {
        assert_eq!(wrap(-1e-9, 100.0), 0.0);
        assert_eq!(wrap(100.0, 100.0), 0.0);
        assert_eq!(wrap(-10.0, 100.0), 90.0);
        assert_eq!(wrap(5.0, 0.0), 0.0);
    }
}
