//! Particle field with pointer parallax
//!
//! A fixed arena of point sprites scattered through a cube. Origins, base
//! scales, and colors are drawn once at startup; everything a frame displays
//! is recomputed from (origin, index, elapsed time, pointer offset). There is
//! no per-frame mutable accumulation, so the field cannot drift.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::palette::PaletteBucket;
use super::pointer::PointerOffset;
use crate::consts::{FIELD_BOUNDS, POINTER_STRENGTH, SCALE_MAX, SCALE_MIN};

/// Immutable per-particle attributes, fixed at field construction.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub origin: Vec3,
    pub scale: f32,
    pub color: [f32; 3],
}

/// Displayed state for one particle, valid for a single frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub position: Vec3,
    pub scale: f32,
    pub color: [f32; 3],
}

/// The particle arena. Built once, never resized.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    sprites: Vec<Sprite>,
}

impl ParticleField {
    /// Scatter `count` particles through a `2*bounds` cube using a seeded RNG.
    pub fn new(count: usize, bounds: f32, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let particles: Vec<Particle> = (0..count)
            .map(|i| Particle {
                origin: Vec3::new(
                    rng.random_range(-bounds..=bounds),
                    rng.random_range(-bounds..=bounds),
                    rng.random_range(-bounds..=bounds),
                ),
                scale: rng.random_range(SCALE_MIN..=SCALE_MAX),
                color: PaletteBucket::for_index(i).sample(&mut rng),
            })
            .collect();

        let sprites = particles
            .iter()
            .map(|p| Sprite {
                position: p.origin,
                scale: p.scale,
                color: p.color,
            })
            .collect();

        Self { particles, sprites }
    }

    /// Field with the default page bounds.
    pub fn with_defaults(count: usize, seed: u64) -> Self {
        Self::new(count, FIELD_BOUNDS, seed)
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Displayed sprites from the most recent [`tick`](Self::tick).
    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    /// Recompute every displayed position and scale for this frame.
    ///
    /// Per-entity, order-independent, and a pure function of
    /// (origin, index, elapsed, pointer) - calling it twice with the same
    /// inputs yields the same sprites.
    pub fn tick(&mut self, elapsed_secs: f32, pointer: PointerOffset) {
        for (i, (particle, sprite)) in self.particles.iter().zip(&mut self.sprites).enumerate() {
            sprite.position = displaced(particle.origin, i, elapsed_secs, pointer);
            sprite.scale = pulsed_scale(particle.scale, i, elapsed_secs);
        }
    }
}

/// Displaced position for one particle.
///
/// Slow trigonometric noise plus a pointer term scaled by how far the origin
/// sits from center on the *other* axis, which is what makes edge particles
/// lean harder into pointer motion than central ones.
pub fn displaced(origin: Vec3, index: usize, elapsed_secs: f32, pointer: PointerOffset) -> Vec3 {
    let i = index as f32;
    let noise_x = (elapsed_secs * 0.2 + i * 0.01).sin() * 0.2;
    let noise_y = (elapsed_secs * 0.2 + i * 0.01).cos() * 0.2;
    let noise_z = (elapsed_secs * 0.2 + i * 0.02).sin() * 0.2;

    Vec3::new(
        origin.x + noise_x + pointer.x * POINTER_STRENGTH * (origin.y.abs() / 10.0),
        origin.y + noise_y + pointer.y * POINTER_STRENGTH * (origin.x.abs() / 10.0),
        origin.z + noise_z,
    )
}

/// Breathing pulse: +/-20% of the base scale, period ~pi seconds.
pub fn pulsed_scale(base: f32, index: usize, elapsed_secs: f32) -> f32 {
    base * (1.0 + (elapsed_secs * 2.0 + index as f32).sin() * 0.2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SEED: u64 = 424242;

    #[test]
    fn test_init_count_and_ranges() {
        let field = ParticleField::new(500, FIELD_BOUNDS, SEED);
        assert_eq!(field.len(), 500);
        assert_eq!(field.sprites().len(), 500);

        for p in field.particles() {
            for axis in [p.origin.x, p.origin.y, p.origin.z] {
                assert!((-FIELD_BOUNDS..=FIELD_BOUNDS).contains(&axis));
            }
            assert!((SCALE_MIN..=SCALE_MAX).contains(&p.scale));
        }
    }

    #[test]
    fn test_init_is_seed_deterministic() {
        let a = ParticleField::new(64, FIELD_BOUNDS, SEED);
        let b = ParticleField::new(64, FIELD_BOUNDS, SEED);
        for (pa, pb) in a.particles().iter().zip(b.particles()) {
            assert_eq!(pa.origin, pb.origin);
            assert_eq!(pa.scale, pb.scale);
            assert_eq!(pa.color, pb.color);
        }
    }

    #[test]
    fn test_tick_matches_reference_formulas() {
        // t = 0, centered pointer: sin terms vanish but the cos term does
        // not, so y is origin.y + 0.2 exactly while x and z equal the origin.
        let mut field = ParticleField::new(8, FIELD_BOUNDS, SEED);
        field.tick(0.0, PointerOffset::default());

        let p = field.particles()[0];
        let s = field.sprites()[0];
        assert_eq!(s.position.x, p.origin.x);
        assert_eq!(s.position.y, p.origin.y + 0.2);
        assert_eq!(s.position.z, p.origin.z);
        // sin(0) = 0 -> displayed scale equals the base scale
        assert_eq!(s.scale, p.scale);
    }

    #[test]
    fn test_pointer_parallax_scales_with_cross_axis() {
        let pointer = PointerOffset { x: 1.0, y: 0.0 };
        let near = displaced(Vec3::new(0.0, 1.0, 0.0), 0, 0.0, pointer);
        let far = displaced(Vec3::new(0.0, 10.0, 0.0), 0, 0.0, pointer);

        // x displacement grows with |origin.y|
        let near_dx = near.x - 0.0;
        let far_dx = far.x - 0.0;
        assert!((near_dx - POINTER_STRENGTH * 0.1).abs() < 1e-6);
        assert!((far_dx - POINTER_STRENGTH).abs() < 1e-6);

        // y axis only reacts to pointer.y, which is zero here
        assert_eq!(near.y, 1.0 + 0.2);
    }

    #[test]
    fn test_pulse_extremes() {
        // sin(t*2 + i) = 1 at t*2 + i = pi/2
        let t_peak = std::f32::consts::FRAC_PI_2 / 2.0;
        assert!((pulsed_scale(0.1, 0, t_peak) - 0.12).abs() < 1e-6);

        // sin = -1 at 3*pi/2
        let t_trough = 3.0 * std::f32::consts::FRAC_PI_2 / 2.0;
        assert!((pulsed_scale(0.1, 0, t_trough) - 0.08).abs() < 1e-6);
    }

    proptest! {
        /// Ticking twice with identical inputs gives identical sprites:
        /// nothing accumulates between frames.
        #[test]
        fn prop_tick_is_deterministic(
            elapsed in 0.0f32..10_000.0,
            px in -1.0f32..1.0,
            py in -1.0f32..1.0,
        ) {
            let pointer = PointerOffset { x: px, y: py };
            let mut field = ParticleField::new(32, FIELD_BOUNDS, SEED);

            field.tick(elapsed, pointer);
            let first: Vec<Sprite> = field.sprites().to_vec();

            // Interleave a different frame, then replay the original inputs
            field.tick(elapsed * 0.5 + 1.0, PointerOffset::default());
            field.tick(elapsed, pointer);

            prop_assert_eq!(first, field.sprites().to_vec());
        }

        /// Displacement is bounded: noise contributes at most 0.2 per axis
        /// and the pointer term at most POINTER_STRENGTH * bounds / 10.
        #[test]
        fn prop_displacement_bounded(
            elapsed in 0.0f32..10_000.0,
            px in -1.0f32..1.0,
            py in -1.0f32..1.0,
        ) {
            let pointer = PointerOffset { x: px, y: py };
            let mut field = ParticleField::new(32, FIELD_BOUNDS, SEED);
            field.tick(elapsed, pointer);

            let max_drift = 0.2 + POINTER_STRENGTH * FIELD_BOUNDS / 10.0 + 1e-4;
            for (p, s) in field.particles().iter().zip(field.sprites()) {
                prop_assert!((s.position.x - p.origin.x).abs() <= max_drift);
                prop_assert!((s.position.y - p.origin.y).abs() <= max_drift);
                prop_assert!((s.position.z - p.origin.z).abs() <= 0.2 + 1e-4);
            }
        }
    }
}
