//! Per-frame loop: move every firefly, then draw it.

use fireflies_core::{Prng, Tuning};

use crate::particle::Particle;
use crate::surface::Surface;

/// Step and draw each particle in index order.
///
/// Update and draw stay in lockstep: one physics step and one circle per
/// particle per call. Missed frames are not caught up.
pub fn advance_frame<S: Surface + ?Sized>(
    particles: &mut [Particle],
    rng: &mut Prng,
    tuning: &Tuning,
    surface: &mut S,
) {
    for particle in particles.iter_mut() {
        particle.step(rng, tuning);
        surface.fill_circle(particle.pixel(), particle.size);
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;

    /// Records the draw calls it receives.
    #[derive(Default)]
    struct Recorder {
        circles: Vec<((i32, i32), f32)>,
    }

    impl Surface for Recorder {
        fn clear(&mut self) {
            self.circles.clear();
        }

        fn fill_circle(&mut self, center: (i32, i32), radius: f32) {
            self.circles.push((center, radius));
        }
    }

    #[test]
    fn test_draws_each_particle_after_stepping() {
        let tuning = Tuning::default();
        let mut rng = Prng::new(4);
        let mut particles: Vec<Particle> = (0..3)
            .map(|i| {
                Particle::new(
                    Vec2::new(i as f32 * 10.0, 0.0),
                    Vec2::new(50.0, 50.0),
                    20.0,
                    1.0,
                    30.0,
                )
            })
            .collect();
        let mut recorder = Recorder::default();

        advance_frame(&mut particles, &mut rng, &tuning, &mut recorder);

        assert_eq!(recorder.circles.len(), 3);
        for (p, (center, radius)) in particles.iter().zip(&recorder.circles) {
            assert_eq!(*center, p.pixel());
            assert_eq!(*radius, p.size);
            assert_ne!(p.position, Vec2::ZERO);
        }
    }

    #[test]
    fn test_matches_manual_steps() {
        let tuning = Tuning::default();
        let start: Vec<Particle> = (0..20)
            .map(|i| Particle::new(Vec2::splat(i as f32), Vec2::new(70.0, 80.0), 700.0, 0.0, 90.0))
            .collect();

        let mut driven = start.clone();
        let mut rng = Prng::new(11);
        let mut recorder = Recorder::default();
        for _ in 0..50 {
            advance_frame(&mut driven, &mut rng, &tuning, &mut recorder);
        }

        let mut manual = start;
        let mut rng = Prng::new(11);
        for _ in 0..50 {
            for p in &mut manual {
                p.step(&mut rng, &tuning);
            }
        }

        assert_eq!(driven, manual);
    }
}
