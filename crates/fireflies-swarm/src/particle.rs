//! Per-particle state and its one-frame physics step.

use fireflies_core::{Prng, Tuning};
use glam::Vec2;

/// How a particle currently behaves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Motion {
    /// Drifting loosely: jitters and twinkles.
    #[default]
    Ambient,
    /// Held on a digit or separator target: no jitter, no twinkle.
    Formation,
}

/// A single firefly.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Current position in screen pixels.
    pub position: Vec2,
    /// Displacement applied per frame.
    pub velocity: Vec2,
    /// Point the particle is pulled toward.
    pub target: Vec2,
    /// Inverse spring constant. Always strictly positive.
    pub stiffness: f32,
    /// Rendered radius.
    pub size: f32,
    /// Radius the size spring is pulling toward.
    pub goal_size: f32,
    pub size_velocity: f32,
    /// Relaxation divisor of the size spring. Always strictly positive.
    pub size_relax: f32,
    pub motion: Motion,
}

impl Particle {
    /// Create a resting ambient particle.
    pub fn new(position: Vec2, target: Vec2, stiffness: f32, size: f32, size_relax: f32) -> Self {
        debug_assert!(stiffness > 0.0, "stiffness must be positive");
        debug_assert!(size_relax > 0.0, "size_relax must be positive");
        Self {
            position,
            velocity: Vec2::ZERO,
            target,
            stiffness,
            size,
            goal_size: size,
            size_velocity: 0.0,
            size_relax,
            motion: Motion::Ambient,
        }
    }

    /// Pin the particle to a formation target.
    pub fn form(&mut self, target: Vec2, stiffness: f32, goal_size: f32) {
        debug_assert!(stiffness > 0.0, "stiffness must be positive");
        self.target = target;
        self.stiffness = stiffness;
        self.goal_size = goal_size;
        self.motion = Motion::Formation;
    }

    /// Let the particle drift again around `target`.
    pub fn release(&mut self, target: Vec2, stiffness: f32, goal_size: f32) {
        debug_assert!(stiffness > 0.0, "stiffness must be positive");
        self.target = target;
        self.stiffness = stiffness;
        self.goal_size = goal_size;
        self.motion = Motion::Ambient;
    }

    /// Pixel the particle is drawn at.
    pub fn pixel(&self) -> (i32, i32) {
        (
            self.position.x.round() as i32,
            self.position.y.round() as i32,
        )
    }

    /// Advance one frame: jitter, spring attraction, damping, speed clamp,
    /// integration, then the size spring.
    pub fn step(&mut self, rng: &mut Prng, tuning: &Tuning) {
        let ambient = self.motion == Motion::Ambient;
        let damping = if ambient {
            tuning.ambient_damping
        } else {
            tuning.formation_damping
        };

        if ambient && rng.chance(tuning.jitter_probability) {
            self.velocity.x += rng.next_float(-tuning.jitter, tuning.jitter);
            self.velocity.y += rng.next_float(-tuning.jitter, tuning.jitter);
        }

        self.velocity += -(self.position - self.target) / self.stiffness;
        self.velocity *= damping;
        let limit = Vec2::splat(tuning.max_speed);
        self.velocity = self.velocity.clamp(-limit, limit);
        self.position += self.velocity;

        if ambient {
            self.twinkle(rng, tuning);
        }
        self.step_size(damping, tuning);
    }

    /// Resting particles occasionally start to glow; fully grown ones fade.
    fn twinkle(&mut self, rng: &mut Prng, tuning: &Tuning) {
        if (self.size - tuning.min_size).abs() < tuning.size_epsilon {
            if rng.chance(tuning.twinkle_probability) {
                self.goal_size = tuning.max_size;
            }
        } else if (self.size - tuning.max_size).abs() < tuning.size_epsilon {
            self.goal_size = tuning.min_size;
        }
    }

    fn step_size(&mut self, damping: f32, tuning: &Tuning) {
        self.size_velocity += -(self.size - self.goal_size) / self.size_relax;
        self.size_velocity *= damping;
        self.size += self.size_velocity;

        // Hitting either bound stops the size spring there.
        if self.size <= tuning.min_size || self.size >= tuning.max_size {
            self.size = self.size.clamp(tuning.min_size, tuning.max_size);
            self.size_velocity = 0.0;
        }
    }
}
