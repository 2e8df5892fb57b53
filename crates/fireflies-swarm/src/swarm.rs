//! The particle collection and its digit assignments.

use std::ops::Range;

use fireflies_core::{ClockTime, Face, Prng, TimeFormat, Tuning, TuningError};
use fireflies_fonts::{DigitFont, sample_point};
use glam::Vec2;
use log::debug;

use crate::driver::advance_frame;
use crate::layout::{FaceLayout, partition};
use crate::particle::{Motion, Particle};
use crate::surface::Surface;

/// Share of the screen added around it when scattering at startup.
const SCATTER_MARGIN: f32 = 0.1;

/// Share of the screen kept clear of relocated ambient targets.
const RELOCATE_INSET: f32 = 0.15;

/// What the swarm is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayMode {
    #[default]
    Ambient,
    Digits,
}

/// Mode flag plus the time the current digits were formed for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayState {
    pub mode: DisplayMode,
    pub shown: Option<(ClockTime, TimeFormat)>,
}

/// Owns every particle and decides where each one is headed.
#[derive(Debug, Clone)]
pub struct Swarm {
    particles: Vec<Particle>,
    tuning: Tuning,
    screen: Vec2,
    layout: FaceLayout,
    font: DigitFont,
    ambient_target: Vec2,
    display: DisplayState,
}

impl Swarm {
    /// Scatter `tuning.num_particles` resting particles over and around the
    /// screen, all drifting toward its center.
    pub fn new(screen: Vec2, face: Face, tuning: Tuning, rng: &mut Prng) -> Result<Self, TuningError> {
        tuning.validate()?;

        let center = screen / 2.0;
        let margin = screen * SCATTER_MARGIN;
        let particles = (0..tuning.num_particles)
            .map(|_| {
                let position = Vec2::new(
                    rng.next_float(-margin.x, screen.x + margin.x),
                    rng.next_float(-margin.y, screen.y + margin.y),
                );
                let stiffness =
                    rng.next_float(tuning.ambient_stiffness.low, tuning.ambient_stiffness.high);
                let size_relax = rng.next_float(tuning.size_relax.low, tuning.size_relax.high);
                Particle::new(position, center, stiffness, tuning.min_size, size_relax)
            })
            .collect();

        let layout = FaceLayout::new(face, screen);
        let font = DigitFont::new(layout.scale());

        Ok(Self {
            particles,
            tuning,
            screen,
            layout,
            font,
            ambient_target: center,
            display: DisplayState::default(),
        })
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn screen(&self) -> Vec2 {
        self.screen
    }

    pub fn layout(&self) -> &FaceLayout {
        &self.layout
    }

    pub fn font(&self) -> &DigitFont {
        &self.font
    }

    pub fn display(&self) -> DisplayState {
        self.display
    }

    pub fn ambient_target(&self) -> Vec2 {
        self.ambient_target
    }

    /// Mean position of all particles.
    pub fn centroid(&self) -> Vec2 {
        if self.particles.is_empty() {
            return self.ambient_target;
        }
        let sum: Vec2 = self.particles.iter().map(|p| p.position).sum();
        sum / self.particles.len() as f32
    }

    /// Step and draw every particle once.
    pub fn advance<S: Surface + ?Sized>(&mut self, rng: &mut Prng, surface: &mut S) {
        advance_frame(&mut self.particles, rng, &self.tuning, surface);
    }

    /// Point every drifting particle at `target`.
    pub fn set_ambient_target(&mut self, target: Vec2) {
        self.ambient_target = target;
        for p in self.particles.iter_mut().filter(|p| p.motion == Motion::Ambient) {
            p.target = target;
        }
    }

    /// Move the ambient target to a random point well inside the screen.
    pub fn relocate_ambient(&mut self, rng: &mut Prng) {
        let inset = self.screen * RELOCATE_INSET;
        let target = Vec2::new(
            rng.next_float(inset.x, self.screen.x - inset.x),
            rng.next_float(inset.y, self.screen.y - inset.y),
        );
        debug!("ambient target moved to ({:.1}, {:.1})", target.x, target.y);
        self.set_ambient_target(target);
    }

    /// Particles reserved in front of the digit groups: colon particles
    /// first, then floaters.
    fn reserve(&self) -> (usize, usize) {
        let separators = if self.layout.face().has_separator() {
            self.tuning.separator_particles
        } else {
            0
        };
        (separators, separators + self.tuning.floaters)
    }

    /// Index ranges of the particles forming each of `count` digits.
    pub fn digit_groups(&self, count: usize) -> Vec<Range<usize>> {
        let (_, reserve) = self.reserve();
        partition(self.particles.len(), reserve, count)
    }

    /// Absolute centers of the colon dots.
    pub fn separator_dots(&self) -> Option<[Vec2; 2]> {
        let origin = self.layout.separator_origin()?;
        Some(self.font.colon_dots().map(|dot| origin + dot))
    }

    /// Gather the swarm into the digits of `time`.
    ///
    /// Colon particles are pinned alternately to the two dots, each digit
    /// group samples its targets from the digit glyph, and floaters plus any
    /// leftover particles keep drifting.
    pub fn show_time(&mut self, time: ClockTime, format: TimeFormat, rng: &mut Prng) {
        let digits = time.digits(format, self.layout.face());
        let groups = self.digit_groups(digits.len());
        let (separators, reserve) = self.reserve();
        let stiffness = self.tuning.formation_stiffness;
        let size = self.tuning.digit_size;

        if let Some(dots) = self.separator_dots() {
            for (i, p) in self.particles[..separators].iter_mut().enumerate() {
                let goal = self.tuning.clamp_size(rng.next_float(size.low, size.high));
                p.form(dots[i % 2], stiffness, goal);
            }
        }

        for (&(slot, digit), range) in digits.iter().zip(&groups) {
            let Some(origin) = self.layout.slot_origin(slot) else {
                continue;
            };
            let glyph = self.font.digit(digit);
            for p in &mut self.particles[range.clone()] {
                let target = sample_point(glyph, origin, rng);
                let goal = self.tuning.clamp_size(rng.next_float(size.low, size.high));
                p.form(target, stiffness, goal);
            }
        }

        let assigned_end = groups.last().map_or(reserve, |g| g.end);
        for i in (separators..reserve).chain(assigned_end..self.particles.len()) {
            self.release(i, rng);
        }

        debug!(
            "formed {:02}:{:02} ({:?}) from {} digit groups of {} particles",
            time.hour,
            time.minute,
            format,
            groups.len(),
            groups.first().map_or(0, |g| g.len())
        );
        self.display = DisplayState {
            mode: DisplayMode::Digits,
            shown: Some((time, format)),
        };
    }

    /// Let every particle drift back toward the ambient target.
    pub fn disperse(&mut self, rng: &mut Prng) {
        for i in 0..self.particles.len() {
            self.release(i, rng);
        }
        debug!("swarm dispersed");
        self.display = DisplayState::default();
    }

    fn release(&mut self, index: usize, rng: &mut Prng) {
        let p = &mut self.particles[index];
        if p.motion == Motion::Ambient {
            p.target = self.ambient_target;
            return;
        }
        let stiffness = rng.next_float(
            self.tuning.ambient_stiffness.low,
            self.tuning.ambient_stiffness.high,
        );
        p.release(self.ambient_target, stiffness, self.tuning.min_size);
    }

    /// Re-fit the face to new screen dimensions, re-forming the current
    /// digits if any are shown.
    pub fn resize(&mut self, screen: Vec2, rng: &mut Prng) {
        if screen == self.screen {
            return;
        }
        debug!("resizing swarm to {}x{}", screen.x, screen.y);
        self.screen = screen;
        self.layout = FaceLayout::new(self.layout.face(), screen);
        if self.layout.scale() != self.font.scale() {
            self.font = DigitFont::new(self.layout.scale());
        }
        self.set_ambient_target(self.ambient_target.clamp(Vec2::ZERO, screen));

        if let (DisplayMode::Digits, Some((time, format))) = (self.display.mode, self.display.shown) {
            self.show_time(time, format, rng);
        }
    }
}
