//! The simulation context: random stream, swarm and timers in one place.

use fireflies_core::{ClockTime, Face, Prng, TimeFormat, Timing, Tuning, TuningError};
use glam::Vec2;
use log::{debug, info};

use crate::surface::Surface;
use crate::swarm::{DisplayMode, Swarm};
use crate::timer::{Scheduler, Task, Timer};

/// Wall-clock queries the host answers.
pub trait Clock {
    /// Current local hour and minute.
    fn current_time(&self) -> ClockTime;

    /// Whether the user prefers 24-hour time.
    fn is_24_hour(&self) -> bool;
}

/// Everything the animation mutates, owned by the application entry point.
///
/// The host calls [`Simulation::poll`] from its event loop; due timers run
/// their handlers, and each handler re-arms its own timer on the way out.
#[derive(Debug)]
pub struct Simulation {
    rng: Prng,
    swarm: Swarm,
    scheduler: Scheduler,
    timing: Timing,
    /// Time and format the clock handler last saw.
    last_seen: Option<(ClockTime, TimeFormat)>,
    running: bool,
}

impl Simulation {
    pub fn new(
        mut rng: Prng,
        screen: Vec2,
        face: Face,
        tuning: Tuning,
        timing: Timing,
    ) -> Result<Self, TuningError> {
        timing.validate()?;
        let swarm = Swarm::new(screen, face, tuning, &mut rng)?;
        Ok(Self {
            rng,
            swarm,
            scheduler: Scheduler::new(),
            timing,
            last_seen: None,
            running: false,
        })
    }

    pub fn swarm(&self) -> &Swarm {
        &self.swarm
    }

    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Arm all three timers.
    pub fn start(&mut self, now_ms: u64) {
        self.running = true;
        self.scheduler.arm_every(Task::Frame, 0, self.timing.frame_ms, now_ms);
        self.scheduler.arm_every(
            Task::Clock,
            self.timing.intro_ms,
            self.timing.clock_poll_ms,
            now_ms,
        );
        let delay = self.swarm_delay();
        self.scheduler.arm(Task::Swarm, delay, now_ms);
        info!(
            "simulation started with {} particles",
            self.swarm.particles().len()
        );
    }

    /// Stop re-arming. Pending timers are dropped.
    pub fn shutdown(&mut self) {
        self.running = false;
        self.scheduler.clear();
        info!("simulation stopped");
    }

    /// Earliest timeline instant at which [`Simulation::poll`] has work.
    pub fn next_deadline(&self) -> Option<u64> {
        self.scheduler.next_deadline()
    }

    /// Run every handler due at `now_ms`. Returns whether a frame was drawn.
    pub fn poll<C, S>(&mut self, now_ms: u64, clock: &C, surface: &mut S) -> bool
    where
        C: Clock + ?Sized,
        S: Surface + ?Sized,
    {
        let mut drew = false;
        for timer in self.scheduler.take_due(now_ms) {
            match timer.task {
                Task::Frame => {
                    self.on_frame(surface);
                    self.rearm(timer, now_ms);
                    drew = true;
                }
                Task::Swarm => {
                    self.on_swarm();
                    // Every swarm delay is drawn fresh.
                    let delay = self.swarm_delay();
                    self.rearm(Timer { interval_ms: delay, ..timer }, now_ms);
                }
                Task::Clock => {
                    self.on_clock(clock);
                    self.rearm(timer, now_ms);
                }
            }
        }
        drew
    }

    fn rearm(&mut self, timer: Timer, now_ms: u64) {
        if self.running {
            self.scheduler.rearm(timer, now_ms);
        }
    }

    fn swarm_delay(&mut self) -> u64 {
        let min = i32::try_from(self.timing.swarm_min_ms).unwrap_or(i32::MAX);
        let max = i32::try_from(self.timing.swarm_max_ms).unwrap_or(i32::MAX);
        self.rng.next_int(min, max) as u64
    }

    /// Clear the surface, then step and draw every particle.
    pub fn on_frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear();
        self.swarm.advance(&mut self.rng, surface);
    }

    /// Swarm tick: scatter unheld digits, then move the ambient target.
    pub fn on_swarm(&mut self) {
        if self.swarm.display().mode == DisplayMode::Digits && !self.timing.hold_digits {
            self.swarm.disperse(&mut self.rng);
        }
        if self.timing.relocate_ambient {
            self.swarm.relocate_ambient(&mut self.rng);
        }
    }

    /// Clock tick: form digits when the minute changed, or re-form shown
    /// digits when only the format changed.
    ///
    /// A format change while the swarm is dispersed is remembered without
    /// bringing the digits back.
    pub fn on_clock<C: Clock + ?Sized>(&mut self, clock: &C) {
        let time = clock.current_time();
        let format = TimeFormat::from_24_hour(clock.is_24_hour());
        match self.last_seen {
            Some((last_time, last_format)) if last_time == time => {
                if last_format == format {
                    return;
                }
                if self.swarm.display().mode == DisplayMode::Digits {
                    self.on_minute(time, format);
                } else {
                    debug!("format changed to {format:?} while dispersed");
                    self.last_seen = Some((time, format));
                }
            }
            _ => self.on_minute(time, format),
        }
    }

    /// Form the digits of `time`.
    pub fn on_minute(&mut self, time: ClockTime, format: TimeFormat) {
        self.last_seen = Some((time, format));
        self.swarm.show_time(time, format, &mut self.rng);
    }

    /// Show the current time now, or scatter the digits if already shown.
    pub fn toggle_digits<C: Clock + ?Sized>(&mut self, clock: &C) {
        match self.swarm.display().mode {
            DisplayMode::Digits => self.swarm.disperse(&mut self.rng),
            DisplayMode::Ambient => self.on_minute(
                clock.current_time(),
                TimeFormat::from_24_hour(clock.is_24_hour()),
            ),
        }
    }

    pub fn set_relocate_ambient(&mut self, relocate: bool) {
        debug!("ambient relocation {}", if relocate { "on" } else { "off" });
        self.timing.relocate_ambient = relocate;
    }

    /// Adapt to new screen dimensions.
    pub fn resize(&mut self, screen: Vec2) {
        self.swarm.resize(screen, &mut self.rng);
    }
}
