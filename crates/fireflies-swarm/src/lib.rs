//! Particle swarm simulation for the fireflies clock.
//!
//! A [`Swarm`] of spring-driven [`Particle`]s drifts around an ambient
//! target and, once a minute, gathers into the digits of the current time.
//! [`Simulation`] ties the swarm to its random stream and the three
//! self re-arming timers; frames are drawn onto any [`Surface`], and
//! [`GlowLayer`] paints a [`PixelCanvas`] onto a ratatui canvas.

mod color;
mod driver;
mod layout;
mod particle;
mod render;
mod sim;
mod surface;
mod swarm;
mod timer;

pub use color::{glow_color, hsl_to_rgb};
pub use driver::advance_frame;
pub use layout::{FaceLayout, partition};
pub use particle::{Motion, Particle};
pub use render::GlowLayer;
pub use sim::{Clock, Simulation};
pub use surface::{PixelCanvas, Surface};
pub use swarm::{DisplayMode, DisplayState, Swarm};
pub use timer::{Scheduler, Task, Timer};
