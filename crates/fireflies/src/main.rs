mod host;

use std::fs::{self, File};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use fireflies_config::Config;
use fireflies_core::{Prng, TuningError};
use fireflies_swarm::{DisplayMode, GlowLayer, PixelCanvas, Simulation, glow_color};
use glam::Vec2;
use log::{info, warn};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::{Color, Stylize},
    symbols::Marker,
    text::Line,
    widgets::canvas::Canvas,
};

use crate::host::LocalClock;

/// Rows below the canvas used by the help line.
const HELP_ROWS: u16 = 1;

/// Input wait when no timer is pending.
const IDLE_POLL: Duration = Duration::from_millis(100);

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_logging()?;
    let config = Config::load().unwrap_or_else(|e| {
        warn!("ignoring configuration: {e}");
        Config::default()
    });

    let terminal = ratatui::init();
    let result = run(config, terminal);
    ratatui::restore();
    result
}

fn run(config: Config, terminal: DefaultTerminal) -> color_eyre::Result<()> {
    let size = terminal.size()?;
    let app = App::new(config, size.width, size.height)?;
    app.run(terminal)
}

/// Log to a file, and only when `RUST_LOG` asks for it. Anything written to
/// the terminal would tear the UI.
fn init_logging() -> color_eyre::Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }
    let path = fireflies_config::log_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = File::create(&path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

/// Braille pixel resolution of a terminal area.
fn canvas_pixels(cols: u16, rows: u16) -> (usize, usize) {
    (cols as usize * 2, rows.saturating_sub(HELP_ROWS) as usize * 4)
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    sim: Simulation,
    /// Pixels drawn by the last frame.
    canvas: PixelCanvas,
    clock: LocalClock,
    /// Origin of the millisecond timeline the scheduler runs on.
    epoch: Instant,
}

impl App {
    /// Construct a new instance of [`App`] for a terminal of `cols` × `rows`.
    pub fn new(config: Config, cols: u16, rows: u16) -> Result<Self, TuningError> {
        let seed = config.seed.unwrap_or_else(rand::random);
        info!("starting swarm with seed {seed}");

        let (width, height) = canvas_pixels(cols, rows);
        let screen = Vec2::new(width as f32, height as f32);
        let sim = Simulation::new(
            Prng::new(seed),
            screen,
            config.face,
            config.tuning,
            config.timing,
        )?;
        Ok(Self {
            running: false,
            sim,
            canvas: PixelCanvas::new(width, height),
            clock: LocalClock::new(config.time_format),
            epoch: Instant::now(),
        })
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        self.sim.start(self.now_ms());
        while self.running {
            if self.sim.poll(self.now_ms(), &self.clock, &mut self.canvas) {
                terminal.draw(|frame| self.render(frame))?;
            }
            self.handle_crossterm_events()?;
        }
        self.sim.shutdown();
        Ok(())
    }

    fn now_ms(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }

    /// Renders the user interface.
    fn render(&self, frame: &mut Frame) {
        let chunks =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(HELP_ROWS)]).split(frame.area());

        let layer = GlowLayer::new(&self.canvas, self.sim.swarm().tuning().max_size);
        let (x_bounds, y_bounds) = layer.bounds();
        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .background_color(Color::Black)
            .x_bounds(x_bounds)
            .y_bounds(y_bounds)
            .paint(|ctx| ctx.draw(&layer));
        frame.render_widget(canvas, chunks[0]);

        let accent = glow_color(1.0);
        let relocate = if self.sim.timing().relocate_ambient {
            " roam on"
        } else {
            " roam off"
        };
        let help = Line::from(vec![
            "q".bold().fg(accent),
            " quit  ".dark_gray(),
            "t".bold().fg(accent),
            " toggle 12/24h  ".dark_gray(),
            "space".bold().fg(accent),
            " show/hide time  ".dark_gray(),
            "r".bold().fg(accent),
            relocate.dark_gray(),
        ])
        .centered();
        frame.render_widget(help, chunks[1]);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Waits no longer than the next simulation deadline.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        let timeout = self.sim.next_deadline().map_or(IDLE_POLL, |deadline| {
            Duration::from_millis(deadline.saturating_sub(self.now_ms()))
        });
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Resize(cols, rows) => self.resize(cols, rows),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('t')) => self.toggle_time_format(),
            (_, KeyCode::Char(' ')) => self.sim.toggle_digits(&self.clock),
            (_, KeyCode::Char('r')) => {
                let relocate = !self.sim.timing().relocate_ambient;
                self.sim.set_relocate_ambient(relocate);
            }
            _ => {}
        }
    }

    /// Toggle between 12-hour and 24-hour time format, re-forming digits
    /// that are already shown.
    fn toggle_time_format(&mut self) {
        self.clock.toggle_format();
        if self.sim.swarm().display().mode == DisplayMode::Digits {
            self.sim.on_clock(&self.clock);
        }
    }

    /// Fit the swarm and the canvas to a resized terminal.
    fn resize(&mut self, cols: u16, rows: u16) {
        let (width, height) = canvas_pixels(cols, rows);
        self.canvas.resize(width, height);
        self.sim.resize(Vec2::new(width as f32, height as f32));
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
