//! Digit bitmaps for the fireflies clock.
//!
//! Digits are drawn as 5×7 text art and packed into [`Glyph`] bitmaps at
//! whatever integer scale fits the screen. The swarm samples target points
//! out of these bitmaps with [`sample_point`].

mod glyph;

use glam::Vec2;

pub use glyph::{Glyph, INK, sample_point};

/// Width of a digit in art cells.
pub const DIGIT_COLUMNS: usize = 5;

/// Height of every glyph in art cells.
pub const GLYPH_ROWS: usize = 7;

/// Width of the colon in art cells.
pub const COLON_COLUMNS: usize = 1;

/// Art rows of the two colon dots.
const COLON_DOT_ROWS: [usize; 2] = [2, 4];

/// Pixel-font digits (7 lines tall, 5 cells wide).
pub const DIGITS: [[&str; GLYPH_ROWS]; 10] = [
    // 0
    [
        " ███ ",
        "█   █",
        "█  ██",
        "█ █ █",
        "██  █",
        "█   █",
        " ███ ",
    ],
    // 1
    [
        "  █  ",
        " ██  ",
        "  █  ",
        "  █  ",
        "  █  ",
        "  █  ",
        " ███ ",
    ],
    // 2
    [
        " ███ ",
        "█   █",
        "    █",
        "   █ ",
        "  █  ",
        " █   ",
        "█████",
    ],
    // 3
    [
        "█████",
        "   █ ",
        "  █  ",
        "   █ ",
        "    █",
        "█   █",
        " ███ ",
    ],
    // 4
    [
        "   █ ",
        "  ██ ",
        " █ █ ",
        "█  █ ",
        "█████",
        "   █ ",
        "   █ ",
    ],
    // 5
    [
        "█████",
        "█    ",
        "████ ",
        "    █",
        "    █",
        "█   █",
        " ███ ",
    ],
    // 6
    [
        "  ██ ",
        " █   ",
        "█    ",
        "████ ",
        "█   █",
        "█   █",
        " ███ ",
    ],
    // 7
    [
        "█████",
        "    █",
        "   █ ",
        "  █  ",
        " █   ",
        " █   ",
        " █   ",
    ],
    // 8
    [
        " ███ ",
        "█   █",
        "█   █",
        " ███ ",
        "█   █",
        "█   █",
        " ███ ",
    ],
    // 9
    [
        " ███ ",
        "█   █",
        "█   █",
        " ████",
        "    █",
        "   █ ",
        " ██  ",
    ],
];

/// Colon separator (7 lines tall, 1 cell wide)
pub const COLON: [&str; GLYPH_ROWS] = [" ", " ", "█", " ", "█", " ", " "];

/// Digit and colon glyphs packed at one pixel scale.
#[derive(Debug, Clone)]
pub struct DigitFont {
    scale: usize,
    digits: Vec<Glyph>,
    colon: Glyph,
}

impl DigitFont {
    /// Pack every glyph with each art cell covering `scale × scale` pixels.
    pub fn new(scale: usize) -> Self {
        let scale = scale.max(1);
        Self {
            scale,
            digits: DIGITS.iter().map(|art| Glyph::from_art(art, scale)).collect(),
            colon: Glyph::from_art(&COLON, scale),
        }
    }

    pub fn scale(&self) -> usize {
        self.scale
    }

    /// Glyph for a decimal digit. Values above 9 wrap.
    pub fn digit(&self, digit: u8) -> &Glyph {
        &self.digits[usize::from(digit % 10)]
    }

    pub fn colon(&self) -> &Glyph {
        &self.colon
    }

    /// Pixel size of a digit cell.
    pub fn digit_size(&self) -> Vec2 {
        Vec2::new(
            (DIGIT_COLUMNS * self.scale) as f32,
            (GLYPH_ROWS * self.scale) as f32,
        )
    }

    /// Centers of the two colon dots, relative to the colon cell origin.
    pub fn colon_dots(&self) -> [Vec2; 2] {
        let half = (self.scale as f32 - 1.0) / 2.0;
        let x = (COLON_COLUMNS * self.scale) as f32 / 2.0 - 0.5;
        COLON_DOT_ROWS.map(|row| Vec2::new(x, (row * self.scale) as f32 + half))
    }
}
