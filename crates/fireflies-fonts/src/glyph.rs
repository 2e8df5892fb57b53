//! Packed monochrome glyph bitmaps and point sampling.

use fireflies_core::Prng;
use glam::Vec2;

/// Character that marks a set pixel in glyph art.
pub const INK: char = '█';

/// Bit draws per sample before settling for the last-tried bit.
const BIT_ATTEMPTS: usize = 8;

/// A monochrome bitmap with rows packed LSB-first into `stride` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    width: usize,
    height: usize,
    stride: usize,
    bits: Vec<u8>,
}

impl Glyph {
    /// Pack text art into a bitmap, blowing each character up into a
    /// `scale × scale` block of pixels.
    ///
    /// Rows shorter than the widest row are padded with unset pixels.
    pub fn from_art(rows: &[&str], scale: usize) -> Self {
        let scale = scale.max(1);
        let columns = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let width = columns * scale;
        let height = rows.len() * scale;
        let stride = width.div_ceil(8);
        let mut bits = vec![0u8; stride * height];

        for (art_y, row) in rows.iter().enumerate() {
            for (art_x, ch) in row.chars().enumerate() {
                if ch != INK {
                    continue;
                }
                for y in art_y * scale..(art_y + 1) * scale {
                    for x in art_x * scale..(art_x + 1) * scale {
                        bits[y * stride + x / 8] |= 1 << (x % 8);
                    }
                }
            }
        }

        Self {
            width,
            height,
            stride,
            bits,
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Bytes per row.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Raw packed rows.
    pub fn bytes(&self) -> &[u8] {
        &self.bits
    }

    /// Whether the pixel at `(x, y)` is set. Out-of-range pixels are unset.
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.bits[y * self.stride + x / 8] & (1 << (x % 8)) != 0
    }

    /// Number of set pixels.
    pub fn set_pixels(&self) -> usize {
        self.bits.iter().map(|b| b.count_ones() as usize).sum()
    }

    pub fn is_blank(&self) -> bool {
        self.bits.iter().all(|&b| b == 0)
    }
}

/// Pick a random inked pixel of `glyph` and return it translated by `offset`.
///
/// Bytes are rejection-sampled until a non-empty one turns up, then up to
/// eight bit positions are tried inside it. If none of those hits ink the
/// last-tried bit is used anyway, so a small share of samples may land on an
/// unset pixel of an inked byte. Columns are clamped to the glyph width.
/// A blank glyph yields `offset` itself.
pub fn sample_point(glyph: &Glyph, offset: Vec2, rng: &mut Prng) -> Vec2 {
    if glyph.is_blank() {
        return offset;
    }

    let bytes = glyph.bytes();
    let last = bytes.len() as i32 - 1;
    let (index, byte) = loop {
        let index = rng.next_int(0, last) as usize;
        if bytes[index] != 0 {
            break (index, bytes[index]);
        }
    };

    let mut bit = 0;
    for _ in 0..BIT_ATTEMPTS {
        bit = rng.next_int(0, 7) as usize;
        if byte & (1 << bit) != 0 {
            break;
        }
    }

    let flat = index * 8 + bit;
    let stride_bits = glyph.stride() * 8;
    let row = flat / stride_bits;
    let column = (flat % stride_bits).min(glyph.width() - 1);

    offset + Vec2::new(column as f32, row as f32)
}
