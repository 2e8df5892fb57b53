//! Drawing surface the frame driver paints fireflies on.

/// Anything filled circles can be rasterized onto.
pub trait Surface {
    /// Wipe the surface before a new frame.
    fn clear(&mut self);

    /// Fill a circle of `radius` pixels around `center`.
    fn fill_circle(&mut self, center: (i32, i32), radius: f32);
}

/// Monochrome pixel buffer remembering the largest radius painted on each
/// pixel, so renderers can shade by glow.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelCanvas {
    width: usize,
    height: usize,
    glow: Vec<Option<f32>>,
}

impl PixelCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            glow: vec![None; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Radius of the largest circle covering `(x, y)`, if any.
    pub fn get(&self, x: usize, y: usize) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.glow[y * self.width + x]
    }

    pub fn is_lit(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_some()
    }

    /// Lit pixels as `(x, y, radius)`, row by row.
    pub fn lit_pixels(&self) -> impl Iterator<Item = (usize, usize, f32)> + '_ {
        self.glow
            .iter()
            .enumerate()
            .filter_map(|(i, g)| g.map(|r| (i % self.width, i / self.width, r)))
    }

    /// Change dimensions, dropping the current contents.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.glow = vec![None; width * height];
    }

    fn paint(&mut self, x: i32, y: i32, radius: f32) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let cell = &mut self.glow[y as usize * self.width + x as usize];
        *cell = Some(cell.map_or(radius, |r| r.max(radius)));
    }
}

impl Surface for PixelCanvas {
    fn clear(&mut self) {
        self.glow.fill(None);
    }

    fn fill_circle(&mut self, center: (i32, i32), radius: f32) {
        let radius = radius.max(0.0);
        let reach = radius.ceil() as i32;
        let limit = radius * radius;
        for dy in -reach..=reach {
            for dx in -reach..=reach {
                if (dx * dx + dy * dy) as f32 <= limit {
                    self.paint(center.0 + dx, center.1 + dy, radius);
                }
            }
        }
    }
}
