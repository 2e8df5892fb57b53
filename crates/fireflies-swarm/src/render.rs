//! Showing a [`PixelCanvas`] through ratatui's canvas widget.

use ratatui::widgets::canvas::{Painter, Shape};

use crate::color::glow_color;
use crate::surface::PixelCanvas;

/// Canvas shape painting every lit pixel, shaded by the radius that lit it.
///
/// The canvas widget should use bounds `[0, width - 1]` × `[0, height - 1]`
/// so that one canvas pixel maps onto one marker dot. Row 0 is the top.
#[derive(Debug, Clone, Copy)]
pub struct GlowLayer<'a> {
    canvas: &'a PixelCanvas,
    max_size: f32,
}

impl<'a> GlowLayer<'a> {
    pub fn new(canvas: &'a PixelCanvas, max_size: f32) -> Self {
        Self { canvas, max_size }
    }

    /// Canvas x and y bounds matching the pixel grid.
    pub fn bounds(&self) -> ([f64; 2], [f64; 2]) {
        let w = self.canvas.width().saturating_sub(1) as f64;
        let h = self.canvas.height().saturating_sub(1) as f64;
        ([0.0, w], [0.0, h])
    }
}

impl Shape for GlowLayer<'_> {
    fn draw(&self, painter: &mut Painter) {
        let top = self.canvas.height().saturating_sub(1);
        for (x, y, radius) in self.canvas.lit_pixels() {
            let level = if self.max_size > 0.0 {
                radius / self.max_size
            } else {
                1.0
            };
            // Canvas y grows upwards.
            if let Some((px, py)) = painter.get_point(x as f64, (top - y) as f64) {
                painter.paint(px, py, glow_color(level));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{
        buffer::Buffer,
        layout::Rect,
        symbols::Marker,
        widgets::{Widget, canvas::Canvas},
    };

    use super::*;
    use crate::surface::Surface;

    #[test]
    fn test_bounds_follow_canvas() {
        let canvas = PixelCanvas::new(160, 96);
        let layer = GlowLayer::new(&canvas, 4.0);
        assert_eq!(layer.bounds(), ([0.0, 159.0], [0.0, 95.0]));
    }

    #[test]
    fn test_lit_pixel_reaches_buffer() {
        let area = Rect::new(0, 0, 4, 2);
        let mut pixels = PixelCanvas::new(8, 8);
        pixels.fill_circle((0, 0), 0.0);
        let layer = GlowLayer::new(&pixels, 4.0);
        let (x_bounds, y_bounds) = layer.bounds();

        let mut buffer = Buffer::empty(area);
        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds(x_bounds)
            .y_bounds(y_bounds)
            .paint(|ctx| ctx.draw(&layer))
            .render(area, &mut buffer);

        // Top-left braille dot.
        assert_eq!(buffer[(0, 0)].symbol(), "⠁");
        assert_eq!(buffer[(3, 1)].symbol(), " ");
    }
}
