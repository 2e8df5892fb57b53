//! Firefly glow colours.

use ratatui::style::Color;

/// Map a glow level (0.0-1.0) to a colour from dim amber to pale yellow.
pub fn glow_color(level: f32) -> Color {
    let level = level.clamp(0.0, 1.0);

    // Hue: 35 (amber) -> 60 (yellow)
    let hue = 35.0 + level * 25.0;

    // Brighter fireflies wash out towards white
    let saturation = 1.0 - level * 0.3;
    let lightness = 0.3 + level * 0.5;

    hsl_to_rgb(hue, saturation, lightness)
}

/// Convert HSL (hue in degrees, saturation and lightness in 0.0-1.0) to an
/// RGB colour.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Color {
    let chroma = s * l.min(1.0 - l);
    let channel = |n: f32| {
        let k = (n + h / 30.0).rem_euclid(12.0);
        let v = l - chroma * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0);
        (v.clamp(0.0, 1.0) * 255.0) as u8
    };
    Color::Rgb(channel(0.0), channel(8.0), channel(4.0))
}
