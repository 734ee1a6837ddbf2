//! Color conversion for terminal output.

use mosaic_core::Rgb;
use ratatui::style::Color;

/// Color shown where no tile covers the canvas.
pub const BACKGROUND: Rgb = Rgb::BLACK;

/// Convert a palette color to a terminal color.
pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Blend a tile color over the background at the given opacity (0.0-1.0).
pub fn fade(rgb: Rgb, opacity: f64) -> Rgb {
    BACKGROUND.lerp(rgb, opacity)
}

/// Pick black or white text for legibility on top of `rgb`.
pub fn contrast_text(rgb: Rgb) -> Color {
    // Rec. 601 luma
    let luma = 0.299 * rgb.r as f32 + 0.587 * rgb.g as f32 + 0.114 * rgb.b as f32;
    if luma > 140.0 {
        Color::Black
    } else {
        Color::White
    }
}
