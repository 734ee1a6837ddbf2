//! Parameters that drive a tile generation.

use crate::Palette;

/// Default tile edge length in pixels.
pub const DEFAULT_TILE_SIZE: u32 = 30;
/// Smallest tile size the controls allow.
pub const MIN_TILE_SIZE: u32 = 10;
/// Largest tile size the controls allow.
pub const MAX_TILE_SIZE: u32 = 100;

/// Default animation speed multiplier.
pub const DEFAULT_ANIMATION_SPEED: f64 = 1.0;
/// Slowest animation speed the controls allow.
pub const MIN_ANIMATION_SPEED: f64 = 0.5;
/// Fastest animation speed the controls allow.
pub const MAX_ANIMATION_SPEED: f64 = 2.0;
/// Step used by the speed control.
pub const ANIMATION_SPEED_STEP: f64 = 0.1;

/// Everything the grid generator needs apart from the viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    /// Tile edge length in pixels.
    pub tile_size: u32,
    /// Animation speed multiplier; all timings are divided by it.
    pub animation_speed: f64,
    /// Colors tiles are sampled from.
    pub palette: Palette,
    /// Bumped on reset so every tile gets a fresh identity.
    pub generation_key: u64,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            animation_speed: DEFAULT_ANIMATION_SPEED,
            palette: Palette::default(),
            generation_key: 0,
        }
    }
}

/// Clamp a tile size to the range offered by the controls.
pub fn clamp_tile_size(px: u32) -> u32 {
    px.clamp(MIN_TILE_SIZE, MAX_TILE_SIZE)
}

/// Clamp a speed to the control range and snap it to the nearest step.
///
/// Non-finite input falls back to the default speed.
pub fn clamp_animation_speed(speed: f64) -> f64 {
    if !speed.is_finite() {
        return DEFAULT_ANIMATION_SPEED;
    }
    let snapped = (speed / ANIMATION_SPEED_STEP).round() * ANIMATION_SPEED_STEP;
    // Round again to one decimal so repeated steps don't accumulate error
    let snapped = (snapped * 10.0).round() / 10.0;
    snapped.clamp(MIN_ANIMATION_SPEED, MAX_ANIMATION_SPEED)
}
