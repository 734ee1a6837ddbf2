//! Core types for the mosaic tile animation.
//!
//! These are shared by the grid generator, the renderer and the binary:
//! colors and palettes, tiles and their identities, and the parameters that
//! drive a generation.

mod color;
mod palette;
mod params;
mod tile;

pub use color::{ColorParseError, Rgb};
pub use palette::{Palette, PaletteError};
pub use params::{
    ANIMATION_SPEED_STEP, DEFAULT_ANIMATION_SPEED, DEFAULT_TILE_SIZE, GenerationParams,
    MAX_ANIMATION_SPEED, MAX_TILE_SIZE, MIN_ANIMATION_SPEED, MIN_TILE_SIZE,
    clamp_animation_speed, clamp_tile_size,
};
pub use tile::{Tile, TileId};
