//! Tile records produced by the grid generator.

use std::fmt;

use crate::Rgb;

/// Identity of a tile within one generation.
///
/// The generation key is part of the identity so a reset never reuses an
/// id from the previous tile set, even for the same cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileId {
    pub row: u32,
    pub col: u32,
    pub generation: u64,
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.row, self.col, self.generation)
    }
}

/// One grid cell's visual and animation record.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub id: TileId,
    /// Grid row.
    pub row: u32,
    /// Grid column.
    pub col: u32,
    /// Left edge in pixels.
    pub x: u32,
    /// Top edge in pixels.
    pub y: u32,
    pub color: Rgb,
    /// Milliseconds before the reveal starts.
    pub delay: f64,
    /// Reveal duration in milliseconds.
    pub duration: f64,
    /// Final rotation in degrees, 0.0-360.0.
    pub rotation: f64,
    /// Final scale factor, 0.8-1.2.
    pub scale: f64,
    /// Reveal-order jitter, 0.0-0.3.
    pub order_jitter: f64,
}

impl Tile {
    /// Sort key for the reveal order: the delay shortened by the tile's jitter.
    pub fn order_key(&self) -> f64 {
        self.delay * (1.0 - self.order_jitter)
    }

    /// Time at which the reveal completes.
    pub fn end_time(&self) -> f64 {
        self.delay + self.duration
    }
}
