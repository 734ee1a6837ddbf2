//! Tile rasterization onto a grid of terminal sub-pixels.
//!
//! Each terminal cell is split into two square sub-pixels stacked
//! vertically (drawn with a half block), each standing for
//! `SUBPIXEL_PX` × `SUBPIXEL_PX` canvas pixels. A tile covers a sub-pixel
//! when the sub-pixel's center falls inside the tile's rotated and scaled
//! square.

use std::f64::consts::SQRT_2;

use mosaic_core::{Rgb, Tile};
use mosaic_grid::{RevealFrame, Viewport};

use crate::color::fade;

/// Canvas pixels per sub-pixel edge.
pub const SUBPIXEL_PX: u32 = 8;
/// Canvas pixels per terminal cell, horizontally.
pub const CELL_WIDTH_PX: u32 = SUBPIXEL_PX;
/// Canvas pixels per terminal cell, vertically (two sub-pixels).
pub const CELL_HEIGHT_PX: u32 = SUBPIXEL_PX * 2;

/// Pixel viewport for a terminal area of `width` × `height` cells.
pub fn viewport_for_cells(width: u16, height: u16) -> Viewport {
    Viewport::new(
        width as u32 * CELL_WIDTH_PX,
        height as u32 * CELL_HEIGHT_PX,
    )
}

/// Sub-pixel color buffer; `None` means background.
#[derive(Debug, Clone, Default)]
pub struct Raster {
    /// Width in sub-pixels (equal to terminal columns).
    width: usize,
    /// Height in sub-pixels (twice the terminal rows).
    height: usize,
    pixels: Vec<Option<Rgb>>,
}

impl Raster {
    /// Create an empty raster for a terminal area of `cols` × `rows` cells.
    pub fn for_cells(cols: u16, rows: u16) -> Self {
        let width = cols as usize;
        let height = rows as usize * 2;
        Self {
            width,
            height,
            pixels: vec![None; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self) {
        self.pixels.fill(None);
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels[y * self.width + x]
    }

    /// Paint every visible tile in order; later tiles cover earlier ones.
    pub fn paint(&mut self, tiles: &[Tile], tile_size: u32, elapsed_ms: f64) {
        self.clear();
        for tile in tiles {
            if let Some(frame) = RevealFrame::at(tile, elapsed_ms) {
                self.paint_tile(tile, tile_size, frame);
            }
        }
    }

    fn paint_tile(&mut self, tile: &Tile, tile_size: u32, frame: RevealFrame) {
        let half = tile_size as f64 / 2.0 * frame.scale;
        if half <= 0.0 || frame.opacity <= 0.0 {
            return;
        }
        let color = fade(tile.color, frame.opacity);

        let center_x = tile.x as f64 + tile_size as f64 / 2.0;
        let center_y = tile.y as f64 + tile_size as f64 / 2.0;

        // A rotated square never reaches past its circumscribed circle
        let reach = half * SQRT_2;
        let sub = SUBPIXEL_PX as f64;
        let x_start = ((center_x - reach) / sub).floor().max(0.0) as usize;
        let y_start = ((center_y - reach) / sub).floor().max(0.0) as usize;
        let x_end = (((center_x + reach) / sub).ceil().max(0.0) as usize).min(self.width);
        let y_end = (((center_y + reach) / sub).ceil().max(0.0) as usize).min(self.height);

        // Rotate sample points back into the tile's own frame
        let (sin, cos) = (-frame.rotation.to_radians()).sin_cos();

        for y in y_start..y_end {
            let py = (y as f64 + 0.5) * sub - center_y;
            for x in x_start..x_end {
                let px = (x as f64 + 0.5) * sub - center_x;
                let u = px * cos - py * sin;
                let v = px * sin + py * cos;
                if u.abs() <= half && v.abs() <= half {
                    self.pixels[y * self.width + x] = Some(color);
                }
            }
        }
    }
}
