//! Generation parameters and the current tile set.

use std::time::Instant;

use mosaic_core::{
    ANIMATION_SPEED_STEP, GenerationParams, Palette, Rgb, Tile, clamp_animation_speed,
    clamp_tile_size,
};
use rand::Rng;
use tracing::{debug, warn};

use crate::{GridError, Viewport, generate_tiles};

/// Owns the generation parameters, the viewport and the tiles built from them.
///
/// Every mutator reports whether it changed anything; a change marks the
/// store dirty and the next [`GenerationStore::regenerate_if_dirty`] call
/// rebuilds the whole tile set.
#[derive(Debug, Clone)]
pub struct GenerationStore {
    params: GenerationParams,
    viewport: Viewport,
    tiles: Vec<Tile>,
    dirty: bool,
    generated_at: Option<Instant>,
}

impl Default for GenerationStore {
    fn default() -> Self {
        Self::new(GenerationParams::default())
    }
}

impl GenerationStore {
    /// Create a store; it starts dirty so the first frame generates tiles.
    pub fn new(params: GenerationParams) -> Self {
        Self {
            params,
            viewport: Viewport::default(),
            tiles: Vec::new(),
            dirty: true,
            generated_at: None,
        }
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    pub fn palette(&self) -> &Palette {
        &self.params.palette
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Tiles in reveal order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Milliseconds since the current tile set was generated.
    pub fn elapsed_ms(&self, now: Instant) -> f64 {
        self.generated_at
            .map(|at| now.saturating_duration_since(at).as_secs_f64() * 1000.0)
            .unwrap_or(0.0)
    }

    fn mark_changed(&mut self, changed: bool) -> bool {
        self.dirty |= changed;
        changed
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> bool {
        let changed = self.viewport != viewport;
        self.viewport = viewport;
        self.mark_changed(changed)
    }

    /// Set the tile size, clamped to the control range.
    pub fn set_tile_size(&mut self, px: u32) -> bool {
        let px = clamp_tile_size(px);
        let changed = self.params.tile_size != px;
        self.params.tile_size = px;
        self.mark_changed(changed)
    }

    pub fn adjust_tile_size(&mut self, delta: i32) -> bool {
        let px = self.params.tile_size.saturating_add_signed(delta);
        self.set_tile_size(px)
    }

    /// Set the animation speed, clamped and snapped to the control steps.
    pub fn set_animation_speed(&mut self, speed: f64) -> bool {
        let speed = clamp_animation_speed(speed);
        let changed = self.params.animation_speed != speed;
        self.params.animation_speed = speed;
        self.mark_changed(changed)
    }

    /// Move the animation speed by whole control steps.
    pub fn adjust_animation_speed(&mut self, steps: i32) -> bool {
        let speed = self.params.animation_speed + steps as f64 * ANIMATION_SPEED_STEP;
        self.set_animation_speed(speed)
    }

    /// Add a color; a color already in the palette is ignored.
    pub fn add_color(&mut self, color: Rgb) -> bool {
        let changed = self.params.palette.add(color);
        if !changed {
            debug!(%color, "color already in palette");
        }
        self.mark_changed(changed)
    }

    /// Remove a color; the last remaining color is kept.
    pub fn remove_color(&mut self, color: Rgb) -> bool {
        let changed = self.params.palette.remove(color);
        if !changed {
            debug!(%color, palette_len = self.params.palette.len(), "color not removed");
        }
        self.mark_changed(changed)
    }

    /// Force fresh tile identities for the same layout.
    pub fn reset(&mut self) {
        self.params.generation_key = self.params.generation_key.wrapping_add(1);
        self.dirty = true;
    }

    /// Rebuild the tile set if anything changed since the last build.
    ///
    /// Returns whether a rebuild happened. On error the old tiles are
    /// dropped and the store stays dirty.
    pub fn regenerate_if_dirty<R: Rng>(
        &mut self,
        now: Instant,
        rng: &mut R,
    ) -> Result<bool, GridError> {
        if !self.dirty {
            return Ok(false);
        }
        self.regenerate(now, rng)?;
        Ok(true)
    }

    fn regenerate<R: Rng>(&mut self, now: Instant, rng: &mut R) -> Result<(), GridError> {
        let started = Instant::now();
        self.tiles = match generate_tiles(self.viewport, &self.params, rng) {
            Ok(tiles) => tiles,
            Err(err) => {
                warn!(%err, "tile generation rejected parameters");
                self.tiles.clear();
                return Err(err);
            }
        };
        self.generated_at = Some(now);
        self.dirty = false;

        debug!(
            tiles = self.tiles.len(),
            width = self.viewport.width,
            height = self.viewport.height,
            tile_size = self.params.tile_size,
            speed = self.params.animation_speed,
            generation = self.params.generation_key,
            took_us = started.elapsed().as_micros() as u64,
            "regenerated tile grid"
        );
        Ok(())
    }
}
