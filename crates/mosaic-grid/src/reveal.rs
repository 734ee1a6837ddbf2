//! Per-tile reveal timeline.
//!
//! A tile waits for its delay, animates for its duration and then stays
//! at its final transform. The phase is a pure function of the time since
//! the tile set was generated, so nothing per tile has to be stored.

use mosaic_core::Tile;

use crate::easing::REVEAL_EASING;

/// Where a tile is in its reveal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealPhase {
    /// Waiting for the delay to elapse; not visible yet.
    Pending,
    /// Animating; `progress` is linear time progress in 0.0-1.0.
    Animating { progress: f64 },
    /// Finished; holds the final transform.
    Settled,
}

/// Phase of `tile` at `elapsed_ms` since generation.
pub fn reveal_phase(tile: &Tile, elapsed_ms: f64) -> RevealPhase {
    if elapsed_ms < tile.delay {
        return RevealPhase::Pending;
    }
    let progress = (elapsed_ms - tile.delay) / tile.duration;
    if progress >= 1.0 {
        RevealPhase::Settled
    } else {
        RevealPhase::Animating { progress }
    }
}

/// Whether every tile has settled.
pub fn reveal_complete(tiles: &[Tile], elapsed_ms: f64) -> bool {
    tiles.iter().all(|t| elapsed_ms >= t.end_time())
}

/// Animated appearance of a tile at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealFrame {
    /// 0.0 (invisible) to 1.0.
    pub opacity: f64,
    /// Current scale, growing from 0 to the tile's scale.
    pub scale: f64,
    /// Current rotation in degrees, turning from 0 to the tile's rotation.
    pub rotation: f64,
}

impl RevealFrame {
    /// Appearance of `tile` at `elapsed_ms`, or `None` while it is pending.
    pub fn at(tile: &Tile, elapsed_ms: f64) -> Option<Self> {
        let eased = match reveal_phase(tile, elapsed_ms) {
            RevealPhase::Pending => return None,
            RevealPhase::Animating { progress } => REVEAL_EASING.ease(progress),
            RevealPhase::Settled => 1.0,
        };
        Some(Self {
            opacity: eased,
            scale: tile.scale * eased,
            rotation: tile.rotation * eased,
        })
    }
}
