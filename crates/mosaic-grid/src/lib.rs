//! Tile grid generation and reveal scheduling.
//!
//! The generator lays a grid of square tiles over the viewport and gives
//! each tile a staggered reveal schedule radiating from the center with
//! random jitter. The reveal module turns that schedule into per-frame
//! animation values, and the store owns the parameters that drive a
//! regeneration.

mod debounce;
mod easing;
mod generate;
mod reveal;
mod store;

pub use debounce::{DEFAULT_RESIZE_QUIET, ResizeDebouncer};
pub use easing::{CubicBezier, REVEAL_EASING};
pub use generate::{GridDimensions, GridError, Viewport, generate_tiles};
pub use reveal::{RevealFrame, RevealPhase, reveal_complete, reveal_phase};
pub use store::GenerationStore;
