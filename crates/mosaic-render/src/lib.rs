//! Terminal rendering for the mosaic tile animation.
//!
//! Tiles are rasterized onto half-block sub-pixels so each terminal cell
//! shows two square pixels, then drawn as a full-screen canvas. A small
//! overlay panel shows the generation controls.

mod chars;
mod color;
mod controls;
mod raster;
mod state;

pub use color::{BACKGROUND, fade, to_color};
pub use controls::{ControlsView, PANEL_WIDTH, PickerView};
pub use raster::{CELL_HEIGHT_PX, CELL_WIDTH_PX, Raster, SUBPIXEL_PX, viewport_for_cells};
pub use state::CanvasState;
