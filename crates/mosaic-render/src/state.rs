//! Canvas render state.

use mosaic_core::Tile;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::chars::HALF_BLOCK;
use crate::color::{BACKGROUND, to_color};
use crate::raster::Raster;

/// Tile canvas state, reused across frames.
#[derive(Debug, Default)]
pub struct CanvasState {
    /// Sub-pixel buffer sized to the last rendered area.
    raster: Raster,
    /// Last known canvas width in cells.
    last_width: u16,
    /// Last known canvas height in cells.
    last_height: u16,
}

impl CanvasState {
    /// Create a new canvas state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `tiles` as they look `elapsed_ms` after generation.
    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        tiles: &[Tile],
        tile_size: u32,
        elapsed_ms: f64,
    ) {
        // Reallocate the buffer only when the area changes size
        if area.width != self.last_width || area.height != self.last_height {
            self.raster = Raster::for_cells(area.width, area.height);
            self.last_width = area.width;
            self.last_height = area.height;
        }

        self.raster.paint(tiles, tile_size, elapsed_ms);

        let lines: Vec<Line> = (0..area.height as usize)
            .map(|row| {
                let spans: Vec<Span> = (0..area.width as usize)
                    .map(|x| self.render_cell(x, row))
                    .collect();
                Line::from(spans)
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }

    /// One terminal cell: top sub-pixel as foreground, bottom as background.
    fn render_cell(&self, x: usize, row: usize) -> Span<'static> {
        let top = self.raster.get(x, row * 2).unwrap_or(BACKGROUND);
        let bottom = self.raster.get(x, row * 2 + 1).unwrap_or(BACKGROUND);
        Span::styled(
            HALF_BLOCK,
            Style::new().fg(to_color(top)).bg(to_color(bottom)),
        )
    }
}
