//! Controls overlay: sliders, palette swatches and the color picker.

use mosaic_core::{
    MAX_ANIMATION_SPEED, MAX_TILE_SIZE, MIN_ANIMATION_SPEED, MIN_TILE_SIZE, Palette, Rgb,
};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
};

use crate::chars::{SELECTED_MARK, SLIDER_EMPTY, SLIDER_FILL, SLIDER_KNOB, SWATCH};
use crate::color::{contrast_text, to_color};

/// Outer width of the panel including borders.
pub const PANEL_WIDTH: u16 = 40;
/// Cells used by a slider bar.
const SLIDER_WIDTH: usize = 16;
/// Swatches shown per palette row.
const SWATCHES_PER_ROW: usize = 10;

/// State of the hex color input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerView<'a> {
    /// Text typed so far, without the leading `#`.
    pub input: &'a str,
    /// Parsed color if the input is complete and valid.
    pub preview: Option<Rgb>,
}

/// Everything the controls panel shows.
#[derive(Debug, Clone, Copy)]
pub struct ControlsView<'a> {
    pub tile_size: u32,
    pub animation_speed: f64,
    pub palette: &'a Palette,
    /// Index of the highlighted swatch.
    pub selected: usize,
    /// Open color picker, if any.
    pub picker: Option<PickerView<'a>>,
    /// Number of tiles in the current generation.
    pub tile_count: usize,
    /// Transient message shown under the controls.
    pub status: Option<&'a str>,
}

impl ControlsView<'_> {
    /// Build the panel body.
    pub fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(vec![
                "Tile Size      ".white(),
                format!("{:>3}px ", self.tile_size).bold().white(),
                Span::raw(slider(
                    self.tile_size as f64,
                    MIN_TILE_SIZE as f64,
                    MAX_TILE_SIZE as f64,
                )),
            ]),
            Line::from(vec![
                "Speed          ".white(),
                format!("{:>4.1}x ", self.animation_speed).bold().white(),
                Span::raw(slider(
                    self.animation_speed,
                    MIN_ANIMATION_SPEED,
                    MAX_ANIMATION_SPEED,
                )),
            ]),
            Line::from(""),
            Line::from(vec![
                "Colors ".white(),
                format!("({})", self.palette.len()).dark_gray(),
            ]),
        ];

        lines.extend(self.palette_lines());
        lines.push(self.picker_line());
        lines.push(Line::from(""));
        lines.push(Line::from(format!("{} tiles", self.tile_count)).dark_gray());

        if let Some(status) = self.status {
            lines.push(Line::from(status.to_string()).yellow());
        }

        lines.push(help_line(&[("+/-", "size"), ("</>", "speed"), ("r", "reset")]));
        lines.push(help_line(&[("a", "add"), ("x", "remove"), ("h", "hide"), ("q", "quit")]));
        lines
    }

    /// Swatch rows, each followed by a row marking the selected swatch.
    fn palette_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        let colors = self.palette.colors();
        for (chunk_idx, chunk) in colors.chunks(SWATCHES_PER_ROW).enumerate() {
            let mut swatches = Vec::with_capacity(chunk.len() * 2);
            let mut marks = Vec::with_capacity(chunk.len() * 2);
            for (offset, color) in chunk.iter().enumerate() {
                let index = chunk_idx * SWATCHES_PER_ROW + offset;
                swatches.push(Span::styled(SWATCH, Style::new().fg(to_color(*color))));
                swatches.push(Span::raw(" "));
                if index == self.selected {
                    marks.push(Span::raw(SELECTED_MARK).white());
                } else {
                    marks.push(Span::raw("  "));
                }
                marks.push(Span::raw(" "));
            }
            lines.push(Line::from(swatches));
            lines.push(Line::from(marks));
        }
        lines
    }

    fn picker_line(&self) -> Line<'static> {
        match self.picker {
            Some(picker) => {
                let mut spans = vec![
                    "New color #".white(),
                    picker.input.to_string().bold(),
                    "▏".white(),
                ];
                if let Some(color) = picker.preview {
                    spans.push(Span::raw(" "));
                    spans.push(Span::styled(
                        format!(" {color} "),
                        Style::new().bg(to_color(color)).fg(contrast_text(color)),
                    ));
                }
                Line::from(spans)
            }
            None => match self.palette.get(self.selected) {
                Some(color) => Line::from(vec![
                    "Selected ".dark_gray(),
                    color.to_string().white(),
                ]),
                None => Line::from(""),
            },
        }
    }

    /// Draw the panel in the top-left corner of `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let lines = self.lines();
        let height = (lines.len() as u16).saturating_add(2);
        let panel = Rect::new(
            area.x.saturating_add(2),
            area.y.saturating_add(1),
            PANEL_WIDTH,
            height,
        )
        .intersection(area);
        if panel.is_empty() {
            return;
        }

        let block = Block::bordered()
            .title(" mosaic ")
            .border_style(Style::new().fg(Color::DarkGray))
            .style(Style::new().bg(Color::Black));

        frame.render_widget(Clear, panel);
        frame.render_widget(Paragraph::new(lines).block(block), panel);
    }
}

/// Text slider with a knob at `value` between `min` and `max`.
fn slider(value: f64, min: f64, max: f64) -> String {
    let span = (max - min).max(f64::EPSILON);
    let ratio = ((value - min) / span).clamp(0.0, 1.0);
    let knob = (ratio * (SLIDER_WIDTH - 1) as f64).round() as usize;
    (0..SLIDER_WIDTH)
        .map(|i| match i.cmp(&knob) {
            std::cmp::Ordering::Less => SLIDER_FILL,
            std::cmp::Ordering::Equal => SLIDER_KNOB,
            std::cmp::Ordering::Greater => SLIDER_EMPTY,
        })
        .collect()
}

fn help_line(entries: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(entries.len() * 2);
    for &(key, label) in entries {
        spans.push(key.bold().cyan());
        spans.push(format!(" {label}  ").dark_gray());
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    fn view(palette: &Palette) -> ControlsView<'_> {
        ControlsView {
            tile_size: 30,
            animation_speed: 1.0,
            palette,
            selected: 0,
            picker: None,
            tile_count: 42,
            status: None,
        }
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_slider_positions() {
        assert!(slider(10.0, 10.0, 100.0).starts_with(SLIDER_KNOB));
        assert!(slider(100.0, 10.0, 100.0).ends_with(SLIDER_KNOB));
        assert_eq!(slider(55.0, 10.0, 100.0).chars().count(), SLIDER_WIDTH);
        assert_eq!(
            slider(55.0, 10.0, 100.0)
                .chars()
                .filter(|c| *c == SLIDER_KNOB)
                .count(),
            1
        );
    }

    #[test]
    fn test_lines_show_values() {
        let palette = Palette::default();
        let text: Vec<String> = view(&palette).lines().iter().map(line_text).collect();
        assert!(text[0].contains(" 30px"));
        assert!(text[1].contains(" 1.0x"));
        assert!(text.iter().any(|l| l.contains("42 tiles")));
        assert!(text.iter().any(|l| l.contains("#ffffff")));
    }

    #[test]
    fn test_selected_swatch_is_marked() {
        let palette = Palette::new([Rgb::WHITE, Rgb::new(255, 0, 0), Rgb::new(0, 0, 255)]).unwrap();
        let controls = ControlsView {
            selected: 2,
            ..view(&palette)
        };
        let marks = line_text(&controls.palette_lines()[1]);
        assert_eq!(marks, format!("      {SELECTED_MARK} "));
    }

    #[test]
    fn test_picker_preview() {
        let palette = Palette::default();
        let controls = ControlsView {
            picker: Some(PickerView {
                input: "ff0000",
                preview: Some(Rgb::new(255, 0, 0)),
            }),
            ..view(&palette)
        };
        let text = line_text(&controls.picker_line());
        assert!(text.starts_with("New color #ff0000"));
        assert!(text.contains("#ff0000 "));
    }

    #[test]
    fn test_render_draws_panel() {
        let palette = Palette::default();
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                view(&palette).render(frame, area);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let row: String = (0..60u16).map(|x| buffer[(x, 2u16)].symbol()).collect();
        assert!(row.contains("Tile Size"));
    }

    #[test]
    fn test_render_in_tiny_area_does_not_panic() {
        let palette = Palette::default();
        let mut terminal = Terminal::new(TestBackend::new(3, 1)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                view(&palette).render(frame, area);
            })
            .unwrap();
    }
}
