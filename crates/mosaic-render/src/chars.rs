//! Character constants for canvas and controls rendering.

/// Upper half block: foreground paints the top sub-pixel, background the bottom.
pub const HALF_BLOCK: &str = "▀";

/// Palette swatch in the controls panel.
pub const SWATCH: &str = "██";

/// Marker under the selected swatch.
pub const SELECTED_MARK: &str = "▔▔";

/// Filled and empty segments of a slider bar.
pub const SLIDER_FILL: char = '━';
pub const SLIDER_EMPTY: char = '─';
pub const SLIDER_KNOB: char = '●';
