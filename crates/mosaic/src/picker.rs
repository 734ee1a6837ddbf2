//! Hex color input for adding palette entries.

use mosaic_core::Rgb;

/// Longest accepted input, `rrggbb`.
const MAX_DIGITS: usize = 6;

/// Text state of the color picker.
///
/// The input survives closing the picker so the next add starts from the
/// last color typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPicker {
    input: String,
}

impl Default for ColorPicker {
    fn default() -> Self {
        Self::new(Rgb::WHITE)
    }
}

impl ColorPicker {
    pub fn new(initial: Rgb) -> Self {
        let hex = initial.to_string();
        Self {
            input: hex.trim_start_matches('#').to_string(),
        }
    }

    /// Digits typed so far, without `#`.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The color the input describes, once it is a complete short or long form.
    pub fn color(&self) -> Option<Rgb> {
        match self.input.len() {
            3 | 6 => self.input.parse().ok(),
            _ => None,
        }
    }

    /// Append a hex digit; anything else, or a seventh digit, is ignored.
    pub fn push(&mut self, c: char) -> bool {
        if !c.is_ascii_hexdigit() || self.input.len() >= MAX_DIGITS {
            return false;
        }
        self.input.push(c.to_ascii_lowercase());
        true
    }

    pub fn pop(&mut self) {
        self.input.pop();
    }
}
