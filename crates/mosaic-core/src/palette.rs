//! The ordered, never-empty set of tile colors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Rgb;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("palette must contain at least one color")]
    Empty,
}

/// Ordered collection of tile colors.
///
/// A palette always holds at least one color and never holds the same
/// color twice. Removing the last remaining color and adding a color that
/// is already present are both silent no-ops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Rgb>", into = "Vec<Rgb>")]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: vec![Rgb::WHITE],
        }
    }
}

impl Palette {
    /// Build a palette from a list of colors, dropping later duplicates.
    pub fn new(colors: impl IntoIterator<Item = Rgb>) -> Result<Self, PaletteError> {
        let mut palette = Self { colors: Vec::new() };
        for color in colors {
            palette.add(color);
        }
        if palette.colors.is_empty() {
            return Err(PaletteError::Empty);
        }
        Ok(palette)
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; kept alongside `len` for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn contains(&self, color: Rgb) -> bool {
        self.colors.contains(&color)
    }

    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.colors.get(index).copied()
    }

    /// Append a color. Returns `false` if it was already present.
    pub fn add(&mut self, color: Rgb) -> bool {
        if self.contains(color) {
            return false;
        }
        self.colors.push(color);
        true
    }

    /// Remove a color. Returns `false` if it was absent or the only entry.
    pub fn remove(&mut self, color: Rgb) -> bool {
        if self.colors.len() <= 1 {
            return false;
        }
        let before = self.colors.len();
        self.colors.retain(|c| *c != color);
        self.colors.len() != before
    }
}

impl TryFrom<Vec<Rgb>> for Palette {
    type Error = PaletteError;

    fn try_from(value: Vec<Rgb>) -> Result<Self, Self::Error> {
        Palette::new(value)
    }
}

impl From<Palette> for Vec<Rgb> {
    fn from(value: Palette) -> Self {
        value.colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(255, 0, 0);
    const BLUE: Rgb = Rgb::new(0, 0, 255);

    #[test]
    fn test_default_is_white() {
        assert_eq!(Palette::default().colors(), &[Rgb::WHITE]);
    }

    #[test]
    fn test_new_rejects_empty() {
        assert_eq!(Palette::new(Vec::new()), Err(PaletteError::Empty));
    }

    #[test]
    fn test_new_drops_duplicates() {
        let palette = Palette::new([RED, BLUE, RED]).unwrap();
        assert_eq!(palette.colors(), &[RED, BLUE]);
    }

    #[test]
    fn test_remove_last_color_is_noop() {
        let mut palette = Palette::default();
        assert!(!palette.remove(Rgb::WHITE));
        assert_eq!(palette.colors(), &[Rgb::WHITE]);
    }

    #[test]
    fn test_remove_existing_color() {
        let mut palette = Palette::new([Rgb::WHITE, RED]).unwrap();
        assert!(palette.remove(Rgb::WHITE));
        assert_eq!(palette.colors(), &[RED]);
        // Now the guard kicks in
        assert!(!palette.remove(RED));
        assert_eq!(palette.len(), 1);
    }

    #[test]
    fn test_remove_absent_color() {
        let mut palette = Palette::new([Rgb::WHITE, RED]).unwrap();
        assert!(!palette.remove(BLUE));
        assert_eq!(palette.len(), 2);
    }

    #[test]
    fn test_add_duplicate_is_noop() {
        let mut palette = Palette::default();
        assert!(!palette.add(Rgb::WHITE));
        assert_eq!(palette.len(), 1);
        assert!(palette.add(RED));
        assert_eq!(palette.colors(), &[Rgb::WHITE, RED]);
    }
}
