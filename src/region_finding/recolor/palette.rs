use crate::region_finding::common::error::{RegionError, Result};
use crate::region_finding::pixels::Color;
use crate::region_finding::recolor::source::ColorSource;

/// Cycles through a fixed list of colors, wrapping around after the last one.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<Color>,
    next: usize,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Result<Self> {
        if colors.is_empty() {
            return Err(RegionError::InvalidColor(
                "palette needs at least one color".to_string(),
            ));
        }
        Ok(Self { colors, next: 0 })
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

impl ColorSource for Palette {
    fn next_color(&mut self) -> Color {
        let color = self.colors[self.next];
        self.next = (self.next + 1) % self.colors.len();
        color
    }
}
