use crate::region_finding::pixels::Color;

/// Supplies the color for each recolored region.
pub trait ColorSource {
    fn next_color(&mut self) -> Color;
}

impl<F: FnMut() -> Color> ColorSource for F {
    fn next_color(&mut self) -> Color {
        self()
    }
}
