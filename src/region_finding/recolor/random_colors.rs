use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::region_finding::pixels::Color;
use crate::region_finding::recolor::source::ColorSource;

/// Largest value of a packed `0xRRGGBB` color.
const MAX_RGB24: u32 = 0x00FF_FFFF;

/// Opaque colors drawn uniformly from the 24-bit RGB space.
#[derive(Debug, Clone)]
pub struct RandomColors {
    rng: StdRng,
}

impl RandomColors {
    /// Seeded from the operating system, so every instance yields a different sequence.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomColors {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorSource for RandomColors {
    fn next_color(&mut self) -> Color {
        Color::from_rgb24(self.rng.random_range(0..=MAX_RGB24))
    }
}
