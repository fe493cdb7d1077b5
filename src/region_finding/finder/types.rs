//! Region finding configuration types

/// Maximum per-channel difference for a pixel to match the target color
pub const DEFAULT_COLOR_THRESHOLD: u8 = 30;

/// Minimum number of points a region needs to be reported
pub const DEFAULT_MIN_REGION_SIZE: usize = 20;

/// Which grid cells may be reached as the neighbor of another cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgePolicy {
    /// Every in-bounds cell is a valid neighbor
    #[default]
    Inclusive,
    /// Row 0 and column 0 are never accepted as neighbors, although their pixels can still
    /// seed a region of their own. Matches the neighbor bounds check of the legacy region
    /// tracker.
    ExcludeBorder,
}

impl EdgePolicy {
    pub fn accepts(self, x: usize, y: usize, width: usize, height: usize) -> bool {
        match self {
            EdgePolicy::Inclusive => x < width && y < height,
            EdgePolicy::ExcludeBorder => x > 0 && x < width && y > 0 && y < height,
        }
    }
}

/// Configuration for region finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinderConfig {
    /// Largest allowed absolute difference on each of the red, green and blue channels
    pub color_threshold: u8,
    /// Regions with fewer points are discarded (0 is treated as 1)
    pub min_region_size: usize,
    /// Bounds check applied to neighbors during region growing
    pub edge_policy: EdgePolicy,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            color_threshold: DEFAULT_COLOR_THRESHOLD,
            min_region_size: DEFAULT_MIN_REGION_SIZE,
            edge_policy: EdgePolicy::Inclusive,
        }
    }
}

impl FinderConfig {
    pub fn builder() -> FinderConfigBuilder {
        FinderConfigBuilder::default()
    }

    pub(crate) fn effective_min_region_size(&self) -> usize {
        self.min_region_size.max(1)
    }
}

/// Builder for FinderConfig
#[derive(Default)]
pub struct FinderConfigBuilder {
    color_threshold: Option<u8>,
    min_region_size: Option<usize>,
    edge_policy: Option<EdgePolicy>,
}

impl FinderConfigBuilder {
    pub fn color_threshold(mut self, threshold: u8) -> Self {
        self.color_threshold = Some(threshold);
        self
    }

    pub fn min_region_size(mut self, size: usize) -> Self {
        self.min_region_size = Some(size);
        self
    }

    pub fn edge_policy(mut self, policy: EdgePolicy) -> Self {
        self.edge_policy = Some(policy);
        self
    }

    pub fn build(self) -> FinderConfig {
        let default = FinderConfig::default();
        FinderConfig {
            color_threshold: self.color_threshold.unwrap_or(default.color_threshold),
            min_region_size: self.min_region_size.unwrap_or(default.min_region_size),
            edge_policy: self.edge_policy.unwrap_or(default.edge_policy),
        }
    }
}
