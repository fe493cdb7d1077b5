//! Region finding module
//!
//! Flood-fill discovery of 8-connected regions whose color is close to a target color.

mod matching;
mod region;
mod region_finder;
mod scan;
mod visited;
pub mod types;


pub use matching::colors_match;
pub use region::Region;
pub use region_finder::RegionFinder;
pub use scan::scan_regions;
pub use types::{
    DEFAULT_COLOR_THRESHOLD, DEFAULT_MIN_REGION_SIZE, EdgePolicy, FinderConfig,
    FinderConfigBuilder,
};
pub use visited::VisitedGrid;
