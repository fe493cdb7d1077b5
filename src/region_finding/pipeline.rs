//! Region pipeline module
//!
//! Orchestrates decode → region finding → recoloring → encode for whole image files.

mod region_pipeline;
pub mod types;


pub use region_pipeline::RegionPipeline;
pub use types::{PipelineConfig, PipelineConfigBuilder, RegionSummary};
