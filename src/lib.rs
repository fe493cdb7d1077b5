pub mod region_finding;
pub mod logger;
