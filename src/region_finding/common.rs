//! Common utilities module
//!
//! This module contains shared utilities used across region finding.

pub mod error;

pub use error::{RegionError, Result};
