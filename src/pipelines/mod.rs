//! Pipelines.
//!
//! The module provides a light [pipeline::Pipeline] trait and the
//! [ReviewClean] batch pipeline that drives the cleaning stages.
#[allow(clippy::module_inception)]
pub mod pipeline;
mod review_clean;

pub use pipeline::Pipeline;
pub use review_clean::ReviewClean;
