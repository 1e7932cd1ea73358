pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliArgs;

pub use crate::adapters::{HttpFeedClient, TracingReporter};
pub use crate::config::SearchConfig;
pub use crate::core::{engine::SearchEngine, pipeline::SearchPipeline};
pub use crate::utils::error::{FinderError, Result};
