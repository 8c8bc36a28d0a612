pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::LocalStorage;
pub use config::CliConfig;

pub use crate::core::{etl::EnrichEngine, pipeline::LeadPipeline};
pub use crate::utils::error::{EnrichError, Result};
