pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::HttpFetcher;
pub use config::{FinderConfig, DEFAULT_COLORS_URL};
pub use core::finder::ColorFinder;
pub use domain::matcher::{filter_colors, matches};
pub use domain::model::{ColorRecord, CompColor, Criteria};
pub use domain::ports::JsonFetcher;
pub use utils::error::{FinderError, Result};
