pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::config::FeedConfig;
pub use crate::core::feed::{FeedLoader, UsgsClient};
pub use crate::domain::model::Earthquake;
pub use crate::domain::ports::{FeedSource, QueryConfig};
pub use crate::utils::error::{FetchError, Result};
