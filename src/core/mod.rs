pub mod feed;
pub mod query;
pub mod report;

pub use crate::domain::model::Earthquake;
pub use crate::domain::ports::{FeedSource, QueryConfig};
pub use crate::utils::error::Result;
