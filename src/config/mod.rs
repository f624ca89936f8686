#[cfg(feature = "cli")]
pub mod cli;

use crate::domain::ports::QueryConfig;
use serde::{Deserialize, Serialize};

/// Default minimum magnitude: include everything.
pub const DEFAULT_MIN_MAGNITUDE: &str = "0";
/// Default sort order: most recent first.
pub const DEFAULT_ORDER_BY: &str = "time";

/// Plain query settings for library callers. Both values are forwarded to the
/// feed service as-is; see `core::query`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    #[serde(default = "default_min_magnitude")]
    pub min_magnitude: String,
    #[serde(default = "default_order_by")]
    pub order_by: String,
}

fn default_min_magnitude() -> String {
    DEFAULT_MIN_MAGNITUDE.to_string()
}

fn default_order_by() -> String {
    DEFAULT_ORDER_BY.to_string()
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            min_magnitude: default_min_magnitude(),
            order_by: default_order_by(),
        }
    }
}

impl QueryConfig for FeedConfig {
    fn min_magnitude(&self) -> &str {
        &self.min_magnitude
    }

    fn order_by(&self) -> &str {
        &self.order_by
    }
}
