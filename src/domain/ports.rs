use crate::domain::model::Earthquake;
use crate::utils::error::Result;
use async_trait::async_trait;

/// The user-settable query surface. The core passes both values through to the
/// feed service verbatim; validation, if any, happens in the layer that
/// implements this trait.
pub trait QueryConfig: Send + Sync {
    fn min_magnitude(&self) -> &str;
    fn order_by(&self) -> &str;
}

/// Issue-once fetch handle: one network round trip per call, delivering either
/// the full record list or a single failure. No retry, no partial results.
#[async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Earthquake>>;
}
