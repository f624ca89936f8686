use serde::{Deserialize, Serialize};
use url::Url;

/// One seismic event from the feed. Immutable once constructed; a fresh set is
/// built on every fetch and the previous set is discarded, never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Earthquake {
    /// Seismic magnitude. Negative values are valid; a missing value in the
    /// feed decodes to 0.0.
    pub magnitude: f64,
    /// Free-text place description, e.g. "10km NW of Example City". No
    /// structural guarantee of the offset phrase.
    pub location: String,
    /// Event time, milliseconds since the epoch, UTC.
    pub occurred_at_millis: i64,
    /// Human-readable detail page, when the feed provides one.
    pub detail_url: Option<Url>,
}
