use crate::domain::ports::QueryConfig;
use url::Url;

/// USGS earthquake event service.
pub const DEFAULT_ENDPOINT: &str = "https://earthquake.usgs.gov/fdsnws/event/1/query";

/// Fixed response format; the decoder only understands GeoJSON.
pub const RESPONSE_FORMAT: &str = "geojson";

/// Fixed cap on the number of returned events.
pub const RESULT_LIMIT: &str = "10";

/// Assembles the request URL for one fetch. Pure: the configured strings are
/// appended verbatim, malformed values are the upstream service's to reject.
pub fn build_request_url(endpoint: &Url, config: &impl QueryConfig) -> Url {
    let mut url = endpoint.clone();
    url.query_pairs_mut()
        .append_pair("format", RESPONSE_FORMAT)
        .append_pair("limit", RESULT_LIMIT)
        .append_pair("minmag", config.min_magnitude())
        .append_pair("orderby", config.order_by());
    url
}
