use crate::core::query;
use crate::domain::model::Earthquake;
use crate::domain::ports::{FeedSource, QueryConfig};
use crate::utils::error::{FetchError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

/// Wire shape of the USGS GeoJSON feed, reduced to the fields we keep.
/// Any entry violating this shape fails the whole decode; no partial list
/// is ever returned.
#[derive(Debug, Deserialize)]
struct FeedDocument {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    properties: EventProperties,
}

#[derive(Debug, Deserialize)]
struct EventProperties {
    // The feed omits or nulls the magnitude for some events.
    #[serde(default)]
    mag: Option<f64>,
    place: String,
    time: i64,
    #[serde(default)]
    url: Option<Url>,
}

impl From<EventProperties> for Earthquake {
    fn from(props: EventProperties) -> Self {
        Earthquake {
            magnitude: props.mag.unwrap_or(0.0),
            location: props.place,
            occurred_at_millis: props.time,
            detail_url: props.url,
        }
    }
}

/// HTTP client for the earthquake feed. Each `fetch` is self-contained: one
/// GET, one decode, no retry, no cache, no shared state across calls.
pub struct UsgsClient {
    endpoint: Url,
    client: Client,
}

impl UsgsClient {
    pub fn new(endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint).map_err(|e| FetchError::InvalidConfigValueError {
            field: "endpoint".to_string(),
            value: endpoint.to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;
        Ok(Self {
            endpoint,
            client: Client::new(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// One network round trip: build the URL, GET it, decode the body.
    /// Upstream ordering (controlled by `orderby`) is preserved as delivered.
    pub async fn fetch(&self, config: &impl QueryConfig) -> Result<Vec<Earthquake>> {
        let request_url = query::build_request_url(&self.endpoint, config);
        tracing::debug!("Requesting earthquake feed: {}", request_url);

        let response = self.client.get(request_url).send().await?;
        let status = response.status();
        tracing::debug!("Feed response status: {}", status);

        if !status.is_success() {
            return Err(FetchError::HttpStatusError { status });
        }

        // Read the body before decoding so a truncated transfer stays a
        // network failure and only JSON problems surface as decode failures.
        let body = response.text().await?;
        let document: FeedDocument = serde_json::from_str(&body)?;

        let records: Vec<Earthquake> = document
            .features
            .into_iter()
            .map(|feature| feature.properties.into())
            .collect();

        tracing::debug!("Decoded {} earthquake records", records.len());
        Ok(records)
    }
}

/// Binds a client to a query configuration, giving the caller a single
/// issue-once fetch handle (the loader contract the UI layer drives).
pub struct FeedLoader<C: QueryConfig> {
    client: UsgsClient,
    config: C,
}

impl<C: QueryConfig> FeedLoader<C> {
    pub fn new(client: UsgsClient, config: C) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl<C: QueryConfig> FeedSource for FeedLoader<C> {
    async fn fetch(&self) -> Result<Vec<Earthquake>> {
        self.client.fetch(&self.config).await
    }
}
