use httpmock::prelude::*;
use quake_report::{Earthquake, FeedConfig, FeedLoader, FeedSource, FetchError, UsgsClient};
use url::Url;

fn usgs_body() -> serde_json::Value {
    serde_json::json!({
        "type": "FeatureCollection",
        "metadata": {
            "generated": 1500000100000u64,
            "url": "https://earthquake.usgs.gov/fdsnws/event/1/query?format=geojson",
            "title": "USGS Earthquakes",
            "status": 200,
            "count": 3
        },
        "features": [
            {
                "type": "Feature",
                "id": "us2000abc1",
                "properties": {
                    "mag": 7.1,
                    "place": "45km N of Anchorage, Alaska",
                    "time": 1500000000000u64,
                    "updated": 1500000050000u64,
                    "tz": null,
                    "url": "https://earthquake.usgs.gov/earthquakes/eventpage/us2000abc1",
                    "felt": 120,
                    "type": "earthquake"
                }
            },
            {
                "type": "Feature",
                "id": "us2000abc2",
                "properties": {
                    "mag": 4.8,
                    "place": "Fiji region",
                    "time": 1499990000000u64,
                    "url": "https://earthquake.usgs.gov/earthquakes/eventpage/us2000abc2",
                    "type": "earthquake"
                }
            },
            {
                "type": "Feature",
                "id": "us2000abc3",
                "properties": {
                    "mag": 3.2,
                    "place": "10km NW of Example City",
                    "time": 1499980000000u64,
                    "url": "https://earthquake.usgs.gov/earthquakes/eventpage/us2000abc3",
                    "type": "earthquake"
                }
            }
        ]
    })
}

#[tokio::test]
async fn test_end_to_end_fetch_with_configured_query() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/fdsnws/event/1/query")
            .query_param("format", "geojson")
            .query_param("limit", "10")
            .query_param("minmag", "3")
            .query_param("orderby", "magnitude");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(usgs_body());
    });

    let config = FeedConfig {
        min_magnitude: "3".to_string(),
        order_by: "magnitude".to_string(),
    };
    let client = UsgsClient::new(&server.url("/fdsnws/event/1/query")).unwrap();
    let records = client.fetch(&config).await.unwrap();

    api_mock.assert();
    assert_eq!(records.len(), 3);

    // Upstream order is preserved; the client never re-sorts.
    assert_eq!(
        records[0],
        Earthquake {
            magnitude: 7.1,
            location: "45km N of Anchorage, Alaska".to_string(),
            occurred_at_millis: 1_500_000_000_000,
            detail_url: Some(
                Url::parse("https://earthquake.usgs.gov/earthquakes/eventpage/us2000abc1").unwrap()
            ),
        }
    );
    assert_eq!(records[1].location, "Fiji region");
    assert_eq!(records[2].magnitude, 3.2);
}

#[tokio::test]
async fn test_end_to_end_via_feed_source_trait() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/query")
            .query_param("minmag", "0")
            .query_param("orderby", "time");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(usgs_body());
    });

    let client = UsgsClient::new(&server.url("/query")).unwrap();
    let loader = FeedLoader::new(client, FeedConfig::default());

    // Exercised through the trait object the caller layer would hold.
    let source: &dyn FeedSource = &loader;
    let records = source.fetch().await.unwrap();

    api_mock.assert();
    assert_eq!(records.len(), 3);
}

#[tokio::test]
async fn test_each_fetch_is_one_round_trip() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/query");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(usgs_body());
    });

    let client = UsgsClient::new(&server.url("/query")).unwrap();
    let config = FeedConfig::default();

    client.fetch(&config).await.unwrap();
    client.fetch(&config).await.unwrap();

    // No caching: two calls, two requests.
    api_mock.assert_hits(2);
}

#[tokio::test]
async fn test_not_found_yields_network_class_error() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/query");
        then.status(404);
    });

    let client = UsgsClient::new(&server.url("/query")).unwrap();
    let err = client.fetch(&FeedConfig::default()).await.unwrap_err();

    api_mock.assert();
    assert!(err.is_network());
    assert!(matches!(err, FetchError::HttpStatusError { .. }));
}

#[tokio::test]
async fn test_failed_fetch_never_masquerades_as_empty_success() {
    let server = MockServer::start();

    // Well-formed JSON that is not a feed document at all.
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/query");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"error": "service migrated"}));
    });

    let client = UsgsClient::new(&server.url("/query")).unwrap();
    let result = client.fetch(&FeedConfig::default()).await;

    api_mock.assert();
    assert!(matches!(result, Err(FetchError::DecodeError(_))));
}
