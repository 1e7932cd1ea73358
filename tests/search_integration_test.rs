use httpmock::prelude::*;
use std::io::Write;
use tempfile::Builder;
use vaccine_finder::domain::model::SearchReport;
use vaccine_finder::domain::ports::Reporter;
use vaccine_finder::utils::validation::Validate;
use vaccine_finder::{FinderError, HttpFeedClient, SearchConfig, SearchEngine, TracingReporter};

struct NoopReporter;

impl Reporter for NoopReporter {
    fn report(&self, _report: &SearchReport) {}
}

fn location(name: &str, provider: &str, lon: f64, lat: f64, available: bool) -> serde_json::Value {
    serde_json::json!({
        "type": "Feature",
        "geometry": {"type": "Point", "coordinates": [lon, lat]},
        "properties": {
            "name": name,
            "provider": provider,
            "city": "Testville",
            "state": "CA",
            "appointments_available": available,
            "appointments": []
        }
    })
}

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn names(report: &SearchReport) -> Vec<String> {
    report
        .outcome
        .nearest
        .iter()
        .map(|r| r.feature.properties.name.clone())
        .collect()
}

#[tokio::test]
async fn test_two_feeds_nearest_across_both() {
    let server = MockServer::start();
    let ca_mock = server.mock(|when, then| {
        when.method(GET).path("/CA.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "type": "FeatureCollection",
                "features": [
                    location("ca-far", "cvs", 0.0, 0.40, true),
                    location("ca-near", "cvs", 0.0, 0.05, true),
                    location("ca-mid", "cvs", 0.0, 0.20, true)
                ]
            }));
    });
    let nv_mock = server.mock(|when, then| {
        when.method(GET).path("/NV.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "features": [
                    location("nv-1", "walgreens", 0.10, 0.0, true),
                    location("nv-2", "walgreens", 0.30, 0.0, true)
                ]
            }));
    });

    let config_file = write_config(&format!(
        r#"{{
            "api_urls": ["{}", "{}"],
            "search_latitude": 0.0,
            "search_longitude": 0.0,
            "num_nearest_locations_to_log": 4
        }}"#,
        server.url("/CA.json"),
        server.url("/NV.json")
    ));

    let config = SearchConfig::from_file(config_file.path()).unwrap();
    config.validate().unwrap();
    let client = HttpFeedClient::new(config.add_uuid_parameter, config.request_timeout()).unwrap();
    let engine = SearchEngine::new(client, config, TracingReporter::new());

    let report = engine.run().await.unwrap();

    ca_mock.assert();
    nv_mock.assert();
    assert_eq!(names(&report), vec!["ca-near", "nv-1", "ca-mid", "nv-2"]);
    assert_eq!(report.outcome.stats.survivors, 5);
    assert_eq!(report.feeds.len(), 2);
    assert_eq!(report.feeds[0].feature_count, 3);
    assert_eq!(report.feeds[1].feature_count, 2);
}

#[tokio::test]
async fn test_filters_and_data_quality_anomalies() {
    let server = MockServer::start();
    let mut bad_geometry = location("bad-geometry", "Clinic A", 0.0, 0.0, true);
    bad_geometry["geometry"]["coordinates"] = serde_json::json!([0.0, 0.0, 5.0]);

    server.mock(|when, then| {
        when.method(GET).path("/feed.json");
        then.status(200).json_body(serde_json::json!({
            "features": [
                location("no-appointments", "Clinic A", 0.0, 0.0, false),
                bad_geometry,
                location("wrong-provider", "Clinic B", 0.0, 0.01, true),
                location("too-far", "clinic a", 0.0, 15.0 / 69.08, true),
                location("match", " Clinic A ", 0.0, 0.05, true)
            ]
        }));
    });

    let config = SearchConfig::from_json_str(&format!(
        r#"{{
            "api_url": "{}",
            "search_latitude": 0.0,
            "search_longitude": 0.0,
            "num_nearest_locations_to_log": 10,
            "filter_provider": "clinic a",
            "filter_distance_miles": 10
        }}"#,
        server.url("/feed.json")
    ))
    .unwrap();
    let client = HttpFeedClient::new(false, None).unwrap();
    let engine = SearchEngine::new(client, config, NoopReporter);

    let report = engine.run().await.unwrap();

    assert_eq!(names(&report), vec!["match"]);
    let stats = report.outcome.stats;
    assert_eq!(stats.considered, 5);
    assert_eq!(stats.no_appointments, 1);
    assert_eq!(stats.bad_geometry, 1);
    assert_eq!(stats.provider_mismatch, 1);
    assert_eq!(stats.too_far, 1);
}

#[tokio::test]
async fn test_failing_feed_fails_whole_run() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/ok.json");
        then.status(200)
            .json_body(serde_json::json!({"features": [location("a", "cvs", 0.0, 0.0, true)]}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/down.json");
        then.status(503);
    });

    let config = SearchConfig::from_json_str(&format!(
        r#"{{"api_urls": ["{}", "{}"], "search_latitude": 0, "search_longitude": 0,
            "num_nearest_locations_to_log": 5}}"#,
        server.url("/ok.json"),
        server.url("/down.json")
    ))
    .unwrap();
    let client = HttpFeedClient::new(false, None).unwrap();
    let engine = SearchEngine::new(client, config, NoopReporter);

    let err = engine.run().await.unwrap_err();
    assert!(matches!(
        err,
        FinderError::UnexpectedStatusError { status: 503, .. }
    ));
    assert_eq!(err.exit_code(), 2);
}

#[tokio::test]
async fn test_empty_feed_is_empty_result() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/empty.json");
        then.status(200).json_body(serde_json::json!({"features": []}));
    });

    let config = SearchConfig::from_json_str(&format!(
        r#"{{"api_url": "{}", "search_latitude": 0, "search_longitude": 0,
            "num_nearest_locations_to_log": 5}}"#,
        server.url("/empty.json")
    ))
    .unwrap();
    let client = HttpFeedClient::new(false, None).unwrap();
    let engine = SearchEngine::new(client, config, TracingReporter::new());

    let report = engine.run().await.unwrap();
    assert!(report.outcome.nearest.is_empty());
    assert_eq!(report.outcome.stats.considered, 0);
}
