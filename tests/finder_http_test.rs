use anyhow::Result;
use color_finder::config::SourceConfig;
use color_finder::{ColorFinder, Criteria, FinderConfig, FinderError, HttpFetcher, JsonFetcher};
use httpmock::prelude::*;
use std::collections::HashMap;

fn colors_json() -> serde_json::Value {
    serde_json::json!([
        {"name": "Red", "hex": "#FF0000", "comp": [{"name": "Cyan", "hex": "#00FFFF"}]},
        {"name": "Blue", "hex": "#0000FF", "comp": [
            {"name": "Yellow", "hex": "#FFFF00"},
            {"name": "Light Cyan", "hex": "#E0FFFF"}
        ]},
        {"name": "Dark Red", "hex": "#8B0000", "comp": []}
    ])
}

fn finder_for(server: &MockServer) -> ColorFinder<HttpFetcher> {
    ColorFinder::new(HttpFetcher::new(), server.url("/colors.json"))
}

#[tokio::test]
async fn test_search_by_name_over_http() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/colors.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(colors_json());
    });

    let found = finder_for(&server)
        .search(&Criteria::new().name("red"))
        .await?;

    api_mock.assert();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Red");
    assert_eq!(found[0].comp[0].name, "Cyan");
    Ok(())
}

#[tokio::test]
async fn test_comp_name_partial_match_over_http() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/colors.json");
        then.status(200).json_body(colors_json());
    });

    let found = finder_for(&server)
        .fetch_colors(&Criteria::new().comp_name("cy"))
        .await
        .expect("fetch should succeed");

    let names: Vec<&str> = found.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Red", "Blue"]);
    Ok(())
}

#[tokio::test]
async fn test_no_match_is_empty_not_absent() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/colors.json");
        then.status(200).json_body(colors_json());
    });

    let found = finder_for(&server)
        .fetch_colors(&Criteria::new().hex("#00FF00"))
        .await;

    assert_eq!(found, Some(vec![]));
}

#[tokio::test]
async fn test_comp_hex_ignores_case_over_http() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/colors.json");
        then.status(200).json_body(colors_json());
    });

    let found = finder_for(&server)
        .search(&Criteria::new().comp_hex("#00ffff"))
        .await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].hex, "#FF0000");
    Ok(())
}

#[tokio::test]
async fn test_server_error_yields_absent_result() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/colors.json");
        then.status(500);
    });

    let finder = finder_for(&server);
    assert!(finder.fetch_colors(&Criteria::new()).await.is_none());

    let err = finder.search(&Criteria::new()).await.unwrap_err();
    assert!(matches!(err, FinderError::FetchError { status: 500, .. }));
    assert!(err.is_fetch_failure());
    api_mock.assert_hits(2);
}

#[tokio::test]
async fn test_invalid_json_is_parse_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/colors.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .body("[{\"name\": \"Red\",");
    });

    let err = HttpFetcher::new()
        .fetch_json(&server.url("/colors.json"))
        .await
        .unwrap_err();
    assert!(matches!(err, FinderError::ParseError(_)));

    assert!(finder_for(&server)
        .fetch_colors(&Criteria::new())
        .await
        .is_none());
}

#[tokio::test]
async fn test_unreachable_endpoint_is_http_error() {
    // 沒有服務監聽的埠
    let finder = ColorFinder::new(HttpFetcher::new(), "http://127.0.0.1:9/colors.json");
    let err = finder.search(&Criteria::new()).await.unwrap_err();
    assert!(matches!(err, FinderError::HttpError(_)));
    assert!(err.is_fetch_failure());
}

#[tokio::test]
async fn test_configured_headers_and_user_agent_are_sent() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/colors.json")
            .header("X-Api-Key", "secret")
            .header("user-agent", "color-finder-test");
        then.status(200).json_body(colors_json());
    });

    let mut headers = HashMap::new();
    headers.insert("X-Api-Key".to_string(), "secret".to_string());
    let config = FinderConfig {
        source: SourceConfig {
            endpoint: server.url("/colors.json"),
            timeout_seconds: Some(5),
            user_agent: Some("color-finder-test".to_string()),
            headers: Some(headers),
        },
        criteria: Criteria::default(),
    };

    let found = ColorFinder::from_config(&config)?
        .search(&Criteria::new())
        .await?;

    api_mock.assert();
    assert_eq!(found.len(), 3);
    Ok(())
}

#[tokio::test]
async fn test_every_call_fetches_fresh_data() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/colors.json");
        then.status(200).json_body(colors_json());
    });

    let finder = finder_for(&server);
    let first = finder.search(&Criteria::new().name("blue")).await?;
    let second = finder.search(&Criteria::new().name("blue")).await?;

    assert_eq!(first, second);
    api_mock.assert_hits(2);
    Ok(())
}
