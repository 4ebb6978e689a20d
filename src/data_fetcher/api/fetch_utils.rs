//! Feed document fetching with cache bypass and typed error mapping

use reqwest::Client;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// Fetches and decodes a JSON document.
///
/// This function:
/// - Always goes to the network (`Cache-Control: no-cache`, `Pragma: no-cache`)
/// - Makes a single attempt; the caller keeps its previous state on failure
/// - Maps HTTP status codes and decode failures onto specific `AppError` variants
///
/// # Arguments
/// * `client` - HTTP client for making requests
/// * `url` - URL to fetch data from
#[instrument(skip(client))]
pub(super) async fn fetch<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    info!("Fetching feed from URL: {url}");

    let response = client
        .get(url)
        .header(CACHE_CONTROL, "no-cache")
        .header(PRAGMA, "no-cache")
        .send()
        .await
        .map_err(|e| {
            error!("Request failed for URL {}: {}", url, e);
            if e.is_timeout() {
                AppError::network_timeout(url)
            } else if e.is_connect() {
                AppError::network_connection(url, e.to_string())
            } else {
                AppError::ApiFetch(e)
            }
        })?;

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(match status_code {
            404 => AppError::api_not_found(url),
            400..=499 => AppError::api_client_error(status_code, reason, url),
            _ => AppError::api_server_error(status_code, reason, url),
        });
    }

    let response_text = response.text().await.map_err(|e| {
        error!("Failed to read response text from URL {}: {}", url, e);
        if e.is_timeout() {
            AppError::network_timeout(url)
        } else {
            AppError::ApiFetch(e)
        }
    })?;

    debug!("Response length: {} bytes", response_text.len());

    decode_document(&response_text, url)
}

/// Decodes a feed body, telling empty, non-JSON and wrongly shaped bodies apart.
pub(crate) fn decode_document<T: DeserializeOwned>(text: &str, origin: &str) -> Result<T, AppError> {
    serde_json::from_str::<T>(text).map_err(|e| {
        error!("Failed to parse feed: {} (origin: {})", e, origin);
        error!(
            "Feed text (first 200 chars): {}",
            text.chars().take(200).collect::<String>()
        );

        let trimmed = text.trim_start();
        if trimmed.is_empty() {
            AppError::api_no_data("Response body is empty", origin)
        } else if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
            AppError::api_malformed_json("Response is not valid JSON", origin)
        } else if e.is_syntax() || e.is_eof() {
            AppError::api_malformed_json(e.to_string(), origin)
        } else {
            AppError::api_unexpected_structure(e.to_string(), origin)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use crate::data_fetcher::models::Fixture;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{header, method, path},
    };

    const ONE_FIXTURE: &str = r#"[{"date": "2025-08-17", "time": "16:30",
        "opponent": "Manchester United", "status": "C", "score": "0-1", "is_home": false}]"#;

    #[tokio::test]
    async fn test_fetch_sends_cache_bypass_headers() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/matches.json"))
            .and(header("cache-control", "no-cache"))
            .and(header("pragma", "no-cache"))
            .respond_with(ResponseTemplate::new(200).set_body_string(ONE_FIXTURE))
            .expect(1)
            .mount(&mock_server)
            .await;

        let url = format!("{}/matches.json", mock_server.uri());
        let fixtures: Vec<Fixture> = fetch(&create_test_http_client(), &url).await.unwrap();
        assert_eq!(fixtures.len(), 1);
        assert_eq!(fixtures[0].opponent, "Manchester United");
    }

    #[tokio::test]
    async fn test_fetch_maps_status_codes() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing.json"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/forbidden.json"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/broken.json"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let base = mock_server.uri();

        let err = fetch::<Vec<Fixture>>(&client, &format!("{base}/missing.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ApiNotFound { .. }));

        let err = fetch::<Vec<Fixture>>(&client, &format!("{base}/forbidden.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ApiClientError { status: 403, .. }));

        let err = fetch::<Vec<Fixture>>(&client, &format!("{base}/broken.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ApiServerError { status: 503, .. }));
    }

    #[test]
    fn test_decode_document_classification() {
        let err = decode_document::<Vec<Fixture>>("   ", "test").unwrap_err();
        assert!(matches!(err, AppError::ApiNoData { .. }));

        let err = decode_document::<Vec<Fixture>>("<html>404</html>", "test").unwrap_err();
        assert!(matches!(err, AppError::ApiMalformedJson { .. }));

        let err = decode_document::<Vec<Fixture>>("[{\"date\": ", "test").unwrap_err();
        assert!(matches!(err, AppError::ApiMalformedJson { .. }));

        let err = decode_document::<Vec<Fixture>>("[{\"date\": \"2025-08-17\"}]", "test")
            .unwrap_err();
        assert!(matches!(err, AppError::ApiUnexpectedStructure { .. }));
    }
}
