use crate::config::ServerConfig;
use axum::extract::State;
use axum::http::header::{CONTENT_TYPE, RETRY_AFTER};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::Response;

/// Turns every rendered page into a `503 Service Unavailable` with a
/// `Retry-After` hint. Assets keep their status so the page still hydrates.
pub async fn mark_unavailable(State(config): State<ServerConfig>, mut response: Response) -> Response {
    if !config.mark_unavailable
        || response.status().is_server_error()
        || !is_html(response.headers())
    {
        return response;
    }

    *response.status_mut() = StatusCode::SERVICE_UNAVAILABLE;
    response
        .headers_mut()
        .insert(RETRY_AFTER, HeaderValue::from(config.retry_after_secs));
    response
}

fn is_html(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("text/html"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use axum::middleware::map_response_with_state;
    use axum::response::{Html, IntoResponse};
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt;

    fn router(config: ServerConfig) -> Router {
        Router::new()
            .route("/", get(|| async { Html("<h1>We zijn binnenkort weer terug!</h1>") }))
            .route(
                "/pkg/site.wasm",
                get(|| async { ([(CONTENT_TYPE, "application/wasm")], vec![0u8, 97, 115, 109]) }),
            )
            .route(
                "/broken",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, Html("kapot")).into_response() }),
            )
            .layer(map_response_with_state(config, mark_unavailable))
    }

    async fn get_path(config: ServerConfig, path: &str) -> Response {
        router(config)
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_html_is_marked_unavailable() {
        let response = get_path(ServerConfig::default(), "/").await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(response.headers().get(RETRY_AFTER).unwrap(), "3600");
    }

    #[tokio::test]
    async fn test_assets_keep_status() {
        let response = get_path(ServerConfig::default(), "/pkg/site.wasm").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(RETRY_AFTER).is_none());
    }

    #[tokio::test]
    async fn test_server_errors_pass_through() {
        let response = get_path(ServerConfig::default(), "/broken").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_disabled_marking_serves_ok() {
        let config = ServerConfig {
            mark_unavailable: false,
            ..ServerConfig::default()
        };
        let response = get_path(config, "/").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_custom_retry_after() {
        let config = ServerConfig {
            retry_after_secs: 90,
            ..ServerConfig::default()
        };
        let response = get_path(config, "/").await;
        assert_eq!(response.headers().get(RETRY_AFTER).unwrap(), "90");
    }
}
