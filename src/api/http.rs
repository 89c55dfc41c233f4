//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::page::serve_home;
use super::rest::{health::health_check, method_not_allowed, not_found, snapshot};
use super::websocket::{handler, state::AppState};
use crate::error::{FeedError, FeedResult};
use crate::types::Feed;

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Home page, GET only (serve_home turns away HEAD)
        .route("/", get(serve_home).fallback(method_not_allowed))
        // WebSocket push endpoints
        .route(Feed::Traffic.stream_path(), get(handler::traffic_ws))
        .route(Feed::Status.stream_path(), get(handler::status_ws))
        .route(Feed::Situation.stream_path(), get(handler::situation_ws))
        // One-shot snapshots
        .route(Feed::Traffic.snapshot_path(), get(snapshot::get_traffic))
        .route(Feed::Status.snapshot_path(), get(snapshot::get_status))
        .route(Feed::Situation.snapshot_path(), get(snapshot::get_situation))
        .route("/health", get(health_check))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the configured address
pub async fn bind(state: &AppState) -> FeedResult<TcpListener> {
    let addr = state.config.addr;
    TcpListener::bind(addr)
        .await
        .map_err(|source| FeedError::Bind { addr, source })
}

/// Serve on an already bound listener until the process is stopped
pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> FeedResult<()> {
    info!(
        addr = %listener.local_addr()?,
        home = %state.config.home_feed,
        interval_ms = state.config.interval.as_millis() as u64,
        "flight feed listening"
    );
    axum::serve(listener, create_router(state)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use crate::types::{StatusReport, TrafficReport};
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use tower::util::ServiceExt;

    fn app() -> Router {
        let state = Arc::new(AppState::simulated(ServerConfig::default()));
        create_router(state)
    }

    async fn get(uri: &str) -> axum::response::Response {
        app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
        to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec()
    }

    #[tokio::test]
    async fn test_home_page() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::HOST, "receiver.local:8080")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/html; charset=utf-8"
        );

        let body = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(body.contains("ws://receiver.local:8080/traffic"));
    }

    #[tokio::test]
    async fn test_unknown_paths_are_not_found() {
        for uri in ["/index.html", "/foo", "/traffic/extra", "/getstatus"] {
            let response = get(uri).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_non_get_on_root_is_rejected() {
        for method in [
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::HEAD,
            Method::OPTIONS,
        ] {
            let response = app()
                .oneshot(
                    Request::builder()
                        .method(method.clone())
                        .uri("/")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{}", method);
        }
    }

    #[tokio::test]
    async fn test_options_on_unknown_path_is_not_found() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/nope")
                    .header(header::ORIGIN, "http://elsewhere.example")
                    .header("access-control-request-method", "GET")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_bind_reports_address_in_use() {
        let held = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = held.local_addr().unwrap();
        let state = AppState::simulated(ServerConfig::new(addr));

        match bind(&state).await {
            Err(FeedError::Bind { addr: failed, .. }) => assert_eq!(failed, addr),
            other => panic!("expected bind error, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_status_snapshot() {
        let response = get("/getStatus").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");

        let report: StatusReport = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert!(report.gps_connected);
    }

    #[tokio::test]
    async fn test_traffic_snapshot_field_set() {
        let response = get("/getTraffic").await;
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = body_bytes(response).await;
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 13);

        let report: TrafficReport = serde_json::from_value(value).unwrap();
        assert!(report.position_valid);
    }

    #[tokio::test]
    async fn test_situation_snapshot() {
        let response = get("/getSituation").await;
        assert_eq!(response.status(), StatusCode::OK);

        let value: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert!(value.get("Gyro_heading").is_some());
    }

    #[tokio::test]
    async fn test_stream_path_without_upgrade_is_rejected() {
        let response = get("/traffic").await;
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = get("/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let value: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(value["status"], "ok");
        assert_eq!(value["connections"], 0);
    }
}
