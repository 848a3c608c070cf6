//! HTTP routes for the static host.

use std::path::Path;

use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

/// Create the router serving `site_root`.
pub fn create_router(site_root: &Path) -> Router {
    let index = site_root.join("index.html");

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(ServeDir::new(site_root).fallback(ServeFile::new(index)))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}

async fn healthz() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;

    const INDEX: &str = "<!DOCTYPE html><html><body></body></html>";

    fn site() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("create temp dir");
        std::fs::write(dir.path().join("index.html"), INDEX).expect("write index");
        std::fs::create_dir(dir.path().join("pkg")).expect("create pkg");
        std::fs::write(dir.path().join("pkg/anecdotes.js"), "export default 1;").expect("write js");
        dir
    }

    async fn get_body(router: Router, uri: &str) -> (StatusCode, String) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_root_serves_index() {
        let dir = site();
        let (status, body) = get_body(create_router(dir.path()), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INDEX);
    }

    #[tokio::test]
    async fn test_client_routes_fall_back_to_index() {
        let dir = site();
        for uri in ["/anecdotes/2", "/create", "/about", "/create%20new"] {
            let (status, body) = get_body(create_router(dir.path()), uri).await;
            assert_eq!(status, StatusCode::OK, "status for {uri}");
            assert_eq!(body, INDEX, "body for {uri}");
        }
    }

    #[tokio::test]
    async fn test_assets_are_served() {
        let dir = site();
        let (status, body) = get_body(create_router(dir.path()), "/pkg/anecdotes.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "export default 1;");
    }

    #[tokio::test]
    async fn test_healthz() {
        let dir = site();
        let (status, body) = get_body(create_router(dir.path()), "/healthz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }
}
