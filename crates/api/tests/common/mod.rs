#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use drawer_core::memory_store::MemoryStore;
use drawer_core::store::DocumentStore;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use drawer_api::config::{CorsOrigins, DatabaseConfig, ServerConfig};
use drawer_api::router::build_app_router;
use drawer_api::state::AppState;

/// Multipart boundary used by [`multipart_file`].
pub const BOUNDARY: &str = "drawer-test-boundary";

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:3000` as CORS origin and the given upload
/// directory.
pub fn test_config(upload_dir: PathBuf, max_upload_bytes: usize) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database: DatabaseConfig {
            url: None,
            name: None,
            max_connections: 1,
        },
        cors_origins: CorsOrigins::List(vec!["http://localhost:3000".parse().unwrap()]),
        request_timeout_secs: 30,
        shutdown_timeout_secs: 1,
        upload_dir,
        max_upload_bytes,
    }
}

/// An application backed by an in-memory store and a temporary upload dir.
///
/// Each call to [`TestApp::router`] builds a fresh router over the same
/// store, mirroring the production middleware stack from `build_app_router`.
pub struct TestApp {
    pub store: Arc<MemoryStore>,
    pub uploads: TempDir,
    pub config: ServerConfig,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_upload_limit(5 * 1024 * 1024)
    }

    pub fn with_upload_limit(max_upload_bytes: usize) -> Self {
        let uploads = tempfile::tempdir().unwrap();
        let config = test_config(uploads.path().to_path_buf(), max_upload_bytes);
        Self {
            store: Arc::new(MemoryStore::new()),
            uploads,
            config,
        }
    }

    pub fn router(&self) -> Router {
        let state = AppState::new(self.store.clone(), &self.config);
        build_app_router(state, &self.config)
    }

    /// True when no drawer card has been persisted.
    pub async fn store_is_empty(&self) -> bool {
        self.store.list_cards(usize::MAX).await.unwrap().is_empty()
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    json_request(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    json_request(app, Method::PUT, uri, body).await
}

async fn json_request(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    send(app, request).await
}

/// POST a multipart body with a single `file` part.
pub async fn post_file(
    app: Router,
    uri: &str,
    filename: &str,
    content_type: &str,
    data: &[u8],
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_file("file", filename, content_type, data)))
        .unwrap();
    send(app, request).await
}

/// Encode one multipart part followed by the closing boundary.
pub fn multipart_file(field: &str, filename: &str, content_type: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
