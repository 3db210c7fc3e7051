// Router-level integration tests for the portfolio server.
//
// Run with: cargo test --test server_integration_tests
// The static-file tests serve the crate's own static/ directory.

use std::path::Path;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use chrono::{NaiveDateTime, Utc};
use portfolio_rust::{create_router, AppState, RenderMode};
use tower::ServiceExt; // for oneshot

const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

fn production_app() -> axum::Router {
    create_router(AppState::new(RenderMode::Production), Path::new("static"))
}

fn debug_app() -> axum::Router {
    create_router(AppState::new(RenderMode::Debug), Path::new("static"))
}

async fn get(app: axum::Router, uri: &str) -> axum::response::Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("response body was not utf-8")
}

/// Seconds until the response's Expires header, measured from now.
fn seconds_until_expiry(response: &axum::response::Response) -> i64 {
    let raw = response
        .headers()
        .get(header::EXPIRES)
        .expect("missing Expires header")
        .to_str()
        .unwrap();
    let expires = NaiveDateTime::parse_from_str(raw, HTTP_DATE_FORMAT)
        .expect("unparseable Expires header")
        .and_utc();
    (expires - Utc::now()).num_seconds()
}

// =========================================================================
// Section 1: Page Caching
// =========================================================================

#[tokio::test]
async fn page_has_cache_headers_in_production() {
    let response = get(production_app(), "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "public, max-age=3600"
    );

    let remaining = seconds_until_expiry(&response);
    assert!(
        (3595..=3605).contains(&remaining),
        "Expires should be ~1h ahead, was {}s",
        remaining
    );
}

#[tokio::test]
async fn page_has_no_cache_headers_in_debug() {
    let response = get(debug_app(), "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    assert!(response.headers().get(header::CACHE_CONTROL).is_none());
    assert!(response.headers().get(header::EXPIRES).is_none());
}

// =========================================================================
// Section 2: Static Asset Caching
// =========================================================================

#[tokio::test]
async fn static_asset_has_long_lived_cache_headers_in_production() {
    let response = get(production_app(), "/static/css/style.css").await;
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "public, max-age=31536000, immutable"
    );

    let remaining = seconds_until_expiry(&response);
    let year = 365 * 24 * 3600;
    assert!(
        (year - 5..=year + 5).contains(&remaining),
        "Expires should be ~1y ahead, was {}s",
        remaining
    );
}

#[tokio::test]
async fn static_asset_has_no_cache_headers_in_debug() {
    let response = get(debug_app(), "/static/js/scroll.js").await;
    assert_eq!(response.status(), StatusCode::OK);

    assert!(response.headers().get(header::CACHE_CONTROL).is_none());
    assert!(response.headers().get(header::EXPIRES).is_none());
}

#[tokio::test]
async fn static_miss_is_plain_not_found() {
    let response = get(production_app(), "/static/js/missing.js").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Misses are not cacheable
    assert!(response.headers().get(header::CACHE_CONTROL).is_none());
}

// =========================================================================
// Section 3: Security Headers
// =========================================================================

#[tokio::test]
async fn security_headers_on_page_static_and_miss() {
    for uri in ["/", "/static/css/style.css", "/static/nope.txt"] {
        let response = get(production_app(), uri).await;
        let headers = response.headers();

        assert_eq!(headers.get("X-Content-Type-Options").unwrap(), "nosniff");
        assert_eq!(headers.get("X-Frame-Options").unwrap(), "DENY");
        assert_eq!(headers.get("X-XSS-Protection").unwrap(), "1; mode=block");
        assert_eq!(headers.get("X-DNS-Prefetch-Control").unwrap(), "on");
    }
}

// =========================================================================
// Section 4: Rendered Page
// =========================================================================

#[tokio::test]
async fn page_renders_looped_sections() {
    let response = get(debug_app(), "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/html"));

    let body = body_string(response).await;

    // 5 originals + 2 edge clones
    assert_eq!(body.matches("class=\"content-section").count(), 7);

    // Only original sections carry DOM ids; the clones of `github` and
    // `terminal` at the edges must not duplicate them
    for id in [
        "terminal",
        "resume",
        "custom-vibez",
        "devops-career-handbook",
        "github",
    ] {
        let needle = format!("id=\"{}\"", id);
        assert_eq!(body.matches(&needle).count(), 1, "duplicate DOM id {}", id);
    }

    // Client configuration is injected as JSON
    assert!(body.contains("const SECTION_COUNT = 5;"));
    assert!(body.contains("\"THRESHOLD\":50"));
    assert!(body.contains("\"SCALE_MIN\":0.6"));
}

#[tokio::test]
async fn page_renders_one_dot_per_original_section() {
    let body = body_string(get(debug_app(), "/").await).await;
    assert_eq!(body.matches("class=\"progress-dot\"").count(), 5);
}

// =========================================================================
// Section 5: Compression
// =========================================================================

#[tokio::test]
async fn page_is_gzip_compressed_when_accepted() {
    let app = production_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::ACCEPT_ENCODING, "gzip")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_ENCODING).unwrap(),
        "gzip"
    );
}

#[tokio::test]
async fn page_is_uncompressed_without_accept_encoding() {
    let response = get(production_app(), "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::CONTENT_ENCODING).is_none());
}
