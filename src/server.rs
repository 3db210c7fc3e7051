//! Axum application: state, router, handlers, and response policy.
//!
//! Two routes only: `/` renders the enriched section list through the page
//! template, `/static/*` serves assets from disk. A post-processing
//! middleware stamps the fixed security headers on every response, cache
//! headers follow the render mode, and bodies of whitelisted text types
//! above a minimum size are compressed by tower-http.

use std::path::Path;
use std::sync::Arc;

use askama::Template;
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use chrono::{DateTime, Duration, Utc};
use tower_http::{
    compression::{
        predicate::{Predicate, SizeAbove},
        CompressionLayer,
    },
    services::ServeDir,
    trace::TraceLayer,
};

use crate::config::RenderMode;
use crate::enrich::{enrich_sections, EnrichedSection};
use crate::sections::{AnimationConfig, ScrollConfig, Section, SectionRepository};

// ============================================================================
// Response Policy Constants
// ============================================================================

/// Page responses are cacheable for an hour in production.
const PAGE_CACHE_CONTROL: &str = "public, max-age=3600";
const PAGE_CACHE_SECS: i64 = 3600;

/// Static assets are cached for a year and marked immutable.
const STATIC_CACHE_CONTROL: &str = "public, max-age=31536000, immutable";
const STATIC_CACHE_DAYS: i64 = 365;

/// Bodies below this size are not worth compressing.
const COMPRESS_MIN_SIZE: u16 = 500;

/// Content types the compression layer may touch.
const COMPRESS_MIME_TYPES: [&str; 5] = [
    "text/html",
    "text/css",
    "text/javascript",
    "application/javascript",
    "application/json",
];

/// `Expires` header format (RFC 1123, always GMT).
const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub sections: Arc<SectionRepository>,
    pub scroll: ScrollConfig,
    pub animation: AnimationConfig,
    pub mode: RenderMode,
}

impl AppState {
    /// State over the built-in catalog.
    pub fn new(mode: RenderMode) -> Self {
        Self::with_repository(mode, SectionRepository::builtin())
    }

    pub fn with_repository(mode: RenderMode, repository: SectionRepository) -> Self {
        Self {
            sections: Arc::new(repository),
            scroll: ScrollConfig::default(),
            animation: AnimationConfig::default(),
            mode,
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState, static_dir: &Path) -> Router {
    let static_routes = Router::new()
        .fallback_service(ServeDir::new(static_dir))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            static_cache_headers,
        ));

    Router::new()
        .route("/", get(index))
        .nest("/static", static_routes)
        // Middleware (applied in reverse order)
        .layer(middleware::from_fn(security_headers))
        .layer(
            CompressionLayer::new()
                .compress_when(SizeAbove::new(COMPRESS_MIN_SIZE).and(CompressibleType)),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Page Handler
// ============================================================================

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    sections: Vec<EnrichedSection>,
    original_sections: Vec<Section>,
    section_count: usize,
    sections_json: String,
    scroll_config: String,
    animation_config: String,
}

async fn index(State(state): State<AppState>) -> Result<Response, AppError> {
    let enriched = enrich_sections(&state.sections);
    tracing::debug!("enriched {} looped sections", enriched.len());

    let template = IndexTemplate {
        original_sections: state.sections.all().to_vec(),
        section_count: state.sections.len(),
        sections_json: serde_json::to_string(state.sections.all())?,
        scroll_config: serde_json::to_string(&state.scroll)?,
        animation_config: serde_json::to_string(&state.animation)?,
        sections: enriched,
    };
    let html = template.render().map_err(AppError::Template)?;

    let mut response = Html(html).into_response();
    if state.mode.is_production() {
        apply_page_cache_headers(response.headers_mut(), Utc::now());
    }
    Ok(response)
}

// ============================================================================
// Header Policy
// ============================================================================

/// Fixed security headers, appended to every response.
async fn security_headers(req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();
    headers.insert("X-Content-Type-Options", HeaderValue::from_static("nosniff"));
    headers.insert("X-Frame-Options", HeaderValue::from_static("DENY"));
    headers.insert(
        "X-XSS-Protection",
        HeaderValue::from_static("1; mode=block"),
    );
    headers.insert("X-DNS-Prefetch-Control", HeaderValue::from_static("on"));
    response
}

/// Long-lived cache policy for `/static` responses in production. Misses
/// keep the framework's plain 404.
async fn static_cache_headers(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let mut response = next.run(req).await;
    if state.mode.is_production() && response.status().is_success() {
        apply_static_cache_headers(response.headers_mut(), Utc::now());
    }
    response
}

fn apply_page_cache_headers(headers: &mut HeaderMap, now: DateTime<Utc>) {
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(PAGE_CACHE_CONTROL),
    );
    insert_expires(headers, now + Duration::seconds(PAGE_CACHE_SECS));
}

fn apply_static_cache_headers(headers: &mut HeaderMap, now: DateTime<Utc>) {
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(STATIC_CACHE_CONTROL),
    );
    insert_expires(headers, now + Duration::days(STATIC_CACHE_DAYS));
}

fn insert_expires(headers: &mut HeaderMap, expires: DateTime<Utc>) {
    // RFC 1123 dates are plain ASCII
    if let Ok(value) = HeaderValue::from_str(&expires.format(HTTP_DATE_FORMAT).to_string()) {
        headers.insert(header::EXPIRES, value);
    }
}

// ============================================================================
// Compression Predicate
// ============================================================================

/// Restricts compression to the whitelisted text-like content types.
/// Combined with [`SizeAbove`] in the router.
#[derive(Clone, Copy, Debug, Default)]
struct CompressibleType;

impl Predicate for CompressibleType {
    fn should_compress<B>(&self, response: &axum::http::Response<B>) -> bool
    where
        B: http_body::Body,
    {
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|content_type| {
                COMPRESS_MIME_TYPES
                    .iter()
                    .any(|mime| content_type.starts_with(mime))
            })
            .unwrap_or(false)
    }
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    Template(askama::Error),
    Serialize(serde_json::Error),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialize(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match self {
            AppError::Template(err) => format!("template error: {err}"),
            AppError::Serialize(err) => format!("serialization error: {err}"),
        };
        tracing::error!("{message}");
        (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
    }
}
