//! Discovery HTTP server
//!
//! Routes:
//! - `/llms.txt` - discovery index (plain text, live versions)
//! - `/packages.json` - package registry (JSON, live versions, CORS open)
//! - `/<key>.json` - per-package agent quick reference
//! - `/health`, `/status/packages` - liveness and catalog status
//! - `/api/submit` - agent issue filing
//! - everything else - static pages, with agent documents negotiated for package routes

use super::negotiation::negotiate_agent_document;
use super::{APPLICATION_JSON, TEXT_PLAIN};
use crate::catalog::{self, PACKAGE_CATALOG};
use crate::config::SiteConfig;
use crate::models::SubmitResponse;
use crate::services::{
    agent_reference_document, build_client, discovery_index, published_count, registry_document,
    resolve_catalog, IssueFiler, VersionResolver,
};
use crate::Result;
use axum::{
    body::Bytes,
    extract::{Path, Request, State},
    http::{header, HeaderName, HeaderValue, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub const SERVICE_NAME: &str = "harnessgg-site";

const DISCOVERY_CACHE: &str = "public, max-age=3600";
const STATUS_CACHE: &str = "public, max-age=300";
const REFERENCE_CACHE: &str = "public, max-age=900";

// =============================================================================
// Application State
// =============================================================================

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
    pub resolver: VersionResolver,
    pub issues: IssueFiler,

    /// Prebuilt pages for requests that are not agent documents
    pages: ServeDir,
}

impl AppState {
    pub fn new(config: SiteConfig) -> Result<Self> {
        let client = build_client(config.registry.timeout())?;
        Ok(Self::with_client(config, client))
    }

    /// State backed by an existing HTTP client (registries and issue tracker share it)
    pub fn with_client(config: SiteConfig, client: reqwest::Client) -> Self {
        let resolver = VersionResolver::with_client(client.clone(), &config.registry);
        let issues = IssueFiler::new(client, &config.issues);
        let pages = ServeDir::new(&config.pages_dir).append_index_html_on_directories(true);

        Self {
            config: Arc::new(config),
            resolver,
            issues,
            pages,
        }
    }
}

// =============================================================================
// Server Startup
// =============================================================================

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/llms.txt", get(llms_txt))
        .route("/packages.json", get(packages_json))
        .route("/health", get(health_check))
        .route("/status/packages", get(package_status))
        .route("/api/submit", post(submit_issue))
        .route("/:file", get(agent_reference_or_page))
        .fallback(serve_page)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            negotiate_agent_document,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until the process is stopped
pub async fn start_server(config: SiteConfig) -> Result<()> {
    let addr = config.bind_address();
    if config.issues.github_token.is_none() {
        tracing::warn!("GITHUB_TOKEN not set; /api/submit will reject every report");
    }

    let app = router(AppState::new(config)?);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %listener.local_addr()?, "harnessgg-site listening");

    axum::serve(listener, app).await?;
    Ok(())
}

// =============================================================================
// Discovery Handlers
// =============================================================================

async fn llms_txt(State(state): State<AppState>) -> Response {
    let packages = resolve_catalog(&state.resolver).await;
    let body = discovery_index(&packages, &state.config.site_url);

    (
        [
            (header::CONTENT_TYPE, TEXT_PLAIN),
            (header::CACHE_CONTROL, DISCOVERY_CACHE),
        ],
        body,
    )
        .into_response()
}

async fn packages_json(State(state): State<AppState>) -> Response {
    let packages = resolve_catalog(&state.resolver).await;
    let updated = Utc::now().format("%Y-%m-%d").to_string();
    let document = registry_document(&packages, &state.config.site_url, &updated);

    json_response(
        StatusCode::OK,
        &document,
        &[
            (header::CACHE_CONTROL, DISCOVERY_CACHE),
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
        ],
    )
}

/// `/<key>.json` serves an agent reference; any other single-segment path is a page
async fn agent_reference_or_page(
    State(state): State<AppState>,
    Path(file): Path<String>,
    request: Request,
) -> Response {
    match file.strip_suffix(".json") {
        Some(key) => agent_reference(&state, key),
        None => serve_page(State(state), request).await,
    }
}

fn agent_reference(state: &AppState, key: &str) -> Response {
    match agent_reference_document(key, &state.config.site_url) {
        Some(document) => json_response(
            StatusCode::OK,
            &document,
            &[(header::CACHE_CONTROL, REFERENCE_CACHE)],
        ),
        None => json_response(
            StatusCode::NOT_FOUND,
            &json!({
                "error": "agent doc not found",
                "available": catalog::agent_reference_keys(),
            }),
            &[],
        ),
    }
}

async fn serve_page(State(state): State<AppState>, request: Request) -> Response {
    match state.pages.clone().oneshot(request).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}

// =============================================================================
// Status Handlers
// =============================================================================

async fn health_check() -> Response {
    json_response(
        StatusCode::OK,
        &json!({
            "ok": true,
            "service": SERVICE_NAME,
            "version": env!("CARGO_PKG_VERSION"),
            "date": Utc::now().to_rfc3339(),
            "packageCount": PACKAGE_CATALOG.len(),
            "publishedCount": catalog::published_count(),
        }),
        &[(header::CACHE_CONTROL, "no-store")],
    )
}

#[derive(Serialize)]
struct PackageSummary<'a> {
    key: &'a str,
    name: &'a str,
    status: &'a str,
    version: Option<&'a str>,
    install: &'a str,
    route: &'a str,
}

async fn package_status(State(state): State<AppState>) -> Response {
    let packages = resolve_catalog(&state.resolver).await;
    let summaries: Vec<PackageSummary> = packages
        .iter()
        .map(|pkg| PackageSummary {
            key: pkg.entry.key,
            name: pkg.entry.name,
            status: pkg.entry.status.name(),
            version: pkg.version.as_deref(),
            install: pkg.entry.install,
            route: pkg.entry.route,
        })
        .collect();

    json_response(
        StatusCode::OK,
        &json!({
            "ok": true,
            "date": Utc::now().to_rfc3339(),
            "packageCount": packages.len(),
            "publishedCount": published_count(&packages),
            "packages": summaries,
        }),
        &[(header::CACHE_CONTROL, STATUS_CACHE)],
    )
}

// =============================================================================
// Issue Filing
// =============================================================================

async fn submit_issue(State(state): State<AppState>, body: Bytes) -> Response {
    match state.issues.submit(&body).await {
        Ok(issue) => (
            StatusCode::CREATED,
            Json(SubmitResponse::created(issue.html_url, issue.number)),
        )
            .into_response(),
        Err(e) => {
            let status = e.status();
            if status.is_server_error() {
                tracing::warn!(status = status.as_u16(), error = %e, "issue submission failed");
            }
            (status, Json(SubmitResponse::failed(e.to_string()))).into_response()
        }
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Pretty-printed JSON body with extra static headers
fn json_response<T: Serialize>(
    status: StatusCode,
    value: &T,
    headers: &[(HeaderName, &'static str)],
) -> Response {
    let body = match serde_json::to_string_pretty(value) {
        Ok(body) => body,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to serialize response: {}", e),
            )
                .into_response();
        }
    };

    let mut response = (status, [(header::CONTENT_TYPE, APPLICATION_JSON)], body).into_response();
    for (name, value) in headers {
        response
            .headers_mut()
            .insert(name.clone(), HeaderValue::from_static(*value));
    }
    response
}
