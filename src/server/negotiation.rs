//! Content negotiation for package pages
//!
//! Requests for a package route get the plain-text agent document instead of the
//! HTML page when the client asks for it. Decision order:
//! 1. `?format=llm` always wins
//! 2. `Accept` mentions text/plain or text/markdown and not text/html
//! 3. `User-Agent` looks like a known AI crawler and `Accept` is `*/*`, empty,
//!    or mentions text/plain or text/markdown
//!
//! Anything else passes through untouched.

use super::http_server::AppState;
use crate::services::package_document;
use axum::{
    extract::{Query, Request, State},
    http::{header, HeaderMap, Uri},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Lowercase fragments of `User-Agent` strings sent by AI agents and crawlers
pub const AGENT_HINTS: &[&str] = &[
    "chatgpt",
    "gptbot",
    "anthropic",
    "claude",
    "perplexity",
    "cohere",
    "openai",
];

const AGENT_DOC_CACHE: &str = "public, max-age=300";
const AGENT_DOC_VARY: &str = "Accept, User-Agent";

/// Strip trailing slashes; an empty result is the root
pub fn normalize_path(path: &str) -> &str {
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

/// Whether the request should get the agent document
///
/// `accept` and `user_agent` are raw header values (case-insensitive).
pub fn wants_agent_document(format: Option<&str>, accept: &str, user_agent: &str) -> bool {
    if format.is_some_and(|f| f.eq_ignore_ascii_case("llm")) {
        return true;
    }

    let accept = accept.to_ascii_lowercase();
    let accepts_text = accept.contains("text/plain") || accept.contains("text/markdown");
    if accepts_text && !accept.contains("text/html") {
        return true;
    }

    let user_agent = user_agent.to_ascii_lowercase();
    let likely_agent = AGENT_HINTS.iter().any(|hint| user_agent.contains(hint));
    let accept_is_wildcard = accept.is_empty() || accept.trim() == "*/*";
    likely_agent && (accept_is_wildcard || accepts_text)
}

fn header_str<'a>(headers: &'a HeaderMap, name: header::HeaderName) -> &'a str {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

/// First `format` query value; later repeats are ignored
fn format_param(uri: &Uri) -> Option<String> {
    let Query(params) = Query::<Vec<(String, String)>>::try_from_uri(uri).ok()?;
    params
        .into_iter()
        .find(|(key, _)| key == "format")
        .map(|(_, value)| value)
}

/// Middleware serving agent documents for package routes
pub async fn negotiate_agent_document(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let path = normalize_path(request.uri().path()).to_string();
    let Some(doc) = package_document(&path, &state.config.site_url) else {
        return next.run(request).await;
    };

    let serve = {
        let headers = request.headers();
        wants_agent_document(
            format_param(request.uri()).as_deref(),
            header_str(headers, header::ACCEPT),
            header_str(headers, header::USER_AGENT),
        )
    };
    if !serve {
        return next.run(request).await;
    }

    tracing::debug!(path = %path, "serving agent document");
    (
        [
            (header::CONTENT_TYPE, super::TEXT_PLAIN),
            (header::CACHE_CONTROL, AGENT_DOC_CACHE),
            (header::VARY, AGENT_DOC_VARY),
        ],
        doc,
    )
        .into_response()
}
