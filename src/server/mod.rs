//! HTTP server for harness.gg
//!
//! Serves the machine-readable discovery endpoints, negotiates agent documents
//! for package pages, forwards issue reports, and falls back to the prebuilt
//! static pages for everything else.

pub mod http_server;
pub mod negotiation;

pub use http_server::{router, start_server, AppState};
pub use negotiation::{normalize_path, wants_agent_document, AGENT_HINTS};

pub(crate) const TEXT_PLAIN: &str = "text/plain; charset=utf-8";
pub(crate) const APPLICATION_JSON: &str = "application/json; charset=utf-8";
