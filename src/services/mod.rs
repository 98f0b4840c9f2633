//! Service layer for harnessgg-site
//!
//! Business logic shared by the HTTP handlers and the CLI commands, so both
//! render the same documents from the same catalog.

pub mod agent_doc_service;
pub mod catalog_service;
pub mod issue_service;
pub mod version_service;

// Re-export commonly used types
pub use agent_doc_service::{
    agent_reference_document, discovery_index, package_document, registry_document,
};
pub use catalog_service::{published_count, resolve_catalog, unresolved_catalog};
pub use issue_service::{FiledIssue, IssueFiler, SubmitError};
pub use version_service::{build_client, VersionResolver};
