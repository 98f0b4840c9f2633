//! Static package catalog
//!
//! The catalog is fixed at build time. Entries keep catalog order everywhere they are
//! rendered; nothing here is sorted.
//!
//! ## Tables
//! - [`PACKAGE_CATALOG`] - package metadata joined on `route` (pages) and `key` (APIs)
//! - [`AGENT_REFERENCES`] - per-package agent quick references served at `/<key>.json`
//! - [`ISSUE_REPOSITORIES`] - where `/api/submit` files issues for each key

mod packages;
mod references;

pub use packages::PACKAGE_CATALOG;
pub use references::{AGENT_REFERENCES, ISSUE_REPOSITORIES};

use crate::models::{AgentReference, PackageEntry};

/// Find the catalog entry served at `route`
pub fn find_by_route(route: &str) -> Option<&'static PackageEntry> {
    PACKAGE_CATALOG.iter().find(|entry| entry.route == route)
}

pub fn find_by_key(key: &str) -> Option<&'static PackageEntry> {
    PACKAGE_CATALOG.iter().find(|entry| entry.key == key)
}

pub fn agent_reference(key: &str) -> Option<&'static AgentReference> {
    AGENT_REFERENCES.iter().find(|reference| reference.key == key)
}

/// Keys that have an agent reference, in table order
pub fn agent_reference_keys() -> Vec<&'static str> {
    AGENT_REFERENCES.iter().map(|reference| reference.key).collect()
}

/// Issue tracker repository (`owner/name`) for a catalog key
pub fn issue_repository(key: &str) -> Option<&'static str> {
    ISSUE_REPOSITORIES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, repo)| *repo)
}

pub fn issue_repository_keys() -> Vec<&'static str> {
    ISSUE_REPOSITORIES.iter().map(|(key, _)| *key).collect()
}

pub fn published_count() -> usize {
    PACKAGE_CATALOG.iter().filter(|entry| entry.is_published()).count()
}
