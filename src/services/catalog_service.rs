//! Catalog service - Static catalog merged with live versions

use crate::catalog::PACKAGE_CATALOG;
use crate::models::{PackageEntry, ResolvedPackageEntry};
use crate::services::version_service::VersionResolver;

/// Resolve every catalog entry against its registry
pub async fn resolve_catalog(resolver: &VersionResolver) -> Vec<ResolvedPackageEntry> {
    resolve_entries(PACKAGE_CATALOG, resolver).await
}

/// Catalog with fallback versions only, for offline rendering
pub fn unresolved_catalog() -> Vec<ResolvedPackageEntry> {
    PACKAGE_CATALOG
        .iter()
        .map(ResolvedPackageEntry::from_fallback)
        .collect()
}

/// Resolve `entries` concurrently, one lookup per entry that has a fallback version
///
/// Entries without a fallback are unreleased and get no version and no lookup.
/// Completes once every lookup has settled; output keeps input order.
pub async fn resolve_entries(
    entries: &'static [PackageEntry],
    resolver: &VersionResolver,
) -> Vec<ResolvedPackageEntry> {
    let lookups: Vec<_> = entries
        .iter()
        .map(|entry| {
            entry.fallback_version.map(|fallback| {
                let resolver = resolver.clone();
                tokio::spawn(async move {
                    resolver
                        .resolve(entry.ecosystem, entry.registry_name, fallback)
                        .await
                })
            })
        })
        .collect();

    let mut resolved = Vec::with_capacity(entries.len());
    for (entry, lookup) in entries.iter().zip(lookups) {
        let version = match (lookup, entry.fallback_version) {
            (Some(handle), Some(fallback)) => Some(handle.await.unwrap_or_else(|e| {
                tracing::warn!(package = entry.key, error = %e, "version lookup task failed");
                fallback.to_string()
            })),
            _ => None,
        };
        resolved.push(ResolvedPackageEntry::new(entry, version));
    }

    resolved
}

pub fn published_count(packages: &[ResolvedPackageEntry]) -> usize {
    packages.iter().filter(|pkg| pkg.entry.is_published()).count()
}
