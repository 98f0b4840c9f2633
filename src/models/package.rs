use serde::Serialize;

/// Package registry a catalog entry publishes to
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Ecosystem {
    /// npm (registry.npmjs.org)
    Npm,
    /// Python Package Index (pypi.org)
    Pypi,
}

impl Ecosystem {
    pub fn name(&self) -> &'static str {
        match self {
            Ecosystem::Npm => "npm",
            Ecosystem::Pypi => "pypi",
        }
    }
}

/// Publication status of a catalog entry
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PackageStatus {
    Published,
    ComingSoon,
}

impl PackageStatus {
    pub fn name(&self) -> &'static str {
        match self {
            PackageStatus::Published => "published",
            PackageStatus::ComingSoon => "coming-soon",
        }
    }
}

/// Runtime prerequisites for a package
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Requirements {
    pub runtime: &'static str,

    /// Application that must be running alongside the CLI, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_app: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PackageLinks {
    pub docs: &'static str,
    pub github: &'static str,
    pub registry: &'static str,
}

/// Static metadata for one package in the catalog
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageEntry {
    /// Short identifier (e.g., "electron"), unique across the catalog
    pub key: &'static str,

    /// Published package name
    pub name: &'static str,

    /// Executable installed by the package
    pub binary: &'static str,

    /// Canonical site path, always starting with `/`
    pub route: &'static str,

    pub ecosystem: Ecosystem,

    /// Name the external registry knows the package by
    pub registry_name: &'static str,

    pub install: &'static str,
    pub status: PackageStatus,
    pub description: &'static str,
    pub purpose: &'static str,
    pub requirements: Requirements,
    pub links: PackageLinks,

    /// Comma-separated command families for discovery text
    pub commands: &'static str,

    /// Version served when live resolution fails; `None` for unreleased packages
    pub fallback_version: Option<&'static str>,
}

impl PackageEntry {
    pub fn is_published(&self) -> bool {
        self.status == PackageStatus::Published
    }
}

/// Catalog entry merged with the version resolved for the current request
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedPackageEntry {
    #[serde(flatten)]
    pub entry: &'static PackageEntry,

    pub version: Option<String>,
}

impl ResolvedPackageEntry {
    pub fn new(entry: &'static PackageEntry, version: Option<String>) -> Self {
        Self { entry, version }
    }

    /// Resolved view built from the static fallback, without touching the network
    pub fn from_fallback(entry: &'static PackageEntry) -> Self {
        Self::new(entry, entry.fallback_version.map(str::to_string))
    }
}
