// harnessgg-site - Discovery service for the Harness.gg CLI package catalog
// Serves llms.txt, packages.json, and per-package agent documents to AI agents

pub mod catalog;
pub mod cli;
pub mod config;
pub mod models;
pub mod server;
pub mod services;

#[cfg(test)]
pub(crate) mod test_support;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use config::SiteConfig;
pub use models::{Ecosystem, PackageEntry, PackageStatus, ResolvedPackageEntry};
pub use services::VersionResolver;
