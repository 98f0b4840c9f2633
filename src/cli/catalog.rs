use crate::config::SiteConfig;
use crate::models::{PackageStatus, ResolvedPackageEntry};
use crate::services::{resolve_catalog, unresolved_catalog, VersionResolver};
use crate::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use semver::Version;
use std::path::Path;
use std::time::Duration;

/// Print the package catalog, optionally with live registry versions
pub async fn run(config_path: Option<&Path>, resolve: bool, json: bool) -> Result<()> {
    let packages = if resolve {
        let config = SiteConfig::load(config_path)?;
        let resolver = VersionResolver::new(&config.registry)?;
        resolve_with_spinner(&resolver, !json).await
    } else {
        unresolved_catalog()
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&packages)?);
        return Ok(());
    }

    println!("{}", "📦 Harness.gg packages".cyan().bold());
    println!();
    for pkg in &packages {
        print_entry(pkg, resolve);
    }

    Ok(())
}

async fn resolve_with_spinner(
    resolver: &VersionResolver,
    show_progress: bool,
) -> Vec<ResolvedPackageEntry> {
    let progress = show_progress.then(|| {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            pb.set_style(style.tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "));
        }
        pb.set_message("Resolving versions from npm and PyPI...");
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    });

    let packages = resolve_catalog(resolver).await;

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }
    packages
}

fn print_entry(pkg: &ResolvedPackageEntry, resolved: bool) {
    let entry = pkg.entry;
    let status = match entry.status {
        PackageStatus::Published => entry.status.name().green(),
        PackageStatus::ComingSoon => entry.status.name().yellow(),
    };
    let version = pkg.version.as_deref().unwrap_or("-");

    println!(
        "   • {} {} ({}, {})",
        entry.key.bold(),
        version,
        entry.ecosystem.name(),
        status
    );
    println!("     {}", entry.install.bright_black());

    if resolved {
        if let (Some(live), Some(fallback)) = (pkg.version.as_deref(), entry.fallback_version) {
            if is_newer(live, fallback) {
                println!(
                    "     {}",
                    format!("⚠ fallback {} is behind registry {}", fallback, live).yellow()
                );
            }
        }
    }
}

/// Compare versions using semver, stripping an optional `v` prefix
///
/// Unparseable versions are never considered newer.
pub fn is_newer(candidate: &str, current: &str) -> bool {
    let parse = |v: &str| Version::parse(v.trim_start_matches('v')).ok();
    match (parse(candidate), parse(current)) {
        (Some(candidate), Some(current)) => candidate > current,
        _ => false,
    }
}
