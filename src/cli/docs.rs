use crate::catalog::PACKAGE_CATALOG;
use crate::config::SiteConfig;
use crate::server::normalize_path;
use crate::services::{
    discovery_index, package_document, resolve_catalog, unresolved_catalog, VersionResolver,
};
use crate::Result;
use std::path::Path;

/// Print the `llms.txt` discovery index
pub async fn run_llms(config_path: Option<&Path>, offline: bool) -> Result<()> {
    let config = SiteConfig::load(config_path)?;
    let packages = if offline {
        unresolved_catalog()
    } else {
        let resolver = VersionResolver::new(&config.registry)?;
        resolve_catalog(&resolver).await
    };

    println!("{}", discovery_index(&packages, &config.site_url));
    Ok(())
}

/// Print the agent document for a package route (e.g. `/electron` or `electron`)
pub fn run_doc(route: &str, config_path: Option<&Path>) -> Result<()> {
    let config = SiteConfig::load(config_path)?;
    let route = if route.starts_with('/') {
        route.to_string()
    } else {
        format!("/{}", route)
    };

    let Some(doc) = package_document(normalize_path(&route), &config.site_url) else {
        let known: Vec<&str> = PACKAGE_CATALOG.iter().map(|entry| entry.route).collect();
        anyhow::bail!(
            "No agent document for route '{}'. Known routes: {}",
            route,
            known.join(", ")
        );
    };

    println!("{}", doc);
    Ok(())
}
