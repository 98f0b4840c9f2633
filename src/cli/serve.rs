use crate::config::SiteConfig;
use crate::server::start_server;
use crate::Result;
use colored::Colorize;
use std::path::Path;

/// Run the HTTP service in the foreground
pub async fn run(config_path: Option<&Path>, host: Option<String>, port: Option<u16>) -> Result<()> {
    let mut config = SiteConfig::load(config_path)?;
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    let addr = config.bind_address();
    println!("{}", format!("✓ Serving {} on http://{}", config.site_url, addr).green());
    println!("  llms.txt:      http://{}/llms.txt", addr);
    println!("  packages.json: http://{}/packages.json", addr);
    println!("  Pages:         {}", config.pages_dir.display());

    start_server(config).await
}
