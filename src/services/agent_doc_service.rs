//! Agent document service - Machine-oriented renderings of the catalog
//!
//! - Per-package plain-text document (served in place of a package page)
//! - `llms.txt` discovery index
//! - `packages.json` registry
//! - `/<key>.json` agent quick references

use crate::catalog;
use crate::models::{
    AgentReferenceDocument, IssueKind, PackageEntry, ResolvedPackageEntry, SubmitHint,
};
use crate::services::catalog_service::published_count;
use serde_json::{json, Value};

pub const SUBMIT_PATH: &str = "/api/submit";

/// Plain-text document for the package served at `route`
///
/// Returns `None` when no catalog entry owns the route.
pub fn package_document(route: &str, site_url: &str) -> Option<String> {
    let pkg = catalog::find_by_route(route)?;

    let mut lines = vec![
        format!("# {}", pkg.name),
        String::new(),
        format!("Route: {}{}", site_url, pkg.route),
        format!("Status: {}", pkg.status.name()),
        String::new(),
        "Issue filing".to_string(),
        submit_instruction(pkg, site_url),
        String::new(),
        format!("Install: {}", pkg.install),
        format!("Binary: {}", pkg.binary),
        format!("Purpose: {}", pkg.purpose),
        format!("Requirements: {}", pkg.requirements.runtime),
    ];
    if let Some(target_app) = pkg.requirements.target_app {
        lines.push(format!("Target app: {}", target_app));
    }
    lines.extend([
        String::new(),
        "Links".to_string(),
        format!("- Docs: {}", pkg.links.docs),
        format!("- GitHub: {}", pkg.links.github),
        format!("- Registry: {}", pkg.links.registry),
        String::new(),
        "Command families".to_string(),
        format!("- {}", pkg.commands),
        String::new(),
    ]);
    lines.extend(discovery_footer(site_url));

    Some(lines.join("\n"))
}

fn submit_instruction(pkg: &PackageEntry, site_url: &str) -> String {
    format!(
        "curl -X POST {}{} (use JSON with \"package\":\"{}\" and \"type\":{})",
        site_url,
        SUBMIT_PATH,
        pkg.key,
        issue_kinds_hint()
    )
}

fn issue_kinds_hint() -> String {
    IssueKind::ALL
        .iter()
        .map(|kind| format!("\"{}\"", kind.label()))
        .collect::<Vec<_>>()
        .join("|")
}

fn discovery_footer(site_url: &str) -> [String; 3] {
    [
        "Discovery".to_string(),
        format!("- {}/llms.txt", site_url),
        format!("- {}/packages.json", site_url),
    ]
}

/// `llms.txt` discovery index, built from a resolved catalog
pub fn discovery_index(packages: &[ResolvedPackageEntry], site_url: &str) -> String {
    let mut out = String::new();
    out.push_str("# Harness.gg\n\n");
    out.push_str("> CLI tools that give AI agents the ability to interact with real apps.\n");
    out.push_str("> Install a package, run the binary, parse the structured JSON it prints.\n\n");
    out.push_str("## How agents should use this\n\n");
    out.push_str(&format!(
        "1. Read this file or {}/packages.json to discover available packages\n",
        site_url
    ));
    out.push_str("2. Pick the package for the app you need to drive\n");
    out.push_str("3. Install it with the listed command\n");
    out.push_str("4. Run the binary with --help to see available commands\n");
    out.push_str("5. Run commands and parse the JSON output (check `ok` first)\n\n");

    let (published, coming_soon): (Vec<_>, Vec<_>) =
        packages.iter().partition(|pkg| pkg.entry.is_published());

    out.push_str("## Published\n\n");
    for pkg in &published {
        push_index_entry(&mut out, pkg, site_url);
    }

    out.push_str("## Coming soon\n\n");
    for pkg in &coming_soon {
        push_index_entry(&mut out, pkg, site_url);
    }

    out.push_str("## Issue filing\n\n");
    out.push_str(&format!(
        "POST {}{} with JSON {{\"type\":{},\"package\":\"<key>\",\"title\":\"...\",\"body\":\"...\",\"context\":\"optional\"}}\n\n",
        site_url,
        SUBMIT_PATH,
        issue_kinds_hint()
    ));

    out.push_str(&discovery_footer(site_url).join("\n"));
    out
}

fn push_index_entry(out: &mut String, pkg: &ResolvedPackageEntry, site_url: &str) {
    let entry = pkg.entry;
    out.push_str(&format!("### {}\n", entry.name));
    out.push_str(&format!("- Key: {}\n", entry.key));
    out.push_str(&format!(
        "- Version: {}\n",
        pkg.version.as_deref().unwrap_or("unreleased")
    ));
    out.push_str(&format!("- Install: {}\n", entry.install));
    out.push_str(&format!("- Binary: {}\n", entry.binary));
    out.push_str(&format!("- Page: {}{}\n", site_url, entry.route));
    out.push_str(&format!("- Purpose: {}\n", entry.purpose));
    out.push_str(&format!("- Requirements: {}\n", entry.requirements.runtime));
    if let Some(target_app) = entry.requirements.target_app {
        out.push_str(&format!("- Target app: {}\n", target_app));
    }
    out.push_str(&format!("- Docs: {}\n", entry.links.docs));
    out.push_str(&format!("- GitHub: {}\n", entry.links.github));
    out.push_str(&format!("- Registry: {}\n", entry.links.registry));
    out.push_str(&format!("- Commands: {}\n", entry.commands));
    if let Some(url) = agent_reference_url(entry.key, site_url) {
        out.push_str(&format!("- Agent reference: {}\n", url));
    }
    out.push('\n');
}

fn agent_reference_url(key: &str, site_url: &str) -> Option<String> {
    catalog::agent_reference(key).map(|_| format!("{}/{}.json", site_url, key))
}

/// `packages.json` registry document, built from a resolved catalog
pub fn registry_document(packages: &[ResolvedPackageEntry], site_url: &str, updated: &str) -> Value {
    let entries: Vec<Value> = packages
        .iter()
        .map(|pkg| {
            let mut value = json!(pkg);
            if let (Some(object), Some(url)) = (
                value.as_object_mut(),
                agent_reference_url(pkg.entry.key, site_url),
            ) {
                object.insert("agentReference".to_string(), Value::String(url));
            }
            value
        })
        .collect();

    json!({
        "version": "1.0",
        "updated": updated,
        "description": "Harness.gg package registry: CLI tools for AI agents",
        "homepage": site_url,
        "llmsTxt": format!("{}/llms.txt", site_url),
        "feedbackEndpoint": feedback_schema(site_url),
        "packageCount": packages.len(),
        "publishedCount": published_count(packages),
        "packages": entries,
    })
}

fn feedback_schema(site_url: &str) -> Value {
    let kinds: Vec<&str> = IssueKind::ALL.iter().map(|kind| kind.label()).collect();
    json!({
        "url": format!("{}{}", site_url, SUBMIT_PATH),
        "method": "POST",
        "contentType": "application/json",
        "description": "AI agents can file bug reports and feature requests. Issues land on GitHub.",
        "body": {
            "type": { "type": "string", "enum": kinds, "required": true },
            "package": {
                "type": "string",
                "enum": catalog::issue_repository_keys(),
                "description": "Package key e.g. \"electron\"",
                "required": true
            },
            "title": { "type": "string", "description": "Short summary", "required": true },
            "body": { "type": "string", "description": "Full description", "required": true },
            "context": {
                "type": "string",
                "description": "Optional extra context (session, OS, version)",
                "required": false
            }
        },
        "responses": {
            "201": { "ok": true, "issue_url": "string", "number": "number" },
            "4xx/5xx": { "ok": false, "error": "string" }
        }
    })
}

/// Agent quick reference served at `/<key>.json`
pub fn agent_reference_document(key: &str, site_url: &str) -> Option<AgentReferenceDocument> {
    let reference = catalog::agent_reference(key)?;
    let entry = catalog::find_by_key(key)?;

    Some(AgentReferenceDocument {
        title: reference.title,
        install: entry.install,
        cli_guidance: reference.cli_guidance,
        quick_flow: reference.quick_flow,
        response: reference.response,
        errors: reference.errors,
        submit: SubmitHint {
            endpoint: format!("{}{}", site_url, SUBMIT_PATH),
            payload_example: reference.payload_example,
        },
        notes: reference.notes,
    })
}
