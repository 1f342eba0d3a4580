//! Post-build audit that a bundle is scoped to its deploy base path.
//!
//! Every check is fatal; the first violation ends the run. Within a check all
//! offending references are collected and reported together.

use crate::domain::constants::{INDEX_HTML, SERVICE_WORKER_FILE, WEB_MANIFEST};
use crate::domain::models::{BuildChannelReport, FieldValue, WebManifest};
use crate::error::{Result, VerifyError};
use crate::services::base_path::BasePath;
use crate::services::build_output::{BuildOutput, TextFile};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

fn regex(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("static regex pattern"))
}

fn html_reference_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    regex(&RE, r#"(?:src|href)="(/[^"]+)""#)
}

fn attribute_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    regex(&RE, r#"(?:src|href|content|action)=["'](/[^"']+)["']"#)
}

fn css_url_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    regex(
        &RE,
        r#"url\((?:'(/[^)'"]+)'|"(/[^)'"]+)"|(/[^)'"]+))\)"#,
    )
}

fn quoted_path_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    regex(
        &RE,
        r#""(/[^"'`\s]+)"|'(/[^"'`\s]+)'|`(/[^"'`\s]+)`"#,
    )
}

fn asset_tail_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    regex(&RE, r"(?i)/[^/]+\.[a-z0-9]+$")
}

pub fn absolute_path_references(html: &str) -> Vec<String> {
    html_reference_re()
        .captures_iter(html)
        .map(|c| c[1].to_string())
        .collect()
}

pub fn check_absolute_references(index_html: &str, base: &BasePath) -> Result<()> {
    let unexpected: Vec<String> = absolute_path_references(index_html)
        .into_iter()
        .filter(|r| !r.starts_with(base.as_str()))
        .collect();
    if !unexpected.is_empty() {
        return Err(VerifyError::UnexpectedReferences(unexpected));
    }
    tracing::debug!(check = "absolute-references", "passed");
    Ok(())
}

pub fn extract_root_absolute_references(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    for re in [attribute_re(), css_url_re(), quoted_path_re()] {
        for caps in re.captures_iter(text) {
            if let Some(m) = caps.iter().skip(1).flatten().next() {
                out.push(m.as_str().to_string());
            }
        }
    }
    out
}

fn strip_query_and_hash(reference: &str) -> &str {
    reference.split(['?', '#']).next().unwrap_or_default()
}

/// Looks like a file: last segment has an extension and no trailing slash.
///
/// Extensionless paths such as API routes are skipped by this test, so leaks
/// of that shape go unreported.
pub fn is_asset_like(reference: &str) -> bool {
    let path = strip_query_and_hash(reference);
    !path.ends_with('/') && asset_tail_re().is_match(path)
}

pub fn is_within_base(reference: &str, base: &BasePath) -> bool {
    base.contains(strip_query_and_hash(reference))
}

pub fn find_root_path_leaks(files: &[TextFile], base: &BasePath) -> Vec<String> {
    let mut leaks = Vec::new();
    for file in files {
        for reference in extract_root_absolute_references(&file.contents) {
            if reference.starts_with("//") || !is_asset_like(&reference) {
                continue;
            }
            if !is_within_base(&reference, base) {
                leaks.push(format!("{}:{}", file.relative, reference));
            }
        }
    }
    let mut seen = HashSet::new();
    leaks.retain(|l| seen.insert(l.clone()));
    leaks
}

pub fn check_no_root_path_leakage(files: &[TextFile], base: &BasePath) -> Result<()> {
    let leaks = find_root_path_leaks(files, base);
    if !leaks.is_empty() {
        return Err(VerifyError::RootPathLeakage {
            base: base.to_string(),
            leaks,
        });
    }
    tracing::debug!(check = "root-path-leakage", files = files.len(), "passed");
    Ok(())
}

fn expect_manifest_field(field: &str, actual: Option<&FieldValue>, base: &BasePath) -> Result<()> {
    if actual.and_then(FieldValue::as_str) == Some(base.as_str()) {
        return Ok(());
    }
    let actual = actual.map(FieldValue::to_string);
    Err(VerifyError::mismatch(
        format!("Manifest {}", field),
        base.as_str(),
        actual.as_deref(),
    ))
}

pub fn check_manifest(manifest_text: &str, base: &BasePath) -> Result<()> {
    let manifest: WebManifest =
        serde_json::from_str(manifest_text).map_err(|source| VerifyError::Json {
            path: WEB_MANIFEST.into(),
            source,
        })?;

    expect_manifest_field("start_url", manifest.start_url.as_ref(), base)?;
    expect_manifest_field("scope", manifest.scope.as_ref(), base)?;
    tracing::debug!(check = "manifest", "passed");
    Ok(())
}

fn scope_literals(base: &BasePath) -> [String; 4] {
    let with = base.as_str();
    let without = base.without_trailing_slash();
    [
        format!("scope:\"{}\"", with),
        format!("scope:\"{}\"", without),
        format!("scope:\\\"{}\\\"", with),
        format!("scope:\\\"{}\\\"", without),
    ]
}

pub fn check_service_worker_registration(scripts: &[String], base: &BasePath) -> Result<()> {
    let sw_path = format!("{}{}", base, SERVICE_WORKER_FILE);
    if !scripts.iter().any(|s| s.contains(&sw_path)) {
        return Err(VerifyError::ServiceWorkerPath(base.to_string()));
    }

    let literals = scope_literals(base);
    let scoped = scripts
        .iter()
        .any(|s| literals.iter().any(|l| s.contains(l.as_str())));
    if !scoped {
        return Err(VerifyError::ServiceWorkerScope(base.to_string()));
    }
    tracing::debug!(check = "service-worker", assets = scripts.len(), "passed");
    Ok(())
}

pub fn verify_build_channel(
    output: &dyn BuildOutput,
    channel: &str,
    base: &BasePath,
) -> Result<BuildChannelReport> {
    let index_html = output.read_text(INDEX_HTML)?;
    let manifest_text = output.read_text(WEB_MANIFEST)?;

    check_absolute_references(&index_html, base)?;
    let files = output.text_files()?;
    check_no_root_path_leakage(&files, base)?;
    check_manifest(&manifest_text, base)?;
    let scripts = output.script_assets()?;
    check_service_worker_registration(&scripts, base)?;

    Ok(BuildChannelReport {
        channel: channel.to_string(),
        base_path: base.to_string(),
        dist: output.describe(),
        scanned_files: files.len(),
        script_assets: scripts.len(),
    })
}
