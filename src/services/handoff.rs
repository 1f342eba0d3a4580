//! Production handoff: cross-checks the CI artifact listing and the deploy
//! metadata written by the build against identifiers the deploy job supplies.

use crate::domain::constants::{PRODUCTION_BASE_PATH, PRODUCTION_CHANNEL};
use crate::domain::models::{ArtifactsListing, DeployMetadata, FieldValue, HandoffReport};
use crate::error::{Result, VerifyError};
use regex::Regex;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub struct HandoffExpectations {
    pub artifact_name: String,
    pub commit_sha: String,
    pub quality_run_id: String,
    pub deploy_run_id: String,
}

fn iso_utc_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}Z$").expect("static regex pattern")
    })
}

pub fn is_iso_utc_timestamp(value: &str) -> bool {
    iso_utc_re().is_match(value)
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(VerifyError::MissingFile(path.to_path_buf()));
    }
    let raw = std::fs::read_to_string(path).map_err(|source| VerifyError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| VerifyError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn text(value: Option<&FieldValue>) -> Option<String> {
    value.map(FieldValue::to_string)
}

pub fn verify_artifacts(listing: &ArtifactsListing, expected_name: &str) -> Result<()> {
    let [artifact] = listing.artifacts.as_slice() else {
        return Err(VerifyError::ArtifactCount(listing.artifacts.len()));
    };
    let name = artifact.name.as_ref();
    if name.and_then(FieldValue::as_str) != Some(expected_name) {
        return Err(VerifyError::mismatch(
            "Artifact name",
            expected_name,
            text(name).as_deref(),
        ));
    }
    tracing::debug!(check = "artifacts", artifact = expected_name, "passed");
    Ok(())
}

// String fields must be JSON strings equal to the expected value.
fn expect_field(field: &str, expected: &str, actual: Option<&FieldValue>) -> Result<()> {
    if actual.and_then(FieldValue::as_str) == Some(expected) {
        return Ok(());
    }
    Err(VerifyError::mismatch(
        format!("Metadata {}", field),
        expected,
        text(actual).as_deref(),
    ))
}

// Run ids compare by their text, so `1001` and `"1001"` both match.
fn expect_run_id(field: &str, expected: &str, actual: Option<&FieldValue>) -> Result<()> {
    let actual = text(actual);
    if actual.as_deref() == Some(expected) {
        return Ok(());
    }
    Err(VerifyError::mismatch(
        format!("Metadata {}", field),
        expected,
        actual.as_deref(),
    ))
}

pub fn verify_metadata(metadata: &DeployMetadata, expected: &HandoffExpectations) -> Result<()> {
    expect_field("channel", PRODUCTION_CHANNEL, metadata.channel.as_ref())?;
    expect_field("basePath", PRODUCTION_BASE_PATH, metadata.base_path.as_ref())?;

    if metadata
        .source_branch
        .as_ref()
        .map_or(true, FieldValue::is_blank)
    {
        return Err(VerifyError::RequiredField("sourceBranch"));
    }

    expect_field("commitSha", &expected.commit_sha, metadata.commit_sha.as_ref())?;

    match text(metadata.build_time_utc.as_ref()) {
        Some(ts) if is_iso_utc_timestamp(&ts) => {}
        other => {
            return Err(VerifyError::Timestamp(
                other.unwrap_or_else(|| crate::error::MISSING_VALUE.to_string()),
            ))
        }
    }

    expect_run_id("qualityRunId", &expected.quality_run_id, metadata.quality_run_id.as_ref())?;
    expect_run_id("deployRunId", &expected.deploy_run_id, metadata.deploy_run_id.as_ref())?;

    tracing::debug!(check = "metadata", commit = %expected.commit_sha, "passed");
    Ok(())
}

pub fn verify_production_handoff(
    listing: &ArtifactsListing,
    metadata: &DeployMetadata,
    expected: &HandoffExpectations,
) -> Result<HandoffReport> {
    verify_artifacts(listing, &expected.artifact_name)?;
    verify_metadata(metadata, expected)?;

    Ok(HandoffReport {
        artifact_name: expected.artifact_name.clone(),
        commit_sha: expected.commit_sha.clone(),
        source_branch: text(metadata.source_branch.as_ref()).unwrap_or_default(),
        build_time_utc: text(metadata.build_time_utc.as_ref()).unwrap_or_default(),
        quality_run_id: expected.quality_run_id.clone(),
        deploy_run_id: expected.deploy_run_id.clone(),
    })
}
