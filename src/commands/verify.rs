use crate::cli::{Cli, Commands, VerifyCommands};
use crate::domain::models::{ArtifactsListing, DeployMetadata};
use crate::error::VerifyError;
use crate::services::base_path::BasePath;
use crate::services::build_channel::verify_build_channel;
use crate::services::build_output::FsBuildOutput;
use crate::services::handoff::{read_json, verify_production_handoff, HandoffExpectations};
use crate::services::output::Output;
use std::path::Path;

/// A flag that is absent or empty is missing.
fn required<'a>(flag: &'static str, value: Option<&'a str>) -> Result<&'a str, VerifyError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(VerifyError::MissingArgument(flag))
}

fn required_path<'a>(flag: &'static str, value: Option<&'a Path>) -> Result<&'a Path, VerifyError> {
    value
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or(VerifyError::MissingArgument(flag))
}

fn log_failure(err: &VerifyError) {
    tracing::debug!(kind = ?err.kind(), "verification failed");
}

pub fn handle_verify_commands(cli: &Cli) -> anyhow::Result<bool> {
    let Commands::Verify { command } = &cli.command else {
        return Ok(false);
    };

    match command {
        VerifyCommands::BuildChannel {
            dist,
            channel,
            base,
        } => {
            let channel = required("channel", channel.as_deref())?;
            let base = BasePath::normalize(required("base", base.as_deref())?);
            let output = FsBuildOutput::new(std::env::current_dir()?.join(dist));
            tracing::info!(dist = %output.root().display(), %channel, %base, "verifying build channel");

            let report = verify_build_channel(&output, channel, &base).inspect_err(log_failure)?;
            Output::new(cli.json).report(report, |r| {
                format!(
                    "[verify-build-channel] {} build output is valid for base path {}",
                    r.channel, r.base_path
                )
            })?;
        }
        VerifyCommands::ProductionHandoff {
            artifacts_json,
            metadata,
            artifact_name,
            commit_sha,
            quality_run_id,
            deploy_run_id,
        } => {
            let artifacts_json = required_path("artifacts-json", artifacts_json.as_deref())?;
            let metadata = required_path("metadata", metadata.as_deref())?;
            let expected = HandoffExpectations {
                artifact_name: required("artifact-name", artifact_name.as_deref())?.to_string(),
                commit_sha: required("commit-sha", commit_sha.as_deref())?.to_string(),
                quality_run_id: required("quality-run-id", quality_run_id.as_deref())?.to_string(),
                deploy_run_id: required("deploy-run-id", deploy_run_id.as_deref())?.to_string(),
            };

            let cwd = std::env::current_dir()?;
            let listing: ArtifactsListing =
                read_json(&cwd.join(artifacts_json)).inspect_err(log_failure)?;
            let meta: DeployMetadata = read_json(&cwd.join(metadata)).inspect_err(log_failure)?;
            let report =
                verify_production_handoff(&listing, &meta, &expected).inspect_err(log_failure)?;
            Output::new(cli.json).report(report, |r| {
                format!(
                    "[verify-production-handoff] verified artifact \"{}\" and deploy metadata traceability.",
                    r.artifact_name
                )
            })?;
        }
    }

    Ok(true)
}
