use crate::app_shell::RouteKey;
use crate::domain::constants::DEFAULT_DIST_DIR;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "conspectus",
    version,
    about = "Conspectus Mobile route and deploy verification CLI"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inspect the client route table
    Route {
        #[command(subcommand)]
        command: RouteCommands,
    },
    /// Post-build and pre-deploy gates
    Verify {
        #[command(subcommand)]
        command: VerifyCommands,
    },
    /// Runtime environment checks
    Env {
        #[command(subcommand)]
        command: EnvCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum RouteCommands {
    /// Resolve a location fragment such as `#/transfers/details`
    Resolve {
        #[arg(allow_hyphen_values = true)]
        fragment: String,
    },
    /// Print the fragment for a route
    Hash {
        #[arg(value_enum, ignore_case = true)]
        route: RouteKey,
    },
    List,
}

// Required verifier flags are checked by the handlers so a missing value is a
// gate failure (exit 1), not a usage error.
#[derive(Subcommand, Debug)]
pub enum VerifyCommands {
    /// Check a build directory is scoped to its base path
    BuildChannel {
        #[arg(long, default_value = DEFAULT_DIST_DIR)]
        dist: PathBuf,
        #[arg(long)]
        channel: Option<String>,
        #[arg(long)]
        base: Option<String>,
    },
    /// Check the artifact and deploy metadata handed to production
    ProductionHandoff {
        #[arg(long)]
        artifacts_json: Option<PathBuf>,
        #[arg(long)]
        metadata: Option<PathBuf>,
        #[arg(long)]
        artifact_name: Option<String>,
        #[arg(long)]
        commit_sha: Option<String>,
        #[arg(long)]
        quality_run_id: Option<String>,
        #[arg(long)]
        deploy_run_id: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum EnvCommands {
    /// Validate runtime variables from the environment or a dotenv file
    Check {
        #[arg(long)]
        env_file: Option<PathBuf>,
    },
    /// Check a `.env.example` documents every runtime key
    Example { file: PathBuf },
}
