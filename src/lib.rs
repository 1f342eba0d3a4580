//! Conspectus Mobile shell logic and deploy gates.
//!
//! - [`app_shell`] resolves location fragments to the app's fixed route set
//!   and exposes the route and sync-state stores the UI subscribes to.
//! - [`services`] holds the build-channel and production-handoff checks run
//!   by CI after a build and before a deploy.
//! - [`config`] loads and validates the runtime environment.
//!
//! The `conspectus` binary wires these to a CLI (see [`cli`]).

pub mod app_shell;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod services;

pub use app_shell::{resolve_route_from_hash, to_route_hash, RouteKey, DEFAULT_ROUTE};
pub use error::{ErrorKind, VerifyError};
