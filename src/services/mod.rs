//! Service layer containing the deploy gates and their I/O helpers.
//!
//! ## Service map
//! - `base_path.rs`: base path normalization and scope test.
//! - `build_output.rs`: read-only access to a build directory.
//! - `build_channel.rs`: base-path audit of a production/preview build.
//! - `handoff.rs`: artifact + deploy metadata cross-check.
//! - `output.rs`: JSON/text output helpers.
//!
//! ## Conventions
//! - Checks are pure functions over strings and parsed documents.
//! - Filesystem access stays in `build_output.rs` and `handoff::read_json`.
//! - Keep command handlers thin; delegate to services.

pub mod base_path;
pub mod build_channel;
pub mod build_output;
pub mod handoff;
pub mod output;
