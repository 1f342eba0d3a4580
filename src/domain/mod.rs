//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs`: parsed build/deploy documents and report/output structs.
//! - `constants.rs`: production channel, file names, scanned extensions.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! Report structs define the `--json` outputs. Keep schema-impacting changes
//! synchronized with `docs/contracts/*`.

pub mod constants;
pub mod models;
