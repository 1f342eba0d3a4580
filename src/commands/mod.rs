//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `routes.rs`: route resolve/hash/list.
//! - `verify.rs`: build-channel and production-handoff gates.
//! - `env.rs`: runtime env and `.env.example` checks.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*` and `app_shell/*`.
//! - Keep behavior and output schema stable.

pub mod env;
pub mod routes;
pub mod verify;

pub use env::handle_env_commands;
pub use routes::handle_route_commands;
pub use verify::handle_verify_commands;
