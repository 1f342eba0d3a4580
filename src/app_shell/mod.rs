//! Client shell state: the route table, fragment resolution and the
//! observable stores the UI mounts against.
//!
//! - `routing.rs`: route keys, fragment parsing, hash-route store.
//! - `store.rs`: generic single-threaded observable value.
//! - `sync_state.rs`: sync status store.
//!
//! Nothing here touches a browser directly; the host is injected through
//! [`routing::HashHost`].

pub mod routing;
pub mod store;
pub mod sync_state;

pub use routing::{
    hash_route_store, resolve_route_from_hash, resolve_route_from_value, to_route_hash, AppRoute,
    HashChangeListener, HashHost, ListenerId, RouteKey, APP_ROUTES, DEFAULT_ROUTE,
};
pub use store::{Setter, Store, Subscription};
pub use sync_state::{SyncState, SyncStateStore};
