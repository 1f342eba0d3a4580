use super::store::Store;
use serde::Serialize;
use std::fmt;
use std::rc::{Rc, Weak};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RouteKey {
    Accounts,
    Transfers,
    Add,
    Settings,
}

pub const DEFAULT_ROUTE: RouteKey = RouteKey::Accounts;

impl RouteKey {
    pub const ALL: [RouteKey; 4] = [
        RouteKey::Accounts,
        RouteKey::Transfers,
        RouteKey::Add,
        RouteKey::Settings,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RouteKey::Accounts => "accounts",
            RouteKey::Transfers => "transfers",
            RouteKey::Add => "add",
            RouteKey::Settings => "settings",
        }
    }

    pub fn from_segment(segment: &str) -> Option<RouteKey> {
        RouteKey::ALL.into_iter().find(|k| k.as_str() == segment)
    }

    pub fn route(self) -> &'static AppRoute {
        &APP_ROUTES[self as usize]
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AppRoute {
    pub key: RouteKey,
    pub label: &'static str,
    pub hash: &'static str,
}

/// Navigation table in display order. Indexed by `RouteKey as usize`.
pub static APP_ROUTES: [AppRoute; 4] = [
    AppRoute {
        key: RouteKey::Accounts,
        label: "Accounts",
        hash: "#/accounts",
    },
    AppRoute {
        key: RouteKey::Transfers,
        label: "Transfers",
        hash: "#/transfers",
    },
    AppRoute {
        key: RouteKey::Add,
        label: "Add",
        hash: "#/add",
    },
    AppRoute {
        key: RouteKey::Settings,
        label: "Settings",
        hash: "#/settings",
    },
];

pub fn to_route_hash(route: RouteKey) -> String {
    format!("#/{}", route.as_str())
}

/// Resolves a location fragment to a route. Never fails: anything that is not
/// a known route key in the first path segment resolves to [`DEFAULT_ROUTE`].
pub fn resolve_route_from_hash(hash: &str) -> RouteKey {
    let trimmed = hash.trim();
    let without_hash = trimmed.strip_prefix('#').unwrap_or(trimmed);
    let path = without_hash.strip_prefix('/').unwrap_or(without_hash);
    let candidate = path
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default()
        .to_lowercase();

    RouteKey::from_segment(&candidate).unwrap_or(DEFAULT_ROUTE)
}

/// Like [`resolve_route_from_hash`] for untyped input; non-strings read as "".
pub fn resolve_route_from_value(value: &serde_json::Value) -> RouteKey {
    resolve_route_from_hash(value.as_str().unwrap_or_default())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

pub type HashChangeListener = Rc<dyn Fn()>;

/// Hosting environment of the shell: exposes the current location fragment
/// and hash-change notifications. Browsers satisfy it with `window`.
pub trait HashHost {
    /// `None` when the host has no string fragment to offer.
    fn location_hash(&self) -> Option<String>;
    fn add_hashchange_listener(&self, listener: HashChangeListener) -> ListenerId;
    fn remove_hashchange_listener(&self, id: ListenerId);
}

fn read_route(host: &dyn HashHost) -> RouteKey {
    host.location_hash()
        .map(|hash| resolve_route_from_hash(&hash))
        .unwrap_or(DEFAULT_ROUTE)
}

/// Live view of the current route.
///
/// Without a usable host the store holds [`DEFAULT_ROUTE`] forever. With one,
/// a single hash-change listener is attached while the store has subscribers
/// and detached once the last subscription is dropped.
pub fn hash_route_store(host: Option<Rc<dyn HashHost>>) -> Store<RouteKey> {
    let host = match host {
        Some(h) if h.location_hash().is_some() => h,
        _ => return Store::new(DEFAULT_ROUTE),
    };

    let initial = read_route(host.as_ref());
    Store::readable(initial, move |setter| {
        setter.set(read_route(host.as_ref()));
        let weak: Weak<dyn HashHost> = Rc::downgrade(&host);
        let id = host.add_hashchange_listener(Rc::new(move || {
            if let Some(h) = weak.upgrade() {
                setter.set(read_route(h.as_ref()));
            }
        }));
        tracing::debug!(listener = id.0, "hashchange listener attached");

        let host = Rc::clone(&host);
        Box::new(move || {
            host.remove_hashchange_listener(id);
            tracing::debug!(listener = id.0, "hashchange listener detached");
        })
    })
}
