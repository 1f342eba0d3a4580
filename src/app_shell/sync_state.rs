use super::store::{Store, Subscription};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncState {
    #[default]
    Idle,
    Syncing,
    Synced,
    Error,
}

#[derive(Clone)]
pub struct SyncStateStore {
    store: Store<SyncState>,
}

impl Default for SyncStateStore {
    fn default() -> Self {
        Self::new(SyncState::default())
    }
}

impl SyncStateStore {
    pub fn new(initial: SyncState) -> Self {
        SyncStateStore {
            store: Store::new(initial),
        }
    }

    pub fn get(&self) -> SyncState {
        self.store.get()
    }

    pub fn subscribe(&self, callback: impl Fn(&SyncState) + 'static) -> Subscription<SyncState> {
        self.store.subscribe(callback)
    }

    pub fn set_idle(&self) {
        self.store.set(SyncState::Idle);
    }

    pub fn set_syncing(&self) {
        self.store.set(SyncState::Syncing);
    }

    pub fn set_synced(&self) {
        self.store.set(SyncState::Synced);
    }

    pub fn set_error(&self) {
        self.store.set(SyncState::Error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_by_default() {
        assert_eq!(SyncStateStore::default().get(), SyncState::Idle);
    }

    #[test]
    fn supports_sync_lifecycle_transitions() {
        let store = SyncStateStore::new(SyncState::Syncing);
        store.set_synced();
        assert_eq!(store.get(), SyncState::Synced);
        store.set_error();
        assert_eq!(store.get(), SyncState::Error);
        store.set_idle();
        assert_eq!(store.get(), SyncState::Idle);
        store.set_syncing();
        assert_eq!(store.get(), SyncState::Syncing);
    }
}
