//! Observable state container for the provider store.
//!
//! Readers take cheap snapshots; UI bindings can subscribe to a revision
//! counter that ticks on every field change.

use parking_lot::RwLock;
use tokio::sync::watch;

use crate::api::ProviderRecord;

/// Fields exposed to consumers of the provider store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderStoreState {
    /// Providers in response order; replaced wholesale on every fetch.
    pub providers: Vec<ProviderRecord>,
    /// True while a fetch is in flight.
    pub loading: bool,
}

/// Thread-safe holder of [`ProviderStoreState`].
///
/// Consumers only read; mutation is reserved to the fetch operation.
pub struct StoreState {
    fields: RwLock<ProviderStoreState>,
    revision: watch::Sender<u64>,
}

impl StoreState {
    pub fn new() -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            fields: RwLock::new(ProviderStoreState::default()),
            revision,
        }
    }

    pub fn snapshot(&self) -> ProviderStoreState {
        self.fields.read().clone()
    }

    pub fn providers(&self) -> Vec<ProviderRecord> {
        self.fields.read().providers.clone()
    }

    pub fn loading(&self) -> bool {
        self.fields.read().loading
    }

    /// Receive a notification each time a field changes.
    ///
    /// The value is a revision number; read the fields through the store
    /// once notified.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    /// Current revision; increases by one per change.
    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    pub(crate) fn set_loading(&self, loading: bool) {
        self.fields.write().loading = loading;
        self.bump();
    }

    pub(crate) fn replace_providers(&self, providers: Vec<ProviderRecord>) {
        self.fields.write().providers = providers;
        self.bump();
    }

    fn bump(&self) {
        self.revision.send_modify(|rev| *rev += 1);
    }
}

impl Default for StoreState {
    fn default() -> Self {
        Self::new()
    }
}
