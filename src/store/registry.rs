//! Process-wide store instances.
//!
//! Only the application's composition root installs stores here; library
//! code and tests construct their own instances.

use std::sync::OnceLock;

use crate::store::ai::ProviderStore;

static AI_STORE: OnceLock<ProviderStore> = OnceLock::new();

/// Install the default AI store.
///
/// The first installation wins; later calls return the already installed
/// instance and drop the argument.
pub fn install_ai_store(store: ProviderStore) -> &'static ProviderStore {
    AI_STORE.get_or_init(|| store)
}

/// The installed AI store, if any.
pub fn ai_store_hook() -> Option<&'static ProviderStore> {
    AI_STORE.get()
}
