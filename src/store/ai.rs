//! AI provider store.
//!
//! Holds the list of available providers plus a busy flag for UI binding.
//! The single mutating operation, [`fetch_providers`], never fails from
//! the caller's point of view: any error collapses into an empty list.
//!
//! Overlapping fetches are neither de-duplicated nor cancelled. Each call
//! runs its own steps, so the call that finishes last decides
//! `providers`, and the first call to finish already clears `loading`.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::watch;

use crate::api::{
    AiServiceApi, ProviderListing, ProviderRecord, RequestClient, RequestError,
};
use crate::config::Config;
use crate::store::state::{ProviderStoreState, StoreState};

/// Any failure while loading providers. Causes are not distinguished.
#[derive(Debug, Error)]
#[error("Failed to fetch providers: {0}")]
pub struct FetchFailure(#[from] RequestError);

/// Load providers and replace the state, clearing `loading` on every exit
/// path including the future being dropped.
pub async fn fetch_providers(state: &StoreState, source: &dyn ProviderListing) {
    state.set_loading(true);
    let _idle = scopeguard::guard(state, |state| state.set_loading(false));

    let providers = load_providers(source).await.unwrap_or_default();
    state.replace_providers(providers);
}

async fn load_providers(source: &dyn ProviderListing) -> Result<Vec<ProviderRecord>, FetchFailure> {
    let response = source.list_providers().await?;
    Ok(response.data.unwrap_or_default())
}

/// Provider store bound to a provider-listing source.
///
/// Clones share the same state.
#[derive(Clone)]
pub struct ProviderStore {
    state: Arc<StoreState>,
    source: Arc<dyn ProviderListing>,
}

impl ProviderStore {
    pub fn new(source: Arc<dyn ProviderListing>) -> Self {
        Self {
            state: Arc::new(StoreState::new()),
            source,
        }
    }

    /// Build a store that lists providers over HTTP.
    pub fn from_config(config: &Config) -> Result<Self, RequestError> {
        let client = RequestClient::new(&config.api)?;
        tracing::debug!(base_url = %client.base_url(), "AI store created");
        Ok(Self::new(Arc::new(AiServiceApi::new(client))))
    }

    /// Load the provider list and replace local state.
    pub async fn fetch_providers(&self) {
        fetch_providers(&self.state, self.source.as_ref()).await;
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    pub fn providers(&self) -> Vec<ProviderRecord> {
        self.state.providers()
    }

    pub fn loading(&self) -> bool {
        self.state.loading()
    }

    pub fn snapshot(&self) -> ProviderStoreState {
        self.state.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.state.subscribe()
    }
}
