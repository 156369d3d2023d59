//! Client layer for the AI admin console.
//!
//! - [`api`] wraps the backend's HTTP endpoints.
//! - [`store`] caches provider data for UI binding.
//! - [`enums`] holds the UI enumeration tables.
//! - [`config`] loads connection settings from disk.
//!
//! The most common types are re-exported here so consumers can import
//! from one place.

pub mod api;
pub mod config;
pub mod enums;
pub mod logging;
pub mod store;

pub use api::{
    AiChatQuery, AiServiceApi, ApiResponse, HealthStatus, McpApi, ProviderListing,
    ProviderRecord, RequestClient, RequestError,
};
pub use config::{ApiConfig, Config, ConfigError};
pub use enums::{page_switching_animation_options, OptionType, PageSwitchingAnimation};
pub use store::{
    ai_store_hook, fetch_providers, install_ai_store, FetchFailure, ProviderStore,
    ProviderStoreState, StoreState,
};
