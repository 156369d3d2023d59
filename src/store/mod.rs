//! State stores observed by the UI layer.

pub mod ai;
pub mod registry;
mod state;

pub use ai::{fetch_providers, FetchFailure, ProviderStore};
pub use registry::{ai_store_hook, install_ai_store};
pub use state::{ProviderStoreState, StoreState};
