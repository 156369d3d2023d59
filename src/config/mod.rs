//! Configuration loading and credential handling.

mod auth;
mod credentials;
mod loader;
mod types;

pub use auth::{build_auth_header, AuthHeader};
pub use credentials::{AdminToken, AuthType};
pub use loader::ConfigError;
pub use types::{ApiConfig, Config, UiConfig};
