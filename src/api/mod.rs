//! HTTP API wrappers for the admin backend.
//!
//! Every wrapper goes through [`RequestClient`], which owns base URL
//! resolution, auth headers, timeouts and status mapping.

pub mod ai_service;
pub mod envelope;
pub mod error;
pub mod mcp;
pub mod request;

pub use ai_service::{AiServiceApi, HealthStatus, ProviderListing, ProviderRecord};
pub use envelope::ApiResponse;
pub use error::RequestError;
pub use mcp::{AiChatQuery, McpApi};
pub use request::{RequestClient, REQUEST_ID_HEADER};
