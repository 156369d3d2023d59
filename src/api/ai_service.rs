//! AI service administration endpoints.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::api::envelope::ApiResponse;
use crate::api::error::RequestError;
use crate::api::request::RequestClient;

const API_PATH: &str = "/admin/ai_service";

/// A model vendor the application can route requests to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderRecord {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl ProviderRecord {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            status: None,
        }
    }

    pub fn with_status(mut self, status: &str) -> Self {
        self.status = Some(status.to_string());
        self
    }
}

/// Health report of the AI service module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub ok: bool,
    pub service: String,
}

/// Capability to list the configured providers.
///
/// Resolves to the response envelope on success; the envelope's `data`
/// may be absent.
#[async_trait]
pub trait ProviderListing: Send + Sync {
    async fn list_providers(&self) -> Result<ApiResponse<Vec<ProviderRecord>>, RequestError>;
}

/// HTTP-backed AI service API.
#[derive(Clone)]
pub struct AiServiceApi {
    client: RequestClient,
}

impl AiServiceApi {
    pub fn new(client: RequestClient) -> Self {
        Self { client }
    }

    pub async fn health(&self) -> Result<HealthStatus, RequestError> {
        self.client.get_json(&format!("{API_PATH}/health")).await
    }
}

#[async_trait]
impl ProviderListing for AiServiceApi {
    async fn list_providers(&self) -> Result<ApiResponse<Vec<ProviderRecord>>, RequestError> {
        self.client
            .get_envelope(&format!("{API_PATH}/providers"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_status_is_optional() {
        let record: ProviderRecord =
            serde_json::from_str(r#"{"id": "p1", "name": "OpenAI"}"#).unwrap();
        assert_eq!(record, ProviderRecord::new("p1", "OpenAI"));

        let record: ProviderRecord =
            serde_json::from_str(r#"{"id": "p2", "name": "Anthropic", "status": null}"#).unwrap();
        assert!(record.status.is_none());
    }

    #[test]
    fn test_absent_status_is_not_serialized() {
        let json = serde_json::to_string(&ProviderRecord::new("p1", "OpenAI")).unwrap();
        assert_eq!(json, r#"{"id":"p1","name":"OpenAI"}"#);

        let json =
            serde_json::to_string(&ProviderRecord::new("p2", "Anthropic").with_status("active"))
                .unwrap();
        assert!(json.contains(r#""status":"active""#));
    }
}
