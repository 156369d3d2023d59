use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Generic response wrapper returned by the admin backend.
///
/// Every field is optional on the wire; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub code: i32,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub success: Option<bool>,
}

impl<T> Default for ApiResponse<T> {
    fn default() -> Self {
        Self {
            code: 0,
            msg: String::new(),
            data: None,
            success: None,
        }
    }
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Decode a response body that is either an envelope, a bare array
    /// payload, or `null`.
    pub fn from_payload(value: Value) -> Result<Self, serde_json::Error> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Array(_) => Ok(Self {
                data: Some(serde_json::from_value(value)?),
                ..Self::default()
            }),
            other => serde_json::from_value(other),
        }
    }
}

impl<T> ApiResponse<T> {
    /// Wrap a payload as a successful envelope.
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            success: Some(true),
            ..Self::default()
        }
    }

    /// True when the backend explicitly flagged the call as failed.
    pub fn is_rejected(&self) -> bool {
        self.success == Some(false)
    }
}
