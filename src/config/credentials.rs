//! Admin token handling.
//!
//! The token lives in the config file and is read each time a request is
//! built, so CLI overrides and reloaded configs take effect immediately.

use super::types::ApiConfig;

/// How requests authenticate against the admin API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthType {
    Bearer,
    None,
}

impl AuthType {
    /// Unknown values fall back to `Bearer`, the backend's only scheme.
    pub fn parse(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("none") {
            AuthType::None
        } else {
            AuthType::Bearer
        }
    }
}

/// Admin access token. Redacted in `Debug` so it cannot reach the logs.
#[derive(Clone, PartialEq, Eq)]
pub struct AdminToken(String);

impl AdminToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AdminToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("AdminToken")
            .field(&format_args!("<{} chars>", self.0.chars().count()))
            .finish()
    }
}

impl ApiConfig {
    pub fn auth_type(&self) -> AuthType {
        AuthType::parse(&self.auth_type_str)
    }

    /// Token to send as `Authorization: Bearer`, if bearer auth is
    /// selected and a non-blank token is configured.
    pub fn bearer_token(&self) -> Option<AdminToken> {
        if self.auth_type() != AuthType::Bearer {
            return None;
        }
        self.token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(|token| AdminToken(token.to_string()))
    }
}
