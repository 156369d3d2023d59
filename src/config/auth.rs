//! Authentication header building for API requests.

use super::credentials::AuthType;
use super::types::ApiConfig;

/// Header name and value for authentication.
pub type AuthHeader = (String, String);

/// Build the authentication header for the admin API.
///
/// Returns `None` if no auth is needed or the token is missing.
pub fn build_auth_header(api: &ApiConfig) -> Option<AuthHeader> {
    match api.bearer_token() {
        Some(token) => Some((
            "Authorization".to_string(),
            format!("Bearer {}", token.as_str()),
        )),
        None => {
            if api.auth_type() == AuthType::Bearer {
                tracing::debug!(
                    "Bearer auth selected but no token configured; sending unauthenticated"
                );
            }
            None
        }
    }
}
