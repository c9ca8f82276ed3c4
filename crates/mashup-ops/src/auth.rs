//! Bearer token authentication.
//!
//! Tokens are issued elsewhere; this layer only maps a presented token to
//! an opaque user id.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{OpsError, OpsResult};

/// An authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
}

/// Known bearer tokens.
#[derive(Debug, Clone, Default)]
pub struct TokenRegistry {
    tokens: BTreeMap<String, String>,
}

impl TokenRegistry {
    pub fn new(tokens: BTreeMap<String, String>) -> Self {
        Self { tokens }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_tokens.clone())
    }

    /// Resolve a token to its user.
    pub fn authenticate(&self, token: &str) -> OpsResult<AuthUser> {
        self.tokens
            .get(token)
            .map(|id| AuthUser { id: id.clone() })
            .ok_or(OpsError::InvalidToken)
    }

    /// Resolve an `Authorization` header value.
    pub fn authenticate_header(&self, header: Option<&str>) -> OpsResult<AuthUser> {
        let token = header.and_then(bearer_token).ok_or(OpsError::AuthRequired)?;
        self.authenticate(token)
    }
}

/// Extract the token from a `Bearer <token>` header value.
pub fn bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> TokenRegistry {
        TokenRegistry::new(BTreeMap::from([("t0k3n".to_string(), "alice".to_string())]))
    }

    #[test]
    fn test_bearer_token() {
        assert_eq!(bearer_token("Bearer abc"), Some("abc"));
        assert_eq!(bearer_token("Bearer "), None);
        assert_eq!(bearer_token("Basic abc"), None);
    }

    #[test]
    fn test_authenticate_header() {
        let registry = registry();
        assert_eq!(
            registry.authenticate_header(Some("Bearer t0k3n")).unwrap().id,
            "alice"
        );
        assert!(matches!(
            registry.authenticate_header(None),
            Err(OpsError::AuthRequired)
        ));
        assert!(matches!(
            registry.authenticate_header(Some("Token t0k3n")),
            Err(OpsError::AuthRequired)
        ));
        assert!(matches!(
            registry.authenticate_header(Some("Bearer nope")),
            Err(OpsError::InvalidToken)
        ));
    }
}
