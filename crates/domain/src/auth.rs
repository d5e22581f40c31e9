//! Bearer credential for protected resources.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque bearer token read from persisted session storage.
///
/// The token value is redacted from `Debug` output so it never leaks into
/// logs or error reports.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BearerToken(String);

impl BearerToken {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `Authorization` header value for this token.
    #[must_use]
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(…)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_format_authorization_header_value() {
        let token = BearerToken::new("abc123");
        assert_eq!(token.header_value(), "Bearer abc123");
    }

    #[test]
    fn should_redact_token_in_debug_output() {
        let token = BearerToken::new("secret-value");
        let debug = format!("{token:?}");
        assert!(!debug.contains("secret-value"));
    }

    #[test]
    fn should_serialize_as_plain_string() {
        let token = BearerToken::new("abc123");
        assert_eq!(serde_json::to_string(&token).unwrap(), "\"abc123\"");
    }
}
