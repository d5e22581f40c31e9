//! Session port — access to the persisted bearer credential.

use alumnet_domain::auth::BearerToken;

/// Provider of the current admin session, decoupling credential storage from
/// the screens and the HTTP client.
pub trait SessionProvider {
    /// The persisted bearer token, or `None` when nobody is logged in.
    fn bearer_token(&self) -> Option<BearerToken>;
}

/// A fixed, in-memory session. Handy for wiring and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticSession {
    token: Option<BearerToken>,
}

impl StaticSession {
    /// A session holding the given token.
    #[must_use]
    pub fn logged_in(token: impl Into<String>) -> Self {
        Self {
            token: Some(BearerToken::new(token)),
        }
    }

    /// A session with no credential.
    #[must_use]
    pub fn logged_out() -> Self {
        Self { token: None }
    }
}

impl SessionProvider for StaticSession {
    fn bearer_token(&self) -> Option<BearerToken> {
        self.token.clone()
    }
}
