//! Error conventions for the workspace.
//!
//! Three terminal error kinds, matching what a failed screen action can
//! surface: a local validation failure (never reaches the network), a missing
//! credential for a protected resource (blocked before the network), and a
//! failed remote call. Each layer converts into [`AlumnetError`] via `#[from]`.

use std::fmt;

/// A single violated form constraint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    /// A required field was left empty.
    #[error("{field} is required")]
    Required { field: &'static str },
    /// A number field did not parse as a number.
    #[error("{field} must be a number")]
    NotANumber { field: &'static str },
    /// A password field was shorter than the minimum length.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },
    /// A choice field held a value outside its option list.
    #[error("{field} must be one of the listed options")]
    NotAnOption { field: &'static str },
    /// A url field did not start with an http(s) scheme.
    #[error("{field} must be an http(s) link")]
    NotALink { field: &'static str },
    /// A value was set for a key the resource definition does not declare.
    #[error("unknown field `{key}`")]
    UnknownField { key: String },
}

/// Local constraint violations, reported before any network call.
///
/// Carries *every* violated constraint so a form can surface all of them at
/// once rather than one per submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

impl ValidationError {
    #[must_use]
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// Wrap a single violation.
    #[must_use]
    pub fn single(violation: Violation) -> Self {
        Self {
            violations: vec![violation],
        }
    }

    /// Whether the given constraint is among the violated ones.
    #[must_use]
    pub fn contains(&self, violation: &Violation) -> bool {
        self.violations.contains(violation)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            violation.fmt(f)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Missing credential for a protected resource.
///
/// Raised client-side as a guard, before any request is issued. The server
/// enforces the same rule independently.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unauthorized: Please log in.")]
pub struct UnauthorizedError {
    /// Key of the resource the blocked call targeted.
    pub resource: &'static str,
}

/// A failed remote call — any non-2xx response or transport failure.
///
/// `server_message` holds the message from the response payload when the
/// server provided one; callers fall back to their own generic copy otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteError {
    /// HTTP status when the server responded; `None` for transport failures.
    pub status: Option<u16>,
    /// Error message extracted from the response body, if any.
    pub server_message: Option<String>,
}

impl RemoteError {
    /// A transport-level failure (connect, timeout, malformed body).
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status: None,
            server_message: Some(message.into()),
        }
    }

    /// A non-2xx response, with the payload message when one was present.
    #[must_use]
    pub fn status(status: u16, server_message: Option<String>) -> Self {
        Self {
            status: Some(status),
            server_message,
        }
    }
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.server_message, self.status) {
            (Some(message), _) => f.write_str(message),
            (None, Some(status)) => write!(f, "HTTP {status}"),
            (None, None) => f.write_str("network error"),
        }
    }
}

impl std::error::Error for RemoteError {}

/// Top-level error for every fallible screen operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlumnetError {
    /// Local constraint violation; the network was never reached.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Missing credential for a protected resource.
    #[error(transparent)]
    Unauthorized(#[from] UnauthorizedError),
    /// Failed HTTP call.
    #[error(transparent)]
    Remote(#[from] RemoteError),
}

impl AlumnetError {
    /// The server-provided message, when this error carries one.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Remote(RemoteError {
                status: Some(_),
                server_message: Some(message),
            }) => Some(message.as_str()),
            _ => None,
        }
    }
}
