//! Field descriptors — the shape and constraints of one form input.

use crate::error::Violation;

/// Minimum accepted password length, matching the server-side rule.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Input kind of a form field, with any kind-specific constraint data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free-form single-line text.
    Text,
    /// Email address. The server validates the format; locally only
    /// required-ness applies.
    Email,
    /// Secret text, at least [`MIN_PASSWORD_LEN`] characters.
    Password,
    /// Numeric input, entered and transmitted as text.
    Number,
    /// Calendar date in `YYYY-MM-DD` form.
    Date,
    /// An http(s) link.
    Url,
    /// Free-form multi-line text.
    Multiline,
    /// One value out of a fixed option list.
    Choice {
        options: &'static [&'static str],
        default: &'static str,
    },
}

impl FieldKind {
    /// Initial value a draft field of this kind starts with.
    #[must_use]
    pub const fn initial_value(self) -> &'static str {
        match self {
            Self::Choice { default, .. } => default,
            _ => "",
        }
    }
}

/// One entry in a resource definition's ordered field list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Payload key, e.g. `job_link`.
    pub key: &'static str,
    /// Human-readable label, e.g. `Job Link`.
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldDescriptor {
    #[must_use]
    pub const fn required(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            kind,
            required: true,
        }
    }

    #[must_use]
    pub const fn optional(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            kind,
            required: false,
        }
    }

    /// Check a draft value against this field's constraints.
    ///
    /// Returns the violated constraint, or `None` when the value is
    /// acceptable. An empty value on an optional field skips the
    /// kind-specific rules.
    #[must_use]
    pub fn check(&self, value: &str) -> Option<Violation> {
        if value.is_empty() {
            return self
                .required
                .then_some(Violation::Required { field: self.key });
        }
        match self.kind {
            FieldKind::Number => value
                .trim()
                .parse::<f64>()
                .is_err()
                .then_some(Violation::NotANumber { field: self.key }),
            FieldKind::Password => (value.chars().count() < MIN_PASSWORD_LEN).then_some(
                Violation::TooShort {
                    field: self.key,
                    min: MIN_PASSWORD_LEN,
                },
            ),
            FieldKind::Choice { options, .. } => (!options.contains(&value))
                .then_some(Violation::NotAnOption { field: self.key }),
            FieldKind::Url => {
                (!value.starts_with("http://") && !value.starts_with("https://"))
                    .then_some(Violation::NotALink { field: self.key })
            }
            FieldKind::Text | FieldKind::Email | FieldKind::Date | FieldKind::Multiline => None,
        }
    }
}
