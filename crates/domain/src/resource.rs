//! Resource definitions — the static description of one managed collection.
//!
//! A definition carries everything a screen needs to manage its collection:
//! endpoint paths, the ordered field list, and whether calls must carry a
//! bearer credential. Definitions are data, not logic; the six concrete ones
//! live in [`crate::catalog`].

use crate::field::FieldDescriptor;
use crate::record::RecordId;

/// Whether calls for a resource must carry a bearer credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRequirement {
    /// Calls go out without credentials.
    None,
    /// Calls require a bearer token; a missing token blocks the call
    /// client-side.
    Bearer,
}

/// Static description of one managed resource collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDefinition {
    /// Stable identifier, e.g. `donations`.
    pub key: &'static str,
    /// Singular display label, e.g. `donation`.
    pub singular: &'static str,
    /// Plural display label, e.g. `donations`.
    pub plural: &'static str,
    /// Path for `GET` (list) requests.
    pub list_path: &'static str,
    /// Path for `POST` (create) requests.
    pub create_path: &'static str,
    /// Path prefix for `DELETE` requests (the record id is appended), or
    /// `None` when the resource does not support deletion.
    pub delete_prefix: Option<&'static str>,
    /// Ordered field list; drafts hold exactly these keys.
    pub fields: &'static [FieldDescriptor],
    pub auth: AuthRequirement,
}

impl ResourceDefinition {
    /// Look up a field descriptor by payload key.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.key == key)
    }

    /// Whether calls for this resource must carry a bearer credential.
    #[must_use]
    pub const fn requires_bearer(&self) -> bool {
        matches!(self.auth, AuthRequirement::Bearer)
    }

    /// Whether this resource exposes a delete endpoint.
    #[must_use]
    pub const fn supports_delete(&self) -> bool {
        self.delete_prefix.is_some()
    }

    /// The `DELETE` path for one record, when deletion is supported.
    #[must_use]
    pub fn delete_path(&self, id: &RecordId) -> Option<String> {
        self.delete_prefix.map(|prefix| format!("{prefix}/{id}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldKind;

    static FIELDS: [FieldDescriptor; 2] = [
        FieldDescriptor::required("name", "Name", FieldKind::Text),
        FieldDescriptor::required("amount", "Amount", FieldKind::Number),
    ];

    static DEFINITION: ResourceDefinition = ResourceDefinition {
        key: "things",
        singular: "thing",
        plural: "things",
        list_path: "/things",
        create_path: "/things",
        delete_prefix: Some("/things"),
        fields: &FIELDS,
        auth: AuthRequirement::None,
    };

    #[test]
    fn should_find_field_by_key() {
        assert_eq!(DEFINITION.field("amount").map(|f| f.label), Some("Amount"));
        assert!(DEFINITION.field("missing").is_none());
    }

    #[test]
    fn should_build_delete_path_from_prefix_and_id() {
        let path = DEFINITION.delete_path(&RecordId::from(7));
        assert_eq!(path.as_deref(), Some("/things/7"));
    }

    #[test]
    fn should_report_no_delete_path_when_unsupported() {
        let mut definition = DEFINITION.clone();
        definition.delete_prefix = None;
        assert!(!definition.supports_delete());
        assert!(definition.delete_path(&RecordId::from(7)).is_none());
    }
}
