//! # alumnet-adapter-memory
//!
//! In-memory backend implementing the remote collection port without a
//! network. Used as the demo backend for `alumnetctl --offline` and as a
//! stand-in backend in tests.
//!
//! Behaviour mirrors the real backend where it matters to callers: records
//! get sequential integer ids and a `createdAt` stamp, number fields are
//! coerced from the submitted strings, protected collections reject calls
//! without a bearer credential, and deleting an unknown record responds with
//! a not-found error.
//!
//! ## Dependency rule
//!
//! Depends on `alumnet-app` (port traits) and `alumnet-domain` only.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use alumnet_app::ports::remote::{Created, RemoteCollection};
use alumnet_app::ports::session::SessionProvider;
use alumnet_domain::draft::Draft;
use alumnet_domain::error::{AlumnetError, RemoteError, UnauthorizedError};
use alumnet_domain::field::FieldKind;
use alumnet_domain::record::{Collection, Record, RecordId};
use alumnet_domain::resource::ResourceDefinition;
use alumnet_domain::time;

/// Remote collection backed by in-process storage, one store per resource key.
pub struct MemoryRemoteCollection<S> {
    session: S,
    stores: Mutex<HashMap<&'static str, Vec<Record>>>,
    next_id: AtomicI64,
}

impl<S: SessionProvider> MemoryRemoteCollection<S> {
    /// An empty backend.
    #[must_use]
    pub fn new(session: S) -> Self {
        Self {
            session,
            stores: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Insert a record directly, bypassing validation and the bearer guard.
    pub fn seed(&self, definition: &'static ResourceDefinition, fields: serde_json::Value) {
        let serde_json::Value::Object(mut fields) = fields else {
            return;
        };
        fields.insert(
            "createdAt".to_string(),
            serde_json::Value::String(time::now().to_rfc3339()),
        );
        let record = Record {
            id: RecordId::Number(self.next_id.fetch_add(1, Ordering::SeqCst)),
            fields,
        };
        self.stores
            .lock()
            .expect("store lock poisoned")
            .entry(definition.key)
            .or_default()
            .push(record);
    }

    fn guard(&self, definition: &'static ResourceDefinition) -> Result<(), AlumnetError> {
        if definition.requires_bearer() && self.session.bearer_token().is_none() {
            return Err(UnauthorizedError {
                resource: definition.key,
            }
            .into());
        }
        Ok(())
    }
}

/// Coerce a submitted draft value the way the backend stores it: number
/// fields become JSON numbers, everything else stays a string.
fn coerce(kind: FieldKind, value: String) -> serde_json::Value {
    if matches!(kind, FieldKind::Number) {
        if let Ok(int) = value.trim().parse::<i64>() {
            return serde_json::Value::from(int);
        }
        if let Ok(float) = value.trim().parse::<f64>() {
            return serde_json::Value::from(float);
        }
    }
    serde_json::Value::String(value)
}

impl<S: SessionProvider + Sync> RemoteCollection for MemoryRemoteCollection<S> {
    fn list(
        &self,
        definition: &'static ResourceDefinition,
    ) -> impl Future<Output = Result<Collection, AlumnetError>> + Send {
        let result = self.guard(definition).map(|()| {
            self.stores
                .lock()
                .expect("store lock poisoned")
                .get(definition.key)
                .cloned()
                .unwrap_or_default()
        });
        async { result }
    }

    fn create(
        &self,
        definition: &'static ResourceDefinition,
        draft: &Draft,
    ) -> impl Future<Output = Result<Created, AlumnetError>> + Send {
        let result = self.guard(definition).map(|()| {
            let mut fields = serde_json::Map::new();
            for (key, value) in draft.entries() {
                let kind = definition
                    .field(key)
                    .map_or(FieldKind::Text, |field| field.kind);
                fields.insert(key.to_string(), coerce(kind, value.to_string()));
            }
            fields.insert(
                "createdAt".to_string(),
                serde_json::Value::String(time::now().to_rfc3339()),
            );
            let record = Record {
                id: RecordId::Number(self.next_id.fetch_add(1, Ordering::SeqCst)),
                fields,
            };
            self.stores
                .lock()
                .expect("store lock poisoned")
                .entry(definition.key)
                .or_default()
                .push(record.clone());
            Created {
                record: Some(record),
                message: None,
            }
        });
        async { result }
    }

    fn remove(
        &self,
        definition: &'static ResourceDefinition,
        id: &RecordId,
    ) -> impl Future<Output = Result<(), AlumnetError>> + Send {
        let result = self.guard(definition).and_then(|()| {
            if !definition.supports_delete() {
                return Err(RemoteError::transport(format!(
                    "{} does not support deletion",
                    definition.key
                ))
                .into());
            }
            let mut stores = self.stores.lock().expect("store lock poisoned");
            let store = stores.entry(definition.key).or_default();
            let before = store.len();
            store.retain(|record| record.id != *id);
            if store.len() == before {
                return Err(RemoteError::status(
                    404,
                    Some(format!("No {} with id {id}", definition.singular)),
                )
                .into());
            }
            Ok(())
        });
        async { result }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alumnet_app::ports::session::StaticSession;
    use alumnet_domain::catalog;

    fn donation_draft(name: &str, amount: &str) -> Draft {
        let mut draft = Draft::new(&catalog::DONATIONS);
        draft.set("name", name).unwrap();
        draft.set("amount", amount).unwrap();
        draft
    }

    #[tokio::test]
    async fn should_assign_sequential_ids_and_created_at() {
        let backend = MemoryRemoteCollection::new(StaticSession::logged_out());

        let first = backend
            .create(&catalog::DONATIONS, &donation_draft("Asha", "500"))
            .await
            .unwrap();
        let second = backend
            .create(&catalog::DONATIONS, &donation_draft("Ravi", "250"))
            .await
            .unwrap();

        let first = first.record.unwrap();
        let second = second.record.unwrap();
        assert_eq!(first.id, RecordId::Number(1));
        assert_eq!(second.id, RecordId::Number(2));
        assert!(first.created_at().is_some());
    }

    #[tokio::test]
    async fn should_coerce_number_fields_on_create() {
        let backend = MemoryRemoteCollection::new(StaticSession::logged_out());

        backend
            .create(&catalog::DONATIONS, &donation_draft("Asha", "500"))
            .await
            .unwrap();

        let collection = backend.list(&catalog::DONATIONS).await.unwrap();
        assert_eq!(collection[0].field("amount"), Some(&serde_json::json!(500)));
        assert_eq!(collection[0].text("category"), Some("Student"));
    }

    #[tokio::test]
    async fn should_list_empty_collection_for_untouched_resource() {
        let backend = MemoryRemoteCollection::new(StaticSession::logged_out());
        let collection = backend.list(&catalog::EVENTS).await.unwrap();
        assert!(collection.is_empty());
    }

    #[tokio::test]
    async fn should_reject_protected_calls_without_token() {
        let backend = MemoryRemoteCollection::new(StaticSession::logged_out());
        let result = backend.list(&catalog::ADMIN_ACCOUNTS).await;
        assert!(matches!(result, Err(AlumnetError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn should_allow_protected_calls_with_token() {
        let backend = MemoryRemoteCollection::new(StaticSession::logged_in("tok"));
        assert!(backend.list(&catalog::ADMIN_ACCOUNTS).await.is_ok());
    }

    #[tokio::test]
    async fn should_remove_record_by_id() {
        let backend = MemoryRemoteCollection::new(StaticSession::logged_out());
        let mut draft = Draft::new(&catalog::USERS);
        draft.set("name", "Ravi").unwrap();
        draft.set("email", "ravi@example.edu").unwrap();
        draft.set("password", "secret123").unwrap();
        let created = backend.create(&catalog::USERS, &draft).await.unwrap();
        let id = created.record.unwrap().id;

        backend.remove(&catalog::USERS, &id).await.unwrap();

        assert!(backend.list(&catalog::USERS).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_report_not_found_when_removing_unknown_id() {
        let backend = MemoryRemoteCollection::new(StaticSession::logged_out());
        let result = backend.remove(&catalog::USERS, &RecordId::from(99)).await;

        let Err(AlumnetError::Remote(err)) = result else {
            panic!("expected a remote error");
        };
        assert_eq!(err.status, Some(404));
    }

    #[tokio::test]
    async fn should_reject_removal_for_resource_without_delete() {
        let backend = MemoryRemoteCollection::new(StaticSession::logged_out());
        let result = backend.remove(&catalog::DONATIONS, &RecordId::from(1)).await;
        assert!(matches!(result, Err(AlumnetError::Remote(_))));
    }

    #[tokio::test]
    async fn should_list_seeded_records() {
        let backend = MemoryRemoteCollection::new(StaticSession::logged_out());
        backend.seed(
            &catalog::EVENTS,
            serde_json::json!({"name": "Reunion", "date": "2026-01-15", "location": "Main Hall"}),
        );

        let collection = backend.list(&catalog::EVENTS).await.unwrap();
        assert_eq!(collection.len(), 1);
        assert_eq!(collection[0].text("name"), Some("Reunion"));
    }
}
