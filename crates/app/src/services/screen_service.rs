//! Screen service — the one configurable use-case behind every managed
//! resource screen.
//!
//! A screen owns its draft, its last-fetched collection, a loading flag, and
//! its status reporter. The resource definition it is constructed with
//! selects endpoints, fields, and validation rules; nothing else differs
//! between the six screens. After every successful mutation the full
//! collection is re-fetched; there are no incremental updates and no retries.

use alumnet_domain::draft::Draft;
use alumnet_domain::error::{AlumnetError, ValidationError};
use alumnet_domain::record::{Collection, Record, RecordId};
use alumnet_domain::resource::ResourceDefinition;

use crate::ports::{ConfirmDelete, RemoteCollection};
use crate::services::status::{Severity, StatusMessage, StatusReporter};

/// Application service driving one managed resource screen.
pub struct ScreenService<R, C> {
    definition: &'static ResourceDefinition,
    remote: R,
    confirm: C,
    draft: Draft,
    collection: Collection,
    status: StatusReporter,
    loading: bool,
    submitting: bool,
    fetch_epoch: u64,
}

impl<R: RemoteCollection, C: ConfirmDelete> ScreenService<R, C> {
    /// Create a screen for the given resource. The collection starts empty;
    /// call [`refresh`](Self::refresh) to load it.
    #[must_use]
    pub fn new(definition: &'static ResourceDefinition, remote: R, confirm: C) -> Self {
        Self {
            definition,
            remote,
            confirm,
            draft: Draft::new(definition),
            collection: Collection::new(),
            status: StatusReporter::default(),
            loading: false,
            submitting: false,
            fetch_epoch: 0,
        }
    }

    /// Re-fetch the full collection, replacing the displayed one on success.
    ///
    /// On failure the previous collection stays visible and the failure is
    /// reported. A response belonging to a superseded fetch is discarded
    /// rather than applied out of order.
    #[tracing::instrument(skip(self), fields(resource = self.definition.key))]
    pub async fn refresh(&mut self) {
        let ticket = self.begin_refresh();
        let result = self.remote.list(self.definition).await;
        self.finish_refresh(ticket, result);
    }

    /// Overwrite one draft field.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when `key` is not part of this screen's
    /// resource definition.
    pub fn set_field(
        &mut self,
        key: &str,
        value: impl Into<String>,
    ) -> Result<(), ValidationError> {
        self.draft.set(key, value)
    }

    /// Validate the draft and, when it passes, create a record from it.
    ///
    /// Validation failures are reported without any network call and leave
    /// the draft untouched. A successful create resets the draft and triggers
    /// exactly one refresh; a failed create keeps the operator's input so it
    /// can be corrected.
    #[tracing::instrument(skip(self), fields(resource = self.definition.key))]
    pub async fn submit(&mut self) {
        self.status.clear();
        if let Err(violations) = self.draft.validate() {
            let err = AlumnetError::from(violations);
            self.status.report(err.to_string(), Severity::Error);
            return;
        }

        self.submitting = true;
        let result = self.remote.create(self.definition, &self.draft).await;
        self.submitting = false;

        match result {
            Ok(created) => {
                self.draft.reset();
                let text = created.message.unwrap_or_else(|| {
                    format!("{} added successfully!", capitalize(self.definition.singular))
                });
                self.status.report(text, Severity::Success);
                self.refresh().await;
            }
            Err(err) => {
                let fallback = format!("Failed to add {}", self.definition.singular);
                self.report_failure(&err, fallback);
            }
        }
    }

    /// Delete one record after confirmation, then re-fetch.
    ///
    /// A declined confirmation is a no-op, as is calling this on a resource
    /// without a delete endpoint. On failure the displayed collection is left
    /// untouched — stale but consistent, rather than hiding a record whose
    /// deletion did not go through.
    #[tracing::instrument(skip(self, id), fields(resource = self.definition.key, id = %id))]
    pub async fn remove(&mut self, id: &RecordId) {
        if !self.definition.supports_delete() {
            return;
        }
        let prompt = format!(
            "Are you sure you want to delete this {}?",
            self.definition.singular
        );
        if !self.confirm.confirm(&prompt) {
            return;
        }

        match self.remote.remove(self.definition, id).await {
            Ok(()) => {
                let text = format!("{} deleted successfully", capitalize(self.definition.singular));
                self.status.report(text, Severity::Success);
                self.refresh().await;
            }
            Err(err) => {
                let fallback = format!("Failed to delete {}", self.definition.singular);
                self.report_failure(&err, fallback);
            }
        }
    }

    /// The resource this screen manages.
    #[must_use]
    pub const fn definition(&self) -> &'static ResourceDefinition {
        self.definition
    }

    /// The last-fetched collection, in server order.
    #[must_use]
    pub fn collection(&self) -> &[Record] {
        &self.collection
    }

    /// The in-progress draft.
    #[must_use]
    pub const fn draft(&self) -> &Draft {
        &self.draft
    }

    /// The currently visible status message, if any.
    #[must_use]
    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.current()
    }

    /// Dismiss the current status message.
    pub fn clear_status(&mut self) {
        self.status.clear();
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    fn begin_refresh(&mut self) -> u64 {
        self.loading = true;
        self.fetch_epoch += 1;
        self.fetch_epoch
    }

    fn finish_refresh(&mut self, ticket: u64, result: Result<Collection, AlumnetError>) {
        if ticket != self.fetch_epoch {
            // A newer fetch is in flight; this response lost the race.
            return;
        }
        self.loading = false;
        match result {
            Ok(collection) => self.collection = collection,
            Err(err) => {
                let fallback = format!("Failed to fetch {}", self.definition.plural);
                self.report_failure(&err, fallback);
            }
        }
    }

    fn report_failure(&mut self, err: &AlumnetError, fallback: String) {
        let text = match err {
            AlumnetError::Remote(_) => err
                .server_message()
                .map_or(fallback, |message| message.to_string()),
            other => other.to_string(),
        };
        self.status.report(text, Severity::Error);
    }
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
