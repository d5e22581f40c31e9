//! Remote collection port — the REST contract every screen consumes.

use std::future::Future;

use alumnet_domain::draft::Draft;
use alumnet_domain::error::AlumnetError;
use alumnet_domain::record::{Collection, Record, RecordId};
use alumnet_domain::resource::ResourceDefinition;

/// Outcome of a successful create call.
///
/// Backends are inconsistent here: some respond with the created record,
/// others with only a confirmation message. Both are optional so the screen
/// can use whichever the server provided.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Created {
    pub record: Option<Record>,
    pub message: Option<String>,
}

/// Client for the REST collections: list, create, remove.
///
/// One implementation serves every resource; the definition passed to each
/// call selects the endpoint paths and the auth requirement. Implementations
/// must enforce the bearer guard for protected resources *before* touching
/// the network, surfacing [`AlumnetError::Unauthorized`]. Calls are never
/// retried; a failure surfaces immediately to the caller.
pub trait RemoteCollection {
    /// Fetch the full collection.
    fn list(
        &self,
        definition: &'static ResourceDefinition,
    ) -> impl Future<Output = Result<Collection, AlumnetError>> + Send;

    /// Create one record from the draft's payload.
    fn create(
        &self,
        definition: &'static ResourceDefinition,
        draft: &Draft,
    ) -> impl Future<Output = Result<Created, AlumnetError>> + Send;

    /// Remove one record by id.
    fn remove(
        &self,
        definition: &'static ResourceDefinition,
        id: &RecordId,
    ) -> impl Future<Output = Result<(), AlumnetError>> + Send;
}
