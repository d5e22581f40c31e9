//! HTTP/JSON adapter for the remote collection port, backed by `reqwest`.
//!
//! One client serves every managed resource: the definition passed to each
//! call selects the endpoint paths and whether the request must carry the
//! session's bearer credential. The bearer guard runs before the network —
//! a protected call without a stored token fails locally as `Unauthorized`
//! and no request is issued. Calls are never retried.

use std::future::Future;

use serde::Deserialize;

use alumnet_app::ports::remote::{Created, RemoteCollection};
use alumnet_app::ports::session::SessionProvider;
use alumnet_domain::draft::Draft;
use alumnet_domain::error::{AlumnetError, RemoteError, UnauthorizedError};
use alumnet_domain::record::{Collection, Record, RecordId};
use alumnet_domain::resource::ResourceDefinition;

/// Remote collection client speaking JSON over HTTP against the configured
/// backend base URL.
pub struct HttpRemoteCollection<S> {
    client: reqwest::Client,
    base_url: String,
    session: S,
}

impl<S: SessionProvider> HttpRemoteCollection<S> {
    /// Create a client for the given backend, reading credentials from the
    /// given session provider. A trailing slash on `base_url` is tolerated.
    #[must_use]
    pub fn new(base_url: impl Into<String>, session: S) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: reqwest::Client::new(),
            base_url,
            session,
        }
    }

    /// The backend base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer credential when the resource requires one.
    ///
    /// # Errors
    ///
    /// Returns [`AlumnetError::Unauthorized`] when the resource is protected
    /// and no token is stored; the request is never sent in that case.
    fn authorize(
        &self,
        definition: &'static ResourceDefinition,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder, AlumnetError> {
        if !definition.requires_bearer() {
            return Ok(request);
        }
        match self.session.bearer_token() {
            Some(token) => Ok(request.header(
                reqwest::header::AUTHORIZATION,
                token.header_value(),
            )),
            None => Err(UnauthorizedError {
                resource: definition.key,
            }
            .into()),
        }
    }
}

/// JSON error body returned by the backend on non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Create response body. Backends are inconsistent: some return the created
/// record, others only a confirmation message.
#[derive(Deserialize)]
#[serde(untagged)]
enum CreatedBody {
    Record(Record),
    Message { message: String },
}

impl From<CreatedBody> for Created {
    fn from(body: CreatedBody) -> Self {
        match body {
            CreatedBody::Record(record) => Self {
                record: Some(record),
                message: None,
            },
            CreatedBody::Message { message } => Self {
                record: None,
                message: Some(message),
            },
        }
    }
}

fn transport(err: &reqwest::Error) -> AlumnetError {
    RemoteError::transport(err.to_string()).into()
}

/// Check the response status, extracting the payload error message on non-2xx.
async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, AlumnetError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => Some(body.error),
        Err(_) => None,
    };
    Err(RemoteError::status(status.as_u16(), message).into())
}

impl<S: SessionProvider + Sync> RemoteCollection for HttpRemoteCollection<S> {
    fn list(
        &self,
        definition: &'static ResourceDefinition,
    ) -> impl Future<Output = Result<Collection, AlumnetError>> + Send {
        async move {
            let url = self.url(definition.list_path);
            tracing::debug!(resource = definition.key, %url, "listing collection");
            let request = self.authorize(definition, self.client.get(&url))?;
            let response = request.send().await.map_err(|err| transport(&err))?;
            let response = check_response(response).await?;
            let collection: Collection =
                response.json().await.map_err(|err| transport(&err))?;
            Ok(collection)
        }
    }

    fn create(
        &self,
        definition: &'static ResourceDefinition,
        draft: &Draft,
    ) -> impl Future<Output = Result<Created, AlumnetError>> + Send {
        let payload = draft.payload();
        async move {
            let url = self.url(definition.create_path);
            tracing::debug!(resource = definition.key, %url, "creating record");
            let request = self.authorize(definition, self.client.post(&url).json(&payload))?;
            let response = request.send().await.map_err(|err| transport(&err))?;
            let response = check_response(response).await?;
            // Tolerate any success body shape, including an empty one; the
            // screen re-fetches the collection rather than relying on it.
            let created = match response.json::<CreatedBody>().await {
                Ok(body) => body.into(),
                Err(_) => Created::default(),
            };
            Ok(created)
        }
    }

    fn remove(
        &self,
        definition: &'static ResourceDefinition,
        id: &RecordId,
    ) -> impl Future<Output = Result<(), AlumnetError>> + Send {
        let path = definition.delete_path(id);
        async move {
            let Some(path) = path else {
                return Err(RemoteError::transport(format!(
                    "{} does not support deletion",
                    definition.key
                ))
                .into());
            };
            let url = self.url(&path);
            tracing::debug!(resource = definition.key, %url, "removing record");
            let request = self.authorize(definition, self.client.delete(&url))?;
            let response = request.send().await.map_err(|err| transport(&err))?;
            check_response(response).await?;
            Ok(())
        }
    }
}
