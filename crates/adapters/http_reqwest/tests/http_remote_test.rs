//! End-to-end tests for the reqwest adapter.
//!
//! Each test spins up an in-process axum fixture backend on an ephemeral
//! port and drives it through the real client — on its own or wired into a
//! full screen service.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Json;
use axum::Router;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::routing::{delete, get, post};
use serde_json::{Value, json};

use alumnet_adapter_http_reqwest::HttpRemoteCollection;
use alumnet_app::ports::confirm::AlwaysAnswer;
use alumnet_app::ports::remote::RemoteCollection;
use alumnet_app::ports::session::StaticSession;
use alumnet_app::services::screen_service::ScreenService;
use alumnet_app::services::status::Severity;
use alumnet_domain::catalog;
use alumnet_domain::error::AlumnetError;

const FIXTURE_TOKEN: &str = "fixture-token";

/// Shared fixture state: stored collections plus a hit counter for the
/// protected admin routes.
#[derive(Default)]
struct Backend {
    donations: Mutex<Vec<Value>>,
    admins: Mutex<Vec<Value>>,
    protected_hits: AtomicUsize,
}

fn routes(backend: Arc<Backend>) -> Router {
    Router::new()
        .route("/donations", get(list_donations).post(create_donation))
        .route("/users", post(create_user))
        .route("/admin/all-users", get(list_admins))
        .route("/admin/register", post(register_admin))
        .route("/admin/delete/{id}", delete(delete_admin))
        .with_state(backend)
}

/// Bind an ephemeral port, serve the fixture in the background, and return
/// the base URL.
async fn serve(backend: Arc<Backend>) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = routes(backend);
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn is_authorized(headers: &HeaderMap) -> bool {
    let expected = format!("Bearer {FIXTURE_TOKEN}");
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        == Some(expected.as_str())
}

fn unauthorized() -> (StatusCode, Json<Value>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"error": "Unauthorized"})),
    )
}

async fn list_donations(State(backend): State<Arc<Backend>>) -> Json<Value> {
    Json(Value::Array(backend.donations.lock().unwrap().clone()))
}

async fn create_donation(
    State(backend): State<Arc<Backend>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let mut donations = backend.donations.lock().unwrap();
    // The backend coerces the amount string to a number on insert.
    let amount = body["amount"]
        .as_str()
        .and_then(|raw| raw.parse::<i64>().ok());
    let record = json!({
        "id": donations.len() + 1,
        "name": body["name"],
        "amount": amount,
        "category": body["category"],
        "createdAt": "2024-06-01T09:00:00Z",
    });
    donations.push(record.clone());
    (StatusCode::CREATED, Json(record))
}

async fn create_user() -> (StatusCode, Json<Value>) {
    (
        StatusCode::CONFLICT,
        Json(json!({"error": "Email already exists"})),
    )
}

async fn list_admins(
    State(backend): State<Arc<Backend>>,
    headers: HeaderMap,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    backend.protected_hits.fetch_add(1, Ordering::SeqCst);
    if !is_authorized(&headers) {
        return Err(unauthorized());
    }
    Ok(Json(Value::Array(backend.admins.lock().unwrap().clone())))
}

async fn register_admin(
    State(backend): State<Arc<Backend>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    backend.protected_hits.fetch_add(1, Ordering::SeqCst);
    if !is_authorized(&headers) {
        return Err(unauthorized());
    }
    let record = json!({
        "id": uuid::Uuid::new_v4().to_string(),
        "name": body["name"],
        "email": body["email"],
        "role": body["role"],
        "createdAt": "2024-06-01T09:00:00Z",
    });
    backend.admins.lock().unwrap().push(record);
    Ok((
        StatusCode::CREATED,
        Json(json!({"message": "Admin added successfully!"})),
    ))
}

async fn delete_admin(
    State(backend): State<Arc<Backend>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    backend.protected_hits.fetch_add(1, Ordering::SeqCst);
    if !is_authorized(&headers) {
        return Err(unauthorized());
    }
    backend
        .admins
        .lock()
        .unwrap()
        .retain(|admin| admin["id"].as_str() != Some(id.as_str()));
    Ok(Json(json!({"message": "Admin deleted"})))
}

// ---------------------------------------------------------------------------
// Donations — public collection
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_create_then_list_donation_through_screen() {
    let backend = Arc::new(Backend::default());
    let base_url = serve(Arc::clone(&backend)).await;
    let remote = HttpRemoteCollection::new(base_url, StaticSession::logged_out());
    let mut screen = ScreenService::new(&catalog::DONATIONS, remote, AlwaysAnswer(true));

    screen.set_field("name", "Asha").unwrap();
    screen.set_field("amount", "500").unwrap();
    screen.submit().await;

    assert_eq!(screen.status().unwrap().severity, Severity::Success);
    assert!(screen.draft().is_pristine());
    assert_eq!(screen.collection().len(), 1);

    let record = &screen.collection()[0];
    assert_eq!(record.text("name"), Some("Asha"));
    assert_eq!(record.field("amount"), Some(&json!(500)));
    assert_eq!(record.text("category"), Some("Student"));
    assert!(record.created_at().is_some());
}

#[tokio::test]
async fn should_surface_server_error_payload_on_create() {
    let backend = Arc::new(Backend::default());
    let base_url = serve(backend).await;
    let remote = HttpRemoteCollection::new(base_url, StaticSession::logged_out());
    let mut screen = ScreenService::new(&catalog::USERS, remote, AlwaysAnswer(true));

    screen.set_field("name", "Ravi").unwrap();
    screen.set_field("email", "ravi@example.edu").unwrap();
    screen.set_field("password", "secret123").unwrap();
    screen.submit().await;

    let status = screen.status().unwrap();
    assert_eq!(status.severity, Severity::Error);
    assert_eq!(status.text, "Email already exists");
    assert_eq!(screen.draft().get("name"), Some("Ravi"));
}

// ---------------------------------------------------------------------------
// Admin accounts — protected collection
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_abort_admin_register_locally_without_token() {
    let backend = Arc::new(Backend::default());
    let base_url = serve(Arc::clone(&backend)).await;
    let remote = HttpRemoteCollection::new(base_url, StaticSession::logged_out());
    let mut screen = ScreenService::new(&catalog::ADMIN_ACCOUNTS, remote, AlwaysAnswer(true));

    screen.set_field("name", "Priya").unwrap();
    screen.set_field("email", "priya@example.edu").unwrap();
    screen.set_field("password", "secret123").unwrap();
    screen.submit().await;

    assert_eq!(
        screen.status().unwrap().text,
        "Unauthorized: Please log in."
    );
    assert_eq!(backend.protected_hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn should_register_and_delete_admin_with_bearer() {
    let backend = Arc::new(Backend::default());
    let base_url = serve(backend).await;
    let remote = HttpRemoteCollection::new(base_url, StaticSession::logged_in(FIXTURE_TOKEN));
    let mut screen = ScreenService::new(&catalog::ADMIN_ACCOUNTS, remote, AlwaysAnswer(true));

    screen.set_field("name", "Priya").unwrap();
    screen.set_field("email", "priya@example.edu").unwrap();
    screen.set_field("password", "secret123").unwrap();
    screen.submit().await;

    assert_eq!(screen.status().unwrap().text, "Admin added successfully!");
    assert_eq!(screen.collection().len(), 1);

    let id = screen.collection()[0].id.clone();
    screen.remove(&id).await;

    assert_eq!(screen.status().unwrap().text, "Admin deleted successfully");
    assert!(screen.collection().is_empty());
}

#[tokio::test]
async fn should_surface_rejection_when_token_is_wrong() {
    let backend = Arc::new(Backend::default());
    let base_url = serve(backend).await;
    let remote = HttpRemoteCollection::new(base_url, StaticSession::logged_in("stale-token"));

    let result = remote.list(&catalog::ADMIN_ACCOUNTS).await;

    let Err(AlumnetError::Remote(err)) = result else {
        panic!("expected a remote error, got {result:?}");
    };
    assert_eq!(err.status, Some(401));
    assert_eq!(err.server_message.as_deref(), Some("Unauthorized"));
}

// ---------------------------------------------------------------------------
// Failure modes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_report_fetch_failure_for_missing_route() {
    let backend = Arc::new(Backend::default());
    let base_url = serve(backend).await;
    let remote = HttpRemoteCollection::new(base_url, StaticSession::logged_out());
    let mut screen = ScreenService::new(&catalog::JOBS, remote, AlwaysAnswer(true));

    screen.refresh().await;

    let status = screen.status().unwrap();
    assert_eq!(status.text, "Failed to fetch jobs");
    assert_eq!(status.severity, Severity::Error);
    assert!(!screen.is_loading());
    assert!(screen.collection().is_empty());
}

#[tokio::test]
async fn should_report_fetch_failure_when_backend_is_unreachable() {
    // Bind and immediately drop a listener so the port is closed.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let remote = HttpRemoteCollection::new(format!("http://{addr}"), StaticSession::logged_out());
    let mut screen = ScreenService::new(&catalog::EVENTS, remote, AlwaysAnswer(true));

    screen.refresh().await;

    assert_eq!(screen.status().unwrap().text, "Failed to fetch events");
    assert!(screen.collection().is_empty());
}
