//! # alumnetctl — alumnet admin console
//!
//! Composition root that wires all adapters together and drives the managed
//! resource screens from the command line.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars) and CLI arguments
//! - Initialize logging
//! - Construct the session, confirmation, and remote collection adapters
//! - Construct screen services, injecting adapters via port traits
//! - Render collections and status messages to the terminal
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;
mod prompt;

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use alumnet_adapter_http_reqwest::HttpRemoteCollection;
use alumnet_adapter_memory::MemoryRemoteCollection;
use alumnet_adapter_session_file::FileSession;
use alumnet_app::ports::confirm::ConfirmDelete;
use alumnet_app::ports::remote::RemoteCollection;
use alumnet_app::ports::session::SessionProvider;
use alumnet_app::services::screen_service::ScreenService;
use alumnet_app::services::status::Severity;
use alumnet_domain::auth::BearerToken;
use alumnet_domain::catalog;
use alumnet_domain::field::FieldKind;
use alumnet_domain::record::RecordId;
use alumnet_domain::resource::ResourceDefinition;

use crate::config::Config;
use crate::prompt::ConsoleConfirm;

#[derive(Debug, Parser)]
#[command(name = "alumnetctl", version, about = "Manage alumnet backend collections")]
struct Cli {
    /// Use an in-memory demo backend instead of the configured HTTP backend.
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the manageable resources, their endpoints, and their fields.
    Resources,
    /// Fetch and print a resource's collection.
    List {
        /// Resource key, e.g. `donations` (see `resources`).
        resource: String,
    },
    /// Create one record from KEY=VALUE pairs.
    Add {
        /// Resource key, e.g. `donations`.
        resource: String,
        /// Field values, e.g. `name=Asha amount=500`.
        #[arg(value_name = "KEY=VALUE")]
        fields: Vec<String>,
    },
    /// Delete one record by id.
    Delete {
        /// Resource key, e.g. `users`.
        resource: String,
        /// Server-assigned record id.
        id: String,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
    /// Persist the admin bearer token.
    Login {
        /// Token issued by the backend's admin login.
        token: String,
    },
    /// Remove the persisted bearer token.
    Logout,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::load()?;
    init_tracing(&config.logging.filter);

    let session = FileSession::new(&config.session.token_path);

    // Session commands manage the token file directly; no backend involved.
    match &cli.command {
        Command::Login { token } => {
            session.store(&BearerToken::new(token.as_str()))?;
            println!("Token stored at {}", session.path().display());
            return Ok(ExitCode::SUCCESS);
        }
        Command::Logout => {
            session.clear()?;
            println!("Logged out.");
            return Ok(ExitCode::SUCCESS);
        }
        _ => {}
    }

    if cli.offline {
        let remote = MemoryRemoteCollection::new(session);
        seed_demo(&remote);
        run(remote, &cli.command).await
    } else {
        let remote = HttpRemoteCollection::new(config.backend.base_url.clone(), session);
        tracing::info!(base_url = %config.backend.base_url, "using HTTP backend");
        run(remote, &cli.command).await
    }
}

async fn run<R: RemoteCollection>(remote: R, command: &Command) -> anyhow::Result<ExitCode> {
    match command {
        Command::Resources => {
            print_resources();
            Ok(ExitCode::SUCCESS)
        }
        Command::List { resource } => {
            let definition = find_resource(resource)?;
            let mut screen = ScreenService::new(definition, remote, ConsoleConfirm::new(true));
            screen.refresh().await;
            print_collection(&screen);
            Ok(report_outcome(&screen))
        }
        Command::Add { resource, fields } => {
            let definition = find_resource(resource)?;
            let mut screen = ScreenService::new(definition, remote, ConsoleConfirm::new(true));
            for pair in fields {
                let (key, value) = parse_pair(pair)?;
                screen
                    .set_field(key, value)
                    .map_err(|err| anyhow::anyhow!("{err}"))?;
            }
            screen.submit().await;
            Ok(report_outcome(&screen))
        }
        Command::Delete { resource, id, yes } => {
            let definition = find_resource(resource)?;
            let mut screen = ScreenService::new(definition, remote, ConsoleConfirm::new(*yes));
            screen.remove(&parse_record_id(id)).await;
            Ok(report_outcome(&screen))
        }
        // Handled in main before adapters are wired.
        Command::Login { .. } | Command::Logout => Ok(ExitCode::SUCCESS),
    }
}

fn init_tracing(filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();
}

fn find_resource(key: &str) -> anyhow::Result<&'static ResourceDefinition> {
    catalog::find(key).ok_or_else(|| {
        anyhow::anyhow!("unknown resource `{key}`; run `alumnetctl resources` for the list")
    })
}

/// Split one `KEY=VALUE` argument.
fn parse_pair(raw: &str) -> anyhow::Result<(&str, &str)> {
    raw.split_once('=')
        .ok_or_else(|| anyhow::anyhow!("expected KEY=VALUE, got `{raw}`"))
}

/// Record ids arrive as text; integer-shaped ones are matched numerically.
fn parse_record_id(raw: &str) -> RecordId {
    raw.parse::<i64>()
        .map_or_else(|_| RecordId::from(raw), RecordId::from)
}

fn print_resources() {
    for definition in catalog::ALL {
        let auth = if definition.requires_bearer() {
            "bearer"
        } else {
            "public"
        };
        let delete = definition
            .delete_prefix
            .map_or_else(|| "—".to_string(), |prefix| format!("DELETE {prefix}/:id"));
        println!(
            "{:<16} {auth:<7} GET {}  POST {}  {delete}",
            definition.key, definition.list_path, definition.create_path
        );
        let fields: Vec<String> = definition
            .fields
            .iter()
            .map(|field| format!("{} ({})", field.key, kind_label(field.kind)))
            .collect();
        println!("{:<16} fields: {}", "", fields.join(", "));
    }
}

fn kind_label(kind: FieldKind) -> String {
    match kind {
        FieldKind::Text => "text".to_string(),
        FieldKind::Email => "email".to_string(),
        FieldKind::Password => "password".to_string(),
        FieldKind::Number => "number".to_string(),
        FieldKind::Date => "date".to_string(),
        FieldKind::Url => "url".to_string(),
        FieldKind::Multiline => "multiline".to_string(),
        FieldKind::Choice { options, .. } => format!("one of {}", options.join("|")),
    }
}

fn print_collection<R, C>(screen: &ScreenService<R, C>)
where
    R: RemoteCollection,
    C: ConfirmDelete,
{
    let definition = screen.definition();
    println!("{} ({})", definition.plural, screen.collection().len());
    for record in screen.collection() {
        let summary: Vec<String> = definition
            .fields
            .iter()
            .filter(|field| !matches!(field.kind, FieldKind::Password))
            .filter_map(|field| {
                record
                    .field(field.key)
                    .map(|value| format!("{}: {}", field.label, display_value(value)))
            })
            .collect();
        println!("  [{}] {}", record.id, summary.join(", "));
    }
}

fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn report_outcome<R, C>(screen: &ScreenService<R, C>) -> ExitCode
where
    R: RemoteCollection,
    C: ConfirmDelete,
{
    match screen.status() {
        Some(status) if status.severity == Severity::Error => {
            eprintln!("{}", status.text);
            ExitCode::FAILURE
        }
        Some(status) => {
            println!("{}", status.text);
            ExitCode::SUCCESS
        }
        None => ExitCode::SUCCESS,
    }
}

fn seed_demo<S: SessionProvider>(remote: &MemoryRemoteCollection<S>) {
    remote.seed(
        &catalog::DONATIONS,
        serde_json::json!({"name": "Asha", "amount": 500, "category": "Student"}),
    );
    remote.seed(
        &catalog::EVENTS,
        serde_json::json!({
            "name": "Annual Reunion",
            "date": "2026-01-15",
            "location": "Main Hall",
        }),
    );
    remote.seed(
        &catalog::JOBS,
        serde_json::json!({
            "title": "Backend Engineer",
            "company": "Acme",
            "location": "Remote",
            "type": "Full-Time",
            "description": "Build and run the alumni portal services.",
            "job_link": "https://careers.acme.example/backend-engineer",
        }),
    );
}
