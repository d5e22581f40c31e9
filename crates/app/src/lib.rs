//! # alumnet-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `RemoteCollection` — list/create/remove against the REST backend
//!   - `SessionProvider` — the persisted bearer credential, if any
//!   - `ConfirmDelete` — synchronous yes/no confirmation before deletion
//! - Define the **screen service**: one configurable use-case struct that
//!   drives any managed resource (fetch-on-start, draft editing, local
//!   validation, create, confirmed delete, status reporting)
//! - Provide the **status reporter** (single current message, no queue)
//! - Orchestrate domain objects without knowing *how* network or storage IO
//!   works
//!
//! ## Dependency rule
//! Depends on `alumnet-domain` only. Never imports adapter crates. Adapters
//! depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
