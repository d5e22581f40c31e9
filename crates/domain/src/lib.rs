//! # alumnet-domain
//!
//! Pure domain model for the alumnet admin core.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps, bearer credentials
//! - Define **field descriptors** (the shape of one form input: text, number,
//!   date, url, choice, …)
//! - Define **resource definitions** (one per manageable collection: endpoint
//!   paths, ordered field list, auth requirement)
//! - Provide the **catalog** of the six managed resources (admin accounts,
//!   users, donations, events, jobs, success stories)
//! - Define **drafts** (in-progress form input) and their validation rules
//! - Define **records** and **collections** (server-authoritative fetched data)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod auth;
pub mod error;
pub mod time;

pub mod catalog;
pub mod draft;
pub mod field;
pub mod record;
pub mod resource;
