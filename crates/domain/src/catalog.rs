//! The catalog — definitions for the six managed resource collections.
//!
//! Endpoint paths, field lists, option sets, and auth requirements mirror the
//! REST backend contract. Admin account management is the only collection
//! whose calls carry a bearer credential; the remaining collections are
//! called without one, which the backend's access-control review still has to
//! confirm is intentional.

use crate::field::{FieldDescriptor, FieldKind};
use crate::resource::{AuthRequirement, ResourceDefinition};

static ADMIN_ACCOUNT_FIELDS: [FieldDescriptor; 4] = [
    FieldDescriptor::required("name", "Name", FieldKind::Text),
    FieldDescriptor::required("email", "Email", FieldKind::Email),
    FieldDescriptor::required("password", "Password", FieldKind::Password),
    FieldDescriptor::required(
        "role",
        "Role",
        FieldKind::Choice {
            options: &["superadmin", "admin", "moderator"],
            default: "moderator",
        },
    ),
];

/// Admin accounts (superadmins, HoDs, moderators). Protected collection.
pub static ADMIN_ACCOUNTS: ResourceDefinition = ResourceDefinition {
    key: "admin-accounts",
    singular: "admin",
    plural: "admins",
    list_path: "/admin/all-users",
    create_path: "/admin/register",
    delete_prefix: Some("/admin/delete"),
    fields: &ADMIN_ACCOUNT_FIELDS,
    auth: AuthRequirement::Bearer,
};

static USER_FIELDS: [FieldDescriptor; 4] = [
    FieldDescriptor::required("name", "Name", FieldKind::Text),
    FieldDescriptor::required("email", "Email", FieldKind::Email),
    FieldDescriptor::required("password", "Password", FieldKind::Password),
    FieldDescriptor::required(
        "role",
        "Role",
        FieldKind::Choice {
            options: &["student", "alumni", "admin"],
            default: "student",
        },
    ),
];

/// Plain user accounts (students and alumni).
pub static USERS: ResourceDefinition = ResourceDefinition {
    key: "users",
    singular: "user",
    plural: "users",
    list_path: "/users",
    create_path: "/users",
    delete_prefix: Some("/users"),
    fields: &USER_FIELDS,
    auth: AuthRequirement::None,
};

static DONATION_FIELDS: [FieldDescriptor; 3] = [
    FieldDescriptor::required("name", "Donor Name", FieldKind::Text),
    FieldDescriptor::required("amount", "Amount", FieldKind::Number),
    FieldDescriptor::required(
        "category",
        "Category",
        FieldKind::Choice {
            options: &["Student", "Alumni"],
            default: "Student",
        },
    ),
];

/// Donation entries.
pub static DONATIONS: ResourceDefinition = ResourceDefinition {
    key: "donations",
    singular: "donation",
    plural: "donations",
    list_path: "/donations",
    create_path: "/donations",
    delete_prefix: None,
    fields: &DONATION_FIELDS,
    auth: AuthRequirement::None,
};

static EVENT_FIELDS: [FieldDescriptor; 3] = [
    FieldDescriptor::required("name", "Event Name", FieldKind::Text),
    FieldDescriptor::required("date", "Date", FieldKind::Date),
    FieldDescriptor::required("location", "Location", FieldKind::Text),
];

/// Institution events.
pub static EVENTS: ResourceDefinition = ResourceDefinition {
    key: "events",
    singular: "event",
    plural: "events",
    list_path: "/events",
    create_path: "/events",
    delete_prefix: None,
    fields: &EVENT_FIELDS,
    auth: AuthRequirement::None,
};

static JOB_FIELDS: [FieldDescriptor; 6] = [
    FieldDescriptor::required("title", "Job Title", FieldKind::Text),
    FieldDescriptor::required("company", "Company Name", FieldKind::Text),
    FieldDescriptor::required("location", "Location", FieldKind::Text),
    FieldDescriptor::required(
        "type",
        "Type",
        FieldKind::Choice {
            options: &["Full-Time", "Part-Time", "Internship"],
            default: "Full-Time",
        },
    ),
    FieldDescriptor::required("description", "Job Description", FieldKind::Multiline),
    FieldDescriptor::required("job_link", "Job Link", FieldKind::Url),
];

/// Job postings.
pub static JOBS: ResourceDefinition = ResourceDefinition {
    key: "jobs",
    singular: "job",
    plural: "jobs",
    list_path: "/jobs",
    create_path: "/jobs",
    delete_prefix: None,
    fields: &JOB_FIELDS,
    auth: AuthRequirement::None,
};

static SUCCESS_STORY_FIELDS: [FieldDescriptor; 3] = [
    FieldDescriptor::required("title", "Story Title", FieldKind::Text),
    FieldDescriptor::required("author", "Author Name", FieldKind::Text),
    FieldDescriptor::required("content", "Story Content", FieldKind::Multiline),
];

/// Alumni success stories.
pub static SUCCESS_STORIES: ResourceDefinition = ResourceDefinition {
    key: "success-stories",
    singular: "success story",
    plural: "success stories",
    list_path: "/success-stories",
    create_path: "/success-stories",
    delete_prefix: None,
    fields: &SUCCESS_STORY_FIELDS,
    auth: AuthRequirement::None,
};

/// Every managed resource, in display order.
pub static ALL: [&ResourceDefinition; 6] = [
    &ADMIN_ACCOUNTS,
    &USERS,
    &DONATIONS,
    &EVENTS,
    &JOBS,
    &SUCCESS_STORIES,
];

/// Look up a definition by its stable key.
#[must_use]
pub fn find(key: &str) -> Option<&'static ResourceDefinition> {
    ALL.iter().find(|definition| definition.key == key).copied()
}
