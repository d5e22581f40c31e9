//! Confirmation port — the yes/no step before destructive actions.
//!
//! Injected rather than called as a global blocking prompt, so the deletion
//! flow is testable without a real UI.

/// Synchronous yes/no collaborator consulted before a delete.
pub trait ConfirmDelete {
    /// Ask the operator to confirm. `true` proceeds with the deletion.
    fn confirm(&self, prompt: &str) -> bool;
}

/// A fixed answer, for wiring and tests.
#[derive(Debug, Clone, Copy)]
pub struct AlwaysAnswer(pub bool);

impl ConfirmDelete for AlwaysAnswer {
    fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}
