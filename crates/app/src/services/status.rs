//! Status reporter — the single user-visible message per screen.

/// How a status message should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// One user-visible message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub severity: Severity,
}

/// Holds the screen's current message. Exactly one message is visible at a
/// time; reporting replaces whatever was shown before. No queue, no history.
#[derive(Debug, Default)]
pub struct StatusReporter {
    current: Option<StatusMessage>,
}

impl StatusReporter {
    /// Replace the current message.
    pub fn report(&mut self, text: impl Into<String>, severity: Severity) {
        self.current = Some(StatusMessage {
            text: text.into(),
            severity,
        });
    }

    /// Dismiss the current message.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// The currently visible message, if any.
    #[must_use]
    pub fn current(&self) -> Option<&StatusMessage> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_with_no_message() {
        let reporter = StatusReporter::default();
        assert!(reporter.current().is_none());
    }

    #[test]
    fn should_replace_previous_message_when_reporting() {
        let mut reporter = StatusReporter::default();
        reporter.report("Failed to fetch jobs", Severity::Error);
        reporter.report("Job added successfully!", Severity::Success);

        let current = reporter.current().unwrap();
        assert_eq!(current.text, "Job added successfully!");
        assert_eq!(current.severity, Severity::Success);
    }

    #[test]
    fn should_clear_current_message() {
        let mut reporter = StatusReporter::default();
        reporter.report("Failed to fetch users", Severity::Error);
        reporter.clear();
        assert!(reporter.current().is_none());
    }
}
