//! Single-slot transient notification.
//!
//! A notification is shown, then expired by a timer the UI schedules. Each
//! showing gets a [`NotificationTicket`]; an expiry carrying a superseded
//! ticket is ignored so a newer message keeps its full display time.

use std::time::Duration;

/// Default time a notification stays visible.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Identifies one showing of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationTicket(u64);

/// Holds at most one message at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notifier {
    message: Option<String>,
    generation: u64,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current message.
    pub fn show(&mut self, message: impl Into<String>) -> NotificationTicket {
        self.generation = self.generation.wrapping_add(1);
        self.message = Some(message.into());
        NotificationTicket(self.generation)
    }

    /// Clear the message if `ticket` belongs to the current showing.
    ///
    /// Returns whether the message was cleared.
    pub fn expire(&mut self, ticket: NotificationTicket) -> bool {
        if ticket.0 != self.generation || self.message.is_none() {
            return false;
        }
        self.message = None;
        tracing::debug!("notification expired");
        true
    }

    /// Clear the message unconditionally.
    pub fn clear(&mut self) {
        self.message = None;
    }

    /// The visible message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The visible message, or an empty string.
    pub fn text(&self) -> &str {
        self.message().unwrap_or_default()
    }
}

/// Message announcing a freshly created anecdote.
pub fn created_message(content: &str) -> String {
    format!("A new anecdote \"{content}\" created!")
}
