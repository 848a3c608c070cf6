//! Notification state with a cancellable expiry timer, and its banner.
//!
//! [`NotificationSlot`] is generic over the timer handle so the bookkeeping
//! runs without a browser: the menu schedules with `set_timeout_with_handle`,
//! tests hand out plain numbers.

use anecdotes_core::{NotificationTicket, Notifier};
use leptos::prelude::*;

/// Reactive notifier plus the handle of its pending expiry timer.
#[derive(Debug)]
pub struct NotificationSlot<H: 'static> {
    notifier: RwSignal<Notifier>,
    pending: StoredValue<Option<H>>,
}

impl<H: 'static> Clone for NotificationSlot<H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H: 'static> Copy for NotificationSlot<H> {}

/// Clears the showing it was created for, unless a newer one replaced it.
#[derive(Debug, Clone, Copy)]
pub struct Expiry {
    notifier: RwSignal<Notifier>,
    ticket: NotificationTicket,
}

impl Expiry {
    pub fn fire(self) {
        self.notifier.try_update(|n| n.expire(self.ticket));
    }
}

impl<H: Send + Sync + 'static> NotificationSlot<H> {
    pub fn new() -> Self {
        Self {
            notifier: RwSignal::new(Notifier::new()),
            pending: StoredValue::new(None),
        }
    }

    /// Current text, empty when nothing is shown (tracked).
    pub fn message(&self) -> Signal<String> {
        let notifier = self.notifier;
        Signal::derive(move || notifier.with(|n| n.text().to_string()))
    }

    /// Current text without tracking.
    pub fn text(&self) -> String {
        self.notifier.with_untracked(|n| n.text().to_string())
    }

    /// Show `message` and schedule its expiry.
    ///
    /// The pending timer of the previous showing is handed to `cancel`.
    /// `schedule` arms a timer that fires the [`Expiry`] and returns its
    /// handle, or `None` if no timer could be armed.
    pub fn show(
        &self,
        message: impl Into<String>,
        schedule: impl FnOnce(Expiry) -> Option<H>,
        cancel: impl FnOnce(H),
    ) {
        let ticket = self.notifier.write().show(message);
        self.cancel_pending(cancel);

        let handle = schedule(Expiry {
            notifier: self.notifier,
            ticket,
        });
        self.pending.set_value(handle);
    }

    /// Hand the pending timer, if any, to `cancel`.
    pub fn cancel_pending(&self, cancel: impl FnOnce(H)) {
        self.pending.try_update_value(|slot| {
            if let Some(handle) = slot.take() {
                cancel(handle);
            }
        });
    }

    pub fn has_pending(&self) -> bool {
        self.pending.with_value(Option::is_some)
    }
}

impl<H: Send + Sync + 'static> Default for NotificationSlot<H> {
    fn default() -> Self {
        Self::new()
    }
}

/// The current notification, empty when there is none.
#[component]
pub fn Notification(
    /// Text to show.
    message: Signal<String>,
) -> impl IntoView {
    view! { <p class="notification">{move || message.get()}</p> }
}
