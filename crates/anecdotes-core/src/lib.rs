//! Routed Anecdotes Core Library
//!
//! Domain types, the session store, notification and form state, the route
//! table, and configuration for the Routed Anecdotes application. Nothing here
//! depends on the UI framework, so the same code runs in the browser and in
//! native tests.

pub mod anecdote;
pub mod config;
pub mod error;
pub mod field;
pub mod notification;
pub mod route;
pub mod store;

pub use anecdote::{Anecdote, AnecdoteId, NewAnecdote, default_seeds};
pub use config::{AppConfig, MAX_NOTIFICATION_TIMEOUT_SECS};
pub use error::{CoreError, Result};
pub use field::{FieldController, InputKind};
pub use notification::{NotificationTicket, Notifier, created_message};
pub use route::{AppRoute, MENU, MenuEntry};
pub use store::{AnecdoteStore, IdGenerator};
