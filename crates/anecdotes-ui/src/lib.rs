//! Routed Anecdotes UI Components
//!
//! Leptos components for the Routed Anecdotes frontend.
//!
//! # Components
//!
//! ## Navigation
//! - [`Menu`] - Menu links, notification banner, and the routed view
//! - [`Notification`] - Transient message shown after a creation
//!
//! ## Anecdotes
//! - [`AnecdoteList`] - All anecdotes as links
//! - [`AnecdoteDetail`] - One anecdote with a vote button
//! - [`CreateNew`] - Creation form with reset, over [`AnecdoteForm`]
//!
//! ## Static
//! - [`About`] - About page
//! - [`Footer`] - Page footer
//!
//! # Example
//!
//! ```ignore
//! use anecdotes_core::{AnecdoteStore, NewAnecdote};
//! use anecdotes_ui::Menu;
//! use leptos::prelude::*;
//! use leptos_router::components::Router;
//!
//! #[component]
//! fn App() -> impl IntoView {
//!     let store = RwSignal::new(AnecdoteStore::default());
//!     let on_create = Callback::new(move |new: NewAnecdote| {
//!         store.try_update(|s| s.add_new(new).ok()).flatten()
//!     });
//!     let on_vote = Callback::new(move |id| {
//!         store.update(|s| {
//!             let _ = s.vote(id);
//!         });
//!     });
//!
//!     view! {
//!         <Router>
//!             <Menu store=store on_create=on_create on_vote=on_vote />
//!         </Router>
//!     }
//! }
//! ```

pub mod anecdote;
pub mod create;
pub mod field;
pub mod info;
pub mod menu;
pub mod notification;

pub use anecdote::{AnecdoteDetail, AnecdoteList, DetailLookup};
pub use create::{AnecdoteForm, CreateNew, use_anecdote_form};
pub use field::{Field, FieldInput, use_field};
pub use info::{About, Footer};
pub use menu::Menu;
pub use notification::{Expiry, Notification, NotificationSlot};
