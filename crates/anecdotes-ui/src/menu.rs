//! Navigation menu, notification banner, and route table.

use std::time::Duration;

use anecdotes_core::{
    AnecdoteId, AnecdoteStore, MENU, NewAnecdote, created_message,
    notification::DEFAULT_TIMEOUT,
    route::{CREATE_PATH, LEGACY_CREATE_SEGMENT_ENCODED},
};
use leptos::prelude::*;
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{A, Redirect, Route, Routes},
    hooks::use_location,
};

use crate::{
    anecdote::{AnecdoteDetail, AnecdoteList, DetailLookup},
    create::CreateNew,
    info::About,
    notification::{Expiry, Notification, NotificationSlot},
};

/// Menu links plus the view matched by the current route.
///
/// Owns the creation notification. Each notification is cleared after
/// `notification_timeout`; a newer one cancels the pending clear of the
/// previous one.
#[component]
pub fn Menu(
    /// The session's anecdotes.
    #[prop(into)]
    store: Signal<AnecdoteStore>,
    /// Adds a submitted anecdote to the store, returning its id if it was added.
    on_create: Callback<NewAnecdote, Option<AnecdoteId>>,
    /// Adds a vote to an anecdote.
    on_vote: Callback<AnecdoteId>,
    /// How long a notification stays visible.
    #[prop(default = DEFAULT_TIMEOUT)]
    notification_timeout: Duration,
) -> impl IntoView {
    let slot = NotificationSlot::<TimeoutHandle>::new();
    on_cleanup(move || slot.cancel_pending(|handle| handle.clear()));

    let handle_submit = Callback::new(move |new: NewAnecdote| {
        let message = created_message(&new.content);
        if on_create.run(new).is_none() {
            return;
        }
        slot.show(
            message,
            |expiry| schedule_expiry(expiry, notification_timeout),
            |handle| handle.clear(),
        );
    });

    let pathname = use_location().pathname;
    let anecdotes = Signal::derive(move || store.with(|s| s.list_all().to_vec()));
    let detail = Signal::derive(move || {
        store.with(|s| pathname.with(|path| DetailLookup::resolve(s, path)))
    });
    let message = slot.message();

    view! {
      <div>
        <nav class="menu">
          {MENU
            .iter()
            .map(|entry| view! { <A href=entry.route.path()>{entry.label}</A> })
            .collect_view()}
        </nav>

        <Notification message=message />

        <Routes fallback=|| "Page not found.".into_view()>
          <Route path=StaticSegment("") view=move || view! { <AnecdoteList anecdotes=anecdotes /> } />
          <Route
            path=(StaticSegment("anecdotes"), ParamSegment("id"))
            view=move || view! { <AnecdoteDetail lookup=detail on_vote=on_vote /> }
          />
          <Route
            path=StaticSegment("create")
            view=move || view! { <CreateNew on_submit=handle_submit /> }
          />
          <Route
            path=StaticSegment(LEGACY_CREATE_SEGMENT_ENCODED)
            view=|| view! { <Redirect path=CREATE_PATH /> }
          />
          <Route path=StaticSegment("about") view=About />
        </Routes>
      </div>
    }
}

fn schedule_expiry(expiry: Expiry, delay: Duration) -> Option<TimeoutHandle> {
    set_timeout_with_handle(move || expiry.fire(), delay)
        .inspect_err(|err| tracing::warn!(?err, "failed to schedule notification expiry"))
        .ok()
}
