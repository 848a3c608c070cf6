//! List and detail views for anecdotes.

use anecdotes_core::{Anecdote, AnecdoteId, AnecdoteStore, AppRoute, CoreError};
use leptos::prelude::*;
use leptos_router::components::A;

/// Outcome of resolving the current location against the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailLookup {
    /// The location names an existing anecdote.
    Found(Anecdote),
    /// The location names an anecdote that does not exist.
    Missing(AnecdoteId),
    /// The location is not a detail page, or its id is not a number.
    Unmatched,
}

impl DetailLookup {
    /// Resolve `pathname` against `store`.
    pub fn resolve(store: &AnecdoteStore, pathname: &str) -> Self {
        let Some(id) = AppRoute::parse(pathname).and_then(|route| route.anecdote_id()) else {
            return Self::Unmatched;
        };

        match store.find_by_id(id) {
            Ok(anecdote) => Self::Found(anecdote.clone()),
            Err(_) => Self::Missing(id),
        }
    }

    /// Heading of a found anecdote's page: its content alone.
    pub fn heading(&self) -> Option<&str> {
        match self {
            Self::Found(anecdote) => Some(&anecdote.content),
            Self::Missing(_) | Self::Unmatched => None,
        }
    }
}

/// All anecdotes, each linking to its detail page.
#[component]
pub fn AnecdoteList(
    /// Anecdotes in display order.
    anecdotes: Signal<Vec<Anecdote>>,
) -> impl IntoView {
    view! {
      <div class="anecdote-list">
        <h2>"Anecdotes"</h2>
        <ul>
          <For
            each=move || anecdotes.get()
            key=|anecdote| anecdote.id
            children=move |anecdote| {
              view! {
                <li>
                  <A href=AppRoute::Detail(anecdote.id).path()>{anecdote.content}</A>
                </li>
              }
            }
          />

        </ul>
      </div>
    }
}

/// A single anecdote with its votes and reference link.
#[component]
pub fn AnecdoteDetail(
    /// The anecdote resolved from the current location.
    lookup: Signal<DetailLookup>,
    /// Called with the anecdote id when the vote button is pressed.
    on_vote: Callback<AnecdoteId>,
) -> impl IntoView {
    move || {
        let resolved = lookup.get();
        let heading = resolved.heading().map(str::to_string);
        match resolved {
            DetailLookup::Found(anecdote) => {
                let id = anecdote.id;
                let href = anecdote.info.clone();
                view! {
                  <div class="anecdote-detail">
                    <h2>{heading}</h2>
                    <p>"by " {anecdote.author}</p>
                    <p>
                      "has " {anecdote.votes} " votes "
                      <button on:click=move |_| on_vote.run(id)>"vote"</button>
                    </p>
                    <p>"for more information see " <a href=href>{anecdote.info}</a></p>
                  </div>
                }
                .into_any()
            }
            DetailLookup::Missing(id) => {
                view! { <NotFound message=CoreError::not_found(id).to_string() /> }.into_any()
            }
            DetailLookup::Unmatched => {
                view! { <NotFound message="No anecdote matches this address".to_string() /> }
                    .into_any()
            }
        }
    }
}

/// Shown in place of a detail page that cannot be resolved.
#[component]
fn NotFound(message: String) -> impl IntoView {
    view! {
      <div class="anecdote-missing">
        <p>{message}</p>
        <A href=AppRoute::List.path()>"back to anecdotes"</A>
      </div>
    }
}
