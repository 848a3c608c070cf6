use anecdotes_core::{AnecdoteId, AnecdoteStore, AppConfig, NewAnecdote};
use anecdotes_ui::{Footer, Menu};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::Router;

/// Configuration compiled into the bundle.
const BUNDLED_CONFIG: &str = include_str!("../../anecdotes.toml");

/// Parse the bundled configuration, falling back to defaults if it is invalid.
pub fn bundled_config() -> AppConfig {
    AppConfig::from_toml_str(BUNDLED_CONFIG).unwrap_or_else(|err| {
        tracing::error!(%err, "bundled configuration rejected, using defaults");
        AppConfig::default()
    })
}

#[component]
pub fn App(
    /// Title, notification timeout, and seed anecdotes.
    #[prop(default = bundled_config())]
    config: AppConfig,
) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let store = RwSignal::new(config.store().unwrap_or_else(|err| {
        tracing::error!(%err, "seed anecdotes rejected, using defaults");
        AnecdoteStore::default()
    }));

    // A refused creation is logged by the store and shows no notification.
    let add_new = Callback::new(move |new: NewAnecdote| {
        store.try_update(|s| s.add_new(new).ok()).flatten()
    });

    // Unknown ids are logged by the store and otherwise ignored.
    let vote = Callback::new(move |id: AnecdoteId| {
        store.update(|s| {
            let _ = s.vote(id);
        });
    });

    let title = config.app.title.clone();

    view! {
      <Title text=title.clone() />

      <Router>
        <main>
          <h1>{title}</h1>
          <Menu
            store=store
            on_create=add_new
            on_vote=vote
            notification_timeout=config.notification_timeout()
          />
        </main>
      </Router>
      <Footer />
    }
}
