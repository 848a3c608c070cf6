//! End-to-end session tests.
//!
//! These tests drive a whole page session through the public API: seeded
//! store, creation with notification, routing to the new record, voting.

use anecdotes_core::{
    Anecdote, AnecdoteId, AnecdoteStore, AppConfig, AppRoute, CoreError, FieldController,
    InputKind, NewAnecdote, Notifier, created_message,
};

#[test]
fn test_seeded_vote_example() {
    let mut store = AnecdoteStore::default();

    store.vote(AnecdoteId::new(1)).expect("seed 1 exists");

    let first = store.find_by_id(AnecdoteId::new(1)).expect("seed 1");
    let second = store.find_by_id(AnecdoteId::new(2)).expect("seed 2");
    assert_eq!(first.votes, 1);
    assert_eq!(second.votes, 0);
    assert_eq!(
        second.content,
        "Premature optimization is the root of all evil"
    );
}

#[test]
fn test_create_flow() {
    let config = AppConfig::default();
    let mut store = config.store().expect("default seeds are valid");
    let mut notifier = Notifier::new();

    let mut content = FieldController::new(InputKind::Text);
    let mut author = FieldController::new(InputKind::Text);
    let mut info = FieldController::new(InputKind::Text);
    content.set("Simplicity is prerequisite for reliability");
    author.set("Edsger W. Dijkstra");
    info.set("https://www.cs.utexas.edu/users/EWD/");

    let before = store.len();
    let id = store.add_new(NewAnecdote::new(
        content.value(),
        author.value(),
        info.value(),
    ))
    .expect("ids left");
    let ticket = notifier.show(created_message(content.value()));

    assert_eq!(store.len(), before + 1);
    assert_eq!(
        notifier.text(),
        "A new anecdote \"Simplicity is prerequisite for reliability\" created!"
    );

    // The list links to the new record and the link resolves back to it.
    let link = AppRoute::Detail(id).path();
    let route = AppRoute::parse(&link).expect("detail link parses");
    let shown = store
        .find_by_id(route.anecdote_id().expect("detail route"))
        .expect("new record is reachable");
    assert_eq!(shown.author, "Edsger W. Dijkstra");
    assert_eq!(shown.votes, 0);

    // Timer fires.
    assert!(notifier.expire(ticket));
    assert_eq!(notifier.text(), "");

    content.reset();
    author.reset();
    info.reset();
    assert!(content.value().is_empty() && author.value().is_empty() && info.value().is_empty());
}

#[test]
fn test_back_to_back_creations_keep_latest_notification() {
    let mut store = AnecdoteStore::default();
    let mut notifier = Notifier::new();

    store.add_new(NewAnecdote::new("first", "a", "i")).unwrap();
    let first = notifier.show(created_message("first"));
    store.add_new(NewAnecdote::new("second", "b", "i")).unwrap();
    let second = notifier.show(created_message("second"));

    // The first timer fires while the second message is still fresh.
    notifier.expire(first);
    assert_eq!(notifier.text(), "A new anecdote \"second\" created!");

    notifier.expire(second);
    assert_eq!(notifier.text(), "");
}

#[test]
fn test_unknown_detail_route_is_not_found() {
    let store = AnecdoteStore::default();
    let route = AppRoute::parse("/anecdotes/4242").expect("numeric id parses");

    let err = store
        .find_by_id(route.anecdote_id().expect("detail route"))
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "No anecdote with id 4242");
}

#[test]
fn test_ids_stay_unique_across_many_creations() {
    let mut store = AnecdoteStore::default();
    let mut ids: Vec<AnecdoteId> = store.iter().map(|a| a.id).collect();

    for n in 0..100 {
        let id = store
            .add_new(NewAnecdote::new(format!("n{n}"), "x", "y"))
            .expect("ids left");
        ids.push(id);
    }

    let mut sorted = ids.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), ids.len());
}

#[test]
fn test_creation_refused_once_ids_run_out() {
    let last = Anecdote::new(AnecdoteId::new(u32::MAX), "last", "x", "y");
    let mut store = AnecdoteStore::from_seeds(vec![last]).expect("single seed");

    let err = store.add_new(NewAnecdote::new("one more", "x", "y")).unwrap_err();
    assert!(matches!(err, CoreError::IdsExhausted { .. }));
    assert_eq!(store.len(), 1);
    assert_eq!(store.list_all()[0].content, "last");
}
