//! Creation form for new anecdotes.

use anecdotes_core::{AppRoute, InputKind, NewAnecdote};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::hooks::use_navigate;

use crate::field::{Field, FieldInput, use_field};

/// The three fields of the creation form.
#[derive(Debug, Clone, Copy)]
pub struct AnecdoteForm {
    pub content: Field,
    pub author: Field,
    pub info: Field,
}

/// Create an empty creation form.
pub fn use_anecdote_form() -> AnecdoteForm {
    AnecdoteForm {
        content: use_field(InputKind::Text),
        author: use_field(InputKind::Text),
        info: use_field(InputKind::Text),
    }
}

impl AnecdoteForm {
    /// Payload built from the current field values.
    pub fn submission(&self) -> NewAnecdote {
        NewAnecdote::new(self.content.value(), self.author.value(), self.info.value())
    }

    /// Empty all three fields.
    pub fn reset(&self) {
        self.content.reset();
        self.author.reset();
        self.info.reset();
    }
}

/// Form with content, author, and info fields.
///
/// Submitting hands the payload to `on_submit` and navigates to the list.
/// Reset empties all three fields.
#[component]
pub fn CreateNew(
    /// Receives the submitted anecdote.
    on_submit: Callback<NewAnecdote>,
) -> impl IntoView {
    let navigate = use_navigate();
    let form = use_anecdote_form();

    let submit_and_navigate = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.run(form.submission());
        navigate(&AppRoute::List.path(), Default::default());
    };

    view! {
      <div class="anecdote-create">
        <h2>"create a new anecdote"</h2>
        <form on:submit=submit_and_navigate>
          <div>"content" <FieldInput field=form.content name="content" /></div>
          <div>"author" <FieldInput field=form.author name="author" /></div>
          <div>"url for more info" <FieldInput field=form.info name="info" /></div>
          <button type="submit">"create"</button>
          <button type="button" on:click=move |_| form.reset()>
            "reset"
          </button>
        </form>
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_fields_are_plain_text() {
        let owner = Owner::new();
        owner.with(|| {
            let form = use_anecdote_form();
            for field in [form.content, form.author, form.info] {
                assert_eq!(field.kind(), InputKind::Text);
                assert_eq!(field.kind().as_str(), "text");
            }
        });
    }

    #[test]
    fn test_form_submission_takes_field_values() {
        let owner = Owner::new();
        owner.with(|| {
            let form = use_anecdote_form();
            form.content.set("Talk is cheap. Show me the code.".to_string());
            form.author.set("Linus Torvalds".to_string());
            form.info.set("not checked as a url".to_string());

            let new = form.submission();
            assert_eq!(new.content, "Talk is cheap. Show me the code.");
            assert_eq!(new.author, "Linus Torvalds");
            assert_eq!(new.info, "not checked as a url");
        });
    }

    #[test]
    fn test_form_reset_clears_every_field() {
        let owner = Owner::new();
        owner.with(|| {
            let form = use_anecdote_form();
            form.content.set("a".to_string());
            form.author.set("b".to_string());
            form.info.set("c".to_string());

            form.reset();

            assert_eq!(form.submission(), NewAnecdote::new("", "", ""));
        });
    }
}
