//! Form field hook and its input component.

use anecdotes_core::{FieldController, InputKind};
use leptos::prelude::*;

/// Reactive handle to one form field.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    state: RwSignal<FieldController>,
}

/// Create a field of the given input kind, initially empty.
pub fn use_field(kind: InputKind) -> Field {
    Field {
        state: RwSignal::new(FieldController::new(kind)),
    }
}

impl Field {
    /// Current value (tracked).
    pub fn value(&self) -> String {
        self.state.with(|field| field.value().to_string())
    }

    pub fn kind(&self) -> InputKind {
        self.state.with_untracked(|field| field.kind())
    }

    pub fn set(&self, value: String) {
        self.state.update(|field| field.set(value));
    }

    /// Empty the field.
    pub fn reset(&self) {
        self.state.update(FieldController::reset);
    }
}

/// Text input bound to a [`Field`].
#[component]
pub fn FieldInput(
    /// The field backing this input.
    field: Field,
    /// Form control name.
    name: &'static str,
) -> impl IntoView {
    view! {
      <input
        type=field.kind().as_str()
        name=name
        prop:value=move || field.value()
        on:input=move |ev| field.set(event_target_value(&ev))
      />
    }
}
