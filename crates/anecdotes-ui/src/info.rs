//! Static pages: about and footer.

use leptos::prelude::*;

/// Link to the course the application was written for.
pub const COURSE_URL: &str = "https://fullstackopen.com/";

/// Link to the reference source of the application.
pub const SOURCE_URL: &str =
    "https://github.com/fullstack-hy2020/routed-anecdotes/blob/master/src/App.js";

#[component]
pub fn About() -> impl IntoView {
    view! {
      <div class="about">
        <h2>"About anecdote app"</h2>
        <p>"According to Wikipedia:"</p>

        <em>
          "An anecdote is a brief, revealing account of an individual person or an incident.
          Occasionally humorous, anecdotes differ from jokes because their primary purpose is not simply to provoke laughter but to reveal a truth more general than the brief tale itself,
          such as to characterize a person by delineating a specific quirk or trait, to communicate an abstract idea about a person, place, or thing through the concrete details of a short narrative.
          An anecdote is \"a story with a point.\""
        </em>

        <p>
          "Software engineering is full of excellent anecdotes, at this app you can find the best and add more."
        </p>
      </div>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
      <footer class="footer">
        "Anecdote app for " <a href=COURSE_URL>"Full Stack Open"</a> ". See "
        <a href=SOURCE_URL>{SOURCE_URL}</a> " for the source code."
      </footer>
    }
}
