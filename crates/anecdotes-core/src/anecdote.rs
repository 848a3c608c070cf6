//! The anecdote record and its identifier.

use std::{fmt, num::ParseIntError, str::FromStr};

use serde::{Deserialize, Serialize};

/// Unique identifier of an anecdote within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnecdoteId(u32);

impl AnecdoteId {
    /// Wrap a raw identifier.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw numeric value.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for AnecdoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AnecdoteId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl From<u32> for AnecdoteId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

/// A short text record with author, reference link, and vote count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anecdote {
    /// Identifier assigned at creation.
    pub id: AnecdoteId,

    /// The anecdote text.
    pub content: String,

    /// Who said or wrote it.
    pub author: String,

    /// Reference URL for more information.
    pub info: String,

    /// Number of votes received.
    #[serde(default)]
    pub votes: u32,
}

impl Anecdote {
    /// Create an anecdote with zero votes.
    pub fn new(
        id: AnecdoteId,
        content: impl Into<String>,
        author: impl Into<String>,
        info: impl Into<String>,
    ) -> Self {
        Self {
            id,
            content: content.into(),
            author: author.into(),
            info: info.into(),
            votes: 0,
        }
    }

    /// A copy of this anecdote carrying one more vote.
    #[must_use]
    pub fn voted(&self) -> Self {
        Self {
            votes: self.votes.saturating_add(1),
            ..self.clone()
        }
    }
}

/// Payload submitted by the creation form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAnecdote {
    pub content: String,
    pub author: String,
    pub info: String,
}

impl NewAnecdote {
    pub fn new(
        content: impl Into<String>,
        author: impl Into<String>,
        info: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            author: author.into(),
            info: info.into(),
        }
    }

    /// Turn the payload into a record; votes always start at zero.
    pub fn into_anecdote(self, id: AnecdoteId) -> Anecdote {
        Anecdote::new(id, self.content, self.author, self.info)
    }
}

/// The two anecdotes every session starts with.
pub fn default_seeds() -> Vec<Anecdote> {
    vec![
        Anecdote::new(
            AnecdoteId::new(1),
            "If it hurts, do it more often",
            "Jez Humble",
            "https://martinfowler.com/bliki/FrequencyReducesDifficulty.html",
        ),
        Anecdote::new(
            AnecdoteId::new(2),
            "Premature optimization is the root of all evil",
            "Donald Knuth",
            "http://wiki.c2.com/?PrematureOptimization",
        ),
    ]
}
