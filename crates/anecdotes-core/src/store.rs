//! In-memory anecdote collection for one session.

use std::collections::HashSet;

use crate::{
    anecdote::{Anecdote, AnecdoteId, NewAnecdote, default_seeds},
    error::{CoreError, Result},
};

/// Hands out identifiers in increasing order.
///
/// Every identifier is strictly greater than the ones handed out before it
/// and than every identifier the generator was seeded past. Once `u32::MAX`
/// has been handed out the generator is exhausted and refuses further ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdGenerator {
    next: Option<u32>,
}

impl IdGenerator {
    /// Start handing out identifiers after `last`.
    pub fn after(last: Option<AnecdoteId>) -> Self {
        Self {
            next: last.map_or(Some(1), |id| id.get().checked_add(1)),
        }
    }

    /// Take the next identifier.
    pub fn next_id(&mut self) -> Result<AnecdoteId> {
        let Some(raw) = self.next else {
            return Err(CoreError::IdsExhausted {
                last: AnecdoteId::new(u32::MAX),
            });
        };

        self.next = raw.checked_add(1);
        Ok(AnecdoteId::new(raw))
    }

    /// Whether another identifier can be handed out.
    pub fn is_exhausted(&self) -> bool {
        self.next.is_none()
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::after(None)
    }
}

/// Ordered collection of anecdotes owned by the root of the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnecdoteStore {
    anecdotes: Vec<Anecdote>,
    ids: IdGenerator,
}

impl AnecdoteStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            anecdotes: Vec::new(),
            ids: IdGenerator::default(),
        }
    }

    /// Create a store holding `seeds` in the given order.
    ///
    /// Fails if two seeds share an identifier.
    pub fn from_seeds(seeds: Vec<Anecdote>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(seeds.len());
        for anecdote in &seeds {
            if !seen.insert(anecdote.id) {
                return Err(CoreError::DuplicateId { id: anecdote.id });
            }
        }

        let last = seeds.iter().map(|a| a.id).max();
        Ok(Self {
            anecdotes: seeds,
            ids: IdGenerator::after(last),
        })
    }

    /// Append a new anecdote and return its identifier.
    ///
    /// Fails without touching the collection once identifiers run out.
    pub fn add_new(&mut self, new: NewAnecdote) -> Result<AnecdoteId> {
        let id = self.ids.next_id().inspect_err(|err| {
            tracing::error!(%err, "anecdote not created");
        })?;
        self.anecdotes.push(new.into_anecdote(id));
        tracing::info!(%id, "anecdote created");
        Ok(id)
    }

    /// Add one vote to the anecdote with `id`.
    ///
    /// The record is replaced by a copy with the incremented count. An
    /// unknown `id` leaves the collection untouched.
    pub fn vote(&mut self, id: AnecdoteId) -> Result<&Anecdote> {
        let Some(index) = self.position(id) else {
            tracing::warn!(%id, "vote for unknown anecdote ignored");
            return Err(CoreError::not_found(id));
        };

        let voted = self.anecdotes[index].voted();
        tracing::debug!(%id, votes = voted.votes, "vote recorded");
        self.anecdotes[index] = voted;
        Ok(&self.anecdotes[index])
    }

    /// All anecdotes in insertion order.
    pub fn list_all(&self) -> &[Anecdote] {
        &self.anecdotes
    }

    /// Look up an anecdote by identifier.
    pub fn find_by_id(&self, id: AnecdoteId) -> Result<&Anecdote> {
        self.anecdotes
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| CoreError::not_found(id))
    }

    pub fn len(&self) -> usize {
        self.anecdotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anecdotes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Anecdote> {
        self.anecdotes.iter()
    }

    fn position(&self, id: AnecdoteId) -> Option<usize> {
        self.anecdotes.iter().position(|a| a.id == id)
    }
}

impl Default for AnecdoteStore {
    /// A store holding the two canonical seeds.
    fn default() -> Self {
        let seeds = default_seeds();
        let last = seeds.iter().map(|a| a.id).max();
        Self {
            anecdotes: seeds,
            ids: IdGenerator::after(last),
        }
    }
}

impl<'a> IntoIterator for &'a AnecdoteStore {
    type Item = &'a Anecdote;
    type IntoIter = std::slice::Iter<'a, Anecdote>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
