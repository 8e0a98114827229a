// SPDX-License-Identifier: MPL-2.0
//! The authoritative media collection.
//!
//! Fetches are tagged with a [`FetchTicket`] when they are issued. A
//! completion is applied only when its ticket is newer than the one behind
//! the collection currently held, so a slow response can never overwrite a
//! collection that a later, faster fetch already refreshed. Replacement is
//! a single pointer swap; readers never see a half-updated collection.

use crate::domain::error::FetchError;
use crate::domain::media::MediaItem;
use std::sync::Arc;

/// Identifies one collection fetch. Tickets grow monotonically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(u64);

impl FetchTicket {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// What [`CollectionStore::complete_fetch`] did with a completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The collection was replaced.
    Applied,
    /// A newer fetch already landed; the result was discarded.
    Stale,
    /// The fetch failed; the previous collection is kept.
    Failed(FetchError),
}

/// Holds the current collection and its freshness.
#[derive(Debug, Clone, Default)]
pub struct CollectionStore {
    items: Arc<[Arc<MediaItem>]>,
    next_ticket: u64,
    applied: Option<FetchTicket>,
    revision: u64,
    last_error: Option<FetchError>,
}

impl CollectionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the ticket for a new fetch.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.next_ticket += 1;
        let ticket = FetchTicket(self.next_ticket);
        log::debug!("collection fetch #{} issued", ticket.0);
        ticket
    }

    /// Records the result of the fetch tagged `ticket`.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<MediaItem>, FetchError>,
    ) -> FetchOutcome {
        if self.applied.is_some_and(|applied| applied >= ticket) {
            log::debug!(
                "collection fetch #{} discarded, #{} already applied",
                ticket.0,
                self.applied.map_or(0, FetchTicket::value)
            );
            return FetchOutcome::Stale;
        }

        match result {
            Ok(items) => {
                self.items = items.into_iter().map(Arc::new).collect();
                self.applied = Some(ticket);
                self.revision += 1;
                self.last_error = None;
                log::info!(
                    "collection fetch #{} applied ({} items)",
                    ticket.0,
                    self.items.len()
                );
                FetchOutcome::Applied
            }
            Err(err) => {
                log::warn!("collection fetch #{} failed: {err}", ticket.0);
                self.last_error = Some(err.clone());
                FetchOutcome::Failed(err)
            }
        }
    }

    /// The current collection, shared.
    #[must_use]
    pub fn items(&self) -> &Arc<[Arc<MediaItem>]> {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Bumped every time the collection is replaced.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether any fetch has been applied yet.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.applied.is_some()
    }

    /// The most recent failure, cleared by the next applied fetch.
    #[must_use]
    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }

    /// Whether fetches newer than the applied one are still outstanding.
    #[must_use]
    pub fn is_fetching(&self) -> bool {
        self.applied.map_or(0, FetchTicket::value) < self.next_ticket
    }
}
