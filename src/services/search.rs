//! The search pipeline: one remote read per skill query, then a client-side
//! location filter re-derived from the cached result set.

use std::sync::Arc;

use crate::backend::ProviderReader;
use crate::domain::provider::ProviderRecord;
use crate::services::{ServiceError, ServiceResult};

/// Retrieves all provider listings and, when `query` is non-empty, retains
/// only those with at least one skill containing it case-insensitively.
///
/// Order is backend order; no ranking is applied. One remote read, no writes.
pub async fn fetch_providers<R>(backend: &R, query: &str) -> ServiceResult<Vec<ProviderRecord>>
where
    R: ProviderReader + ?Sized + Sync,
{
    let records = backend.list_providers().await.map_err(ServiceError::from)?;
    if query.is_empty() {
        return Ok(records);
    }
    let needle = query.to_lowercase();
    Ok(records
        .into_iter()
        .filter(|record| {
            record
                .skills
                .iter()
                .any(|skill| skill.to_lowercase().contains(&needle))
        })
        .collect())
}

/// Narrows `records` to those with at least one location containing `filter`
/// as a case-insensitive substring.
///
/// Pure and deterministic. An empty or whitespace-only filter returns the
/// input unchanged, same elements in the same order; no matches yields an
/// empty vec, never an error.
pub fn filter_by_location(records: &[ProviderRecord], filter: &str) -> Vec<ProviderRecord> {
    if filter.trim().is_empty() {
        return records.to_vec();
    }
    let needle = filter.to_lowercase();
    records
        .iter()
        .filter(|record| {
            record
                .locations
                .iter()
                .any(|location| location.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Where a search session stands between user interactions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchState {
    /// Nothing fetched yet.
    Idle,
    /// A fetch has been dispatched and not yet applied.
    Fetching,
    /// The latest fetch succeeded.
    Fetched,
    /// The latest fetch failed; the result list is empty.
    FetchFailed,
    /// The location filter has been edited since the latest fetch.
    Filtered,
}

/// Handle for one dispatched fetch, carrying its sequence number.
#[derive(Clone, Debug)]
pub struct FetchTicket {
    seq: u64,
    query: String,
}

impl FetchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

/// One search session: the cached fetch result, the persisting location
/// filter, and the list currently derived for display.
///
/// Fetches are tagged with a monotonically increasing sequence number;
/// applying an outcome older than the latest dispatched fetch is a no-op, so
/// overlapping fetches resolve last-request-wins rather than
/// last-resolved-wins. All state is owned by the session and mutated only
/// through `&mut self`.
pub struct SearchSession<R: ?Sized> {
    backend: Arc<R>,
    state: SearchState,
    fetched: Vec<ProviderRecord>,
    visible: Vec<ProviderRecord>,
    location_filter: String,
    dispatched: u64,
}

impl<R> SearchSession<R>
where
    R: ProviderReader + ?Sized + Sync,
{
    pub fn new(backend: Arc<R>) -> Self {
        Self {
            backend,
            state: SearchState::Idle,
            fetched: Vec::new(),
            visible: Vec::new(),
            location_filter: String::new(),
            dispatched: 0,
        }
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    /// The list to display: the cached fetch narrowed by the current
    /// location filter. Always a subset of [`Self::fetched`].
    pub fn results(&self) -> &[ProviderRecord] {
        &self.visible
    }

    /// The cached result of the latest applied fetch.
    pub fn fetched(&self) -> &[ProviderRecord] {
        &self.fetched
    }

    pub fn location_filter(&self) -> &str {
        &self.location_filter
    }

    /// Fetches providers for `query` and applies the outcome. A backend
    /// failure is logged and presented as an empty result list.
    pub async fn search(&mut self, query: &str) -> &[ProviderRecord] {
        let ticket = self.begin_fetch(query);
        let backend = Arc::clone(&self.backend);
        let outcome = fetch_providers(backend.as_ref(), ticket.query()).await;
        self.apply_fetch(ticket, outcome);
        self.results()
    }

    /// Registers a fetch dispatch and returns its ticket. Use together with
    /// [`fetch_providers`] and [`Self::apply_fetch`] when fetches may
    /// overlap.
    pub fn begin_fetch(&mut self, query: impl Into<String>) -> FetchTicket {
        self.dispatched += 1;
        self.state = SearchState::Fetching;
        FetchTicket {
            seq: self.dispatched,
            query: query.into(),
        }
    }

    /// Applies a fetch outcome. Returns `false` when the outcome is stale,
    /// i.e. a newer fetch was dispatched after this one; stale outcomes leave
    /// the session untouched.
    ///
    /// The current location filter persists across fetches and is re-applied
    /// to the fresh list.
    pub fn apply_fetch(
        &mut self,
        ticket: FetchTicket,
        outcome: ServiceResult<Vec<ProviderRecord>>,
    ) -> bool {
        if ticket.seq < self.dispatched {
            log::debug!(
                "Discarding stale fetch #{} (latest dispatched #{})",
                ticket.seq,
                self.dispatched
            );
            return false;
        }
        match outcome {
            Ok(records) => {
                self.fetched = records;
                self.visible = filter_by_location(&self.fetched, &self.location_filter);
                self.state = SearchState::Fetched;
            }
            Err(err) => {
                log::error!("Failed to fetch providers: {err}");
                self.fetched.clear();
                self.visible.clear();
                self.state = SearchState::FetchFailed;
            }
        }
        true
    }

    /// Updates the location filter and re-derives the visible list from the
    /// cached fetch, without any network activity.
    pub fn set_location_filter(&mut self, filter: impl Into<String>) {
        self.location_filter = filter.into();
        self.visible = filter_by_location(&self.fetched, &self.location_filter);
        if matches!(self.state, SearchState::Fetched | SearchState::Filtered) {
            self.state = SearchState::Filtered;
        }
    }
}
