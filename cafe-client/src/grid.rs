//! Grid controller
//!
//! Owns the row set of one resource and drives the fetch/filter/mutate
//! cycle:
//!
//! ```text
//! Loading ──ok──▶ Ready(rows)
//!    │               │ filter change / mutation
//!    └──err──▶ Error ─┴──────────────▶ Loading
//! ```
//!
//! Every fetch carries a [`FetchTicket`]. Only the outcome of the most
//! recently issued ticket is applied, so a slow response to an old filter
//! can never overwrite the rows of a newer one.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::filter::FilterState;
use crate::http::HttpClient;
use crate::resource::{Resource, ResourceClient};
use crate::session::EditSession;
use crate::{ClientError, ClientResult};

/// Rows per page
pub const PAGE_SIZE: usize = 10;

/// Whole days from `start_date` to `today`.
///
/// A missing start date counts as zero days, as does a start date in the
/// future.
pub fn days_worked(start_date: Option<NaiveDate>, today: NaiveDate) -> i64 {
    match start_date {
        Some(start) => (today - start).num_days().max(0),
        None => 0,
    }
}

/// Load state of a grid
#[derive(Debug, Clone, PartialEq)]
pub enum GridState<T> {
    Loading,
    Ready(Vec<T>),
    /// Fetch failed; holds the message shown in place of the grid
    Error(String),
}

impl<T> GridState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn rows(&self) -> &[T] {
        match self {
            Self::Ready(rows) => rows,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Monotonic fetch sequence number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

/// A list fetch that has been issued but not yet run
#[derive(Debug)]
pub struct PendingFetch<R: Resource, H: HttpClient> {
    ticket: FetchTicket,
    filter: Option<String>,
    client: ResourceClient<R, H>,
}

impl<R: Resource, H: HttpClient> PendingFetch<R, H> {
    pub fn ticket(&self) -> FetchTicket {
        self.ticket
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    pub async fn run(self) -> FetchOutcome<R> {
        let result = self.client.list(self.filter.as_deref()).await;
        FetchOutcome {
            ticket: self.ticket,
            filter: self.filter,
            result,
        }
    }
}

/// Completed fetch, waiting to be applied
#[derive(Debug)]
pub struct FetchOutcome<R: Resource> {
    ticket: FetchTicket,
    filter: Option<String>,
    result: ClientResult<Vec<R::Record>>,
}

impl<R: Resource> FetchOutcome<R> {
    pub fn ticket(&self) -> FetchTicket {
        self.ticket
    }
}

/// Row state for one resource grid
#[derive(Debug)]
pub struct GridController<R: Resource, H: HttpClient + Clone> {
    client: ResourceClient<R, H>,
    state: GridState<R::Record>,
    filter: FilterState,
    last_issued: u64,
    pending_delete: Option<String>,
}

impl<R: Resource, H: HttpClient + Clone> GridController<R, H> {
    pub fn new(client: ResourceClient<R, H>) -> Self {
        Self {
            client,
            state: GridState::Loading,
            filter: FilterState::new(),
            last_issued: 0,
            pending_delete: None,
        }
    }

    pub fn client(&self) -> &ResourceClient<R, H> {
        &self.client
    }

    pub fn state(&self) -> &GridState<R::Record> {
        &self.state
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn filter_mut(&mut self) -> &mut FilterState {
        &mut self.filter
    }

    /// Current rows; empty while loading or after a failed fetch
    pub fn rows(&self) -> &[R::Record] {
        self.state.rows()
    }

    pub fn find(&self, id: &str) -> Option<&R::Record> {
        self.rows().iter().find(|r| R::id(r) == id)
    }

    // ========== Fetching ==========

    /// Issue a new ticket for the current filter and enter `Loading`.
    ///
    /// Any fetch issued earlier becomes stale.
    pub fn begin_fetch(&mut self) -> PendingFetch<R, H> {
        self.last_issued += 1;
        self.state = GridState::Loading;
        PendingFetch {
            ticket: FetchTicket(self.last_issued),
            filter: self.filter.selected().map(str::to_owned),
            client: self.client.clone(),
        }
    }

    /// Apply a completed fetch. Returns `false` if it was superseded.
    pub fn apply(&mut self, outcome: FetchOutcome<R>) -> bool {
        if outcome.ticket.0 != self.last_issued {
            tracing::debug!(
                resource = R::NAME,
                ticket = outcome.ticket.0,
                latest = self.last_issued,
                "discarding superseded fetch"
            );
            return false;
        }

        match outcome.result {
            Ok(rows) => {
                if outcome.filter.is_none()
                    && let Some(options) = R::filter_options(&rows)
                {
                    self.filter.replace_options(options);
                }
                self.state = GridState::Ready(dedupe_by_id::<R>(rows));
            }
            Err(e) => {
                tracing::warn!(resource = R::NAME, error = %e, "failed to fetch rows");
                self.state = GridState::Error(e.to_string());
            }
        }
        true
    }

    /// Replace the row set with the server's current state
    pub async fn refresh(&mut self) -> &GridState<R::Record> {
        let outcome = self.begin_fetch().run().await;
        self.apply(outcome);
        &self.state
    }

    /// Change the filter (empty for "all") and refetch.
    ///
    /// Reselecting the current value refetches only when the grid is not
    /// `Ready`.
    pub async fn select(&mut self, value: impl Into<String>) -> &GridState<R::Record> {
        let changed = self.filter.set_selected(value);
        if changed || !matches!(self.state, GridState::Ready(_)) {
            self.refresh().await;
        }
        &self.state
    }

    // ========== Paging ==========

    pub fn page_count(&self) -> usize {
        self.rows().len().div_ceil(PAGE_SIZE)
    }

    /// Rows of the zero-based page `index`; empty past the end
    pub fn page(&self, index: usize) -> &[R::Record] {
        let rows = self.rows();
        let start = index.saturating_mul(PAGE_SIZE).min(rows.len());
        let end = (start + PAGE_SIZE).min(rows.len());
        &rows[start..end]
    }

    // ========== Mutations ==========

    /// Submit an open edit session and refresh on success.
    ///
    /// Dropping the returned future mid-request leaves the session open
    /// and ready for another submit.
    pub async fn submit(&mut self, session: &mut EditSession<R>) -> ClientResult<R::Record> {
        let request = session.begin_submit()?;
        let mut in_flight = InFlight {
            session,
            settled: false,
        };
        let result = request.send(&self.client).await;
        in_flight.settled = true;
        let record = in_flight.session.complete(result)?;
        self.refresh().await;
        Ok(record)
    }

    /// First step of a delete: remember the id and return the prompt to
    /// confirm
    pub fn request_delete(&mut self, id: impl Into<String>) -> &'static str {
        self.pending_delete = Some(id.into());
        R::DELETE_PROMPT
    }

    /// Id awaiting confirmation
    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Execute the pending delete, then refresh
    pub async fn confirm_delete(&mut self) -> ClientResult<()> {
        let id = self
            .pending_delete
            .take()
            .ok_or(ClientError::NoPendingDelete)?;
        self.client.remove(&id).await?;
        self.refresh().await;
        Ok(())
    }
}

/// Abandons the submit if dropped before its result was recorded
struct InFlight<'a, R: Resource> {
    session: &'a mut EditSession<R>,
    settled: bool,
}

impl<R: Resource> Drop for InFlight<'_, R> {
    fn drop(&mut self) {
        if !self.settled {
            self.session.abandon_submit();
        }
    }
}

fn dedupe_by_id<R: Resource>(rows: Vec<R::Record>) -> Vec<R::Record> {
    let mut seen = HashSet::with_capacity(rows.len());
    let mut unique = Vec::with_capacity(rows.len());
    for row in rows {
        if seen.insert(R::id(&row).to_string()) {
            unique.push(row);
        } else {
            tracing::warn!(resource = R::NAME, id = R::id(&row), "duplicate row id in response");
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::Cafes;
    use shared::Cafe;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_worked() {
        let today = date(2024, 3, 11);
        assert_eq!(days_worked(None, today), 0);
        assert_eq!(days_worked(Some(today), today), 0);
        assert_eq!(days_worked(Some(date(2024, 3, 1)), today), 10);
        assert_eq!(days_worked(Some(date(2023, 3, 11)), today), 366);
        assert_eq!(days_worked(Some(date(2024, 3, 20)), today), 0);
    }

    #[test]
    fn test_dedupe_keeps_first() {
        let cafe = |id: &str, name: &str| Cafe {
            id: id.into(),
            name: name.into(),
            description: None,
            logo: None,
            location: "Orchard".into(),
            employees: 0,
        };
        let rows = dedupe_by_id::<Cafes>(vec![
            cafe("a", "First A"),
            cafe("b", "Only B"),
            cafe("a", "Second A"),
        ]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "First A");
    }

    #[test]
    fn test_grid_state_accessors() {
        let state: GridState<u8> = GridState::Error("boom".into());
        assert!(state.rows().is_empty());
        assert_eq!(state.error(), Some("boom"));
        assert!(GridState::<u8>::Loading.is_loading());
    }
}
