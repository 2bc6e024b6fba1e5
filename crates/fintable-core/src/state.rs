//! Pipeline state machine.
//!
//! [`PipelineState`] holds the fetched dataset, the criteria and the request
//! status. Loading moves `Idle -> Loading -> {Ready, Failed}`; only a new
//! fetch generation leaves `Ready` or `Failed`. Every view is derived from
//! scratch by [`PipelineState::derive_view`].

use tracing::{debug, warn};

use crate::criteria::{FilterCriteria, SortCriteria, SortKey};
use crate::error::{FetchError, InputError, Result};
use crate::filter::filter_records;
use crate::sort::sort_records;
use crate::types::FinancialRecord;

/// Request status and, once resolved, its outcome.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState {
    /// No fetch started yet.
    #[default]
    Idle,
    /// A fetch is outstanding.
    Loading,
    /// The dataset, in the order the provider returned it.
    Ready(Vec<FinancialRecord>),
    /// The fetch failed.
    Failed(FetchError),
}

/// Identifies one fetch attempt. Only the latest ticket may complete.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct FetchTicket {
    generation: u64,
}

impl FetchTicket {
    /// Sequence number of the attempt.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

/// A user input that changes the criteria or the panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ControlEvent {
    /// Show or hide the filter panel.
    ToggleFilters,
    /// Select the first year of the year range.
    SetYearStart(i32),
    /// Select the last year of the year range.
    SetYearEnd(i32),
    /// Edit the revenue minimum (free-form text).
    SetRevenueMin(String),
    /// Edit the revenue maximum (free-form text).
    SetRevenueMax(String),
    /// Edit the net income minimum (free-form text).
    SetNetIncomeMin(String),
    /// Edit the net income maximum (free-form text).
    SetNetIncomeMax(String),
    /// Click a column header.
    SortBy(SortKey),
    /// Restore the default filter criteria.
    ResetFilters,
}

/// What the table area should show.
#[derive(Clone, Debug, PartialEq)]
pub enum View {
    /// Waiting for the dataset.
    Loading,
    /// The fetch failed with this message.
    Failed(String),
    /// Nothing survived the filters, or the dataset was empty.
    Empty,
    /// Filtered and sorted rows.
    Table(Vec<FinancialRecord>),
}

/// Explicit state container for one table.
#[derive(Clone, Debug, Default)]
pub struct PipelineState {
    load: LoadState,
    generation: u64,
    filters: FilterCriteria,
    sort: SortCriteria,
    show_filters: bool,
}

impl PipelineState {
    /// Creates an idle pipeline with default criteria.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an idle pipeline with the given criteria.
    #[must_use]
    pub fn with_criteria(filters: FilterCriteria, sort: SortCriteria) -> Self {
        Self {
            filters,
            sort,
            ..Default::default()
        }
    }

    /// Current request status.
    #[must_use]
    pub const fn load_state(&self) -> &LoadState {
        &self.load
    }

    /// Current filter criteria.
    #[must_use]
    pub const fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    /// Current sort criteria.
    #[must_use]
    pub const fn sort(&self) -> &SortCriteria {
        &self.sort
    }

    /// Whether the filter panel is shown.
    #[must_use]
    pub const fn show_filters(&self) -> bool {
        self.show_filters
    }

    /// Starts a new fetch attempt, superseding any outstanding one.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.load = LoadState::Loading;
        debug!(generation = self.generation, "Fetch started");
        FetchTicket {
            generation: self.generation,
        }
    }

    /// Resolves the attempt identified by `ticket`.
    ///
    /// Returns false, leaving the state untouched, if a newer attempt has
    /// started since the ticket was issued.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<FinancialRecord>>,
    ) -> bool {
        if ticket.generation != self.generation || self.load != LoadState::Loading {
            debug!(
                generation = ticket.generation,
                latest = self.generation,
                "Discarding stale fetch result"
            );
            return false;
        }

        self.load = match result {
            Ok(records) => {
                debug!(records = records.len(), "Fetch completed");
                LoadState::Ready(records)
            }
            Err(e) => {
                warn!(error = %e, "Fetch failed");
                LoadState::Failed(e)
            }
        };
        true
    }

    /// Applies one user input. Rejected input leaves the criteria unchanged.
    pub fn apply(&mut self, event: ControlEvent) -> std::result::Result<(), InputError> {
        debug!(?event, "Applying control event");
        match event {
            ControlEvent::ToggleFilters => self.show_filters = !self.show_filters,
            ControlEvent::SetYearStart(year) => self.filters.year_range.set_start(year)?,
            ControlEvent::SetYearEnd(year) => self.filters.year_range.set_end(year)?,
            ControlEvent::SetRevenueMin(text) => self.filters.revenue_range.set_min(&text)?,
            ControlEvent::SetRevenueMax(text) => self.filters.revenue_range.set_max(&text)?,
            ControlEvent::SetNetIncomeMin(text) => {
                self.filters.net_income_range.set_min(&text)?;
            }
            ControlEvent::SetNetIncomeMax(text) => {
                self.filters.net_income_range.set_max(&text)?;
            }
            ControlEvent::SortBy(key) => self.sort.select(key),
            ControlEvent::ResetFilters => self.filters = FilterCriteria::default(),
        }
        Ok(())
    }

    /// Applies a batch of inputs as one edit.
    ///
    /// If any event is rejected, the criteria and panel visibility are
    /// restored to what they were before the batch.
    pub fn apply_all(
        &mut self,
        events: impl IntoIterator<Item = ControlEvent>,
    ) -> std::result::Result<(), InputError> {
        let snapshot = (self.filters, self.sort, self.show_filters);
        let applied = events.into_iter().try_for_each(|event| self.apply(event));
        if applied.is_err() {
            (self.filters, self.sort, self.show_filters) = snapshot;
        }
        applied
    }

    /// Derives the view from the dataset and criteria.
    #[must_use]
    pub fn derive_view(&self) -> View {
        match &self.load {
            LoadState::Idle | LoadState::Loading => View::Loading,
            LoadState::Failed(e) => View::Failed(e.to_string()),
            LoadState::Ready(records) => {
                let filtered = filter_records(records, &self.filters);
                let sorted = sort_records(&filtered, &self.sort);
                if sorted.is_empty() {
                    View::Empty
                } else {
                    View::Table(sorted)
                }
            }
        }
    }
}
