//! Controller that owns one table's state and drives its provider.

use std::sync::Arc;

use tracing::{debug, warn};

use fintable_core::{
    ControlEvent, FetchTicket, FinancialRecord, IncomeStatementProvider, InputError, LoadState,
    PeriodType, PipelineState, Result, Symbol, View,
};

/// Controller for one income-statement table.
///
/// The `Dashboard` owns the [`PipelineState`] and the provider it loads from.
/// Every transition goes through it: loads are tagged with a fetch generation
/// so that a response superseded by a later load is dropped, and user input
/// is applied as [`ControlEvent`]s.
///
/// # Example
///
/// ```rust,ignore
/// let mut dashboard = Dashboard::new(Arc::new(FmpProvider::new(api_key)))
///     .with_symbol(Symbol::new("MSFT"));
///
/// // Run the request elsewhere and hand the outcome back.
/// let pending = dashboard.begin_load();
/// let outcome = pending.run().await;
/// dashboard.finish_load(outcome);
/// ```
pub struct Dashboard {
    provider: Arc<dyn IncomeStatementProvider>,
    symbol: Symbol,
    period_type: PeriodType,
    state: PipelineState,
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("provider", &self.provider.name())
            .field("symbol", &self.symbol)
            .field("period_type", &self.period_type)
            .field("state", &self.state)
            .finish()
    }
}

impl Dashboard {
    /// Create an idle dashboard for the default symbol.
    #[must_use]
    pub fn new(provider: Arc<dyn IncomeStatementProvider>) -> Self {
        Self {
            provider,
            symbol: Symbol::default(),
            period_type: PeriodType::default(),
            state: PipelineState::new(),
        }
    }

    /// Set the symbol to load.
    #[must_use]
    pub fn with_symbol(mut self, symbol: Symbol) -> Self {
        self.symbol = symbol;
        self
    }

    /// Set the reporting period to load.
    #[must_use]
    pub fn with_period(mut self, period_type: PeriodType) -> Self {
        self.period_type = period_type;
        self
    }

    /// Start from the given state instead of defaults.
    #[must_use]
    pub fn with_state(mut self, state: PipelineState) -> Self {
        self.state = state;
        self
    }

    /// Swap the provider, e.g. after the endpoint or key changed.
    ///
    /// The dataset is kept until the next load replaces it.
    pub fn set_provider(&mut self, provider: Arc<dyn IncomeStatementProvider>) {
        debug!(provider = provider.name(), "Provider replaced");
        self.provider = provider;
    }

    /// The symbol being shown.
    #[must_use]
    pub const fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// The pipeline state.
    #[must_use]
    pub const fn state(&self) -> &PipelineState {
        &self.state
    }

    /// Start a load and return the request to run.
    ///
    /// The returned [`PendingLoad`] does not borrow the dashboard, so it can
    /// be awaited on another task while input keeps being applied.
    pub fn begin_load(&mut self) -> PendingLoad {
        let ticket = self.state.begin_fetch();
        debug!(
            provider = self.provider.name(),
            symbol = %self.symbol,
            generation = ticket.generation(),
            "Loading income statements"
        );
        PendingLoad {
            ticket,
            provider: Arc::clone(&self.provider),
            symbol: self.symbol.clone(),
            period_type: self.period_type,
        }
    }

    /// Hand back a finished load. Returns false if it was superseded.
    pub fn finish_load(&mut self, outcome: LoadOutcome) -> bool {
        self.state.complete_fetch(outcome.ticket, outcome.result)
    }

    /// Load the dataset and wait for the result.
    pub async fn load(&mut self) -> &LoadState {
        let outcome = self.begin_load().run().await;
        self.finish_load(outcome);
        self.state.load_state()
    }

    /// Apply one user input.
    pub fn apply(&mut self, event: ControlEvent) -> std::result::Result<(), InputError> {
        self.state.apply(event).inspect_err(|e| {
            warn!(error = %e, "Rejected input");
        })
    }

    /// Apply several inputs as one edit; a rejected input undoes the others.
    pub fn apply_all(
        &mut self,
        events: Vec<ControlEvent>,
    ) -> std::result::Result<(), InputError> {
        self.state.apply_all(events).inspect_err(|e| {
            warn!(error = %e, "Rejected input");
        })
    }

    /// Derive the current view.
    #[must_use]
    pub fn view(&self) -> View {
        self.state.derive_view()
    }
}

/// A load that has been started but not yet run.
#[derive(Debug)]
#[must_use]
pub struct PendingLoad {
    ticket: FetchTicket,
    provider: Arc<dyn IncomeStatementProvider>,
    symbol: Symbol,
    period_type: PeriodType,
}

impl PendingLoad {
    /// Generation this load belongs to.
    pub const fn ticket(&self) -> FetchTicket {
        self.ticket
    }

    /// Issue the request.
    pub async fn run(self) -> LoadOutcome {
        let result = self
            .provider
            .fetch_income_statements(&self.symbol, self.period_type)
            .await;
        LoadOutcome {
            ticket: self.ticket,
            result,
        }
    }
}

/// The result of a [`PendingLoad`], tagged with its generation.
#[derive(Debug)]
pub struct LoadOutcome {
    ticket: FetchTicket,
    result: Result<Vec<FinancialRecord>>,
}

impl LoadOutcome {
    /// Generation this outcome belongs to.
    #[must_use]
    pub const fn ticket(&self) -> FetchTicket {
        self.ticket
    }
}
