//! Runtime configuration resolved once at startup.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use fintable::{
    ControlEvent, FetchError, FilterCriteria, FmpProvider, IncomeStatementProvider, InputError,
    PeriodType, PipelineState, SortCriteria, SortDirection, SortKey, Symbol, ValueRange,
};

use crate::cli::Cli;

/// Endpoint, credentials and request settings.
#[derive(Clone)]
pub(crate) struct Config {
    /// Income-statement endpoint; the symbol is appended verbatim.
    pub(crate) base_url: String,
    /// FMP API key.
    pub(crate) api_key: String,
    /// Request timeout, `None` to wait indefinitely.
    pub(crate) timeout: Option<Duration>,
    /// Ticker to load.
    pub(crate) symbol: Symbol,
    /// Reporting period to load.
    pub(crate) period_type: PeriodType,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout", &self.timeout)
            .field("symbol", &self.symbol)
            .field("period_type", &self.period_type)
            .finish()
    }
}

impl Config {
    /// Read the settings out of the parsed arguments.
    ///
    /// Missing endpoint or key is not an error here; it surfaces when the
    /// request is made.
    pub(crate) fn from_cli(cli: &Cli) -> Self {
        Self {
            base_url: cli.base_url.clone(),
            api_key: cli.api_key.clone(),
            timeout: (cli.timeout_secs > 0).then(|| Duration::from_secs(cli.timeout_secs)),
            symbol: cli.symbol.clone(),
            period_type: cli.period,
        }
    }

    /// Build the provider these settings describe.
    pub(crate) fn provider(&self) -> Result<Arc<dyn IncomeStatementProvider>, FetchError> {
        let mut provider =
            FmpProvider::new(self.api_key.clone()).with_base_url(self.base_url.clone());
        if let Some(timeout) = self.timeout {
            provider = provider.with_timeout(timeout)?;
        }
        Ok(Arc::new(provider))
    }
}

/// Build the initial pipeline state from the one-shot flags.
pub(crate) fn initial_state(cli: &Cli) -> Result<PipelineState, InputError> {
    let mut filters = FilterCriteria {
        revenue_range: ValueRange::parse(&cli.revenue_min, &cli.revenue_max)?,
        net_income_range: ValueRange::parse(&cli.net_income_min, &cli.net_income_max)?,
        ..Default::default()
    };
    if let Some(year) = cli.from_year {
        filters.year_range.set_start(year)?;
    }
    if let Some(year) = cli.to_year {
        filters.year_range.set_end(year)?;
    }

    let direction = if cli.desc {
        SortDirection::Desc
    } else {
        SortDirection::Asc
    };
    let sort = SortCriteria::new(SortKey::from_name(&cli.sort), direction);
    if sort.key == SortKey::Unrecognized {
        tracing::warn!(key = %cli.sort, "Unrecognized sort key, keeping source order");
    }

    let mut state = PipelineState::with_criteria(filters, sort);
    if cli.show_filters {
        state.apply(ControlEvent::ToggleFilters)?;
    }
    Ok(state)
}
