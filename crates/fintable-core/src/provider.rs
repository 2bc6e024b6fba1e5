//! Provider trait for fetching income statements.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    error::Result,
    period::PeriodType,
    types::{FinancialRecord, Symbol},
};

/// A source of income-statement records.
///
/// One call issues one request. Implementations do not retry, and the records
/// come back in whatever order the source returns them.
#[async_trait]
pub trait IncomeStatementProvider: Send + Sync + Debug {
    /// Returns the name of this provider (e.g., "FMP").
    fn name(&self) -> &str;

    /// Returns a description of this provider.
    fn description(&self) -> &str;

    /// Fetches every income statement of `symbol` for the given period type.
    async fn fetch_income_statements(
        &self,
        symbol: &Symbol,
        period_type: PeriodType,
    ) -> Result<Vec<FinancialRecord>>;
}
