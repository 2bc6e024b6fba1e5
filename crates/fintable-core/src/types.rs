//! Core data types for income-statement tables.
//!
//! - [`Symbol`] - Trading symbol/ticker
//! - [`FinancialRecord`] - One reporting period of an income statement

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A trading symbol/ticker.
///
/// Symbols are automatically uppercased on creation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol(String);

impl Symbol {
    /// Symbol used when none is configured.
    pub const DEFAULT: &'static str = "AAPL";

    /// Creates a new symbol from a string, converting to uppercase.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into().trim().to_uppercase())
    }

    /// Returns the symbol as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Symbol {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Symbol {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// One reporting period of an income statement, as served by the API.
///
/// Every numeric field may be missing or `null` upstream, so all of them are
/// optional. Unknown fields in the response are ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRecord {
    /// Period end date, `YYYY-MM-DD`.
    pub date: String,
    /// Ticker the statement belongs to.
    #[serde(default)]
    pub symbol: Option<String>,
    /// Fiscal year as reported by the API.
    #[serde(default)]
    pub calendar_year: Option<String>,
    /// Currency of the monetary fields.
    #[serde(default)]
    pub reported_currency: Option<String>,
    /// Date the statement was filed.
    #[serde(default)]
    pub filling_date: Option<String>,
    /// Total revenue.
    #[serde(default)]
    pub revenue: Option<f64>,
    /// Net income.
    #[serde(default)]
    pub net_income: Option<f64>,
    /// Gross profit.
    #[serde(default)]
    pub gross_profit: Option<f64>,
    /// Operating income.
    #[serde(default)]
    pub operating_income: Option<f64>,
    /// Basic earnings per share.
    #[serde(default)]
    pub eps: Option<f64>,
    /// Diluted earnings per share.
    #[serde(default, rename = "epsdiluted", alias = "epsDiluted")]
    pub eps_diluted: Option<f64>,
}

impl FinancialRecord {
    /// Creates a record for the given period end date with no figures.
    #[must_use]
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            ..Default::default()
        }
    }

    /// Sets the revenue.
    #[must_use]
    pub fn with_revenue(mut self, revenue: f64) -> Self {
        self.revenue = Some(revenue);
        self
    }

    /// Sets the net income.
    #[must_use]
    pub fn with_net_income(mut self, net_income: f64) -> Self {
        self.net_income = Some(net_income);
        self
    }

    /// Sets the gross profit.
    #[must_use]
    pub fn with_gross_profit(mut self, gross_profit: f64) -> Self {
        self.gross_profit = Some(gross_profit);
        self
    }

    /// Sets the operating income.
    #[must_use]
    pub fn with_operating_income(mut self, operating_income: f64) -> Self {
        self.operating_income = Some(operating_income);
        self
    }

    /// Sets the basic EPS.
    #[must_use]
    pub fn with_eps(mut self, eps: f64) -> Self {
        self.eps = Some(eps);
        self
    }

    /// The year component of `date`: the leading digits before the first `-`.
    ///
    /// Returns `None` when there are no leading digits.
    #[must_use]
    pub fn year(&self) -> Option<i32> {
        let head = self.date.split('-').next().unwrap_or_default().trim();
        let end = head
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(head.len());
        head[..end].parse().ok()
    }

    /// The period end date parsed as a calendar date.
    #[must_use]
    pub fn period_end(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()
    }
}
