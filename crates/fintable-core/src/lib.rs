#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fintable/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core traits and types for income-statement tables.
//!
//! The pipeline is strictly linear:
//!
//! - [`IncomeStatementProvider`](provider::IncomeStatementProvider) - fetches the raw dataset
//! - [`filter_records`](filter::filter_records) - year, revenue and net income ranges
//! - [`sort_records`](sort::sort_records) - stable sort by date, revenue or net income
//! - [`format_magnitude`](format::format_magnitude) - display formatting per cell
//!
//! [`PipelineState`](state::PipelineState) owns the dataset and criteria and
//! derives the rendered view from them.

/// Filter and sort criteria, and their normalization from user input.
pub mod criteria;
/// Error types for fetching and user input.
pub mod error;
/// The filter stage.
pub mod filter;
/// Presentation formatting for table cells.
pub mod format;
/// Reporting period definitions.
pub mod period;
/// Provider trait for fetching income statements.
pub mod provider;
/// The sort stage.
pub mod sort;
/// Pipeline state machine and view derivation.
pub mod state;
/// Core data types (Symbol, FinancialRecord).
pub mod types;

// Re-export commonly used items at crate root
pub use criteria::{
    FilterCriteria, SortCriteria, SortDirection, SortKey, ValueRange, YEAR_OPTIONS, YearRange,
};
pub use error::{FetchError, InputError, Result};
pub use filter::filter_records;
pub use format::{COLUMNS, Column, format_eps, format_magnitude};
pub use period::PeriodType;
pub use provider::IncomeStatementProvider;
pub use sort::sort_records;
pub use state::{ControlEvent, FetchTicket, LoadState, PipelineState, View};
pub use types::{FinancialRecord, Symbol};
