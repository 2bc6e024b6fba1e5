#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fintable/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Unified interface for income-statement tables.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use fintable::{ControlEvent, Dashboard, FmpProvider, SortKey, View};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut dashboard = Dashboard::new(Arc::new(FmpProvider::new("your_api_key")));
//!     dashboard.load().await;
//!     dashboard.apply(ControlEvent::SortBy(SortKey::Revenue)).unwrap();
//!
//!     if let View::Table(rows) = dashboard.view() {
//!         println!("{} rows", rows.len());
//!     }
//! }
//! ```

// Core types and traits
pub use fintable_core::*;

// Providers
#[cfg(feature = "fmp")]
pub use fintable_fmp::{FMP_BASE_URL, FmpProvider};

mod dashboard;
pub use dashboard::{Dashboard, LoadOutcome, PendingLoad};
