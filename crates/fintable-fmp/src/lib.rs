#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fintable/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Financial Modeling Prep (FMP) income-statement provider.
//!
//! # Usage
//!
//! ```rust,ignore
//! use fintable_fmp::FmpProvider;
//! use fintable_core::{IncomeStatementProvider, PeriodType, Symbol};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = FmpProvider::new("your_api_key");
//!     let records = provider
//!         .fetch_income_statements(&Symbol::new("AAPL"), PeriodType::Annual)
//!         .await?;
//!     println!("{} periods", records.len());
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use fintable_core::{
    FetchError, FinancialRecord, IncomeStatementProvider, PeriodType, Result, Symbol,
};
use reqwest::Client;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;
use tracing::instrument;

/// Default base URL: the v3 income-statement endpoint, symbol appended.
pub const FMP_BASE_URL: &str = "https://financialmodelingprep.com/api/v3/income-statement/";

/// Financial Modeling Prep provider.
#[derive(Clone)]
pub struct FmpProvider {
    client: Client,
    base_url: String,
    api_key: String,
}

impl fmt::Debug for FmpProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FmpProvider")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl FmpProvider {
    /// Create a new FMP provider with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: FMP_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Create a new FMP provider with a custom HTTP client.
    #[must_use]
    pub fn with_client(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: FMP_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Replace the base URL. The symbol is appended to it verbatim.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Rebuild the HTTP client with a request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Configuration(e.to_string()))?;
        Ok(self)
    }

    /// The configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the request URL for a symbol and period.
    fn url(&self, symbol: &Symbol, period_type: PeriodType) -> String {
        format!(
            "{}{}?period={}&apikey={}",
            self.base_url,
            symbol.as_str(),
            period_type.as_query(),
            self.api_key
        )
    }

    /// Make the GET request and parse the JSON response.
    async fn get(&self, url: &str) -> Result<Vec<FinancialRecord>> {
        if self.base_url.trim().is_empty() {
            return Err(FetchError::Configuration("API base URL is not set".to_string()));
        }
        if self.api_key.trim().is_empty() {
            return Err(FetchError::Configuration("API key is not set".to_string()));
        }

        tracing::debug!("FMP request: {}", mask_api_key(url));

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Network(format!("request timed out: {e}"))
            } else {
                FetchError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(FetchError::RateLimited {
                provider: "FMP".to_string(),
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        parse_records(&text)
    }
}

/// Parse a response body into records.
///
/// FMP reports some failures (bad key, exhausted plan) as a JSON object with
/// a success status; those become [`FetchError::Api`].
fn parse_records(text: &str) -> Result<Vec<FinancialRecord>> {
    match serde_json::from_str::<Vec<FinancialRecord>>(text) {
        Ok(records) => Ok(records),
        Err(parse_error) => match serde_json::from_str::<FmpErrorBody>(text) {
            Ok(FmpErrorBody {
                error_message: Some(message),
                ..
            })
            | Ok(FmpErrorBody {
                error: Some(message),
                ..
            }) => Err(FetchError::Api(message)),
            _ => Err(FetchError::Parse(parse_error.to_string())),
        },
    }
}

/// Replace the value of the `apikey` query parameter with `****`.
fn mask_api_key(url: &str) -> String {
    match url.find("apikey=") {
        Some(idx) => format!("{}****", &url[..idx + "apikey=".len()]),
        None => url.to_string(),
    }
}

#[async_trait]
impl IncomeStatementProvider for FmpProvider {
    fn name(&self) -> &str {
        "FMP"
    }

    fn description(&self) -> &str {
        "Financial Modeling Prep - Financial data and stock market API"
    }

    #[instrument(
        skip(self, symbol, period_type),
        fields(provider = "FMP", symbol = %symbol, period = %period_type)
    )]
    async fn fetch_income_statements(
        &self,
        symbol: &Symbol,
        period_type: PeriodType,
    ) -> Result<Vec<FinancialRecord>> {
        let url = self.url(symbol, period_type);
        let records = self.get(&url).await?;
        tracing::debug!(records = records.len(), "FMP response parsed");
        Ok(records)
    }
}

// ============================================================================
// FMP API Response Types
// ============================================================================

/// FMP error response.
#[derive(Debug, Clone, Deserialize)]
struct FmpErrorBody {
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
    error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_building() {
        let provider = FmpProvider::new("test_key");
        assert_eq!(
            provider.url(&Symbol::new("aapl"), PeriodType::Annual),
            "https://financialmodelingprep.com/api/v3/income-statement/AAPL?period=annual&apikey=test_key"
        );

        let provider = provider.with_base_url("http://localhost:9000/is/");
        assert_eq!(
            provider.url(&Symbol::new("MSFT"), PeriodType::Quarterly),
            "http://localhost:9000/is/MSFT?period=quarter&apikey=test_key"
        );
    }

    #[test]
    fn test_provider_metadata() {
        let provider = FmpProvider::new("test_key");
        assert_eq!(provider.name(), "FMP");
        assert!(!provider.description().is_empty());
        assert_eq!(provider.base_url(), FMP_BASE_URL);
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let provider = FmpProvider::new("secret_key_12345");
        let debug_str = format!("{:?}", provider);
        assert!(!debug_str.contains("secret_key_12345"));
        assert!(debug_str.contains("[REDACTED]"));
    }

    #[test]
    fn test_mask_api_key() {
        assert_eq!(
            mask_api_key("https://x.test/AAPL?period=annual&apikey=secret"),
            "https://x.test/AAPL?period=annual&apikey=****"
        );
        assert_eq!(mask_api_key("https://x.test/AAPL"), "https://x.test/AAPL");
    }

    #[test]
    fn test_parse_records() {
        let body = r#"[
            {"date": "2023-09-30", "symbol": "AAPL", "revenue": 383285000000, "netIncome": 96995000000, "eps": 6.16},
            {"date": "2022-09-24", "symbol": "AAPL", "revenue": null}
        ]"#;
        let records = parse_records(body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].revenue, Some(383_285_000_000.0));
        assert_eq!(records[1].revenue, None);
        assert_eq!(parse_records("[]").unwrap(), Vec::new());
    }

    #[test]
    fn test_parse_error_message_body() {
        let body = r#"{"Error Message": "Invalid API KEY. Please retry or visit our documentation."}"#;
        assert_eq!(
            parse_records(body),
            Err(FetchError::Api(
                "Invalid API KEY. Please retry or visit our documentation.".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_malformed_body() {
        assert!(matches!(parse_records("<html>"), Err(FetchError::Parse(_))));
        assert!(matches!(parse_records(r#"{"foo": 1}"#), Err(FetchError::Parse(_))));
    }

    #[test]
    fn test_timeout_builds() {
        let provider = FmpProvider::new("k").with_timeout(Duration::from_secs(5));
        assert!(provider.is_ok());
    }
}
