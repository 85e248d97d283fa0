//! Request DTOs for pricing API endpoints.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Request to quote an arbitrary daily rate
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(with = "rust_decimal::serde::str")]
    pub daily_rate: Decimal,
    /// Falls back to the configured currency
    #[serde(default)]
    pub currency: Option<String>,
}

/// Request to quote a catalog car
#[derive(Debug, Deserialize)]
pub struct CarQuoteRequest {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}
