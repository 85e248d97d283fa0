//! Response DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use super::models::PriceBreakdown;

/// Money value for JSON responses
#[derive(Debug, Clone, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

impl MoneyResponse {
    pub fn new(amount: Decimal, currency: &str) -> Self {
        Self {
            amount,
            currency: currency.to_string(),
        }
    }
}

/// Response for a booking price quote
#[derive(Debug, Clone, Serialize)]
pub struct PriceBreakdownResponse {
    pub days: i64,
    pub daily_rate: MoneyResponse,
    pub subtotal: MoneyResponse,
    pub tax: MoneyResponse,
    #[serde(with = "rust_decimal::serde::str")]
    pub tax_rate_percent: Decimal,
    pub service_fee: MoneyResponse,
    pub total: MoneyResponse,
}

impl PriceBreakdownResponse {
    pub fn new(breakdown: &PriceBreakdown, currency: &str) -> Self {
        Self {
            days: breakdown.days,
            daily_rate: MoneyResponse::new(breakdown.daily_rate, currency),
            subtotal: MoneyResponse::new(breakdown.subtotal, currency),
            tax: MoneyResponse::new(breakdown.tax, currency),
            tax_rate_percent: breakdown.tax_rate_percent,
            service_fee: MoneyResponse::new(breakdown.service_fee, currency),
            total: MoneyResponse::new(breakdown.total, currency),
        }
    }
}
