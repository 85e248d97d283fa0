//! Value types for rental pricing.
//!
//! All three are plain values: built per calculation, never stored.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// GST applied to every booking subtotal (percent).
pub const TAX_RATE_PERCENT: Decimal = dec!(18);

/// Flat service fee added to every booking regardless of duration.
pub const SERVICE_FEE: Decimal = dec!(99);

/// The time span a car is rented for.
///
/// `end` is expected to follow `start`, but inverted windows are accepted;
/// the duration is measured on the absolute difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RentalWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl RentalWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }
}

/// Rates applied to a rental window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateSchedule {
    pub daily_rate: Decimal,
    pub tax_rate_percent: Decimal,
    pub service_fee: Decimal,
}

impl RateSchedule {
    /// Schedule with the fixed 18% tax and 99 service fee
    pub fn standard(daily_rate: Decimal) -> Self {
        Self {
            daily_rate,
            tax_rate_percent: TAX_RATE_PERCENT,
            service_fee: SERVICE_FEE,
        }
    }
}

/// Itemized result of a pricing calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBreakdown {
    /// Billable days, always at least 1
    pub days: i64,
    pub daily_rate: Decimal,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub tax_rate_percent: Decimal,
    pub service_fee: Decimal,
    pub total: Decimal,
}
