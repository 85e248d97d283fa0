//! Core pricing calculation functions.
//!
//! Pure functions for rental pricing math - no I/O, no shared state.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::*;

use crate::pricing::models::{PriceBreakdown, RateSchedule, RentalWindow};

/// Length of one billable day.
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Only used when formatting amounts for display; breakdowns themselves
/// carry exact values.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use drively_web::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Number of billable days in a rental window.
///
/// Any partial day rounds up, and a zero-length window still bills one day.
pub fn billable_days(window: &RentalWindow) -> i64 {
    let millis = (window.end - window.start).abs().num_milliseconds();
    let days = (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY;
    days.max(1)
}

/// Price a rental window against a rate schedule.
///
/// Returns `None` when an amount falls outside `Decimal`'s range.
pub fn try_price_window(window: &RentalWindow, schedule: &RateSchedule) -> Option<PriceBreakdown> {
    let days = billable_days(window);
    let subtotal = schedule.daily_rate.checked_mul(Decimal::from(days))?;
    let tax = subtotal.checked_mul(tax_fraction(schedule)?)?;
    let total = subtotal.checked_add(tax)?.checked_add(schedule.service_fee)?;

    Some(breakdown(days, schedule, subtotal, tax, total))
}

/// Price a rental window against a rate schedule.
///
/// Amounts beyond `Decimal`'s range saturate at `Decimal::MAX`; use
/// [`try_price_window`] to detect that case.
pub fn price_window(window: &RentalWindow, schedule: &RateSchedule) -> PriceBreakdown {
    if let Some(priced) = try_price_window(window, schedule) {
        return priced;
    }

    let days = billable_days(window);
    let fraction = tax_fraction(schedule).unwrap_or(Decimal::MAX);
    let subtotal = schedule.daily_rate.saturating_mul(Decimal::from(days));
    let tax = subtotal.saturating_mul(fraction);
    let total = subtotal.saturating_add(tax).saturating_add(schedule.service_fee);

    breakdown(days, schedule, subtotal, tax, total)
}

// Divide first so large subtotals don't overflow on the percent multiply.
fn tax_fraction(schedule: &RateSchedule) -> Option<Decimal> {
    schedule.tax_rate_percent.checked_div(Decimal::ONE_HUNDRED)
}

fn breakdown(
    days: i64,
    schedule: &RateSchedule,
    subtotal: Decimal,
    tax: Decimal,
    total: Decimal,
) -> PriceBreakdown {
    PriceBreakdown {
        days,
        daily_rate: schedule.daily_rate,
        subtotal,
        tax,
        tax_rate_percent: schedule.tax_rate_percent,
        service_fee: schedule.service_fee,
        total,
    }
}

/// Compute the booking breakdown for a car's daily rate.
///
/// The rate is not validated here; callers reject negative rates before
/// asking for a quote.
pub fn compute_breakdown(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    daily_rate: Decimal,
) -> PriceBreakdown {
    price_window(
        &RentalWindow::new(start, end),
        &RateSchedule::standard(daily_rate),
    )
}

/// Like [`compute_breakdown`], but `None` when the amounts overflow.
pub fn try_compute_breakdown(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    daily_rate: Decimal,
) -> Option<PriceBreakdown> {
    try_price_window(
        &RentalWindow::new(start, end),
        &RateSchedule::standard(daily_rate),
    )
}
