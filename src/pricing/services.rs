//! Pricing service functions.
//!
//! Validate caller input and look up catalog rates before handing off to
//! the pure calculators.

use rust_decimal::Decimal;

use crate::data::Catalog;
use crate::error::AppError;
use crate::models::Car;

use super::calculators::try_compute_breakdown;
use super::models::{PriceBreakdown, RentalWindow};

/// Pricing error types
#[derive(Debug, Clone, thiserror::Error)]
pub enum PricingError {
    #[error("Daily rate must not be negative (got {0})")]
    NegativeRate(Decimal),

    #[error("No car found with id {0}")]
    UnknownCar(u32),

    #[error("Daily rate {0} is too large to price this booking")]
    RateTooLarge(Decimal),
}

impl From<PricingError> for AppError {
    fn from(err: PricingError) -> Self {
        match err {
            PricingError::NegativeRate(_) | PricingError::RateTooLarge(_) => {
                AppError::Validation(err.to_string())
            }
            PricingError::UnknownCar(_) => AppError::NotFound(err.to_string()),
        }
    }
}

/// Quote a window at an arbitrary daily rate.
pub fn quote(window: RentalWindow, daily_rate: Decimal) -> Result<PriceBreakdown, PricingError> {
    if daily_rate < Decimal::ZERO {
        return Err(PricingError::NegativeRate(daily_rate));
    }

    let breakdown = try_compute_breakdown(window.start, window.end, daily_rate)
        .ok_or(PricingError::RateTooLarge(daily_rate))?;
    tracing::debug!(
        days = breakdown.days,
        %daily_rate,
        total = %breakdown.total,
        "Computed price breakdown"
    );
    Ok(breakdown)
}

/// Quote a window for a catalog car, using the car's daily rate.
pub fn quote_for_car<'a>(
    catalog: &'a Catalog,
    car_id: u32,
    window: RentalWindow,
) -> Result<(&'a Car, PriceBreakdown), PricingError> {
    let car = catalog
        .find(car_id)
        .ok_or(PricingError::UnknownCar(car_id))?;
    let breakdown = quote(window, car.daily_rate)?;
    Ok((car, breakdown))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn window() -> RentalWindow {
        RentalWindow::new(
            Utc.with_ymd_and_hms(2024, 7, 6, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 7, 8, 0, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_pricing_error_display() {
        let err = PricingError::NegativeRate(dec!(-5));
        assert!(err.to_string().contains("-5"));

        let err = PricingError::UnknownCar(42);
        assert!(err.to_string().contains("42"));
    }

    #[test]
    fn test_pricing_error_maps_to_app_error() {
        assert!(matches!(
            AppError::from(PricingError::NegativeRate(dec!(-1))),
            AppError::Validation(_)
        ));
        assert!(matches!(
            AppError::from(PricingError::UnknownCar(9)),
            AppError::NotFound(_)
        ));
    }

    #[test]
    fn test_quote_rejects_negative_rate() {
        let err = quote(window(), dec!(-0.01)).unwrap_err();
        assert!(matches!(err, PricingError::NegativeRate(_)));
    }

    #[test]
    fn test_quote_rejects_rate_that_overflows() {
        let err = quote(window(), dec!(50000000000000000000000000000)).unwrap_err();
        assert!(matches!(err, PricingError::RateTooLarge(_)));
        assert!(matches!(AppError::from(err), AppError::Validation(_)));
    }

    #[test]
    fn test_quote_accepts_zero_rate() {
        let b = quote(window(), dec!(0)).unwrap();
        assert_eq!(b.total, dec!(99));
    }

    #[test]
    fn test_quote_for_car_uses_catalog_rate() {
        let catalog = Catalog::seeded();
        let (car, b) = quote_for_car(&catalog, 1, window()).unwrap();

        assert_eq!(car.name, "Tesla Model 3");
        assert_eq!(b.daily_rate, dec!(89));
        assert_eq!(b.subtotal, dec!(178));
    }

    #[test]
    fn test_quote_for_unknown_car() {
        let catalog = Catalog::seeded();
        let err = quote_for_car(&catalog, 999, window()).unwrap_err();
        assert!(matches!(err, PricingError::UnknownCar(999)));
    }
}
