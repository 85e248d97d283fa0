//! Pricing engine module for Drively bookings.
//!
//! Turns a rental window and a daily rate into an itemized breakdown
//! (subtotal, GST, service fee, total). The math lives in `calculators`
//! as pure functions; `services` and `routes` wrap it for the booking API.

pub mod calculators;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use calculators::{billable_days, compute_breakdown, round_money, try_compute_breakdown};
pub use models::{PriceBreakdown, RateSchedule, RentalWindow, SERVICE_FEE, TAX_RATE_PERCENT};
pub use routes::router;
pub use services::PricingError;
