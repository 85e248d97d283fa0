//! Mock data sources backing the API (no database)

pub mod bookings;
pub mod catalog;

pub use bookings::BookingBook;
pub use catalog::Catalog;
