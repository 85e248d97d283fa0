//! Domain models

pub mod booking;
pub mod car;
pub mod profile;

pub use booking::{Booking, BookingAction, BookingStatus, BookingTab};
pub use car::Car;
pub use profile::{Profile, ProfileUpdate};
