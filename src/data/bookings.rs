//! In-memory booking history

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{Booking, BookingStatus, BookingTab};

/// Read-only booking history
#[derive(Debug, Clone)]
pub struct BookingBook {
    bookings: Vec<Booking>,
}

impl BookingBook {
    pub fn new(bookings: Vec<Booking>) -> Self {
        Self { bookings }
    }

    /// History seeded with the mock bookings
    pub fn seeded() -> Self {
        Self::new(vec![
            booking("BK001", "Tesla Model 3", "Mumbai, Maharashtra", (2024, 7, 6), (2024, 7, 8), BookingStatus::Active, dec!(2500), None),
            booking("BK002", "BMW X5", "Delhi, India", (2024, 7, 10), (2024, 7, 12), BookingStatus::Confirmed, dec!(3200), None),
            booking("BK003", "Audi A4", "Bangalore, Karnataka", (2024, 6, 15), (2024, 6, 17), BookingStatus::Completed, dec!(2800), Some(4.8)),
            booking("BK004", "Mercedes C-Class", "Chennai, Tamil Nadu", (2024, 5, 20), (2024, 5, 22), BookingStatus::Completed, dec!(3500), Some(4.9)),
        ])
    }

    pub fn find(&self, booking_id: &str) -> Option<&Booking> {
        self.bookings
            .iter()
            .find(|b| b.booking_id.eq_ignore_ascii_case(booking_id))
    }

    /// Bookings on `tab` whose car name contains `search` (case-insensitive)
    pub fn list(&self, tab: BookingTab, search: &str) -> Vec<&Booking> {
        let needle = search.trim().to_lowercase();
        self.bookings
            .iter()
            .filter(|b| b.on_tab(tab))
            .filter(|b| b.car_name.to_lowercase().contains(&needle))
            .collect()
    }
}

#[allow(clippy::too_many_arguments)]
fn booking(
    booking_id: &str,
    car_name: &str,
    location: &str,
    start: (i32, u32, u32),
    end: (i32, u32, u32),
    status: BookingStatus,
    total_price: Decimal,
    rating: Option<f32>,
) -> Booking {
    Booking {
        booking_id: booking_id.to_string(),
        car_name: car_name.to_string(),
        location: location.to_string(),
        start_date: date(start),
        end_date: date(end),
        status,
        total_price,
        rating,
    }
}

fn date((y, m, d): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: Vec<&Booking>) -> Vec<&str> {
        list.into_iter().map(|b| b.booking_id.as_str()).collect()
    }

    #[test]
    fn test_tabs_split_history() {
        let book = BookingBook::seeded();
        assert_eq!(ids(book.list(BookingTab::Current, "")), vec!["BK001", "BK002"]);
        assert_eq!(ids(book.list(BookingTab::Past, "")), vec!["BK003", "BK004"]);
    }

    #[test]
    fn test_search_filters_by_car_name() {
        let book = BookingBook::seeded();
        assert_eq!(ids(book.list(BookingTab::Current, "bmw")), vec!["BK002"]);
        assert_eq!(ids(book.list(BookingTab::Past, "MERC")), vec!["BK004"]);
        assert!(book.list(BookingTab::Past, "tesla").is_empty());
    }

    #[test]
    fn test_find_ignores_case() {
        let book = BookingBook::seeded();
        assert_eq!(book.find("bk003").map(|b| b.car_name.as_str()), Some("Audi A4"));
        assert!(book.find("BK999").is_none());
    }
}
