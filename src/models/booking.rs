//! Booking history models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Active,
    Confirmed,
    Completed,
}

impl BookingStatus {
    pub fn label(self) -> &'static str {
        match self {
            BookingStatus::Active => "Active",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Completed => "Completed",
        }
    }

    /// Active and confirmed bookings are listed under "current"
    pub fn is_current(self) -> bool {
        matches!(self, BookingStatus::Active | BookingStatus::Confirmed)
    }

    /// Actions offered for a booking in this status
    pub fn allowed_actions(self) -> &'static [BookingAction] {
        if self.is_current() {
            &[BookingAction::View, BookingAction::Modify, BookingAction::Cancel]
        } else {
            &[BookingAction::View, BookingAction::Rebook]
        }
    }
}

/// Actions a user can take on a booking card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingAction {
    View,
    Modify,
    Cancel,
    Rebook,
}

impl BookingAction {
    pub fn title(self) -> &'static str {
        match self {
            BookingAction::View => "Booking Details",
            BookingAction::Modify => "Modify Booking",
            BookingAction::Cancel => "Cancel Booking",
            BookingAction::Rebook => "Book Again",
        }
    }

    /// Notice text shown to the user for this action on `booking`
    pub fn notice(self, booking: &Booking) -> String {
        match self {
            BookingAction::View => format!("View details for {}", booking.car_name),
            BookingAction::Modify => format!("Modify booking for {}", booking.car_name),
            BookingAction::Cancel => format!("Booking for {} cancelled", booking.car_name),
            BookingAction::Rebook => format!("Book {} again", booking.car_name),
        }
    }
}

/// Which half of the bookings screen to list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingTab {
    #[default]
    Current,
    Past,
}

/// A booking in the user's history
#[derive(Debug, Clone, Serialize)]
pub struct Booking {
    pub booking_id: String,
    pub car_name: String,
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: BookingStatus,
    #[serde(with = "rust_decimal::serde::str")]
    pub total_price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
}

impl Booking {
    pub fn on_tab(&self, tab: BookingTab) -> bool {
        match tab {
            BookingTab::Current => self.status.is_current(),
            BookingTab::Past => !self.status.is_current(),
        }
    }

    pub fn allows(&self, action: BookingAction) -> bool {
        self.status.allowed_actions().contains(&action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn booking(status: BookingStatus) -> Booking {
        Booking {
            booking_id: "BK100".to_string(),
            car_name: "Audi A4".to_string(),
            location: "Bangalore, Karnataka".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 6, 17).unwrap(),
            status,
            total_price: dec!(2800),
            rating: None,
        }
    }

    #[test]
    fn test_current_bookings_can_be_modified_and_cancelled() {
        for status in [BookingStatus::Active, BookingStatus::Confirmed] {
            let b = booking(status);
            assert!(b.on_tab(BookingTab::Current));
            assert!(b.allows(BookingAction::Modify));
            assert!(b.allows(BookingAction::Cancel));
            assert!(!b.allows(BookingAction::Rebook));
        }
    }

    #[test]
    fn test_completed_bookings_can_only_be_viewed_or_rebooked() {
        let b = booking(BookingStatus::Completed);
        assert!(b.on_tab(BookingTab::Past));
        assert!(!b.on_tab(BookingTab::Current));
        assert!(b.allows(BookingAction::View));
        assert!(b.allows(BookingAction::Rebook));
        assert!(!b.allows(BookingAction::Cancel));
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(BookingStatus::Active.label(), "Active");
        assert_eq!(BookingStatus::Confirmed.label(), "Confirmed");
        assert_eq!(BookingStatus::Completed.label(), "Completed");
    }

    #[test]
    fn test_action_notice_names_the_car() {
        let b = booking(BookingStatus::Active);
        assert_eq!(BookingAction::View.notice(&b), "View details for Audi A4");
        assert_eq!(BookingAction::Modify.notice(&b), "Modify booking for Audi A4");
    }
}
