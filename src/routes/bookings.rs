//! Booking history and confirmation route handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::{Booking, BookingAction, BookingTab};
use crate::pricing::responses::PriceBreakdownResponse;
use crate::pricing::{round_money, services, RentalWindow};
use crate::session::CurrentSession;
use crate::AppState;

/// Query parameters for the booking listing
#[derive(Debug, Default, Deserialize)]
pub struct BookingListQuery {
    #[serde(default)]
    pub tab: BookingTab,
    #[serde(default)]
    pub q: String,
}

/// Outcome of a booking card action
#[derive(Debug, Serialize)]
pub struct ActionResponse {
    pub booking_id: String,
    pub action: BookingAction,
    pub title: &'static str,
    pub message: String,
}

/// Request to confirm a new booking
#[derive(Debug, Deserialize)]
pub struct ConfirmBookingRequest {
    pub car_id: u32,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Booking confirmation notice
#[derive(Debug, Serialize)]
pub struct ConfirmationResponse {
    pub car_name: String,
    pub breakdown: PriceBreakdownResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Total formatted for display, e.g. "INR 5999.00"
    pub amount_due: String,
    pub message: String,
    pub confirmed_at: DateTime<Utc>,
}

/// Booking listing for the current or past tab
pub async fn list(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Query(query): Query<BookingListQuery>,
) -> Json<Vec<Booking>> {
    tracing::debug!("Listing {:?} bookings for {}", query.tab, session.email);
    let bookings = state
        .bookings
        .list(query.tab, &query.q)
        .into_iter()
        .cloned()
        .collect();
    Json(bookings)
}

/// Apply a card action (view, modify, cancel, rebook) to a booking
pub async fn action(
    State(state): State<AppState>,
    CurrentSession(_session): CurrentSession,
    Path((booking_id, action)): Path<(String, BookingAction)>,
) -> Result<Json<ActionResponse>> {
    let booking = state
        .bookings
        .find(&booking_id)
        .ok_or_else(|| AppError::NotFound(format!("No booking found with id {}", booking_id)))?;

    if !booking.allows(action) {
        return Err(AppError::Conflict(format!(
            "{} is not available for {} bookings",
            action.title(),
            booking.status.label()
        )));
    }

    Ok(Json(ActionResponse {
        booking_id: booking.booking_id.clone(),
        action,
        title: action.title(),
        message: action.notice(booking),
    }))
}

/// Confirm a booking for a catalog car
pub async fn confirm(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Json(req): Json<ConfirmBookingRequest>,
) -> Result<Json<ConfirmationResponse>> {
    let (car, breakdown) =
        services::quote_for_car(&state.catalog, req.car_id, RentalWindow::new(req.start, req.end))?;
    let currency = &state.config.currency;

    tracing::info!(
        "Booking confirmed for {} by {} ({} days)",
        car.name,
        session.email,
        breakdown.days
    );

    Ok(Json(ConfirmationResponse {
        car_name: car.name.clone(),
        breakdown: PriceBreakdownResponse::new(&breakdown, currency),
        notes: req.notes.filter(|n| !n.trim().is_empty()),
        amount_due: format!("{} {:.2}", currency, round_money(breakdown.total, 2)),
        message: format!(
            "Your booking for {} has been confirmed. You will receive a confirmation email shortly.",
            car.name
        ),
        confirmed_at: Utc::now(),
    }))
}
