//! Pricing API route handlers

use axum::{
    extract::{Path, State},
    routing::post,
    Json, Router,
};

use crate::error::Result;
use crate::AppState;

use super::models::RentalWindow;
use super::requests::{CarQuoteRequest, QuoteRequest};
use super::responses::PriceBreakdownResponse;
use super::services;

/// Pricing routes, mounted under `/api/pricing`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/pricing/quote", post(quote))
        .route("/api/pricing/cars/:id/quote", post(quote_car))
}

/// Quote an arbitrary daily rate
async fn quote(
    State(state): State<AppState>,
    Json(req): Json<QuoteRequest>,
) -> Result<Json<PriceBreakdownResponse>> {
    let breakdown = services::quote(RentalWindow::new(req.start, req.end), req.daily_rate)?;
    let currency = req.currency.as_deref().unwrap_or(&state.config.currency);
    Ok(Json(PriceBreakdownResponse::new(&breakdown, currency)))
}

/// Quote a catalog car for the given window
async fn quote_car(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Json(req): Json<CarQuoteRequest>,
) -> Result<Json<PriceBreakdownResponse>> {
    let (_, breakdown) =
        services::quote_for_car(&state.catalog, id, RentalWindow::new(req.start, req.end))?;
    Ok(Json(PriceBreakdownResponse::new(&breakdown, &state.config.currency)))
}
