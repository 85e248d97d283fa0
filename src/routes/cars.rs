//! Car catalog route handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::models::Car;
use crate::AppState;

/// Query parameters for the car listing
#[derive(Debug, Default, Deserialize)]
pub struct CarListQuery {
    #[serde(default)]
    pub q: String,
}

/// Car listing, optionally filtered by a search term
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<CarListQuery>,
) -> Json<Vec<Car>> {
    let cars = state.catalog.search(&query.q).into_iter().cloned().collect();
    Json(cars)
}

/// Featured cars for the home screen
pub async fn featured(State(state): State<AppState>) -> Json<Vec<Car>> {
    Json(state.catalog.featured().to_vec())
}

/// Car detail
pub async fn detail(State(state): State<AppState>, Path(id): Path<u32>) -> Result<Json<Car>> {
    state
        .catalog
        .find(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No car found with id {}", id)))
}
