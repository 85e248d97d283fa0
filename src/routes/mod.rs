//! HTTP routing for the Drively API

pub mod auth;
pub mod bookings;
pub mod cars;
pub mod profile;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::pricing;
use crate::AppState;

/// Build the application router
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        // Auth
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/signup", post(auth::signup))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/session", get(auth::current))
        // Catalog
        .route("/api/cars", get(cars::list))
        .route("/api/cars/featured", get(cars::featured))
        .route("/api/cars/:id", get(cars::detail))
        // Bookings
        .route("/api/bookings", get(bookings::list))
        .route("/api/bookings/confirm", post(bookings::confirm))
        .route("/api/bookings/:booking_id/actions/:action", post(bookings::action))
        // Profile
        .route("/api/profile", get(profile::show).put(profile::update))
        .merge(pricing::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "cars": state.catalog.all().len(),
    }))
}
