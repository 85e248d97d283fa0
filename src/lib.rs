//! Drively car rental API
//!
//! Backend for the Drively mobile app: car catalog, booking pricing and
//! confirmation, booking history, and session/profile handling over
//! in-memory mock data.

pub mod config;
pub mod data;
pub mod error;
pub mod models;
pub mod pricing;
pub mod routes;
pub mod session;

use std::sync::Arc;

use config::Config;
use data::{BookingBook, Catalog};
use session::SessionStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Arc<Catalog>,
    pub bookings: Arc<BookingBook>,
    pub sessions: SessionStore,
}

impl AppState {
    /// State backed by the seeded mock data
    pub fn new(config: Config) -> Self {
        let sessions = SessionStore::new(config.session_idle);
        Self {
            config: Arc::new(config),
            catalog: Arc::new(Catalog::seeded()),
            bookings: Arc::new(BookingBook::seeded()),
            sessions,
        }
    }
}
