//! Car catalog models

use rust_decimal::Decimal;
use serde::Serialize;

/// A car listed for rent
#[derive(Debug, Clone, Serialize)]
pub struct Car {
    pub id: u32,
    pub name: String,
    /// Price per 24-hour rental period
    #[serde(with = "rust_decimal::serde::str")]
    pub daily_rate: Decimal,
    pub rating: f32,
    pub location: String,
    pub car_type: String,
    pub features: Vec<String>,
}

impl Car {
    /// Case-insensitive match against name, location and type.
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        [&self.name, &self.location, &self.car_type]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}
