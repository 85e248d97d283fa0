//! In-memory car catalog

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::Car;

/// Number of cars shown in the home screen's featured strip
const FEATURED_COUNT: usize = 3;

/// Read-only catalog of rentable cars
#[derive(Debug, Clone)]
pub struct Catalog {
    cars: Vec<Car>,
}

impl Catalog {
    pub fn new(cars: Vec<Car>) -> Self {
        Self { cars }
    }

    /// Catalog seeded with the mock listings
    pub fn seeded() -> Self {
        Self::new(vec![
            car(1, "Tesla Model 3", dec!(89), 4.9, "Pune, Maharashtra", "Electric", &["Auto", "AC", "GPS"]),
            car(2, "BMW X5", dec!(150), 4.8, "Mumbai, Maharashtra", "SUV", &["Auto", "AC", "GPS", "Leather"]),
            car(3, "Audi A4", dec!(120), 4.7, "Pune, Maharashtra", "Sedan", &["Auto", "AC", "GPS"]),
            car(4, "Toyota Prado", dec!(100), 4.6, "Nairobi, Kenya", "SUV", &["Auto", "AC", "4x4"]),
            car(5, "Mazda Demio", dec!(60), 4.4, "Nairobi, Kenya", "Hatchback", &["Manual", "AC"]),
        ])
    }

    pub fn all(&self) -> &[Car] {
        &self.cars
    }

    pub fn find(&self, id: u32) -> Option<&Car> {
        self.cars.iter().find(|c| c.id == id)
    }

    pub fn featured(&self) -> &[Car] {
        &self.cars[..self.cars.len().min(FEATURED_COUNT)]
    }

    /// Cars whose name, location or type contains `query` (case-insensitive).
    ///
    /// A blank query returns the whole catalog.
    pub fn search(&self, query: &str) -> Vec<&Car> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.cars.iter().collect();
        }
        self.cars.iter().filter(|c| c.matches(&needle)).collect()
    }
}

fn car(
    id: u32,
    name: &str,
    daily_rate: Decimal,
    rating: f32,
    location: &str,
    car_type: &str,
    features: &[&str],
) -> Car {
    Car {
        id,
        name: name.to_string(),
        daily_rate,
        rating,
        location: location.to_string(),
        car_type: car_type.to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.find(2).map(|c| c.name.as_str()), Some("BMW X5"));
        assert!(catalog.find(0).is_none());
    }

    #[test]
    fn test_featured_is_first_three() {
        let catalog = Catalog::seeded();
        let ids: Vec<u32> = catalog.featured().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let small = Catalog::new(Catalog::seeded().all()[..1].to_vec());
        assert_eq!(small.featured().len(), 1);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = Catalog::seeded();
        let names: Vec<&str> = catalog.search("TESLA").iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Tesla Model 3"]);
    }

    #[test]
    fn test_search_matches_location_and_type() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.search("pune").len(), 2);
        assert_eq!(catalog.search("suv").len(), 2);
    }

    #[test]
    fn test_blank_search_returns_everything() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.search("").len(), 5);
        assert_eq!(catalog.search("   ").len(), 5);
    }

    #[test]
    fn test_search_no_match() {
        assert!(Catalog::seeded().search("lamborghini").is_empty());
    }
}
