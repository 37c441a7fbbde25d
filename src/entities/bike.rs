// 🚲 Bike Entity - price-list record with a derived sale price
//
// Problem solved:
// - Sale price derives from the list price at read time (flat 10% markup)
// - Display casing is a read transform, storage keeps what was entered
// - One canonical comma-separated form for comparison and output
//
// A bike is constructed once with all three fields and is immutable
// afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::format::{display_name, two_decimals};

// ============================================================================
// BIKE ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bike {
    id: i32,
    name: String,
    price: f64,
}

impl Bike {
    /// Create a bike record.
    ///
    /// No validation happens here: callers hand in already-parsed values,
    /// and a negative price is stored as given.
    pub fn new(id: i32, name: String, price: f64) -> Self {
        Bike { id, name, price }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    /// Upper-cased name. The stored value keeps its original casing.
    pub fn name(&self) -> String {
        display_name(&self.name)
    }

    /// List price, exactly as stored.
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Sale price with the flat 10% markup.
    ///
    /// No rounding is applied here; two decimal places happen at display
    /// time only.
    pub fn sale_price(&self) -> f64 {
        self.price + self.price * 0.10
    }
}

/// Canonical form: `<id>,<NAME>,<price to two decimals>`
impl fmt::Display for Bike {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{}",
            self.id,
            display_name(&self.name),
            two_decimals(self.price)
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bike_creation() {
        let bike = Bike::new(1, "trek".to_string(), 100.0);

        assert_eq!(bike.id(), 1);
        assert_eq!(bike.name(), "TREK");
        assert_eq!(bike.price(), 100.0);
    }

    #[test]
    fn test_bike_sale_price() {
        let bike = Bike::new(1, "trek".to_string(), 100.0);

        assert_eq!(bike.sale_price(), 110.0);
        assert_eq!(two_decimals(bike.sale_price()), "110.00");
    }

    #[test]
    fn test_bike_canonical_string() {
        let bike = Bike::new(1, "trek".to_string(), 100.0);

        assert_eq!(bike.to_string(), "1,TREK,100.00");
    }

    #[test]
    fn test_bike_display_price_rounds_half_up() {
        let bike = Bike::new(7, "giant".to_string(), 99.995);

        assert_eq!(bike.to_string(), "7,GIANT,100.00");
    }

    #[test]
    fn test_bike_storage_keeps_original_casing() {
        let bike = Bike::new(2, "Peugeot".to_string(), 250.5);

        // Upper-casing is a read transform; the serialized record still
        // carries the entered casing.
        let json = serde_json::to_string(&bike).unwrap();
        assert!(json.contains("\"Peugeot\""));
        assert_eq!(bike.name(), "PEUGEOT");
    }
}
