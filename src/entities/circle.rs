// ⭕ Circle Entity - radius with derived area and perimeter
//
// Area and perimeter are stored values recomputed from the radius.
// Construction runs both recomputations, so a freshly built circle is
// complete without any further calls.

use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::format::two_decimals;

// ============================================================================
// CIRCLE ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    radius: f64,
    area: f64,
    perimeter: f64,
}

impl Circle {
    /// Create a circle and derive area and perimeter from the radius.
    ///
    /// A negative radius is stored as given; the derived values follow
    /// the same formulas either way.
    pub fn new(radius: f64) -> Self {
        let mut circle = Circle {
            radius,
            area: 0.0,
            perimeter: 0.0,
        };
        circle.recompute_area();
        circle.recompute_perimeter();
        circle
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn perimeter(&self) -> f64 {
        self.perimeter
    }

    /// Set area = π·r². Idempotent while the radius is unchanged.
    pub fn recompute_area(&mut self) {
        self.area = PI * self.radius * self.radius;
    }

    /// Set perimeter = 2π·r. Idempotent while the radius is unchanged.
    pub fn recompute_perimeter(&mut self) {
        self.perimeter = 2.0 * PI * self.radius;
    }
}

/// Canonical form: `<perimeter to two decimals>,<area to two decimals>`
///
/// Perimeter comes first; the order is part of the format.
impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{}",
            two_decimals(self.perimeter),
            two_decimals(self.area)
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
