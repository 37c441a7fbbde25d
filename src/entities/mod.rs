// Entity Models - one file per record type
//
// Each entity is a plain record with:
// - Fields set at construction (mutable only where an explicit setter exists)
// - Derived values exposed as methods or recomputed in place
// - A canonical comma-separated string form via Display

pub mod bike;
pub mod circle;
pub mod employee;

pub use bike::Bike;
pub use circle::Circle;
pub use employee::Employee;
