// Exam Exercises - Core Library
// Exposes all modules for use in the demo driver and tests

pub mod entities;
pub mod format;
pub mod grader;
pub mod roster;

// Re-export commonly used types
pub use entities::{Bike, Circle, Employee};
pub use format::{display_name, two_decimals};
pub use grader::{check_integer_number, check_number, sum_number};
pub use roster::EmployeeRoster;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
