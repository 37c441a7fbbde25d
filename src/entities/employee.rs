// 👤 Employee Entity - roster record
//
// The id is fixed at construction; name and salary stay mutable through
// explicit setters. Duplicate ids are allowed (the roster resolves
// lookups by insertion order), so the id is a label, not a key.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::format::{display_name, two_decimals};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    id: i32,
    name: String,
    salary: f64,
}

impl Employee {
    pub fn new(id: i32, name: String, salary: f64) -> Self {
        Employee { id, name, salary }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    /// Upper-cased name. The stored value keeps its original casing.
    pub fn name(&self) -> String {
        display_name(&self.name)
    }

    pub fn set_name(&mut self, value: String) {
        self.name = value;
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    pub fn set_salary(&mut self, value: f64) {
        self.salary = value;
    }
}

/// Canonical form: `<id>,<NAME>,<salary to two decimals>`
impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{}",
            self.id,
            display_name(&self.name),
            two_decimals(self.salary)
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
    fn test_employee_creation() {
        let employee = Employee::new(100, "Hoang An".to_string(), 50.0);

        assert_eq!(employee.id(), 100);
        assert_eq!(employee.name(), "HOANG AN");
        assert_eq!(employee.salary(), 50.0);
    }

    #[test]
    fn test_employee_setters() {
        let mut employee = Employee::new(100, "Hoang An".to_string(), 50.0);

        employee.set_name("Quang Khanh".to_string());
        employee.set_salary(75.5);

        assert_eq!(employee.name(), "QUANG KHANH");
        assert_eq!(employee.salary(), 75.5);
        // id has no setter; it stays what it was constructed with
        assert_eq!(employee.id(), 100);
    }

    #[test]
    fn test_employee_canonical_string() {
        let employee = Employee::new(105, "Dang Khoa".to_string(), 100.0);

        assert_eq!(employee.to_string(), "105,DANG KHOA,100.00");
    }
}
