// 📋 Employee Roster - insertion-ordered collection of employees
//
// Problem solved:
// - Lookups resolve by insertion order, so duplicate ids stay unambiguous
//   (first one in wins)
// - "Not found" and "empty roster" are ordinary results, not errors
// - The roster owns its entries outright; nothing is shared or removed
//
// The Vec stays private on purpose: the roster grows by append only, and
// exposing the full Vec API would hand out removal and reordering.

use std::path::Path;
use std::slice;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::entities::Employee;

// ============================================================================
// EMPLOYEE ROSTER
// ============================================================================

#[derive(Debug, Clone)]
pub struct EmployeeRoster {
    employees: Vec<Employee>,
}

impl EmployeeRoster {
    /// Create a new empty roster
    pub fn new() -> Self {
        EmployeeRoster {
            employees: Vec::new(),
        }
    }

    /// Create a roster with the six stock employees pre-loaded
    pub fn with_defaults() -> Self {
        let mut roster = EmployeeRoster::new();
        roster.seed_default_employees();
        roster
    }

    fn seed_default_employees(&mut self) {
        self.append(Employee::new(100, "Hoang An".to_string(), 50.0));
        self.append(Employee::new(101, "Quang Khanh".to_string(), 70.0));
        self.append(Employee::new(102, "Thanh Tien".to_string(), 60.0));
        self.append(Employee::new(103, "Quoc Thuan".to_string(), 80.0));
        self.append(Employee::new(104, "Minh Thanh".to_string(), 90.0));
        self.append(Employee::new(105, "Dang Khoa".to_string(), 100.0));
    }

    /// Add an employee at the end. No validation, no dedup: duplicate ids
    /// are allowed and resolved by insertion order at lookup time.
    pub fn append(&mut self, employee: Employee) {
        debug!("appending employee {} to roster", employee.id());
        self.employees.push(employee);
    }

    /// Upper-cased name of the first employee with this id, scanning in
    /// insertion order. `None` when no entry matches.
    pub fn name_by_id(&self, id: i32) -> Option<String> {
        self.employees
            .iter()
            .find(|employee| employee.id() == id)
            .map(|employee| employee.name())
    }

    /// First employee holding the maximum salary (ties broken by earliest
    /// insertion). `None` on an empty roster.
    pub fn employee_with_max_salary(&self) -> Option<&Employee> {
        let mut max: Option<&Employee> = None;
        for employee in &self.employees {
            match max {
                Some(current) if employee.salary() <= current.salary() => {}
                _ => max = Some(employee),
            }
        }
        max
    }

    /// All entries, in insertion order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn iter(&self) -> slice::Iter<'_, Employee> {
        self.employees.iter()
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Canonical string of every entry, one per employee, insertion order.
    pub fn canonical_lines(&self) -> Vec<String> {
        self.employees
            .iter()
            .map(|employee| employee.to_string())
            .collect()
    }

    // ========================================================================
    // CSV IMPORT / EXPORT
    // ========================================================================

    /// Load a roster from a CSV file with an `id,name,salary` header.
    ///
    /// Rows keep their file order, so lookups behave exactly as if the
    /// entries had been appended one by one.
    pub fn load_csv(path: &Path) -> Result<Self> {
        let mut rdr = csv::Reader::from_path(path).context("Failed to open roster CSV")?;

        let mut roster = EmployeeRoster::new();
        for result in rdr.deserialize() {
            let employee: Employee = result.context("Failed to deserialize employee row")?;
            roster.append(employee);
        }

        info!("loaded {} employees from {}", roster.len(), path.display());
        Ok(roster)
    }

    /// Write the roster to a CSV file with an `id,name,salary` header.
    ///
    /// Stored names are written as entered; upper-casing stays a display
    /// concern, so a written file loads back byte-identical entries.
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        let mut wtr = csv::Writer::from_path(path).context("Failed to create roster CSV")?;

        for employee in &self.employees {
            wtr.serialize(employee)
                .context("Failed to serialize employee row")?;
        }
        wtr.flush().context("Failed to flush roster CSV")?;

        info!("wrote {} employees to {}", self.len(), path.display());
        Ok(())
    }
}

impl Default for EmployeeRoster {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl<'a> IntoIterator for &'a EmployeeRoster {
    type Item = &'a Employee;
    type IntoIter = slice::Iter<'a, Employee>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_with_defaults() {
        let roster = EmployeeRoster::with_defaults();

        assert_eq!(roster.len(), 6);
        assert_eq!(roster.employees()[0].to_string(), "100,HOANG AN,50.00");
        assert_eq!(roster.employees()[5].to_string(), "105,DANG KHOA,100.00");
    }

    #[test]
    fn test_name_by_id_found() {
        let roster = EmployeeRoster::with_defaults();

        assert_eq!(roster.name_by_id(101), Some("QUANG KHANH".to_string()));
        assert_eq!(roster.name_by_id(105), Some("DANG KHOA".to_string()));
    }

    #[test]
    fn test_name_by_id_not_found() {
        let roster = EmployeeRoster::with_defaults();

        assert_eq!(roster.name_by_id(999), None);
        assert_eq!(EmployeeRoster::new().name_by_id(100), None);
    }

    #[test]
    fn test_name_by_id_duplicate_ids_first_wins() {
        let mut roster = EmployeeRoster::new();
        roster.append(Employee::new(7, "First".to_string(), 10.0));
        roster.append(Employee::new(7, "Second".to_string(), 20.0));

        assert_eq!(roster.name_by_id(7), Some("FIRST".to_string()));
    }

    #[test]
    fn test_employee_with_max_salary() {
        let roster = EmployeeRoster::with_defaults();

        let top = roster.employee_with_max_salary().unwrap();
        assert_eq!(top.name(), "DANG KHOA");
        assert_eq!(top.salary(), 100.0);
        assert_eq!(top.to_string(), "105,DANG KHOA,100.00");
    }

    #[test]
    fn test_employee_with_max_salary_tie_keeps_earliest() {
        let mut roster = EmployeeRoster::new();
        roster.append(Employee::new(1, "Early".to_string(), 100.0));
        roster.append(Employee::new(2, "Late".to_string(), 100.0));

        assert_eq!(roster.employee_with_max_salary().unwrap().id(), 1);
    }

    #[test]
    fn test_employee_with_max_salary_empty_roster() {
        let roster = EmployeeRoster::new();

        assert!(roster.employee_with_max_salary().is_none());
    }

    #[test]
    fn test_canonical_lines_preserve_insertion_order() {
        let roster = EmployeeRoster::with_defaults();
        let lines = roster.canonical_lines();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[1], "101,QUANG KHANH,70.00");
        assert_eq!(lines[4], "104,MINH THANH,90.00");
    }

    #[test]
    fn test_csv_round_trip() {
        let path = std::env::temp_dir().join("roster_round_trip_test.csv");

        let roster = EmployeeRoster::with_defaults();
        roster.write_csv(&path).unwrap();
        let reloaded = EmployeeRoster::load_csv(&path).unwrap();

        assert_eq!(reloaded.len(), roster.len());
        assert_eq!(reloaded.employees(), roster.employees());

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_csv_missing_file() {
        let path = std::env::temp_dir().join("roster_missing_file_test.csv");

        assert!(EmployeeRoster::load_csv(&path).is_err());
    }
}
