// Demo driver - runs each exercise non-interactively with fixed inputs
// and prints the OUTPUT lines its test cases produce.

use anyhow::Result;
use std::env;
use std::path::Path;

use exam_exercises::{
    check_integer_number, check_number, sum_number, two_decimals, Bike, Circle, EmployeeRoster,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("bike") => run_bike(),
        Some("circle") => run_circle(),
        Some("roster") => run_roster(),
        Some("grader") => run_grader(),
        Some("csv") => {
            let path = args
                .get(2)
                .map(String::as_str)
                .unwrap_or("roster_export.csv");
            run_csv(Path::new(path))?;
        }
        Some("json") => run_json()?,
        Some(other) => {
            eprintln!("Unknown exercise: {}", other);
            eprintln!("Usage: exam-exercises [bike|circle|roster|grader|csv [PATH]|json]");
            std::process::exit(1);
        }
        None => {
            run_bike();
            println!();
            run_circle();
            println!();
            run_roster();
            println!();
            run_grader();
        }
    }

    Ok(())
}

fn run_bike() {
    println!("🚲 Bike pricing");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let bike = Bike::new(1, "trek".to_string(), 100.0);

    println!("OUTPUT:");
    println!("{}", two_decimals(bike.sale_price()));
    println!("{}", bike.name());
    println!("{}", bike);
}

fn run_circle() {
    println!("⭕ Circle geometry");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let circle = Circle::new(2.0);

    println!("OUTPUT:");
    println!("{}", two_decimals(circle.perimeter()));
    println!("{}", two_decimals(circle.area()));
    println!("{}", circle);
}

fn run_roster() {
    println!("📋 Employee roster");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let roster = EmployeeRoster::with_defaults();

    println!("The employees on the roster:");
    for line in roster.canonical_lines() {
        println!("{}", line);
    }

    println!("OUTPUT:");
    match roster.name_by_id(101) {
        Some(name) => println!("{}", name),
        None => println!("Not found"),
    }
    match roster.name_by_id(999) {
        Some(name) => println!("{}", name),
        None => println!("Not found"),
    }
    match roster.employee_with_max_salary() {
        Some(employee) => println!("{}", employee),
        None => println!("Roster is empty"),
    }
}

fn run_grader() {
    println!("🔤 String grading");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    println!("OUTPUT:");
    println!("{}", check_number("12"));
    println!("{}", check_number("ab"));
    println!("{}", sum_number("a1b2c3"));
    println!("{}", check_integer_number("5", 1, 10));
    println!("{}", check_integer_number("50", 1, 10));
    println!("{}", check_integer_number("x", 1, 10));
}

fn run_csv(path: &Path) -> Result<()> {
    println!("💾 Roster CSV round trip");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let roster = EmployeeRoster::with_defaults();
    roster.write_csv(path)?;
    println!("✓ Wrote {} employees to {}", roster.len(), path.display());

    let reloaded = EmployeeRoster::load_csv(path)?;
    println!("✓ Reloaded {} employees", reloaded.len());

    if reloaded.employees() == roster.employees() {
        println!("✓ Round trip preserved every entry");
    } else {
        println!("✗ Reloaded roster differs from the original");
    }

    Ok(())
}

fn run_json() -> Result<()> {
    println!("🗂  Records as JSON");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let bike = Bike::new(1, "trek".to_string(), 100.0);
    let circle = Circle::new(2.0);
    let roster = EmployeeRoster::with_defaults();

    println!("{}", serde_json::to_string_pretty(&bike)?);
    println!("{}", serde_json::to_string_pretty(&circle)?);
    println!("{}", serde_json::to_string_pretty(roster.employees())?);

    Ok(())
}
