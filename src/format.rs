// Formatting Contract - the one surface every record type shares
//
// Canonical strings are comma-separated, names are upper-cased at the
// read boundary, and money/measure fields render to exactly two decimal
// places with the half-way case rounded away from zero.

/// Render a value to exactly two decimal places, half-up.
///
/// `format!("{:.2}", _)` on its own rounds the half-way case to even,
/// so the value is scaled and rounded explicitly first (`f64::round`
/// ties away from zero, which is what the canonical formats require).
///
/// Example:
/// - two_decimals(100.0) = "100.00"
/// - two_decimals(0.125) = "0.13" (not "0.12")
pub fn two_decimals(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    format!("{:.2}", rounded)
}

/// Upper-case a stored name for display.
///
/// Storage keeps whatever casing was entered; every surfaced form of a
/// name (getters, canonical strings) goes through this.
pub fn display_name(name: &str) -> String {
    name.to_uppercase()
}

// ============================================================================
// TESTS
// ============================================================================
