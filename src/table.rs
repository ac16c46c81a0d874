use crate::model::RadioRecord;
use std::fmt::Write;

pub const NO_DATA: &str = "No data available.";

/// Fixed-width listing of the catalog, or the no-data notice when empty.
pub fn render_table(records: &[RadioRecord]) -> String {
    if records.is_empty() {
        return format!("{}\n", NO_DATA);
    }

    let mut out = String::new();
    // writing into a String cannot fail
    let _ = writeln!(
        out,
        "{:<5}{:<15}{:<20}{:<15}{:<10}{:<10}{:<10}",
        "ID", "Name", "Manufacturer", "Purpose", "Frequency", "Power", "Weight"
    );
    let _ = writeln!(out, "{}", "-".repeat(75));
    for r in records {
        let _ = writeln!(
            out,
            "{:<5}{:<15}{:<20}{:<15}{:<10}{:<10}{:<10}",
            r.id, r.name, r.manufacturer, r.purpose, r.frequency, r.power, r.weight
        );
    }
    out
}
