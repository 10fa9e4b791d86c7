//! Display formatting for bill fields
//!
//! Dates are stored as raw ISO strings and only formatted at render
//! time, into the short French form used by the bill list ("4 Avr. 04").

use crate::core::bill::BillStatus;
use chrono::{Datelike, NaiveDate};

// Short French month abbreviations, capitalized. Juin/Juil are kept at
// four letters so the two summer months stay distinguishable.
const MONTHS_FR: [&str; 12] = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Juin", "Juil", "Aoû", "Sep", "Oct", "Nov", "Déc",
];

/// Format an ISO date string (yyyy-mm-dd) as "4 Avr. 04"
///
/// Returns an error when the input is not a parsable ISO date; callers
/// decide whether to fall back to the raw string (the bill list does,
/// so one corrupted record never aborts the whole page).
pub fn format_date(iso: &str) -> Result<String, chrono::ParseError> {
    let date = NaiveDate::parse_from_str(iso, "%Y-%m-%d")?;
    let month = MONTHS_FR[date.month0() as usize];
    Ok(format!(
        "{} {}. {:02}",
        date.day(),
        month,
        date.year() % 100
    ))
}

/// Translate a bill status into its French display label
pub fn format_status(status: BillStatus) -> &'static str {
    status.label()
}
