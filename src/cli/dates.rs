//! Dates demonstration
//!
//! Walks the same five-day window with both range variants, traversing each
//! one twice to show the contrast: the cursor is spent after one pass, the
//! range restarts from the top every time.

use chrono::NaiveDate;

use crate::error::PrimerResult;
use crate::models::{DateCursor, DateRange};

/// Run the date-range demonstration
pub fn handle_dates_command() -> PrimerResult<()> {
    let start = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2019, 1, 5).unwrap();

    println!("One-shot cursor:");
    let mut cursor = DateCursor::new(start, end);
    while let Some(day) = cursor.advance() {
        println!("{}", day);
    }

    println!("Second traversal:");
    // The cursor is spent; this loop body never runs
    while let Some(day) = cursor.advance() {
        println!("{}", day);
    }

    println!();
    println!("Reusable range:");
    let range = DateRange::new(start, end);
    for day in range.days() {
        println!("{}", day);
    }

    println!("Second traversal:");
    for day in range.days() {
        println!("{}", day);
    }

    Ok(())
}
