//! Minute-to-label formatting for report and schedule display.

use crate::models::GameFormat;

/// Label for a minute offset in `[0, total_minutes]`.
///
/// The game end is labeled `"End"`; any other offset is expressed as a
/// quarter number plus the minute within that quarter. Report and slot
/// boundary minutes are always multiples of the rotation length bounded by
/// the game length, so they are always valid inputs.
pub fn minute_label(minute: u32, format: &GameFormat) -> String {
    if minute == format.total_minutes {
        return "End".to_string();
    }
    let quarter_minutes = format.quarter_minutes();
    let quarter = minute / quarter_minutes + 1;
    let minute_in_quarter = minute % quarter_minutes;
    format!("Q{quarter} - {minute_in_quarter}:00")
}
