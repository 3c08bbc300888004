use crate::render::clock_label;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;
use timetable_core::{Combination, Subject, Weekday};

const FIELD_WIDTH: usize = 25;
const STEP_MINUTES: u16 = 5;
const COLUMNS: [Weekday; 5] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
];

/// ASCII calendar of one combination: weekday columns, one row per five
/// minutes within the configured day window.
pub fn format_grid(
    subjects: &[Subject],
    combination: &Combination,
    day_start: u16,
    day_end: u16,
) -> String {
    let mut cells: HashMap<(usize, u16), &str> = HashMap::new();
    for (subject, slot) in combination.chosen_slots(subjects) {
        let interval = &slot.interval;
        // Align to the row raster so slots starting off-grid (e.g. 08:03)
        // still land on the rows they intersect.
        let offset = interval.start.saturating_sub(day_start);
        let mut t = day_start + (offset / STEP_MINUTES) * STEP_MINUTES;
        while t < interval.end && t < day_end {
            cells.insert((interval.weekday.index(), t), subject.name.as_str());
            t += STEP_MINUTES;
        }
    }

    let mut out = String::new();
    out.push_str("      ");
    for day in COLUMNS {
        out.push_str(&format!("{:^width$}", day.full_label(), width = FIELD_WIDTH));
    }
    out.push('\n');

    let mut t = day_start;
    while t < day_end {
        out.push_str(&format!("{:<6}", clock_label(t)));
        for day in COLUMNS {
            let name = cells.get(&(day.index(), t)).copied().unwrap_or("");
            out.push_str(&format!("{:^width$}", name, width = FIELD_WIDTH));
        }
        out.push('\n');
        t += STEP_MINUTES;
    }
    out
}

pub fn write_grid(
    path: &Path,
    subjects: &[Subject],
    combination: &Combination,
    day_start: u16,
    day_end: u16,
) -> io::Result<()> {
    fs::write(path, format_grid(subjects, combination, day_start, day_end))
}
