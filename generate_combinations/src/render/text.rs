use crate::render::clock_label;
use std::fs;
use std::io;
use std::path::Path;
use timetable_core::{Combination, Subject};

/// Plain listing of one combination, one line per chosen slot, ordered by
/// weekday and start time.
pub fn format_plain(subjects: &[Subject], combination: &Combination) -> String {
    let mut chosen: Vec<_> = combination.chosen_slots(subjects).collect();
    chosen.sort_by_key(|(_, slot)| (slot.interval.weekday, slot.interval.start));

    let mut out = String::new();
    for (subject, slot) in chosen {
        out.push_str(&format!(
            "{} {}-{} {}",
            slot.interval.weekday,
            clock_label(slot.interval.start),
            clock_label(slot.interval.end),
            subject.name
        ));
        if let Some(location) = &slot.location {
            out.push_str(&format!(" ({})", location));
        }
        out.push('\n');
    }
    out
}

pub fn write_plain(
    path: &Path,
    subjects: &[Subject],
    combination: &Combination,
) -> io::Result<()> {
    fs::write(path, format_plain(subjects, combination))
}
