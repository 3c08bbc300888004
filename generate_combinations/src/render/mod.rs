pub mod grid;
pub mod json;
pub mod text;

use timetable_core::{Combination, Subject};

/// Output files are numbered in ranked order; less-than-perfect combinations
/// are flagged in the filename.
pub fn schedule_filename(
    version: usize,
    combination: &Combination,
    subjects: &[Subject],
    suffix: &str,
) -> String {
    let completeness = if combination.is_complete(subjects) {
        ""
    } else {
        "_INCOMPLETE_"
    };
    format!("schedule{}{}{}", version, completeness, suffix)
}

pub fn clock_label(minutes: u16) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
