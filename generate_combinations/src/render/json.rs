use serde::Serialize;
use std::error::Error;
use std::fs;
use std::path::Path;
use timetable_core::{Combination, SlotOption, Subject};

#[derive(Serialize)]
struct CombinationReport<'a> {
    score: u32,
    complete: bool,
    subjects: Vec<SubjectReport<'a>>,
}

#[derive(Serialize)]
struct SubjectReport<'a> {
    name: &'a str,
    color: Option<&'a str>,
    chosen: Vec<&'a SlotOption>,
}

/// The full ranked list as JSON, chosen slots with their location and color
/// metadata intact.
pub fn format_report(
    subjects: &[Subject],
    ranked: &[Combination],
) -> serde_json::Result<String> {
    let reports: Vec<CombinationReport> = ranked
        .iter()
        .map(|combination| CombinationReport {
            score: combination.score,
            complete: combination.is_complete(subjects),
            subjects: combination
                .choices
                .iter()
                .zip(subjects)
                .map(|(chosen, subject)| SubjectReport {
                    name: &subject.name,
                    color: subject.color.as_deref(),
                    chosen: chosen.iter().map(|&i| &subject.slots[i]).collect(),
                })
                .collect(),
        })
        .collect();
    serde_json::to_string_pretty(&reports)
}

pub fn write_report(
    path: &Path,
    subjects: &[Subject],
    ranked: &[Combination],
) -> Result<(), Box<dyn Error>> {
    fs::write(path, format_report(subjects, ranked)?)?;
    Ok(())
}
