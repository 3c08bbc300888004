use regex::Regex;
use std::fs;
use std::path::Path;
use thiserror::Error;
use timetable_core::{SelectionMode, SlotOption, Subject, TimeInterval, Weekday};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("no subject definition files found in {0}")]
    NoSubjects(String),

    #[error("subject '{subject}' doesn't have a recognizable type")]
    UnknownMode { subject: String },

    #[error("subject '{subject}': can't read times/location from '{line}'")]
    BadLine { subject: String, line: String },

    #[error("subject '{subject}': wrong weekday format '{day}'")]
    UnknownWeekday { subject: String, day: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Solver(#[from] timetable_core::SolverError),
}

/// Reads every `<name>.txt` in `dir` into a Subject. File order is sorted by
/// path so the run is independent of directory enumeration order.
pub fn load_subjects(dir: &Path) -> Result<Vec<Subject>, ParseError> {
    let mut paths: Vec<_> = fs::read_dir(dir)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.extension().map(|e| e == "txt").unwrap_or(false))
        .collect();
    paths.sort();

    if paths.is_empty() {
        return Err(ParseError::NoSubjects(dir.display().to_string()));
    }

    let mut subjects = Vec::with_capacity(paths.len());
    for path in paths {
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let text = fs::read_to_string(&path)?;
        subjects.push(parse_subject(&name, &text)?);
    }
    Ok(subjects)
}

/// Parses one subject definition:
///
/// ```text
/// UE
/// steelblue          (optional: color name, #hex, or r,g,b tuple)
/// Di 8:00-9:30 Audimax
/// Do 10:00-11:30
/// ```
///
/// `UE` subjects require exactly one of the listed slots, `VO` subjects
/// strive to fill all of them.
pub fn parse_subject(name: &str, text: &str) -> Result<Subject, ParseError> {
    let ue_re = Regex::new(r"[Uu][Ee]").unwrap();
    let vo_re = Regex::new(r"[Vv][Oo]").unwrap();

    let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());

    let mode = match lines.next() {
        Some(line) if ue_re.is_match(line) => SelectionMode::ExactlyOne,
        Some(line) if vo_re.is_match(line) => SelectionMode::AllPreferred,
        _ => {
            return Err(ParseError::UnknownMode {
                subject: name.to_string(),
            })
        }
    };

    let mut color: Option<String> = None;
    let mut slots = Vec::new();
    for (i, line) in lines.enumerate() {
        // The line after the type tag may carry a color instead of a slot.
        if i == 0 {
            if let Some(parsed) = parse_color(line) {
                color = Some(parsed);
                continue;
            }
        }
        slots.push(parse_slot_line(name, line)?);
    }

    Ok(Subject::new(name, mode, slots, color.as_deref())?)
}

/// `<weekday> H:MM-H:MM [location]`, with `:` or `.` as the time separator.
fn parse_slot_line(subject: &str, line: &str) -> Result<SlotOption, ParseError> {
    let slot_re =
        Regex::new(r"^(\w+)\W?\s+(\d{1,2})[:.](\d{2})-(\d{1,2})[:.](\d{2})\s*(.*)$").unwrap();
    let caps = slot_re
        .captures(line)
        .ok_or_else(|| ParseError::BadLine {
            subject: subject.to_string(),
            line: line.to_string(),
        })?;

    let weekday = parse_weekday(&caps[1]).ok_or_else(|| ParseError::UnknownWeekday {
        subject: subject.to_string(),
        day: caps[1].to_string(),
    })?;

    // The regex only admits 1-2 digit groups, so these cannot fail.
    let start = caps[2].parse::<u16>().unwrap() * 60 + caps[3].parse::<u16>().unwrap();
    let end = caps[4].parse::<u16>().unwrap() * 60 + caps[5].parse::<u16>().unwrap();

    let location = caps.get(6).map(|m| m.as_str().trim()).filter(|s| !s.is_empty());
    Ok(SlotOption::new(
        TimeInterval::new(weekday, start, end),
        location,
    ))
}

/// Accepts the two-letter abbreviation or any longer prefix of the full
/// weekday name (Mo, Di, Mi, Do, Fr, Sa, So / Montag, Dienstag, ...).
fn parse_weekday(day: &str) -> Option<Weekday> {
    let lower = day.to_lowercase();
    if lower.len() < 2 {
        return None;
    }
    Weekday::ALL
        .into_iter()
        .find(|weekday| weekday.full_label().to_lowercase().starts_with(&lower))
}

/// Colors come as an r,g,b tuple (normalized to `r,g,b`), a `#hex` code, or
/// a bare color name; they stay opaque strings from here on.
fn parse_color(line: &str) -> Option<String> {
    let tuple_re =
        Regex::new(r"^\(?(\d{1,3})\)? ?\W? ?\(?(\d{1,3})\)? ?\W? ?\(?(\d{1,3})\)?$").unwrap();
    let string_re = Regex::new(r"(^#[\dA-Fa-f]{3,6}$|^[A-Za-z]+$)").unwrap();

    if let Some(caps) = tuple_re.captures(line) {
        return Some(format!("{},{},{}", &caps[1], &caps[2], &caps[3]));
    }
    if string_re.is_match(line) {
        return Some(line.to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::{load_subjects, parse_subject, ParseError};
    use std::fs;
    use timetable_core::{SelectionMode, Weekday};

    #[test]
    fn parses_exactly_one_subject_with_locations() {
        let subject = parse_subject(
            "Analysis",
            "UE\nDi 8:00-9:30 Audimax\nDo 10:00-11:30 other place\n",
        )
        .unwrap();
        assert_eq!(subject.mode, SelectionMode::ExactlyOne);
        assert_eq!(subject.slots.len(), 2);
        assert_eq!(subject.slots[0].interval.weekday, Weekday::Tuesday);
        assert_eq!(subject.slots[0].interval.start, 8 * 60);
        assert_eq!(subject.slots[0].interval.end, 9 * 60 + 30);
        assert_eq!(subject.slots[0].location.as_deref(), Some("Audimax"));
        assert_eq!(subject.slots[1].location.as_deref(), Some("other place"));
        assert!(subject.color.is_none());
    }

    #[test]
    fn parses_all_preferred_with_named_color() {
        let subject = parse_subject(
            "Physik",
            "VO\nsteelblue\nMo 11:00-12:30\nMi 11:00-12.00\n",
        )
        .unwrap();
        assert_eq!(subject.mode, SelectionMode::AllPreferred);
        assert_eq!(subject.color.as_deref(), Some("steelblue"));
        // '.' is accepted as the minute separator
        assert_eq!(subject.slots[1].interval.end, 12 * 60);
    }

    #[test]
    fn normalizes_rgb_tuple_color() {
        let subject = parse_subject("Physik", "VO\n70, 130, 180\nMo 11:00-12:30\n").unwrap();
        assert_eq!(subject.color.as_deref(), Some("70,130,180"));
    }

    #[test]
    fn accepts_hex_color() {
        let subject = parse_subject("Physik", "VO\n#4682b4\nMo 11:00-12:30\n").unwrap();
        assert_eq!(subject.color.as_deref(), Some("#4682b4"));
    }

    #[test]
    fn accepts_full_weekday_names() {
        let subject = parse_subject("Physik", "VO\nDonnerstag 9:15-10:45\n").unwrap();
        assert_eq!(subject.slots[0].interval.weekday, Weekday::Thursday);
    }

    #[test]
    fn rejects_unknown_mode() {
        let err = parse_subject("Physik", "XX\nMo 11:00-12:30\n").unwrap_err();
        assert!(matches!(err, ParseError::UnknownMode { .. }));
    }

    #[test]
    fn rejects_unknown_weekday() {
        let err = parse_subject("Physik", "VO\nXy 11:00-12:30\n").unwrap_err();
        assert!(matches!(err, ParseError::UnknownWeekday { .. }));
    }

    #[test]
    fn rejects_garbled_time_line() {
        let err = parse_subject("Physik", "VO\nMo eleven-noon\n").unwrap_err();
        assert!(matches!(err, ParseError::BadLine { .. }));
    }

    #[test]
    fn configuration_errors_surface_through_parse() {
        // Two slots of one subject colliding is a configuration error.
        let err = parse_subject("Physik", "VO\nMo 11:00-13:00\nMo 12:00-14:00\n").unwrap_err();
        assert!(matches!(err, ParseError::Solver(_)));
    }

    #[test]
    fn loads_directory_sorted_by_filename() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Zahlentheorie.txt"), "UE\nMo 8:00-9:00\n").unwrap();
        fs::write(dir.path().join("Analysis.txt"), "VO\nDi 8:00-9:00\n").unwrap();
        fs::write(dir.path().join("notes.md"), "ignored").unwrap();

        let subjects = load_subjects(dir.path()).unwrap();
        assert_eq!(subjects.len(), 2);
        assert_eq!(subjects[0].name, "Analysis");
        assert_eq!(subjects[1].name, "Zahlentheorie");
    }

    #[test]
    fn empty_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_subjects(dir.path()).unwrap_err();
        assert!(matches!(err, ParseError::NoSubjects(_)));
    }
}
