use std::env;
use timetable_core::SearchBudget;

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub subjects_dir: String,
    pub out_dir: String,
    pub day_start_minutes: u16, // e.g. 8*60 for 08:00
    pub day_end_minutes: u16,   // e.g. 20*60 for 20:00
    pub budget: SearchBudget,
    pub text_file: bool,
    pub ascii_calendar: bool,
    pub json_report: bool,
    pub debug: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            subjects_dir: "./subjects".to_string(),
            out_dir: "./schedules".to_string(),
            day_start_minutes: 8 * 60,
            day_end_minutes: 20 * 60,
            budget: SearchBudget::default(),
            text_file: false,
            ascii_calendar: true,
            json_report: false,
            debug: false,
        }
    }
}

/// Parses command-line arguments to set:
/// - subject/output directories via --subjects=DIR and --out=DIR
/// - calendar day window via --start=HH:MM and --end=HH:MM
/// - search cutoffs via --max-steps=N and --max-results=N
/// - output toggles --text, --json, and --debug
pub fn parse_config_from_args() -> RunConfig {
    let args: Vec<String> = env::args().collect();
    let mut config = RunConfig::default();
    apply_args(&args, &mut config);
    config
}

pub fn apply_args(args: &[String], config: &mut RunConfig) {
    if let Some(dir) = find_value(args, "--subjects=") {
        config.subjects_dir = dir.to_string();
    }
    if let Some(dir) = find_value(args, "--out=") {
        config.out_dir = dir.to_string();
    }

    // Day window for the calendar grid
    if let Some(minutes) = find_value(args, "--start=").and_then(parse_clock) {
        config.day_start_minutes = minutes;
    }
    if let Some(minutes) = find_value(args, "--end=").and_then(parse_clock) {
        config.day_end_minutes = minutes;
    }

    // Search budget
    if let Some(n) = find_value(args, "--max-steps=").and_then(|s| s.parse::<u64>().ok()) {
        config.budget.max_steps = Some(n);
    }
    if let Some(n) = find_value(args, "--max-results=").and_then(|s| s.parse::<usize>().ok()) {
        config.budget.max_results = Some(n);
    }

    if args.iter().any(|a| a == "--text") {
        config.text_file = true;
    }
    if args.iter().any(|a| a == "--no-grid") {
        config.ascii_calendar = false;
    }
    if args.iter().any(|a| a == "--json") {
        config.json_report = true;
    }
    if args.iter().any(|a| a == "--debug") {
        config.debug = true;
    }
}

fn find_value<'a>(args: &'a [String], prefix: &str) -> Option<&'a str> {
    args.iter()
        .find(|a| a.starts_with(prefix))
        .and_then(|a| a.strip_prefix(prefix))
}

fn parse_clock(time_str: &str) -> Option<u16> {
    let (h_str, m_str) = time_str.split_once(':')?;
    let (h, m) = (h_str.parse::<u16>().ok()?, m_str.parse::<u16>().ok()?);
    Some(h * 60 + m)
}

#[cfg(test)]
mod tests {
    use super::{apply_args, RunConfig};

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_hold_without_flags() {
        let mut config = RunConfig::default();
        apply_args(&args(&["generate_combinations"]), &mut config);
        assert_eq!(config.subjects_dir, "./subjects");
        assert_eq!(config.day_start_minutes, 8 * 60);
        assert_eq!(config.day_end_minutes, 20 * 60);
        assert!(config.ascii_calendar);
        assert!(!config.text_file);
        assert!(config.budget.max_steps.is_none());
    }

    #[test]
    fn flags_override_defaults() {
        let mut config = RunConfig::default();
        apply_args(
            &args(&[
                "generate_combinations",
                "--subjects=input",
                "--out=output",
                "--start=7:30",
                "--end=21:00",
                "--max-steps=5000",
                "--max-results=40",
                "--text",
                "--json",
                "--debug",
            ]),
            &mut config,
        );
        assert_eq!(config.subjects_dir, "input");
        assert_eq!(config.out_dir, "output");
        assert_eq!(config.day_start_minutes, 7 * 60 + 30);
        assert_eq!(config.day_end_minutes, 21 * 60);
        assert_eq!(config.budget.max_steps, Some(5000));
        assert_eq!(config.budget.max_results, Some(40));
        assert!(config.text_file && config.json_report && config.debug);
    }
}
