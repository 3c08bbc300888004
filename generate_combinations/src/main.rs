mod cli;
mod debug;
mod parser;
mod render;

use crate::cli::parse_config_from_args;
use crate::debug::debug_print;
use colored::*;
use std::error::Error;
use std::fs;
use std::path::Path;
use timetable_core::{rank, Solver};

fn main() -> Result<(), Box<dyn Error>> {
    let config = parse_config_from_args();

    debug_print(
        config.debug,
        "📂",
        &format!("loading subject definitions from {}", config.subjects_dir),
    );
    let subjects = parser::load_subjects(Path::new(&config.subjects_dir))?;
    println!(
        "loaded {} subjects from {}",
        subjects.len(),
        config.subjects_dir
    );

    let solver = Solver::new(subjects)?.with_budget(config.budget);
    debug_print(config.debug, "🔍", "searching valid combinations");
    let combinations = solver.solve()?;
    let found = combinations.len();
    let ranked = rank(combinations);
    let duplicates = found - ranked.len();

    let out_dir = Path::new(&config.out_dir);
    prepare_out_dir(out_dir)?;

    let mut incompletes = 0;
    for (i, combination) in ranked.iter().enumerate() {
        let version = i + 1;
        if !combination.is_complete(solver.subjects()) {
            incompletes += 1;
        }
        if config.text_file {
            let filename =
                render::schedule_filename(version, combination, solver.subjects(), ".txt");
            render::text::write_plain(&out_dir.join(&filename), solver.subjects(), combination)?;
            debug_print(config.debug, "💾", &format!("saved {}", filename));
        }
        if config.ascii_calendar {
            let filename =
                render::schedule_filename(version, combination, solver.subjects(), "_ascii.txt");
            render::grid::write_grid(
                &out_dir.join(&filename),
                solver.subjects(),
                combination,
                config.day_start_minutes,
                config.day_end_minutes,
            )?;
            debug_print(config.debug, "💾", &format!("saved {}", filename));
        }
    }
    if config.json_report {
        render::json::write_report(&out_dir.join("combinations.json"), solver.subjects(), &ranked)?;
    }

    if ranked.is_empty() {
        println!(
            "{}",
            "no conflict-free combination exists".yellow().bold()
        );
    } else {
        println!(
            "{}",
            format!("best combination (score {}):", ranked[0].score)
                .green()
                .bold()
        );
        print!("{}", render::text::format_plain(solver.subjects(), &ranked[0]));
    }

    let sched_str = if ranked.len() == 1 {
        "schedule"
    } else {
        "schedules"
    };
    println!(
        "created {} {}, of which {} incomplete (plus {} duplicates)",
        ranked.len(),
        sched_str,
        incompletes,
        duplicates
    );

    Ok(())
}

/// Clears leftovers from previous runs so version numbers stay meaningful.
fn prepare_out_dir(dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dir)?;
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if name.starts_with("schedule") || name == "combinations.json" {
            fs::remove_file(path)?;
        }
    }
    Ok(())
}
