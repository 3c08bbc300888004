pub mod subject_file;

pub use subject_file::{load_subjects, parse_subject, ParseError};
