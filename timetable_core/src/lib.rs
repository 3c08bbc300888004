pub mod engine;
pub mod error;
pub mod ranking;
pub mod types;

pub use engine::search::{Combination, SearchBudget, Solver};
pub use error::{Result, SolverError};
pub use ranking::rank;
pub use types::interval::TimeInterval;
pub use types::subject::{SelectionMode, SlotOption, Subject};
pub use types::weekday::Weekday;
