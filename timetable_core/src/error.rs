use thiserror::Error;

/// Result type for solver operations.
pub type Result<T> = std::result::Result<T, SolverError>;

#[derive(Error, Debug)]
pub enum SolverError {
    /// An exactly-one subject offers nothing to choose from.
    #[error("subject '{subject}' requires exactly one slot but offers none")]
    EmptySelection { subject: String },

    /// A slot interval with start >= end.
    #[error("subject '{subject}' has an invalid time slot: {detail}")]
    InvalidInterval { subject: String, detail: String },

    /// Two slots of the same subject collide with each other.
    #[error("subject '{subject}' overlaps itself (slots {a} and {b})")]
    SelfOverlap {
        subject: String,
        a: usize,
        b: usize,
    },

    /// The search cutoff was reached before the tree was exhausted.
    /// Distinct from an empty result, which means no combination fits.
    #[error("search budget exceeded after {visited} steps")]
    BudgetExceeded { visited: u64 },
}
