use thiserror::Error;

/// Failures the engine can report. Inputs are validated eagerly at the
/// start of a run; randomness-driven branches are never errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    #[error("team {team} has an empty roster")]
    EmptyRoster { team: String },

    #[error("iteration count must be at least 1, got {0}")]
    InvalidIterations(u32),

    #[error("simulation cancelled")]
    Cancelled,
}
