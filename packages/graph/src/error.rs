use thiserror::Error;

/// Errors raised while parsing or walking a dependency graph.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An instruction line ends before the column holding a step name.
    #[error("line {line} is too short to name two steps ({len} characters)")]
    LineTooShort { line: usize, len: usize },

    /// Some steps can never become available.
    #[error("dependency cycle: {remaining} steps could not be ordered")]
    Cycle { remaining: usize },

    #[error("at least one worker is required")]
    NoWorkers,
}
