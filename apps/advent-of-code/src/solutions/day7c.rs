use super::{WORKERS, parse_instructions, step_cost};
use crate::error::Error;

/// Seconds until every step is done with all workers helping.
pub fn solve(input: &str) -> Result<String, Error> {
    let graph = parse_instructions(input)?;
    let seconds = graph.completion_time(WORKERS, step_cost)?;
    Ok(seconds.to_string())
}
