use tracing::debug;

use super::parse_instructions;
use crate::error::Error;

/// Order in which the steps are completed by a single worker.
pub fn solve(input: &str) -> Result<String, Error> {
    let graph = parse_instructions(input)?;
    debug!(steps = graph.len(), "parsed instructions");

    let order = graph.lexicographic_order()?;
    Ok(order.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solutions::SAMPLE_INSTRUCTIONS;

    #[test]
    fn test_solve() {
        assert_eq!(solve(SAMPLE_INSTRUCTIONS).unwrap(), "CABDFE");
    }

    #[test]
    fn test_cycle_is_fatal() {
        let input = "Step A must be finished before step B can begin.
Step B must be finished before step A can begin.";
        assert!(matches!(
            solve(input),
            Err(Error::Graph(graph::GraphError::Cycle { remaining: 2 }))
        ));
    }

    #[test]
    fn test_short_line_is_fatal() {
        assert!(matches!(
            solve("Step A must be"),
            Err(Error::Graph(graph::GraphError::LineTooShort { line: 1, .. }))
        ));
    }
}
