use tracing::debug;

use super::{parse_instructions, step_cost};
use crate::error::Error;

/// Cost of the heaviest path from the first step of the order to the last.
pub fn solve(input: &str) -> Result<String, Error> {
    let graph = parse_instructions(input)?;
    let order = graph.lexicographic_order()?;

    let (Some(&first), Some(&last)) = (order.first(), order.last()) else {
        return Err(Error::EmptyGraph);
    };

    let path = graph
        .heaviest_path(first, last, step_cost)
        .ok_or(Error::NoPath {
            from: first,
            to: last,
        })?;
    debug!(path = %path.nodes.iter().collect::<String>(), cost = path.cost, "heaviest path");

    Ok(path.cost.to_string())
}
