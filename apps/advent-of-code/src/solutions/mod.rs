pub mod day11a;
pub mod day11b;
pub mod day7a;
pub mod day7b;
pub mod day7c;

use graph::DependencyGraph;

use crate::error::Error;

/// Seconds every day 7 step takes on top of its alphabetic rank.
pub const BASE_STEP_COST: u64 = 60;

/// Elves available to work on day 7 steps at the same time.
pub const WORKERS: usize = 5;

/// Alphabetic rank of a step: `A` is 1, `B` is 2, ...
pub fn step_rank(step: char) -> u64 {
    u64::from(step).saturating_sub(64)
}

/// Seconds a step takes: its character code minus 64, plus the base cost.
pub fn step_cost(step: char) -> u64 {
    (u64::from(step) + BASE_STEP_COST).saturating_sub(64)
}

pub(crate) fn parse_instructions(input: &str) -> Result<DependencyGraph<char>, Error> {
    let graph: DependencyGraph<char> = input.parse()?;
    if graph.is_empty() {
        return Err(Error::EmptyGraph);
    }
    Ok(graph)
}

#[cfg(test)]
pub(crate) const SAMPLE_INSTRUCTIONS: &str = "Step C must be finished before step A can begin.
Step C must be finished before step F can begin.
Step A must be finished before step B can begin.
Step A must be finished before step D can begin.
Step B must be finished before step E can begin.
Step D must be finished before step E can begin.
Step F must be finished before step E can begin.
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_cost() {
        assert_eq!(step_rank('A'), 1);
        assert_eq!(step_rank('Z'), 26);
        assert_eq!(step_cost('A'), 61);
        assert_eq!(step_cost('Z'), 86);
    }

    #[test]
    fn test_step_cost_below_letters() {
        // characters before 'A' still follow code - 64 + 60
        assert_eq!(step_cost('1'), 45);
        assert_eq!(step_cost('@'), 60);
        assert_eq!(step_cost('\u{4}'), 0);
    }

    #[test]
    fn test_empty_instructions() {
        assert!(matches!(parse_instructions("\n\n"), Err(Error::EmptyGraph)));
    }
}
