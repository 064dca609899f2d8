//! Heaviest simple path between two nodes, found by exhaustive enumeration.

use std::collections::BTreeSet;
use std::fmt::Debug;

use tracing::trace;

use crate::dependency::DependencyGraph;

/// A simple path together with the summed cost of its nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedPath<N> {
    pub cost: u64,
    pub nodes: Vec<N>,
}

struct PathSearch<'g, N, F> {
    graph: &'g DependencyGraph<N>,
    target: N,
    cost: F,
    stack: Vec<N>,
    visited: BTreeSet<N>,
    paths: usize,
    best: Option<WeightedPath<N>>,
}

impl<N, F> PathSearch<'_, N, F>
where
    N: Ord + Copy + Debug,
    F: Fn(N) -> u64,
{
    fn walk(&mut self, node: N, running: u64) {
        let running = running + (self.cost)(node);
        self.stack.push(node);

        if node == self.target {
            self.paths += 1;
            trace!(cost = running, path = ?self.stack, "found path");
            if self.best.as_ref().is_none_or(|best| running > best.cost) {
                self.best = Some(WeightedPath {
                    cost: running,
                    nodes: self.stack.clone(),
                });
            }
        } else {
            self.visited.insert(node);
            let graph = self.graph;
            for next in graph.successors(node) {
                if !self.visited.contains(&next) {
                    self.walk(next, running);
                }
            }
            self.visited.remove(&node);
        }

        self.stack.pop();
    }
}

impl<N: Ord + Copy + Debug> DependencyGraph<N> {
    /// Finds the simple path from `from` to `to` with the largest total cost.
    ///
    /// Every simple path is enumerated; the cost of a path is the sum of
    /// `cost(node)` over all of its nodes, both endpoints included. When two
    /// paths tie, the one found first (smallest successors first) is kept.
    /// Returns `None` if `to` is unreachable from `from`.
    ///
    /// This is exponential in the number of paths and is meant for small graphs.
    ///
    /// # Example
    ///
    /// ```
    /// use graph::DependencyGraph;
    ///
    /// let graph: DependencyGraph<char> =
    ///     [('A', 'B'), ('B', 'D'), ('A', 'C'), ('C', 'D')].into_iter().collect();
    /// let path = graph.heaviest_path('A', 'D', |c| c as u64 - 64).unwrap();
    /// assert_eq!(path.cost, 1 + 3 + 4);
    /// assert_eq!(path.nodes, vec!['A', 'C', 'D']);
    /// ```
    pub fn heaviest_path<F>(&self, from: N, to: N, cost: F) -> Option<WeightedPath<N>>
    where
        F: Fn(N) -> u64,
    {
        if !self.contains(from) || !self.contains(to) {
            return None;
        }

        let mut search = PathSearch {
            graph: self,
            target: to,
            cost,
            stack: Vec::new(),
            visited: BTreeSet::new(),
            paths: 0,
            best: None,
        };
        search.walk(from, 0);

        trace!(paths = search.paths, "path enumeration finished");
        search.best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DependencyGraph<char> {
        [
            ('C', 'A'),
            ('C', 'F'),
            ('A', 'B'),
            ('A', 'D'),
            ('B', 'E'),
            ('D', 'E'),
            ('F', 'E'),
        ]
        .into_iter()
        .collect()
    }

    fn rank(step: char) -> u64 {
        step as u64 - 64
    }

    #[test]
    fn test_sample_without_base() {
        // C-A-B-E = 11, C-A-D-E = 13, C-F-E = 14
        let path = sample().heaviest_path('C', 'E', rank).unwrap();
        assert_eq!(path.cost, 14);
        assert_eq!(path.nodes, vec!['C', 'F', 'E']);
    }

    #[test]
    fn test_sample_with_base() {
        // the base cost rewards longer paths: C-A-D-E = 13 + 4 * 60
        let path = sample().heaviest_path('C', 'E', |step| rank(step) + 60).unwrap();
        assert_eq!(path.cost, 253);
        assert_eq!(path.nodes, vec!['C', 'A', 'D', 'E']);
    }

    #[test]
    fn test_single_node_path() {
        let path = sample().heaviest_path('A', 'A', rank).unwrap();
        assert_eq!(path.cost, 1);
        assert_eq!(path.nodes, vec!['A']);
    }

    #[test]
    fn test_unreachable_target() {
        assert_eq!(sample().heaviest_path('E', 'C', rank), None);
        assert_eq!(sample().heaviest_path('F', 'B', rank), None);
    }

    #[test]
    fn test_unknown_endpoint() {
        assert_eq!(sample().heaviest_path('C', 'Z', rank), None);
    }

    #[test]
    fn test_cycle_does_not_repeat_nodes() {
        // A -> B -> C -> B would loop forever without the visited set
        let graph: DependencyGraph<char> =
            [('A', 'B'), ('B', 'C'), ('C', 'B'), ('C', 'D')].into_iter().collect();
        let path = graph.heaviest_path('A', 'D', rank).unwrap();
        assert_eq!(path.nodes, vec!['A', 'B', 'C', 'D']);
        assert_eq!(path.cost, 10);
    }

    #[test]
    fn test_tie_keeps_first_path() {
        let graph: DependencyGraph<char> =
            [('A', 'B'), ('A', 'C'), ('B', 'D'), ('C', 'D')].into_iter().collect();
        let path = graph.heaviest_path('A', 'D', |_| 1).unwrap();
        assert_eq!(path.cost, 3);
        assert_eq!(path.nodes, vec!['A', 'B', 'D']);
    }
}
