//! Directed graph of "must come before" constraints between steps.

use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

use crate::error::GraphError;

/// Column of the step that must finish first in an instruction line.
pub const BEFORE_COLUMN: usize = 5;
/// Column of the step that is blocked in an instruction line.
pub const AFTER_COLUMN: usize = 36;

/// A dependency graph where an edge `u -> v` means `u` must come before `v`.
///
/// Every node named by an edge is part of the graph, including steps with no
/// successors. Duplicate edges collapse into one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyGraph<N> {
    successors: BTreeMap<N, BTreeSet<N>>,
}

impl<N: Ord + Copy> DependencyGraph<N> {
    pub fn new() -> Self {
        DependencyGraph {
            successors: BTreeMap::new(),
        }
    }

    pub fn add_edge(&mut self, before: N, after: N) {
        self.successors.entry(after).or_default();
        self.successors.entry(before).or_default().insert(after);
    }

    pub fn len(&self) -> usize {
        self.successors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.successors.is_empty()
    }

    pub fn contains(&self, node: N) -> bool {
        self.successors.contains_key(&node)
    }

    /// Nodes in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = N> + '_ {
        self.successors.keys().copied()
    }

    /// Direct successors of `node` in ascending order. Unknown nodes have none.
    pub fn successors(&self, node: N) -> impl Iterator<Item = N> + '_ {
        self.successors.get(&node).into_iter().flatten().copied()
    }

    /// Number of unsatisfied prerequisites of every node.
    pub fn in_degrees(&self) -> BTreeMap<N, usize> {
        let mut in_degree: BTreeMap<N, usize> = self.nodes().map(|node| (node, 0)).collect();
        for &after in self.successors.values().flatten() {
            *in_degree.entry(after).or_default() += 1;
        }
        in_degree
    }
}

impl<N: Ord + Copy> Default for DependencyGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Ord + Copy> FromIterator<(N, N)> for DependencyGraph<N> {
    fn from_iter<I: IntoIterator<Item = (N, N)>>(edges: I) -> Self {
        let mut graph = DependencyGraph::new();
        for (before, after) in edges {
            graph.add_edge(before, after);
        }
        graph
    }
}

/// Parses instruction lines of the form
/// `Step C must be finished before step A can begin.`
///
/// Only the characters at [`BEFORE_COLUMN`] and [`AFTER_COLUMN`] are read.
/// Blank lines are skipped.
///
/// # Example
///
/// ```
/// use graph::DependencyGraph;
///
/// let graph: DependencyGraph<char> =
///     "Step C must be finished before step A can begin.".parse().unwrap();
/// assert_eq!(graph.nodes().collect::<String>(), "AC");
/// assert_eq!(graph.successors('C').collect::<String>(), "A");
/// ```
impl FromStr for DependencyGraph<char> {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut graph = DependencyGraph::new();

        for (index, line) in s.lines().enumerate() {
            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }

            let chars: Vec<char> = line.chars().collect();
            let too_short = GraphError::LineTooShort {
                line: index + 1,
                len: chars.len(),
            };
            let before = *chars.get(BEFORE_COLUMN).ok_or(too_short.clone())?;
            let after = *chars.get(AFTER_COLUMN).ok_or(too_short)?;

            graph.add_edge(before, after);
        }

        Ok(graph)
    }
}
