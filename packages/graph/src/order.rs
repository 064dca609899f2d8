//! Topological ordering with a smallest-first tie-break.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

use tracing::debug;

use crate::dependency::DependencyGraph;
use crate::error::GraphError;

impl<N: Ord + Copy + Debug> DependencyGraph<N> {
    /// Returns the lexicographically smallest topological order of the graph.
    ///
    /// Kahn's algorithm with a min-heap of available nodes: the smallest node
    /// with no unsatisfied prerequisite is emitted next, and its successors
    /// become available once their last prerequisite is emitted.
    ///
    /// Returns `GraphError::Cycle` if some nodes never become available.
    ///
    /// # Example
    ///
    /// ```
    /// use graph::DependencyGraph;
    ///
    /// let graph: DependencyGraph<char> =
    ///     [('C', 'A'), ('C', 'F'), ('A', 'B'), ('A', 'D'), ('B', 'E'), ('D', 'E'), ('F', 'E')]
    ///         .into_iter()
    ///         .collect();
    /// let order: String = graph.lexicographic_order().unwrap().into_iter().collect();
    /// assert_eq!(order, "CABDFE");
    /// ```
    pub fn lexicographic_order(&self) -> Result<Vec<N>, GraphError> {
        let mut in_degree = self.in_degrees();
        let mut available: BinaryHeap<Reverse<N>> = in_degree
            .iter()
            .filter(|&(_, &degree)| degree == 0)
            .map(|(&node, _)| Reverse(node))
            .collect();
        let mut order = Vec::with_capacity(self.len());

        while let Some(Reverse(node)) = available.pop() {
            order.push(node);
            for next in self.successors(node) {
                if let Some(degree) = in_degree.get_mut(&next) {
                    *degree -= 1;
                    if *degree == 0 {
                        available.push(Reverse(next));
                    }
                }
            }
        }

        if order.len() < self.len() {
            let remaining = self.len() - order.len();
            debug!(remaining, ordered = ?order, "ordering stopped early");
            return Err(GraphError::Cycle { remaining });
        }

        Ok(order)
    }
}
