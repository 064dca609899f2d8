//! Completion time of all steps when several workers run in parallel.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

use tracing::trace;

use crate::dependency::DependencyGraph;
use crate::error::GraphError;

impl<N: Ord + Copy + Debug> DependencyGraph<N> {
    /// Time needed for `workers` parallel workers to complete every step.
    ///
    /// Idle workers always pick the smallest available steps. A step becomes
    /// available once all of its prerequisites have finished, and steps that
    /// finish at the same moment release their successors together.
    ///
    /// # Example
    ///
    /// ```
    /// use graph::DependencyGraph;
    ///
    /// let graph: DependencyGraph<char> = [('A', 'C'), ('B', 'C')].into_iter().collect();
    /// // A and B run side by side, then C
    /// assert_eq!(graph.completion_time(2, |_| 10), Ok(20));
    /// assert_eq!(graph.completion_time(1, |_| 10), Ok(30));
    /// ```
    pub fn completion_time<F>(&self, workers: usize, duration: F) -> Result<u64, GraphError>
    where
        F: Fn(N) -> u64,
    {
        if workers == 0 {
            return Err(GraphError::NoWorkers);
        }

        let mut in_degree = self.in_degrees();
        let mut available: BinaryHeap<Reverse<N>> = in_degree
            .iter()
            .filter(|&(_, &degree)| degree == 0)
            .map(|(&node, _)| Reverse(node))
            .collect();
        let mut in_progress: BinaryHeap<Reverse<(u64, N)>> = BinaryHeap::new();
        let mut now = 0;
        let mut finished = 0;

        loop {
            while in_progress.len() < workers {
                let Some(Reverse(step)) = available.pop() else {
                    break;
                };
                trace!(time = now, ?step, "step started");
                in_progress.push(Reverse((now + duration(step), step)));
            }

            let Some(Reverse((done_at, step))) = in_progress.pop() else {
                break;
            };
            now = done_at;

            let mut completed = vec![step];
            while in_progress
                .peek()
                .is_some_and(|Reverse((other_done_at, _))| *other_done_at == now)
            {
                if let Some(Reverse((_, other))) = in_progress.pop() {
                    completed.push(other);
                }
            }

            for step in completed {
                trace!(time = now, ?step, "step finished");
                finished += 1;
                for next in self.successors(step) {
                    if let Some(degree) = in_degree.get_mut(&next) {
                        *degree -= 1;
                        if *degree == 0 {
                            available.push(Reverse(next));
                        }
                    }
                }
            }
        }

        if finished < self.len() {
            return Err(GraphError::Cycle {
                remaining: self.len() - finished,
            });
        }

        Ok(now)
    }
}
