//! Searches for the square of fuel cells with the largest total power.
//!
//! Window sums come from the grid's summed-area table. A naive summation
//! over the cells is kept alongside to cross-check it, and the
//! variable-size search also has a rayon variant that scans sizes in
//! parallel.

use std::fmt;
use std::ops::RangeInclusive;

use rayon::prelude::*;
use tracing::trace;

use crate::power::PowerGrid;

/// A square of fuel cells: top-left corner, side length and total power.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    pub x: usize,
    pub y: usize,
    pub size: usize,
    pub power: i64,
}

/// Formats as the `x,y,size` identifier.
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.size)
    }
}

/// Prefers higher power, then the smaller size.
fn stronger(a: Square, b: Square) -> Square {
    if b.power > a.power || (b.power == a.power && b.size < a.size) {
        b
    } else {
        a
    }
}

impl PowerGrid {
    /// Every top-left corner that fits a `size × size` square, in scan order
    /// (`y` outer, `x` inner).
    pub fn corners(&self, size: usize) -> impl Iterator<Item = (usize, usize)> {
        let last = if size == 0 {
            0
        } else {
            (self.size() + 1).saturating_sub(size)
        };
        (1..=last).flat_map(move |y| (1..=last).map(move |x| (x, y)))
    }

    /// Total power of the square at `(x, y)`, or `None` if it leaves the grid.
    pub fn square_power(&self, x: usize, y: usize, size: usize) -> Option<i64> {
        self.table.rect_sum(x, y, size, size)
    }

    /// Same as [`PowerGrid::square_power`], summing every cell directly.
    pub fn square_power_naive(&self, x: usize, y: usize, size: usize) -> Option<i64> {
        if size == 0 {
            return None;
        }
        (y..y + size)
            .flat_map(|j| (x..x + size).map(move |i| (i, j)))
            .map(|(i, j)| self.power(i, j))
            .sum()
    }

    /// All `size × size` squares sharing the maximum total power, in scan
    /// order. Empty if no square of that size fits.
    ///
    /// # Example
    ///
    /// ```
    /// use grid::PowerGrid;
    ///
    /// let best = PowerGrid::new(18).best_squares(3);
    /// assert_eq!(best.len(), 1);
    /// assert_eq!((best[0].x, best[0].y, best[0].power), (33, 45, 29));
    /// ```
    pub fn best_squares(&self, size: usize) -> Vec<Square> {
        let mut best: Vec<Square> = Vec::new();

        for (x, y) in self.corners(size) {
            let Some(power) = self.square_power(x, y, size) else {
                continue;
            };
            let square = Square { x, y, size, power };
            match best.first() {
                Some(top) if power < top.power => {}
                Some(top) if power == top.power => best.push(square),
                _ => best = vec![square],
            }
        }

        best
    }

    /// The first `size × size` square in scan order with the maximum power.
    pub fn best_square(&self, size: usize) -> Option<Square> {
        self.corners(size)
            .filter_map(|(x, y)| {
                self.square_power(x, y, size)
                    .map(|power| Square { x, y, size, power })
            })
            .reduce(|best, square| {
                if square.power > best.power {
                    square
                } else {
                    best
                }
            })
    }

    /// Reference search for one size using [`PowerGrid::square_power_naive`].
    pub fn best_square_naive(&self, size: usize) -> Option<Square> {
        self.corners(size)
            .filter_map(|(x, y)| {
                self.square_power_naive(x, y, size)
                    .map(|power| Square { x, y, size, power })
            })
            .reduce(|best, square| {
                if square.power > best.power {
                    square
                } else {
                    best
                }
            })
    }

    /// The strongest square over every size in `sizes`.
    ///
    /// Ties keep the smallest size, then the first corner in scan order.
    pub fn best_square_in(&self, sizes: RangeInclusive<usize>) -> Option<Square> {
        sizes
            .filter_map(|size| {
                let best = self.best_square(size);
                trace!(size, ?best, "best square for size");
                best
            })
            .reduce(stronger)
    }

    /// Parallel version of [`PowerGrid::best_square_in`]; returns the same square.
    pub fn best_square_in_parallel(&self, sizes: RangeInclusive<usize>) -> Option<Square> {
        sizes
            .into_par_iter()
            .filter_map(|size| self.best_square(size))
            .reduce_with(stronger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_three_by_three() {
        let best = PowerGrid::new(18).best_squares(3);
        assert_eq!(
            best,
            vec![Square {
                x: 33,
                y: 45,
                size: 3,
                power: 29,
            }]
        );

        let best = PowerGrid::new(42).best_squares(3);
        assert_eq!(
            best,
            vec![Square {
                x: 21,
                y: 61,
                size: 3,
                power: 30,
            }]
        );
    }

    #[test]
    fn test_best_square_any_size() {
        let best = PowerGrid::new(18).best_square_in(3..=299).unwrap();
        assert_eq!(
            best,
            Square {
                x: 90,
                y: 269,
                size: 16,
                power: 113,
            }
        );

        let best = PowerGrid::new(42).best_square_in(3..=299).unwrap();
        assert_eq!(
            best,
            Square {
                x: 232,
                y: 251,
                size: 12,
                power: 119,
            }
        );
    }

    #[test]
    fn test_parallel_matches_sequential() {
        for serial in [18, 42, 7139] {
            let grid = PowerGrid::new(serial);
            assert_eq!(
                grid.best_square_in(3..=299),
                grid.best_square_in_parallel(3..=299),
                "Mismatch for serial={}",
                serial
            );
        }
    }

    #[test]
    fn test_table_matches_naive_summation() {
        let grid = PowerGrid::new(18);
        for size in [1, 2, 3, 5] {
            assert_eq!(grid.best_square(size), grid.best_square_naive(size));
        }
        assert_eq!(grid.square_power(33, 45, 3), Some(29));
        assert_eq!(grid.square_power_naive(33, 45, 3), Some(29));
        assert_eq!(grid.square_power(290, 290, 16), None);
        assert_eq!(grid.square_power_naive(290, 290, 16), None);
    }

    #[test]
    fn test_ties_are_all_reported() {
        let grid = PowerGrid::new(18);
        let best = grid.best_squares(1);
        // single cells top out at 4 and many cells reach it
        assert!(best.len() > 1);
        assert!(best.iter().all(|square| square.power == 4));
        assert_eq!(best.first().copied(), grid.best_square(1));
        assert!(
            best.windows(2)
                .all(|pair| (pair[0].y, pair[0].x) < (pair[1].y, pair[1].x))
        );
    }

    #[test]
    fn test_sizes_that_do_not_fit() {
        let grid = PowerGrid::new(18);
        assert_eq!(grid.best_squares(0), vec![]);
        assert_eq!(grid.best_squares(301), vec![]);
        assert_eq!(grid.best_square(301), None);
        assert_eq!(grid.best_square_in(301..=400), None);
        assert_eq!(grid.corners(300).collect::<Vec<_>>(), vec![(1, 1)]);
    }

    #[test]
    fn test_tie_keeps_smaller_size() {
        let small = Square {
            x: 1,
            y: 1,
            size: 3,
            power: 10,
        };
        let large = Square {
            x: 5,
            y: 5,
            size: 8,
            power: 10,
        };
        assert_eq!(stronger(small, large), small);
        assert_eq!(stronger(large, small), small);
    }

    #[test]
    fn test_display_identifier() {
        let square = Square {
            x: 90,
            y: 269,
            size: 16,
            power: 113,
        };
        assert_eq!(square.to_string(), "90,269,16");
    }
}
