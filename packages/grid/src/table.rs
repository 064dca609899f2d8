//! Summed-area table for constant-time rectangle sums.

/// Prefix sums over a `width × height` grid addressed with 1-indexed
/// coordinates.
///
/// Entry `(x, y)` holds the sum of every cell `(i, j)` with `i <= x` and
/// `j <= y`; row and column 0 are all zeros so no lookup needs a bounds
/// special case.
///
/// # Example
///
/// ```
/// use grid::SummedAreaTable;
///
/// // 1 2
/// // 3 4
/// let table = SummedAreaTable::from_fn(2, 2, |x, y| (x + 2 * (y - 1)) as i64);
/// assert_eq!(table.rect_sum(1, 1, 2, 2), Some(10));
/// assert_eq!(table.rect_sum(2, 1, 1, 2), Some(6));
/// assert_eq!(table.rect_sum(2, 2, 2, 1), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummedAreaTable {
    width: usize,
    height: usize,
    sums: Vec<i64>,
}

impl SummedAreaTable {
    pub fn from_fn<F>(width: usize, height: usize, cell: F) -> Self
    where
        F: Fn(usize, usize) -> i64,
    {
        let stride = width + 1;
        let mut sums = vec![0i64; stride * (height + 1)];

        for y in 1..=height {
            let mut row = 0;
            for x in 1..=width {
                row += cell(x, y);
                sums[y * stride + x] = sums[(y - 1) * stride + x] + row;
            }
        }

        SummedAreaTable {
            width,
            height,
            sums,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn at(&self, x: usize, y: usize) -> i64 {
        self.sums[y * (self.width + 1) + x]
    }

    /// Sum of the `w × h` rectangle whose top-left cell is `(x, y)`.
    ///
    /// Returns `None` when the rectangle is empty or leaves the grid.
    pub fn rect_sum(&self, x: usize, y: usize, w: usize, h: usize) -> Option<i64> {
        if x == 0 || y == 0 || w == 0 || h == 0 {
            return None;
        }
        let (right, bottom) = (x + w - 1, y + h - 1);
        if right > self.width || bottom > self.height {
            return None;
        }

        Some(
            self.at(right, bottom) - self.at(x - 1, bottom) - self.at(right, y - 1)
                + self.at(x - 1, y - 1),
        )
    }
}
