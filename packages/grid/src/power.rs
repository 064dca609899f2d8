//! Fuel cell power levels and the 300×300 grid they form.

use std::str::FromStr;

use crate::error::GridError;
use crate::table::SummedAreaTable;

/// Width and height of the fuel cell grid.
pub const GRID_SIZE: usize = 300;

/// Power level of the fuel cell at `(x, y)` for a grid serial number.
///
/// The rack ID is `x + 10`; the power level starts at `rack * y`, adds the
/// serial, multiplies by the rack ID again, keeps only the hundreds digit and
/// subtracts 5. Floor division is used so the digit stays in `0..=9` for
/// negative serials as well.
///
/// Only the last three digits of the product decide the result, so every
/// term is reduced modulo 1000 first and any `i64` input is accepted.
///
/// # Example
///
/// ```
/// use grid::power_level;
///
/// assert_eq!(power_level(3, 5, 8), 4);
/// assert_eq!(power_level(122, 79, 57), -5);
/// assert_eq!(power_level(1, 1, i64::MAX), 4);
/// ```
pub fn power_level(x: i64, y: i64, serial: i64) -> i64 {
    let rack_id = (i128::from(x) + 10).rem_euclid(1000);
    let y = i128::from(y).rem_euclid(1000);
    let serial = i128::from(serial).rem_euclid(1000);

    let power = ((rack_id * y + serial) * rack_id).rem_euclid(1000);
    (power / 100) as i64 - 5
}

/// Parses a serial number, ignoring surrounding whitespace.
pub fn parse_serial(input: &str) -> Result<i64, GridError> {
    let trimmed = input.trim();
    trimmed.parse().map_err(|source| GridError::InvalidSerial {
        input: trimmed.to_string(),
        source,
    })
}

/// Power levels of every cell for one serial number, with 1-indexed
/// coordinates `x, y ∈ [1, GRID_SIZE]`.
#[derive(Debug, Clone)]
pub struct PowerGrid {
    serial: i64,
    cells: Vec<i64>,
    pub(crate) table: SummedAreaTable,
}

impl PowerGrid {
    pub fn new(serial: i64) -> Self {
        let cells: Vec<i64> = (1..=GRID_SIZE)
            .flat_map(|y| (1..=GRID_SIZE).map(move |x| (x, y)))
            .map(|(x, y)| power_level(x as i64, y as i64, serial))
            .collect();
        let table = SummedAreaTable::from_fn(GRID_SIZE, GRID_SIZE, |x, y| {
            cells[(y - 1) * GRID_SIZE + (x - 1)]
        });

        PowerGrid {
            serial,
            cells,
            table,
        }
    }

    pub fn serial(&self) -> i64 {
        self.serial
    }

    pub fn size(&self) -> usize {
        GRID_SIZE
    }

    /// Power level of a single cell, or `None` outside the grid.
    pub fn power(&self, x: usize, y: usize) -> Option<i64> {
        if x == 0 || y == 0 || x > GRID_SIZE || y > GRID_SIZE {
            return None;
        }
        Some(self.cells[(y - 1) * GRID_SIZE + (x - 1)])
    }
}

impl FromStr for PowerGrid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PowerGrid::new(parse_serial(s)?))
    }
}
