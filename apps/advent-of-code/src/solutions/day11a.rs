use grid::PowerGrid;
use tracing::debug;

use crate::error::Error;

/// Side length of the squares searched on day 11 part one.
pub const FIXED_SQUARE_SIZE: usize = 3;

/// Top-left corners of the 3x3 squares with the largest total power.
///
/// Every tied corner is reported, separated by spaces.
pub fn solve(input: &str) -> Result<String, Error> {
    let grid: PowerGrid = input.parse()?;
    let best = grid.best_squares(FIXED_SQUARE_SIZE);

    let Some(top) = best.first() else {
        return Err(Error::NoSquare);
    };
    debug!(serial = grid.serial(), power = top.power, ties = best.len(), "best 3x3 square");

    Ok(best
        .iter()
        .map(|square| format!("{},{}", square.x, square.y))
        .collect::<Vec<_>>()
        .join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve() {
        assert_eq!(solve("18").unwrap(), "33,45");
        assert_eq!(solve("42\n").unwrap(), "21,61");
    }

    #[test]
    fn test_invalid_serial() {
        assert!(matches!(solve("abc"), Err(Error::Grid(_))));
    }
}
