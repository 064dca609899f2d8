use grid::PowerGrid;
use tracing::debug;

use crate::error::Error;

pub const MIN_SQUARE_SIZE: usize = 3;
pub const MAX_SQUARE_SIZE: usize = 299;

/// The `(size, sum, x, y)` of the strongest square of any size.
pub fn solve(input: &str) -> Result<String, Error> {
    let grid: PowerGrid = input.parse()?;
    let best = grid
        .best_square_in_parallel(MIN_SQUARE_SIZE..=MAX_SQUARE_SIZE)
        .ok_or(Error::NoSquare)?;
    debug!(serial = grid.serial(), identifier = %best, "best square");

    Ok(format!("({}, {}, {}, {})", best.size, best.power, best.x, best.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve() {
        assert_eq!(solve("18").unwrap(), "(16, 113, 90, 269)");
        assert_eq!(solve("42").unwrap(), "(12, 119, 232, 251)");
    }

    #[test]
    fn test_same_answer_on_rerun() {
        assert_eq!(solve("7139").unwrap(), solve("7139").unwrap());
    }
}
