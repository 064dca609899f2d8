pub mod error;
pub mod power;
pub mod square;
pub mod table;

pub use error::GridError;
pub use power::{GRID_SIZE, PowerGrid, parse_serial, power_level};
pub use square::Square;
pub use table::SummedAreaTable;
