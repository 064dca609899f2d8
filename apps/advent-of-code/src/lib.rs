pub mod error;
pub mod logging;
pub mod solutions;

use std::fs;
use std::path::Path;

pub use error::Error;

/// Available problem IDs
pub const PROBLEMS: &[&str] = &["7a", "7b", "7c", "11a", "11b"];

/// Run a specific problem on its puzzle input and return the answer
pub fn run_problem(id: &str, input: &str) -> Result<String, Error> {
    match id {
        "7a" => solutions::day7a::solve(input),
        "7b" => solutions::day7b::solve(input),
        "7c" => solutions::day7c::solve(input),
        "11a" => solutions::day11a::solve(input),
        "11b" => solutions::day11b::solve(input),
        _ => Err(Error::UnknownProblem(id.to_string())),
    }
}

/// Name of the puzzle input file a problem reads from a data directory
pub fn input_file(id: &str) -> Option<&'static str> {
    match id {
        "7a" | "7b" | "7c" => Some("day07.txt"),
        "11a" | "11b" => Some("day11.txt"),
        _ => None,
    }
}

pub fn read_input(path: impl AsRef<Path>) -> Result<String, Error> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
