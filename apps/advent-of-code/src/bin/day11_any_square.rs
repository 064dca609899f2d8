use advent_of_code::solutions::day11b;
use advent_of_code::{Error, logging, read_input};

fn main() -> Result<(), Error> {
    logging::init(0);
    let input = read_input("input.txt")?;
    println!("{}", day11b::solve(&input)?);
    Ok(())
}
