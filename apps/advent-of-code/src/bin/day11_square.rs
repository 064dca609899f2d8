use advent_of_code::solutions::day11a;
use advent_of_code::{Error, logging, read_input};

fn main() -> Result<(), Error> {
    logging::init(0);
    let input = read_input("input.txt")?;
    println!("{}", day11a::solve(&input)?);
    Ok(())
}
