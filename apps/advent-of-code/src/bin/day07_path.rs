use advent_of_code::solutions::day7b;
use advent_of_code::{Error, logging, read_input};

fn main() -> Result<(), Error> {
    logging::init(0);
    let input = read_input("input.txt")?;
    println!("{}", day7b::solve(&input)?);
    Ok(())
}
