use advent_of_code::solutions::day7c;
use advent_of_code::{Error, logging, read_input};

fn main() -> Result<(), Error> {
    logging::init(0);
    let input = read_input("input.txt")?;
    println!("{}", day7c::solve(&input)?);
    Ok(())
}
