use std::path::{Path, PathBuf};
use std::process::ExitCode;

use advent_of_code::{Error, PROBLEMS, input_file, logging, read_input, run_problem};
use clap::Parser;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "advent-of-code")]
#[command(about = "Run Advent of Code 2018 solutions")]
struct Cli {
    /// Run a specific problem by id (e.g. 7a, 11b)
    #[arg(short, long)]
    problem: Option<String>,

    /// Run all available problems
    #[arg(short, long)]
    all: bool,

    /// Puzzle input for --problem
    #[arg(short, long, default_value = "input.txt")]
    input: PathBuf,

    /// Directory holding day07.txt and day11.txt for --all
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Log more detail to stderr (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn solve_from(id: &str, path: &Path) -> Result<String, Error> {
    let input = read_input(path)?;
    run_problem(id, &input)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if cli.all {
        let mut failed = false;
        for &id in PROBLEMS {
            let Some(file) = input_file(id) else {
                continue;
            };
            match solve_from(id, &cli.data_dir.join(file)) {
                Ok(answer) => println!("The answer to Problem {} is: {}", id, answer),
                Err(err) => {
                    error!(problem = id, "{}", err);
                    failed = true;
                }
            }
        }
        if failed {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    } else if let Some(id) = cli.problem {
        if !PROBLEMS.contains(&id.as_str()) {
            eprintln!("Problem {} not implemented", id);
            eprintln!("Available problems: {:?}", PROBLEMS);
            return ExitCode::FAILURE;
        }
        info!(problem = %id, input = %cli.input.display(), "running");
        match solve_from(&id, &cli.input) {
            Ok(answer) => {
                println!("The answer to Problem {} is: {}", id, answer);
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("Problem {} failed: {}", id, err);
                ExitCode::FAILURE
            }
        }
    } else {
        eprintln!("Usage: advent-of-code --problem <ID> or --all");
        eprintln!("Available problems: {:?}", PROBLEMS);
        ExitCode::FAILURE
    }
}
