use clap::Parser;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;

use sudoku_singles::Sudoku;

const OUTPUT_PATH: &str = "solve.txt";

/// Solve a sudoku puzzle read from a text grid.
///
/// Digits in the input are assigned to cells in row-major order, 0 marking a
/// blank; everything else is treated as layout. The result is written to
/// solve.txt in the same grid format.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Path of the puzzle file
    #[arg(default_value = "sudoku.txt")]
    input: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let file = match File::open(&cli.input) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("failed to open input file {}: {}", cli.input.display(), err);
            return ExitCode::FAILURE;
        }
    };
    let sudoku = match Sudoku::from_read(BufReader::new(file)) {
        Ok(sudoku) => sudoku,
        Err(err) => {
            eprintln!("failed to read {}: {}", cli.input.display(), err);
            return ExitCode::FAILURE;
        }
    };
    log::debug!("{} clues in {}", sudoku.n_clues(), cli.input.display());

    let solved = sudoku.solve_singles();
    log::info!(
        "resolved {} of {} blank cells",
        solved.n_clues() - sudoku.n_clues(),
        81 - sudoku.n_clues()
    );

    if let Err(err) = fs::write(OUTPUT_PATH, solved.to_string()) {
        eprintln!("failed to write {}: {}", OUTPUT_PATH, err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
