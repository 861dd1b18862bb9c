use colored::Colorize;
use std::env;
use std::fs;
use std::process::ExitCode;
use sudoku_engine::{generate_puzzle, solve, Board};

fn main() -> ExitCode {
    env_logger::init();
    let mut args = env::args().skip(1);
    match args.next().as_deref() {
        Some("generate") => {
            let filled_count = args.next().and_then(|arg| arg.parse().ok()).unwrap_or(30);
            match generate_puzzle(filled_count, &mut rand::rng()) {
                Ok(puzzle) => {
                    println!("{puzzle}");
                    print!("{}", puzzle.to_text());
                    ExitCode::SUCCESS
                }
                Err(err) => {
                    eprintln!("{}", format!("{err}").red());
                    ExitCode::FAILURE
                }
            }
        }
        Some(path) => {
            let text = match fs::read_to_string(path) {
                Ok(text) => text,
                Err(err) => {
                    eprintln!("{}", format!("Cannot read {path}: {err}").red());
                    return ExitCode::FAILURE;
                }
            };
            match Board::from_text(&text) {
                Ok(board) => {
                    println!("Input:\n{board}");
                    match solve(&board) {
                        Some(solution) => {
                            println!("Solution:\n{solution}");
                            ExitCode::SUCCESS
                        }
                        None => {
                            println!("{}", "No solution exists for this board.".red());
                            ExitCode::FAILURE
                        }
                    }
                }
                Err(err) => {
                    eprintln!("{}", format!("{err}").red());
                    ExitCode::FAILURE
                }
            }
        }
        None => {
            eprintln!("usage: sudoku-engine <puzzle-file> | sudoku-engine generate [filled-count]");
            ExitCode::FAILURE
        }
    }
}
