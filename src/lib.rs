mod board;
mod generate;
mod solve;
mod sudoku;

pub use board::{Board, BoardError};
pub use generate::{generate_puzzle, random_solution, GenerateError};
pub use solve::solve;
pub use sudoku::Sudoku;
