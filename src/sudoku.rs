use log::warn;

use crate::board::Board;
use crate::generate::{generate_puzzle, GenerateError};
use crate::solve;

type Observer = Box<dyn FnMut()>;

/// The engine a front end owns: the current board plus its "board changed"
/// observers. Every mutating operation notifies all observers once, in
/// registration order, before it returns. Observers run synchronously and
/// cannot re-enter the engine; they should read snapshots taken beforehand
/// or flag state living elsewhere.
pub struct Sudoku {
    board: Board,
    observers: Vec<Observer>,
}

impl Sudoku {
    pub fn new() -> Self {
        Self {
            board: Board::empty(),
            observers: Vec::new(),
        }
    }

    /// Registers a "board changed" observer.
    pub fn on_change(&mut self, observer: impl FnMut() + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn notify(&mut self) {
        for observer in &mut self.observers {
            observer();
        }
    }

    /// Writes a single cell, 0 meaning clear. Coordinates past 8 or values
    /// past 9 are ignored without touching the board or notifying anyone.
    pub fn set_value(&mut self, row: usize, col: usize, value: u8) {
        if self.board.set(row, col, value) {
            self.notify();
        }
    }

    /// Returns 0 for out-of-range coordinates.
    pub fn get_value(&self, row: usize, col: usize) -> u8 {
        self.board.get(row, col)
    }

    /// Replaces the whole grid from untyped row data. Anything other than
    /// 9 rows of 9 digits in 0..=9 is rejected, leaving the current board
    /// and the observers untouched.
    pub fn set_board(&mut self, grid: &[Vec<u8>]) {
        match Board::from_grid(grid) {
            Ok(board) => self.replace(board),
            Err(err) => warn!("board replacement rejected: {err}"),
        }
    }

    /// Replaces the whole grid with an already validated board.
    pub fn replace(&mut self, board: Board) {
        self.board = board;
        self.notify();
    }

    /// Copy of the current board.
    pub fn board(&self) -> Board {
        self.board
    }

    pub fn clear(&mut self) {
        self.board = Board::empty();
        self.notify();
    }

    pub fn is_valid(&self) -> bool {
        self.board.is_valid()
    }

    pub fn is_full(&self) -> bool {
        self.board.is_full()
    }

    pub fn is_cell_valid(&self, row: usize, col: usize, value: u8) -> bool {
        self.board.is_cell_valid(row, col, value)
    }

    pub fn candidates(&self, row: usize, col: usize) -> Vec<u8> {
        self.board.candidates(row, col)
    }

    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.board.empty_cells()
    }

    pub fn conflicts(&self) -> Vec<(usize, usize)> {
        self.board.conflicts()
    }

    /// Solves the current board without mutating it.
    pub fn solve(&self) -> Option<Board> {
        solve::solve(&self.board)
    }

    /// Replaces the board with a fresh random puzzle holding exactly
    /// `filled_count` clues. On a rejected count nothing changes and no
    /// notification fires.
    pub fn generate_random(&mut self, filled_count: usize) -> Result<(), GenerateError> {
        let puzzle = generate_puzzle(filled_count, &mut rand::rng())?;
        self.replace(puzzle);
        Ok(())
    }
}

impl Default for Sudoku {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Sudoku {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sudoku")
            .field("board", &self.board)
            .field("observers", &self.observers.len())
            .finish()
    }
}
