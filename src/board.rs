use colored::Colorize;
use itertools::Itertools;
use thiserror::Error;

pub(crate) const N: usize = 9;

/// A 9x9 grid of digits, 0 meaning empty. Plain value type: copy it freely
/// for what-if checks instead of mutating shared state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    rows: [[u8; N]; N],
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("expected 9 rows, found {0}")]
    WrongRowCount(usize),
    #[error("row {row} has {len} cells, expected 9")]
    WrongRowLength { row: usize, len: usize },
    #[error("invalid character {found:?} at row {row}, column {col}")]
    InvalidCharacter { row: usize, col: usize, found: char },
    #[error("invalid digit {value} at row {row}, column {col}")]
    InvalidDigit { row: usize, col: usize, value: u8 },
}

impl Board {
    /// All-blank board.
    pub fn empty() -> Self {
        Self { rows: [[0; N]; N] }
    }

    /// Builds a board from untyped row data, as a front end hands it over.
    /// Anything other than 9 rows of 9 digits in 0..=9 is rejected.
    pub fn from_grid(grid: &[Vec<u8>]) -> Result<Self, BoardError> {
        if grid.len() != N {
            return Err(BoardError::WrongRowCount(grid.len()));
        }
        let mut rows = [[0u8; N]; N];
        for (row, values) in grid.iter().enumerate() {
            if values.len() != N {
                return Err(BoardError::WrongRowLength {
                    row,
                    len: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                if value > 9 {
                    return Err(BoardError::InvalidDigit { row, col, value });
                }
                rows[row][col] = value;
            }
        }
        Ok(Self { rows })
    }

    /// Parses the text persistence format: one line per row, 9 characters
    /// per line, each a digit 1-9 or `.` for blank.
    pub fn from_text(text: &str) -> Result<Self, BoardError> {
        let lines = text.lines().collect_vec();
        if lines.len() != N {
            return Err(BoardError::WrongRowCount(lines.len()));
        }
        let mut rows = [[0u8; N]; N];
        for (row, line) in lines.into_iter().enumerate() {
            let chars = line.chars().collect_vec();
            if chars.len() != N {
                return Err(BoardError::WrongRowLength {
                    row,
                    len: chars.len(),
                });
            }
            for (col, c) in chars.into_iter().enumerate() {
                rows[row][col] = match c {
                    '.' => 0,
                    '1'..='9' => c as u8 - b'0',
                    _ => return Err(BoardError::InvalidCharacter { row, col, found: c }),
                };
            }
        }
        Ok(Self { rows })
    }

    /// Inverse of `from_text`; round-trips exactly.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(N * (N + 1));
        for row in &self.rows {
            for &value in row {
                out.push(if value == 0 { '.' } else { (b'0' + value) as char });
            }
            out.push('\n');
        }
        out
    }

    /// Returns 0 for out-of-range coordinates.
    pub fn get(&self, row: usize, col: usize) -> u8 {
        if row >= N || col >= N {
            return 0;
        }
        self.rows[row][col]
    }

    /// Writes a cell and reports whether the write happened. Coordinates
    /// past 8 or values past 9 leave the board untouched.
    pub fn set(&mut self, row: usize, col: usize, value: u8) -> bool {
        if row >= N || col >= N || value > 9 {
            return false;
        }
        self.rows[row][col] = value;
        true
    }

    pub fn is_full(&self) -> bool {
        self.rows.iter().flatten().all(|&value| value != 0)
    }

    /// Whether `value` could sit at (row, col) without clashing with any
    /// other cell in its row, column or box. The cell itself is excluded,
    /// so a cell validates cleanly against the value it already holds.
    pub fn is_cell_valid(&self, row: usize, col: usize, value: u8) -> bool {
        if row >= N || col >= N || !(1..=9).contains(&value) {
            return false;
        }
        let row_ok = (0..N).filter(|&j| j != col).all(|j| self.rows[row][j] != value);
        let col_ok = (0..N).filter(|&i| i != row).all(|i| self.rows[i][col] != value);
        let (r0, c0) = (row / 3 * 3, col / 3 * 3);
        let box_ok = (r0..r0 + 3)
            .cartesian_product(c0..c0 + 3)
            .filter(|&(i, j)| (i, j) != (row, col))
            .all(|(i, j)| self.rows[i][j] != value);
        row_ok && col_ok && box_ok
    }

    /// Whether no two filled cells clash. Each cell is checked against a
    /// copy with that cell blanked out, so it never conflicts with itself.
    pub fn is_valid(&self) -> bool {
        for (row, col) in (0..N).cartesian_product(0..N) {
            let value = self.rows[row][col];
            if value == 0 {
                continue;
            }
            let mut probe = *self;
            probe.rows[row][col] = 0;
            if !probe.is_cell_valid(row, col, value) {
                return false;
            }
        }
        true
    }

    /// Filled cells that clash with a row, column or box peer, in row-major
    /// order. Empty exactly when `is_valid` holds.
    pub fn conflicts(&self) -> Vec<(usize, usize)> {
        (0..N)
            .cartesian_product(0..N)
            .filter(|&(row, col)| {
                let value = self.rows[row][col];
                if value == 0 {
                    return false;
                }
                let mut probe = *self;
                probe.rows[row][col] = 0;
                !probe.is_cell_valid(row, col, value)
            })
            .collect_vec()
    }

    /// Digits 1-9 that could legally fill (row, col); empty if the cell is
    /// already filled.
    pub fn candidates(&self, row: usize, col: usize) -> Vec<u8> {
        if self.get(row, col) != 0 {
            return Vec::new();
        }
        (1..=9)
            .filter(|&value| self.is_cell_valid(row, col, value))
            .collect_vec()
    }

    /// All blank cells in row-major order, computed fresh on every call.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        (0..N)
            .cartesian_product(0..N)
            .filter(|&(row, col)| self.rows[row][col] == 0)
            .collect_vec()
    }

    pub fn first_empty(&self) -> Option<(usize, usize)> {
        (0..N)
            .cartesian_product(0..N)
            .find(|&(row, col)| self.rows[row][col] == 0)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut line = String::new();
        let horizontal_line = " ----------------- ";
        for (i, row) in self.rows.iter().enumerate() {
            if i % 3 == 0 {
                writeln!(f, "{horizontal_line}")?;
            }
            for (j, &value) in row.iter().enumerate() {
                line.push(if j % 3 == 0 { '|' } else { ' ' });
                if value == 0 {
                    line.push_str(&" ".on_blue().to_string());
                } else {
                    line.push_str(&format!("{value}"));
                }
            }
            writeln!(f, "{line}|")?;
            line.clear();
        }
        writeln!(f, "{horizontal_line}")
    }
}
