use itertools::Itertools;
use log::debug;

use crate::board::{Board, N};

/// Whether `value` can go at (row, col) given the digits currently on the
/// board. The cell is expected to be empty, so unlike `Board::is_cell_valid`
/// there is nothing to exclude from the scan.
pub(crate) fn fits(board: &Board, row: usize, col: usize, value: u8) -> bool {
    let row_free = (0..N).all(|j| board.get(row, j) != value);
    let col_free = (0..N).all(|i| board.get(i, col) != value);
    let (r0, c0) = (row / 3 * 3, col / 3 * 3);
    let box_free = (r0..r0 + 3)
        .cartesian_product(c0..c0 + 3)
        .all(|(i, j)| board.get(i, j) != value);
    row_free && col_free && box_free
}

/// Exhaustive backtracking search for one completion of `board`.
///
/// Empty cells are filled in row-major order, digits tried in ascending
/// order, so the result is deterministic; when several completions exist the
/// caller gets the first one under that order and must not assume anything
/// else about it. A board that already breaks a row, column or box
/// constraint is rejected up front rather than completed around the clash.
/// The input is never mutated; `None` means unsatisfiable.
pub fn solve(board: &Board) -> Option<Board> {
    if !board.is_valid() {
        debug!("input board already has conflicts");
        return None;
    }
    let mut work = *board;
    let mut placements = 0usize;
    if solve_recursive(&mut work, &mut placements) {
        debug!("solved after {placements} placements");
        Some(work)
    } else {
        debug!("search exhausted after {placements} placements");
        None
    }
}

fn solve_recursive(board: &mut Board, placements: &mut usize) -> bool {
    let Some((row, col)) = board.first_empty() else {
        return true;
    };
    for value in 1..=9 {
        if fits(board, row, col, value) {
            *placements += 1;
            board.set(row, col, value);
            if solve_recursive(board, placements) {
                return true;
            }
            board.set(row, col, 0);
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUZZLE: &str = "53..7....
6..195...
.98....6.
8...6...3
4..8.3..1
7...2...6
.6....28.
...419..5
....8..79
";

    const SOLUTION: &str = "534678912
672195348
198342567
859761423
426853791
713924856
961537284
287419635
345286179
";

    #[test]
    fn solve_finds_the_known_solution() {
        let board = Board::from_text(PUZZLE).unwrap();
        let solution = solve(&board).unwrap();
        assert_eq!(solution, Board::from_text(SOLUTION).unwrap());
    }

    #[test]
    fn solution_is_full_valid_and_preserves_givens() {
        let board = Board::from_text(PUZZLE).unwrap();
        let solution = solve(&board).unwrap();
        assert!(solution.is_full());
        assert!(solution.is_valid());
        for (row, col) in (0..9).flat_map(|i| (0..9).map(move |j| (i, j))) {
            let given = board.get(row, col);
            if given != 0 {
                assert_eq!(solution.get(row, col), given);
            }
        }
    }

    #[test]
    fn solve_does_not_mutate_the_input() {
        let board = Board::from_text(PUZZLE).unwrap();
        let copy = board;
        solve(&board).unwrap();
        assert_eq!(board, copy);
    }

    #[test]
    fn empty_board_solves_to_the_first_grid_in_scan_order() {
        let solution = solve(&Board::empty()).unwrap();
        let expected = "123456789
456789123
789123456
214365897
365897214
897214365
531642978
642978531
978531642
";
        assert_eq!(solution, Board::from_text(expected).unwrap());
    }

    #[test]
    fn complete_board_is_returned_unchanged() {
        let board = Board::from_text(SOLUTION).unwrap();
        assert_eq!(solve(&board), Some(board));
    }

    #[test]
    fn unsatisfiable_board_reports_failure() {
        // (0, 8) has no candidate: 1-8 sit in its row and 9 in its box.
        let text = "12345678.
........9
.........
.........
.........
.........
.........
.........
.........
";
        let board = Board::from_text(text).unwrap();
        assert!(board.is_valid());
        assert_eq!(solve(&board), None);
    }

    #[test]
    fn conflicting_input_is_rejected_up_front() {
        let mut board = Board::from_text(PUZZLE).unwrap();
        // Second 5 in the top row.
        board.set(0, 8, 5);
        assert_eq!(solve(&board), None);
    }
}
