use itertools::Itertools;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::board::{Board, N};
use crate::solve::fits;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("filled cell count {0} is out of range, expected 0..=81")]
    FilledCountOutOfRange(usize),
}

/// Fully solved board built by backtracking with a freshly shuffled digit
/// order at every decision point, so every run can land on a different grid.
pub fn random_solution<R: Rng>(rng: &mut R) -> Board {
    let mut board = Board::empty();
    // The search cannot fail from a blank board.
    fill_random(&mut board, rng);
    board
}

fn fill_random<R: Rng>(board: &mut Board, rng: &mut R) -> bool {
    let Some((row, col)) = board.first_empty() else {
        return true;
    };
    let mut digits = [1u8, 2, 3, 4, 5, 6, 7, 8, 9];
    digits.shuffle(rng);
    for value in digits {
        if fits(board, row, col, value) {
            board.set(row, col, value);
            if fill_random(board, rng) {
                return true;
            }
            board.set(row, col, 0);
        }
    }
    false
}

/// Random solvable puzzle with exactly `filled_count` clues: a full random
/// solution masked down by blanking `81 - filled_count` uniformly chosen
/// cells. Solvable by construction; the solution is not guaranteed to be
/// unique, which coordinate-random masking cannot provide.
pub fn generate_puzzle<R: Rng>(filled_count: usize, rng: &mut R) -> Result<Board, GenerateError> {
    if filled_count > N * N {
        return Err(GenerateError::FilledCountOutOfRange(filled_count));
    }
    let mut puzzle = random_solution(rng);
    let mut cells = (0..N).cartesian_product(0..N).collect_vec();
    cells.shuffle(rng);
    for &(row, col) in &cells[filled_count..] {
        puzzle.set(row, col, 0);
    }
    debug!("generated a puzzle with {filled_count} clues");
    Ok(puzzle)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::solve::solve;

    #[test]
    fn random_solution_is_full_and_valid() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..5 {
            let board = random_solution(&mut rng);
            assert!(board.is_full());
            assert!(board.is_valid());
        }
    }

    #[test]
    fn puzzles_have_the_requested_clue_count_and_a_solution() {
        let mut rng = StdRng::seed_from_u64(42);
        for filled_count in [0, 17, 30, 81] {
            let puzzle = generate_puzzle(filled_count, &mut rng).unwrap();
            assert_eq!(81 - puzzle.empty_cells().len(), filled_count);
            assert!(puzzle.is_valid());
            assert!(solve(&puzzle).is_some());
        }
    }

    #[test]
    fn out_of_range_clue_count_is_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            generate_puzzle(82, &mut rng).unwrap_err(),
            GenerateError::FilledCountOutOfRange(82)
        );
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let first = generate_puzzle(30, &mut StdRng::seed_from_u64(0xDEADBEEF)).unwrap();
        let second = generate_puzzle(30, &mut StdRng::seed_from_u64(0xDEADBEEF)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_give_different_boards() {
        let first = random_solution(&mut StdRng::seed_from_u64(1));
        let second = random_solution(&mut StdRng::seed_from_u64(2));
        assert_ne!(first, second);
    }
}
