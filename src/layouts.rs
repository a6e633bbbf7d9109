//! Canonical Fore & Aft instances for the supported board sizes.
//!
//! The historical puzzle is played on two k×k squares of opposite colors
//! overlapping at a single center cell, embedded in an N×N grid with the
//! leftover corners blocked. The goal is the same geometry with the colors
//! exchanged and the empty cell back at the center. Sizes 5, 7, 9 and 11
//! give k = 3..6 and 8, 15, 24 and 35 pieces per side.

use crate::engine::{Board, Piece};
use crate::solver::SolveError;

/// Board sizes with a defined canonical arrangement.
pub const SUPPORTED_SIZES: [usize; 4] = [5, 7, 9, 11];

/// A ready-to-solve puzzle: start board, mirrored goal board, and the
/// coordinate the empty cell must return to.
#[derive(Clone, Debug)]
pub struct PuzzleInstance {
    pub initial: Board,
    pub goal: Board,
    pub empty_anchor: (usize, usize),
}

/// Builds the canonical instance for the given board size.
///
/// With k = (size + 1) / 2, the top-left k×k square is red and the
/// bottom-right k×k square is blue; they share only the center cell
/// (k-1, k-1), which starts empty. Everything else is blocked. The goal
/// swaps the two colors and keeps the empty cell at the center.
///
/// Returns `InvalidDimension` for sizes outside [`SUPPORTED_SIZES`].
pub fn instance(size: usize) -> Result<PuzzleInstance, SolveError> {
    if !SUPPORTED_SIZES.contains(&size) {
        return Err(SolveError::InvalidDimension(format!(
            "unsupported board size {}, expected one of {:?}",
            size, SUPPORTED_SIZES
        )));
    }

    let k = (size + 1) / 2;
    let center = (k - 1, k - 1);

    let mut initial = Board::new_filled(size, Piece::Block);
    let mut goal = Board::new_filled(size, Piece::Block);
    for r in 0..size {
        for c in 0..size {
            if (r, c) == center {
                initial.set(r, c, Piece::Empty);
                goal.set(r, c, Piece::Empty);
            } else if r < k && c < k {
                initial.set(r, c, Piece::Red);
                goal.set(r, c, Piece::Blue);
            } else if r >= k - 1 && c >= k - 1 {
                initial.set(r, c, Piece::Blue);
                goal.set(r, c, Piece::Red);
            }
        }
    }

    Ok(PuzzleInstance {
        initial,
        goal,
        empty_anchor: center,
    })
}
