//! Core board engine for the Fore & Aft puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Piece`: the four cell states (empty, red, blue, blocked).
//! - `Board`: a square row-major grid of cells with structural equality,
//!   canonical keying for deduplication, and rendering.
//! - `Move`: an endpoint exchange used for both slides and jumps.
//! - `generate_moves` / `Board::apply_move`: the legal-transition rules.
//!
//! Red pieces advance down/right, blue pieces up/left. A move either slides
//! a piece into an adjacent empty cell or jumps it over a single adjacent
//! opposite-color piece onto an empty cell two steps away. In both cases
//! only the two endpoints change; a jumped-over piece stays put because the
//! move is logically a swap of the empty cell with the moving piece.
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fmt;

use crate::solver::SolveError;

/// The state of a single cell on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Piece {
    /// The single empty cell pieces move into.
    Empty,
    /// A red piece; advances down or right.
    Red,
    /// A blue piece; advances up or left.
    Blue,
    /// A blocked cell; never moves and never participates in a move.
    Block,
}

impl Piece {
    /// Converts the piece to its single-character marker.
    ///
    /// Used both for rendering and for the canonical board key, so the four
    /// markers must stay distinct.
    ///
    /// # Examples
    ///
    /// ```
    /// use foreaft_solver::engine::Piece;
    /// assert_eq!(Piece::Red.to_char(), 'R');
    /// assert_eq!(Piece::Empty.to_char(), '_');
    /// ```
    pub fn to_char(&self) -> char {
        match self {
            Piece::Empty => '_',
            Piece::Red => 'R',
            Piece::Blue => 'B',
            Piece::Block => '#',
        }
    }

    /// Parses a marker character back into a piece.
    pub fn from_char(c: char) -> Option<Piece> {
        match c {
            '_' => Some(Piece::Empty),
            'R' => Some(Piece::Red),
            'B' => Some(Piece::Blue),
            '#' => Some(Piece::Block),
            _ => None,
        }
    }

    /// Whether this cell holds a movable piece (red or blue).
    pub fn is_piece(&self) -> bool {
        matches!(self, Piece::Red | Piece::Blue)
    }

    /// The two forward directions for this color as `(d_row, d_col)` offsets.
    ///
    /// The direction asymmetry is the puzzle's defining rule: red only ever
    /// moves down or right, blue only up or left. Non-piece cells have no
    /// directions.
    pub fn forward_directions(&self) -> &'static [(isize, isize)] {
        match self {
            Piece::Red => &[(1, 0), (0, 1)],
            Piece::Blue => &[(-1, 0), (0, -1)],
            Piece::Empty | Piece::Block => &[],
        }
    }

    /// The opposing color, the only kind of piece a jump may cross.
    pub fn opponent(&self) -> Option<Piece> {
        match self {
            Piece::Red => Some(Piece::Blue),
            Piece::Blue => Some(Piece::Red),
            Piece::Empty | Piece::Block => None,
        }
    }
}

/// An ordered pair of coordinates denoting a direct exchange of contents.
///
/// The same representation covers a single-step slide and a two-cell jump;
/// applying a move never touches any cell between the endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    /// Coordinate of the moving piece, `(row, col)`.
    pub from: (usize, usize),
    /// Coordinate of the empty cell it moves into, `(row, col)`.
    pub to: (usize, usize),
}

impl Move {
    /// The inverse move. Applying a move and then its reversal restores the
    /// original board.
    pub fn reversed(&self) -> Move {
        Move {
            from: self.to,
            to: self.from,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{}) to ({},{})",
            self.from.0, self.from.1, self.to.0, self.to.1
        )
    }
}

/// A square Fore & Aft board.
///
/// Cells are stored row-major; the dimension is fixed per instance
/// (canonically 5, 7, 9 or 11) and carried with the board rather than being
/// a compile-time constant, since one process may solve several sizes.
/// Boards compare by full structural equality.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Piece>,
}

impl Board {
    /// Creates a board of the given size with every cell set to `fill`.
    pub fn new_filled(size: usize, fill: Piece) -> Self {
        Board {
            size,
            cells: vec![fill; size * size],
        }
    }

    /// Creates a board from explicit rows.
    ///
    /// Returns `None` if the rows do not form a square grid.
    pub fn from_rows(rows: Vec<Vec<Piece>>) -> Option<Self> {
        let size = rows.len();
        if rows.iter().any(|r| r.len() != size) {
            return None;
        }
        Some(Board {
            size,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Creates a deterministic pseudo-random board with exactly one empty
    /// cell and the requested piece counts scattered over the grid.
    ///
    /// The same seed always produces the same arrangement, which makes the
    /// generated boards usable as reproducible fixtures (for example the key
    /// injectivity stress test). Any cell not covered by the requested
    /// counts is left blocked.
    ///
    /// # Panics
    /// Panics if `reds + blues + 1` exceeds the cell count. Fixture helper,
    /// not part of the solving pipeline.
    pub fn new_random_scatter(size: usize, reds: usize, blues: usize, seed: u64) -> Self {
        let total = size * size;
        assert!(reds + blues < total, "piece counts exceed board capacity");

        let mut cells = vec![Piece::Block; total];
        for cell in cells.iter_mut().take(reds) {
            *cell = Piece::Red;
        }
        for cell in cells.iter_mut().skip(reds).take(blues) {
            *cell = Piece::Blue;
        }
        cells[reds + blues] = Piece::Empty;

        let mut rng = SmallRng::seed_from_u64(seed);
        cells.shuffle(&mut rng);
        Board { size, cells }
    }

    /// The board dimension N (the board is always N×N).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the piece at row `r`, column `c`.
    ///
    /// # Panics
    /// Panics if `r` or `c` are outside the board.
    pub fn get(&self, r: usize, c: usize) -> Piece {
        self.cells[r * self.size + c]
    }

    /// Sets the cell at row `r`, column `c`.
    ///
    /// # Panics
    /// Panics if `r` or `c` are outside the board.
    pub fn set(&mut self, r: usize, c: usize, piece: Piece) {
        self.cells[r * self.size + c] = piece;
    }

    /// Derives the canonical deduplication key: one marker character per
    /// cell in row-major order.
    ///
    /// The key is injective over boards of a single search (same size,
    /// distinct markers per cell state), so two boards share a key exactly
    /// when they are structurally equal.
    ///
    /// # Examples
    ///
    /// ```
    /// use foreaft_solver::engine::{Board, Piece};
    /// let board = Board::from_rows(vec![
    ///     vec![Piece::Red, Piece::Empty],
    ///     vec![Piece::Block, Piece::Blue],
    /// ]).unwrap();
    /// assert_eq!(board.key(), "R_#B");
    /// ```
    pub fn key(&self) -> String {
        self.cells.iter().map(Piece::to_char).collect()
    }

    /// Finds the coordinate of the unique empty cell.
    ///
    /// Returns `MalformedBoard` if the board holds no empty cell or more
    /// than one. Move application preserves the single-empty invariant, so
    /// this only fails on boards that were malformed before the search
    /// started.
    pub fn find_empty(&self) -> Result<(usize, usize), SolveError> {
        let mut found = None;
        for (idx, piece) in self.cells.iter().enumerate() {
            if *piece == Piece::Empty {
                let pos = (idx / self.size, idx % self.size);
                if found.replace(pos).is_some() {
                    return Err(SolveError::MalformedBoard(
                        "board has more than one empty cell".into(),
                    ));
                }
            }
        }
        found.ok_or_else(|| SolveError::MalformedBoard("board has no empty cell".into()))
    }

    /// Applies a move, returning the successor board.
    ///
    /// The two endpoint cells exchange contents; every other cell is copied
    /// unchanged. The cell between the endpoints of a jump is never
    /// inspected, because legality was already established by
    /// [`generate_moves`].
    pub fn apply_move(&self, mv: &Move) -> Board {
        let mut next = self.clone();
        let a = mv.from.0 * self.size + mv.from.1;
        let b = mv.to.0 * self.size + mv.to.1;
        next.cells.swap(a, b);
        next
    }

    /// Counts the cells holding the given piece kind.
    pub fn count(&self, piece: Piece) -> usize {
        self.cells.iter().filter(|&&p| p == piece).count()
    }
}

impl fmt::Display for Board {
    /// Renders the board as N lines of N marker characters.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            for piece in row {
                write!(f, "{}", piece.to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Enumerates every legal move on the board.
///
/// Cells are scanned in row-major order; for each movable piece the two
/// forward directions of its color are checked for a slide (adjacent cell
/// in-bounds and empty) and for a jump (adjacent cell holds an opposing
/// piece and the cell two steps on is in-bounds and empty). Jumping over a
/// same-color piece or a blocked cell is illegal. Blocked and empty cells
/// generate nothing.
///
/// The enumeration order is fixed but carries no meaning beyond making the
/// search's tie-breaking deterministic.
pub fn generate_moves(board: &Board) -> Vec<Move> {
    let size = board.size() as isize;
    let mut moves = Vec::new();

    for r in 0..board.size() {
        for c in 0..board.size() {
            let piece = board.get(r, c);
            if !piece.is_piece() {
                continue;
            }
            let opponent = piece.opponent();

            for &(dr, dc) in piece.forward_directions() {
                let (nr, nc) = (r as isize + dr, c as isize + dc);
                if nr < 0 || nr >= size || nc < 0 || nc >= size {
                    continue;
                }
                let adjacent = board.get(nr as usize, nc as usize);

                if adjacent == Piece::Empty {
                    moves.push(Move {
                        from: (r, c),
                        to: (nr as usize, nc as usize),
                    });
                } else if Some(adjacent) == opponent {
                    let (jr, jc) = (r as isize + 2 * dr, c as isize + 2 * dc);
                    if jr >= 0
                        && jr < size
                        && jc >= 0
                        && jc < size
                        && board.get(jr as usize, jc as usize) == Piece::Empty
                    {
                        moves.push(Move {
                            from: (r, c),
                            to: (jr as usize, jc as usize),
                        });
                    }
                }
            }
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::board_from_str_array;

    #[test]
    fn test_find_empty_unique() {
        let board = board_from_str_array(&["R_B", "###", "###"]).unwrap();
        assert_eq!(board.find_empty().unwrap(), (0, 1));
    }

    #[test]
    fn test_find_empty_rejects_none_and_many() {
        let none = board_from_str_array(&["RB", "##"]).unwrap();
        assert!(none.find_empty().is_err());

        let many = board_from_str_array(&["R_", "_#"]).unwrap();
        assert!(many.find_empty().is_err());
    }

    #[test]
    fn test_apply_move_swaps_endpoints_only() {
        let board = board_from_str_array(&["RB_", "###", "###"]).unwrap();
        // Red jumps over blue into the empty cell; blue must stay put.
        let jumped = board.apply_move(&Move {
            from: (0, 0),
            to: (0, 2),
        });
        assert_eq!(jumped.get(0, 0), Piece::Empty);
        assert_eq!(jumped.get(0, 1), Piece::Blue);
        assert_eq!(jumped.get(0, 2), Piece::Red);
    }

    #[test]
    fn test_apply_move_self_inverse() {
        let board = board_from_str_array(&["R_B", "#R#", "B#_"]).unwrap();
        // Deliberately malformed (two empties); apply_move does not care.
        let mv = Move {
            from: (1, 1),
            to: (0, 1),
        };
        let restored = board.apply_move(&mv).apply_move(&mv.reversed());
        assert_eq!(restored, board);
    }

    #[test]
    fn test_red_slides_down_and_right_only() {
        let board = board_from_str_array(&["_#_", "#R#", "_#_"]).unwrap();
        // Empty cells are diagonal from the red piece, so nothing is legal.
        assert!(generate_moves(&board).is_empty());

        let board = board_from_str_array(&["___", "_R_", "___"]).unwrap();
        // Malformed for solving but fine for move generation: red may go
        // down or right, never up or left.
        let moves = generate_moves(&board);
        assert_eq!(
            moves,
            vec![
                Move {
                    from: (1, 1),
                    to: (2, 1)
                },
                Move {
                    from: (1, 1),
                    to: (1, 2)
                },
            ]
        );
    }

    #[test]
    fn test_blue_slides_up_and_left_only() {
        let board = board_from_str_array(&["___", "_B_", "___"]).unwrap();
        let moves = generate_moves(&board);
        assert_eq!(
            moves,
            vec![
                Move {
                    from: (1, 1),
                    to: (0, 1)
                },
                Move {
                    from: (1, 1),
                    to: (1, 0)
                },
            ]
        );
    }

    #[test]
    fn test_jump_requires_opposing_piece() {
        let over_blue = board_from_str_array(&["RB_", "###", "###"]).unwrap();
        assert!(generate_moves(&over_blue).contains(&Move {
            from: (0, 0),
            to: (0, 2)
        }));

        // Same color and blocked cells are not jumpable.
        let over_red = board_from_str_array(&["RR_", "###", "###"]).unwrap();
        assert!(!generate_moves(&over_red).contains(&Move {
            from: (0, 0),
            to: (0, 2)
        }));
        let over_block = board_from_str_array(&["R#_", "###", "###"]).unwrap();
        assert!(!generate_moves(&over_block).contains(&Move {
            from: (0, 0),
            to: (0, 2)
        }));
    }

    #[test]
    fn test_jump_landing_must_be_in_bounds() {
        // Blue beside the left edge: the landing square for its leftward
        // jump over red is off the board.
        let board = board_from_str_array(&["RB_", "###", "###"]).unwrap();
        let blue_moves: Vec<_> = generate_moves(&board)
            .into_iter()
            .filter(|m| m.from == (0, 1))
            .collect();
        assert!(blue_moves.is_empty());
    }

    #[test]
    fn test_key_matches_structure() {
        let a = board_from_str_array(&["R_", "#B"]).unwrap();
        let b = board_from_str_array(&["R_", "#B"]).unwrap();
        let c = board_from_str_array(&["_R", "#B"]).unwrap();
        assert_eq!(a.key(), b.key());
        assert_ne!(a.key(), c.key());
    }

    #[test]
    fn test_key_injective_over_random_boards() {
        use std::collections::HashMap;

        // Stress the canonical key: many seeded scatter boards, no two
        // distinct boards may collide.
        let mut seen: HashMap<String, Board> = HashMap::new();
        for seed in 0..500u64 {
            let board = Board::new_random_scatter(5, 8, 8, seed);
            if let Some(previous) = seen.insert(board.key(), board.clone()) {
                assert_eq!(previous, board, "key collision between distinct boards");
            }
        }
        // Shuffling 25 cells over 500 seeds should yield mostly unique
        // arrangements; a few duplicates are fine, total collapse is not.
        assert!(seen.len() > 450);
    }

    #[test]
    fn test_display_round_trips_through_parser() {
        let rows = ["RR_", "#B#", "__B"];
        let board = board_from_str_array(&rows).unwrap();
        let rendered = board.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines, rows);
    }
}
