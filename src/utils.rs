use thiserror::Error;

use crate::engine::{Board, Piece};

/// Errors raised while parsing a textual board.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The rows do not form a square grid.
    #[error("board is not square: {rows} rows but row {row} has {cols} cells")]
    NotSquare {
        rows: usize,
        row: usize,
        cols: usize,
    },
    /// A cell character is not one of the four markers.
    #[error("unrecognized character '{found}' in row {row} col {col}")]
    UnrecognizedChar {
        found: char,
        row: usize,
        col: usize,
    },
}

/// Parses an array of row strings into a `Board`.
///
/// Each string is one row, top to bottom. The grid must be square: as many
/// rows as columns, every row the same length. Valid markers are `R` (red),
/// `B` (blue), `#` (blocked) and `_` (empty); anything else is an error.
/// No puzzle-level validation happens here; a parsed board may still be
/// rejected by the solver (for example with no empty cell).
///
/// # Examples
/// ```
/// use foreaft_solver::utils::board_from_str_array;
/// use foreaft_solver::engine::Piece;
///
/// let board = board_from_str_array(&[
///     "R_B",
///     "#R#",
///     "BB#",
/// ]).unwrap();
/// assert_eq!(board.get(0, 0), Piece::Red);
/// assert_eq!(board.get(0, 1), Piece::Empty);
/// assert_eq!(board.get(1, 0), Piece::Block);
///
/// assert!(board_from_str_array(&["RX_", "###", "###"]).is_err());
/// assert!(board_from_str_array(&["R_", "###"]).is_err());
/// ```
pub fn board_from_str_array(s: &[&str]) -> Result<Board, ParseError> {
    let size = s.len();
    let mut rows = Vec::with_capacity(size);

    for (r, row_str) in s.iter().enumerate() {
        let cols = row_str.chars().count();
        if cols != size {
            return Err(ParseError::NotSquare {
                rows: size,
                row: r,
                cols,
            });
        }

        let mut row = Vec::with_capacity(size);
        for (c, marker) in row_str.chars().enumerate() {
            let piece = Piece::from_char(marker).ok_or(ParseError::UnrecognizedChar {
                found: marker,
                row: r,
                col: c,
            })?;
            row.push(piece);
        }
        rows.push(row);
    }

    // Every row length was checked against the row count above.
    Ok(Board::from_rows(rows).expect("rows form a square grid"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_from_str_array_valid() {
        let board = board_from_str_array(&["RRB", "#_#", "BRB"]).unwrap();
        assert_eq!(board.size(), 3);
        assert_eq!(board.get(0, 0), Piece::Red);
        assert_eq!(board.get(1, 1), Piece::Empty);
        assert_eq!(board.get(2, 0), Piece::Blue);
        assert_eq!(board.get(1, 0), Piece::Block);
    }

    #[test]
    fn test_board_from_str_array_invalid_char() {
        let result = board_from_str_array(&["RGB", "###", "###"]);
        assert_eq!(
            result.unwrap_err(),
            ParseError::UnrecognizedChar {
                found: 'G',
                row: 0,
                col: 1
            }
        );
    }

    #[test]
    fn test_board_from_str_array_rejects_spaces() {
        let result = board_from_str_array(&["R B", "###", "###"]);
        assert!(matches!(
            result,
            Err(ParseError::UnrecognizedChar { found: ' ', .. })
        ));
    }

    #[test]
    fn test_board_from_str_array_row_length_mismatch() {
        let result = board_from_str_array(&["RB", "###", "###"]);
        assert_eq!(
            result.unwrap_err(),
            ParseError::NotSquare {
                rows: 3,
                row: 0,
                cols: 2
            }
        );
    }

    #[test]
    fn test_board_from_str_array_too_few_rows() {
        // Two rows of three cells is not square either.
        let result = board_from_str_array(&["RRB", "#_#"]);
        assert!(matches!(result, Err(ParseError::NotSquare { .. })));
    }

    #[test]
    fn test_board_from_str_array_empty_input() {
        let board = board_from_str_array(&[]).unwrap();
        assert_eq!(board.size(), 0);
    }
}
