use std::fmt;
use std::str::FromStr;

use crate::error::BoardParseError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
/// The center column, favoured by the evaluator and the root tie-break.
pub const CENTER_COL: usize = COLS / 2;

/// Contents of a single grid cell. The AI is the maximizing player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Ai,
    Human,
}

impl Cell {
    /// Single-character marker used at every serialization boundary.
    pub fn marker(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Ai => 'X',
            Cell::Human => 'O',
        }
    }

    pub fn from_marker(marker: char) -> Option<Cell> {
        match marker {
            '.' => Some(Cell::Empty),
            'X' => Some(Cell::Ai),
            'O' => Some(Cell::Human),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is out of range")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),
}

/// A 6×7 grid with row 0 on top. Within any column the empty cells form a
/// contiguous upper segment (gravity invariant). Boards are value types:
/// applying a move produces a new board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position.
    /// Row 0 is the top, row 5 is the bottom.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// A move is legal iff the column is in range and its top cell is empty.
    pub fn is_valid_move(&self, col: usize) -> bool {
        col < COLS && self.cells[0][col] == Cell::Empty
    }

    /// Legal columns in ascending order. The ordering is significant: it
    /// fixes iteration order, tie-break preference and pruning cutoffs.
    pub fn valid_moves(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| self.is_valid_move(col)).collect()
    }

    /// The board is terminal exactly when no column accepts a piece.
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| !self.is_valid_move(col))
    }

    /// Drop a piece in a column, returning the resulting board. The receiver
    /// is never mutated.
    pub fn with_move(&self, col: usize, cell: Cell) -> Result<Board, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }
        if self.cells[0][col] != Cell::Empty {
            return Err(MoveError::ColumnFull(col));
        }

        let mut next = *self;
        for row in (0..ROWS).rev() {
            if next.cells[row][col] == Cell::Empty {
                next.cells[row][col] = cell;
                return Ok(next);
            }
        }
        unreachable!("column with an empty top cell has an empty slot");
    }

    /// Number of occupied cells.
    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row.iter().map(|c| c.marker().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

impl TryFrom<Vec<String>> for Board {
    type Error = BoardParseError;

    fn try_from(rows: Vec<String>) -> Result<Self, Self::Error> {
        if rows.len() != ROWS {
            return Err(BoardParseError::RowCount(rows.len()));
        }

        let mut board = Board::new();
        for (r, line) in rows.iter().enumerate() {
            let markers: Vec<char> = line.chars().filter(|ch| !ch.is_whitespace()).collect();
            if markers.len() != COLS {
                return Err(BoardParseError::RowWidth {
                    row: r,
                    width: markers.len(),
                });
            }
            for (c, &marker) in markers.iter().enumerate() {
                board.cells[r][c] = Cell::from_marker(marker).ok_or(
                    BoardParseError::UnknownMarker {
                        row: r,
                        col: c,
                        marker,
                    },
                )?;
            }
        }

        // gravity invariant: no empty cell below an occupied one
        for col in 0..COLS {
            let mut seen_piece = false;
            for row in 0..ROWS {
                match board.cells[row][col] {
                    Cell::Empty if seen_piece => {
                        return Err(BoardParseError::FloatingPiece { row, col });
                    }
                    Cell::Empty => {}
                    _ => seen_piece = true,
                }
            }
        }

        Ok(board)
    }
}

impl From<Board> for Vec<String> {
    fn from(board: Board) -> Vec<String> {
        board
            .cells
            .iter()
            .map(|row| row.iter().map(|c| c.marker()).collect())
            .collect()
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<String> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Board::try_from(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.piece_count(), 0);
    }

    #[test]
    fn valid_moves_are_ascending() {
        let board = Board::new();
        assert_eq!(board.valid_moves(), vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn with_move_drops_to_bottom_then_stacks() {
        let board = Board::new();
        let board = board.with_move(3, Cell::Ai).unwrap();
        assert_eq!(board.get(5, 3), Cell::Ai);

        let board = board.with_move(3, Cell::Human).unwrap();
        assert_eq!(board.get(4, 3), Cell::Human);
        assert_eq!(board.get(5, 3), Cell::Ai);
    }

    #[test]
    fn with_move_leaves_receiver_untouched() {
        let board = Board::new();
        let _ = board.with_move(0, Cell::Ai).unwrap();
        assert_eq!(board.piece_count(), 0);
    }

    #[test]
    fn with_move_touches_exactly_one_cell() {
        let board: Board = "\
            .......\n\
            .......\n\
            ..XO...\n\
            .XOXO..\n\
            XOXOXO.\n\
            OXOXOX.\n"
            .parse()
            .unwrap();
        let before = board.piece_count();
        let after = board.with_move(6, Cell::Ai).unwrap();
        assert_eq!(after.piece_count(), before + 1);
        for row in 0..ROWS {
            for col in 0..COLS - 1 {
                assert_eq!(after.get(row, col), board.get(row, col));
            }
        }
    }

    #[test]
    fn full_column_rejects_moves() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            board = board.with_move(0, Cell::Ai).unwrap();
        }
        assert!(!board.is_valid_move(0));
        assert_eq!(
            board.with_move(0, Cell::Human),
            Err(MoveError::ColumnFull(0))
        );
        // stays invalid after moves elsewhere
        let board = board.with_move(1, Cell::Human).unwrap();
        assert!(!board.is_valid_move(0));
    }

    #[test]
    fn out_of_range_column_rejected() {
        let board = Board::new();
        assert_eq!(
            board.with_move(7, Cell::Ai),
            Err(MoveError::InvalidColumn(7))
        );
        assert!(!board.is_valid_move(7));
    }

    #[test]
    fn full_board_is_terminal() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board = board.with_move(col, Cell::Ai).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(board.valid_moves().is_empty());
    }

    #[test]
    fn parse_display_round_trip() {
        let text = "\
            .......\n\
            .......\n\
            ..XO...\n\
            .XOXO..\n\
            XOXOXO.\n\
            OXOXOX.\n";
        let board: Board = text.parse().unwrap();
        assert_eq!(board.get(5, 0), Cell::Human);
        assert_eq!(board.get(2, 2), Cell::Ai);
        let reparsed: Board = board.to_string().parse().unwrap();
        assert_eq!(board, reparsed);
    }

    #[test]
    fn parse_rejects_bad_shapes() {
        assert!(matches!(
            "...".parse::<Board>(),
            Err(BoardParseError::RowCount(1))
        ));

        let narrow = "......\n......\n......\n......\n......\n......\n";
        assert!(matches!(
            narrow.parse::<Board>(),
            Err(BoardParseError::RowWidth { row: 0, width: 6 })
        ));

        let bad_marker = "\
            .......\n\
            .......\n\
            .......\n\
            .......\n\
            .......\n\
            ...Z...\n";
        assert!(matches!(
            bad_marker.parse::<Board>(),
            Err(BoardParseError::UnknownMarker { marker: 'Z', .. })
        ));
    }

    #[test]
    fn parse_rejects_floating_piece() {
        let floating = "\
            .......\n\
            .......\n\
            ...X...\n\
            .......\n\
            .......\n\
            .......\n";
        assert!(matches!(
            floating.parse::<Board>(),
            Err(BoardParseError::FloatingPiece { row: 3, col: 3 })
        ));
    }

    #[test]
    fn serde_round_trip_uses_marker_rows() {
        let board: Board = "\
            .......\n\
            .......\n\
            .......\n\
            .......\n\
            ...X...\n\
            ...O...\n"
            .parse()
            .unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert!(json.contains("\"...X...\""));
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, back);
    }
}
