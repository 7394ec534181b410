//! Board structure and oracle snapshots

use std::fmt;

use super::{Pos, Stone, BOARD_SIZE, COLUMNS};
use crate::error::GameError;

/// Read-only copy of the board handed to the oracle.
///
/// Cells are encoded as 0 (empty), 1 (black), 2 (white), indexed `[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub cells: [[u8; BOARD_SIZE]; BOARD_SIZE],
}

impl Snapshot {
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row][col]
    }
}

/// Game board
///
/// The only mutation paths are [`Board::place`] and [`Board::clear`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Stone; BOARD_SIZE]; BOARD_SIZE],
    stones: u32,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Stone::Empty; BOARD_SIZE]; BOARD_SIZE],
            stones: 0,
        }
    }

    /// Rebuild a board from an oracle snapshot. Unknown codes read as empty.
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let mut board = Self::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let stone = Stone::from_code(snapshot.get(row, col)).unwrap_or(Stone::Empty);
                if stone != Stone::Empty {
                    board.cells[row][col] = stone;
                    board.stones += 1;
                }
            }
        }
        board
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    #[inline]
    pub fn in_bounds(row: i32, col: i32) -> bool {
        Pos::is_valid(row, col)
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.cells[pos.row as usize][pos.col as usize]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// Place a stone on an empty cell
    pub fn place(&mut self, pos: Pos, stone: Stone) -> Result<(), GameError> {
        if !Pos::is_valid(pos.row as i32, pos.col as i32) {
            return Err(GameError::OutOfBounds {
                row: pos.row as i32,
                col: pos.col as i32,
            });
        }
        if stone == Stone::Empty {
            return Err(GameError::EmptyStone(pos));
        }
        if !self.is_empty(pos) {
            return Err(GameError::CellOccupied(pos));
        }
        self.cells[pos.row as usize][pos.col as usize] = stone;
        self.stones += 1;
        Ok(())
    }

    /// Reset a cell to empty. Only undo calls this.
    pub fn clear(&mut self, pos: Pos) {
        let cell = &mut self.cells[pos.row as usize][pos.col as usize];
        if *cell != Stone::Empty {
            *cell = Stone::Empty;
            self.stones -= 1;
        }
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.stones
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.stones == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.stones as usize == BOARD_SIZE * BOARD_SIZE
    }

    /// Positions holding `stone`, row-major
    pub fn positions_of(&self, stone: Stone) -> impl Iterator<Item = Pos> + '_ {
        (0..BOARD_SIZE * BOARD_SIZE)
            .map(Pos::from_index)
            .filter(move |&pos| self.get(pos) == stone)
    }

    /// Encode the board for the oracle
    pub fn snapshot(&self) -> Snapshot {
        let mut cells = [[0u8; BOARD_SIZE]; BOARD_SIZE];
        for (row, line) in self.cells.iter().enumerate() {
            for (col, stone) in line.iter().enumerate() {
                cells[row][col] = stone.code();
            }
        }
        Snapshot { cells }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Console rendering: column header, then rows 15 down to 1
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header: Vec<String> = COLUMNS.chars().map(String::from).collect();
        writeln!(f, "   {}", header.join(" "))?;
        for row in (0..BOARD_SIZE).rev() {
            let line: Vec<String> = self.cells[row]
                .iter()
                .map(|stone| stone.symbol().to_string())
                .collect();
            writeln!(f, "{:2} {}", row + 1, line.join(" "))?;
        }
        Ok(())
    }
}
