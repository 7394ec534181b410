//! Move log with undo

use std::fmt;

use crate::board::{Pos, Stone};
use crate::error::GameError;

/// A placed stone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub pos: Pos,
    pub color: Stone,
}

impl Move {
    pub fn new(pos: Pos, color: Stone) -> Self {
        Self { pos, color }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.pos)
    }
}

/// Append-only log of moves; popping the last entry is the only other mutation.
///
/// Its length always equals the number of stones on the board.
#[derive(Debug, Clone, Default)]
pub struct MoveHistory {
    moves: Vec<Move>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self {
            moves: Vec::with_capacity(crate::board::TOTAL_CELLS),
        }
    }

    pub fn record(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    pub fn undo_last(&mut self) -> Result<Move, GameError> {
        self.moves.pop().ok_or(GameError::HistoryEmpty)
    }

    #[inline]
    pub fn last(&self) -> Option<&Move> {
        self.moves.last()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Move> {
        self.moves.iter()
    }
}
