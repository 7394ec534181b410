//! Error types for the game engine

use derive_more::{Display, Error};

use crate::board::Pos;

/// Why an oracle answer could not be applied
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InvalidResponse {
    /// The oracle found no move
    #[display("oracle returned no move")]
    NoMove,

    /// The returned coordinates are off the board
    #[display("oracle returned out-of-range ({row}, {col})")]
    OutOfRange { row: i32, col: i32 },

    /// The returned cell already holds a stone
    #[display("oracle returned occupied cell {_0}")]
    Occupied(#[error(not(source))] Pos),

    /// The oracle call itself failed
    #[display("oracle call failed: {_0}")]
    Failed(OracleError),
}

/// Failure inside an oracle call
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum OracleError {
    /// The service reported an error
    #[display("{_0}")]
    Service(#[error(not(source))] String),

    /// The worker thread went away without answering
    #[display("worker terminated without a result")]
    WorkerLost,
}

/// Errors raised by board and controller operations.
///
/// None of these end the game; the front ends ignore rejected input and the
/// controller retries invalid oracle answers.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Placement attempted on a non-empty cell
    #[display("cell {_0} is already occupied")]
    CellOccupied(#[error(not(source))] Pos),

    /// `Stone::Empty` is not something that can be placed
    #[display("cannot place an empty stone at {_0}")]
    EmptyStone(#[error(not(source))] Pos),

    /// Coordinate outside the 15x15 grid
    #[display("({row}, {col}) is off the board")]
    OutOfBounds { row: i32, col: i32 },

    /// Malformed textual move
    #[display("cannot parse move {_0:?}")]
    ParseFailure(#[error(not(source))] String),

    /// Oracle answer rejected
    #[display("invalid oracle response: {_0}")]
    OracleInvalidResponse(InvalidResponse),

    /// Undo with no moves recorded
    #[display("no moves to undo")]
    HistoryEmpty,

    /// The game has already been decided
    #[display("game is over")]
    GameOver,

    /// Not allowed while the oracle is computing
    #[display("oracle is thinking")]
    OracleInFlight,

    /// A request is already outstanding on the client
    #[display("an oracle request is already pending")]
    OracleBusy,
}
