//! Gomoku against a move oracle
//!
//! Five-in-a-row on a 15x15 board: a human plays White and moves first, the
//! other side is computed by an external service behind the [`Oracle`] trait.
//!
//! # Architecture
//!
//! - [`board`]: board grid, positions, move notation and oracle snapshots
//! - [`rules`]: five-in-a-row detection
//! - [`history`]: move log with undo
//! - [`oracle`]: the oracle contract, the async client and a built-in oracle
//! - [`controller`]: the turn state machine tying it all together
//! - [`console`] and [`ui`]: terminal and egui front ends
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use gomoku::{GameController, Phase, Pos, ShapeOracle, Stone};
//!
//! let mut game = GameController::new(Arc::new(ShapeOracle::new(Stone::Black)));
//! game.apply_human_move(Pos::new(7, 7)).unwrap();
//!
//! // Once per frame; never blocks
//! while game.phase() == Phase::AwaitingOracle {
//!     game.update();
//! }
//! println!("{}", game.board());
//! ```

pub mod board;
pub mod config;
pub mod console;
pub mod controller;
pub mod error;
pub mod history;
pub mod oracle;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{parse_move, Board, Pos, Snapshot, Stone, BOARD_SIZE, COLUMNS};
pub use controller::{ControllerEvent, GameController, Phase};
pub use error::{GameError, InvalidResponse, OracleError};
pub use history::{Move, MoveHistory};
pub use oracle::{Oracle, OracleClient, OracleResponse, ShapeOracle};
