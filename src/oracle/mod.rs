//! The move oracle: an opaque service that picks the non-human side's move.
//!
//! The controller never sees how a move is chosen. It hands a [`Snapshot`] to
//! an [`OracleClient`], which runs [`Oracle::compute`] on a worker thread and
//! later yields exactly one [`OracleResponse`].

pub mod client;
pub mod shape;

pub use client::{OracleClient, RequestId};
pub use shape::ShapeOracle;

use crate::board::Snapshot;
use crate::error::OracleError;

/// Move computation service.
///
/// `compute` blocks for as long as the search takes. `diagnostics` is a
/// free-form text channel that ends up in the log and nowhere else.
pub trait Oracle: Send + Sync + 'static {
    fn compute(
        &self,
        snapshot: &Snapshot,
        diagnostics: &mut dyn FnMut(&str),
    ) -> Result<Option<(i32, i32)>, OracleError>;
}

/// What one request produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OracleResponse {
    /// Raw coordinates, not yet validated against the board
    Move { row: i32, col: i32 },
    /// The oracle had nothing to offer
    NoMove,
    /// The call failed
    Failed(OracleError),
}

impl From<Result<Option<(i32, i32)>, OracleError>> for OracleResponse {
    fn from(result: Result<Option<(i32, i32)>, OracleError>) -> Self {
        match result {
            Ok(Some((row, col))) => OracleResponse::Move { row, col },
            Ok(None) => OracleResponse::NoMove,
            Err(err) => OracleResponse::Failed(err),
        }
    }
}
