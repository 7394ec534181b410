//! Command-line configuration

use std::sync::Arc;

use clap::Parser;

use crate::controller::ORACLE;
use crate::oracle::{Oracle, ShapeOracle};

/// Five-in-a-row against the move oracle. You play White and move first.
#[derive(Parser, Debug, Clone)]
#[command(name = "gomoku")]
#[command(version)]
pub struct Cli {
    /// Play in the terminal instead of the window (moves like `H8`)
    #[arg(long)]
    pub console: bool,

    /// Oracle search depth in plies
    #[arg(long, default_value_t = ShapeOracle::DEFAULT_DEPTH)]
    pub depth: u8,

    /// Candidate cells examined per search node
    #[arg(long, default_value_t = ShapeOracle::DEFAULT_BREADTH)]
    pub breadth: usize,

    /// Weight of the oracle's own shapes against blocking yours
    #[arg(long, default_value_t = ShapeOracle::DEFAULT_ATTACK)]
    pub attack: i32,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log: String,
}

impl Cli {
    /// The oracle this configuration describes
    pub fn oracle(&self) -> Arc<dyn Oracle> {
        Arc::new(ShapeOracle::with_config(
            ORACLE,
            self.depth,
            self.breadth,
            self.attack,
        ))
    }
}
