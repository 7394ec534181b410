//! Terminal front end
//!
//! Reads moves in notation (`H8`) from a line reader and prints the board
//! after every change. While the oracle thinks the loop polls
//! [`GameController::update`] with a short sleep, so the game keeps the same
//! polling shape as the windowed front end.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::controller::{ControllerEvent, GameController, Phase};
use crate::error::GameError;

/// Sleep between polls while the oracle thinks
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// A line of user input, interpreted
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Place(String),
    Undo,
    NewGame,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Command {
        match line.trim().to_ascii_lowercase().as_str() {
            "z" | "u" | "undo" => Command::Undo,
            "n" | "new" => Command::NewGame,
            "q" | "quit" | "exit" => Command::Quit,
            _ => Command::Place(line.trim().to_string()),
        }
    }
}

/// Run until the input ends or the player quits
pub fn run<R: BufRead, W: Write>(
    controller: &mut GameController,
    input: R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "You are White ({}). Enter moves like H8; z undo, n new game, q quit.", crate::Stone::White.symbol())?;
    write!(out, "{}", controller.board())?;

    let mut lines = input.lines();
    loop {
        if let Phase::GameOver { winner } = controller.phase() {
            match winner {
                Some(stone) => writeln!(out, "{} wins!", stone)?,
                None => writeln!(out, "Draw.")?,
            }
            writeln!(out, "n for a new game, q to quit.")?;
        }

        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;

        match Command::parse(&line) {
            Command::Quit => return Ok(()),
            Command::NewGame => {
                controller.reset();
                write!(out, "{}", controller.board())?;
            }
            Command::Undo => match controller.undo() {
                Ok(_) => write!(out, "{}", controller.board())?,
                Err(err) => writeln!(out, "{}", err)?,
            },
            Command::Place(text) if text.is_empty() => {}
            Command::Place(text) => match controller.apply_human_notation(&text) {
                Ok(Phase::AwaitingOracle) => {
                    write!(out, "{}", controller.board())?;
                    wait_for_oracle(controller, out)?;
                }
                Ok(_) => write!(out, "{}", controller.board())?,
                Err(err @ GameError::ParseFailure(_)) | Err(err @ GameError::CellOccupied(_)) => {
                    debug!(%err, "input ignored");
                    writeln!(out, "{}", err)?;
                }
                Err(err) => writeln!(out, "{}", err)?,
            },
        }
    }
}

/// Poll until the oracle's move lands
fn wait_for_oracle<W: Write>(controller: &mut GameController, out: &mut W) -> io::Result<()> {
    while controller.is_oracle_thinking() {
        match controller.update() {
            Some(ControllerEvent::OracleMoved { mv, .. }) => {
                writeln!(out, "Oracle plays {}", mv.pos)?;
                write!(out, "{}", controller.board())?;
            }
            Some(ControllerEvent::OracleRetry { .. }) | None => thread::sleep(POLL_INTERVAL),
        }
    }
    Ok(())
}
