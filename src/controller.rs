//! Turn state machine
//!
//! The controller owns the board and the move log and is the only thing that
//! mutates them. It runs entirely on the caller's thread: the oracle worker
//! only ever sees a snapshot and sends a value back, which [`GameController::update`]
//! validates and applies.
//!
//! ```text
//!  AwaitingHuman --human move--> AwaitingOracle --valid answer--> AwaitingHuman
//!        |  ^                       |      ^
//!        |  +------- undo ----+     +------+ invalid answer: re-dispatch
//!        v                                 |
//!     GameOver <---------- win ------------+
//! ```

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::board::{parse_move, Board, Pos, Stone};
use crate::error::{GameError, InvalidResponse};
use crate::history::{Move, MoveHistory};
use crate::oracle::{Oracle, OracleClient, OracleResponse, RequestId};
use crate::rules::{check_win, winning_line};

/// The human's color; the human always moves first
pub const HUMAN: Stone = Stone::White;
/// The oracle's color (snapshot code 1)
pub const ORACLE: Stone = Stone::Black;

/// Controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingHuman,
    AwaitingOracle,
    /// Terminal. `winner` is `None` for a full board.
    GameOver { winner: Option<Stone> },
}

impl Phase {
    pub fn is_game_over(self) -> bool {
        matches!(self, Phase::GameOver { .. })
    }
}

/// What a call to [`GameController::update`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerEvent {
    /// The oracle's move was placed
    OracleMoved { mv: Move, phase: Phase },
    /// The answer was rejected and a fresh request dispatched
    OracleRetry {
        reason: InvalidResponse,
        request: RequestId,
    },
}

/// Owns the game and drives the oracle
pub struct GameController {
    board: Board,
    history: MoveHistory,
    turn: Stone,
    phase: Phase,
    client: OracleClient,
    last_move: Option<Pos>,
    winning_line: Option<Vec<Pos>>,
    /// Rejected answers since the last applied oracle move
    retries: u32,
    last_oracle_time: Option<Duration>,
}

impl GameController {
    pub fn new(oracle: Arc<dyn Oracle>) -> Self {
        Self {
            board: Board::new(),
            history: MoveHistory::new(),
            turn: HUMAN,
            phase: Phase::AwaitingHuman,
            client: OracleClient::new(oracle),
            last_move: None,
            winning_line: None,
            retries: 0,
            last_oracle_time: None,
        }
    }

    /// Start a new game. An in-flight request is abandoned; its result is
    /// dropped along with its channel.
    pub fn reset(&mut self) {
        self.client.abandon();
        self.board = Board::new();
        self.history = MoveHistory::new();
        self.turn = HUMAN;
        self.phase = Phase::AwaitingHuman;
        self.last_move = None;
        self.winning_line = None;
        self.retries = 0;
        self.last_oracle_time = None;
        info!("new game");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn turn(&self) -> Stone {
        self.turn
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    pub fn winning_line(&self) -> Option<&[Pos]> {
        self.winning_line.as_deref()
    }

    pub fn retries(&self) -> u32 {
        self.retries
    }

    pub fn is_oracle_thinking(&self) -> bool {
        self.phase == Phase::AwaitingOracle
    }

    /// How long the current request has been running
    pub fn oracle_elapsed(&self) -> Option<Duration> {
        if self.is_oracle_thinking() {
            self.client.elapsed()
        } else {
            None
        }
    }

    /// Time the oracle took for its last applied move
    pub fn last_oracle_time(&self) -> Option<Duration> {
        self.last_oracle_time
    }

    /// Place the human's stone, then hand the board to the oracle.
    ///
    /// Rejected input leaves board, history and turn untouched.
    pub fn apply_human_move(&mut self, pos: Pos) -> Result<Phase, GameError> {
        match self.phase {
            Phase::GameOver { .. } => return Err(GameError::GameOver),
            Phase::AwaitingOracle => return Err(GameError::OracleInFlight),
            Phase::AwaitingHuman => {}
        }

        let mv = self.place(pos, HUMAN)?;
        debug!(%mv, "human move");

        if self.finish_if_decided(mv) {
            return Ok(self.phase);
        }

        if let Err(err) = self.dispatch() {
            // Nobody would answer; take the stone back
            self.undo_one()?;
            self.last_move = self.history.last().map(|mv| mv.pos);
            return Err(err);
        }
        self.phase = Phase::AwaitingOracle;
        Ok(self.phase)
    }

    /// Same as [`apply_human_move`](Self::apply_human_move) for notation such as `H8`
    pub fn apply_human_notation(&mut self, text: &str) -> Result<Phase, GameError> {
        let pos = parse_move(text).ok_or_else(|| GameError::ParseFailure(text.trim().to_string()))?;
        self.apply_human_move(pos)
    }

    /// Roll back to the human's previous turn.
    ///
    /// Moves are popped one at a time, each the exact inverse of its
    /// placement, until it is the human's turn again; with the human always
    /// moving first this removes the oracle's reply and the human move before it.
    pub fn undo(&mut self) -> Result<Vec<Move>, GameError> {
        match self.phase {
            Phase::GameOver { .. } => return Err(GameError::GameOver),
            Phase::AwaitingOracle => return Err(GameError::OracleInFlight),
            Phase::AwaitingHuman => {}
        }

        let mut undone = vec![self.undo_one()?];
        while self.turn != HUMAN {
            match self.undo_one() {
                Ok(mv) => undone.push(mv),
                Err(_) => break,
            }
        }

        self.last_move = self.history.last().map(|mv| mv.pos);
        debug!(count = undone.len(), stones = self.history.len(), "undo");
        Ok(undone)
    }

    fn undo_one(&mut self) -> Result<Move, GameError> {
        let mv = self.history.undo_last()?;
        self.board.clear(mv.pos);
        self.turn = mv.color;
        Ok(mv)
    }

    /// Per-frame entry point: non-blocking check for an oracle answer.
    ///
    /// Returns `None` when there was nothing to do.
    pub fn update(&mut self) -> Option<ControllerEvent> {
        if self.phase != Phase::AwaitingOracle || !self.client.is_ready() {
            return None;
        }
        let (request, response, elapsed) = self.client.take_result()?;

        match self.validate(&response) {
            Ok(pos) => {
                let mv = match self.place(pos, ORACLE) {
                    Ok(mv) => mv,
                    Err(_) => return self.retry(request, InvalidResponse::Occupied(pos)),
                };
                self.retries = 0;
                self.last_oracle_time = Some(elapsed);
                info!(request = request.0, %mv, ?elapsed, "oracle move");
                debug!("\n{}", self.board);

                if !self.finish_if_decided(mv) {
                    self.phase = Phase::AwaitingHuman;
                }
                Some(ControllerEvent::OracleMoved {
                    mv,
                    phase: self.phase,
                })
            }
            Err(reason) => self.retry(request, reason),
        }
    }

    /// The answer must name an in-bounds, currently empty cell
    fn validate(&self, response: &OracleResponse) -> Result<Pos, InvalidResponse> {
        match *response {
            OracleResponse::Move { row, col } => {
                let pos = Pos::checked(row, col)
                    .map_err(|_| InvalidResponse::OutOfRange { row, col })?;
                if self.board.is_empty(pos) {
                    Ok(pos)
                } else {
                    Err(InvalidResponse::Occupied(pos))
                }
            }
            OracleResponse::NoMove => Err(InvalidResponse::NoMove),
            OracleResponse::Failed(ref err) => Err(InvalidResponse::Failed(err.clone())),
        }
    }

    /// Discard a bad answer and ask again with the current board. Unbounded.
    fn retry(&mut self, rejected: RequestId, reason: InvalidResponse) -> Option<ControllerEvent> {
        self.retries += 1;
        let error = GameError::OracleInvalidResponse(reason.clone());
        warn!(request = rejected.0, attempt = self.retries, %error, "retrying oracle");

        let request = match self.dispatch() {
            Ok(request) => request,
            Err(err) => {
                // Whatever occupies the client is stale; replace it so one request stays live
                warn!(%err, "oracle client busy, abandoning its request");
                self.client.abandon();
                match self.dispatch() {
                    Ok(request) => request,
                    Err(err) => {
                        warn!(%err, "could not re-dispatch oracle request");
                        return None;
                    }
                }
            }
        };
        Some(ControllerEvent::OracleRetry { reason, request })
    }

    fn dispatch(&mut self) -> Result<RequestId, GameError> {
        self.client.request(self.board.snapshot())
    }

    /// Place a stone, log it and flip the turn
    fn place(&mut self, pos: Pos, color: Stone) -> Result<Move, GameError> {
        self.board.place(pos, color)?;
        let mv = Move::new(pos, color);
        self.history.record(mv);
        self.last_move = Some(pos);
        self.turn = color.opponent();
        Ok(mv)
    }

    /// Enter `GameOver` if `mv` won or filled the board
    fn finish_if_decided(&mut self, mv: Move) -> bool {
        if check_win(&self.board, mv.pos, mv.color) {
            self.winning_line = winning_line(&self.board, mv.pos, mv.color);
            self.phase = Phase::GameOver {
                winner: Some(mv.color),
            };
            info!(winner = %mv.color, moves = self.history.len(), "five in a row");
            return true;
        }
        if self.board.is_full() {
            self.phase = Phase::GameOver { winner: None };
            info!("board full, draw");
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Snapshot;
    use crate::error::OracleError;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::thread;
    use std::time::Instant;

    /// Answers from a script, then falls back to the first empty cell
    struct ScriptedOracle {
        answers: Mutex<VecDeque<Result<Option<(i32, i32)>, OracleError>>>,
        calls: Mutex<Vec<Snapshot>>,
    }

    impl ScriptedOracle {
        fn new(answers: Vec<Result<Option<(i32, i32)>, OracleError>>) -> Arc<Self> {
            Arc::new(Self {
                answers: Mutex::new(answers.into()),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    impl Oracle for ScriptedOracle {
        fn compute(
            &self,
            snapshot: &Snapshot,
            _diagnostics: &mut dyn FnMut(&str),
        ) -> Result<Option<(i32, i32)>, OracleError> {
            self.calls.lock().unwrap().push(*snapshot);
            if let Some(answer) = self.answers.lock().unwrap().pop_front() {
                return answer;
            }
            let board = Board::from_snapshot(snapshot);
            Ok((0..crate::board::TOTAL_CELLS)
                .map(Pos::from_index)
                .find(|&p| board.is_empty(p))
                .map(|p| (i32::from(p.row), i32::from(p.col))))
        }
    }

    fn wait_event(controller: &mut GameController) -> ControllerEvent {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(event) = controller.update() {
                return event;
            }
            assert!(Instant::now() < deadline, "no controller event");
            thread::sleep(Duration::from_millis(1));
        }
    }

    fn controller(answers: Vec<Result<Option<(i32, i32)>, OracleError>>) -> (GameController, Arc<ScriptedOracle>) {
        let oracle = ScriptedOracle::new(answers);
        (GameController::new(oracle.clone()), oracle)
    }

    #[test]
    fn test_initial_state() {
        let (game, _) = controller(vec![]);
        assert_eq!(game.phase(), Phase::AwaitingHuman);
        assert_eq!(game.turn(), Stone::White);
        assert!(game.history().is_empty());
        assert!(game.board().is_board_empty());
    }

    #[test]
    fn test_human_move_dispatches_oracle() {
        let (mut game, oracle) = controller(vec![Ok(Some((7, 8)))]);
        let phase = game.apply_human_move(Pos::new(7, 7)).unwrap();
        assert_eq!(phase, Phase::AwaitingOracle);
        assert_eq!(game.turn(), Stone::Black);
        assert_eq!(game.board().get(Pos::new(7, 7)), Stone::White);

        let event = wait_event(&mut game);
        let mv = Move::new(Pos::new(7, 8), Stone::Black);
        assert_eq!(
            event,
            ControllerEvent::OracleMoved {
                mv,
                phase: Phase::AwaitingHuman
            }
        );
        assert_eq!(game.turn(), Stone::White);
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.last_move(), Some(Pos::new(7, 8)));
        assert_eq!(oracle.calls(), 1);
    }

    #[test]
    fn test_oracle_sees_human_move() {
        let (mut game, oracle) = controller(vec![Ok(Some((0, 1)))]);
        game.apply_human_move(Pos::new(3, 3)).unwrap();
        wait_event(&mut game);
        let seen = oracle.calls.lock().unwrap();
        assert_eq!(seen[0].get(3, 3), Stone::White.code());
    }

    #[test]
    fn test_human_move_rejected_while_oracle_thinks() {
        let (mut game, _) = controller(vec![Ok(Some((1, 1)))]);
        game.apply_human_move(Pos::new(0, 0)).unwrap();
        assert_eq!(
            game.apply_human_move(Pos::new(5, 5)),
            Err(GameError::OracleInFlight)
        );
        assert_eq!(game.undo(), Err(GameError::OracleInFlight));
        assert_eq!(game.history().len(), 1);
        wait_event(&mut game);
    }

    #[test]
    fn test_occupied_human_move_changes_nothing() {
        let (mut game, _) = controller(vec![Ok(Some((0, 1)))]);
        game.apply_human_move(Pos::new(0, 0)).unwrap();
        wait_event(&mut game);

        let board = game.board().clone();
        for pos in [Pos::new(0, 0), Pos::new(0, 1)] {
            assert_eq!(game.apply_human_move(pos), Err(GameError::CellOccupied(pos)));
        }
        assert_eq!(game.board(), &board);
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.turn(), Stone::White);
        assert_eq!(game.phase(), Phase::AwaitingHuman);
    }

    #[test]
    fn test_occupied_oracle_answer_is_retried() {
        // White at (0,0); the oracle first answers (0,0) itself
        let (mut game, oracle) = controller(vec![Ok(Some((0, 0))), Ok(Some((5, 5)))]);
        game.apply_human_move(Pos::new(0, 0)).unwrap();

        let event = wait_event(&mut game);
        assert!(matches!(
            event,
            ControllerEvent::OracleRetry {
                reason: InvalidResponse::Occupied(p),
                ..
            } if p == Pos::new(0, 0)
        ));
        assert_eq!(game.board().get(Pos::new(0, 0)), Stone::White);
        assert_eq!(game.board().stone_count(), 1);
        assert_eq!(game.phase(), Phase::AwaitingOracle);
        assert_eq!(game.retries(), 1);

        let event = wait_event(&mut game);
        assert!(matches!(event, ControllerEvent::OracleMoved { .. }));
        assert_eq!(game.board().get(Pos::new(5, 5)), Stone::Black);
        assert_eq!(game.retries(), 0);
        assert_eq!(oracle.calls(), 2);
    }

    #[test]
    fn test_out_of_range_answer_is_retried() {
        let (mut game, oracle) = controller(vec![Ok(Some((15, 15))), Ok(Some((-1, 3)))]);
        game.apply_human_move(Pos::new(7, 7)).unwrap();

        let event = wait_event(&mut game);
        assert!(matches!(
            event,
            ControllerEvent::OracleRetry {
                reason: InvalidResponse::OutOfRange { row: 15, col: 15 },
                ..
            }
        ));
        let event = wait_event(&mut game);
        assert!(matches!(
            event,
            ControllerEvent::OracleRetry {
                reason: InvalidResponse::OutOfRange { row: -1, col: 3 },
                ..
            }
        ));
        assert_eq!(game.board().stone_count(), 1);

        // Falls back to the first empty cell
        let event = wait_event(&mut game);
        assert!(matches!(event, ControllerEvent::OracleMoved { .. }));
        assert_eq!(game.board().get(Pos::new(0, 0)), Stone::Black);
        assert_eq!(oracle.calls(), 3);
    }

    #[test]
    fn test_failures_and_empty_answers_are_retried() {
        let (mut game, _) = controller(vec![
            Err(OracleError::Service("native call failed".into())),
            Ok(None),
            Ok(Some((2, 2))),
        ]);
        game.apply_human_move(Pos::new(7, 7)).unwrap();

        assert!(matches!(
            wait_event(&mut game),
            ControllerEvent::OracleRetry {
                reason: InvalidResponse::Failed(_),
                ..
            }
        ));
        assert!(matches!(
            wait_event(&mut game),
            ControllerEvent::OracleRetry {
                reason: InvalidResponse::NoMove,
                ..
            }
        ));
        assert_eq!(game.retries(), 2);
        assert!(matches!(wait_event(&mut game), ControllerEvent::OracleMoved { .. }));
        assert_eq!(game.board().get(Pos::new(2, 2)), Stone::Black);
    }

    #[test]
    fn test_undo_returns_to_empty_board() {
        let (mut game, _) = controller(vec![Ok(Some((3, 3)))]);
        game.apply_human_move(Pos::new(7, 7)).unwrap();
        wait_event(&mut game);

        let undone = game.undo().unwrap();
        assert_eq!(
            undone,
            vec![
                Move::new(Pos::new(3, 3), Stone::Black),
                Move::new(Pos::new(7, 7), Stone::White),
            ]
        );
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.turn(), Stone::White);
        assert_eq!(game.history().len(), 0);
        assert_eq!(game.last_move(), None);
        assert_eq!(game.phase(), Phase::AwaitingHuman);
    }

    #[test]
    fn test_undo_restores_previous_position() {
        let (mut game, _) = controller(vec![Ok(Some((0, 0))), Ok(Some((0, 1)))]);
        game.apply_human_move(Pos::new(7, 7)).unwrap();
        wait_event(&mut game);
        let board_before = game.board().clone();

        game.apply_human_move(Pos::new(8, 8)).unwrap();
        wait_event(&mut game);
        game.undo().unwrap();

        assert_eq!(game.board(), &board_before);
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.turn(), Stone::White);
        assert_eq!(game.last_move(), Some(Pos::new(0, 0)));
    }

    #[test]
    fn test_undo_with_empty_history() {
        let (mut game, _) = controller(vec![]);
        assert_eq!(game.undo(), Err(GameError::HistoryEmpty));
        assert_eq!(game.phase(), Phase::AwaitingHuman);
        assert_eq!(game.turn(), Stone::White);
    }

    #[test]
    fn test_human_five_ends_game() {
        let answers = (0..4).map(|c| Ok(Some((0, c)))).collect();
        let (mut game, oracle) = controller(answers);
        for c in 0..4 {
            game.apply_human_move(Pos::new(7, c)).unwrap();
            wait_event(&mut game);
        }
        let phase = game.apply_human_move(Pos::new(7, 4)).unwrap();

        assert_eq!(
            phase,
            Phase::GameOver {
                winner: Some(Stone::White)
            }
        );
        assert_eq!(game.winning_line().map(|l| l.len()), Some(5));
        assert_eq!(oracle.calls(), 4);
        assert!(game.update().is_none());
        assert_eq!(game.apply_human_move(Pos::new(9, 9)), Err(GameError::GameOver));
        assert_eq!(game.undo(), Err(GameError::GameOver));
    }

    #[test]
    fn test_oracle_five_ends_game() {
        let answers = (0..5).map(|c| Ok(Some((14, c)))).collect();
        let (mut game, _) = controller(answers);
        let human = [(0, 0), (2, 5), (4, 10), (6, 1), (8, 6)];
        let mut last = None;
        for (r, c) in human {
            game.apply_human_move(Pos::new(r, c)).unwrap();
            last = Some(wait_event(&mut game));
        }
        assert_eq!(
            last,
            Some(ControllerEvent::OracleMoved {
                mv: Move::new(Pos::new(14, 4), Stone::Black),
                phase: Phase::GameOver {
                    winner: Some(Stone::Black)
                },
            })
        );
        assert!(game.phase().is_game_over());
    }

    #[test]
    fn test_notation_input() {
        let (mut game, _) = controller(vec![Ok(Some((0, 0)))]);
        assert_eq!(
            game.apply_human_notation("Q3"),
            Err(GameError::ParseFailure("Q3".into()))
        );
        assert!(game.history().is_empty());

        game.apply_human_notation("h8").unwrap();
        assert_eq!(game.board().get(Pos::new(7, 7)), Stone::White);
        wait_event(&mut game);
    }

    #[test]
    fn test_reset_abandons_pending_request() {
        let (mut game, _) = controller(vec![Ok(Some((1, 1)))]);
        game.apply_human_move(Pos::new(0, 0)).unwrap();
        game.reset();

        assert_eq!(game.phase(), Phase::AwaitingHuman);
        assert!(game.board().is_board_empty());
        thread::sleep(Duration::from_millis(20));
        assert!(game.update().is_none());
        assert!(game.board().is_board_empty());
    }

    #[test]
    fn test_failed_dispatch_takes_the_stone_back() {
        let (mut game, oracle) = controller(vec![Ok(Some((1, 1)))]);
        // Occupy the client so the human move cannot be handed over
        let stray = game.client.request(Board::new().snapshot()).unwrap();

        assert_eq!(game.apply_human_move(Pos::new(7, 7)), Err(GameError::OracleBusy));
        assert!(game.board().is_board_empty());
        assert!(game.history().is_empty());
        assert_eq!(game.turn(), Stone::White);
        assert_eq!(game.last_move(), None);
        assert_eq!(game.phase(), Phase::AwaitingHuman);

        let deadline = Instant::now() + Duration::from_secs(5);
        while !game.client.is_ready() {
            assert!(Instant::now() < deadline, "stray request never finished");
            thread::sleep(Duration::from_millis(1));
        }
        let (id, _, _) = game.client.take_result().unwrap();
        assert_eq!(id, stray);
        assert_eq!(oracle.calls(), 1);
    }

    #[test]
    fn test_retry_with_busy_client_keeps_a_request_live() {
        // Empty script: both the stale and the fresh request answer the first empty cell
        let (mut game, _) = controller(vec![]);
        game.board.place(Pos::new(0, 0), HUMAN).unwrap();
        game.history.record(Move::new(Pos::new(0, 0), HUMAN));
        game.turn = ORACLE;
        game.phase = Phase::AwaitingOracle;
        game.client.request(game.board.snapshot()).unwrap();

        let event = game.retry(RequestId(0), InvalidResponse::NoMove);
        assert!(matches!(event, Some(ControllerEvent::OracleRetry { .. })));
        assert!(game.client.is_pending());

        let event = wait_event(&mut game);
        assert!(matches!(event, ControllerEvent::OracleMoved { .. }));
        assert_eq!(game.board().get(Pos::new(0, 1)), Stone::Black);
        assert_eq!(game.phase(), Phase::AwaitingHuman);
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn test_full_board_without_five_is_a_draw() {
        let (mut game, oracle) = controller(vec![]);
        let last = Pos::new(14, 13);
        for idx in 0..crate::board::TOTAL_CELLS {
            let pos = Pos::from_index(idx);
            if pos == last {
                continue;
            }
            // Runs never exceed two in any direction
            let color = if (pos.col / 2 + pos.row) % 2 == 1 {
                Stone::Black
            } else {
                Stone::White
            };
            game.board.place(pos, color).unwrap();
            game.history.record(Move::new(pos, color));
        }

        let phase = game.apply_human_move(last).unwrap();
        assert_eq!(phase, Phase::GameOver { winner: None });
        assert!(game.board().is_full());
        assert!(game.winning_line().is_none());
        assert_eq!(oracle.calls(), 0);
        assert!(game.update().is_none());
        assert_eq!(game.undo(), Err(GameError::GameOver));
    }

    #[test]
    fn test_history_matches_stone_count() {
        let (mut game, _) = controller(vec![]);
        for (r, c) in [(7, 7), (8, 8), (9, 9)] {
            game.apply_human_move(Pos::new(r, c)).unwrap();
            wait_event(&mut game);
            assert_eq!(game.history().len(), game.board().stone_count() as usize);
        }
        game.undo().unwrap();
        assert_eq!(game.history().len(), game.board().stone_count() as usize);
    }
}
