//! In-process oracle: shape-pattern evaluation with alpha-beta negamax
//!
//! Stands in for the native move service so the game is playable out of the
//! box. Scores come from a table of line shapes (open twos up to five) and the
//! search looks a few plies ahead over the most promising cells next to
//! existing stones.

use crate::board::{Board, Pos, Snapshot, Stone, BOARD_SIZE};
use crate::error::OracleError;
use crate::rules::check_win;

use super::Oracle;

/// Shape weights
pub struct ShapeScore;

impl ShapeScore {
    pub const FIVE: i32 = 1_000_000;
    pub const OPEN_FOUR: i32 = 50_000;
    pub const FOUR: i32 = 5_000;
    pub const OPEN_THREE: i32 = 5_000;
    pub const CLOSED_THREE: i32 = 500;
    pub const SPLIT_TWO: i32 = 200;
    pub const OPEN_TWO: i32 = 50;
}

/// Bound for alpha-beta windows
const INF: i32 = ShapeScore::FIVE * 2;

/// Neighbourhood scanned for candidate cells
const CANDIDATE_RADIUS: i32 = 2;

/// Cell seen from one side: 0 empty, 1 own stone, 2 opponent stone or edge
const EMPTY: u8 = 0;
const MINE: u8 = 1;
const BLOCKED: u8 = 2;

/// Line shapes matched against the start of a six-cell window
const SHAPES: [(i32, &[u8]); 15] = [
    (ShapeScore::OPEN_TWO, &[0, 1, 1, 0, 0]),
    (ShapeScore::OPEN_TWO, &[0, 0, 1, 1, 0]),
    (ShapeScore::SPLIT_TWO, &[1, 1, 0, 1, 0]),
    (ShapeScore::CLOSED_THREE, &[0, 0, 1, 1, 1]),
    (ShapeScore::CLOSED_THREE, &[1, 1, 1, 0, 0]),
    (ShapeScore::OPEN_THREE, &[0, 1, 1, 1, 0]),
    (ShapeScore::OPEN_THREE, &[0, 1, 0, 1, 1, 0]),
    (ShapeScore::OPEN_THREE, &[0, 1, 1, 0, 1, 0]),
    (ShapeScore::FOUR, &[1, 1, 1, 0, 1]),
    (ShapeScore::FOUR, &[1, 1, 0, 1, 1]),
    (ShapeScore::FOUR, &[1, 0, 1, 1, 1]),
    (ShapeScore::FOUR, &[1, 1, 1, 1, 0]),
    (ShapeScore::FOUR, &[0, 1, 1, 1, 1]),
    (ShapeScore::OPEN_FOUR, &[0, 1, 1, 1, 1, 0]),
    (ShapeScore::FIVE, &[1, 1, 1, 1, 1]),
];

const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Pattern-scoring negamax oracle playing a fixed color
#[derive(Debug, Clone)]
pub struct ShapeOracle {
    color: Stone,
    depth: u8,
    breadth: usize,
    attack: i32,
}

impl ShapeOracle {
    pub const DEFAULT_DEPTH: u8 = 3;
    pub const DEFAULT_BREADTH: usize = 12;
    pub const DEFAULT_ATTACK: i32 = 1;

    pub fn new(color: Stone) -> Self {
        Self::with_config(
            color,
            Self::DEFAULT_DEPTH,
            Self::DEFAULT_BREADTH,
            Self::DEFAULT_ATTACK,
        )
    }

    /// `depth` plies, `breadth` candidates per node, `attack` weight of own
    /// shapes against blocking the opponent's when ordering candidates
    pub fn with_config(color: Stone, depth: u8, breadth: usize, attack: i32) -> Self {
        Self {
            color,
            depth: depth.max(1),
            breadth: breadth.max(1),
            attack: attack.max(1),
        }
    }

    pub fn color(&self) -> Stone {
        self.color
    }

    /// Pick a move for `self.color` on `board`
    pub fn best_move(&self, board: &Board) -> Option<(Pos, i32)> {
        if board.is_board_empty() {
            let center = (BOARD_SIZE / 2) as u8;
            return Some((Pos::new(center, center), 0));
        }

        let mut board = board.clone();
        let mut alpha = -INF;
        let beta = INF;
        let mut best = None;

        for pos in self.candidates(&board, self.color) {
            let score = self.score_after(&mut board, pos, self.color, self.depth, alpha, beta);
            if best.is_none() || score > alpha {
                alpha = alpha.max(score);
                best = Some((pos, score));
            }
        }
        best
    }

    /// Play `pos` for `color`, search the reply, undo
    fn score_after(
        &self,
        board: &mut Board,
        pos: Pos,
        color: Stone,
        depth: u8,
        alpha: i32,
        beta: i32,
    ) -> i32 {
        if board.place(pos, color).is_err() {
            return -INF;
        }
        let score = if check_win(board, pos, color) {
            // Sooner wins score higher
            ShapeScore::FIVE + i32::from(depth)
        } else {
            -self.negamax(board, color.opponent(), depth - 1, -beta, -alpha)
        };
        board.clear(pos);
        score
    }

    fn negamax(&self, board: &mut Board, to_move: Stone, depth: u8, mut alpha: i32, beta: i32) -> i32 {
        if depth == 0 {
            return evaluate(board, to_move);
        }

        let moves = self.candidates(board, to_move);
        if moves.is_empty() {
            return evaluate(board, to_move);
        }

        let mut best = -INF;
        for pos in moves {
            let score = self.score_after(board, pos, to_move, depth, alpha, beta);
            best = best.max(score);
            alpha = alpha.max(score);
            if alpha >= beta {
                break;
            }
        }
        best
    }

    /// Empty cells near existing stones, best first, truncated to `breadth`
    fn candidates(&self, board: &Board, color: Stone) -> Vec<Pos> {
        let mut seen = [[false; BOARD_SIZE]; BOARD_SIZE];
        let mut scored = Vec::with_capacity(64);
        let mut scratch = board.clone();

        for stone in board
            .positions_of(Stone::Black)
            .chain(board.positions_of(Stone::White))
        {
            for dr in -CANDIDATE_RADIUS..=CANDIDATE_RADIUS {
                for dc in -CANDIDATE_RADIUS..=CANDIDATE_RADIUS {
                    let r = i32::from(stone.row) + dr;
                    let c = i32::from(stone.col) + dc;
                    if !Pos::is_valid(r, c) || seen[r as usize][c as usize] {
                        continue;
                    }
                    seen[r as usize][c as usize] = true;

                    let pos = Pos::new(r as u8, c as u8);
                    if !board.is_empty(pos) {
                        continue;
                    }
                    let gain = point_value(&mut scratch, pos, color);
                    let block = point_value(&mut scratch, pos, color.opponent());
                    scored.push((self.attack * gain + block, pos));
                }
            }
        }

        scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
        scored.truncate(self.breadth);
        scored.into_iter().map(|(_, pos)| pos).collect()
    }
}

impl Oracle for ShapeOracle {
    fn compute(
        &self,
        snapshot: &Snapshot,
        diagnostics: &mut dyn FnMut(&str),
    ) -> Result<Option<(i32, i32)>, OracleError> {
        if self.color == Stone::Empty {
            return Err(OracleError::Service("oracle has no color to play".to_string()));
        }
        let board = Board::from_snapshot(snapshot);
        diagnostics(&format!(
            "searching for {} over {} stones, depth {}",
            self.color,
            board.stone_count(),
            self.depth
        ));

        let choice = self.best_move(&board);
        match choice {
            Some((pos, score)) => {
                diagnostics(&format!("chose ({}, {}) score {}", pos.row, pos.col, score));
                Ok(Some((i32::from(pos.row), i32::from(pos.col))))
            }
            None => {
                diagnostics("no candidate moves");
                Ok(None)
            }
        }
    }
}

/// Side-relative cell code at (row, col)
#[inline]
fn cell(board: &Board, row: i32, col: i32, who: Stone) -> u8 {
    if !Pos::is_valid(row, col) {
        return BLOCKED;
    }
    match board.get(Pos::new(row as u8, col as u8)) {
        Stone::Empty => EMPTY,
        s if s == who => MINE,
        _ => BLOCKED,
    }
}

/// Best shape through `pos` along one direction for `who`
fn shape_at(board: &Board, pos: Pos, dr: i32, dc: i32, who: Stone) -> i32 {
    let mut best = 0;
    for offset in -5..=0 {
        let mut window = [BLOCKED; 6];
        for (i, slot) in window.iter_mut().enumerate() {
            let step = offset + i as i32;
            let (r, c) = (pos.row as i32 + step * dr, pos.col as i32 + step * dc);
            // Past the edge every remaining cell stays blocked
            if !Pos::is_valid(r, c) {
                break;
            }
            *slot = cell(board, r, c, who);
        }
        for &(score, shape) in SHAPES.iter() {
            if score > best && window[..shape.len()] == *shape {
                best = score;
            }
        }
    }
    best
}

/// Shape value `who` would gain by playing `pos`
fn point_value(board: &mut Board, pos: Pos, who: Stone) -> i32 {
    if board.place(pos, who).is_err() {
        return 0;
    }
    let value = DIRECTIONS
        .iter()
        .map(|&(dr, dc)| shape_at(board, pos, dr, dc, who))
        .sum();
    board.clear(pos);
    value
}

/// Static evaluation from `to_move`'s point of view. Symmetric:
/// `evaluate(b, Black) == -evaluate(b, White)`.
pub fn evaluate(board: &Board, to_move: Stone) -> i32 {
    side_total(board, to_move) - side_total(board, to_move.opponent())
}

fn side_total(board: &Board, who: Stone) -> i32 {
    board
        .positions_of(who)
        .map(|pos| {
            DIRECTIONS
                .iter()
                .map(|&(dr, dc)| shape_at(board, pos, dr, dc, who))
                .sum::<i32>()
        })
        .sum()
}
