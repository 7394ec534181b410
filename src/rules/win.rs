//! Five-in-a-row detection
//!
//! Only the stone just placed needs to be examined: a new line of five must
//! pass through it. Overlines (six or more) also win.

use crate::board::{Board, Pos, Stone};

/// Direction vectors for line checking (4 directions)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Stones needed in a row to win
pub const WIN_LENGTH: usize = 5;

/// Count contiguous `color` stones from `pos` stepping by (dr, dc), excluding `pos`
#[inline]
fn run_length(board: &Board, pos: Pos, color: Stone, dr: i32, dc: i32) -> usize {
    let mut count = 0;
    let mut r = pos.row as i32 + dr;
    let mut c = pos.col as i32 + dc;
    while Pos::is_valid(r, c) && board.get(Pos::new(r as u8, c as u8)) == color {
        count += 1;
        r += dr;
        c += dc;
    }
    count
}

/// Check whether the stone at `pos` completes five in a row for `color`.
///
/// Walks both ways along each axis, stopping at the edge or the first
/// non-matching cell.
pub fn check_win(board: &Board, pos: Pos, color: Stone) -> bool {
    if color == Stone::Empty {
        return false;
    }
    DIRECTIONS.iter().any(|&(dr, dc)| {
        1 + run_length(board, pos, color, dr, dc) + run_length(board, pos, color, -dr, -dc)
            >= WIN_LENGTH
    })
}

/// Full-board variant: scans every `color` stone. Same answer as
/// [`check_win`] applied to the stone that formed the line.
pub fn check_win_full(board: &Board, color: Stone) -> bool {
    if color == Stone::Empty {
        return false;
    }
    board.positions_of(color).any(|pos| check_win(board, pos, color))
}

/// The contiguous run through `pos` that wins, ordered from one end to the other
pub fn winning_line(board: &Board, pos: Pos, color: Stone) -> Option<Vec<Pos>> {
    if color == Stone::Empty || board.get(pos) != color {
        return None;
    }
    for &(dr, dc) in &DIRECTIONS {
        let back = run_length(board, pos, color, -dr, -dc) as i32;
        let forward = run_length(board, pos, color, dr, dc) as i32;
        if (1 + back + forward) as usize >= WIN_LENGTH {
            let line = (-back..=forward)
                .map(|i| {
                    Pos::new(
                        (pos.row as i32 + dr * i) as u8,
                        (pos.col as i32 + dc * i) as u8,
                    )
                })
                .collect();
            return Some(line);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place_all(board: &mut Board, cells: &[(u8, u8)], color: Stone) {
        for &(r, c) in cells {
            board.place(Pos::new(r, c), color).unwrap();
        }
    }

    #[test]
    fn test_five_in_row_horizontal() {
        let mut board = Board::new();
        for c in 0..4 {
            board.place(Pos::new(7, c), Stone::White).unwrap();
            assert!(!check_win(&board, Pos::new(7, c), Stone::White));
        }
        board.place(Pos::new(7, 4), Stone::White).unwrap();
        assert!(check_win(&board, Pos::new(7, 4), Stone::White));
    }

    #[test]
    fn test_five_in_row_vertical() {
        let mut board = Board::new();
        place_all(&mut board, &[(3, 9), (4, 9), (5, 9), (6, 9), (7, 9)], Stone::Black);
        assert!(check_win(&board, Pos::new(5, 9), Stone::Black));
    }

    #[test]
    fn test_five_in_row_diagonal() {
        let mut board = Board::new();
        place_all(&mut board, &[(0, 0), (1, 1), (2, 2), (3, 3)], Stone::Black);
        assert!(!check_win(&board, Pos::new(3, 3), Stone::Black));
        board.place(Pos::new(4, 4), Stone::Black).unwrap();
        assert!(check_win(&board, Pos::new(4, 4), Stone::Black));
    }

    #[test]
    fn test_diagonal_sw_five() {
        let mut board = Board::new();
        place_all(&mut board, &[(2, 12), (3, 11), (4, 10), (5, 9), (6, 8)], Stone::White);
        assert!(check_win(&board, Pos::new(4, 10), Stone::White));
    }

    #[test]
    fn test_six_in_row_also_wins() {
        let mut board = Board::new();
        place_all(&mut board, &[(10, 2), (10, 3), (10, 4), (10, 6), (10, 7)], Stone::Black);
        board.place(Pos::new(10, 5), Stone::Black).unwrap();
        assert!(check_win(&board, Pos::new(10, 5), Stone::Black));
    }

    #[test]
    fn test_four_in_row_not_win() {
        let mut board = Board::new();
        place_all(&mut board, &[(0, 0), (0, 1), (0, 2), (0, 3)], Stone::White);
        assert!(!check_win(&board, Pos::new(0, 3), Stone::White));
        assert!(!check_win_full(&board, Stone::White));
    }

    #[test]
    fn test_broken_line_not_win() {
        let mut board = Board::new();
        place_all(&mut board, &[(5, 0), (5, 1), (5, 3), (5, 4)], Stone::White);
        board.place(Pos::new(5, 2), Stone::Black).unwrap();
        assert!(!check_win(&board, Pos::new(5, 4), Stone::White));
    }

    #[test]
    fn test_opponent_stones_do_not_count() {
        let mut board = Board::new();
        place_all(&mut board, &[(8, 0), (8, 1), (8, 2)], Stone::White);
        place_all(&mut board, &[(8, 3), (8, 4)], Stone::Black);
        assert!(!check_win(&board, Pos::new(8, 2), Stone::White));
        assert!(!check_win(&board, Pos::new(8, 4), Stone::Black));
    }

    #[test]
    fn test_five_at_corner() {
        let mut board = Board::new();
        place_all(&mut board, &[(14, 10), (14, 11), (14, 12), (14, 13), (14, 14)], Stone::Black);
        assert!(check_win(&board, Pos::new(14, 14), Stone::Black));
        assert!(check_win_full(&board, Stone::Black));
        assert!(!check_win_full(&board, Stone::White));
    }

    #[test]
    fn test_full_scan_agrees_with_local_check() {
        let mut board = Board::new();
        let line = [(1, 13), (2, 12), (3, 11), (4, 10)];
        place_all(&mut board, &line, Stone::White);
        assert_eq!(
            check_win_full(&board, Stone::White),
            check_win(&board, Pos::new(4, 10), Stone::White)
        );
        board.place(Pos::new(5, 9), Stone::White).unwrap();
        assert!(check_win(&board, Pos::new(5, 9), Stone::White));
        assert!(check_win_full(&board, Stone::White));
    }

    #[test]
    fn test_empty_color_never_wins() {
        let board = Board::new();
        assert!(!check_win(&board, Pos::new(7, 7), Stone::Empty));
        assert!(!check_win_full(&board, Stone::Empty));
    }

    #[test]
    fn test_winning_line_positions() {
        let mut board = Board::new();
        place_all(&mut board, &[(6, 6), (7, 7), (8, 8), (9, 9), (10, 10), (11, 11)], Stone::Black);
        let line = winning_line(&board, Pos::new(8, 8), Stone::Black).unwrap();
        assert_eq!(line.len(), 6);
        assert_eq!(line[0], Pos::new(6, 6));
        assert_eq!(line[5], Pos::new(11, 11));
        assert!(winning_line(&board, Pos::new(0, 0), Stone::Black).is_none());
    }
}
