//! Board rendering and click mapping for the Gomoku GUI
//!
//! Row 1 is drawn at the bottom so the labels read the same as move notation.

use crate::{Board, Pos, Stone, BOARD_SIZE, COLUMNS};
use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::{accent, hover, stone_paint, wood, HOSHI, HOSHI_RADIUS, LAST_MOVE, LINE_WIDTH, MARGIN, MARKER_RADIUS, STONE_SCALE};

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 36.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell, if any.
    ///
    /// Clicks are only reported when `accept_input` is set and the cell is empty.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        last_move: Option<Pos>,
        winning_line: Option<&[Pos]>,
        accept_input: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * MARGIN) / (BOARD_SIZE as f32 - 1.0);

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), wood::SURFACE);
        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        self.draw_coordinates(&painter);
        self.draw_stones(&painter, board);

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }
        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, line);
        }

        if !accept_input {
            return None;
        }

        let pointer_pos = response.hover_pos()?;
        let board_pos = self.screen_to_board(pointer_pos)?;
        let is_valid = board.is_empty(board_pos);
        let color = hover(is_valid);
        let center = self.board_to_screen(board_pos);
        painter.circle_filled(center, self.cell_size * STONE_SCALE, color);

        (response.clicked() && is_valid).then_some(board_pos)
    }

    /// Draw the 15x15 grid lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(LINE_WIDTH, wood::INK);
        let span = (BOARD_SIZE as f32 - 1.0) * self.cell_size;

        for i in 0..BOARD_SIZE {
            let offset = MARGIN + i as f32 * self.cell_size;

            let start = self.board_rect.min + Vec2::new(offset, MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, MARGIN + span);
            painter.line_segment([start, end], stroke);

            let start = self.board_rect.min + Vec2::new(MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    fn draw_star_points(&self, painter: &Painter) {
        for (row, col) in HOSHI {
            let center = self.board_to_screen(Pos::new(row, col));
            painter.circle_filled(center, HOSHI_RADIUS, wood::HOSHI);
        }
    }

    /// Column letters A-O, row numbers 1-15
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for (col, letter) in COLUMNS.chars().enumerate() {
            let x = self.board_to_screen(Pos::new(0, col as u8)).x;
            for y in [self.board_rect.min.y + 12.0, self.board_rect.max.y - 12.0] {
                painter.text(Pos2::new(x, y), egui::Align2::CENTER_CENTER, letter, font.clone(), wood::INK);
            }
        }

        for row in 0..BOARD_SIZE {
            let y = self.board_to_screen(Pos::new(row as u8, 0)).y;
            for x in [self.board_rect.min.x + 12.0, self.board_rect.max.x - 12.0] {
                painter.text(
                    Pos2::new(x, y),
                    egui::Align2::CENTER_CENTER,
                    format!("{}", row + 1),
                    font.clone(),
                    wood::INK,
                );
            }
        }
    }

    fn draw_stones(&self, painter: &Painter, board: &Board) {
        for idx in 0..BOARD_SIZE * BOARD_SIZE {
            let pos = Pos::from_index(idx);
            let stone = board.get(pos);
            if stone != Stone::Empty {
                self.draw_stone(painter, pos, stone);
            }
        }
    }

    /// Draw a single stone with shadow and shading
    fn draw_stone(&self, painter: &Painter, pos: Pos, stone: Stone) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_SCALE;
        let shadow_offset = Vec2::new(2.0, 2.0);

        let Some(paint) = stone_paint(stone) else {
            return;
        };
        painter.circle_filled(center + shadow_offset, radius, paint.shadow);
        painter.circle_filled(center, radius, paint.body);
        if stone == Stone::Black {
            let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
            painter.circle_filled(center + highlight_offset, radius * 0.2, paint.accent);
        } else {
            painter.circle_stroke(center, radius * 0.85, Stroke::new(radius * 0.1, paint.accent));
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, MARKER_RADIUS, LAST_MOVE);
    }

    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let stroke = Stroke::new(4.0, accent::VICTORY);

        for pair in line.windows(2) {
            let start = self.board_to_screen(pair[0]);
            let end = self.board_to_screen(pair[1]);
            painter.line_segment([start, end], stroke);
        }
        for pos in line {
            let radius = self.cell_size * STONE_SCALE + 3.0;
            painter.circle_stroke(self.board_to_screen(*pos), radius, stroke);
        }
    }

    /// Nearest intersection within half a cell of the pointer
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let x = (relative.x - MARGIN) / self.cell_size;
        let y = (relative.y - MARGIN) / self.cell_size;

        let col = x.round() as i32;
        let screen_row = y.round() as i32;
        let row = BOARD_SIZE as i32 - 1 - screen_row;

        Pos::is_valid(row, col).then(|| Pos::new(row as u8, col as u8))
    }

    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let screen_row = (BOARD_SIZE - 1 - pos.row as usize) as f32;
        let x = self.board_rect.min.x + MARGIN + pos.col as f32 * self.cell_size;
        let y = self.board_rect.min.y + MARGIN + screen_row * self.cell_size;
        Pos2::new(x, y)
    }
}
