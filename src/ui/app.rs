//! Main application for the Gomoku GUI

use std::sync::Arc;
use std::time::Duration;

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};
use tracing::debug;

use super::board_view::BoardView;
use super::theme::{self, accent, panel};
use crate::controller::{ControllerEvent, GameController, Phase, HUMAN};
use crate::oracle::Oracle;
use crate::Stone;

/// Moves listed in the history card
const HISTORY_ROWS: usize = 8;

/// Main Gomoku application
pub struct GomokuApp {
    controller: GameController,
    board_view: BoardView,
    message: Option<String>,
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, oracle: Arc<dyn Oracle>) -> Self {
        Self {
            controller: GameController::new(oracle),
            board_view: BoardView::default(),
            message: None,
        }
    }

    fn undo(&mut self) {
        self.message = match self.controller.undo() {
            Ok(_) => None,
            Err(err) => Some(err.to_string()),
        };
    }

    fn new_game(&mut self) {
        self.controller.reset();
        self.message = None;
    }

    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.new_game();
                        ui.close_menu();
                    }
                    if ui.button("Undo (Z)").clicked() {
                        self.undo();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("You: {}", HUMAN));
                });
            });
        });
    }

    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(panel::BACKDROP))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.label(RichText::new("GOMOKU").size(22.0).strong().color(panel::TEXT));
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);
                self.render_oracle_card(ui);
                ui.add_space(10.0);
                self.render_history_card(ui);
                ui.add_space(10.0);
                self.render_actions_card(ui);

                if let Phase::GameOver { winner } = self.controller.phase() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, winner);
                }

                if let Some(msg) = &self.message {
                    ui.add_space(10.0);
                    Self::card_frame().show(ui, |ui| {
                        ui.label(RichText::new(msg).size(11.0).color(accent::BUSY));
                    });
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(panel::CARD)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.controller.turn();
            let status = match self.controller.phase() {
                Phase::AwaitingHuman => ("Your turn", accent::CALM),
                Phase::AwaitingOracle => ("Oracle thinking...", accent::BUSY),
                Phase::GameOver { .. } => ("Game over", accent::VICTORY),
            };
            ui.horizontal(|ui| {
                ui.label(RichText::new(turn.symbol().to_string()).size(28.0).color(panel::TEXT));
                ui.add_space(8.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new(turn.to_string().to_uppercase()).size(18.0).strong().color(panel::TEXT));
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    fn render_oracle_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ORACLE").size(10.0).color(panel::FAINT));
            ui.add_space(6.0);

            if let Some(elapsed) = self.controller.oracle_elapsed() {
                ui.label(
                    RichText::new(format!("{:.2}s", elapsed.as_secs_f32()))
                        .size(24.0)
                        .strong()
                        .color(theme::clock(elapsed)),
                );
            } else if let Some(last) = self.controller.last_oracle_time() {
                ui.label(RichText::new(format!("Last move: {:.3}s", last.as_secs_f32())).size(12.0).color(panel::SUBTLE));
            } else {
                ui.label(RichText::new("Waiting for your move").size(12.0).color(panel::FAINT));
            }

            let retries = self.controller.retries();
            if retries > 0 {
                ui.label(RichText::new(format!("Retries: {}", retries)).size(11.0).color(accent::ALARM));
            }
        });
    }

    fn render_history_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let history = self.controller.history();
            ui.label(RichText::new(format!("MOVES ({})", history.len())).size(10.0).color(panel::FAINT));
            ui.add_space(6.0);

            let skip = history.len().saturating_sub(HISTORY_ROWS);
            for (i, mv) in history.iter().enumerate().skip(skip) {
                ui.label(
                    RichText::new(format!("{:3}. {} {}", i + 1, mv.color.symbol(), mv.pos))
                        .size(12.0)
                        .monospace()
                        .color(panel::SUBTLE),
                );
            }
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                let can_undo = self.controller.phase() == Phase::AwaitingHuman
                    && !self.controller.history().is_empty();
                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    self.undo();
                }
                if ui.button("New Game").clicked() {
                    self.new_game();
                }
            });
        });
    }

    fn render_game_over_card(&self, ui: &mut egui::Ui, winner: Option<Stone>) {
        let text = match winner {
            Some(stone) if stone == HUMAN => "You win!".to_string(),
            Some(stone) => format!("{} wins", stone),
            None => "Draw".to_string(),
        };
        Frame::new()
            .fill(panel::VERDICT)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(panel::SUBTLE));
                    ui.label(RichText::new(text).size(18.0).strong().color(accent::VICTORY));
                });
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let accept_input = self.controller.phase() == Phase::AwaitingHuman;
            let clicked = self.board_view.show(
                ui,
                self.controller.board(),
                self.controller.last_move(),
                self.controller.winning_line(),
                accept_input,
            );

            if let Some(pos) = clicked {
                match self.controller.apply_human_move(pos) {
                    Ok(_) => self.message = None,
                    Err(err) => {
                        // Rejected clicks change nothing
                        debug!(%err, %pos, "click ignored");
                    }
                }
            }
        });
    }

    fn handle_input(&mut self, ctx: &Context) {
        let (undo, new_game) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Z) || i.key_pressed(egui::Key::U),
                i.key_pressed(egui::Key::N),
            )
        });
        if undo {
            self.undo();
        }
        if new_game {
            self.new_game();
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        match self.controller.update() {
            Some(ControllerEvent::OracleRetry { reason, .. }) => {
                self.message = Some(format!("Oracle retry: {}", reason));
            }
            Some(ControllerEvent::OracleMoved { .. }) => self.message = None,
            None => {}
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep polling while the oracle works
        if self.controller.is_oracle_thinking() {
            ctx.request_repaint_after(Duration::from_millis(16));
        }
    }
}
