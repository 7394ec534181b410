//! GUI module for the Gomoku game
//!
//! A native egui/eframe window that feeds clicks and key presses into the
//! [`GameController`](crate::controller::GameController) and polls it every frame.

mod app;
mod board_view;
mod theme;

pub use app::GomokuApp;
