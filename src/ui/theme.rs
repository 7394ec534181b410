//! Colors and geometry for the GUI

use std::time::Duration;

use egui::Color32;

use crate::board::Stone;

/// Kaya board surface and its markings
pub mod wood {
    use egui::Color32;

    pub const SURFACE: Color32 = Color32::from_rgb(214, 176, 120);
    pub const INK: Color32 = Color32::from_rgb(54, 38, 22);
    pub const HOSHI: Color32 = Color32::from_rgb(44, 30, 18);
}

/// Side panel
pub mod panel {
    use egui::Color32;

    pub const BACKDROP: Color32 = Color32::from_rgb(22, 24, 29);
    pub const CARD: Color32 = Color32::from_rgb(33, 36, 42);
    pub const VERDICT: Color32 = Color32::from_rgb(40, 74, 52);
    pub const TEXT: Color32 = Color32::from_rgb(236, 238, 242);
    pub const SUBTLE: Color32 = Color32::from_rgb(156, 162, 172);
    pub const FAINT: Color32 = Color32::from_rgb(112, 118, 130);
}

/// Status accents shared by panel and board
pub mod accent {
    use egui::Color32;

    pub const CALM: Color32 = Color32::from_rgb(86, 196, 128);
    pub const BUSY: Color32 = Color32::from_rgb(242, 176, 58);
    pub const ALARM: Color32 = Color32::from_rgb(236, 78, 72);
    pub const VICTORY: Color32 = Color32::from_rgb(64, 212, 96);
}

// Geometry, in points
pub const MARGIN: f32 = 36.0;
pub const STONE_SCALE: f32 = 0.45;
pub const HOSHI_RADIUS: f32 = 3.5;
pub const LINE_WIDTH: f32 = 1.0;
pub const MARKER_RADIUS: f32 = 4.5;

/// Handicap points on a 15x15 board as (row, col)
pub const HOSHI: [(u8, u8); 5] = [(3, 3), (3, 11), (7, 7), (11, 3), (11, 11)];

/// How a stone is painted: a body, a small accent and a drop shadow
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StonePaint {
    pub body: Color32,
    /// Specular dot on black, inner ring on white
    pub accent: Color32,
    pub shadow: Color32,
}

pub fn stone_paint(stone: Stone) -> Option<StonePaint> {
    match stone {
        Stone::Black => Some(StonePaint {
            body: Color32::from_rgb(22, 23, 28),
            accent: Color32::from_rgb(76, 78, 88),
            shadow: Color32::from_black_alpha(64),
        }),
        Stone::White => Some(StonePaint {
            body: Color32::from_rgb(248, 248, 244),
            accent: Color32::from_rgb(196, 194, 188),
            shadow: Color32::from_black_alpha(40),
        }),
        Stone::Empty => None,
    }
}

/// Ghost stone under the pointer
pub fn hover(placeable: bool) -> Color32 {
    if placeable {
        Color32::from_rgba_unmultiplied(236, 236, 236, 84)
    } else {
        Color32::from_rgba_unmultiplied(236, 78, 72, 96)
    }
}

/// Oracle clock color: calm under a second, busy under three
pub fn clock(elapsed: Duration) -> Color32 {
    match elapsed.as_millis() {
        0..=999 => accent::CALM,
        1000..=2999 => accent::BUSY,
        _ => accent::ALARM,
    }
}

pub const LAST_MOVE: Color32 = accent::ALARM;
