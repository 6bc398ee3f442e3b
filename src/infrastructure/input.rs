use crate::config::SurfaceConfig;
use crate::domain::models::Square;
use crate::domain::snapshot::BOARD_SIDE;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Pixel geometry of the 8x8 board region. Pure data; the translation from
/// pointer coordinates to cells is stateless and side-effect free.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardGeometry {
    pub origin_x: f32,
    pub origin_y: f32,
    pub square_size: f32,
}

impl BoardGeometry {
    pub fn new(origin_x: f32, origin_y: f32, square_size: f32) -> Self {
        BoardGeometry {
            origin_x,
            origin_y,
            square_size,
        }
    }

    pub fn extent(&self) -> f32 {
        self.square_size * BOARD_SIDE as f32
    }

    /// Pointer coordinate to board cell; `None` for anything beyond the
    /// board's pixel extent (the capture panel, window borders).
    pub fn square_at(&self, x: f32, y: f32) -> Option<Square> {
        let rel_x = x - self.origin_x;
        let rel_y = y - self.origin_y;
        if rel_x < 0.0 || rel_y < 0.0 || rel_x >= self.extent() || rel_y >= self.extent() {
            return None;
        }
        let col = (rel_x / self.square_size) as u8;
        let row = (rel_y / self.square_size) as u8;
        Some(Square::new(row, col))
    }

    /// Inverse mapping for the renderer.
    pub fn square_rect(&self, square: Square) -> Rect {
        Rect::new(
            self.origin_x + square.col as f32 * self.square_size,
            self.origin_y + square.row as f32 * self.square_size,
            self.square_size,
            self.square_size,
        )
    }
}

/// The fixed-size canvas split: board region, capture panel to its right,
/// and the reset control rectangle, which is live only while the game
/// status is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurfaceLayout {
    pub board: BoardGeometry,
    pub capture_panel: Rect,
    pub reset_control: Rect,
}

const RESET_CONTROL_WIDTH: f32 = 192.0;
const RESET_CONTROL_HEIGHT: f32 = 48.0;

impl SurfaceLayout {
    pub fn from_config(config: &SurfaceConfig) -> Self {
        let board = BoardGeometry::new(
            config.board_origin_x,
            config.board_origin_y,
            config.square_size,
        );
        let capture_panel = Rect::new(
            board.origin_x + board.extent(),
            board.origin_y,
            config.panel_width,
            board.extent(),
        );
        // Centered over the board, where the terminal overlay draws it.
        let reset_control = Rect::new(
            board.origin_x + (board.extent() - RESET_CONTROL_WIDTH) / 2.0,
            board.origin_y + (board.extent() - RESET_CONTROL_HEIGHT) / 2.0,
            RESET_CONTROL_WIDTH,
            RESET_CONTROL_HEIGHT,
        );
        SurfaceLayout {
            board,
            capture_panel,
            reset_control,
        }
    }
}
