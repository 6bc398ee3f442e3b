use crate::domain::models::{GameStatus, Player, Square};
use crate::domain::piece_code::PieceCode;
use crate::domain::snapshot::BoardSnapshot;
use crate::infrastructure::display;
use crate::infrastructure::input::Rect;
use serde::{Deserialize, Serialize};

/// Everything a renderer needs for one frame. Plain serializable data; the
/// controller rebuilds it every frame from the live session, so a renderer
/// never reaches into controller state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub board: BoardSnapshot,
    pub side_to_move: Player,
    /// Currently selected square, for the selection highlight.
    pub selected: Option<Square>,
    /// Candidate destinations of the selected piece, for the legal-move dots.
    pub move_targets: Vec<Square>,
    /// The checked king's square, when the side to move is in check.
    pub check_square: Option<Square>,
    pub captured_by_white: Vec<PieceCode>,
    pub captured_by_black: Vec<PieceCode>,
    pub status: GameStatus,
    /// Present only while the game is terminal.
    pub overlay: Option<Overlay>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Overlay {
    pub banner: String,
    /// Screen region of the reset control; pointer hits here restart the
    /// session.
    pub reset_control: Rect,
}

impl RenderFrame {
    /// Diagnostic text view of the frame.
    pub fn to_text(&self) -> String {
        display::render_text(
            &self.board,
            self.selected,
            &self.move_targets,
            &self.captured_by_white,
            &self.captured_by_black,
            self.status,
        )
    }
}
