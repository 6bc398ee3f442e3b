use crate::domain::models::{Piece, PieceKind, Player, Square};
use crate::domain::piece_code::PieceCode;
use serde::{Deserialize, Serialize};

pub const BOARD_SIDE: usize = 8;

/// A read-only copy of the engine's board, fetched fresh each frame.
/// Row-major, row 0 = far rank. The controller never mutates it.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct BoardSnapshot {
    cells: [[PieceCode; BOARD_SIDE]; BOARD_SIDE],
}

impl BoardSnapshot {
    pub fn empty() -> Self {
        BoardSnapshot {
            cells: [[PieceCode::EMPTY; BOARD_SIDE]; BOARD_SIDE],
        }
    }

    pub fn from_cells(cells: [[PieceCode; BOARD_SIDE]; BOARD_SIDE]) -> Self {
        BoardSnapshot { cells }
    }

    /// The standard chess start position, far rank black.
    pub fn standard_start() -> Self {
        use PieceKind::*;
        let back = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];
        let mut cells = [[PieceCode::EMPTY; BOARD_SIDE]; BOARD_SIDE];
        for (col, kind) in back.into_iter().enumerate() {
            cells[0][col] = Piece::new(kind, Player::Black).code();
            cells[7][col] = Piece::new(kind, Player::White).code();
        }
        for col in 0..BOARD_SIDE {
            cells[1][col] = Piece::new(Pawn, Player::Black).code();
            cells[6][col] = Piece::new(Pawn, Player::White).code();
        }
        BoardSnapshot { cells }
    }

    pub fn code_at(&self, square: Square) -> PieceCode {
        self.cells[square.row as usize][square.col as usize]
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.code_at(square).decode()
    }

    /// Scan for `side`'s king. O(64), run at most once per frame for the
    /// check highlight.
    pub fn king_square(&self, side: Player) -> Option<Square> {
        let king = Piece::new(PieceKind::King, side).code();
        for row in 0..BOARD_SIDE {
            for col in 0..BOARD_SIDE {
                if self.cells[row][col] == king {
                    return Some(Square::new(row as u8, col as u8));
                }
            }
        }
        None
    }

    pub fn cells(&self) -> &[[PieceCode; BOARD_SIDE]; BOARD_SIDE] {
        &self.cells
    }
}
