use crate::domain::models::{Piece, PieceKind, Player};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The rule engine's wire encoding of a piece: sign is the color (positive
/// white, negative black, zero empty), magnitude 1 through 6 is pawn
/// through king.
/// The raw arithmetic stays inside this module; everything above the facade
/// edge branches on the decoded `Piece`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PieceCode(i8);

impl PieceCode {
    pub const EMPTY: PieceCode = PieceCode(0);

    /// Accepts only codes the engine can produce: 0 or ±1..=±6.
    pub fn from_raw(raw: i8) -> Option<PieceCode> {
        match raw {
            0 | 1..=6 | -6..=-1 => Some(PieceCode(raw)),
            _ => None,
        }
    }

    pub fn raw(self) -> i8 {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn decode(self) -> Option<Piece> {
        let kind = match self.0.unsigned_abs() {
            1 => PieceKind::Pawn,
            2 => PieceKind::Knight,
            3 => PieceKind::Bishop,
            4 => PieceKind::Rook,
            5 => PieceKind::Queen,
            6 => PieceKind::King,
            _ => return None,
        };
        let owner = if self.0 > 0 { Player::White } else { Player::Black };
        Some(Piece { kind, owner })
    }

    /// Display letter for the text view: upper-case white, lower-case
    /// black, space for an empty cell.
    pub fn glyph(self) -> char {
        let letter = match self.decode() {
            None => return ' ',
            Some(piece) => match piece.kind {
                PieceKind::Pawn => 'p',
                PieceKind::Knight => 'n',
                PieceKind::Bishop => 'b',
                PieceKind::Rook => 'r',
                PieceKind::Queen => 'q',
                PieceKind::King => 'k',
            },
        };
        if self.0 > 0 {
            letter.to_ascii_uppercase()
        } else {
            letter
        }
    }
}

impl Piece {
    pub fn code(self) -> PieceCode {
        let magnitude = match self.kind {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 2,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 4,
            PieceKind::Queen => 5,
            PieceKind::King => 6,
        };
        match self.owner {
            Player::White => PieceCode(magnitude),
            Player::Black => PieceCode(-magnitude),
        }
    }
}

impl fmt::Debug for PieceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.decode() {
            None => write!(f, ".."),
            Some(piece) => {
                let side = match piece.owner {
                    Player::White => 'w',
                    Player::Black => 'b',
                };
                write!(f, "{}{}", side, self.glyph().to_ascii_uppercase())
            }
        }
    }
}
