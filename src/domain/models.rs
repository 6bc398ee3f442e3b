use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    White,
    Black,
}

impl Player {
    pub fn opponent(&self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub owner: Player,
}

impl Piece {
    pub fn new(kind: PieceKind, owner: Player) -> Self {
        Piece { kind, owner }
    }
}

/// A board cell. `row` 0 is the far rank (black's back rank in the start
/// position), `col` 0 is the leftmost file; both in [0, 8).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub const fn new(row: u8, col: u8) -> Self {
        Square { row, col }
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Both the engine-produced candidate and the request submitted back to the
/// engine. `promotion` is `Some` on promoting moves; the resolver fixes the
/// concrete piece before a request is submitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Piece>,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    pub fn promoting(from: Square, to: Square, promotion: Piece) -> Self {
        Move {
            from,
            to,
            promotion: Some(promotion),
        }
    }
}

/// The two-phase click gesture. `candidates` is exactly the legal moves
/// whose origin equals `square`; it never outlives the gesture that
/// created it.
#[derive(Clone, Debug, PartialEq)]
pub enum SelectionState {
    Idle,
    Selected {
        square: Square,
        candidates: SmallVec<[Move; 8]>,
    },
}

impl SelectionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, SelectionState::Idle)
    }

    pub fn selected_square(&self) -> Option<Square> {
        match self {
            SelectionState::Idle => None,
            SelectionState::Selected { square, .. } => Some(*square),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminalReason {
    WhiteWinsMate,
    BlackWinsMate,
    DrawStalemate,
    DrawInsufficientMaterial,
}

impl TerminalReason {
    /// Fixed overlay text per reason.
    pub fn banner(&self) -> &'static str {
        match self {
            TerminalReason::WhiteWinsMate => "Checkmate! White wins",
            TerminalReason::BlackWinsMate => "Checkmate! Black wins",
            TerminalReason::DrawStalemate => "Draw by stalemate",
            TerminalReason::DrawInsufficientMaterial => "Draw by insufficient material",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Active,
    Terminal(TerminalReason),
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::Terminal(_))
    }
}
