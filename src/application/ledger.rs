use crate::domain::models::{Move, Piece, PieceKind, Player};
use crate::domain::piece_code::PieceCode;
use crate::domain::snapshot::BoardSnapshot;

/// Per-side capture history, derived from committed moves. A side's list
/// holds the pieces it has taken from the opponent, kept sorted ascending
/// by code after every append. Display data only; nothing reads it back
/// into legality or status checks. Entries are never removed; a full
/// session reset replaces the whole ledger.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CaptureLedger {
    taken_by_white: Vec<PieceCode>,
    taken_by_black: Vec<PieceCode>,
}

impl CaptureLedger {
    pub fn new() -> Self {
        CaptureLedger::default()
    }

    pub fn taken_by(&self, side: Player) -> &[PieceCode] {
        match side {
            Player::White => &self.taken_by_white,
            Player::Black => &self.taken_by_black,
        }
    }

    /// Record the capture (if any) of a committed move. `before` must be
    /// the snapshot taken before the move was applied to the engine.
    ///
    /// Determination order: a non-empty destination is a direct capture of
    /// its occupant; failing that, a pawn whose file changed captured en
    /// passant, and the victim is an inferred pawn of the opposite color.
    /// The actual victim square is not inspected. At most one case fires.
    pub fn record(&mut self, before: &BoardSnapshot, mv: &Move, mover: Player) -> Option<PieceCode> {
        let captured = match before.piece_at(mv.to) {
            Some(occupant) => Some(occupant.code()),
            None => match before.piece_at(mv.from) {
                Some(piece) if piece.kind == PieceKind::Pawn && mv.from.col != mv.to.col => {
                    Some(Piece::new(PieceKind::Pawn, mover.opponent()).code())
                }
                _ => None,
            },
        }?;

        let list = match mover {
            Player::White => &mut self.taken_by_white,
            Player::Black => &mut self.taken_by_black,
        };
        list.push(captured);
        list.sort();
        Some(captured)
    }
}
