use crate::domain::models::{Move, Piece, PieceKind, Player, Square};

/// Match a destination click against the selected square's candidates.
///
/// At most one candidate can share a destination from a single origin.
/// `None` is the no-match case and is not an error; the caller deselects
/// without submitting anything. A matching candidate that promotes is
/// rewritten to carry the mover's queen. The color comes from the side to
/// move, never from the candidate's own promotion piece, so an engine
/// handing out a miscolored code cannot put the wrong queen on the board.
/// There is no underpromotion path.
pub fn resolve_destination(dest: Square, candidates: &[Move], mover: Player) -> Option<Move> {
    let matched = candidates.iter().find(|candidate| candidate.to == dest)?;
    let mut request = *matched;
    if request.promotion.is_some() {
        request.promotion = Some(Piece::new(PieceKind::Queen, mover));
    }
    Some(request)
}
