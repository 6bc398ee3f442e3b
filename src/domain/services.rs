use crate::domain::models::{GameStatus, Move, Player};
use crate::domain::snapshot::BoardSnapshot;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine refused a request. Requests are only ever built from the
    /// engine's own legal-move list, so seeing this means the engine and
    /// controller disagree about the position.
    #[error("engine rejected move: {0}")]
    RejectedMove(String),
}

/// The facade over the external rule engine. The controller consumes this
/// capability set and nothing more; board representation, legality and
/// terminal detection all live behind it.
pub trait RulesEngine {
    /// A fresh engine at the start position. Reset constructs the whole
    /// session from this.
    fn new_game() -> Self
    where
        Self: Sized;

    fn snapshot(&self) -> BoardSnapshot;

    fn side_to_move(&self) -> Player;

    fn in_check(&self, side: Player) -> bool;

    /// All legal moves for the side to move, in engine order.
    fn legal_moves(&self) -> Vec<Move>;

    fn apply_move(&mut self, mv: &Move) -> Result<(), EngineError>;

    fn status(&self) -> GameStatus;
}
