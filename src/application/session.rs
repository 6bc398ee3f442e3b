use crate::application::ledger::CaptureLedger;
use crate::application::resolver::resolve_destination;
use crate::application::status::StatusMonitor;
use crate::domain::models::{GameStatus, SelectionState, Square};
use crate::domain::services::{EngineError, RulesEngine};
use smallvec::SmallVec;
use tracing::{debug, info};

/// What a processed click amounted to. `Reset` is only ever produced by the
/// interface layer's reset control, never by a board click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    PieceSelected,
    MoveCommitted,
    Deselected,
    Ignored,
    Reset,
}

/// The session aggregate: one game's engine instance, selection gesture,
/// capture ledger and status latch, owned by the frame loop. Reset replaces
/// the whole value; no field is ever rolled back individually.
pub struct Session<E: RulesEngine> {
    engine: E,
    selection: SelectionState,
    ledger: CaptureLedger,
    monitor: StatusMonitor,
}

impl<E: RulesEngine> Session<E> {
    pub fn new(engine: E) -> Self {
        Session {
            engine,
            selection: SelectionState::Idle,
            ledger: CaptureLedger::new(),
            monitor: StatusMonitor::new(),
        }
    }

    pub fn start() -> Self {
        Session::new(E::new_game())
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn ledger(&self) -> &CaptureLedger {
        &self.ledger
    }

    pub fn status(&self) -> GameStatus {
        self.monitor.status()
    }

    /// Once-per-frame status poll. After the latch flips, the engine is not
    /// queried again until reset.
    pub fn poll_status(&mut self) {
        if self.monitor.is_terminal() {
            return;
        }
        self.monitor.observe(self.engine.status());
    }

    /// Advance the two-phase gesture with a resolved board cell.
    ///
    /// The current selection is taken out of the session up front, so every
    /// path that does not re-select leaves the gesture discarded, including
    /// the error path when the engine rejects a request it produced itself.
    pub fn handle_click(&mut self, square: Square) -> Result<ClickOutcome, EngineError> {
        if self.monitor.is_terminal() {
            return Ok(ClickOutcome::Ignored);
        }

        match std::mem::replace(&mut self.selection, SelectionState::Idle) {
            SelectionState::Idle => Ok(self.try_select(square)),
            SelectionState::Selected { candidates, .. } => {
                let mover = self.engine.side_to_move();
                match resolve_destination(square, &candidates, mover) {
                    None => Ok(ClickOutcome::Deselected),
                    Some(request) => {
                        let before = self.engine.snapshot();
                        self.engine.apply_move(&request)?;
                        let captured = self.ledger.record(&before, &request, mover);
                        debug!(
                            from = ?request.from,
                            to = ?request.to,
                            ?captured,
                            "move committed"
                        );
                        Ok(ClickOutcome::MoveCommitted)
                    }
                }
            }
        }
    }

    /// Discard everything and rebuild from a fresh engine: empty ledgers,
    /// idle selection, active status. One atomic replacement.
    pub fn reset(&mut self) {
        *self = Session::start();
        info!("session reset to a fresh game");
    }

    fn try_select(&mut self, square: Square) -> ClickOutcome {
        let mover = self.engine.side_to_move();
        let friendly = self
            .engine
            .snapshot()
            .piece_at(square)
            .is_some_and(|piece| piece.owner == mover);
        if !friendly {
            return ClickOutcome::Ignored;
        }

        // A friendly piece with nothing to do still gets selected; the
        // empty candidate list just means no highlights.
        let candidates: SmallVec<[_; 8]> = self
            .engine
            .legal_moves()
            .into_iter()
            .filter(|candidate| candidate.from == square)
            .collect();
        debug!(?square, count = candidates.len(), "piece selected");
        self.selection = SelectionState::Selected { square, candidates };
        ClickOutcome::PieceSelected
    }
}
