#![allow(dead_code)]

use clickchess::domain::models::{GameStatus, Move, Piece, PieceKind, Player, Square};
use clickchess::domain::piece_code::PieceCode;
use clickchess::domain::services::{EngineError, RulesEngine};
use clickchess::domain::snapshot::BoardSnapshot;
use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Test double for the external rule engine: a poseable board, scripted
/// legal-move lists (one per ply) and a settable status. `apply_move`
/// mutates the board the way a real engine would (including removing an
/// en-passant victim), records the request, and advances to the next ply's
/// move list.
pub struct ScriptedEngine {
    board: BoardSnapshot,
    turn: Player,
    plies: VecDeque<Vec<Move>>,
    status: Rc<Cell<GameStatus>>,
    checked: Option<Player>,
    pub applied: Vec<Move>,
}

impl ScriptedEngine {
    pub fn empty() -> Self {
        ScriptedEngine {
            board: BoardSnapshot::empty(),
            turn: Player::White,
            plies: VecDeque::new(),
            status: Rc::new(Cell::new(GameStatus::Active)),
            checked: None,
            applied: Vec::new(),
        }
    }

    pub fn place(mut self, square: Square, piece: Piece) -> Self {
        let mut cells = *self.board.cells();
        cells[square.row as usize][square.col as usize] = piece.code();
        self.board = BoardSnapshot::from_cells(cells);
        self
    }

    pub fn turn(mut self, player: Player) -> Self {
        self.turn = player;
        self
    }

    /// Add a legal move to the current ply's list.
    pub fn allow(mut self, mv: Move) -> Self {
        if self.plies.is_empty() {
            self.plies.push_back(Vec::new());
        }
        self.plies.back_mut().unwrap().push(mv);
        self
    }

    /// Start scripting the next ply's legal-move list.
    pub fn next_ply(mut self) -> Self {
        self.plies.push_back(Vec::new());
        self
    }

    pub fn checked(mut self, side: Player) -> Self {
        self.checked = Some(side);
        self
    }

    pub fn with_status(self, status: GameStatus) -> Self {
        self.status.set(status);
        self
    }

    /// Shared handle the test keeps to flip the engine's status after the
    /// session has taken ownership of it.
    pub fn status_handle(&self) -> Rc<Cell<GameStatus>> {
        Rc::clone(&self.status)
    }

    pub fn board(&self) -> &BoardSnapshot {
        &self.board
    }
}

impl RulesEngine for ScriptedEngine {
    fn new_game() -> Self {
        ScriptedEngine {
            board: BoardSnapshot::standard_start(),
            ..ScriptedEngine::empty()
        }
    }

    fn snapshot(&self) -> BoardSnapshot {
        self.board.clone()
    }

    fn side_to_move(&self) -> Player {
        self.turn
    }

    fn in_check(&self, side: Player) -> bool {
        self.checked == Some(side)
    }

    fn legal_moves(&self) -> Vec<Move> {
        self.plies.front().cloned().unwrap_or_default()
    }

    fn apply_move(&mut self, mv: &Move) -> Result<(), EngineError> {
        let mut cells = *self.board.cells();
        let moving = cells[mv.from.row as usize][mv.from.col as usize];

        // En-passant shape: pawn changing file onto an empty square takes
        // the pawn beside its landing square.
        let dest_empty = cells[mv.to.row as usize][mv.to.col as usize].is_empty();
        let is_pawn = moving
            .decode()
            .is_some_and(|piece| piece.kind == PieceKind::Pawn);
        if dest_empty && is_pawn && mv.from.col != mv.to.col {
            cells[mv.from.row as usize][mv.to.col as usize] = PieceCode::EMPTY;
        }

        cells[mv.to.row as usize][mv.to.col as usize] = match mv.promotion {
            Some(promoted) => promoted.code(),
            None => moving,
        };
        cells[mv.from.row as usize][mv.from.col as usize] = PieceCode::EMPTY;

        self.board = BoardSnapshot::from_cells(cells);
        self.turn = self.turn.opponent();
        self.plies.pop_front();
        self.applied.push(*mv);
        Ok(())
    }

    fn status(&self) -> GameStatus {
        self.status.get()
    }
}

/// Route library tracing into the test harness output. Safe to call from
/// every test; only the first installation wins.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col)
}

pub fn mv(from: Square, to: Square) -> Move {
    Move::new(from, to)
}

pub fn white(kind: PieceKind) -> Piece {
    Piece::new(kind, Player::White)
}

pub fn black(kind: PieceKind) -> Piece {
    Piece::new(kind, Player::Black)
}
