use crate::application::session::{ClickOutcome, Session};
use crate::config::{AppConfig, ConfigError};
use crate::domain::models::{GameStatus, Player, SelectionState};
use crate::domain::services::{EngineError, RulesEngine};
use crate::infrastructure::assets::{AssetError, SpriteManifest};
use crate::infrastructure::input::SurfaceLayout;
use crate::interface::frame::{Overlay, RenderFrame};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Assets(#[from] AssetError),
}

/// Everything the embedder needs after a successful startup. Any error from
/// `bootstrap` is fatal: the embedder reports it and exits before the frame
/// loop starts; there is no degraded run.
pub struct Bootstrap<E: RulesEngine> {
    pub controller: BoardController<E>,
    pub sprites: SpriteManifest,
    pub config: AppConfig,
}

/// One-time synchronous startup: configuration, sprite manifest, surface
/// layout, fresh session.
pub fn bootstrap<E: RulesEngine>() -> Result<Bootstrap<E>, StartupError> {
    let config = AppConfig::load()?;
    let sprites = SpriteManifest::discover(&config.assets.dir)?;
    let controller = BoardController::new(SurfaceLayout::from_config(&config.surface));
    Ok(Bootstrap {
        controller,
        sprites,
        config,
    })
}

/// The surface-facing side of the controller: owns the session and the
/// surface layout, translates raw pointer coordinates, and builds the
/// per-frame render data. Single-threaded by construction; the frame loop
/// owns it exclusively.
pub struct BoardController<E: RulesEngine> {
    session: Session<E>,
    layout: SurfaceLayout,
}

impl<E: RulesEngine> BoardController<E> {
    pub fn new(layout: SurfaceLayout) -> Self {
        BoardController {
            session: Session::start(),
            layout,
        }
    }

    /// Posed session, for tests and embedders restoring a layout change.
    pub fn from_parts(session: Session<E>, layout: SurfaceLayout) -> Self {
        BoardController { session, layout }
    }

    pub fn session(&self) -> &Session<E> {
        &self.session
    }

    pub fn layout(&self) -> &SurfaceLayout {
        &self.layout
    }

    /// Frame pass, step one: poll the engine's terminal status. Pointer
    /// events are dispatched after this, in arrival order.
    pub fn begin_frame(&mut self) {
        self.session.poll_status();
    }

    /// Dispatch one pointer event. While the game is terminal the board is
    /// frozen and only the reset control is live; otherwise the coordinate
    /// is translated to a cell and fed to the selection gesture. Clicks
    /// that land nowhere useful are absorbed, never errors.
    pub fn handle_pointer(&mut self, x: f32, y: f32) -> Result<ClickOutcome, EngineError> {
        if self.session.status().is_terminal() {
            if self.layout.reset_control.contains(x, y) {
                self.session.reset();
                return Ok(ClickOutcome::Reset);
            }
            debug!(x, y, "pointer ignored while terminal");
            return Ok(ClickOutcome::Ignored);
        }

        match self.layout.board.square_at(x, y) {
            Some(square) => self.session.handle_click(square),
            None => Ok(ClickOutcome::Ignored),
        }
    }

    /// Build the render data for the current frame.
    pub fn frame(&self) -> RenderFrame {
        let engine = self.session.engine();
        let board = engine.snapshot();
        let side_to_move = engine.side_to_move();

        let check_square = if engine.in_check(side_to_move) {
            board.king_square(side_to_move)
        } else {
            None
        };

        let (selected, move_targets) = match self.session.selection() {
            SelectionState::Idle => (None, Vec::new()),
            SelectionState::Selected { square, candidates } => (
                Some(*square),
                candidates.iter().map(|candidate| candidate.to).collect(),
            ),
        };

        let status = self.session.status();
        let overlay = match status {
            GameStatus::Active => None,
            GameStatus::Terminal(reason) => Some(Overlay {
                banner: reason.banner().to_string(),
                reset_control: self.layout.reset_control,
            }),
        };

        let ledger = self.session.ledger();
        RenderFrame {
            board,
            side_to_move,
            selected,
            move_targets,
            check_square,
            captured_by_white: ledger.taken_by(Player::White).to_vec(),
            captured_by_black: ledger.taken_by(Player::Black).to_vec(),
            status,
            overlay,
        }
    }
}
