use crate::domain::models::{GameStatus, TerminalReason};
use tracing::info;

/// Latches the engine's terminal verdict. Transitions only
/// `Active -> Terminal`; once terminal the stored reason never changes, and
/// later readings, whatever they claim, are ignored. The only way back to
/// `Active` is a full session reset, which replaces the monitor outright.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMonitor {
    status: GameStatus,
}

impl Default for StatusMonitor {
    fn default() -> Self {
        StatusMonitor::new()
    }
}

impl StatusMonitor {
    pub fn new() -> Self {
        StatusMonitor {
            status: GameStatus::Active,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Feed one per-frame status reading. Returns the reason on the first
    /// terminal reading only.
    pub fn observe(&mut self, reading: GameStatus) -> Option<TerminalReason> {
        if self.status.is_terminal() {
            return None;
        }
        match reading {
            GameStatus::Active => None,
            GameStatus::Terminal(reason) => {
                self.status = reading;
                info!(?reason, "game reached terminal state");
                Some(reason)
            }
        }
    }
}
