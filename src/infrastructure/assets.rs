use crate::domain::models::{Piece, PieceKind, Player};
use crate::domain::piece_code::PieceCode;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("piece image directory not found: {}", path.display())]
    MissingDirectory { path: PathBuf },
    /// Startup is all-or-nothing: one absent file of the twelve aborts the
    /// whole run before the frame loop starts.
    #[error("required piece image not found: {}", path.display())]
    MissingImage { path: PathBuf },
}

/// Resolves the twelve piece images a renderer needs, addressed by piece
/// code. File naming follows the `wP.svg` / `bK.svg` convention: color
/// letter, then the piece's upper-case letter.
#[derive(Clone, Debug)]
pub struct SpriteManifest {
    images: HashMap<PieceCode, PathBuf>,
}

const PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

impl SpriteManifest {
    pub fn discover(dir: &Path) -> Result<Self, AssetError> {
        if !dir.is_dir() {
            return Err(AssetError::MissingDirectory {
                path: dir.to_path_buf(),
            });
        }

        let mut images = HashMap::new();
        for owner in [Player::White, Player::Black] {
            for kind in PIECE_KINDS {
                let piece = Piece::new(kind, owner);
                let path = dir.join(Self::file_name(piece));
                if !path.is_file() {
                    return Err(AssetError::MissingImage { path });
                }
                images.insert(piece.code(), path);
            }
        }
        Ok(SpriteManifest { images })
    }

    pub fn path_for(&self, code: PieceCode) -> Option<&Path> {
        self.images.get(&code).map(PathBuf::as_path)
    }

    fn file_name(piece: Piece) -> &'static str {
        match (piece.owner, piece.kind) {
            (Player::White, PieceKind::Pawn) => "wP.svg",
            (Player::White, PieceKind::Knight) => "wN.svg",
            (Player::White, PieceKind::Bishop) => "wB.svg",
            (Player::White, PieceKind::Rook) => "wR.svg",
            (Player::White, PieceKind::Queen) => "wQ.svg",
            (Player::White, PieceKind::King) => "wK.svg",
            (Player::Black, PieceKind::Pawn) => "bP.svg",
            (Player::Black, PieceKind::Knight) => "bN.svg",
            (Player::Black, PieceKind::Bishop) => "bB.svg",
            (Player::Black, PieceKind::Rook) => "bR.svg",
            (Player::Black, PieceKind::Queen) => "bQ.svg",
            (Player::Black, PieceKind::King) => "bK.svg",
        }
    }
}
