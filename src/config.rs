use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Invalid {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub surface: SurfaceConfig,
    #[serde(default)]
    pub assets: AssetConfig,
}

/// Pixel geometry of the canvas: 64-pixel squares on a 512x512 board with a
/// capture panel to the right.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SurfaceConfig {
    #[serde(default = "default_square_size")]
    pub square_size: f32,
    #[serde(default)]
    pub board_origin_x: f32,
    #[serde(default)]
    pub board_origin_y: f32,
    #[serde(default = "default_panel_width")]
    pub panel_width: f32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AssetConfig {
    #[serde(default = "default_asset_dir")]
    pub dir: PathBuf,
}

fn default_square_size() -> f32 {
    64.0
}

fn default_panel_width() -> f32 {
    192.0
}

fn default_asset_dir() -> PathBuf {
    PathBuf::from("images")
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            square_size: default_square_size(),
            board_origin_x: 0.0,
            board_origin_y: 0.0,
            panel_width: default_panel_width(),
        }
    }
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            dir: default_asset_dir(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new("Config.toml"))
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let contents = fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
                path: path.to_path_buf(),
                source,
            })?;
            toml::from_str(&contents).map_err(|source| ConfigError::Invalid {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            Self::default()
        };

        config.merge_env();

        info!(
            square_size = config.surface.square_size,
            board_origin_x = config.surface.board_origin_x,
            board_origin_y = config.surface.board_origin_y,
            panel_width = config.surface.panel_width,
            asset_dir = %config.assets.dir.display(),
            "configuration loaded"
        );

        Ok(config)
    }

    fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("CLICKCHESS_SQUARE_SIZE") {
            if let Ok(parsed) = val.parse() {
                self.surface.square_size = parsed;
            }
        }
        if let Ok(val) = std::env::var("CLICKCHESS_BOARD_ORIGIN_X") {
            if let Ok(parsed) = val.parse() {
                self.surface.board_origin_x = parsed;
            }
        }
        if let Ok(val) = std::env::var("CLICKCHESS_BOARD_ORIGIN_Y") {
            if let Ok(parsed) = val.parse() {
                self.surface.board_origin_y = parsed;
            }
        }
        if let Ok(val) = std::env::var("CLICKCHESS_PANEL_WIDTH") {
            if let Ok(parsed) = val.parse() {
                self.surface.panel_width = parsed;
            }
        }
        if let Ok(val) = std::env::var("CLICKCHESS_ASSET_DIR") {
            if !val.is_empty() {
                self.assets.dir = PathBuf::from(val);
            }
        }
    }
}
