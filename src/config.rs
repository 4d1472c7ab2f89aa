use std::path::Path;

use crate::error::ConfigError;
use crate::game::{Color, GameState, Player, PlayerId};

/// Game setup, loadable from TOML: board dimensions plus the player roster.
///
/// The engine-side counterpart of a "new game" form — a name and a 6-digit
/// hex color per player, and the size of the board everyone plays on.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub players: Vec<PlayerConfig>,
}

/// One roster entry.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub name: String,
    pub color: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: 7,
            height: 6,
            players: vec![
                PlayerConfig {
                    name: "Player 1".to_string(),
                    color: "#c52132".to_string(),
                },
                PlayerConfig {
                    name: "Player 2".to_string(),
                    color: "#ffca24".to_string(),
                },
            ],
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig {
            name: "Player".to_string(),
            color: "#ff00ff".to_string(),
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::Validation("width must be > 0".into()));
        }
        if self.height == 0 {
            return Err(ConfigError::Validation("height must be > 0".into()));
        }
        if self.players.len() < 2 {
            return Err(ConfigError::Validation(format!(
                "players must list at least 2 entries, got {}",
                self.players.len()
            )));
        }
        for (i, player) in self.players.iter().enumerate() {
            if player.color.parse::<Color>().is_err() {
                return Err(ConfigError::Validation(format!(
                    "players[{}].color: {:?} is not a 6 digit hex color",
                    i, player.color
                )));
            }
        }
        Ok(())
    }

    /// Build the ready-to-play state this configuration describes.
    ///
    /// Players get ids from their roster position; win tallies start at
    /// zero.
    pub fn new_game(&self) -> Result<GameState, ConfigError> {
        self.validate()?;
        let players = self
            .players
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let color = p
                    .color
                    .parse::<Color>()
                    .map_err(|e| ConfigError::Validation(e.to_string()))?;
                Ok(Player::new(PlayerId(i as u32), p.name.clone(), color))
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;
        Ok(GameState::new(players, self.width, self.height)?)
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&GameConfig::default()).expect("default config serializes")
    }
}
