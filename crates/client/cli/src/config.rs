//! CLI configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use tactics_core::GameConfig;

/// Longest board side the client will lay out.
pub const MAX_BOARD_SIDE: u32 = 32;

/// Configuration required to set up a match and the terminal UI.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub board: BoardConfig,
    pub game: GameConfig,
    pub messages: MessageConfig,
    pub session_id: Option<String>,
    pub log_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `TACTICS_BOARD_WIDTH` / `TACTICS_BOARD_HEIGHT` - Board size (default: 8x8)
    /// - `TACTICS_ENEMY_COUNT` - Enemies placed at match start (default: 3)
    /// - `TACTICS_MOVEMENT_RANGE` - Movement range in steps (default: 3)
    /// - `TACTICS_ATTACK_RANGE` - Attack range in steps (default: 1)
    /// - `TACTICS_AWAIT_MOTION` - Block confirm/cancel until motion settles (default: true)
    /// - `TACTICS_MESSAGE_CAPACITY` - Message log capacity (default: 64)
    /// - `TACTICS_SESSION_ID` - Session identifier for the log directory
    /// - `TACTICS_LOG_DIR` - Log directory (default: platform cache dir)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`CliConfig::from_env`] with an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let read = |key: &str| lookup(key);

        if let Some(width) = parse::<u32>(read("TACTICS_BOARD_WIDTH")) {
            config.board.width = width.clamp(1, MAX_BOARD_SIDE);
        }
        if let Some(height) = parse::<u32>(read("TACTICS_BOARD_HEIGHT")) {
            config.board.height = height.clamp(1, MAX_BOARD_SIDE);
        }
        if let Some(count) = parse::<usize>(read("TACTICS_ENEMY_COUNT")) {
            config.board.enemy_count = count;
        }

        if let Some(range) = parse::<u32>(read("TACTICS_MOVEMENT_RANGE")) {
            config.game.movement_range = range;
        }
        if let Some(range) = parse::<u32>(read("TACTICS_ATTACK_RANGE")) {
            config.game.attack_range = range;
        }
        if let Some(await_motion) = parse::<bool>(read("TACTICS_AWAIT_MOTION")) {
            config.game.await_motion = await_motion;
        }

        if let Some(capacity) = parse::<usize>(read("TACTICS_MESSAGE_CAPACITY")) {
            config.messages.capacity = capacity.max(1);
        }

        config.session_id = read("TACTICS_SESSION_ID").filter(|id| !id.is_empty());
        config.log_dir = read("TACTICS_LOG_DIR")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        config
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardConfig {
    pub width: u32,
    pub height: u32,
    pub enemy_count: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: 8,
            height: 8,
            enemy_count: 3,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MessageConfig {
    pub capacity: usize,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self { capacity: 64 }
    }
}

fn parse<T>(value: Option<String>) -> Option<T>
where
    T: std::str::FromStr,
{
    value?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> CliConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        CliConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.board, BoardConfig::default());
        assert_eq!(config.game, GameConfig::default());
        assert_eq!(config.messages.capacity, 64);
        assert!(config.session_id.is_none());
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn variables_override_defaults() {
        let config = config_from(&[
            ("TACTICS_BOARD_WIDTH", "10"),
            ("TACTICS_BOARD_HEIGHT", " 6 "),
            ("TACTICS_ENEMY_COUNT", "5"),
            ("TACTICS_MOVEMENT_RANGE", "4"),
            ("TACTICS_ATTACK_RANGE", "2"),
            ("TACTICS_AWAIT_MOTION", "false"),
            ("TACTICS_SESSION_ID", "demo"),
        ]);

        assert_eq!(config.board.width, 10);
        assert_eq!(config.board.height, 6);
        assert_eq!(config.board.enemy_count, 5);
        assert_eq!(config.game.movement_range, 4);
        assert_eq!(config.game.attack_range, 2);
        assert!(!config.game.await_motion);
        assert_eq!(config.session_id.as_deref(), Some("demo"));
    }

    #[test]
    fn malformed_values_fall_back_and_sizes_are_clamped() {
        let config = config_from(&[
            ("TACTICS_BOARD_WIDTH", "0"),
            ("TACTICS_BOARD_HEIGHT", "500"),
            ("TACTICS_MOVEMENT_RANGE", "far"),
            ("TACTICS_AWAIT_MOTION", "maybe"),
            ("TACTICS_MESSAGE_CAPACITY", "0"),
        ]);

        assert_eq!(config.board.width, 1);
        assert_eq!(config.board.height, MAX_BOARD_SIDE);
        assert_eq!(config.game.movement_range, GameConfig::DEFAULT_MOVEMENT_RANGE);
        assert!(config.game.await_motion);
        assert_eq!(config.messages.capacity, 1);
    }
}
