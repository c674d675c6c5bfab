/// Match rules and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Taxicab reach of a move, applied to every entity.
    pub movement_range: u32,
    /// Taxicab reach of an attack, applied to every entity.
    pub attack_range: u32,
    /// World units per tile; anchors are laid out on this pitch.
    pub tile_size: f32,
    /// When set, confirm/cancel wait for the presentation layer to report
    /// that a move animation finished.
    pub await_motion: bool,
}

impl GameConfig {
    pub const DEFAULT_MOVEMENT_RANGE: u32 = 3;
    pub const DEFAULT_ATTACK_RANGE: u32 = 1;
    pub const DEFAULT_TILE_SIZE: f32 = 100.0;
    pub const DEFAULT_AWAIT_MOTION: bool = true;

    pub fn new() -> Self {
        Self {
            movement_range: Self::DEFAULT_MOVEMENT_RANGE,
            attack_range: Self::DEFAULT_ATTACK_RANGE,
            tile_size: Self::DEFAULT_TILE_SIZE,
            await_motion: Self::DEFAULT_AWAIT_MOTION,
        }
    }

    pub fn with_ranges(movement_range: u32, attack_range: u32) -> Self {
        Self {
            movement_range,
            attack_range,
            ..Self::new()
        }
    }

    pub fn with_await_motion(mut self, await_motion: bool) -> Self {
        self.await_motion = await_motion;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_ranges() {
        let config = GameConfig::default();
        assert_eq!(config.movement_range, 3);
        assert_eq!(config.attack_range, 1);
        assert!(config.await_motion);

        let custom = GameConfig::with_ranges(5, 2).with_await_motion(false);
        assert_eq!((custom.movement_range, custom.attack_range), (5, 2));
        assert!(!custom.await_motion);
        assert_eq!(custom.tile_size, GameConfig::DEFAULT_TILE_SIZE);
    }
}
