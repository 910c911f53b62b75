//! Seat and search configuration

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::board::Player;

/// Shallowest search depth offered to users
pub const MIN_DEPTH: u8 = 1;
/// Deepest search depth offered to users
pub const MAX_DEPTH: u8 = 15;
pub const DEFAULT_DEPTH: u8 = 4;

/// Who chooses the moves for a seat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SeatControl {
    /// Moves are supplied from outside (mouse click, test driver)
    Human,
    /// Moves are chosen by the search
    Agent,
}

/// Controller type for each seat plus the agent search depth.
///
/// `depth` is not validated by the engine; front-ends keep it within
/// `MIN_DEPTH..=MAX_DEPTH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub black: SeatControl,
    pub white: SeatControl,
    pub depth: u8,
}

impl GameConfig {
    pub fn new(black: SeatControl, white: SeatControl, depth: u8) -> Self {
        Self { black, white, depth }
    }

    /// Both seats played by the search
    pub fn agents(depth: u8) -> Self {
        Self::new(SeatControl::Agent, SeatControl::Agent, depth)
    }

    /// Both seats played from outside
    pub fn humans() -> Self {
        Self::new(SeatControl::Human, SeatControl::Human, DEFAULT_DEPTH)
    }

    #[inline]
    pub fn seat(&self, player: Player) -> SeatControl {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    #[inline]
    pub fn is_agent(&self, player: Player) -> bool {
        self.seat(player) == SeatControl::Agent
    }

    pub fn has_human(&self) -> bool {
        self.black == SeatControl::Human || self.white == SeatControl::Human
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(SeatControl::Human, SeatControl::Agent, DEFAULT_DEPTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.seat(Player::Black), SeatControl::Human);
        assert!(config.is_agent(Player::White));
        assert!(config.has_human());
        assert!((MIN_DEPTH..=MAX_DEPTH).contains(&config.depth));
    }

    #[test]
    fn test_agents_config() {
        let config = GameConfig::agents(2);
        assert!(config.is_agent(Player::Black));
        assert!(config.is_agent(Player::White));
        assert!(!config.has_human());
        assert_eq!(config.depth, 2);
    }

    #[test]
    fn test_config_json_roundtrip() {
        let config = GameConfig::new(SeatControl::Agent, SeatControl::Human, 6);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"black":"agent","white":"human","depth":6}"#);
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
