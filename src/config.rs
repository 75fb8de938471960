//! Per-session game configuration
//!
//! Immutable once a session starts; validated up front so bad timing bounds
//! fail at setup instead of mid-round.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Invalid session configuration
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("min spawn delay {min}s exceeds max spawn delay {max}s")]
    SpawnDelayBounds { min: f32, max: f32 },
    #[error("{field} must be positive, got {value}s")]
    NonPositiveDuration { field: &'static str, value: f32 },
    #[error("victim probability {0} outside [0, 1]")]
    VictimProbability(f32),
    #[error("starting lives must be at least 1")]
    NoLives,
}

/// Game settings fixed for one play session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Lives at session start
    pub starting_lives: u8,
    /// Lower bound of the randomized pre-target delay (seconds)
    pub min_spawn_delay_secs: f32,
    /// Upper bound of the randomized pre-target delay (seconds)
    pub max_spawn_delay_secs: f32,
    /// How long a visible target can be validly bitten (seconds)
    pub reaction_window_secs: f32,
    /// Chance a spawned target is a victim (the rest are monsters)
    pub victim_probability: f32,
    /// Post-result cooldown during which input is not judged (seconds)
    pub spawn_cooldown_secs: f32,
    /// Pause after a life-losing miss before the next round (seconds)
    pub next_round_delay_secs: f32,
    /// Game-over overlay fade-in duration (seconds)
    pub game_over_fade_secs: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_lives: DEFAULT_STARTING_LIVES,
            min_spawn_delay_secs: DEFAULT_MIN_SPAWN_DELAY,
            max_spawn_delay_secs: DEFAULT_MAX_SPAWN_DELAY,
            reaction_window_secs: DEFAULT_REACTION_WINDOW,
            victim_probability: DEFAULT_VICTIM_PROBABILITY,
            spawn_cooldown_secs: DEFAULT_SPAWN_COOLDOWN,
            next_round_delay_secs: DEFAULT_NEXT_ROUND_DELAY,
            game_over_fade_secs: DEFAULT_GAME_OVER_FADE,
        }
    }
}

impl GameConfig {
    /// Check timing bounds and probabilities before a session starts
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_lives == 0 {
            return Err(ConfigError::NoLives);
        }
        for (field, value) in [
            ("min_spawn_delay_secs", self.min_spawn_delay_secs),
            ("max_spawn_delay_secs", self.max_spawn_delay_secs),
            ("reaction_window_secs", self.reaction_window_secs),
            ("game_over_fade_secs", self.game_over_fade_secs),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositiveDuration { field, value });
            }
        }
        // Zero cooldowns are fine, rounds just chain back to back
        for (field, value) in [
            ("spawn_cooldown_secs", self.spawn_cooldown_secs),
            ("next_round_delay_secs", self.next_round_delay_secs),
        ] {
            if value < 0.0 {
                return Err(ConfigError::NonPositiveDuration { field, value });
            }
        }
        if self.min_spawn_delay_secs > self.max_spawn_delay_secs {
            return Err(ConfigError::SpawnDelayBounds {
                min: self.min_spawn_delay_secs,
                max: self.max_spawn_delay_secs,
            });
        }
        if !(0.0..=1.0).contains(&self.victim_probability) {
            return Err(ConfigError::VictimProbability(self.victim_probability));
        }
        Ok(())
    }

    /// Parse a config from JSON (used by the demo binary's --config flag)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
