//! Night Bite - a reaction-timing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (phases, judgement, spawn protocol)
//! - `timer`: Cooperative scheduled-delay abstraction
//! - `controller`: Session controller wiring sim to presentation/audio
//! - `config`: Per-session tuning
//! - `menu`: Main menu component

pub mod audio;
pub mod config;
pub mod controller;
pub mod menu;
pub mod sim;
pub mod timer;
pub mod ui;

pub use audio::{AudioSink, NullAudio, SoundCue};
pub use config::{ConfigError, GameConfig};
pub use controller::ReactionGameController;
pub use menu::{MainMenu, MenuCommand};
pub use ui::{NullPresentation, Presentation};

/// Game configuration constants
pub mod consts {
    /// Fixed frame timestep used by the demo loop (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Lives at session start
    pub const DEFAULT_STARTING_LIVES: u8 = 5;
    /// Bounds for the uniformly sampled pre-target delay (seconds)
    pub const DEFAULT_MIN_SPAWN_DELAY: f32 = 1.0;
    pub const DEFAULT_MAX_SPAWN_DELAY: f32 = 3.0;
    /// Time a visible target can be validly bitten (seconds)
    pub const DEFAULT_REACTION_WINDOW: f32 = 0.8;
    /// Chance a spawned target is a victim rather than a monster
    pub const DEFAULT_VICTIM_PROBABILITY: f32 = 0.7;

    /// Post-result cooldown during which input is not judged (seconds)
    pub const DEFAULT_SPAWN_COOLDOWN: f32 = 0.3;
    /// Pause between a life-losing miss and the next spawn sequence (seconds)
    pub const DEFAULT_NEXT_ROUND_DELAY: f32 = 0.4;
    /// Game-over overlay fade-in duration (seconds)
    pub const DEFAULT_GAME_OVER_FADE: f32 = 3.0;

    /// Delay between a menu button press and the resulting navigation (seconds)
    pub const MENU_NAV_DELAY: f32 = 0.15;
}

/// Hermite smoothstep easing, clamped to [0, 1]
#[inline]
pub fn smooth_step(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smooth_step_endpoints() {
        assert_eq!(smooth_step(0.0), 0.0);
        assert_eq!(smooth_step(1.0), 1.0);
        assert_eq!(smooth_step(-0.5), 0.0);
        assert_eq!(smooth_step(2.0), 1.0);
    }

    #[test]
    fn test_smooth_step_midpoint() {
        assert!((smooth_step(0.5) - 0.5).abs() < 1e-6);
        // Eases in: below linear before the midpoint
        assert!(smooth_step(0.25) < 0.25);
        assert!(smooth_step(0.75) > 0.75);
    }
}
