//! Deterministic reaction-game simulation
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Advanced only from the frame tick
//! - Seeded RNG only
//! - No rendering, audio, or platform dependencies (collaborator commands are
//!   emitted as [`GameEvent`]s for the controller to dispatch)

pub mod state;
pub mod tick;

pub use state::{DelayKind, GameEvent, GamePhase, GameState, TargetKind};
pub use tick::{TickInput, restart, tick};
