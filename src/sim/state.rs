//! Game state and core simulation types
//!
//! Everything that changes during a play session lives here. The state is
//! mutated only by `tick` and the delay handlers it drives.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::audio::SoundCue;
use crate::config::GameConfig;
use crate::timer::{Scheduler, TimerHandle};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for the first input to begin a session
    Idle,
    /// Spawn sequence running, no target visible yet
    AwaitingSpawn,
    /// A target is shown and the reaction window is open
    TargetVisible,
    /// Session ended, lives exhausted
    GameOver,
}

/// What the currently visible target is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// Bite it for a point
    Victim,
    /// Biting it costs a life; letting it pass is free
    Monster,
}

/// Pending delay kinds driving the spawn protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayKind {
    /// Post-result cooldown during which input is not judged
    SpawnCooldown,
    /// Randomized wait before the target appears (too-soon window is armed)
    SpawnDelay,
    /// Window during which a visible target can be bitten
    ReactionWindow,
    /// Short pause after a life-losing miss before the next round
    NextRound,
}

/// Commands for the presentation/audio collaborators, emitted by the tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Update the status message line
    Message(&'static str),
    /// Score or lives changed; refresh the HUD
    ScoreLives { score: u32, lives: u8 },
    /// Show the given target's visual, hiding the other
    TargetShown(TargetKind),
    /// Hide whichever target is visible
    TargetHidden,
    /// Toggle the how-to-play text
    InstructionsVisible(bool),
    /// Fire-and-forget audio cue
    Sound(SoundCue),
    /// Lives hit zero; present the end-of-game overlay
    GameOver { final_score: u32 },
    /// Session was reset to Idle; tear down any end-of-game presentation
    SessionReset,
}

// Status messages for the HUD message line
pub const MSG_PRESS_TO_BEGIN: &str = "Press Any Key to Begin";
pub const MSG_GET_READY: &str = "Get ready...";
pub const MSG_BITE_THEM: &str = "BITE THEM!";
pub const MSG_DONT_BITE: &str = "DON'T BITE!";
pub const MSG_TOO_SOON: &str = "Too soon!";
pub const MSG_TOO_SLOW: &str = "Too slow!";
pub const MSG_NICE_BITE: &str = "Nice Bite!";
pub const MSG_BIT_HELPER: &str = "HEY! Why did you bite me? I'm here to HELP you!";
pub const MSG_ORC_PASSED: &str = "Nice, the Orc was let through!";

/// Complete session state (deterministic for a given seed + input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session tuning, immutable while playing
    pub config: GameConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG for spawn delays and target draws
    pub(crate) rng: Pcg32,
    /// Bitten victims this session
    pub score: u32,
    /// Remaining lives, clamped to [0, starting_lives]
    pub lives: u8,
    /// Current phase
    pub phase: GamePhase,
    /// The visible target, if any. `Some` implies `phase == TargetVisible`.
    pub target: Option<TargetKind>,
    /// Whether an input edge this tick should be judged at all
    pub can_accept_input: bool,
    /// Too-soon window: no target yet, but a premature bite is punishable
    pub awaiting_target: bool,
    /// The single live scheduled delay for the current phase
    pub pending_delay: Option<TimerHandle>,
    /// Delay queue driven by the frame tick
    pub(crate) timers: Scheduler<DelayKind>,
    /// Frame tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a fresh session. `config` must already be validated.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let lives = config.starting_lives;
        Self {
            config,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            lives,
            phase: GamePhase::Idle,
            target: None,
            can_accept_input: false,
            awaiting_target: false,
            pending_delay: None,
            timers: Scheduler::new(),
            time_ticks: 0,
        }
    }

    /// Number of delays currently scheduled (at most one outside of tests)
    pub fn pending_delays(&self) -> usize {
        self.timers.pending_count()
    }
}
