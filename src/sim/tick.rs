//! Per-frame simulation tick
//!
//! Input judgement and the spawn protocol. The host calls `tick` once per
//! frame; scheduled delays advance with the same dt, so the whole session is
//! deterministic for a given seed and input sequence.

use rand::Rng;

use super::state::*;
use crate::audio::SoundCue;

/// Input edges for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Was the bite key pressed this frame (edge, not level)
    pub bite: bool,
    /// Idle/demo mode - the game plays itself
    pub idle_mode: bool,
}

/// Advance the session by one frame
///
/// Judges this frame's input edge first, then burns `dt` off the pending
/// delay and runs its handler if it elapsed. Returns the presentation/audio
/// commands this frame produced.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Terminal: nothing ticks, nothing is judged
    if state.phase == GamePhase::GameOver {
        return events;
    }

    state.time_ticks += 1;

    let mut bite = input.bite;
    if input.idle_mode {
        match state.phase {
            GamePhase::Idle => bite = true,
            GamePhase::TargetVisible => {
                // Bite victims the moment they appear, let monsters pass
                if state.can_accept_input && state.target == Some(TargetKind::Victim) {
                    bite = true;
                }
            }
            _ => {}
        }
    }

    if bite {
        match state.phase {
            GamePhase::Idle => start_session(state, &mut events),
            GamePhase::AwaitingSpawn | GamePhase::TargetVisible => {
                judge_bite(state, &mut events)
            }
            GamePhase::GameOver => unreachable!("handled above"),
        }
    }

    // Delays scheduled by this frame's handlers wait for the next tick
    let mut fired = Vec::new();
    state.timers.advance(dt, &mut fired);
    for kind in fired {
        if state.phase == GamePhase::GameOver {
            break;
        }
        handle_delay(state, kind, &mut events);
    }

    events
}

/// Reset the session to Idle from any phase, cancelling all pending delays
pub fn restart(state: &mut GameState) -> Vec<GameEvent> {
    state.timers.cancel_all();
    state.pending_delay = None;
    state.score = 0;
    state.lives = state.config.starting_lives;
    state.phase = GamePhase::Idle;
    state.target = None;
    state.can_accept_input = false;
    state.awaiting_target = false;
    log::info!("session restarted (seed {})", state.seed);

    vec![
        GameEvent::SessionReset,
        GameEvent::TargetHidden,
        GameEvent::InstructionsVisible(false),
        GameEvent::ScoreLives {
            score: state.score,
            lives: state.lives,
        },
        GameEvent::Message(MSG_PRESS_TO_BEGIN),
    ]
}

fn start_session(state: &mut GameState, events: &mut Vec<GameEvent>) {
    events.push(GameEvent::Message(MSG_GET_READY));
    events.push(GameEvent::InstructionsVisible(true));
    begin_spawn_sequence(state);
}

/// Judge a bite edge during gameplay
fn judge_bite(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if !state.can_accept_input {
        // Post-result cooldown: not a hit, not a miss
        return;
    }

    // Too early, before the target appears
    if state.awaiting_target && state.target.is_none() {
        miss(state, MSG_TOO_SOON, events);
        return;
    }

    match state.target {
        Some(TargetKind::Victim) => bite_success(state, events),
        Some(TargetKind::Monster) => bite_monster(state, events),
        None => {}
    }
}

fn bite_success(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.score += 1;
    hide_target(state, events);
    events.push(GameEvent::Sound(SoundCue::Bite));
    events.push(GameEvent::Message(MSG_NICE_BITE));
    events.push(GameEvent::ScoreLives {
        score: state.score,
        lives: state.lives,
    });
    begin_spawn_sequence(state);
}

fn bite_monster(state: &mut GameState, events: &mut Vec<GameEvent>) {
    hide_target(state, events);
    events.push(GameEvent::Sound(SoundCue::Monster));
    events.push(GameEvent::Message(MSG_BIT_HELPER));
    lose_life(state, events);
}

/// A timing miss: premature bite or reaction window elapsed on a victim
fn miss(state: &mut GameState, msg: &'static str, events: &mut Vec<GameEvent>) {
    hide_target(state, events);
    events.push(GameEvent::Message(msg));
    lose_life(state, events);
}

fn lose_life(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.lives = state.lives.saturating_sub(1);
    events.push(GameEvent::ScoreLives {
        score: state.score,
        lives: state.lives,
    });

    if state.lives == 0 {
        end_game(state, events);
        return;
    }

    // Breather before the next round so the result message is readable
    state.phase = GamePhase::AwaitingSpawn;
    state.can_accept_input = false;
    state.awaiting_target = false;
    set_pending(state, state.config.next_round_delay_secs, DelayKind::NextRound);
}

fn end_game(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.phase = GamePhase::GameOver;
    state.can_accept_input = false;
    state.awaiting_target = false;
    state.timers.cancel_all();
    state.pending_delay = None;
    log::info!("game over, final score {}", state.score);

    events.push(GameEvent::TargetHidden);
    events.push(GameEvent::InstructionsVisible(false));
    events.push(GameEvent::Message(""));
    events.push(GameEvent::GameOver {
        final_score: state.score,
    });
}

/// Start the cooldown -> waiting -> target pipeline for the next round
fn begin_spawn_sequence(state: &mut GameState) {
    state.phase = GamePhase::AwaitingSpawn;
    state.can_accept_input = false;
    state.awaiting_target = false;
    set_pending(state, state.config.spawn_cooldown_secs, DelayKind::SpawnCooldown);
}

fn handle_delay(state: &mut GameState, kind: DelayKind, events: &mut Vec<GameEvent>) {
    match kind {
        DelayKind::SpawnCooldown => {
            // Arm the too-soon window and roll the wait before the target
            state.awaiting_target = true;
            state.can_accept_input = true;
            let min = state.config.min_spawn_delay_secs;
            let max = state.config.max_spawn_delay_secs;
            let wait = if max > min {
                state.rng.random_range(min..max)
            } else {
                min
            };
            set_pending(state, wait, DelayKind::SpawnDelay);
        }

        DelayKind::SpawnDelay => {
            state.awaiting_target = false;
            let roll: f32 = state.rng.random();
            let kind = if roll < state.config.victim_probability {
                TargetKind::Victim
            } else {
                TargetKind::Monster
            };
            state.target = Some(kind);
            state.phase = GamePhase::TargetVisible;
            state.can_accept_input = true;

            events.push(GameEvent::TargetShown(kind));
            events.push(GameEvent::Message(match kind {
                TargetKind::Victim => MSG_BITE_THEM,
                TargetKind::Monster => MSG_DONT_BITE,
            }));
            set_pending(state, state.config.reaction_window_secs, DelayKind::ReactionWindow);
        }

        DelayKind::ReactionWindow => match state.target {
            Some(TargetKind::Victim) => miss(state, MSG_TOO_SLOW, events),
            Some(TargetKind::Monster) => {
                // Pass-through: no penalty for leaving a monster alone
                hide_target(state, events);
                events.push(GameEvent::Message(MSG_ORC_PASSED));
                begin_spawn_sequence(state);
            }
            None => {}
        },

        DelayKind::NextRound => begin_spawn_sequence(state),
    }
}

fn hide_target(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if state.target.take().is_some() {
        events.push(GameEvent::TargetHidden);
    }
    state.can_accept_input = false;
    state.awaiting_target = false;
}

/// Replace the live delay. Exactly one delay is ever pending, so a stale
/// timer can never fire into a superseded phase.
fn set_pending(state: &mut GameState, secs: f32, kind: DelayKind) {
    if let Some(handle) = state.pending_delay.take() {
        state.timers.cancel(handle);
    }
    state.pending_delay = Some(state.timers.schedule_after(secs, kind));
}
