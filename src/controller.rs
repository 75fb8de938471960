//! Session controller
//!
//! Owns the sim state plus the injected presentation and audio collaborators,
//! and translates tick events into collaborator calls. Also drives the
//! game-over overlay fade, which is presentation pacing rather than gameplay
//! and so stays out of the sim.

use crate::audio::AudioSink;
use crate::config::{ConfigError, GameConfig};
use crate::sim::{self, GameEvent, GameState, TickInput};
use crate::smooth_step;
use crate::ui::Presentation;

/// The reaction game, wired to its collaborators
pub struct ReactionGameController<P: Presentation, A: AudioSink> {
    state: GameState,
    presentation: P,
    audio: A,
    /// Seconds since the game-over overlay appeared, while the fade runs
    fade_elapsed: Option<f32>,
}

impl<P: Presentation, A: AudioSink> ReactionGameController<P, A> {
    /// Validate the config and set up a session waiting in Idle
    pub fn new(
        config: GameConfig,
        seed: u64,
        presentation: P,
        audio: A,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        log::info!("new session: seed {seed}, {} lives", config.starting_lives);
        let state = GameState::new(config, seed);
        let mut controller = Self {
            state,
            presentation,
            audio,
            fade_elapsed: None,
        };
        controller.present_initial();
        Ok(controller)
    }

    /// Advance one frame. `bite` is this frame's input edge.
    pub fn tick(&mut self, bite: bool, dt: f32) {
        self.tick_input(
            &TickInput {
                bite,
                idle_mode: false,
            },
            dt,
        );
    }

    /// Advance one frame with full input control (demo mode etc.)
    pub fn tick_input(&mut self, input: &TickInput, dt: f32) {
        let events = sim::tick(&mut self.state, input, dt);
        self.dispatch(events);
        self.advance_fade(dt);
    }

    /// Restart button: back to Idle from any phase
    pub fn restart(&mut self) {
        let events = sim::restart(&mut self.state);
        self.dispatch(events);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    fn present_initial(&mut self) {
        self.presentation.hide_game_over_overlay();
        self.presentation.set_target_visual(None);
        self.presentation.show_instructions(false);
        self.presentation
            .set_score_lives(self.state.score, self.state.lives);
        self.presentation.show_message(sim::state::MSG_PRESS_TO_BEGIN);
    }

    fn dispatch(&mut self, events: Vec<GameEvent>) {
        for event in events {
            match event {
                GameEvent::Message(text) => self.presentation.show_message(text),
                GameEvent::ScoreLives { score, lives } => {
                    self.presentation.set_score_lives(score, lives)
                }
                GameEvent::TargetShown(kind) => {
                    self.presentation.set_target_visual(Some(kind))
                }
                GameEvent::TargetHidden => self.presentation.set_target_visual(None),
                GameEvent::InstructionsVisible(visible) => {
                    self.presentation.show_instructions(visible)
                }
                GameEvent::Sound(cue) => self.audio.play(cue),
                GameEvent::GameOver { final_score } => {
                    self.presentation.show_game_over_overlay(final_score);
                    self.presentation.set_overlay_alpha(0.0);
                    self.fade_elapsed = Some(0.0);
                }
                GameEvent::SessionReset => {
                    self.fade_elapsed = None;
                    self.presentation.hide_game_over_overlay();
                }
            }
        }
    }

    fn advance_fade(&mut self, dt: f32) {
        if let Some(elapsed) = &mut self.fade_elapsed {
            *elapsed += dt;
            let duration = self.state.config.game_over_fade_secs;
            let alpha = smooth_step(*elapsed / duration);
            self.presentation.set_overlay_alpha(alpha);
            if *elapsed >= duration {
                self.fade_elapsed = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SoundCue;
    use crate::sim::{GamePhase, TargetKind};

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Message(String),
        ScoreLives(u32, u8),
        Target(Option<TargetKind>),
        Instructions(bool),
        OverlayShown(u32),
        OverlayAlpha(f32),
        OverlayHidden,
        Cue(SoundCue),
    }

    /// Records every collaborator call for assertions
    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl Presentation for &mut Recorder {
        fn show_message(&mut self, text: &str) {
            self.calls.push(Call::Message(text.to_string()));
        }
        fn set_score_lives(&mut self, score: u32, lives: u8) {
            self.calls.push(Call::ScoreLives(score, lives));
        }
        fn set_target_visual(&mut self, target: Option<TargetKind>) {
            self.calls.push(Call::Target(target));
        }
        fn show_instructions(&mut self, visible: bool) {
            self.calls.push(Call::Instructions(visible));
        }
        fn show_game_over_overlay(&mut self, final_score: u32) {
            self.calls.push(Call::OverlayShown(final_score));
        }
        fn set_overlay_alpha(&mut self, alpha: f32) {
            self.calls.push(Call::OverlayAlpha(alpha));
        }
        fn hide_game_over_overlay(&mut self) {
            self.calls.push(Call::OverlayHidden);
        }
    }

    impl AudioSink for &mut Recorder {
        fn play(&mut self, cue: SoundCue) {
            self.calls.push(Call::Cue(cue));
        }
    }

    fn all_victims(starting_lives: u8) -> GameConfig {
        GameConfig {
            starting_lives,
            victim_probability: 1.0,
            ..Default::default()
        }
    }

    /// Drive a fresh controller to the first visible target
    fn walk_to_target(ctrl: &mut ReactionGameController<&mut Recorder, &mut Recorder>) {
        ctrl.tick(true, 0.0);
        let cooldown = ctrl.state().config.spawn_cooldown_secs;
        let max_delay = ctrl.state().config.max_spawn_delay_secs;
        ctrl.tick(false, cooldown);
        ctrl.tick(false, max_delay);
        assert_eq!(ctrl.state().phase, GamePhase::TargetVisible);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GameConfig {
            min_spawn_delay_secs: 5.0,
            ..Default::default()
        };
        let result =
            ReactionGameController::new(config, 1, crate::NullPresentation, crate::NullAudio);
        assert!(result.is_err());
    }

    #[test]
    fn test_initial_presentation() {
        let mut ui = Recorder::default();
        let mut audio = Recorder::default();
        let ctrl =
            ReactionGameController::new(GameConfig::default(), 1, &mut ui, &mut audio).unwrap();
        drop(ctrl);

        assert!(ui.calls.contains(&Call::OverlayHidden));
        assert!(ui.calls.contains(&Call::Target(None)));
        assert!(ui.calls.contains(&Call::ScoreLives(0, 5)));
        assert!(ui
            .calls
            .contains(&Call::Message("Press Any Key to Begin".to_string())));
    }

    #[test]
    fn test_victim_bite_plays_cue_and_updates_hud() {
        let mut ui = Recorder::default();
        let mut audio = Recorder::default();
        let mut ctrl =
            ReactionGameController::new(all_victims(5), 99, &mut ui, &mut audio).unwrap();
        walk_to_target(&mut ctrl);
        ctrl.tick(true, 0.0);
        drop(ctrl);

        assert!(audio.calls.contains(&Call::Cue(SoundCue::Bite)));
        assert!(ui.calls.contains(&Call::Target(Some(TargetKind::Victim))));
        assert!(ui.calls.contains(&Call::ScoreLives(1, 5)));
    }

    #[test]
    fn test_game_over_overlay_fades_in() {
        let mut ui = Recorder::default();
        let mut audio = Recorder::default();
        let mut ctrl = ReactionGameController::new(all_victims(1), 3, &mut ui, &mut audio).unwrap();
        walk_to_target(&mut ctrl);
        // Miss the only life
        let window = ctrl.state().config.reaction_window_secs;
        ctrl.tick(false, window);
        assert_eq!(ctrl.state().phase, GamePhase::GameOver);

        // Fade runs over subsequent frames even though the sim is inert
        let fade = ctrl.state().config.game_over_fade_secs;
        let step = fade / 10.0;
        for _ in 0..12 {
            ctrl.tick(false, step);
        }
        drop(ctrl);

        assert!(ui.calls.contains(&Call::OverlayShown(0)));
        let alphas: Vec<f32> = ui
            .calls
            .iter()
            .filter_map(|c| match c {
                Call::OverlayAlpha(a) => Some(*a),
                _ => None,
            })
            .collect();
        assert!(alphas.first().copied() == Some(0.0));
        assert!(alphas.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(alphas.last().copied(), Some(1.0));
    }

    #[test]
    fn test_restart_hides_overlay() {
        let mut ui = Recorder::default();
        let mut audio = Recorder::default();
        let mut ctrl = ReactionGameController::new(all_victims(1), 3, &mut ui, &mut audio).unwrap();
        walk_to_target(&mut ctrl);
        let window = ctrl.state().config.reaction_window_secs;
        ctrl.tick(false, window);

        ctrl.restart();
        assert_eq!(ctrl.state().phase, GamePhase::Idle);
        assert_eq!(ctrl.state().lives, 1);
        drop(ctrl);

        // Hidden once at setup and again on restart
        let hides = ui
            .calls
            .iter()
            .filter(|c| **c == Call::OverlayHidden)
            .count();
        assert_eq!(hides, 2);
    }
}
