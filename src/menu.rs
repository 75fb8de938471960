//! Main menu
//!
//! Start/quit buttons play a click cue and navigate after a short fixed
//! delay, so the click is audible before the scene goes away. Navigation is
//! reported as a command for the host to act on; the menu never loads scenes
//! or exits the process itself.

use crate::audio::{AudioSink, SoundCue};
use crate::consts::MENU_NAV_DELAY;
use crate::timer::Scheduler;

/// What the host should do once a button's delay elapses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    /// Load the gameplay scene
    LoadMainScene,
    /// Terminate the application (or stop play mode in an editor host)
    QuitApp,
}

/// Menu state: at most one navigation pending at a time
#[derive(Debug, Default)]
pub struct MainMenu {
    timers: Scheduler<MenuCommand>,
}

impl MainMenu {
    pub fn new() -> Self {
        Self {
            timers: Scheduler::new(),
        }
    }

    /// Start button pressed. A second press before navigation supersedes the
    /// pending command.
    pub fn press_start(&mut self, audio: &mut impl AudioSink) {
        log::debug!("start button pressed");
        audio.play(SoundCue::ButtonClick);
        self.schedule(MenuCommand::LoadMainScene);
    }

    /// Quit button pressed
    pub fn press_quit(&mut self, audio: &mut impl AudioSink) {
        log::debug!("quit button pressed");
        audio.play(SoundCue::ButtonClick);
        self.schedule(MenuCommand::QuitApp);
    }

    fn schedule(&mut self, command: MenuCommand) {
        self.timers.cancel_all();
        self.timers.schedule_after(MENU_NAV_DELAY, command);
    }

    /// Advance the menu by one frame; returns the navigation command when its
    /// delay has elapsed.
    pub fn tick(&mut self, dt: f32) -> Option<MenuCommand> {
        let mut fired = Vec::new();
        self.timers.advance(dt, &mut fired);
        fired.into_iter().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::NullAudio;

    struct CueCounter(usize);
    impl AudioSink for CueCounter {
        fn play(&mut self, cue: SoundCue) {
            assert_eq!(cue, SoundCue::ButtonClick);
            self.0 += 1;
        }
    }

    #[test]
    fn test_start_navigates_after_delay() {
        let mut menu = MainMenu::new();
        let mut audio = CueCounter(0);
        menu.press_start(&mut audio);
        assert_eq!(audio.0, 1);

        // Click is heard immediately, navigation waits out the delay
        assert_eq!(menu.tick(MENU_NAV_DELAY / 2.0), None);
        assert_eq!(menu.tick(MENU_NAV_DELAY), Some(MenuCommand::LoadMainScene));
        // One-shot
        assert_eq!(menu.tick(1.0), None);
    }

    #[test]
    fn test_quit_navigates_after_delay() {
        let mut menu = MainMenu::new();
        menu.press_quit(&mut NullAudio);
        assert_eq!(menu.tick(MENU_NAV_DELAY), Some(MenuCommand::QuitApp));
    }

    #[test]
    fn test_second_press_supersedes_pending() {
        let mut menu = MainMenu::new();
        menu.press_start(&mut NullAudio);
        menu.press_quit(&mut NullAudio);

        // Only the latest command ever fires
        assert_eq!(menu.tick(MENU_NAV_DELAY), Some(MenuCommand::QuitApp));
        assert_eq!(menu.tick(1.0), None);
    }
}
