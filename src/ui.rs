//! Presentation seam
//!
//! The controller pushes display commands through this trait; the host decides
//! how to draw them. `NullPresentation` stands in for absent UI pieces:
//! missing presentation is silently skipped, never a fault.

use crate::sim::TargetKind;

/// Receiver for display commands
pub trait Presentation {
    /// Update the status message line (empty string clears it)
    fn show_message(&mut self, text: &str);
    /// Refresh the score/lives HUD
    fn set_score_lives(&mut self, score: u32, lives: u8);
    /// Show the given target's visual, or hide both for `None`
    fn set_target_visual(&mut self, target: Option<TargetKind>);
    /// Toggle the how-to-play text
    fn show_instructions(&mut self, visible: bool);
    /// Present the end-of-game overlay with the final score, starting invisible
    fn show_game_over_overlay(&mut self, final_score: u32);
    /// Per-frame overlay opacity while the fade-in runs (0.0 to 1.0)
    fn set_overlay_alpha(&mut self, alpha: f32);
    /// Tear the end-of-game overlay down on restart
    fn hide_game_over_overlay(&mut self);
}

/// Presentation that draws nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPresentation;

impl Presentation for NullPresentation {
    fn show_message(&mut self, _text: &str) {}
    fn set_score_lives(&mut self, _score: u32, _lives: u8) {}
    fn set_target_visual(&mut self, _target: Option<TargetKind>) {}
    fn show_instructions(&mut self, _visible: bool) {}
    fn show_game_over_overlay(&mut self, _final_score: u32) {}
    fn set_overlay_alpha(&mut self, _alpha: f32) {}
    fn hide_game_over_overlay(&mut self) {}
}
