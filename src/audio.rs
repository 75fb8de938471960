//! Audio seam
//!
//! The sim emits fire-and-forget cues; playback is the host's concern. A sink
//! that does nothing is a valid collaborator, so a host without audio wiring
//! just plays silently.

/// Sound effect cues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Successful bite on a victim
    Bite,
    /// Bit the monster by mistake
    Monster,
    /// Menu button press
    ButtonClick,
}

/// Receiver for sound cues
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
}

/// Silent sink for hosts without audio
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: SoundCue) {}
}
