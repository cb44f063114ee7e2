use serde::{Deserialize, Serialize};

/// Click sound shipped with the game assets.
pub const DEFAULT_CLICK_CUE: &str = "sounds/pickupCoin.wav";

/// Identifier of a sound resource, resolved by the embedding frontend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundCue(String);

impl SoundCue {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &str {
        &self.0
    }
}

impl Default for SoundCue {
    fn default() -> Self {
        Self::new(DEFAULT_CLICK_CUE)
    }
}

/// Playback capability provided by the embedding frontend.
pub trait AudioSink {
    /// Fire-and-forget playback of `cue`.
    fn play(&mut self, cue: &SoundCue);
}

/// Sink that discards every cue, for headless runs.
#[derive(Copy, Clone, Debug, Default)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play(&mut self, _cue: &SoundCue) {}
}
