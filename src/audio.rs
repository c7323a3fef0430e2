//! Fire-and-forget sound triggers.

use std::io::Write;

use crate::assets::{Asset, SoundBank};
pub use crate::assets::Sound;
use crate::entities::GameEvent;

/// Receives play requests. Implementations must never fail the caller.
pub trait AudioSink {
    fn play(&mut self, sound: Sound);
}

/// The sound a game event triggers, if any.
pub fn sound_for(event: GameEvent) -> Option<Sound> {
    match event {
        GameEvent::Jumped => Some(Sound::Jump),
        GameEvent::CoinCollected => Some(Sound::Coin),
        GameEvent::GameOver => Some(Sound::GameOver),
        GameEvent::ObstacleCleared => None,
    }
}

/// Rings the terminal bell for every sound that has a backing asset.
pub struct TerminalBell<W: Write> {
    out: W,
    bank: SoundBank,
    enabled: bool,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W, bank: SoundBank, enabled: bool) -> Self {
        Self { out, bank, enabled }
    }
}

impl<W: Write> AudioSink for TerminalBell<W> {
    fn play(&mut self, sound: Sound) {
        if !self.enabled {
            return;
        }
        if let Asset::Available(path) = self.bank.get(sound) {
            log::debug!("play {:?} ({})", sound, path.display());
            // Audio is best effort; a failed bell is not worth a crash.
            let _ = self.out.write_all(b"\x07").and_then(|_| self.out.flush());
        }
    }
}

/// Discards every request.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silence;

impl AudioSink for Silence {
    fn play(&mut self, _sound: Sound) {}
}
