//! Optional sprite and sound assets.
//!
//! Everything here is probed once at startup. A missing or unusable asset
//! turns into `Asset::Fallback`; drawing and playback consult that instead
//! of touching the filesystem again.

use std::path::{Path, PathBuf};

use crate::error::GameError;

pub const PLAYER_SPRITE: &str = "player.txt";
pub const OBSTACLE_SPRITE: &str = "pipe.txt";
pub const COIN_SPRITE: &str = "coin.txt";

pub const JUMP_SOUND: &str = "jump.mp3";
pub const COIN_SOUND: &str = "coin.mp3";
pub const GAME_OVER_SOUND: &str = "gameover.mp3";

/// Separates animation frames inside a sprite file.
const FRAME_SEPARATOR: &str = "---";

#[derive(Debug, Clone, PartialEq)]
pub enum Asset<T> {
    Available(T),
    Fallback,
}

impl<T> Asset<T> {
    pub fn is_available(&self) -> bool {
        matches!(self, Asset::Available(_))
    }

    pub fn as_available(&self) -> Option<&T> {
        match self {
            Asset::Available(value) => Some(value),
            Asset::Fallback => None,
        }
    }
}

// ── Sprites ───────────────────────────────────────────────────────────────────

/// One frame of character art: rows of glyphs, space is transparent.
pub type SpriteFrame = Vec<Vec<char>>;

/// Character art stretched over an entity's rectangle when drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    frames: Vec<SpriteFrame>,
}

impl Sprite {
    /// Parse sprite text. Frames are separated by a line reading `---`;
    /// frames with no visible glyph are dropped.
    pub fn parse(name: &str, text: &str) -> Result<Self, GameError> {
        let mut frames = Vec::new();
        let mut current: SpriteFrame = Vec::new();

        for line in text.lines() {
            if line.trim_end() == FRAME_SEPARATOR {
                frames.push(std::mem::take(&mut current));
            } else {
                current.push(line.trim_end().chars().collect());
            }
        }
        frames.push(current);

        let frames: Vec<SpriteFrame> = frames
            .into_iter()
            .map(trim_blank_rows)
            .filter(|frame| !frame.is_empty())
            .collect();

        if frames.is_empty() {
            return Err(GameError::EmptySprite(name.to_string()));
        }
        Ok(Self { frames })
    }

    pub fn load(path: &Path) -> Result<Self, GameError> {
        let text = std::fs::read_to_string(path).map_err(|source| GameError::SpriteRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&path.display().to_string(), &text)
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Frame `index`, wrapping around.
    pub fn frame(&self, index: usize) -> &SpriteFrame {
        &self.frames[index % self.frames.len()]
    }
}

fn trim_blank_rows(mut frame: SpriteFrame) -> SpriteFrame {
    let is_blank = |row: &Vec<char>| row.iter().all(|c| c.is_whitespace());
    while frame.last().is_some_and(is_blank) {
        frame.pop();
    }
    let leading = frame.iter().take_while(|row| is_blank(row)).count();
    frame.drain(..leading);
    frame
}

fn load_sprite(dir: &Path, file: &str) -> Asset<Sprite> {
    let path = dir.join(file);
    match Sprite::load(&path) {
        Ok(sprite) => {
            log::info!("Loaded sprite {} ({} frame(s))", path.display(), sprite.frame_count());
            Asset::Available(sprite)
        }
        Err(err) => {
            log::warn!("{err}; drawing shapes instead");
            Asset::Fallback
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sprites {
    pub player: Asset<Sprite>,
    pub obstacle: Asset<Sprite>,
    pub coin: Asset<Sprite>,
}

impl Sprites {
    pub fn load(dir: &Path) -> Self {
        Self {
            player: load_sprite(dir, PLAYER_SPRITE),
            obstacle: load_sprite(dir, OBSTACLE_SPRITE),
            coin: load_sprite(dir, COIN_SPRITE),
        }
    }

    /// Shapes only.
    pub fn fallback() -> Self {
        Self {
            player: Asset::Fallback,
            obstacle: Asset::Fallback,
            coin: Asset::Fallback,
        }
    }
}

// ── Sounds ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    Jump,
    Coin,
    GameOver,
}

impl Sound {
    pub fn file_name(&self) -> &'static str {
        match self {
            Sound::Jump => JUMP_SOUND,
            Sound::Coin => COIN_SOUND,
            Sound::GameOver => GAME_OVER_SOUND,
        }
    }
}

/// Which sounds have a backing file.
#[derive(Debug, Clone, PartialEq)]
pub struct SoundBank {
    pub jump: Asset<PathBuf>,
    pub coin: Asset<PathBuf>,
    pub game_over: Asset<PathBuf>,
}

impl SoundBank {
    pub fn probe(dir: &Path) -> Self {
        let probe = |sound: Sound| {
            let path = dir.join(sound.file_name());
            if path.is_file() {
                Asset::Available(path)
            } else {
                log::info!("Sound {} not found, {:?} will be silent", path.display(), sound);
                Asset::Fallback
            }
        };
        Self {
            jump: probe(Sound::Jump),
            coin: probe(Sound::Coin),
            game_over: probe(Sound::GameOver),
        }
    }

    /// All sounds silent.
    pub fn silent() -> Self {
        Self {
            jump: Asset::Fallback,
            coin: Asset::Fallback,
            game_over: Asset::Fallback,
        }
    }

    pub fn get(&self, sound: Sound) -> &Asset<PathBuf> {
        match sound {
            Sound::Jump => &self.jump,
            Sound::Coin => &self.coin,
            Sound::GameOver => &self.game_over,
        }
    }
}
