//! All game entity types: plain data plus constructors and simple queries.
//! Per-frame logic lives in `compute`.

use crate::consts::*;
use crate::spawner::Spawner;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// Something that happened during a frame which the outside world
/// (audio, logging) may want to react to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Jumped,
    CoinCollected,
    ObstacleCleared,
    GameOver,
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Vertical velocity in px/frame; negative is upward.
    pub vy: i32,
    pub airborne: bool,
}

impl Player {
    /// A fresh player standing on the ground.
    pub fn new() -> Self {
        Self {
            x: PLAYER_X,
            y: PLAYER_REST_Y,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            vy: 0,
            airborne: false,
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

// ── Scrolling entities ────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Obstacle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    /// Fixed at creation, always within the configured height range.
    pub height: i32,
}

impl Obstacle {
    /// A ground-aligned obstacle. `height` is clamped into range.
    pub fn new(x: i32, height: i32) -> Self {
        let height = height.clamp(OBSTACLE_MIN_HEIGHT, OBSTACLE_MAX_HEIGHT);
        Self {
            x,
            y: GROUND_Y - height,
            width: OBSTACLE_WIDTH,
            height,
        }
    }

    pub fn off_screen(&self) -> bool {
        self.x + self.width < 0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Coin {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub collected: bool,
    /// Cosmetic animation phase in `[0, COIN_ANIMATION_FRAMES)`.
    pub animation_frame: f32,
}

impl Coin {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            width: COIN_SIZE,
            height: COIN_SIZE,
            collected: false,
            animation_frame: 0.0,
        }
    }

    pub fn off_screen(&self) -> bool {
        self.x + self.width < 0
    }

    /// Index of the animation frame to draw.
    pub fn frame_index(&self) -> usize {
        self.animation_frame as usize
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// Everything a run needs.  Cloneable so the pure update functions in
/// `compute` can return a new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub coins: Vec<Coin>,
    pub spawner: Spawner,
    pub score: u32,
    /// Best score of this process; only raised on reset.
    pub high_score: u32,
    pub status: GameStatus,
    /// Set once the game-over sound has been requested for this run.
    pub game_over_sound_played: bool,
    /// Simulated frames in the current run.
    pub frame: u64,
}
