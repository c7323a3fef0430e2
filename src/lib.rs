//! Super Jumper - a terminal side-scroller.
//!
//! Core modules:
//! - `entities`: plain game data (player, obstacles, coins, run state)
//! - `compute`: pure per-frame logic (kinematics, tick, jump, reset)
//! - `collision`: axis-aligned bounding boxes
//! - `spawner`: timed obstacle/coin emission and the difficulty ramp
//! - `display`: canvas abstraction, terminal canvas, frame rendering
//! - `input`, `audio`, `clock`: the remaining loop collaborators
//! - `game_loop`: orchestrates one session

pub mod assets;
pub mod audio;
pub mod clock;
pub mod collision;
pub mod compute;
pub mod display;
pub mod entities;
pub mod error;
pub mod game_loop;
pub mod input;
pub mod settings;
pub mod spawner;

pub use error::GameError;
pub use settings::Settings;

/// Gameplay tuning. Logical pixels and frames throughout.
pub mod consts {
    /// Logical canvas size.
    pub const SCREEN_WIDTH: i32 = 800;
    pub const SCREEN_HEIGHT: i32 = 400;
    /// Height of the ground strip at the bottom of the canvas.
    pub const GROUND_HEIGHT: i32 = 40;
    /// Top edge of the ground strip.
    pub const GROUND_Y: i32 = SCREEN_HEIGHT - GROUND_HEIGHT;

    pub const PLAYER_X: i32 = 100;
    pub const PLAYER_WIDTH: i32 = 40;
    pub const PLAYER_HEIGHT: i32 = 60;
    /// Player y while standing on the ground.
    pub const PLAYER_REST_Y: i32 = GROUND_Y - PLAYER_HEIGHT;
    /// Downward acceleration, px/frame².
    pub const GRAVITY: i32 = 1;
    /// Upward speed applied at the start of a jump, px/frame.
    pub const JUMP_IMPULSE: i32 = 15;

    /// Horizontal scroll speed shared by obstacles and coins, px/frame.
    pub const SCROLL_SPEED: i32 = 5;

    pub const OBSTACLE_WIDTH: i32 = 50;
    pub const OBSTACLE_MIN_HEIGHT: i32 = 50;
    pub const OBSTACLE_MAX_HEIGHT: i32 = 90;

    pub const COIN_SIZE: i32 = 25;
    /// Vertical band coins spawn in (inclusive).
    pub const COIN_MIN_Y: i32 = SCREEN_HEIGHT - 150;
    pub const COIN_MAX_Y: i32 = SCREEN_HEIGHT - 80;
    pub const COIN_ANIMATION_STEP: f32 = 0.1;
    pub const COIN_ANIMATION_FRAMES: f32 = 4.0;

    /// Frames between obstacles at the start of a run.
    pub const OBSTACLE_INTERVAL_START: u32 = 120;
    /// The obstacle interval never drops below this.
    pub const OBSTACLE_INTERVAL_FLOOR: u32 = 60;
    /// Frames between coins.
    pub const COIN_INTERVAL: u32 = 180;

    pub const OBSTACLE_SCORE: u32 = 1;
    pub const COIN_SCORE: u32 = 5;
}
