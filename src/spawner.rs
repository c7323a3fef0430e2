//! Timed emission of obstacles and coins.
//!
//! Two independent frame counters. The obstacle interval shrinks by one
//! frame after every obstacle until it reaches the floor; the coin interval
//! is constant.

use rand::Rng;

use crate::consts::*;
use crate::entities::{Coin, Obstacle};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Spawner {
    pub obstacle_timer: u32,
    pub coin_timer: u32,
    /// Current frames-between-obstacles; non-increasing during a run.
    pub obstacle_interval: u32,
}

impl Default for Spawner {
    fn default() -> Self {
        Self {
            obstacle_timer: 0,
            coin_timer: 0,
            obstacle_interval: OBSTACLE_INTERVAL_START,
        }
    }
}

/// Which entity kinds are due this frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpawnDue {
    pub obstacle: bool,
    pub coin: bool,
}

impl Spawner {
    /// Advance both timers by one frame and report what is due.
    pub fn advance(&self) -> (Spawner, SpawnDue) {
        let mut next = self.clone();
        let mut due = SpawnDue::default();

        next.obstacle_timer += 1;
        if next.obstacle_timer >= next.obstacle_interval {
            due.obstacle = true;
            next.obstacle_timer = 0;
            next.obstacle_interval = next
                .obstacle_interval
                .saturating_sub(1)
                .max(OBSTACLE_INTERVAL_FLOOR);
        }

        next.coin_timer += 1;
        if next.coin_timer >= COIN_INTERVAL {
            due.coin = true;
            next.coin_timer = 0;
        }

        (next, due)
    }
}

/// A new obstacle at the right edge with a random height.
pub fn spawn_obstacle(rng: &mut impl Rng) -> Obstacle {
    let height = rng.gen_range(OBSTACLE_MIN_HEIGHT..=OBSTACLE_MAX_HEIGHT);
    Obstacle::new(SCREEN_WIDTH, height)
}

/// A new coin at the right edge somewhere in the air band.
pub fn spawn_coin(rng: &mut impl Rng) -> Coin {
    let y = rng.gen_range(COIN_MIN_Y..=COIN_MAX_Y);
    Coin::new(SCREEN_WIDTH, y)
}
