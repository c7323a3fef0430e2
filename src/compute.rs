//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` (and, where needed, an RNG handle) and returns a brand-new
//! `GameState` plus the `GameEvent`s the step produced.  Side effects are
//! limited to the injected RNG.

use rand::Rng;

use crate::collision::collides;
use crate::consts::*;
use crate::entities::{Coin, GameEvent, GameState, GameStatus, Obstacle, Player};
use crate::spawner::{spawn_coin, spawn_obstacle, Spawner};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the state for a fresh run, carrying over the process high score.
pub fn init_state(high_score: u32) -> GameState {
    GameState {
        player: Player::new(),
        obstacles: Vec::new(),
        coins: Vec::new(),
        spawner: Spawner::default(),
        score: 0,
        high_score,
        status: GameStatus::Playing,
        game_over_sound_played: false,
        frame: 0,
    }
}

// ── Entity kinematics ────────────────────────────────────────────────────────

/// Start a jump. `None` when the player is already in the air.
pub fn player_jump(player: &Player) -> Option<Player> {
    if player.airborne {
        return None;
    }
    Some(Player {
        airborne: true,
        vy: -JUMP_IMPULSE,
        ..player.clone()
    })
}

/// One frame of constant-gravity motion. Grounded players do not move.
pub fn player_update(player: &Player) -> Player {
    if !player.airborne {
        return player.clone();
    }

    let y = player.y + player.vy;
    let vy = player.vy + GRAVITY;
    if y >= PLAYER_REST_Y {
        Player {
            y: PLAYER_REST_Y,
            vy: 0,
            airborne: false,
            ..player.clone()
        }
    } else {
        Player {
            y,
            vy,
            ..player.clone()
        }
    }
}

pub fn obstacle_update(obstacle: &Obstacle) -> Obstacle {
    Obstacle {
        x: obstacle.x - SCROLL_SPEED,
        ..obstacle.clone()
    }
}

pub fn coin_update(coin: &Coin) -> Coin {
    Coin {
        x: coin.x - SCROLL_SPEED,
        animation_frame: (coin.animation_frame + COIN_ANIMATION_STEP) % COIN_ANIMATION_FRAMES,
        ..coin.clone()
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Jump request. Ignored once the run is over or while airborne.
pub fn jump(state: &GameState) -> (GameState, Vec<GameEvent>) {
    if state.status == GameStatus::GameOver {
        return (state.clone(), Vec::new());
    }
    match player_jump(&state.player) {
        Some(player) => (
            GameState {
                player,
                ..state.clone()
            },
            vec![GameEvent::Jumped],
        ),
        None => (state.clone(), Vec::new()),
    }
}

/// Leave `GameOver` and start a new run. Ignored while a run is live.
pub fn reset(state: &GameState) -> GameState {
    if state.status == GameStatus::Playing {
        return state.clone();
    }
    init_state(state.high_score.max(state.score))
}

// ── Per-frame tick (nearly pure, RNG is injected) ──────────────────────────

/// Advance the simulation by one frame.  All randomness comes through `rng`
/// so callers control determinism (useful for tests with a seeded RNG).
/// A finished run is returned unchanged.
pub fn tick(state: &GameState, rng: &mut impl Rng) -> (GameState, Vec<GameEvent>) {
    if state.status == GameStatus::GameOver {
        return (state.clone(), Vec::new());
    }

    let mut events = Vec::new();
    let mut score = state.score;
    let mut status = state.status;
    let mut game_over_sound_played = state.game_over_sound_played;

    // ── 1. Player ────────────────────────────────────────────────────────────
    let player = player_update(&state.player);

    // ── 2. Spawn ─────────────────────────────────────────────────────────────
    let (spawner, due) = state.spawner.advance();
    let mut obstacles = state.obstacles.clone();
    if due.obstacle {
        obstacles.push(spawn_obstacle(rng));
    }
    let mut coins = state.coins.clone();
    if due.coin {
        coins.push(spawn_coin(rng));
    }

    // ── 3. Obstacles: move, collide, prune + score in one pass ──────────────
    let mut kept_obstacles = Vec::with_capacity(obstacles.len());
    for obstacle in &obstacles {
        let obstacle = obstacle_update(obstacle);

        if collides(&player, &obstacle) && status == GameStatus::Playing {
            status = GameStatus::GameOver;
            if !game_over_sound_played {
                game_over_sound_played = true;
                events.push(GameEvent::GameOver);
            }
        }

        if obstacle.off_screen() {
            score = score.saturating_add(OBSTACLE_SCORE);
            events.push(GameEvent::ObstacleCleared);
        } else {
            kept_obstacles.push(obstacle);
        }
    }

    // ── 4. Coins: move, collect, prune ──────────────────────────────────────
    let mut kept_coins = Vec::with_capacity(coins.len());
    for coin in &coins {
        let mut coin = coin_update(coin);

        if !coin.collected && collides(&player, &coin) {
            coin.collected = true;
            score = score.saturating_add(COIN_SCORE);
            events.push(GameEvent::CoinCollected);
        }

        if !coin.collected && !coin.off_screen() {
            kept_coins.push(coin);
        }
    }

    let next = GameState {
        player,
        obstacles: kept_obstacles,
        coins: kept_coins,
        spawner,
        score,
        status,
        game_over_sound_played,
        frame: state.frame + 1,
        ..state.clone()
    };
    (next, events)
}
