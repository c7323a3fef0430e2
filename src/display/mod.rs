//! Rendering layer.
//!
//! Each function receives a canvas and an immutable view of the game state.
//! No game logic is performed; this module only translates state into draw
//! calls.

pub mod canvas;
pub mod terminal;

pub use canvas::{Canvas, Rect, Rgb, TextSize};
pub use terminal::TerminalCanvas;

use crate::assets::{Asset, Sprites};
use crate::consts::*;
use crate::entities::{Coin, GameState, GameStatus, Obstacle, Player};

// ── Colour palette ────────────────────────────────────────────────────────────

pub const SKY_BLUE: Rgb = Rgb(135, 206, 235);
pub const BROWN: Rgb = Rgb(139, 69, 19);
pub const WHITE: Rgb = Rgb(255, 255, 255);
pub const RED: Rgb = Rgb(255, 0, 0);
pub const BLUE: Rgb = Rgb(0, 0, 255);
pub const GREEN: Rgb = Rgb(0, 255, 0);
pub const YELLOW: Rgb = Rgb(255, 215, 0);

pub const GAME_OVER_TEXT: &str = "Game Over! Press R to restart";
pub const INSTRUCTIONS_TEXT: &str = "Press SPACE to jump over obstacles and collect coins!";

// ── Public entry point ────────────────────────────────────────────────────────

/// Render and present one complete frame.
pub fn render<C: Canvas>(canvas: &mut C, state: &GameState, sprites: &Sprites) -> std::io::Result<()> {
    canvas.clear(SKY_BLUE);
    canvas.fill_rect(Rect::new(0, GROUND_Y, SCREEN_WIDTH, GROUND_HEIGHT), BROWN);

    for coin in &state.coins {
        draw_coin(canvas, coin, sprites);
    }
    for obstacle in &state.obstacles {
        draw_obstacle(canvas, obstacle, sprites);
    }
    draw_player(canvas, &state.player, sprites);

    draw_hud(canvas, state);

    if state.status == GameStatus::GameOver {
        canvas.text(
            SCREEN_WIDTH / 2 - 150,
            SCREEN_HEIGHT / 2 - 18,
            GAME_OVER_TEXT,
            TextSize::Large,
            WHITE,
        );
    } else if state.obstacles.is_empty() {
        canvas.text(
            SCREEN_WIDTH / 2 - 200,
            SCREEN_HEIGHT / 2 - 50,
            INSTRUCTIONS_TEXT,
            TextSize::Small,
            WHITE,
        );
    }

    canvas.present()
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player<C: Canvas>(canvas: &mut C, p: &Player, sprites: &Sprites) {
    let body = Rect::new(p.x, p.y, p.width, p.height);
    match &sprites.player {
        Asset::Available(sprite) => canvas.blit(body, sprite.frame(0), RED),
        Asset::Fallback => {
            canvas.fill_rect(body, RED);
            // Eye
            canvas.fill_rect(Rect::new(p.x + 25, p.y + 10, 10, 5), BLUE);
            // Mustache
            canvas.fill_rect(Rect::new(p.x + 10, p.y + 30, 20, 5), BROWN);
        }
    }
}

fn draw_obstacle<C: Canvas>(canvas: &mut C, o: &Obstacle, sprites: &Sprites) {
    let body = Rect::new(o.x, o.y, o.width, o.height);
    match &sprites.obstacle {
        Asset::Available(sprite) => canvas.blit(body, sprite.frame(0), GREEN),
        Asset::Fallback => {
            canvas.fill_rect(body, GREEN);
            // Pipe cap, slightly wider than the body
            canvas.fill_rect(Rect::new(o.x - 5, o.y, o.width + 10, 10), GREEN);
        }
    }
}

fn draw_coin<C: Canvas>(canvas: &mut C, coin: &Coin, sprites: &Sprites) {
    if coin.collected {
        return;
    }
    match &sprites.coin {
        Asset::Available(sprite) => canvas.blit(
            Rect::new(coin.x, coin.y, coin.width, coin.height),
            sprite.frame(coin.frame_index()),
            YELLOW,
        ),
        Asset::Fallback => canvas.fill_circle(
            coin.x + coin.width / 2,
            coin.y + coin.height / 2,
            coin.width / 2,
            YELLOW,
        ),
    }
}

// ── HUD ───────────────────────────────────────────────────────────────────────

fn draw_hud<C: Canvas>(canvas: &mut C, state: &GameState) {
    canvas.text(10, 10, &format!("Score: {}", state.score), TextSize::Large, WHITE);
    canvas.text(
        10,
        40,
        &format!("High Score: {}", state.high_score),
        TextSize::Small,
        WHITE,
    );
}
