//! The rendering surface seen by the game.
//!
//! Coordinates are logical pixels on an 800×400 canvas; implementations map
//! them onto whatever they actually draw to.

use crate::assets::SpriteFrame;
use crate::collision::Aabb;

/// Logical rectangle; the same shape as a collision box.
pub type Rect = Aabb;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextSize {
    Large,
    Small,
}

pub trait Canvas {
    /// Fill the whole canvas, discarding the previous frame.
    fn clear(&mut self, color: Rgb);

    fn fill_rect(&mut self, rect: Rect, color: Rgb);

    fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Rgb);

    /// Stretch a sprite frame over `rect`. Blank glyphs are transparent.
    fn blit(&mut self, rect: Rect, frame: &SpriteFrame, color: Rgb);

    /// Text with its top-left corner at (x, y).
    fn text(&mut self, x: i32, y: i32, text: &str, size: TextSize, color: Rgb);

    /// Show everything drawn since the last `clear`.
    fn present(&mut self) -> std::io::Result<()>;

    /// The physical surface changed size.
    fn resize(&mut self, _cols: u16, _rows: u16) {}
}
