//! Axis-aligned bounding boxes.

use crate::entities::{Coin, Obstacle, Player};

/// An axis-aligned rectangle in logical pixels (y grows downward).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aabb {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Aabb {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Strict overlap: boxes that only share an edge do not collide.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Free-function form of [`Aabb::overlaps`].
#[inline]
pub fn overlaps(a: &Aabb, b: &Aabb) -> bool {
    a.overlaps(b)
}

/// Anything with a collision box.
pub trait Bounded {
    fn bounds(&self) -> Aabb;
}

impl Bounded for Player {
    fn bounds(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.width, self.height)
    }
}

impl Bounded for Obstacle {
    fn bounds(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.width, self.height)
    }
}

impl Bounded for Coin {
    fn bounds(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.width, self.height)
    }
}

/// True when the two entities' boxes overlap.
pub fn collides(a: &impl Bounded, b: &impl Bounded) -> bool {
    a.bounds().overlaps(&b.bounds())
}
