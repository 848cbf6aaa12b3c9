//! Collision detection against axis-aligned rectangles
//!
//! Two outcomes per falling object, checked in order: it fell past the floor
//! (miss) or it reached the basket (catch).

use glam::Vec2;

/// Axis-aligned rectangle in canvas space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    /// True once this rect has dropped onto `target`'s top edge while
    /// horizontally overlapping it (edges touching count).
    ///
    /// There is no check against `target`'s bottom: anything that got past
    /// the top edge counts, however deep it has fallen.
    pub fn lands_on(&self, target: &Rect) -> bool {
        self.bottom() >= target.top()
            && self.right() >= target.left()
            && self.left() <= target.right()
    }
}

/// Outcome of checking one falling object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Bottom edge passed the floor
    Miss,
    /// Landed in the basket
    Catch,
}

/// Check a falling object against the floor and then the basket
pub fn check_object(object: &Rect, basket: &Rect, floor_y: f32) -> Option<Collision> {
    if object.bottom() > floor_y {
        return Some(Collision::Miss);
    }
    if object.lands_on(basket) {
        return Some(Collision::Catch);
    }
    None
}
