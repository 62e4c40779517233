//! Minimal 2D math. The world is small enough that `f32` and a couple
//! of free functions cover everything the simulation needs.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

pub fn distance_sq(a: Vec2, b: Vec2) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

pub fn distance(a: Vec2, b: Vec2) -> f32 {
    distance_sq(a, b).sqrt()
}

/// Frame-rate independent smoothing: the fraction of remaining
/// distance to cover this frame, for a given responsiveness `rate`.
pub fn smoothing_factor(rate: f32, delta_seconds: f32) -> f32 {
    1.0 - (-rate * delta_seconds).exp()
}
