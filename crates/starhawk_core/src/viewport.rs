//! World framing. The vertical world extent is fixed; the horizontal
//! extent follows the surface aspect ratio. Resizes replace the
//! viewport and nothing else.

use thiserror::Error;

use crate::math::Vec2;

pub const WORLD_HALF_HEIGHT: f32 = 100.0;

/// Pointer-to-world tuning: a full normalized sweep maps to a bit less
/// than the playfield width so the ship stays comfortably reachable.
const POINTER_WORLD_SCALE_X: f32 = 65.0;
const POINTER_WORLD_SCALE_Y: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ViewportError {
    #[error("surface dimensions must be positive, got {width}x{height}")]
    NonPositiveSurface { width: u32, height: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    half_width: f32,
    half_height: f32,
}

impl Viewport {
    pub fn from_surface(width: u32, height: u32) -> Result<Self, ViewportError> {
        if width == 0 || height == 0 {
            return Err(ViewportError::NonPositiveSurface { width, height });
        }
        let aspect = width as f32 / height as f32;
        Ok(Self {
            half_width: WORLD_HALF_HEIGHT * aspect,
            half_height: WORLD_HALF_HEIGHT,
        })
    }

    pub fn half_width(&self) -> f32 {
        self.half_width
    }

    pub fn half_height(&self) -> f32 {
        self.half_height
    }

    /// Maps a normalized pointer position into world coordinates.
    pub fn pointer_to_world(&self, normalized: Vec2) -> Vec2 {
        Vec2 {
            x: normalized.x * POINTER_WORLD_SCALE_X,
            y: normalized.y * POINTER_WORLD_SCALE_Y,
        }
    }
}
