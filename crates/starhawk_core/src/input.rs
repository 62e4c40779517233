//! Pointer input snapshot, captured once per frame by the embedding
//! shell and handed to the simulation as a value.

use crate::math::Vec2;

/// Per-frame pointer state. The position is normalized to `[-1, 1]` on
/// both axes; `None` means the pointer is off the surface.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSnapshot {
    position_normalized: Option<Vec2>,
    fire_held: bool,
}

impl PointerSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_position_normalized(mut self, position: Option<Vec2>) -> Self {
        self.position_normalized = position;
        self
    }

    pub fn with_fire_held(mut self, fire_held: bool) -> Self {
        self.fire_held = fire_held;
        self
    }

    pub fn position_normalized(&self) -> Option<Vec2> {
        self.position_normalized
    }

    pub fn fire_held(&self) -> bool {
        self.fire_held
    }
}
