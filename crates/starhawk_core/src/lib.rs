//! Simulation substrate for the Starhawk shooter: geometry, frame
//! timing, pointer input, viewport framing, the scene-sink seam the
//! renderer plugs into, and the persistent score store.
//!
//! Nothing in this crate knows about bullets or enemies; the game
//! crate composes these pieces into a session.

pub mod clock;
pub mod input;
pub mod math;
pub mod sink;
pub mod store;
pub mod viewport;

pub use clock::{
    usable_frame_delta, FrameClock, ManualClock, SystemClock, MAX_FRAME_DELTA_SECONDS,
};
pub use input::PointerSnapshot;
pub use math::{distance, distance_sq, smoothing_factor, Vec2};
pub use sink::{NullSink, RecordingSink, SceneSink, VisualDesc, VisualId, VisualShape};
pub use store::{JsonFileScoreStore, MemoryScoreStore, ScoreStore};
pub use viewport::{Viewport, ViewportError, WORLD_HALF_HEIGHT};
