//! The rendering collaborator seam. The simulation announces spawns
//! and retirements through `SceneSink` and never reads back; a real
//! renderer tracks entity transforms by polling the pools each frame.

use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisualId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VisualShape {
    /// Regular polygon outline.
    Polygon { radius: f32, sides: u32 },
    /// Annulus, used for shields and pickup flashes.
    Ring { inner: f32, outer: f32 },
    /// The player ship silhouette.
    Ship,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VisualDesc {
    pub shape: VisualShape,
    /// Packed 0xRRGGBB.
    pub color: u32,
    pub debug_name: &'static str,
}

pub trait SceneSink {
    /// Registers a visual and returns its handle.
    fn add(&mut self, desc: &VisualDesc) -> VisualId;
    /// Retires a visual and releases its resources. Must tolerate
    /// handles it has already retired.
    fn remove(&mut self, id: VisualId);
}

/// Discards everything; for headless runs.
#[derive(Debug, Default)]
pub struct NullSink {
    next: u64,
}

impl SceneSink for NullSink {
    fn add(&mut self, _desc: &VisualDesc) -> VisualId {
        let id = VisualId(self.next);
        self.next += 1;
        id
    }

    fn remove(&mut self, _id: VisualId) {}
}

/// Tracks live visuals so tests can assert that every spawn is paired
/// with a retirement.
#[derive(Debug, Default)]
pub struct RecordingSink {
    next: u64,
    live: HashSet<VisualId>,
    added_total: u64,
    removed_total: u64,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn added_total(&self) -> u64 {
        self.added_total
    }

    pub fn removed_total(&self) -> u64 {
        self.removed_total
    }

    pub fn is_live(&self, id: VisualId) -> bool {
        self.live.contains(&id)
    }
}

impl SceneSink for RecordingSink {
    fn add(&mut self, _desc: &VisualDesc) -> VisualId {
        let id = VisualId(self.next);
        self.next += 1;
        self.live.insert(id);
        self.added_total += 1;
        id
    }

    fn remove(&mut self, id: VisualId) {
        if self.live.remove(&id) {
            self.removed_total += 1;
        }
    }
}
