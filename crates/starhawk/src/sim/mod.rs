//! The Starhawk simulation: entity managers, timed power-up effects,
//! the per-frame session orchestrator, and the lifecycle host that the
//! embedding shell drives.
//!
//! Composed from per-concern files sharing one module so the session
//! can reach manager internals during collision resolution without a
//! web of accessors.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use starhawk_core::{
    distance, smoothing_factor, usable_frame_delta, PointerSnapshot, SceneSink, ScoreStore, Vec2,
    Viewport, ViewportError, VisualDesc, VisualId, VisualShape,
};
use thiserror::Error;
use tracing::{debug, info, warn};

// World framing. Entities live and die inside a square playfield; the
// viewport only decides what of it is visible.
const WORLD_EDGE: f32 = 110.0;
const SPAWN_HALF_RANGE: f32 = 90.0;

// Player tuning.
const PLAYER_BOUND_X: f32 = 95.0;
const PLAYER_BOUND_Y_MIN: f32 = -90.0;
const PLAYER_BOUND_Y_MAX: f32 = 90.0;
const PLAYER_LERP_RATE: f32 = 15.0;
const PLAYER_HIT_RADIUS: f32 = 4.0;
// The pickup check treats the ship as a little larger than its hull.
const PLAYER_PICKUP_PAD: f32 = 5.0;
const PLAYER_COLOR: u32 = 0x00ffff;

// Bullets.
const BULLET_SPEED: f32 = 200.0;
const BULLET_RADIUS: f32 = 1.0;
const BULLET_COLOR: u32 = 0x00ffff;
const DEFAULT_FIRE_RATE_SECONDS: f32 = 0.15;
const RAPID_FIRE_RATE_SECONDS: f32 = 0.06;
const SPREAD_ANGLE_RADIANS: f32 = 0.3;
const MUZZLE_OFFSET: f32 = 5.0;

// Enemies.
const ENEMY_BASE_SPEED: f32 = 30.0;
const ENEMY_RADIUS: f32 = 5.0;
const ENEMY_BASE_SPAWN_INTERVAL_SECONDS: f32 = 1.5;
const ENEMY_SPEED_BONUS_MAX: f32 = 20.0;
const ENEMY_ROTATION_SPEED_MAX: f32 = 4.0;
const ENEMY_PALETTE: [u32; 3] = [0xff0000, 0xff6600, 0xff9900];

// Power-ups.
const POWER_UP_SPAWN_INTERVAL_SECONDS: f32 = 10.0;
const POWER_UP_SPEED: f32 = 25.0;
const POWER_UP_RADIUS: f32 = 3.0;
const POWER_UP_SPIN_RATE: f32 = 2.0;
const POWER_UP_DROP_CHANCE: f64 = 0.08;

// Explosions.
const PARTICLE_COUNT_PER_BURST: usize = 15;
const PARTICLE_GRAVITY: f32 = 50.0;
const PARTICLE_MIN_SPEED: f32 = 15.0;
const PARTICLE_SPEED_RANGE: f32 = 40.0;
const PARTICLE_MIN_SIZE: f32 = 0.5;
const PARTICLE_SIZE_RANGE: f32 = 1.5;
const PARTICLE_MIN_LIFETIME_SECONDS: f32 = 0.6;
const PARTICLE_LIFETIME_RANGE_SECONDS: f32 = 0.4;
const PARTICLE_MAX_OPACITY: f32 = 0.9;
const PARTICLE_PALETTE: [u32; 3] = [0xff0000, 0xff6600, 0xffff00];
const FLASH_EXPAND_PER_SECOND: f32 = 90.0;
const FLASH_FADE_PER_SECOND: f32 = 9.0;

// Difficulty ramps in steps as the score grows.
const DIFFICULTY_SCORE_STEP: u64 = 5;
const DIFFICULTY_STEP: f32 = 0.15;

include!("types.rs");
include!("player.rs");
include!("bullets.rs");
include!("enemies.rs");
include!("powerups.rs");
include!("explosions.rs");
include!("session.rs");
include!("host.rs");
