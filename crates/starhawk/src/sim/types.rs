#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FirePolicy {
    Single,
    Spread,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EffectKind {
    RapidFire,
    SpreadShot,
    Shield,
}

impl EffectKind {
    const ALL: [EffectKind; 3] = [
        EffectKind::RapidFire,
        EffectKind::SpreadShot,
        EffectKind::Shield,
    ];

    fn duration_seconds(self) -> f32 {
        match self {
            EffectKind::RapidFire => 5.0,
            EffectKind::SpreadShot => 6.0,
            EffectKind::Shield => 8.0,
        }
    }

    fn color(self) -> u32 {
        match self {
            EffectKind::RapidFire => 0xffff00,
            EffectKind::SpreadShot => 0xff00ff,
            EffectKind::Shield => 0x00ff00,
        }
    }
}

/// The state change that undoes an applied power-up. A plain value so
/// expiry, re-application, and clearing are all inspectable.
#[derive(Debug, Clone, Copy, PartialEq)]
enum EffectRevert {
    /// Restore the fire rate observed when the boost was applied.
    RestoreFireRate(f32),
    SingleFire,
    DropShield,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ActiveEffect {
    kind: EffectKind,
    revert: EffectRevert,
    remaining_seconds: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EnemyShape {
    Triangle,
    Square,
    Hexagon,
}

impl EnemyShape {
    const ALL: [EnemyShape; 3] = [EnemyShape::Triangle, EnemyShape::Square, EnemyShape::Hexagon];

    fn sides(self) -> u32 {
        match self {
            EnemyShape::Triangle => 3,
            EnemyShape::Square => 4,
            EnemyShape::Hexagon => 6,
        }
    }
}

#[derive(Debug)]
struct Bullet {
    position: Vec2,
    velocity: Vec2,
    radius: f32,
    visual: VisualId,
}

#[derive(Debug)]
struct Enemy {
    position: Vec2,
    radius: f32,
    speed_bonus: f32,
    rotation_radians: f32,
    rotation_speed: f32,
    color: u32,
    visual: VisualId,
}

#[derive(Debug)]
struct PowerUp {
    position: Vec2,
    rotation_radians: f32,
    kind: EffectKind,
    visual: VisualId,
}

#[derive(Debug)]
struct Particle {
    position: Vec2,
    velocity: Vec2,
    rotation_radians: f32,
    rotation_speed: f32,
    age_seconds: f32,
    lifetime_seconds: f32,
    opacity: f32,
    visual: VisualId,
}

#[derive(Debug)]
struct Flash {
    position: Vec2,
    scale: f32,
    opacity: f32,
    visual: VisualId,
}

fn difficulty_for_score(score: u64) -> f32 {
    1.0 + (score / DIFFICULTY_SCORE_STEP) as f32 * DIFFICULTY_STEP
}
