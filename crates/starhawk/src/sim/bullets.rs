/// Bullet pool plus the firing cadence. The live fire policy is a
/// plain enum field; swapping it affects only bullets fired afterward.
#[derive(Debug)]
struct BulletManager {
    bullets: Vec<Bullet>,
    fire_rate_seconds: f32,
    time_since_last_shot: f32,
    fire_policy: FirePolicy,
}

impl BulletManager {
    fn new() -> Self {
        Self {
            bullets: Vec::new(),
            fire_rate_seconds: DEFAULT_FIRE_RATE_SECONDS,
            time_since_last_shot: 0.0,
            fire_policy: FirePolicy::Single,
        }
    }

    fn update(
        &mut self,
        delta_seconds: f32,
        player_position: Vec2,
        can_fire: bool,
        sink: &mut dyn SceneSink,
    ) {
        self.time_since_last_shot += delta_seconds;
        if can_fire && self.time_since_last_shot >= self.fire_rate_seconds {
            self.fire(player_position, sink);
            self.time_since_last_shot = 0.0;
        }

        for index in (0..self.bullets.len()).rev() {
            let out_of_bounds = {
                let bullet = &mut self.bullets[index];
                bullet.position.x += bullet.velocity.x * delta_seconds;
                bullet.position.y += bullet.velocity.y * delta_seconds;
                bullet.position.x.abs() > WORLD_EDGE || bullet.position.y.abs() > WORLD_EDGE
            };
            if out_of_bounds {
                self.remove_bullet(index, sink);
            }
        }
    }

    fn fire(&mut self, player_position: Vec2, sink: &mut dyn SceneSink) {
        match self.fire_policy {
            FirePolicy::Single => self.spawn_bullet(player_position, 0.0, sink),
            FirePolicy::Spread => {
                self.spawn_bullet(player_position, 0.0, sink);
                self.spawn_bullet(player_position, -SPREAD_ANGLE_RADIANS, sink);
                self.spawn_bullet(player_position, SPREAD_ANGLE_RADIANS, sink);
            }
        }
    }

    fn spawn_bullet(
        &mut self,
        player_position: Vec2,
        angle_offset_radians: f32,
        sink: &mut dyn SceneSink,
    ) {
        let visual = sink.add(&VisualDesc {
            shape: VisualShape::Polygon {
                radius: BULLET_RADIUS,
                sides: 8,
            },
            color: BULLET_COLOR,
            debug_name: "bullet",
        });
        let position = Vec2 {
            x: player_position.x + MUZZLE_OFFSET * angle_offset_radians.sin(),
            y: player_position.y + MUZZLE_OFFSET * angle_offset_radians.cos() + MUZZLE_OFFSET,
        };
        let velocity = Vec2 {
            x: angle_offset_radians.sin() * BULLET_SPEED,
            y: angle_offset_radians.cos() * BULLET_SPEED,
        };
        self.bullets.push(Bullet {
            position,
            velocity,
            radius: BULLET_RADIUS,
            visual,
        });
    }

    /// Single disposal point; safe under reverse iteration.
    fn remove_bullet(&mut self, index: usize, sink: &mut dyn SceneSink) {
        if index >= self.bullets.len() {
            return;
        }
        let bullet = self.bullets.remove(index);
        sink.remove(bullet.visual);
    }

    fn set_fire_policy(&mut self, policy: FirePolicy) {
        self.fire_policy = policy;
    }

    /// Empties the pool and restores the default cadence: cooldown
    /// accumulator zeroed, fire rate back to default, single fire.
    fn clear_all(&mut self, sink: &mut dyn SceneSink) {
        for index in (0..self.bullets.len()).rev() {
            self.remove_bullet(index, sink);
        }
        self.time_since_last_shot = 0.0;
        self.fire_rate_seconds = DEFAULT_FIRE_RATE_SECONDS;
        self.fire_policy = FirePolicy::Single;
    }

    fn bullet_count(&self) -> usize {
        self.bullets.len()
    }
}
