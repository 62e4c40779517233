/// Enemy pool: spawn cadence scaled by difficulty, straight downward
/// motion, retirement below the playfield.
#[derive(Debug)]
struct EnemyManager {
    enemies: Vec<Enemy>,
    time_since_last_spawn: f32,
    difficulty: f32,
}

impl EnemyManager {
    fn new() -> Self {
        Self {
            enemies: Vec::new(),
            time_since_last_spawn: 0.0,
            difficulty: 1.0,
        }
    }

    fn update(
        &mut self,
        delta_seconds: f32,
        difficulty: f32,
        rng: &mut impl Rng,
        sink: &mut dyn SceneSink,
    ) {
        self.difficulty = difficulty;
        self.time_since_last_spawn += delta_seconds;

        // Overshoot is discarded on spawn, so a difficulty jump can
        // push the next spawn out by up to one full interval.
        let effective_interval = ENEMY_BASE_SPAWN_INTERVAL_SECONDS / self.difficulty;
        if self.time_since_last_spawn >= effective_interval {
            self.spawn_enemy(rng, sink);
            self.time_since_last_spawn = 0.0;
        }

        self.advance_and_retire(delta_seconds, sink);
    }

    fn advance_and_retire(&mut self, delta_seconds: f32, sink: &mut dyn SceneSink) {
        for index in (0..self.enemies.len()).rev() {
            let below_field = {
                let enemy = &mut self.enemies[index];
                enemy.position.y -= (ENEMY_BASE_SPEED + enemy.speed_bonus) * delta_seconds;
                enemy.rotation_radians += enemy.rotation_speed * delta_seconds;
                enemy.position.y < -WORLD_EDGE
            };
            if below_field {
                self.remove_enemy(index, sink);
            }
        }
    }

    fn spawn_enemy(&mut self, rng: &mut impl Rng, sink: &mut dyn SceneSink) {
        let shape = EnemyShape::ALL[rng.gen_range(0..EnemyShape::ALL.len())];
        let color = ENEMY_PALETTE[rng.gen_range(0..ENEMY_PALETTE.len())];
        let x = rng.gen_range(-SPAWN_HALF_RANGE..SPAWN_HALF_RANGE);
        let speed_bonus = rng.gen::<f32>() * ENEMY_SPEED_BONUS_MAX * self.difficulty;
        let rotation_speed = (rng.gen::<f32>() - 0.5) * ENEMY_ROTATION_SPEED_MAX;
        let visual = sink.add(&VisualDesc {
            shape: VisualShape::Polygon {
                radius: ENEMY_RADIUS,
                sides: shape.sides(),
            },
            color,
            debug_name: "enemy",
        });
        self.enemies.push(Enemy {
            position: Vec2 {
                x,
                y: WORLD_EDGE,
            },
            radius: ENEMY_RADIUS,
            speed_bonus,
            rotation_radians: 0.0,
            rotation_speed,
            color,
            visual,
        });
    }

    fn remove_enemy(&mut self, index: usize, sink: &mut dyn SceneSink) {
        if index >= self.enemies.len() {
            return;
        }
        let enemy = self.enemies.remove(index);
        sink.remove(enemy.visual);
    }

    fn clear_all(&mut self, sink: &mut dyn SceneSink) {
        for index in (0..self.enemies.len()).rev() {
            self.remove_enemy(index, sink);
        }
        self.time_since_last_spawn = 0.0;
    }

    fn enemy_count(&self) -> usize {
        self.enemies.len()
    }
}
