/// One live game: the entity managers, score state, and the fixed
/// per-frame responsibility order. Collision order is part of the
/// contract: bullet-enemy resolution first, then player-enemy.
pub(crate) struct GameSession {
    player: Player,
    bullets: BulletManager,
    enemies: EnemyManager,
    power_ups: PowerUpManager,
    explosions: ExplosionManager,
    store: Box<dyn ScoreStore>,
    score: u64,
    high_score: u64,
    game_over: bool,
    skipped_frames: u64,
    viewport: Viewport,
    rng: SmallRng,
}

impl GameSession {
    fn new(
        viewport: Viewport,
        mut store: Box<dyn ScoreStore>,
        rng: SmallRng,
        sink: &mut dyn SceneSink,
    ) -> Self {
        let high_score = store.get();
        Self {
            player: Player::new(sink),
            bullets: BulletManager::new(),
            enemies: EnemyManager::new(),
            power_ups: PowerUpManager::new(),
            explosions: ExplosionManager::new(),
            store,
            score: 0,
            high_score,
            game_over: false,
            skipped_frames: 0,
            viewport,
            rng,
        }
    }

    /// Advances the simulation by one frame. Frozen after game over
    /// until an explicit `restart`.
    pub(crate) fn update(
        &mut self,
        delta_seconds: f32,
        pointer: &PointerSnapshot,
        sink: &mut dyn SceneSink,
    ) {
        if self.game_over {
            return;
        }
        let Some(delta) = usable_frame_delta(delta_seconds) else {
            self.skipped_frames = self.skipped_frames.saturating_add(1);
            warn!(
                delta_seconds,
                skipped_frames = self.skipped_frames,
                "anomalous_frame_skipped"
            );
            return;
        };

        let difficulty = difficulty_for_score(self.score);
        let pointer_world = pointer
            .position_normalized()
            .map(|normalized| self.viewport.pointer_to_world(normalized));

        self.player.update(delta, pointer_world);
        self.bullets
            .update(delta, self.player.position, pointer.fire_held(), sink);
        self.enemies.update(delta, difficulty, &mut self.rng, sink);
        self.power_ups.update(
            delta,
            &mut self.bullets,
            &mut self.player,
            &mut self.explosions,
            &mut self.rng,
            sink,
        );
        self.explosions.update(delta, sink);
        self.check_collisions(sink);
    }

    fn check_collisions(&mut self, sink: &mut dyn SceneSink) {
        // Each bullet destroys at most one enemy per frame; reverse
        // iteration keeps indices valid across removals.
        'bullets: for bullet_index in (0..self.bullets.bullets.len()).rev() {
            let (bullet_position, bullet_radius) = {
                let bullet = &self.bullets.bullets[bullet_index];
                (bullet.position, bullet.radius)
            };
            for enemy_index in (0..self.enemies.enemies.len()).rev() {
                let (enemy_position, enemy_radius, enemy_color) = {
                    let enemy = &self.enemies.enemies[enemy_index];
                    (enemy.position, enemy.radius, enemy.color)
                };
                if distance(bullet_position, enemy_position) < bullet_radius + enemy_radius {
                    self.explosions
                        .create_explosion(enemy_position, enemy_color, &mut self.rng, sink);
                    self.enemies.remove_enemy(enemy_index, sink);
                    self.bullets.remove_bullet(bullet_index, sink);
                    self.score = self.score.saturating_add(1);
                    if self.rng.gen_bool(POWER_UP_DROP_CHANCE) {
                        self.power_ups.spawn_power_up(&mut self.rng, sink);
                    }
                    continue 'bullets;
                }
            }
        }

        if self.player.shield_active {
            return;
        }
        for enemy_index in (0..self.enemies.enemies.len()).rev() {
            let (enemy_position, enemy_radius, enemy_color) = {
                let enemy = &self.enemies.enemies[enemy_index];
                (enemy.position, enemy.radius, enemy.color)
            };
            if distance(self.player.position, enemy_position) < enemy_radius + PLAYER_HIT_RADIUS {
                self.explosions
                    .create_explosion(enemy_position, enemy_color, &mut self.rng, sink);
                self.explosions
                    .create_explosion(self.player.position, PLAYER_COLOR, &mut self.rng, sink);
                self.enemies.remove_enemy(enemy_index, sink);
                self.trigger_game_over();
                return;
            }
        }
    }

    fn trigger_game_over(&mut self) {
        self.game_over = true;
        let new_best = self.store.set(self.score);
        if new_best {
            self.high_score = self.store.get();
        }
        info!(
            score = self.score,
            high_score = self.high_score,
            new_best,
            "game_over"
        );
    }

    /// Back to a fresh run on the same session. The game-over flag is
    /// cleared last so no frame observes a live session with stale
    /// pools.
    pub(crate) fn restart(&mut self, sink: &mut dyn SceneSink) {
        self.score = 0;
        self.high_score = self.store.get();
        self.player.reset(sink);
        self.enemies.clear_all(sink);
        self.bullets.clear_all(sink);
        self.power_ups.clear_all(sink);
        self.explosions.clear_all(sink);
        self.game_over = false;
        info!(high_score = self.high_score, "session_restarted");
    }

    /// Replaces only the framing; entity pools are untouched.
    pub(crate) fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Releases every pooled visual and hands the store back.
    fn dispose(mut self, sink: &mut dyn SceneSink) -> Box<dyn ScoreStore> {
        self.enemies.clear_all(sink);
        self.bullets.clear_all(sink);
        self.power_ups.clear_all(sink);
        self.explosions.clear_all(sink);
        self.player.dispose(sink);
        self.store
    }

    pub(crate) fn score(&self) -> u64 {
        self.score
    }

    pub(crate) fn high_score(&self) -> u64 {
        self.high_score
    }

    pub(crate) fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub(crate) fn skipped_frames(&self) -> u64 {
        self.skipped_frames
    }
}
