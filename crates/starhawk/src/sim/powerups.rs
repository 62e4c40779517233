/// Power-up pool plus the timed effects applied by pickups. Effects
/// are explicit records ticked down each frame; expiry runs the revert
/// exactly once, synchronously.
#[derive(Debug)]
struct PowerUpManager {
    power_ups: Vec<PowerUp>,
    time_since_last_spawn: f32,
    active_effects: Vec<ActiveEffect>,
}

impl PowerUpManager {
    fn new() -> Self {
        Self {
            power_ups: Vec::new(),
            time_since_last_spawn: 0.0,
            active_effects: Vec::new(),
        }
    }

    fn update(
        &mut self,
        delta_seconds: f32,
        bullets: &mut BulletManager,
        player: &mut Player,
        explosions: &mut ExplosionManager,
        rng: &mut impl Rng,
        sink: &mut dyn SceneSink,
    ) {
        self.tick_effects(delta_seconds, bullets, player, sink);

        self.time_since_last_spawn += delta_seconds;
        if self.time_since_last_spawn >= POWER_UP_SPAWN_INTERVAL_SECONDS {
            self.spawn_power_up(rng, sink);
            self.time_since_last_spawn = 0.0;
        }

        let pickup_radius = POWER_UP_RADIUS + PLAYER_PICKUP_PAD;
        for index in (0..self.power_ups.len()).rev() {
            let (position, kind) = {
                let power_up = &mut self.power_ups[index];
                power_up.position.y -= POWER_UP_SPEED * delta_seconds;
                power_up.rotation_radians += POWER_UP_SPIN_RATE * delta_seconds;
                (power_up.position, power_up.kind)
            };
            if distance(position, player.position) < pickup_radius {
                self.remove_power_up(index, sink);
                self.apply_power_up(kind, bullets, player, sink);
                explosions.create_pickup_flash(position, kind.color(), sink);
            } else if position.y < -WORLD_EDGE {
                self.remove_power_up(index, sink);
            }
        }
    }

    fn spawn_power_up(&mut self, rng: &mut impl Rng, sink: &mut dyn SceneSink) {
        let kind = EffectKind::ALL[rng.gen_range(0..EffectKind::ALL.len())];
        let x = rng.gen_range(-SPAWN_HALF_RANGE..SPAWN_HALF_RANGE);
        let visual = sink.add(&VisualDesc {
            shape: VisualShape::Polygon {
                radius: POWER_UP_RADIUS,
                sides: 6,
            },
            color: kind.color(),
            debug_name: "power_up",
        });
        self.power_ups.push(PowerUp {
            position: Vec2 {
                x,
                y: WORLD_EDGE,
            },
            rotation_radians: 0.0,
            kind,
            visual,
        });
        debug!(kind = ?kind, x, "power_up_spawned");
    }

    /// At most one live effect per kind: re-application cancels the
    /// pending revert without running it and re-arms the full duration.
    /// The captured revert observes state at this application, so a
    /// RapidFire re-pick captures the already-boosted rate.
    fn apply_power_up(
        &mut self,
        kind: EffectKind,
        bullets: &mut BulletManager,
        player: &mut Player,
        sink: &mut dyn SceneSink,
    ) {
        self.active_effects.retain(|effect| effect.kind != kind);
        let revert = match kind {
            EffectKind::RapidFire => {
                let prior_rate = bullets.fire_rate_seconds;
                bullets.fire_rate_seconds = RAPID_FIRE_RATE_SECONDS;
                EffectRevert::RestoreFireRate(prior_rate)
            }
            EffectKind::SpreadShot => {
                bullets.set_fire_policy(FirePolicy::Spread);
                EffectRevert::SingleFire
            }
            EffectKind::Shield => {
                player.set_shield_active(true, sink);
                EffectRevert::DropShield
            }
        };
        self.active_effects.push(ActiveEffect {
            kind,
            revert,
            remaining_seconds: kind.duration_seconds(),
        });
        info!(kind = ?kind, "power_up_applied");
    }

    fn tick_effects(
        &mut self,
        delta_seconds: f32,
        bullets: &mut BulletManager,
        player: &mut Player,
        sink: &mut dyn SceneSink,
    ) {
        for effect in &mut self.active_effects {
            effect.remaining_seconds -= delta_seconds;
        }
        let mut expired = Vec::new();
        self.active_effects.retain(|effect| {
            if effect.remaining_seconds <= 0.0 {
                expired.push(*effect);
                false
            } else {
                true
            }
        });
        for effect in expired {
            match effect.revert {
                EffectRevert::RestoreFireRate(rate) => bullets.fire_rate_seconds = rate,
                EffectRevert::SingleFire => bullets.set_fire_policy(FirePolicy::Single),
                EffectRevert::DropShield => player.set_shield_active(false, sink),
            }
            debug!(kind = ?effect.kind, "power_up_expired");
        }
    }

    fn remove_power_up(&mut self, index: usize, sink: &mut dyn SceneSink) {
        if index >= self.power_ups.len() {
            return;
        }
        let power_up = self.power_ups.remove(index);
        sink.remove(power_up.visual);
    }

    /// Drops the pool and every pending effect without running the
    /// reverts; callers reset bullet and player state themselves.
    fn clear_all(&mut self, sink: &mut dyn SceneSink) {
        for index in (0..self.power_ups.len()).rev() {
            self.remove_power_up(index, sink);
        }
        self.active_effects.clear();
        self.time_since_last_spawn = 0.0;
    }

    fn has_active_effect(&self, kind: EffectKind) -> bool {
        self.active_effects.iter().any(|effect| effect.kind == kind)
    }

    fn power_up_count(&self) -> usize {
        self.power_ups.len()
    }
}
