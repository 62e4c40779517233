/// Cosmetic particle bursts and flashes. Nothing in here feeds back
/// into collisions or scoring.
#[derive(Debug)]
struct ExplosionManager {
    particles: Vec<Particle>,
    flashes: Vec<Flash>,
}

impl ExplosionManager {
    fn new() -> Self {
        Self {
            particles: Vec::new(),
            flashes: Vec::new(),
        }
    }

    fn create_explosion(
        &mut self,
        position: Vec2,
        color: u32,
        rng: &mut impl Rng,
        sink: &mut dyn SceneSink,
    ) {
        for _ in 0..PARTICLE_COUNT_PER_BURST {
            let palette_color = PARTICLE_PALETTE[rng.gen_range(0..PARTICLE_PALETTE.len())];
            let size = PARTICLE_MIN_SIZE + rng.gen::<f32>() * PARTICLE_SIZE_RANGE;
            let angle = rng.gen::<f32>() * std::f32::consts::TAU;
            let speed = PARTICLE_MIN_SPEED + rng.gen::<f32>() * PARTICLE_SPEED_RANGE;
            let visual = sink.add(&VisualDesc {
                shape: VisualShape::Polygon {
                    radius: size,
                    sides: 6,
                },
                color: palette_color,
                debug_name: "particle",
            });
            self.particles.push(Particle {
                position,
                velocity: Vec2 {
                    x: angle.cos() * speed,
                    y: angle.sin() * speed,
                },
                rotation_radians: 0.0,
                rotation_speed: (rng.gen::<f32>() - 0.5) * 10.0,
                age_seconds: 0.0,
                lifetime_seconds: PARTICLE_MIN_LIFETIME_SECONDS
                    + rng.gen::<f32>() * PARTICLE_LIFETIME_RANGE_SECONDS,
                opacity: PARTICLE_MAX_OPACITY,
                visual,
            });
        }
        self.create_flash(position, color, sink);
    }

    fn create_flash(&mut self, position: Vec2, color: u32, sink: &mut dyn SceneSink) {
        let visual = sink.add(&VisualDesc {
            shape: VisualShape::Polygon {
                radius: 1.0,
                sides: 16,
            },
            color,
            debug_name: "flash",
        });
        self.flashes.push(Flash {
            position,
            scale: 1.0,
            opacity: PARTICLE_MAX_OPACITY,
            visual,
        });
    }

    /// Short expanding ring marking a power-up pickup.
    fn create_pickup_flash(&mut self, position: Vec2, color: u32, sink: &mut dyn SceneSink) {
        let visual = sink.add(&VisualDesc {
            shape: VisualShape::Ring {
                inner: 1.0,
                outer: 2.0,
            },
            color,
            debug_name: "pickup_flash",
        });
        self.flashes.push(Flash {
            position,
            scale: 1.0,
            opacity: 0.8,
            visual,
        });
    }

    fn update(&mut self, delta_seconds: f32, sink: &mut dyn SceneSink) {
        for index in (0..self.particles.len()).rev() {
            let expired = {
                let particle = &mut self.particles[index];
                particle.age_seconds += delta_seconds;
                if particle.age_seconds >= particle.lifetime_seconds {
                    true
                } else {
                    particle.position.x += particle.velocity.x * delta_seconds;
                    particle.position.y += particle.velocity.y * delta_seconds;
                    particle.velocity.y -= PARTICLE_GRAVITY * delta_seconds;
                    particle.rotation_radians += particle.rotation_speed * delta_seconds;
                    particle.opacity = (1.0 - particle.age_seconds / particle.lifetime_seconds)
                        * PARTICLE_MAX_OPACITY;
                    false
                }
            };
            if expired {
                let particle = self.particles.remove(index);
                sink.remove(particle.visual);
            }
        }

        for index in (0..self.flashes.len()).rev() {
            let faded = {
                let flash = &mut self.flashes[index];
                flash.scale += FLASH_EXPAND_PER_SECOND * delta_seconds;
                flash.opacity -= FLASH_FADE_PER_SECOND * delta_seconds;
                flash.opacity <= 0.0
            };
            if faded {
                let flash = self.flashes.remove(index);
                sink.remove(flash.visual);
            }
        }
    }

    fn clear_all(&mut self, sink: &mut dyn SceneSink) {
        for particle in self.particles.drain(..) {
            sink.remove(particle.visual);
        }
        for flash in self.flashes.drain(..) {
            sink.remove(flash.visual);
        }
    }

    fn particle_count(&self) -> usize {
        self.particles.len()
    }

    fn flash_count(&self) -> usize {
        self.flashes.len()
    }
}
