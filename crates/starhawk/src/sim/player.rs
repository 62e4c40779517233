/// The player ship: smoothed pointer-chasing movement inside fixed
/// bounds, plus the shield flag and its ring visual.
#[derive(Debug)]
struct Player {
    position: Vec2,
    shield_active: bool,
    ship_visual: VisualId,
    shield_visual: Option<VisualId>,
}

impl Player {
    fn new(sink: &mut dyn SceneSink) -> Self {
        let ship_visual = sink.add(&VisualDesc {
            shape: VisualShape::Ship,
            color: PLAYER_COLOR,
            debug_name: "player_ship",
        });
        Self {
            position: Vec2::ZERO,
            shield_active: false,
            ship_visual,
            shield_visual: None,
        }
    }

    fn update(&mut self, delta_seconds: f32, pointer_world: Option<Vec2>) {
        if let Some(target) = pointer_world {
            let factor = smoothing_factor(PLAYER_LERP_RATE, delta_seconds);
            self.position.x += (target.x - self.position.x) * factor;
            self.position.y += (target.y - self.position.y) * factor;
        }
        self.position.x = self.position.x.clamp(-PLAYER_BOUND_X, PLAYER_BOUND_X);
        self.position.y = self.position.y.clamp(PLAYER_BOUND_Y_MIN, PLAYER_BOUND_Y_MAX);
    }

    /// Idempotent: repeated activation keeps the one shield ring.
    fn set_shield_active(&mut self, active: bool, sink: &mut dyn SceneSink) {
        self.shield_active = active;
        match (active, self.shield_visual) {
            (true, None) => {
                self.shield_visual = Some(sink.add(&VisualDesc {
                    shape: VisualShape::Ring {
                        inner: 6.0,
                        outer: 7.0,
                    },
                    color: EffectKind::Shield.color(),
                    debug_name: "player_shield",
                }));
            }
            (false, Some(visual)) => {
                sink.remove(visual);
                self.shield_visual = None;
            }
            _ => {}
        }
    }

    fn reset(&mut self, sink: &mut dyn SceneSink) {
        self.position = Vec2::ZERO;
        self.set_shield_active(false, sink);
    }

    fn dispose(&mut self, sink: &mut dyn SceneSink) {
        self.set_shield_active(false, sink);
        sink.remove(self.ship_visual);
    }
}
