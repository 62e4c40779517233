#[derive(Debug, Error)]
pub(crate) enum HostError {
    #[error(transparent)]
    Viewport(#[from] ViewportError),
    #[error("score store already consumed by a previous session")]
    StoreAlreadyConsumed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LifecycleState {
    WaitingForDimensions,
    Initializing,
    Ready,
    GameOver,
    Error,
}

/// Lifecycle wrapper the embedding shell talks to. Owns the one-shot
/// initialization guard and keeps frames from reaching a session that
/// is not ready for them.
pub(crate) struct GameHost {
    state: LifecycleState,
    init_attempted: bool,
    pending_store: Option<Box<dyn ScoreStore>>,
    session: Option<GameSession>,
    rng_seed: Option<u64>,
}

impl GameHost {
    pub(crate) fn new(store: Box<dyn ScoreStore>) -> Self {
        Self {
            state: LifecycleState::WaitingForDimensions,
            init_attempted: false,
            pending_store: Some(store),
            session: None,
            rng_seed: None,
        }
    }

    /// Fixes the simulation seed; without it each session draws from
    /// entropy.
    pub(crate) fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Surface measurements drive two things: the first valid one
    /// triggers the one-shot initialization, later ones only reframe.
    pub(crate) fn notify_surface_size(
        &mut self,
        width: u32,
        height: u32,
        sink: &mut dyn SceneSink,
    ) {
        if let Some(session) = self.session.as_mut() {
            match Viewport::from_surface(width, height) {
                Ok(viewport) => session.set_viewport(viewport),
                Err(error) => warn!(error = %error, "resize_rejected"),
            }
            return;
        }
        if width == 0 || height == 0 {
            // Not yet measurable; keep waiting.
            return;
        }
        if self.init_attempted {
            return;
        }
        self.initialize(width, height, sink);
    }

    fn initialize(&mut self, width: u32, height: u32, sink: &mut dyn SceneSink) {
        self.state = LifecycleState::Initializing;
        self.init_attempted = true;
        match self.build_session(width, height, sink) {
            Ok(session) => {
                self.session = Some(session);
                self.state = LifecycleState::Ready;
                info!(width, height, "session_initialized");
            }
            Err(error) => {
                // Guard cleared so a later notification may retry.
                self.state = LifecycleState::Error;
                self.init_attempted = false;
                warn!(error = %error, "session_initialization_failed");
            }
        }
    }

    fn build_session(
        &mut self,
        width: u32,
        height: u32,
        sink: &mut dyn SceneSink,
    ) -> Result<GameSession, HostError> {
        let viewport = Viewport::from_surface(width, height)?;
        let store = self
            .pending_store
            .take()
            .ok_or(HostError::StoreAlreadyConsumed)?;
        let rng = match self.rng_seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Ok(GameSession::new(viewport, store, rng, sink))
    }

    /// No-op outside `Ready`.
    pub(crate) fn frame(
        &mut self,
        delta_seconds: f32,
        pointer: &PointerSnapshot,
        sink: &mut dyn SceneSink,
    ) {
        if self.state != LifecycleState::Ready {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.update(delta_seconds, pointer, sink);
        if session.is_game_over() {
            self.state = LifecycleState::GameOver;
        }
    }

    /// Valid only from `GameOver`.
    pub(crate) fn restart(&mut self, sink: &mut dyn SceneSink) {
        if self.state != LifecycleState::GameOver {
            return;
        }
        if let Some(session) = self.session.as_mut() {
            session.restart(sink);
            self.state = LifecycleState::Ready;
        }
    }

    /// Disposes the session and returns to `WaitingForDimensions`,
    /// recovering the store so a later initialization can reuse it.
    pub(crate) fn teardown(&mut self, sink: &mut dyn SceneSink) {
        if let Some(session) = self.session.take() {
            self.pending_store = Some(session.dispose(sink));
            info!("session_torn_down");
        }
        self.state = LifecycleState::WaitingForDimensions;
        self.init_attempted = false;
    }

    pub(crate) fn state(&self) -> LifecycleState {
        self.state
    }

    pub(crate) fn score(&self) -> Option<u64> {
        self.session.as_ref().map(GameSession::score)
    }

    pub(crate) fn high_score(&self) -> Option<u64> {
        self.session.as_ref().map(GameSession::high_score)
    }
}
