//! Paces generations under start/stop control.

use super::scheduler::{FrameToken, Scheduler};
use crate::config::DriverConfig;
use crate::domain::Universe;
use crate::error::Result;
use tracing::{debug, info, trace};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DriverState {
    #[default]
    Stopped,
    Running,
}

/// What happened when the host delivered a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The universe advanced; redraw it.
    Advanced { generation: u64 },
    /// Stale or unexpected frame; nothing changed.
    Ignored,
}

/// Drives a `Universe` one paced frame at a time.
///
/// At most one frame request is outstanding. The driver only borrows the
/// universe for the duration of `on_frame`; edits (toggle, reseed, resize)
/// go straight to the universe and are picked up by the next frame.
pub struct Driver<S: Scheduler> {
    scheduler: S,
    state: DriverState,
    pending: Option<FrameToken>,
    steps_per_frame: u32,
    frames_advanced: u64,
}

impl<S: Scheduler> Driver<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            state: DriverState::Stopped,
            pending: None,
            steps_per_frame: DriverConfig::default().steps_per_frame,
            frames_advanced: 0,
        }
    }

    pub fn with_config(scheduler: S, config: &DriverConfig) -> Result<Self> {
        config.validate()?;
        let mut driver = Self::new(scheduler);
        driver.steps_per_frame = config.steps_per_frame;
        Ok(driver)
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == DriverState::Running
    }

    /// The frame this driver is waiting for, if any
    pub fn pending(&self) -> Option<FrameToken> {
        self.pending
    }

    pub fn steps_per_frame(&self) -> u32 {
        self.steps_per_frame
    }

    pub fn frames_advanced(&self) -> u64 {
        self.frames_advanced
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Begin requesting frames. No-op while running.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        self.state = DriverState::Running;
        self.pending = Some(self.scheduler.request());
        info!("driver started");
    }

    /// Cancel the pending frame and stop. No-op while stopped.
    ///
    /// Once this returns no frame can step the universe, even one the host
    /// had already queued: its token no longer matches.
    pub fn stop(&mut self) {
        if !self.is_running() {
            return;
        }
        if let Some(token) = self.pending.take() {
            self.scheduler.cancel(token);
        }
        self.state = DriverState::Stopped;
        info!(frames = self.frames_advanced, "driver stopped");
    }

    pub fn toggle(&mut self) -> DriverState {
        match self.state {
            DriverState::Running => self.stop(),
            DriverState::Stopped => self.start(),
        }
        self.state
    }

    /// Handle a frame delivered by the host.
    pub fn on_frame(&mut self, token: FrameToken, universe: &mut Universe) -> FrameOutcome {
        if !self.is_running() || self.pending != Some(token) {
            trace!(token = token.id(), "ignoring stale frame");
            return FrameOutcome::Ignored;
        }
        self.pending = None;

        for _ in 0..self.steps_per_frame {
            universe.step();
        }
        self.frames_advanced += 1;
        self.pending = Some(self.scheduler.request());

        let generation = universe.generation();
        debug!(generation, "frame advanced");
        FrameOutcome::Advanced { generation }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::FrameQueue;

    /// Scheduler whose cancel does nothing, like a timer that fires anyway.
    #[derive(Default)]
    struct Uncancellable {
        inner: FrameQueue,
        cancel_calls: u32,
    }

    impl Scheduler for Uncancellable {
        fn request(&mut self) -> FrameToken {
            self.inner.request()
        }

        fn cancel(&mut self, _token: FrameToken) {
            self.cancel_calls += 1;
        }
    }

    fn universe() -> Universe {
        Universe::seeded(16, 16, 0.5, 1).unwrap()
    }

    /// Deliver the next due frame, as a host would on its next refresh
    fn pump(driver: &mut Driver<FrameQueue>, universe: &mut Universe) -> Option<FrameOutcome> {
        let token = driver.scheduler_mut().take_due()?;
        Some(driver.on_frame(token, universe))
    }

    #[test]
    fn test_stop_before_start_is_noop() {
        let mut driver = Driver::new(FrameQueue::new());
        driver.stop();
        assert_eq!(driver.state(), DriverState::Stopped);
        assert_eq!(driver.scheduler().requests_made(), 0);
        assert_eq!(driver.scheduler().cancellations(), 0);
    }

    #[test]
    fn test_double_start_single_request() {
        let mut driver = Driver::new(FrameQueue::new());
        driver.start();
        driver.start();
        assert!(driver.is_running());
        assert_eq!(driver.scheduler().outstanding(), 1);
        assert_eq!(driver.scheduler().requests_made(), 1);
    }

    #[test]
    fn test_each_frame_steps_once_and_rerequests() {
        let mut universe = universe();
        let mut driver = Driver::new(FrameQueue::new());
        driver.start();

        for expected in 1..=5 {
            let outcome = pump(&mut driver, &mut universe);
            assert_eq!(outcome, Some(FrameOutcome::Advanced { generation: expected }));
            assert_eq!(driver.scheduler().outstanding(), 1);
        }
        assert_eq!(universe.generation(), 5);
        assert_eq!(driver.frames_advanced(), 5);
    }

    #[test]
    fn test_stop_cancels_pending_frame() {
        let mut universe = universe();
        let mut driver = Driver::new(FrameQueue::new());
        driver.start();
        pump(&mut driver, &mut universe);

        driver.stop();
        assert_eq!(driver.scheduler().outstanding(), 0);
        assert_eq!(driver.scheduler().cancellations(), 1);
        assert_eq!(pump(&mut driver, &mut universe), None);
        assert_eq!(universe.generation(), 1);
    }

    #[test]
    fn test_stale_frame_after_stop_does_not_step() {
        let mut universe = universe();
        let mut driver = Driver::new(Uncancellable::default());
        driver.start();
        driver.stop();
        assert_eq!(driver.scheduler().cancel_calls, 1);

        // The host fires the frame it could not cancel
        let token = driver.scheduler_mut().inner.take_due().unwrap();
        assert_eq!(driver.on_frame(token, &mut universe), FrameOutcome::Ignored);
        assert_eq!(universe.generation(), 0);

        // Restarting does not revive the old token either
        driver.start();
        assert_eq!(driver.on_frame(token, &mut universe), FrameOutcome::Ignored);
        let fresh = driver.pending().unwrap();
        assert_ne!(fresh, token);
        assert_eq!(
            driver.on_frame(fresh, &mut universe),
            FrameOutcome::Advanced { generation: 1 }
        );
    }

    #[test]
    fn test_duplicate_delivery_is_ignored() {
        let mut universe = universe();
        let mut driver = Driver::new(FrameQueue::new());
        driver.start();
        let token = driver.pending().unwrap();

        assert_eq!(
            driver.on_frame(token, &mut universe),
            FrameOutcome::Advanced { generation: 1 }
        );
        assert_eq!(driver.on_frame(token, &mut universe), FrameOutcome::Ignored);
        assert_eq!(universe.generation(), 1);
    }

    #[test]
    fn test_toggle_flips_state() {
        let mut driver = Driver::new(FrameQueue::new());
        assert_eq!(driver.toggle(), DriverState::Running);
        assert_eq!(driver.toggle(), DriverState::Stopped);
        assert_eq!(driver.scheduler().outstanding(), 0);
    }

    #[test]
    fn test_edits_while_running() {
        let mut universe = universe();
        let mut driver = Driver::new(FrameQueue::new());
        driver.start();
        pump(&mut driver, &mut universe);

        universe.reseed(0.0).unwrap();
        universe.toggle(0, 0).unwrap();
        assert!(driver.is_running());
        assert_eq!(driver.scheduler().outstanding(), 1);

        // A lone cell dies on the next paced step
        assert_eq!(
            pump(&mut driver, &mut universe),
            Some(FrameOutcome::Advanced { generation: 1 })
        );
        assert_eq!(universe.population(), 0);
    }

    #[test]
    fn test_steps_per_frame() {
        let mut universe = universe();
        let config = DriverConfig::default().with_steps_per_frame(3);
        let mut driver = Driver::with_config(FrameQueue::new(), &config).unwrap();
        assert_eq!(driver.steps_per_frame(), 3);
        driver.start();

        assert_eq!(
            pump(&mut driver, &mut universe),
            Some(FrameOutcome::Advanced { generation: 3 })
        );

        let zero = DriverConfig::default().with_steps_per_frame(0);
        assert!(Driver::with_config(FrameQueue::new(), &zero).is_err());
    }
}
