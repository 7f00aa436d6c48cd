//! Session game loop
//!
//! A [`GameLoop`] owns one session together with its surface, clock and input
//! queue. [`GameLoop::start`] moves it onto its own thread and hands back a
//! [`LoopHandle`] for stopping and joining it.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};

use crate::clock::Clock;
use crate::error::LaunchError;
use crate::input::InputQueue;
use crate::sim::{Session, SessionReport};
use crate::surface::Surface;
use crate::timing::FixedTimestep;

/// Shared stop request, checked at the top of every loop iteration
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

pub struct GameLoop<S: Surface, C: Clock> {
    session: Session,
    surface: S,
    clock: C,
    input: InputQueue,
    timestep: FixedTimestep,
    cancel: CancelToken,
}

impl<S: Surface, C: Clock> GameLoop<S, C> {
    pub fn new(session: Session, surface: S, clock: C, input: InputQueue) -> Self {
        let timestep = FixedTimestep::new(clock.now_ns());
        Self {
            session,
            surface,
            clock,
            input,
            timestep,
            cancel: CancelToken::new(),
        }
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// True until the session ends or the loop is cancelled
    pub fn is_running(&self) -> bool {
        self.session.is_running() && !self.cancel.is_cancelled()
    }

    /// Spawn the session's entities and reset the accumulator to "now"
    pub fn begin(&mut self) {
        let now = self.clock.now_ns();
        self.session.init(now);
        self.timestep = FixedTimestep::new(now);
    }

    /// One accumulator iteration: read the clock once, then run every whole
    /// tick that has built up. Returns the number of ticks run.
    pub fn iterate(&mut self) -> u32 {
        let now = self.clock.now_ns();
        self.timestep.accumulate(now);

        let mut ticks = 0;
        while self.timestep.try_consume() {
            self.input.drain_into(&mut self.session.ship);
            self.session.update(now);
            self.session.render(&mut self.surface);
            ticks += 1;
        }
        ticks
    }

    /// Run until game over or cancellation
    pub fn run(mut self) -> SessionReport {
        self.begin();
        self.run_begun()
    }

    fn run_begun(mut self) -> SessionReport {
        log::info!("Session {} started", self.session.seed);

        while self.is_running() {
            if self.iterate() == 0 {
                thread::sleep(self.timestep.until_next_tick());
            }
        }

        let report = self.session.report();
        match serde_json::to_string(&report) {
            Ok(json) => log::info!("Session report: {}", json),
            Err(e) => log::warn!("Failed to serialize session report: {}", e),
        }
        report
    }

    /// Begin the session on the calling thread, then move the loop onto a
    /// dedicated thread
    pub fn start(mut self) -> Result<LoopHandle, LaunchError>
    where
        S: Send + 'static,
        C: 'static,
    {
        self.begin();
        let seed = self.session.seed;
        let cancel = self.cancel_token();
        let thread = thread::Builder::new()
            .name(format!("session-{seed}"))
            .spawn(move || self.run_begun())?;

        Ok(LoopHandle {
            seed,
            cancel,
            thread,
        })
    }
}

/// Handle to a session running on its own thread
#[derive(Debug)]
pub struct LoopHandle {
    seed: u64,
    cancel: CancelToken,
    thread: JoinHandle<SessionReport>,
}

impl LoopHandle {
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Ask the loop to exit at its next iteration
    pub fn stop(&self) {
        self.cancel.cancel();
    }

    /// True once the loop thread has returned
    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    /// Wait for the loop to exit. `None` if its thread panicked.
    pub fn join(self) -> Option<SessionReport> {
        match self.thread.join() {
            Ok(report) => Some(report),
            Err(_) => {
                log::error!("Session {} thread panicked", self.seed);
                None
            }
        }
    }
}
