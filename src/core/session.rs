//! Session lifecycle: fixed-rate tick clock, flap marshalling and restart.
//!
//! A [`Session`] is what a host drives. It owns the [`Simulation`], decides
//! when ticks are due, and stops itself when the bird crashes. Flaps coming
//! from another thread go through a [`FlapHandle`] and are applied at the
//! start of the next tick, never in the middle of one.

use super::constants::{MAX_CATCH_UP_TICKS, TICK_INTERVAL_MS};
use super::simulation::Simulation;
use super::types::TickOutcome;
use crossbeam_channel::{unbounded, Receiver, Sender};
use log::{info, warn};
use std::time::Duration;

/// Fixed-timestep accumulator.
#[derive(Debug, Clone)]
pub struct TickClock {
    interval: Duration,
    accumulated: Duration,
    running: bool,
}

impl TickClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            accumulated: Duration::ZERO,
            running: false,
        }
    }

    pub fn start(&mut self) {
        self.running = true;
        self.accumulated = Duration::ZERO;
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.accumulated = Duration::ZERO;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time left until the next tick is due.
    pub fn until_next(&self) -> Duration {
        self.interval.saturating_sub(self.accumulated)
    }

    /// Add elapsed wall time and return how many ticks are now due.
    /// Stopped clocks never produce ticks. Long stalls are clamped to
    /// `MAX_CATCH_UP_TICKS`.
    pub fn accumulate(&mut self, elapsed: Duration) -> u32 {
        if !self.running || self.interval.is_zero() {
            return 0;
        }
        self.accumulated += elapsed;

        let mut due = 0;
        while self.accumulated >= self.interval {
            self.accumulated -= self.interval;
            due += 1;
        }
        if due > MAX_CATCH_UP_TICKS {
            warn!(
                "tick clock fell behind by {} ticks, dropping {}",
                due,
                due - MAX_CATCH_UP_TICKS
            );
            due = MAX_CATCH_UP_TICKS;
        }
        due
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new(Duration::from_millis(TICK_INTERVAL_MS))
    }
}

/// Cloneable, thread-safe way to send flaps into a session.
#[derive(Debug, Clone)]
pub struct FlapHandle {
    sender: Sender<()>,
}

impl FlapHandle {
    /// Queue a flap. Returns `false` if the session is gone.
    pub fn flap(&self) -> bool {
        self.sender.send(()).is_ok()
    }
}

/// A simulation plus the driver state around it.
#[derive(Debug)]
pub struct Session {
    sim: Simulation,
    clock: TickClock,
    flap_tx: Sender<()>,
    flap_rx: Receiver<()>,
}

impl Session {
    pub fn new(sim: Simulation) -> Self {
        Self::with_clock(sim, TickClock::default())
    }

    pub fn with_clock(sim: Simulation, clock: TickClock) -> Self {
        let (flap_tx, flap_rx) = unbounded();
        Self {
            sim,
            clock,
            flap_tx,
            flap_rx,
        }
    }

    /// Start ticking. Has no effect on an ended session until `reset()`.
    pub fn start(&mut self) {
        if self.sim.is_game_over() {
            return;
        }
        self.clock.start();
    }

    pub fn stop(&mut self) {
        self.clock.stop();
    }

    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    /// Apply queued flaps, then advance the simulation one step.
    pub fn tick(&mut self) -> TickOutcome {
        self.drain_flaps();
        let outcome = self.sim.tick();
        if let TickOutcome::GameOver { final_score, .. } = outcome {
            self.clock.stop();
            info!("session stopped with final score {}", final_score);
        }
        outcome
    }

    /// Run every tick that became due during `elapsed`. Returns the last
    /// outcome, or `None` when no tick was due.
    pub fn advance(&mut self, elapsed: Duration) -> Option<TickOutcome> {
        let due = self.clock.accumulate(elapsed);
        let mut last = None;
        for _ in 0..due {
            let outcome = self.tick();
            last = Some(outcome);
            if outcome.is_game_over() {
                break;
            }
        }
        last
    }

    /// Flap from the thread that ticks.
    pub fn on_flap(&mut self) -> bool {
        self.sim.on_flap()
    }

    pub fn flap_handle(&self) -> FlapHandle {
        FlapHandle {
            sender: self.flap_tx.clone(),
        }
    }

    fn drain_flaps(&mut self) {
        let mut flapped = false;
        while self.flap_rx.try_recv().is_ok() {
            flapped = true;
        }
        if flapped {
            self.sim.on_flap();
        }
    }

    /// Restart: fresh simulation state, stale flaps dropped, clock running.
    pub fn reset(&mut self) {
        while self.flap_rx.try_recv().is_ok() {}
        self.sim.reset();
        self.clock.start();
    }

    pub fn is_game_over(&self) -> bool {
        self.sim.is_game_over()
    }

    pub fn score(&self) -> u32 {
        self.sim.score()
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn clock(&self) -> &TickClock {
        &self.clock
    }
}
