//! Real-time driver: a thread that ticks a shared simulation on a fixed
//! interval.
//!
//! # Tick discipline
//!
//! A tick runs to completion under the write lock before the next one is
//! considered, so ticks never overlap.  When a tick finishes after its
//! successor's deadline has already passed, the missed deadline is dropped
//! rather than run back-to-back; the next tick is scheduled one interval
//! from now.  Every tick moves vehicles by exactly `tick_interval_ms` and is
//! stamped with the real wall-clock time it ran at, so pauses and dropped
//! deadlines never leave `last_update_ms` behind.
//!
//! Readers go through [`SharedSimulation`] and only ever see the fleet
//! between ticks.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, RwLock};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use log::{debug, info, warn};

use ts_core::{StopId, Tick};
use ts_eta::{Arrival, ArrivalScope};
use ts_fleet::Vehicle;

use crate::{SimError, SimObserver, SimResult, Simulation};

// ── SharedSimulation ──────────────────────────────────────────────────────────

/// A [`Simulation`] behind a read/write lock, cheap to clone.
///
/// The scheduler thread takes the write lock for one tick at a time; query
/// methods take the read lock, so a reader never observes a half-updated
/// fleet.
#[derive(Clone)]
pub struct SharedSimulation {
    inner: Arc<RwLock<Simulation>>,
}

impl SharedSimulation {
    pub fn new(sim: Simulation) -> Self {
        Self { inner: Arc::new(RwLock::new(sim)) }
    }

    /// Run `f` with shared access.
    pub fn read<T>(&self, f: impl FnOnce(&Simulation) -> T) -> SimResult<T> {
        let guard = self.inner.read().map_err(|_| SimError::Poisoned)?;
        Ok(f(&guard))
    }

    /// Run `f` with exclusive access.
    pub fn write<T>(&self, f: impl FnOnce(&mut Simulation) -> T) -> SimResult<T> {
        let mut guard = self.inner.write().map_err(|_| SimError::Poisoned)?;
        Ok(f(&mut guard))
    }

    /// A copy of the current fleet.
    pub fn snapshot(&self) -> SimResult<Vec<Vehicle>> {
        self.read(|sim| sim.vehicles().to_vec())
    }

    pub fn current_tick(&self) -> SimResult<Tick> {
        self.read(|sim| sim.clock.current_tick)
    }

    pub fn next_arrivals(
        &self,
        stop:  StopId,
        limit: usize,
        scope: ArrivalScope,
    ) -> SimResult<Vec<Arrival>> {
        self.read(|sim| sim.arrivals(stop, limit, scope))
    }
}

// ── Scheduler ─────────────────────────────────────────────────────────────────

enum Control {
    Pause,
    Resume,
    Stop,
}

/// Spawns the ticking thread.  See [`SchedulerHandle`] for control.
pub struct Scheduler;

impl Scheduler {
    /// Start ticking `shared` every `config.tick_interval_ms`.
    ///
    /// The first tick fires one interval after the call.  `observer` is
    /// moved onto the thread and handed back by [`SchedulerHandle::stop`].
    pub fn spawn<O>(shared: SharedSimulation, observer: O) -> SimResult<SchedulerHandle<O>>
    where
        O: SimObserver + Send + 'static,
    {
        let interval_ms = shared.read(|sim| sim.config.tick_interval_ms)?;
        let (control, rx) = mpsc::channel();

        let thread = thread::Builder::new()
            .name("ts-scheduler".into())
            .spawn(move || tick_loop(shared, observer, interval_ms, rx))
            .map_err(|_| SimError::SchedulerStopped)?;

        info!("scheduler started: tick every {interval_ms} ms");
        Ok(SchedulerHandle { control, thread })
    }
}

/// Control handle for a running scheduler.
///
/// Dropping the handle without calling [`stop`](Self::stop) also ends the
/// thread at its next wake-up, but the observer is then lost.
pub struct SchedulerHandle<O> {
    control: Sender<Control>,
    thread:  JoinHandle<O>,
}

impl<O> SchedulerHandle<O> {
    /// Suspend ticking.  Vehicles stay where they are.
    pub fn pause(&self) -> SimResult<()> {
        self.send(Control::Pause)
    }

    /// Resume ticking.  The next tick fires one interval from now.
    pub fn resume(&self) -> SimResult<()> {
        self.send(Control::Resume)
    }

    /// Stop the thread and return the observer.
    ///
    /// A tick in progress completes first.
    pub fn stop(self) -> SimResult<O> {
        // The thread may already have exited on a poisoned lock; join anyway.
        let _ = self.control.send(Control::Stop);
        self.thread.join().map_err(|_| SimError::SchedulerPanicked)
    }

    fn send(&self, msg: Control) -> SimResult<()> {
        self.control.send(msg).map_err(|_| SimError::SchedulerStopped)
    }
}

fn tick_loop<O: SimObserver>(
    shared:      SharedSimulation,
    mut observer: O,
    interval_ms: u64,
    rx:          Receiver<Control>,
) -> O {
    let interval = Duration::from_millis(interval_ms);
    let mut next = Instant::now() + interval;
    let mut paused = false;

    loop {
        let msg = if paused {
            match rx.recv() {
                Ok(msg) => Some(msg),
                Err(_) => break,
            }
        } else {
            match rx.recv_timeout(next.saturating_duration_since(Instant::now())) {
                Ok(msg) => Some(msg),
                Err(RecvTimeoutError::Timeout) => None,
                Err(RecvTimeoutError::Disconnected) => break,
            }
        };

        match msg {
            Some(Control::Stop) => break,
            Some(Control::Pause) => {
                if !paused {
                    debug!("scheduler paused");
                }
                paused = true;
                continue;
            }
            Some(Control::Resume) => {
                if paused {
                    debug!("scheduler resumed");
                    next = Instant::now() + interval;
                }
                paused = false;
                continue;
            }
            None => {}
        }

        let ticked = shared.write(|sim| match wall_clock_ms() {
            Some(now) => sim.step_at(interval_ms, now, &mut observer),
            None => sim.step(interval_ms, &mut observer),
        });
        if ticked.is_err() {
            warn!("simulation lock poisoned; scheduler exiting");
            break;
        }

        next += interval;
        let now = Instant::now();
        if next <= now {
            debug!("tick overran its interval; dropping missed deadline");
            next = now + interval;
        }
    }

    let final_tick = shared.current_tick().unwrap_or(Tick::ZERO);
    observer.on_sim_end(final_tick);
    info!("scheduler stopped at {final_tick}");
    observer
}

/// Current Unix time in milliseconds; `None` if the system clock reads
/// before the epoch.
fn wall_clock_ms() -> Option<i64> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .ok()
        .map(|d| d.as_millis() as i64)
}
