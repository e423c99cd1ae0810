//! Periodic mover: stopped ⇄ moving
//!
//! One mover drives at most one vessel. Starting arms a repeating
//! background tick that translates the vessel once per period;
//! starting while moving and stopping while stopped are no-ops. Ticks
//! run serially on the mover's own thread and `stop` joins that
//! thread, so no tick can begin after `stop` returns.

use crate::grid::BlockGrid;
use crate::vessel::Vessel;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

/// Reference cadence between movement ticks.
pub const DEFAULT_PERIOD: Duration = Duration::from_millis(2500);

/// Cancellable repeating movement task.
#[derive(Default)]
pub struct Mover {
    running: Option<Running>,
}

struct Running {
    stop: Sender<()>,
    thread: JoinHandle<()>,
}

impl Mover {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Arm the repeating tick. No-op if already moving.
    ///
    /// The tick locks the grid, then the vessel; manual commands must
    /// take the same order.
    pub fn start<G>(&mut self, vessel: Arc<Mutex<Vessel>>, grid: Arc<Mutex<G>>, period: Duration)
    where
        G: BlockGrid + Send + 'static,
    {
        if self.running.is_some() {
            return;
        }

        let (stop, stop_rx) = mpsc::channel();
        let thread = std::thread::spawn(move || loop {
            match stop_rx.recv_timeout(period) {
                Err(RecvTimeoutError::Timeout) => {
                    let Ok(mut grid) = grid.lock() else {
                        tracing::error!("grid lock poisoned, mover exiting");
                        return;
                    };
                    let Ok(mut vessel) = vessel.lock() else {
                        tracing::error!("vessel lock poisoned, mover exiting");
                        return;
                    };
                    vessel.translate(&mut *grid);
                    tracing::debug!(owner = %vessel.owner(), heading = %vessel.heading(), "mover tick");
                }
                Ok(()) | Err(RecvTimeoutError::Disconnected) => return,
            }
        });

        self.running = Some(Running { stop, thread });
    }

    /// Cancel the repeating tick and wait for the mover thread to
    /// finish. No-op if not moving.
    pub fn stop(&mut self) {
        if let Some(running) = self.running.take() {
            let _ = running.stop.send(());
            let _ = running.thread.join();
        }
    }
}

impl Drop for Mover {
    fn drop(&mut self) {
        self.stop();
    }
}
