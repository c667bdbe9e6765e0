use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::simulation::Simulation;

/// Background loop that advances deliveries once per interval
pub struct SimulationClock;

/// Running clock. Dropping it stops the loop after the current tick, the
/// same as `shutdown` without waiting for the task.
pub struct ClockHandle {
    running: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl SimulationClock {
    pub fn start(sim: Simulation, interval: Duration) -> ClockHandle {
        let (running, mut running_rx) = watch::channel(true);

        let task = tokio::spawn(async move {
            info!("Simulation clock started, ticking every {:?}", interval);

            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            while *running_rx.borrow() {
                tokio::select! {
                    _ = ticker.tick() => {
                        // advance is synchronous: a started tick always completes
                        let completed = sim.tick();
                        if !completed.is_empty() {
                            debug!(count = completed.len(), "Tick completed deliveries");
                        }
                    }
                    changed = running_rx.changed() => {
                        if changed.is_err() {
                            break;
                        }
                    }
                }
            }

            info!("Simulation clock stopped");
        });

        ClockHandle { running, task }
    }
}

impl ClockHandle {
    pub fn is_running(&self) -> bool {
        *self.running.borrow() && !self.task.is_finished()
    }

    /// Clear the running flag and wait for the loop to exit
    pub async fn shutdown(self) -> Result<(), tokio::task::JoinError> {
        self.running.send_replace(false);
        self.task.await
    }
}
