//! Tokio driver for the phase scheduler.
//!
//! Owns the two timers the state machine needs: a self-re-arming one-shot
//! for phase transitions and a recurring 1-second tick. Both tasks capture
//! the generation that was current when they were armed and call back into
//! the scheduler with it; the scheduler declines stale callbacks, so task
//! aborts on stop are only cleanup, never load-bearing.

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time;

use super::scheduler::PhaseScheduler;

#[derive(Clone)]
pub struct BreathDriver {
    scheduler: Arc<Mutex<PhaseScheduler>>,
    tasks: Arc<Mutex<Vec<JoinHandle<()>>>>,
}

impl BreathDriver {
    pub fn new(scheduler: PhaseScheduler) -> Self {
        Self {
            scheduler: Arc::new(Mutex::new(scheduler)),
            tasks: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn scheduler(&self) -> Arc<Mutex<PhaseScheduler>> {
        self.scheduler.clone()
    }

    /// Start a run and arm its timers. Returns `false` when a run is
    /// already active (nothing new is armed).
    pub async fn start(&self) -> bool {
        let Some(armed) = self.scheduler.lock().await.start() else {
            return false;
        };
        debug!(
            "armed generation {} (first phase {} s)",
            armed.generation, armed.phase_secs
        );

        let generation = armed.generation;

        let scheduler = self.scheduler.clone();
        let phase_task = tokio::spawn(async move {
            let mut armed = armed;
            loop {
                time::sleep(Duration::from_secs(armed.phase_secs)).await;
                match scheduler.lock().await.phase_elapsed(armed.generation) {
                    Some(next) => armed = next,
                    None => break,
                }
            }
        });

        let scheduler = self.scheduler.clone();
        let tick_task = tokio::spawn(async move {
            let mut interval = time::interval(Duration::from_secs(1));
            // The first interval tick completes immediately; consume it so
            // ticks land at 1 s, 2 s, ...
            interval.tick().await;
            loop {
                interval.tick().await;
                if !scheduler.lock().await.tick(generation) {
                    break;
                }
            }
        });

        let mut tasks = self.tasks.lock().await;
        tasks.push(phase_task);
        tasks.push(tick_task);
        true
    }

    /// Stop the run. The generation bump inside `stop()` happens before
    /// the aborts, so even a callback already past its sleep cannot
    /// mutate state or notify after this returns.
    pub async fn stop(&self) {
        self.scheduler.lock().await.stop();
        for task in self.tasks.lock().await.drain(..) {
            task.abort();
        }
    }
}
