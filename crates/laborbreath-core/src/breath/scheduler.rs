//! Breathing phase scheduler.
//!
//! The scheduler is a run-generation-guarded state machine. It does not
//! own timers itself; [`BreathDriver`](super::BreathDriver) arms the
//! one-shot phase timer and the 1-second tick and calls back in with the
//! generation captured at arming time. A callback whose generation is no
//! longer current is ignored, so a `stop()` (or a fresh `start()`) issued
//! while a timer is in flight structurally prevents any stale mutation.
//!
//! ## State Transitions
//!
//! ```text
//! Idle --start()--> Inhale <--phase_elapsed--> Exhale
//! Inhale | Exhale --stop()--> Idle
//! ```

use serde::{Deserialize, Serialize};

use crate::config::BreathConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreathPhase {
    Idle,
    Inhale,
    Exhale,
}

impl std::fmt::Display for BreathPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BreathPhase::Idle => write!(f, "Idle"),
            BreathPhase::Inhale => write!(f, "Inhale"),
            BreathPhase::Exhale => write!(f, "Exhale"),
        }
    }
}

/// Arming instruction handed to the driver: the generation to capture and
/// how long the one-shot for the just-entered phase should sleep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Armed {
    pub generation: u64,
    pub phase_secs: u64,
}

/// Observer for scheduler notifications. Delivered synchronously on the
/// calling thread; implementations must not block.
pub trait BreathObserver: Send {
    fn on_phase_changed(&self, phase: BreathPhase, duration_secs: u64);
    fn on_tick(&self, label: &str, seconds_remaining: u64);
}

pub struct PhaseScheduler {
    config: BreathConfig,
    phase: BreathPhase,
    is_running: bool,
    seconds_elapsed: u64,
    /// Run token. Bumped on every start() and stop(); callbacks armed
    /// under an older generation are ignored.
    generation: u64,
    observers: Vec<Box<dyn BreathObserver>>,
}

impl PhaseScheduler {
    pub fn new(config: BreathConfig) -> Self {
        Self {
            config,
            phase: BreathPhase::Idle,
            is_running: false,
            seconds_elapsed: 0,
            generation: 0,
            observers: Vec::new(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> BreathPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn seconds_elapsed(&self) -> u64 {
        self.seconds_elapsed
    }

    pub fn config(&self) -> &BreathConfig {
        &self.config
    }

    pub fn subscribe(&mut self, observer: Box<dyn BreathObserver>) {
        self.observers.push(observer);
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin a run. No-op (returns `None`) when already running, so a
    /// double start never arms duplicate timers.
    pub fn start(&mut self) -> Option<Armed> {
        if self.is_running {
            return None;
        }
        self.generation += 1;
        self.is_running = true;
        Some(self.enter(BreathPhase::Inhale))
    }

    /// End the run. Synchronous: after this returns, no notification from
    /// a previously armed timer can fire (its generation is stale).
    pub fn stop(&mut self) {
        if !self.is_running {
            return;
        }
        self.generation += 1;
        self.is_running = false;
        self.phase = BreathPhase::Idle;
        self.seconds_elapsed = 0;
        self.notify_phase(BreathPhase::Idle, 0);
    }

    /// One-shot timer callback: the current phase's duration elapsed.
    ///
    /// Flips Inhale<->Exhale and returns the next arming instruction; this
    /// is the cycle's self-re-arming step. Stale generations and stopped
    /// runs are ignored.
    pub fn phase_elapsed(&mut self, generation: u64) -> Option<Armed> {
        if generation != self.generation || !self.is_running {
            return None;
        }
        let next = match self.phase {
            BreathPhase::Inhale => BreathPhase::Exhale,
            BreathPhase::Exhale => BreathPhase::Inhale,
            // Unreachable while running, but harmless to decline.
            BreathPhase::Idle => return None,
        };
        Some(self.enter(next))
    }

    /// Recurring 1-second tick callback. Returns `false` when the
    /// generation is stale so the driver can stand down its ticker.
    pub fn tick(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.is_running {
            return false;
        }
        let duration = self.config.phase_secs(self.phase);
        // The counter caps at the phase duration; the one-shot firing on
        // the same boundary performs the actual transition.
        if self.seconds_elapsed < duration {
            self.seconds_elapsed += 1;
        }
        let label = format!("{} {}", self.phase, self.seconds_elapsed);
        let remaining = duration - self.seconds_elapsed;
        for observer in &self.observers {
            observer.on_tick(&label, remaining);
        }
        true
    }

    fn enter(&mut self, phase: BreathPhase) -> Armed {
        self.phase = phase;
        self.seconds_elapsed = 0;
        let phase_secs = self.config.phase_secs(phase);
        self.notify_phase(phase, phase_secs);
        Armed {
            generation: self.generation,
            phase_secs,
        }
    }

    fn notify_phase(&self, phase: BreathPhase, duration_secs: u64) {
        for observer in &self.observers {
            observer.on_phase_changed(phase, duration_secs);
        }
    }
}
