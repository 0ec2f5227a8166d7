//! Real-time tests for the tokio driver. Durations are kept at one second
//! each so the whole file stays fast; assertions leave half-second margins
//! around timer boundaries.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use laborbreath_core::{BreathConfig, BreathDriver, BreathObserver, BreathPhase, PhaseScheduler};

#[derive(Clone, Default)]
struct Recorder {
    phases: Arc<Mutex<Vec<BreathPhase>>>,
    ticks: Arc<Mutex<Vec<String>>>,
}

impl BreathObserver for Recorder {
    fn on_phase_changed(&self, phase: BreathPhase, _duration_secs: u64) {
        self.phases.lock().unwrap().push(phase);
    }
    fn on_tick(&self, label: &str, _seconds_remaining: u64) {
        self.ticks.lock().unwrap().push(label.into());
    }
}

fn one_second_driver() -> (BreathDriver, Recorder) {
    let config = BreathConfig {
        inhale_secs: 1,
        exhale_secs: 1,
    };
    let mut scheduler = PhaseScheduler::new(config);
    let recorder = Recorder::default();
    scheduler.subscribe(Box::new(recorder.clone()));
    (BreathDriver::new(scheduler), recorder)
}

#[tokio::test(flavor = "multi_thread")]
async fn cycle_self_rearms_through_both_phases() {
    let (driver, recorder) = one_second_driver();

    assert!(driver.start().await);
    tokio::time::sleep(Duration::from_millis(2500)).await;
    driver.stop().await;

    let phases = recorder.phases.lock().unwrap().clone();
    // Inhale at 0 s, Exhale at 1 s, Inhale at 2 s, then Idle from stop().
    assert!(phases.starts_with(&[BreathPhase::Inhale, BreathPhase::Exhale, BreathPhase::Inhale]));
    assert_eq!(*phases.last().unwrap(), BreathPhase::Idle);

    let ticks = recorder.ticks.lock().unwrap();
    assert!(ticks.len() >= 2, "expected per-second ticks, got {ticks:?}");
}

#[tokio::test(flavor = "multi_thread")]
async fn stop_silences_everything_even_with_timers_in_flight() {
    let (driver, recorder) = one_second_driver();

    assert!(driver.start().await);
    // Stop mid-phase, with both the one-shot and the ticker pending.
    tokio::time::sleep(Duration::from_millis(300)).await;
    driver.stop().await;

    let phases_at_stop = recorder.phases.lock().unwrap().len();
    let ticks_at_stop = recorder.ticks.lock().unwrap().len();
    assert!(!driver.scheduler().lock().await.is_running());

    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert_eq!(recorder.phases.lock().unwrap().len(), phases_at_stop);
    assert_eq!(recorder.ticks.lock().unwrap().len(), ticks_at_stop);
}

#[tokio::test(flavor = "multi_thread")]
async fn second_start_is_declined_while_running() {
    let (driver, _recorder) = one_second_driver();

    assert!(driver.start().await);
    assert!(!driver.start().await);
    driver.stop().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn run_can_be_restarted_after_stop() {
    let (driver, recorder) = one_second_driver();

    assert!(driver.start().await);
    driver.stop().await;
    assert!(driver.start().await);
    tokio::time::sleep(Duration::from_millis(200)).await;
    driver.stop().await;

    let phases = recorder.phases.lock().unwrap().clone();
    // Inhale, Idle, Inhale, Idle.
    assert_eq!(
        phases,
        vec![
            BreathPhase::Inhale,
            BreathPhase::Idle,
            BreathPhase::Inhale,
            BreathPhase::Idle,
        ]
    );
}
