use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use laborbreath_core::{BreathDriver, BreathObserver, BreathPhase, Config, PhaseScheduler};

/// Prints phase changes and the per-second countdown to the terminal.
struct ConsoleObserver;

impl BreathObserver for ConsoleObserver {
    fn on_phase_changed(&self, phase: BreathPhase, duration_secs: u64) {
        match phase {
            BreathPhase::Idle => println!("Done."),
            _ => println!("{phase} ({duration_secs} s)"),
        }
    }

    fn on_tick(&self, label: &str, seconds_remaining: u64) {
        println!("  {label} ({seconds_remaining} s left)");
    }
}

/// Counts completed inhale/exhale cycles: one cycle ends on each return
/// to Inhale after the first.
struct CycleCounter {
    inhale_entries: Arc<AtomicU64>,
}

impl BreathObserver for CycleCounter {
    fn on_phase_changed(&self, phase: BreathPhase, _duration_secs: u64) {
        if phase == BreathPhase::Inhale {
            self.inhale_entries.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn on_tick(&self, _label: &str, _seconds_remaining: u64) {}
}

pub fn run(cycles: Option<u64>) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    config.breath.validate()?;

    let mut scheduler = PhaseScheduler::new(config.breath);
    scheduler.subscribe(Box::new(ConsoleObserver));

    let inhale_entries = Arc::new(AtomicU64::new(0));
    scheduler.subscribe(Box::new(CycleCounter {
        inhale_entries: inhale_entries.clone(),
    }));

    let driver = BreathDriver::new(scheduler);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        driver.start().await;

        match cycles {
            Some(n) => {
                // n full cycles means n returns to Inhale after the first entry.
                let target = n + 1;
                loop {
                    tokio::time::sleep(Duration::from_millis(200)).await;
                    if inhale_entries.load(Ordering::SeqCst) >= target {
                        break;
                    }
                }
            }
            None => {
                tokio::signal::ctrl_c().await?;
                println!();
            }
        }

        driver.stop().await;
        Ok::<(), Box<dyn std::error::Error>>(())
    })?;

    Ok(())
}
