mod driver;
mod scheduler;

pub use driver::BreathDriver;
pub use scheduler::{Armed, BreathObserver, BreathPhase, PhaseScheduler};
