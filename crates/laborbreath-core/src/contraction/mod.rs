mod event;
mod intervals;
mod log;

pub use event::ContractionEvent;
pub use intervals::{format_minutes, intervals, Spacing};
pub use log::{ContractionLog, LogObserver};
