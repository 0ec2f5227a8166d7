//! # laborbreath Core Library
//!
//! Core logic for laborbreath, a labor-breathing coach: a guided
//! inhale/exhale cycle with per-second countdown feedback, and a persisted
//! log of contraction timestamps with derived intervals.
//!
//! The CLI binary is a thin layer over this crate; rendering and layout
//! live entirely with the consumer, which subscribes to scheduler and log
//! notifications.
//!
//! ## Key Components
//!
//! - [`PhaseScheduler`]: generation-guarded breathing state machine
//! - [`BreathDriver`]: tokio timers driving the scheduler
//! - [`ContractionLog`]: ordered, file-persisted contraction events
//! - [`intervals`]: pure per-event interval derivation
//! - [`Config`]: TOML-backed breathing pace configuration

pub mod breath;
pub mod config;
pub mod contraction;
pub mod error;
pub mod storage;

pub use breath::{Armed, BreathDriver, BreathObserver, BreathPhase, PhaseScheduler};
pub use config::{BreathConfig, Config};
pub use contraction::{format_minutes, intervals, ContractionEvent, ContractionLog, LogObserver, Spacing};
pub use error::{ConfigError, RecordError, StoreError};
pub use storage::ContractionStore;
