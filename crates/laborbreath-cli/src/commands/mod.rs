pub mod breathe;
pub mod config;
pub mod contraction;
