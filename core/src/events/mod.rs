//! Event processing
//!
//! - **FightSignal**: state changes derived from raw events
//! - **SignalHandler**: per-fight trackers fed those signals
//! - **ActorStatus**: alive/dead, positions and the live hostile set
//! - **EventProcessor**: the per-fight orchestrator

pub mod handler;
pub mod processor;
pub mod signal;
mod status;

#[cfg(test)]
mod processor_tests;

pub use handler::SignalHandler;
pub use processor::EventProcessor;
pub use signal::{FightSignal, signals_for};
pub use status::ActorStatus;
