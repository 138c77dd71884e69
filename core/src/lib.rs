pub mod config;
pub mod context;
pub mod effects;
pub mod encounter;
pub mod error;
pub mod events;
pub mod formulas;
pub mod interceptors;
pub mod ledger;
pub mod modifiers;
pub mod runner;
pub mod spells;

#[cfg(test)]
mod test_support;

// Re-exports for convenience
pub use config::{ConfigRegistry, Resolution, ThreatConfig, registry};
pub use error::ConfigError;
pub use events::{EventProcessor, FightSignal, SignalHandler};
pub use ledger::{EnemyKey, ThreatLedger};
pub use runner::{Outcome, ThreatRun, process_fight, process_fights};
