//! Actor/aura state
//!
//! - **AuraSet**: the active aura ids of one actor
//! - **AuraTracker**: signal handler keeping every actor's set current
//! - **SyntheticAuraRules**: talent/gear/set-bonus inference run once per
//!   actor at fight start

mod aura_set;
mod synthetic;
pub mod tracker;

#[cfg(test)]
mod tracker_tests;

pub use aura_set::AuraSet;
pub use synthetic::{SetBonusRule, SyntheticAuraRules, TalentPointRule};
pub use tracker::AuraTracker;
