//! Errors raised while assembling per-edition rule tables.

use thiserror::Error;

/// Rule-table authoring defects, detected once when a config is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{layer}: key {key} appears twice in {table}")]
    DuplicateKey {
        layer: &'static str,
        table: &'static str,
        key: u32,
    },

    #[error("{layer}: key {key} in {table} collides with an earlier layer")]
    Collision {
        layer: &'static str,
        table: &'static str,
        key: u32,
    },

    #[error("{layer}: override of {table} key {key} has nothing to override")]
    StaleOverride {
        layer: &'static str,
        table: &'static str,
        key: u32,
    },

    #[error("no editions registered")]
    NoEditions,
}

pub type Result<T> = std::result::Result<T, ConfigError>;
