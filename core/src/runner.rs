//! Fight-level entry points: resolve a config, replay, summarise.

use rayon::prelude::*;
use threatline_types::{ActorId, AnnotatedEvent, Edition, FightInput};

use crate::config::{ConfigRegistry, Resolution};
use crate::events::EventProcessor;
use crate::ledger::{EnemyKey, ThreatLedger};

/// Output of one replay.
#[derive(Debug, Clone)]
pub struct ThreatRun {
    pub edition: Edition,
    /// One entry per input event, same order.
    pub events: Vec<AnnotatedEvent>,
    /// Final state of every threat cell.
    pub ledger: ThreatLedger,
}

impl ThreatRun {
    /// Final threat per actor against one enemy, highest first.
    pub fn totals_for(&self, enemy: EnemyKey) -> Vec<(ActorId, f64)> {
        self.ledger.top(enemy, usize::MAX)
    }

    pub fn top(&self, enemy: EnemyKey, n: usize) -> Vec<(ActorId, f64)> {
        self.ledger.top(enemy, n)
    }

    /// Every enemy instance that ended the fight with at least one cell.
    pub fn enemies(&self) -> Vec<EnemyKey> {
        self.ledger.enemies()
    }
}

#[derive(Debug, Clone)]
pub enum Outcome {
    Processed(ThreatRun),
    /// No edition accepts the fight's metadata.
    Unsupported,
}

impl Outcome {
    pub fn run(&self) -> Option<&ThreatRun> {
        match self {
            Self::Processed(run) => Some(run),
            Self::Unsupported => None,
        }
    }
}

pub fn process_fight(registry: &ConfigRegistry, input: &FightInput) -> Outcome {
    match registry.resolve(&input.metadata) {
        Resolution::Supported(config) => Outcome::Processed(EventProcessor::process(config, input)),
        Resolution::Unsupported => {
            tracing::warn!(
                game_version = input.metadata.game_version,
                encounter = ?input.encounter_id,
                "fight skipped: no supported configuration"
            );
            Outcome::Unsupported
        }
    }
}

/// Replay many fights in parallel. Each run owns its own state; only the
/// registry is shared.
pub fn process_fights(registry: &ConfigRegistry, inputs: &[FightInput]) -> Vec<Outcome> {
    inputs
        .par_iter()
        .map(|input| process_fight(registry, input))
        .collect()
}
