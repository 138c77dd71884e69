use hashbrown::{HashMap, HashSet};
use threatline_types::formatting::format_threat;
use threatline_types::{ActorId, EnemyUnit, ThreatScope};

use super::EncounterPreprocessor;
use crate::context::ThreatContext;
use crate::formulas::{ThreatEffect, ThreatFormulaResult};
use crate::ledger::EnemyKey;

/// Silence longer than this between a boss's own events counts as leaving
/// and coming back.
pub const REAPPEARANCE_GAP_MS: i64 = 30_000;

/// Full threat wipe on the first event a tracked boss produces after a gap.
pub struct ReappearanceWipe {
    name: &'static str,
    tracked: HashSet<ActorId>,
    gap_ms: i64,
    last_seen: HashMap<EnemyKey, i64>,
}

impl ReappearanceWipe {
    pub fn new(name: &'static str, tracked: impl IntoIterator<Item = ActorId>, gap_ms: i64) -> Self {
        Self {
            name,
            tracked: tracked.into_iter().collect(),
            gap_ms,
            last_seen: HashMap::new(),
        }
    }

    /// Track every roster unit whose creature id is listed.
    pub fn for_npcs(name: &'static str, enemies: &[EnemyUnit], npcs: &[u32], gap_ms: i64) -> Self {
        Self::new(
            name,
            enemies
                .iter()
                .filter(|e| npcs.contains(&e.game_id))
                .map(|e| e.id),
            gap_ms,
        )
    }
}

impl EncounterPreprocessor for ReappearanceWipe {
    fn preprocess(&mut self, ctx: &ThreatContext<'_>) -> Option<ThreatFormulaResult> {
        let event = ctx.event;
        if !self.tracked.contains(&event.source_id) {
            return None;
        }
        let previous = self.last_seen.insert(ctx.source_key(), event.timestamp)?;
        let gap = event.timestamp - previous;
        if gap <= self.gap_ms {
            return None;
        }
        tracing::debug!(
            encounter = self.name,
            source = event.source_id,
            gap_ms = gap,
            "boss reappeared, wiping threat"
        );
        Some(ThreatFormulaResult::effect(
            ThreatEffect::ModifyThreat {
                multiplier: 0.0,
                scope: ThreatScope::All,
            },
            format!("{}: back after {}s", self.name, format_threat(gap as f64 / 1000.0)),
        ))
    }
}
