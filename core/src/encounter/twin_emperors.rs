use hashbrown::HashMap;
use threatline_types::{ActorId, CombatEvent, EnemyUnit, EventKind};

use super::EncounterPreprocessor;
use crate::context::ThreatContext;
use crate::formulas::{ChangeOp, CustomChange, ThreatEffect, ThreatFormulaResult};
use crate::ledger::EnemyKey;
use crate::spells;

/// Threat given to the actor nearest each emperor after a teleport.
pub const TELEPORT_SEED_THREAT: f64 = 1.0;

/// Both emperors cast the teleport; casts this close together are one teleport.
const TELEPORT_DEDUPE_MS: i64 = 1_000;

/// Twin Teleport swaps the emperors and resets both threat tables. Each
/// emperor then picks up whoever is standing closest to it.
pub struct TwinEmperors {
    emperors: Vec<ActorId>,
    /// Instance index each emperor was last logged under.
    instances: HashMap<ActorId, u32>,
    last_teleport: Option<i64>,
}

impl TwinEmperors {
    pub fn new(enemies: &[EnemyUnit]) -> Self {
        let mut emperors: Vec<ActorId> = enemies
            .iter()
            .filter(|e| matches!(e.game_id, spells::VEKNILASH_NPC | spells::VEKLOR_NPC))
            .map(|e| e.id)
            .collect();
        emperors.sort_unstable();
        Self {
            emperors,
            instances: HashMap::new(),
            last_teleport: None,
        }
    }

    fn key(&self, emperor: ActorId) -> EnemyKey {
        EnemyKey::new(emperor, self.instances.get(&emperor).copied().unwrap_or(0))
    }

    fn observe(&mut self, event: &CombatEvent) {
        if self.emperors.contains(&event.source_id) {
            self.instances.insert(event.source_id, event.source_instance);
        }
        if self.emperors.contains(&event.target_id) {
            self.instances.insert(event.target_id, event.target_instance);
        }
    }
}

impl EncounterPreprocessor for TwinEmperors {
    fn preprocess(&mut self, ctx: &ThreatContext<'_>) -> Option<ThreatFormulaResult> {
        let event = ctx.event;
        self.observe(event);
        if event.kind != EventKind::Cast
            || event.ability_id != Some(spells::TWIN_TELEPORT)
            || !self.emperors.contains(&event.source_id)
        {
            return None;
        }

        if self
            .last_teleport
            .is_some_and(|at| event.timestamp - at <= TELEPORT_DEDUPE_MS)
        {
            return Some(ThreatFormulaResult::new(0.0, "twin teleport (paired cast)"));
        }
        self.last_teleport = Some(event.timestamp);

        let friendly: Vec<ActorId> = ctx.roster.actors().map(|a| a.id).collect();
        let mut changes = Vec::new();
        for &emperor in &self.emperors {
            let enemy = self.key(emperor);
            changes.extend(
                ctx.ledger
                    .cells_for_enemy(enemy)
                    .into_iter()
                    .map(|(actor, _)| CustomChange {
                        source: actor,
                        enemy,
                        op: ChangeOp::Set(0.0),
                    }),
            );
            match ctx.ledger.nearest(emperor, &friendly) {
                Some(actor) => changes.push(CustomChange {
                    source: actor,
                    enemy,
                    op: ChangeOp::Set(TELEPORT_SEED_THREAT),
                }),
                None => {
                    tracing::warn!(emperor, "no positioned actor to seed after teleport");
                }
            }
        }

        tracing::debug!(timestamp = event.timestamp, changes = changes.len(), "twin teleport");
        Some(ThreatFormulaResult::effect(
            ThreatEffect::CustomThreat(changes),
            "twin teleport",
        ))
    }
}
