use threatline_types::{
    Actor, ActorId, CombatEvent, EncounterId, EventKind, SchoolMask, SpellId,
};

use super::Roster;
use crate::effects::AuraSet;
use crate::events::ActorStatus;
use crate::ledger::{EnemyKey, ThreatLedger};

/// Read-only window onto run state for formulas and preprocessors.
#[derive(Clone, Copy)]
pub struct LedgerView<'a> {
    ledger: &'a ThreatLedger,
    status: &'a ActorStatus,
}

impl<'a> LedgerView<'a> {
    pub fn new(ledger: &'a ThreatLedger, status: &'a ActorStatus) -> Self {
        Self { ledger, status }
    }

    pub fn current_threat(&self, actor: ActorId, enemy: EnemyKey) -> f64 {
        self.ledger.get(actor, enemy)
    }

    pub fn top_actors(&self, enemy: EnemyKey, n: usize) -> Vec<(ActorId, f64)> {
        self.ledger.top(enemy, n)
    }

    pub fn top_threat(&self, enemy: EnemyKey) -> f64 {
        self.ledger.top_threat(enemy)
    }

    pub fn cells_for_enemy(&self, enemy: EnemyKey) -> Vec<(ActorId, f64)> {
        self.ledger.cells_for_enemy(enemy)
    }

    pub fn distance(&self, a: ActorId, b: ActorId) -> Option<f64> {
        self.status.distance(a, b)
    }

    pub fn nearest<'b>(
        &self,
        to: ActorId,
        candidates: impl IntoIterator<Item = &'b ActorId>,
    ) -> Option<ActorId> {
        self.status.nearest(to, candidates)
    }

    pub fn is_alive(&self, actor: ActorId) -> bool {
        self.status.is_alive(actor)
    }

    pub fn live_enemy_count(&self) -> usize {
        self.status.live_enemy_count()
    }
}

/// Everything a formula may look at for one event.
pub struct ThreatContext<'a> {
    pub event: &'a CombatEvent,
    /// Amount resolved for the event kind; see [`resolve_amount`].
    pub amount: f64,
    pub school: SchoolMask,
    pub source_auras: &'a AuraSet,
    pub target_auras: &'a AuraSet,
    pub source_actor: Option<&'a Actor>,
    pub target_actor: Option<&'a Actor>,
    pub encounter_id: Option<EncounterId>,
    pub roster: &'a Roster,
    pub ledger: LedgerView<'a>,
}

impl ThreatContext<'_> {
    pub fn kind(&self) -> EventKind {
        self.event.kind
    }

    pub fn spell(&self) -> Option<SpellId> {
        self.event.ability_id
    }

    pub fn source_key(&self) -> EnemyKey {
        EnemyKey::new(self.event.source_id, self.event.source_instance)
    }

    pub fn target_key(&self) -> EnemyKey {
        EnemyKey::new(self.event.target_id, self.event.target_instance)
    }
}

/// Damage counts absorbed damage; energize counts raw gain (waste is the
/// energize formula's business).
pub fn resolve_amount(event: &CombatEvent) -> f64 {
    match event.kind {
        EventKind::Damage => (event.amount + event.absorbed) as f64,
        _ => event.amount as f64,
    }
}
