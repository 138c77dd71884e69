use threatline_types::{ActorId, CombatEvent, ThreatChange, ThreatScope};

use super::{EnemyKey, ThreatLedger};
use crate::context::Roster;
use crate::formulas::{ChangeOp, CustomChange};

/// Attribute `value` from `actor`.
///
/// Split values are divided evenly across `live` hostile units; with no live
/// hostiles nothing is attributed. Unsplit values land on `target`, which
/// must be a hostile unit.
pub fn distribute(
    ledger: &mut ThreatLedger,
    actor: ActorId,
    target: Option<EnemyKey>,
    value: f64,
    split: bool,
    live: &[EnemyKey],
) -> Vec<ThreatChange> {
    if split {
        if live.is_empty() {
            return Vec::new();
        }
        let share = value / live.len() as f64;
        return live
            .iter()
            .map(|enemy| ledger.add(actor, *enemy, share))
            .collect();
    }
    match target {
        Some(enemy) => vec![ledger.add(actor, enemy, value)],
        None => Vec::new(),
    }
}

/// Apply a `ModifyThreat` effect.
///
/// The scope is resolved from the event's acting side. When the source is
/// hostile the enemy side is the source: `Target` scales the event target's
/// cell against it and `All` scales every cell held against it. When the
/// source is friendly, `Target` scales `(actor, event target)` and `All`
/// scales every cell `actor` holds.
pub fn modify_threat(
    ledger: &mut ThreatLedger,
    roster: &Roster,
    event: &CombatEvent,
    actor: ActorId,
    multiplier: f64,
    scope: ThreatScope,
) -> Vec<ThreatChange> {
    let cells: Vec<(ActorId, EnemyKey)> = if roster.is_hostile(event.source_id) {
        let enemy = EnemyKey::new(event.source_id, event.source_instance);
        match scope {
            ThreatScope::Target => vec![(event.target_id, enemy)],
            ThreatScope::All => ledger
                .cells_for_enemy(enemy)
                .into_iter()
                .map(|(holder, _)| (holder, enemy))
                .collect(),
        }
    } else {
        match scope {
            ThreatScope::Target => {
                vec![(actor, EnemyKey::new(event.target_id, event.target_instance))]
            }
            ThreatScope::All => ledger
                .cells_for_actor(actor)
                .into_iter()
                .map(|(enemy, _)| (actor, enemy))
                .collect(),
        }
    };

    let changes: Vec<ThreatChange> = cells
        .into_iter()
        .filter_map(|(holder, enemy)| ledger.multiply(holder, enemy, multiplier))
        .collect();

    if changes.is_empty() {
        tracing::debug!(
            source = event.source_id,
            target = event.target_id,
            multiplier,
            ?scope,
            "threat modification matched no cells"
        );
    }
    changes
}

pub fn apply_custom(ledger: &mut ThreatLedger, changes: &[CustomChange]) -> Vec<ThreatChange> {
    changes
        .iter()
        .map(|change| match change.op {
            ChangeOp::Set(value) => ledger.set(change.source, change.enemy, value),
            ChangeOp::Add(value) => ledger.add(change.source, change.enemy, value),
        })
        .collect()
}
