use threatline_types::{ActorId, CombatEvent, EventKind, SpellId};

use crate::context::Roster;

/// State changes derived from raw events, consumed by the per-fight trackers.
///
/// These sit one level above log records: a single event may produce several
/// signals (an aura application from a positioned source, for example).
#[derive(Debug, Clone, PartialEq)]
pub enum FightSignal {
    AuraApplied {
        actor: ActorId,
        aura: SpellId,
        source: ActorId,
        timestamp: i64,
    },
    AuraRemoved {
        actor: ActorId,
        aura: SpellId,
        source: ActorId,
        timestamp: i64,
    },

    /// The actor used an ability (cast, damage or heal).
    AbilityUsed {
        actor: ActorId,
        ability: SpellId,
        timestamp: i64,
    },

    ActorDied {
        actor: ActorId,
        instance: u32,
        hostile: bool,
        timestamp: i64,
    },
    ActorResurrected {
        actor: ActorId,
        timestamp: i64,
    },

    Positioned {
        actor: ActorId,
        instance: u32,
        x: f64,
        y: f64,
    },

    /// A hostile unit instance took part in an event.
    HostileSeen {
        enemy: ActorId,
        instance: u32,
    },
}

/// Translate one event into the signals it implies, in dispatch order.
pub fn signals_for(event: &CombatEvent, roster: &Roster) -> Vec<FightSignal> {
    let mut signals = Vec::new();
    let timestamp = event.timestamp;

    for (id, instance) in [
        (event.source_id, event.source_instance),
        (event.target_id, event.target_instance),
    ] {
        if roster.is_hostile(id) && event.kind != EventKind::Death {
            signals.push(FightSignal::HostileSeen {
                enemy: id,
                instance,
            });
        }
    }

    if let (Some(x), Some(y)) = (event.x, event.y) {
        signals.push(FightSignal::Positioned {
            actor: event.source_id,
            instance: event.source_instance,
            x,
            y,
        });
    }

    match (event.kind, event.ability_id) {
        (kind, Some(aura)) if kind.is_aura_apply() => {
            signals.push(FightSignal::AuraApplied {
                actor: event.target_id,
                aura,
                source: event.source_id,
                timestamp,
            });
        }
        (kind, Some(aura)) if kind.is_aura_remove() => {
            signals.push(FightSignal::AuraRemoved {
                actor: event.target_id,
                aura,
                source: event.source_id,
                timestamp,
            });
        }
        (EventKind::Cast | EventKind::Damage | EventKind::Heal, Some(ability)) => {
            signals.push(FightSignal::AbilityUsed {
                actor: event.source_id,
                ability,
                timestamp,
            });
        }
        (EventKind::Death, _) => {
            signals.push(FightSignal::ActorDied {
                actor: event.target_id,
                instance: event.target_instance,
                hostile: roster.is_hostile(event.target_id),
                timestamp,
            });
        }
        (EventKind::Resurrect, _) => {
            signals.push(FightSignal::ActorResurrected {
                actor: event.target_id,
                timestamp,
            });
        }
        _ => {}
    }

    signals
}
