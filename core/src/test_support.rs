//! Shared fixtures for unit tests: a small raid roster, fight builders and a
//! borrowed-context harness for calling formulas directly.

use chrono::{TimeZone, Utc};
use threatline_types::{
    Ability, Actor, ActorId, ActorKind, CombatEvent, CombatantInfo, EncounterId, EnemyUnit,
    EventKind, FightInput, HitType, PlayerClass, ReportMetadata, ResourceKind, SchoolMask,
};

use crate::context::{LedgerView, Roster, ThreatContext, resolve_amount};
use crate::effects::AuraSet;
use crate::events::ActorStatus;
use crate::ledger::{EnemyKey, ThreatLedger};

pub const TANK: ActorId = 1;
pub const HEALER: ActorId = 2;
pub const ROGUE: ActorId = 3;
pub const HUNTER: ActorId = 4;
pub const DRUID: ActorId = 5;
pub const PALADIN: ActorId = 6;

pub const BOSS: ActorId = 100;
/// Two-instance add pack.
pub const ADDS: ActorId = 101;

pub const BOSS_KEY: EnemyKey = EnemyKey::new(BOSS, 0);

/// The roster's only non-physical ability.
pub const CONSECRATION: u32 = 20116;

fn actor(id: ActorId, name: &str, class: PlayerClass) -> Actor {
    Actor {
        id,
        name: name.to_string(),
        kind: ActorKind::Player,
        class: Some(class),
        spec: None,
        owner_id: None,
    }
}

pub fn actors() -> Vec<Actor> {
    vec![
        actor(TANK, "Tankard", PlayerClass::Warrior),
        actor(HEALER, "Mendwell", PlayerClass::Priest),
        actor(ROGUE, "Shivs", PlayerClass::Rogue),
        actor(HUNTER, "Arrowa", PlayerClass::Hunter),
        actor(DRUID, "Barkskin", PlayerClass::Druid),
        actor(PALADIN, "Lightfist", PlayerClass::Paladin),
    ]
}

pub fn enemies() -> Vec<EnemyUnit> {
    vec![
        EnemyUnit {
            id: BOSS,
            game_id: 12118,
            name: "Lucifron".to_string(),
            instance_count: 1,
            is_boss: true,
        },
        EnemyUnit {
            id: ADDS,
            game_id: 12119,
            name: "Flamewaker Protector".to_string(),
            instance_count: 2,
            is_boss: false,
        },
    ]
}

pub fn era_metadata() -> ReportMetadata {
    ReportMetadata {
        game_version: 2,
        season_id: None,
        partition_tags: Vec::new(),
        start_time: Utc.timestamp_millis_opt(1_700_000_000_000).unwrap(),
    }
}

pub fn anniversary_metadata() -> ReportMetadata {
    ReportMetadata {
        partition_tags: vec!["fresh".to_string()],
        start_time: Utc.timestamp_millis_opt(1_770_000_000_000).unwrap(),
        ..era_metadata()
    }
}

pub fn fight(encounter_id: Option<EncounterId>, events: Vec<CombatEvent>) -> FightInput {
    FightInput {
        encounter_id,
        metadata: era_metadata(),
        actors: actors(),
        enemies: enemies(),
        abilities: vec![Ability {
            id: CONSECRATION,
            name: "Consecration".to_string(),
            school: SchoolMask::HOLY,
        }],
        combatants: Vec::new(),
        events,
    }
}

pub fn roster() -> Roster {
    Roster::from_fight(&fight(None, Vec::new()))
}

pub fn combatant(actor_id: ActorId) -> CombatantInfo {
    CombatantInfo {
        actor_id,
        ..Default::default()
    }
}

// ─── Event shorthands ───────────────────────────────────────────────────────

pub fn cast(timestamp: i64, source: ActorId, target: ActorId, spell: u32) -> CombatEvent {
    let mut event = CombatEvent::new(timestamp, EventKind::Cast, source, target);
    event.ability_id = Some(spell);
    event
}

pub fn damage(
    timestamp: i64,
    source: ActorId,
    target: ActorId,
    spell: Option<u32>,
    amount: i64,
) -> CombatEvent {
    let mut event = CombatEvent::new(timestamp, EventKind::Damage, source, target);
    event.ability_id = spell;
    event.amount = amount;
    event.hit_type = Some(HitType::Hit);
    event
}

pub fn aura(timestamp: i64, kind: EventKind, source: ActorId, target: ActorId, spell: u32) -> CombatEvent {
    let mut event = CombatEvent::new(timestamp, kind, source, target);
    event.ability_id = Some(spell);
    event
}

// ─── Formula harness ────────────────────────────────────────────────────────

/// Owns everything a [`ThreatContext`] borrows.
pub struct ContextFixture {
    pub event: CombatEvent,
    pub roster: Roster,
    pub ledger: ThreatLedger,
    pub status: ActorStatus,
    pub source_auras: AuraSet,
    pub target_auras: AuraSet,
}

impl ContextFixture {
    pub fn new(kind: EventKind, source: ActorId, target: ActorId) -> Self {
        Self {
            event: CombatEvent::new(1_000, kind, source, target),
            roster: roster(),
            ledger: ThreatLedger::new(),
            status: ActorStatus::new(),
            source_auras: AuraSet::new(),
            target_auras: AuraSet::new(),
        }
    }

    pub fn amount(mut self, amount: i64) -> Self {
        self.event.amount = amount;
        self
    }

    pub fn absorbed(mut self, absorbed: i64) -> Self {
        self.event.absorbed = absorbed;
        self
    }

    pub fn hit(mut self, hit: HitType) -> Self {
        self.event.hit_type = Some(hit);
        self
    }

    pub fn waste(mut self, waste: i64) -> Self {
        self.event.waste = waste;
        self
    }

    pub fn resource(mut self, resource: ResourceKind) -> Self {
        self.event.resource = Some(resource);
        self
    }

    /// Seed `actor`'s threat against the event's target.
    pub fn threat(mut self, actor: ActorId, value: f64) -> Self {
        let enemy = EnemyKey::new(self.event.target_id, self.event.target_instance);
        self.ledger.set(actor, enemy, value);
        self
    }

    pub fn ctx(&self) -> ThreatContext<'_> {
        ThreatContext {
            event: &self.event,
            amount: resolve_amount(&self.event),
            school: self.roster.school_of(self.event.ability_id),
            source_auras: &self.source_auras,
            target_auras: &self.target_auras,
            source_actor: self.roster.actor(self.event.source_id),
            target_actor: self.roster.actor(self.event.target_id),
            encounter_id: None,
            roster: &self.roster,
            ledger: LedgerView::new(&self.ledger, &self.status),
        }
    }
}
