//! Shared data model for threatline.
//!
//! These types describe what flows into the threat engine (combat-log events,
//! the fight roster, report metadata) and what comes back out (annotated
//! events with their threat blocks and ledger changes). They carry no engine
//! logic so that the presentation layer can depend on them without pulling in
//! the rule tables.

pub mod actor;
pub mod annotated;
pub mod event;
pub mod fight;
pub mod formatting;

pub use actor::{Ability, Actor, ActorKind, CombatantInfo, EnemyUnit, GearItem, PlayerClass, TalentRank};
pub use annotated::{
    AnnotatedEvent, AppliedModifier, ChangeOperator, EffectRecord, MarkerKind, ModifierSource,
    SpellModifier, StateMarker, ThreatBlock, ThreatChange, ThreatScope,
};
pub use event::{CombatEvent, EventKind, HitType, ResourceKind, SchoolMask};
pub use fight::{Edition, FightInput, ReportMetadata};

/// Combat-log actor identifier (friendly or hostile).
pub type ActorId = i64;

/// Spell / aura / ability identifier.
pub type SpellId = u32;

/// Encounter identifier as reported by the log source.
pub type EncounterId = u32;
