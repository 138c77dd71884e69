//! Engine output: annotated events.
//!
//! The presentation layer reads these as-is. Every number a chart or table
//! needs is already here, so consumers never redo threat arithmetic.

use serde::{Deserialize, Serialize};

use crate::event::CombatEvent;
use crate::{ActorId, SpellId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierSource {
    Talent,
    Buff,
    Gear,
    Stance,
    Item,
    Class,
}

/// One multiplier that contributed to an event's final threat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedModifier {
    pub name: String,
    pub source: ModifierSource,
    pub value: f64,
    /// Aura that carried the modifier, absent for class-wide modifiers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spell_id: Option<SpellId>,
}

/// Spell-level modifier baked into a formula's value, reported for audit.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SpellModifier {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiplier: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bonus: Option<f64>,
}

impl SpellModifier {
    pub fn multiplier(value: f64) -> Self {
        Self { multiplier: Some(value), bonus: None }
    }

    pub fn bonus(value: f64) -> Self {
        Self { multiplier: None, bonus: Some(value) }
    }

    pub fn linear(multiplier: f64, bonus: f64) -> Self {
        Self {
            multiplier: Some(multiplier),
            bonus: (bonus != 0.0).then_some(bonus),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreatScope {
    /// Only the cell between the event's two participants.
    Target,
    /// Every cell held by the acting side of the event.
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeOperator {
    Add,
    Set,
}

/// A single ledger mutation with its delta and resulting total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreatChange {
    pub source_id: ActorId,
    pub target_id: ActorId,
    pub target_instance: u32,
    pub operator: ChangeOperator,
    pub amount: f64,
    pub total: f64,
}

/// Effects as they appear in the output; interceptors are reported by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EffectRecord {
    ModifyThreat { multiplier: f64, scope: ThreatScope },
    CustomThreat { changes: Vec<ThreatChange> },
    InstallInterceptor { name: String },
}

/// The threat computation attached to an event.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreatBlock {
    /// Raw amount the formula started from.
    pub amount: f64,
    pub note: String,
    /// Threat after every modifier, before any split.
    pub calculated: f64,
    pub split: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spell_modifier: Option<SpellModifier>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<AppliedModifier>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub effects: Vec<EffectRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirected_to: Option<ActorId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    FixateStart,
    FixateEnd,
    AggroLossStart,
    AggroLossEnd,
    InvulnerableStart,
    InvulnerableEnd,
    Death,
}

/// Actor state transitions surfaced for timeline rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateMarker {
    pub kind: MarkerKind,
    pub actor_id: ActorId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enemy_id: Option<ActorId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spell_id: Option<SpellId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedEvent {
    pub event: CombatEvent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threat: Option<ThreatBlock>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub changes: Vec<ThreatChange>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<StateMarker>,
}

impl AnnotatedEvent {
    pub fn bare(event: CombatEvent) -> Self {
        Self {
            event,
            threat: None,
            changes: Vec::new(),
            markers: Vec::new(),
        }
    }

    /// Sum of `Add` deltas this event produced for one actor.
    pub fn added_for(&self, actor: ActorId) -> f64 {
        self.changes
            .iter()
            .filter(|c| c.source_id == actor && c.operator == ChangeOperator::Add)
            .map(|c| c.amount)
            .sum()
    }
}
