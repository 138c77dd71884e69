//! Combat-log event records.
//!
//! One `CombatEvent` is one line of the recorded fight. Events are read-only
//! input: the engine never mutates them, it only annotates copies.

use serde::{Deserialize, Serialize};

use crate::{ActorId, SpellId};

// ═══════════════════════════════════════════════════════════════════════════
// Event Kind
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Cast,
    BeginCast,
    Damage,
    Heal,
    Absorbed,
    ApplyBuff,
    ApplyDebuff,
    ApplyBuffStack,
    ApplyDebuffStack,
    RefreshBuff,
    RefreshDebuff,
    RemoveBuff,
    RemoveDebuff,
    RemoveBuffStack,
    RemoveDebuffStack,
    Energize,
    Death,
    Resurrect,
    Summon,
    Interrupt,
    Dispel,
    #[serde(other)]
    Other,
}

impl EventKind {
    /// Apply, refresh and stack-apply variants. All of them leave the aura active.
    pub fn is_aura_apply(self) -> bool {
        matches!(
            self,
            Self::ApplyBuff
                | Self::ApplyDebuff
                | Self::ApplyBuffStack
                | Self::ApplyDebuffStack
                | Self::RefreshBuff
                | Self::RefreshDebuff
        )
    }

    /// Full removal only. Losing a stack keeps the aura active.
    pub fn is_aura_remove(self) -> bool {
        matches!(self, Self::RemoveBuff | Self::RemoveDebuff)
    }

    pub fn is_aura_event(self) -> bool {
        self.is_aura_apply()
            || self.is_aura_remove()
            || matches!(self, Self::RemoveBuffStack | Self::RemoveDebuffStack)
    }

    pub fn is_debuff(self) -> bool {
        matches!(
            self,
            Self::ApplyDebuff
                | Self::ApplyDebuffStack
                | Self::RefreshDebuff
                | Self::RemoveDebuff
                | Self::RemoveDebuffStack
        )
    }

    /// Fresh application or refresh (not stack changes).
    pub fn is_apply_or_refresh(self) -> bool {
        matches!(
            self,
            Self::ApplyBuff | Self::ApplyDebuff | Self::RefreshBuff | Self::RefreshDebuff
        )
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Hit Result
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HitType {
    Hit,
    Crit,
    Glancing,
    Crushing,
    Block,
    CritBlock,
    Miss,
    Dodge,
    Parry,
    Deflect,
    Immune,
    Resist,
    Evade,
    Absorb,
    Reflect,
}

impl HitType {
    /// Whether the attack connected. Partial blocks still count as hits.
    pub fn is_successful(self) -> bool {
        matches!(
            self,
            Self::Hit | Self::Crit | Self::Glancing | Self::Crushing | Self::Block | Self::CritBlock
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Mana,
    Rage,
    Focus,
    Energy,
    Happiness,
}

// ═══════════════════════════════════════════════════════════════════════════
// School Mask
// ═══════════════════════════════════════════════════════════════════════════

/// Damage school bitmask. Multi-school spells set several bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchoolMask(pub u8);

impl SchoolMask {
    pub const NONE: Self = Self(0);
    pub const PHYSICAL: Self = Self(1);
    pub const HOLY: Self = Self(2);
    pub const FIRE: Self = Self(4);
    pub const NATURE: Self = Self(8);
    pub const FROST: Self = Self(16);
    pub const SHADOW: Self = Self(32);
    pub const ARCANE: Self = Self(64);
    pub const ALL: Self = Self(127);

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Combat Event
// ═══════════════════════════════════════════════════════════════════════════

/// A single combat-log record.
///
/// `amount` carries the damage/heal/absorb amount or, for energize events, the
/// raw resource gain. Coordinates (when logged) belong to the source actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombatEvent {
    /// Milliseconds since the start of the report.
    pub timestamp: i64,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub source_id: ActorId,
    #[serde(default)]
    pub source_instance: u32,
    pub target_id: ActorId,
    #[serde(default)]
    pub target_instance: u32,
    #[serde(default)]
    pub ability_id: Option<SpellId>,
    #[serde(default)]
    pub amount: i64,
    #[serde(default)]
    pub absorbed: i64,
    #[serde(default)]
    pub overheal: i64,
    #[serde(default)]
    pub hit_type: Option<HitType>,
    #[serde(default)]
    pub resource: Option<ResourceKind>,
    #[serde(default)]
    pub waste: i64,
    #[serde(default)]
    pub stack: Option<u32>,
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
}

impl CombatEvent {
    /// Bare event with the given kind and participants; all detail fields empty.
    pub fn new(timestamp: i64, kind: EventKind, source_id: ActorId, target_id: ActorId) -> Self {
        Self {
            timestamp,
            kind,
            source_id,
            source_instance: 0,
            target_id,
            target_instance: 0,
            ability_id: None,
            amount: 0,
            absorbed: 0,
            overheal: 0,
            hit_type: None,
            resource: None,
            waste: 0,
            stack: None,
            x: None,
            y: None,
        }
    }

    /// True unless the event reports a non-connecting hit result.
    pub fn landed(&self) -> bool {
        self.hit_type.is_none_or(HitType::is_successful)
    }

    pub fn is_self_targeted(&self) -> bool {
        self.source_id == self.target_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_kind_predicates() {
        assert!(EventKind::RefreshDebuff.is_aura_apply());
        assert!(EventKind::ApplyBuffStack.is_aura_apply());
        assert!(!EventKind::RemoveBuffStack.is_aura_remove());
        assert!(EventKind::RemoveBuffStack.is_aura_event());
        assert!(EventKind::RemoveDebuff.is_debuff());
        assert!(!EventKind::ApplyBuffStack.is_apply_or_refresh());
    }

    #[test]
    fn test_hit_type_success() {
        assert!(HitType::Glancing.is_successful());
        assert!(HitType::Block.is_successful());
        assert!(!HitType::Parry.is_successful());
        assert!(!HitType::Resist.is_successful());
    }

    #[test]
    fn test_event_from_log_json() {
        let json = r#"{
            "timestamp": 12345,
            "type": "damage",
            "sourceId": 4,
            "targetId": 31,
            "targetInstance": 2,
            "abilityId": 11597,
            "amount": 0,
            "hitType": "parry"
        }"#;
        let event: CombatEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.kind, EventKind::Damage);
        assert_eq!(event.target_instance, 2);
        assert_eq!(event.source_instance, 0);
        assert!(!event.landed());
    }

    #[test]
    fn test_unknown_event_kind_maps_to_other() {
        let json = r#"{"timestamp": 1, "type": "encounterstart", "sourceId": -1, "targetId": -1}"#;
        let event: CombatEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.kind, EventKind::Other);
    }

    #[test]
    fn test_school_mask() {
        let shadowfrost = SchoolMask::SHADOW.union(SchoolMask::FROST);
        assert!(shadowfrost.intersects(SchoolMask::FROST));
        assert!(!shadowfrost.intersects(SchoolMask::HOLY));
        assert!(SchoolMask::ALL.intersects(SchoolMask::ARCANE));
    }
}
