//! Fight roster types: friendly actors, hostile units, abilities and
//! combatant (talent / gear) payloads.

use serde::{Deserialize, Serialize};

use crate::event::SchoolMask;
use crate::{ActorId, SpellId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerClass {
    Warrior,
    Paladin,
    Hunter,
    Rogue,
    Priest,
    Shaman,
    Mage,
    Warlock,
    Druid,
}

impl PlayerClass {
    pub fn name(self) -> &'static str {
        match self {
            Self::Warrior => "Warrior",
            Self::Paladin => "Paladin",
            Self::Hunter => "Hunter",
            Self::Rogue => "Rogue",
            Self::Priest => "Priest",
            Self::Shaman => "Shaman",
            Self::Mage => "Mage",
            Self::Warlock => "Warlock",
            Self::Druid => "Druid",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActorKind {
    #[default]
    Player,
    Pet,
    Npc,
}

/// A friendly actor. Immutable for the duration of a fight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    pub id: ActorId,
    pub name: String,
    #[serde(default)]
    pub kind: ActorKind,
    #[serde(default)]
    pub class: Option<PlayerClass>,
    #[serde(default)]
    pub spec: Option<String>,
    /// Owning player for pets and guardians.
    #[serde(default)]
    pub owner_id: Option<ActorId>,
}

/// A hostile unit. `instance_count` is the number of simultaneous copies
/// the log distinguished by instance index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnemyUnit {
    pub id: ActorId,
    /// Creature template id, stable across reports.
    pub game_id: u32,
    pub name: String,
    #[serde(default = "default_instance_count")]
    pub instance_count: u32,
    #[serde(default)]
    pub is_boss: bool,
}

fn default_instance_count() -> u32 {
    1
}

/// Ability table entry used to resolve spell school and display names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ability {
    pub id: SpellId,
    pub name: String,
    #[serde(default)]
    pub school: SchoolMask,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalentRank {
    pub id: u32,
    pub rank: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GearItem {
    pub id: u32,
    #[serde(default)]
    pub enchant: Option<u32>,
    /// Temporary enchant slot; also carries rune engravings on seasonal realms.
    #[serde(default)]
    pub temporary_enchant: Option<u32>,
    #[serde(default)]
    pub set_id: Option<u32>,
}

/// Per-actor payload logged at the start of a fight.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombatantInfo {
    pub actor_id: ActorId,
    /// Points spent per talent tree, in tree order.
    #[serde(default)]
    pub talent_points: Vec<u8>,
    /// Explicit talent ranks when the log source provides them.
    #[serde(default)]
    pub talent_ranks: Vec<TalentRank>,
    #[serde(default)]
    pub gear: Vec<GearItem>,
    /// Auras active when the fight began.
    #[serde(default)]
    pub auras: Vec<SpellId>,
}

impl CombatantInfo {
    pub fn points_in_tree(&self, tree: usize) -> u8 {
        self.talent_points.get(tree).copied().unwrap_or(0)
    }

    pub fn set_piece_count(&self, set_id: u32) -> usize {
        self.gear.iter().filter(|item| item.set_id == Some(set_id)).count()
    }
}
