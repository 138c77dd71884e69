//! Whole-fight input bundle and the report metadata used to choose a rule set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::actor::{Ability, Actor, CombatantInfo, EnemyUnit};
use crate::event::CombatEvent;
use crate::EncounterId;

/// Supported game editions, one rule set each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edition {
    Era,
    SeasonOfDiscovery,
    Anniversary,
}

impl Edition {
    pub fn label(self) -> &'static str {
        match self {
            Self::Era => "Classic Era",
            Self::SeasonOfDiscovery => "Season of Discovery",
            Self::Anniversary => "Anniversary",
        }
    }
}

/// Report-level metadata consulted by the config resolver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub game_version: u32,
    #[serde(default)]
    pub season_id: Option<u32>,
    /// Realm partition tags (e.g. `"fresh"`, `"hardcore"`).
    #[serde(default)]
    pub partition_tags: Vec<String>,
    /// Wall-clock start of the fight.
    pub start_time: DateTime<Utc>,
}

impl ReportMetadata {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.partition_tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

/// Everything the engine needs to replay one fight.
///
/// `events` must be complete and sorted by timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FightInput {
    #[serde(default)]
    pub encounter_id: Option<EncounterId>,
    pub metadata: ReportMetadata,
    pub actors: Vec<Actor>,
    pub enemies: Vec<EnemyUnit>,
    #[serde(default)]
    pub abilities: Vec<Ability>,
    #[serde(default)]
    pub combatants: Vec<CombatantInfo>,
    pub events: Vec<CombatEvent>,
}
