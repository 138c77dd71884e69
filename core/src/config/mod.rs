//! Config resolver
//!
//! One immutable [`ThreatConfig`] per supported edition, built once per
//! process and shared read-only across runs. [`ConfigRegistry::resolve`]
//! walks the editions in precedence order and returns the first whose
//! predicate accepts the report metadata.

mod anniversary;
pub mod builder;
mod era;
mod sod;

pub use builder::{ClassBundle, ConfigBuilder};

use std::fmt;
use std::sync::LazyLock;

use hashbrown::{HashMap, HashSet};
use threatline_types::{
    ActorId, CombatEvent, Edition, EncounterId, PlayerClass, ReportMetadata, SpellId,
};

use crate::context::Roster;
use crate::effects::SyntheticAuraRules;
use crate::encounter::PreprocessorFactory;
use crate::error::{ConfigError, Result};
use crate::formulas::{BaseFormulas, ThreatFormula};
use crate::modifiers::{AuraModifier, ClassModifier};

// ─── Resolver constants ─────────────────────────────────────────────────────

/// Game version reported for classic-era realms (all three editions).
pub const CLASSIC_ERA_GAME_VERSION: u32 = 2;
pub const SOD_SEASON_ID: u32 = 3;
pub const FRESH_REALM_TAG: &str = "fresh";
/// 2026-01-13T00:00:00Z, first raid reset of the anniversary realms.
pub const ANNIVERSARY_CUTOVER_MS: i64 = 1_768_262_400_000;

fn is_classic(meta: &ReportMetadata) -> bool {
    meta.game_version == CLASSIC_ERA_GAME_VERSION
}

fn is_sod(meta: &ReportMetadata) -> bool {
    is_classic(meta) && meta.season_id == Some(SOD_SEASON_ID)
}

fn is_anniversary(meta: &ReportMetadata) -> bool {
    is_classic(meta)
        && meta.season_id != Some(SOD_SEASON_ID)
        && meta.has_tag(FRESH_REALM_TAG)
        && meta.start_time.timestamp_millis() >= ANNIVERSARY_CUTOVER_MS
}

fn is_era(meta: &ReportMetadata) -> bool {
    is_classic(meta) && !is_sod(meta) && !is_anniversary(meta)
}

// ═══════════════════════════════════════════════════════════════════════════
// ThreatConfig
// ═══════════════════════════════════════════════════════════════════════════

/// Per-class rules that are not plain table entries.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassRules {
    pub class: PlayerClass,
    pub modifier: Option<ClassModifier>,
    /// Ability ids contributed by this class's bundle, sorted.
    pub abilities: Vec<SpellId>,
}

pub struct ThreatConfig {
    pub edition: Edition,
    pub version: u32,
    pub resolve: fn(&ReportMetadata) -> bool,
    pub base: BaseFormulas,
    pub classes: HashMap<PlayerClass, ClassRules>,
    pub abilities: HashMap<SpellId, ThreatFormula>,
    pub aura_modifiers: HashMap<SpellId, AuraModifier>,
    pub fixate: HashSet<SpellId>,
    pub aggro_loss: HashSet<SpellId>,
    pub invulnerability: HashSet<SpellId>,
    pub encounters: HashMap<EncounterId, PreprocessorFactory>,
    pub inference: SyntheticAuraRules,
    /// Aura -> abilities whose use implies it.
    pub implications: HashMap<SpellId, Vec<SpellId>>,
    pub exclusive_groups: Vec<Vec<SpellId>>,
}

impl ThreatConfig {
    /// The formula for an event: its ability's table entry if there is one,
    /// otherwise the base formula for the event kind.
    ///
    /// An ability entry shadows the base formula even when it declines the
    /// event, which is how cast/damage double counting is avoided.
    pub fn formula_for(&self, event: &CombatEvent) -> Option<&ThreatFormula> {
        if let Some(id) = event.ability_id
            && let Some(formula) = self.abilities.get(&id)
        {
            return Some(formula);
        }
        self.base.for_kind(event.kind)
    }

    pub fn class_modifier(&self, class: Option<PlayerClass>) -> Option<ClassModifier> {
        class
            .and_then(|c| self.classes.get(&c))
            .and_then(|rules| rules.modifier)
    }

    /// Synthetic auras for one actor plus the auras logged on them at pull.
    pub fn initial_auras(&self, roster: &Roster, actor: ActorId) -> Vec<SpellId> {
        let Some(info) = roster.combatant(actor) else {
            return Vec::new();
        };
        let mut auras = self.inference.infer(roster.class_of(actor), info);
        auras.extend(info.auras.iter().copied());
        auras.sort_unstable();
        auras.dedup();
        auras
    }

    pub fn preprocessor_for(&self, encounter: Option<EncounterId>) -> Option<PreprocessorFactory> {
        encounter.and_then(|id| self.encounters.get(&id).copied())
    }
}

impl fmt::Debug for ThreatConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThreatConfig")
            .field("edition", &self.edition)
            .field("version", &self.version)
            .field("classes", &self.classes.len())
            .field("abilities", &self.abilities.len())
            .field("aura_modifiers", &self.aura_modifiers.len())
            .field("encounters", &self.encounters.len())
            .finish_non_exhaustive()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Registry
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy)]
pub enum Resolution<'a> {
    Supported(&'a ThreatConfig),
    /// No edition accepts the metadata. A reportable outcome, not an error.
    Unsupported,
}

/// Supported editions in resolution order.
#[derive(Debug)]
pub struct ConfigRegistry {
    editions: Vec<ThreatConfig>,
}

impl ConfigRegistry {
    pub fn new(editions: Vec<ThreatConfig>) -> Result<Self> {
        if editions.is_empty() {
            return Err(ConfigError::NoEditions);
        }
        Ok(Self { editions })
    }

    /// Season of Discovery, Anniversary, then the shared era base.
    pub fn standard() -> Result<Self> {
        let registry = Self::new(vec![sod::config()?, anniversary::config()?, era::config()?])?;
        tracing::info!(cache_key = %registry.cache_key(), "threat configs built");
        Ok(registry)
    }

    pub fn resolve(&self, meta: &ReportMetadata) -> Resolution<'_> {
        match self.editions.iter().find(|config| (config.resolve)(meta)) {
            Some(config) => Resolution::Supported(config),
            None => {
                tracing::debug!(
                    game_version = meta.game_version,
                    season = ?meta.season_id,
                    "no supported configuration"
                );
                Resolution::Unsupported
            }
        }
    }

    /// Every edition whose predicate accepts `meta`. More than one is an
    /// authoring defect.
    pub fn check_exclusive(&self, meta: &ReportMetadata) -> Vec<Edition> {
        self.editions
            .iter()
            .filter(|config| (config.resolve)(meta))
            .map(|config| config.edition)
            .collect()
    }

    /// Edition versions joined with `-`, for external cache busting.
    pub fn cache_key(&self) -> String {
        self.editions
            .iter()
            .map(|config| config.version.to_string())
            .collect::<Vec<_>>()
            .join("-")
    }

    pub fn get(&self, edition: Edition) -> Option<&ThreatConfig> {
        self.editions.iter().find(|config| config.edition == edition)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ThreatConfig> {
        self.editions.iter()
    }
}

static REGISTRY: LazyLock<Result<ConfigRegistry>> = LazyLock::new(ConfigRegistry::standard);

/// The process-wide registry, built on first use.
pub fn registry() -> std::result::Result<&'static ConfigRegistry, &'static ConfigError> {
    REGISTRY.as_ref()
}
