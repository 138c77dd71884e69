//! Layered rule-table construction.
//!
//! A config is assembled from named layers: the shared base edition first,
//! then per-class bundles, then edition-specific deltas. Every merge is
//! explicit:
//!
//! - `extend_*` adds new keys and rejects keys an earlier layer defined
//! - `override_*` replaces keys and rejects keys no earlier layer defined
//! - a key listed twice within one layer is always rejected
//!
//! A layer is validated in full before any of it is written, so a failed
//! merge leaves the builder unchanged.

use hashbrown::{HashMap, HashSet};
use threatline_types::{Edition, EncounterId, PlayerClass, ReportMetadata, SpellId};

use super::{ClassRules, ThreatConfig};
use crate::effects::{SetBonusRule, SyntheticAuraRules, TalentPointRule};
use crate::encounter::PreprocessorFactory;
use crate::error::{ConfigError, Result};
use crate::formulas::{BaseFormulas, ThreatFormula};
use crate::modifiers::{AuraModifier, ClassModifier};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Merge {
    Extend,
    Override,
}

fn check_keys(
    existing: impl Fn(u32) -> bool,
    keys: impl IntoIterator<Item = u32>,
    layer: &'static str,
    table: &'static str,
    mode: Merge,
) -> Result<()> {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(ConfigError::DuplicateKey { layer, table, key });
        }
        match (mode, existing(key)) {
            (Merge::Extend, true) => return Err(ConfigError::Collision { layer, table, key }),
            (Merge::Override, false) => {
                return Err(ConfigError::StaleOverride { layer, table, key });
            }
            _ => {}
        }
    }
    Ok(())
}

fn merge<V>(
    target: &mut HashMap<u32, V>,
    entries: Vec<(u32, V)>,
    layer: &'static str,
    table: &'static str,
    mode: Merge,
) -> Result<()> {
    check_keys(
        |key| target.contains_key(&key),
        entries.iter().map(|(key, _)| *key),
        layer,
        table,
        mode,
    )?;
    target.extend(entries);
    Ok(())
}

fn merge_set(
    target: &mut HashSet<SpellId>,
    entries: Vec<SpellId>,
    layer: &'static str,
    table: &'static str,
) -> Result<()> {
    check_keys(
        |key| target.contains(&key),
        entries.iter().copied(),
        layer,
        table,
        Merge::Extend,
    )?;
    target.extend(entries);
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// Class bundle
// ═══════════════════════════════════════════════════════════════════════════

/// Everything one class contributes to a config, merged as its own layer.
pub struct ClassBundle {
    pub class: PlayerClass,
    pub modifier: Option<ClassModifier>,
    pub abilities: Vec<(SpellId, ThreatFormula)>,
    pub aura_modifiers: Vec<(SpellId, AuraModifier)>,
    pub exclusive_groups: Vec<Vec<SpellId>>,
    pub implications: Vec<(SpellId, Vec<SpellId>)>,
    pub talent_points: Vec<TalentPointRule>,
    pub talent_ranks: Vec<(u32, &'static [SpellId])>,
}

impl ClassBundle {
    pub fn new(class: PlayerClass) -> Self {
        Self {
            class,
            modifier: None,
            abilities: Vec::new(),
            aura_modifiers: Vec::new(),
            exclusive_groups: Vec::new(),
            implications: Vec::new(),
            talent_points: Vec::new(),
            talent_ranks: Vec::new(),
        }
    }

    pub fn modifier(mut self, value: f64) -> Self {
        self.modifier = Some(ClassModifier {
            name: self.class.name(),
            value,
        });
        self
    }

    pub fn ability(mut self, id: SpellId, formula: ThreatFormula) -> Self {
        self.abilities.push((id, formula));
        self
    }

    /// Same formula for every rank of an ability.
    pub fn ranks(mut self, ids: &[SpellId], formula: ThreatFormula) -> Self {
        self.abilities
            .extend(ids.iter().map(|id| (*id, ThreatFormula::clone(&formula))));
        self
    }

    pub fn aura(mut self, id: SpellId, modifier: AuraModifier) -> Self {
        self.aura_modifiers.push((id, modifier));
        self
    }

    pub fn exclusive(mut self, group: &[SpellId]) -> Self {
        self.exclusive_groups.push(group.to_vec());
        self
    }

    pub fn implies(mut self, aura: SpellId, abilities: &[SpellId]) -> Self {
        self.implications.push((aura, abilities.to_vec()));
        self
    }

    pub fn talent_points(mut self, tree: usize, thresholds: &'static [(u8, SpellId)]) -> Self {
        self.talent_points.push(TalentPointRule {
            class: self.class,
            tree,
            thresholds,
        });
        self
    }

    pub fn talent_ranks(mut self, talent: u32, ranks: &'static [SpellId]) -> Self {
        self.talent_ranks.push((talent, ranks));
        self
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Builder
// ═══════════════════════════════════════════════════════════════════════════

pub struct ConfigBuilder {
    edition: Edition,
    version: u32,
    resolve: fn(&ReportMetadata) -> bool,
    base: BaseFormulas,
    classes: HashMap<PlayerClass, ClassRules>,
    abilities: HashMap<SpellId, ThreatFormula>,
    aura_modifiers: HashMap<SpellId, AuraModifier>,
    fixate: HashSet<SpellId>,
    aggro_loss: HashSet<SpellId>,
    invulnerability: HashSet<SpellId>,
    encounters: HashMap<EncounterId, PreprocessorFactory>,
    inference: SyntheticAuraRules,
    implications: HashMap<SpellId, Vec<SpellId>>,
    exclusive_groups: Vec<Vec<SpellId>>,
}

impl ConfigBuilder {
    pub fn new(edition: Edition, version: u32, resolve: fn(&ReportMetadata) -> bool) -> Self {
        Self {
            edition,
            version,
            resolve,
            base: BaseFormulas::standard(),
            classes: HashMap::new(),
            abilities: HashMap::new(),
            aura_modifiers: HashMap::new(),
            fixate: HashSet::new(),
            aggro_loss: HashSet::new(),
            invulnerability: HashSet::new(),
            encounters: HashMap::new(),
            inference: SyntheticAuraRules::default(),
            implications: HashMap::new(),
            exclusive_groups: Vec::new(),
        }
    }

    pub fn base(&mut self, base: BaseFormulas) -> &mut Self {
        self.base = base;
        self
    }

    pub fn extend_abilities(
        &mut self,
        layer: &'static str,
        entries: Vec<(SpellId, ThreatFormula)>,
    ) -> Result<&mut Self> {
        merge(&mut self.abilities, entries, layer, "abilities", Merge::Extend)?;
        Ok(self)
    }

    pub fn override_abilities(
        &mut self,
        layer: &'static str,
        entries: Vec<(SpellId, ThreatFormula)>,
    ) -> Result<&mut Self> {
        merge(&mut self.abilities, entries, layer, "abilities", Merge::Override)?;
        Ok(self)
    }

    pub fn extend_aura_modifiers(
        &mut self,
        layer: &'static str,
        entries: Vec<(SpellId, AuraModifier)>,
    ) -> Result<&mut Self> {
        merge(&mut self.aura_modifiers, entries, layer, "aura modifiers", Merge::Extend)?;
        Ok(self)
    }

    pub fn override_aura_modifiers(
        &mut self,
        layer: &'static str,
        entries: Vec<(SpellId, AuraModifier)>,
    ) -> Result<&mut Self> {
        merge(&mut self.aura_modifiers, entries, layer, "aura modifiers", Merge::Override)?;
        Ok(self)
    }

    pub fn extend_encounters(
        &mut self,
        layer: &'static str,
        entries: Vec<(EncounterId, PreprocessorFactory)>,
    ) -> Result<&mut Self> {
        merge(&mut self.encounters, entries, layer, "encounters", Merge::Extend)?;
        Ok(self)
    }

    pub fn extend_fixate(&mut self, layer: &'static str, ids: Vec<SpellId>) -> Result<&mut Self> {
        merge_set(&mut self.fixate, ids, layer, "fixate")?;
        Ok(self)
    }

    pub fn extend_aggro_loss(&mut self, layer: &'static str, ids: Vec<SpellId>) -> Result<&mut Self> {
        merge_set(&mut self.aggro_loss, ids, layer, "aggro loss")?;
        Ok(self)
    }

    pub fn extend_invulnerability(
        &mut self,
        layer: &'static str,
        ids: Vec<SpellId>,
    ) -> Result<&mut Self> {
        merge_set(&mut self.invulnerability, ids, layer, "invulnerability")?;
        Ok(self)
    }

    pub fn extend_enchants(
        &mut self,
        layer: &'static str,
        entries: Vec<(u32, SpellId)>,
    ) -> Result<&mut Self> {
        merge(&mut self.inference.enchants, entries, layer, "enchants", Merge::Extend)?;
        Ok(self)
    }

    pub fn extend_temporary_enchants(
        &mut self,
        layer: &'static str,
        entries: Vec<(u32, SpellId)>,
    ) -> Result<&mut Self> {
        merge(
            &mut self.inference.temporary_enchants,
            entries,
            layer,
            "temporary enchants",
            Merge::Extend,
        )?;
        Ok(self)
    }

    pub fn override_talent_ranks(
        &mut self,
        layer: &'static str,
        entries: Vec<(u32, &'static [SpellId])>,
    ) -> Result<&mut Self> {
        merge(&mut self.inference.talent_ranks, entries, layer, "talent ranks", Merge::Override)?;
        Ok(self)
    }

    pub fn extend_set_bonuses(
        &mut self,
        layer: &'static str,
        rules: Vec<SetBonusRule>,
    ) -> Result<&mut Self> {
        check_keys(
            |aura| self.inference.set_bonuses.iter().any(|r| r.aura == aura),
            rules.iter().map(|r| r.aura),
            layer,
            "set bonuses",
            Merge::Extend,
        )?;
        self.inference.set_bonuses.extend(rules);
        Ok(self)
    }

    /// Merge one class bundle as its own layer.
    pub fn extend_class(&mut self, bundle: ClassBundle) -> Result<&mut Self> {
        let layer = bundle.class.name();
        if self.classes.contains_key(&bundle.class) {
            return Err(ConfigError::Collision {
                layer,
                table: "classes",
                key: bundle.class as u32,
            });
        }

        let mut ability_ids: Vec<SpellId> = bundle.abilities.iter().map(|(id, _)| *id).collect();
        ability_ids.sort_unstable();

        // Validate every keyed table before writing any of them.
        check_keys(
            |key| self.abilities.contains_key(&key),
            ability_ids.iter().copied(),
            layer,
            "abilities",
            Merge::Extend,
        )?;
        check_keys(
            |key| self.aura_modifiers.contains_key(&key),
            bundle.aura_modifiers.iter().map(|(id, _)| *id),
            layer,
            "aura modifiers",
            Merge::Extend,
        )?;
        check_keys(
            |key| self.implications.contains_key(&key),
            bundle.implications.iter().map(|(id, _)| *id),
            layer,
            "implications",
            Merge::Extend,
        )?;
        check_keys(
            |key| self.inference.talent_ranks.contains_key(&key),
            bundle.talent_ranks.iter().map(|(id, _)| *id),
            layer,
            "talent ranks",
            Merge::Extend,
        )?;

        self.abilities.extend(bundle.abilities);
        self.aura_modifiers.extend(bundle.aura_modifiers);
        self.implications.extend(bundle.implications);
        self.inference.talent_ranks.extend(bundle.talent_ranks);
        self.inference.talent_points.extend(bundle.talent_points);
        self.exclusive_groups.extend(bundle.exclusive_groups);
        self.classes.insert(
            bundle.class,
            ClassRules {
                class: bundle.class,
                modifier: bundle.modifier,
                abilities: ability_ids,
            },
        );
        Ok(self)
    }

    pub fn build(self) -> ThreatConfig {
        tracing::debug!(
            edition = ?self.edition,
            version = self.version,
            abilities = self.abilities.len(),
            aura_modifiers = self.aura_modifiers.len(),
            "config built"
        );
        ThreatConfig {
            edition: self.edition,
            version: self.version,
            resolve: self.resolve,
            base: self.base,
            classes: self.classes,
            abilities: self.abilities,
            aura_modifiers: self.aura_modifiers,
            fixate: self.fixate,
            aggro_loss: self.aggro_loss,
            invulnerability: self.invulnerability,
            encounters: self.encounters,
            inference: self.inference,
            implications: self.implications,
            exclusive_groups: self.exclusive_groups,
        }
    }
}
