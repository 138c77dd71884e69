//! Synthetic aura inference.
//!
//! Talents, enchants and set bonuses never show up as aura events, so they are
//! inferred once per actor from the combatant payload and seeded into the
//! tracker. The composer cannot tell them apart from logged auras.

use hashbrown::HashMap;
use threatline_types::{CombatantInfo, PlayerClass, SpellId};

/// Talent rank guessed from points spent in one tree.
///
/// `thresholds` is `(minimum points, aura)`; the highest qualifying threshold
/// wins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TalentPointRule {
    pub class: PlayerClass,
    pub tree: usize,
    pub thresholds: &'static [(u8, SpellId)],
}

impl TalentPointRule {
    pub fn infer(&self, points: u8) -> Option<SpellId> {
        self.thresholds
            .iter()
            .filter(|(minimum, _)| points >= *minimum)
            .max_by_key(|(minimum, _)| *minimum)
            .map(|(_, aura)| *aura)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetBonusRule {
    pub set_id: u32,
    pub pieces: usize,
    pub aura: SpellId,
}

#[derive(Debug, Clone, Default)]
pub struct SyntheticAuraRules {
    pub talent_points: Vec<TalentPointRule>,
    /// Talent id -> aura per rank (index 0 is rank 1).
    pub talent_ranks: HashMap<u32, &'static [SpellId]>,
    pub enchants: HashMap<u32, SpellId>,
    /// Temporary enchant slot, which also carries seasonal rune engravings.
    pub temporary_enchants: HashMap<u32, SpellId>,
    pub set_bonuses: Vec<SetBonusRule>,
}

impl SyntheticAuraRules {
    /// Every synthetic aura implied by a combatant payload, sorted.
    ///
    /// Explicit talent ranks take precedence; point-spread guesses are only
    /// used when the payload carries no ranks at all.
    pub fn infer(&self, class: Option<PlayerClass>, info: &CombatantInfo) -> Vec<SpellId> {
        let mut auras = Vec::new();

        if info.talent_ranks.is_empty() {
            if let Some(class) = class {
                auras.extend(
                    self.talent_points
                        .iter()
                        .filter(|rule| rule.class == class)
                        .filter_map(|rule| rule.infer(info.points_in_tree(rule.tree))),
                );
            }
        } else {
            auras.extend(info.talent_ranks.iter().filter_map(|talent| {
                let ranks = self.talent_ranks.get(&talent.id)?;
                let index = usize::from(talent.rank).checked_sub(1)?;
                ranks.get(index.min(ranks.len().saturating_sub(1))).copied()
            }));
        }

        for item in &info.gear {
            if let Some(aura) = item.enchant.and_then(|id| self.enchants.get(&id)) {
                auras.push(*aura);
            }
            if let Some(aura) = item
                .temporary_enchant
                .and_then(|id| self.temporary_enchants.get(&id))
            {
                auras.push(*aura);
            }
        }

        auras.extend(
            self.set_bonuses
                .iter()
                .filter(|rule| info.set_piece_count(rule.set_id) >= rule.pieces)
                .map(|rule| rule.aura),
        );

        auras.sort_unstable();
        auras.dedup();
        auras
    }
}
