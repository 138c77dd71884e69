//! Per-actor aura state, rebuilt from the event stream.
//!
//! Applies, refreshes and stack changes keep an aura active; only a full
//! removal clears it. Exclusive groups (stances, forms) evict siblings on
//! apply. Abilities that can only be used under a given aura imply that
//! aura even when its application predates the log.

use hashbrown::HashMap;
use threatline_types::{ActorId, SpellId};

use super::AuraSet;
use crate::events::{FightSignal, SignalHandler};

#[derive(Debug, Default)]
pub struct AuraTracker {
    auras: HashMap<ActorId, AuraSet>,

    // ─── Static tables, fixed for the run ─────────────────────────────────
    /// Aura id -> index into `groups`
    exclusive: HashMap<SpellId, usize>,
    groups: Vec<Vec<SpellId>>,
    /// Ability id -> aura it implies
    implied_by: HashMap<SpellId, SpellId>,

    empty: AuraSet,
}

impl AuraTracker {
    pub fn new(groups: &[Vec<SpellId>], implications: &HashMap<SpellId, Vec<SpellId>>) -> Self {
        let mut exclusive = HashMap::new();
        for (index, group) in groups.iter().enumerate() {
            for aura in group {
                exclusive.insert(*aura, index);
            }
        }
        let implied_by = implications
            .iter()
            .flat_map(|(aura, abilities)| abilities.iter().map(move |ability| (*ability, *aura)))
            .collect();

        Self {
            auras: HashMap::new(),
            exclusive,
            groups: groups.to_vec(),
            implied_by,
            empty: AuraSet::new(),
        }
    }

    /// Active auras for an actor (empty if never seen).
    pub fn auras(&self, actor: ActorId) -> &AuraSet {
        self.auras.get(&actor).unwrap_or(&self.empty)
    }

    pub fn has(&self, actor: ActorId, aura: SpellId) -> bool {
        self.auras.get(&actor).is_some_and(|set| set.contains(aura))
    }

    /// Seed auras known before the first event (synthetic and pre-pull).
    pub fn seed(&mut self, actor: ActorId, auras: impl IntoIterator<Item = SpellId>) {
        for aura in auras {
            self.apply(actor, aura);
        }
    }

    /// Activate an aura, evicting any exclusive siblings.
    pub fn apply(&mut self, actor: ActorId, aura: SpellId) {
        let set = self.auras.entry(actor).or_default();
        if let Some(&group) = self.exclusive.get(&aura) {
            for sibling in &self.groups[group] {
                if *sibling != aura {
                    set.remove(*sibling);
                }
            }
        }
        set.insert(aura);
    }

    pub fn remove(&mut self, actor: ActorId, aura: SpellId) -> bool {
        self.auras.get_mut(&actor).is_some_and(|set| set.remove(aura))
    }

    /// Force an aura on for a bounded window. Returns whether it was already
    /// active, which must be handed back to [`release`](Self::release).
    pub fn force(&mut self, actor: ActorId, aura: SpellId) -> bool {
        let was_present = self.has(actor, aura);
        if !was_present {
            self.auras.entry(actor).or_default().insert(aura);
        }
        was_present
    }

    /// End a forced window. An aura that was active before the window began
    /// stays active.
    pub fn release(&mut self, actor: ActorId, aura: SpellId, was_present: bool) {
        if !was_present {
            self.remove(actor, aura);
        }
    }

    /// Infer the aura an ability implies, if it is not already active.
    pub fn observe_ability(&mut self, actor: ActorId, ability: SpellId) {
        let Some(&aura) = self.implied_by.get(&ability) else {
            return;
        };
        if !self.has(actor, aura) {
            tracing::debug!(actor, ability, aura, "aura implied by ability");
            self.apply(actor, aura);
        }
    }
}

impl SignalHandler for AuraTracker {
    fn handle_signal(&mut self, signal: &FightSignal) {
        match signal {
            FightSignal::AuraApplied { actor, aura, .. } => self.apply(*actor, *aura),
            FightSignal::AuraRemoved { actor, aura, .. } => {
                self.remove(*actor, *aura);
            }
            FightSignal::AbilityUsed { actor, ability, .. } => self.observe_ability(*actor, *ability),
            _ => {}
        }
    }
}
