//! Modifier composer
//!
//! Combines every active aura modifier that applies to an event (matching
//! school, spell whitelist and required companion auras) with the actor's
//! class multiplier into one product.
//!
//! Auras are visited in ascending id order, so the product is bit-for-bit
//! identical however the aura set was built up.

use hashbrown::HashMap;
use threatline_types::formatting::is_visible_modifier;
use threatline_types::{AppliedModifier, ModifierSource, SchoolMask, SpellId};

use crate::effects::AuraSet;

/// A multiplier carried by an aura (real or synthetic).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AuraModifier {
    pub name: &'static str,
    pub source: ModifierSource,
    pub value: f64,
    /// Restrict to spells of these schools.
    pub schools: Option<SchoolMask>,
    /// Restrict to these spells.
    pub spells: Option<&'static [SpellId]>,
    /// Only applies while one of these auras is also active (empty = always).
    pub requires_any: &'static [SpellId],
}

impl AuraModifier {
    pub const fn new(name: &'static str, source: ModifierSource, value: f64) -> Self {
        Self {
            name,
            source,
            value,
            schools: None,
            spells: None,
            requires_any: &[],
        }
    }

    pub const fn schools(mut self, schools: SchoolMask) -> Self {
        self.schools = Some(schools);
        self
    }

    pub const fn spells(mut self, spells: &'static [SpellId]) -> Self {
        self.spells = Some(spells);
        self
    }

    pub const fn requires(mut self, auras: &'static [SpellId]) -> Self {
        self.requires_any = auras;
        self
    }

    pub fn applies(&self, school: SchoolMask, spell: Option<SpellId>, auras: &AuraSet) -> bool {
        if let Some(mask) = self.schools
            && !mask.intersects(school)
        {
            return false;
        }
        if let Some(list) = self.spells
            && !spell.is_some_and(|id| list.contains(&id))
        {
            return false;
        }
        self.requires_any.is_empty() || auras.contains_any(self.requires_any)
    }
}

/// Class-wide multiplier (e.g. rogues).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassModifier {
    pub name: &'static str,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    pub multiplier: f64,
    /// Contributing modifiers worth displaying, in application order.
    pub applied: Vec<AppliedModifier>,
}

impl Composition {
    pub fn identity() -> Self {
        Self {
            multiplier: 1.0,
            applied: Vec::new(),
        }
    }
}

pub fn compose(
    table: &HashMap<SpellId, AuraModifier>,
    auras: &AuraSet,
    class: Option<ClassModifier>,
    school: SchoolMask,
    spell: Option<SpellId>,
) -> Composition {
    let mut composition = Composition::identity();

    if let Some(class) = class {
        composition.multiplier *= class.value;
        if is_visible_modifier(class.value) {
            composition.applied.push(AppliedModifier {
                name: class.name.to_string(),
                source: ModifierSource::Class,
                value: class.value,
                spell_id: None,
            });
        }
    }

    for aura in auras.sorted() {
        let Some(modifier) = table.get(&aura) else {
            continue;
        };
        if !modifier.applies(school, spell, auras) {
            continue;
        }
        composition.multiplier *= modifier.value;
        if is_visible_modifier(modifier.value) {
            composition.applied.push(AppliedModifier {
                name: modifier.name.to_string(),
                source: modifier.source,
                value: modifier.value,
                spell_id: Some(aura),
            });
        }
    }

    composition
}
