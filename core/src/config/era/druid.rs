use threatline_types::{ModifierSource, PlayerClass};

use crate::config::ClassBundle;
use crate::formulas::{flat_cast, flat_on_aura, linear, taunt};
use crate::modifiers::AuraModifier;
use crate::spells::druid::*;

const BEAR_FORMS: &[u32] = &[BEAR_FORM, DIRE_BEAR_FORM];

const FERAL_INSTINCT_VALUES: [f64; 5] = [1.03, 1.06, 1.09, 1.12, 1.15];
const SUBTLETY_VALUES: [f64; 5] = [0.96, 0.92, 0.88, 0.84, 0.8];

const FERAL_INSTINCT_BY_POINTS: &[(u8, u32)] = &[(11, 16949), (16, 16951)];
const SUBTLETY_BY_POINTS: &[(u8, u32)] = &[(11, 17122)];

pub(super) fn bundle() -> ClassBundle {
    let mut bundle = ClassBundle::new(PlayerClass::Druid)
        .aura(BEAR_FORM, AuraModifier::new("Bear Form", ModifierSource::Stance, 1.3))
        .aura(
            DIRE_BEAR_FORM,
            AuraModifier::new("Dire Bear Form", ModifierSource::Stance, 1.3),
        )
        .aura(CAT_FORM, AuraModifier::new("Cat Form", ModifierSource::Stance, 0.71))
        .exclusive(FORMS)
        .implies(DIRE_BEAR_FORM, BEAR_ONLY)
        .implies(CAT_FORM, CAT_ONLY)
        .ranks(MAUL, linear(1.75, 0.0))
        .ranks(SWIPE, linear(1.75, 0.0))
        .ranks(FAERIE_FIRE_FERAL, flat_on_aura(108.0, false))
        .ranks(DEMORALIZING_ROAR, flat_on_aura(39.0, false))
        .ability(GROWL, taunt(0.0))
        .talent_points(1, FERAL_INSTINCT_BY_POINTS)
        .talent_points(2, SUBTLETY_BY_POINTS)
        .talent_ranks(FERAL_INSTINCT[0], FERAL_INSTINCT)
        .talent_ranks(SUBTLETY[0], SUBTLETY);

    for (id, threat) in COWER {
        bundle = bundle.ability(*id, flat_cast(*threat));
    }
    for (id, value) in FERAL_INSTINCT.iter().zip(FERAL_INSTINCT_VALUES) {
        bundle = bundle.aura(
            *id,
            AuraModifier::new("Feral Instinct", ModifierSource::Talent, value).requires(BEAR_FORMS),
        );
    }
    for (id, value) in SUBTLETY.iter().zip(SUBTLETY_VALUES) {
        bundle = bundle.aura(
            *id,
            AuraModifier::new("Subtlety", ModifierSource::Talent, value).spells(HEALING_SPELLS),
        );
    }
    bundle
}
