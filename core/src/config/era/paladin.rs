use threatline_types::{ModifierSource, PlayerClass, SchoolMask};

use crate::config::ClassBundle;
use crate::modifiers::AuraModifier;
use crate::spells::paladin::*;

/// Improved Righteous Fury raises the 60% holy bonus to 70/80/90%.
const IMPROVED_RF_VALUES: [f64; 3] = [1.7 / 1.6, 1.8 / 1.6, 1.9 / 1.6];

const IMPROVED_RF_BY_POINTS: &[(u8, u32)] = &[(13, 20470)];

pub(super) fn bundle() -> ClassBundle {
    let mut bundle = ClassBundle::new(PlayerClass::Paladin)
        .aura(
            RIGHTEOUS_FURY,
            AuraModifier::new("Righteous Fury", ModifierSource::Buff, 1.6).schools(SchoolMask::HOLY),
        )
        .talent_points(1, IMPROVED_RF_BY_POINTS)
        .talent_ranks(IMPROVED_RIGHTEOUS_FURY[0], IMPROVED_RIGHTEOUS_FURY);

    for (id, value) in IMPROVED_RIGHTEOUS_FURY.iter().zip(IMPROVED_RF_VALUES) {
        bundle = bundle.aura(
            *id,
            AuraModifier::new("Improved Righteous Fury", ModifierSource::Talent, value)
                .schools(SchoolMask::HOLY)
                .requires(&[RIGHTEOUS_FURY]),
        );
    }
    bundle
}
