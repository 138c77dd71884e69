use threatline_types::{ModifierSource, PlayerClass};

use crate::config::ClassBundle;
use crate::formulas::{cast_with_miss_rollback, flat_on_aura, linear, taunt};
use crate::modifiers::AuraModifier;
use crate::spells::warrior::*;

/// Sunder Armor threat per rank.
const SUNDER_THREAT: [f64; 5] = [100.0, 140.0, 180.0, 220.0, 261.0];

/// Protection points -> assumed Defiance rank when ranks are not logged.
const DEFIANCE_BY_POINTS: &[(u8, u32)] = &[(11, 12303), (14, 12788), (16, 12792)];

const DEFIANCE_VALUES: [f64; 5] = [1.03, 1.06, 1.09, 1.12, 1.15];

pub(super) fn bundle() -> ClassBundle {
    let mut bundle = ClassBundle::new(PlayerClass::Warrior)
        .aura(
            BATTLE_STANCE,
            AuraModifier::new("Battle Stance", ModifierSource::Stance, 0.8),
        )
        .aura(
            BERSERKER_STANCE,
            AuraModifier::new("Berserker Stance", ModifierSource::Stance, 0.8),
        )
        .aura(
            DEFENSIVE_STANCE,
            AuraModifier::new("Defensive Stance", ModifierSource::Stance, 1.3),
        )
        .exclusive(STANCES)
        .ability(HEROIC_STRIKE_R8, linear(1.0, 145.0))
        .ability(HEROIC_STRIKE_R9, linear(1.0, 175.0))
        .ability(REVENGE_R5, linear(1.0, 315.0))
        .ability(REVENGE_R6, linear(1.0, 355.0))
        .ability(SHIELD_SLAM_R4, linear(1.0, 250.0))
        .ability(CLEAVE_R5, linear(1.0, 100.0))
        .ability(THUNDER_CLAP_R6, linear(1.75, 0.0))
        .ability(HAMSTRING_R3, linear(1.0, 181.0))
        .ability(DEMORALIZING_SHOUT_R5, flat_on_aura(43.0, false))
        .ability(BATTLE_SHOUT_R7, flat_on_aura(60.0, true))
        .ability(TAUNT, taunt(0.0))
        .talent_points(2, DEFIANCE_BY_POINTS)
        .talent_ranks(DEFIANCE[0], DEFIANCE);

    for (id, threat) in SUNDER_ARMOR.iter().zip(SUNDER_THREAT) {
        bundle = bundle.ability(*id, cast_with_miss_rollback(threat));
    }
    for (id, value) in DEFIANCE.iter().zip(DEFIANCE_VALUES) {
        bundle = bundle.aura(
            *id,
            AuraModifier::new("Defiance", ModifierSource::Talent, value).requires(&[DEFENSIVE_STANCE]),
        );
    }
    bundle
}
