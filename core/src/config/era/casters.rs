//! Priest, mage, warlock and shaman rules. Mostly threat-reduction talents.

use threatline_types::{ModifierSource, PlayerClass, SchoolMask};

use crate::config::ClassBundle;
use crate::formulas::{linear, no_threat};
use crate::modifiers::AuraModifier;
use crate::spells::{mage, priest, shaman, warlock};

/// One aura modifier per talent rank, all sharing `template` apart from the
/// value.
fn ranked(
    bundle: ClassBundle,
    ranks: &'static [u32],
    values: &[f64],
    template: AuraModifier,
) -> ClassBundle {
    let bundle = ranks.iter().zip(values).fold(bundle, |bundle, (id, value)| {
        bundle.aura(
            *id,
            AuraModifier {
                value: *value,
                ..template
            },
        )
    });
    bundle.talent_ranks(ranks[0], ranks)
}

fn talent(name: &'static str) -> AuraModifier {
    AuraModifier::new(name, ModifierSource::Talent, 1.0)
}

fn priest() -> ClassBundle {
    let bundle = ClassBundle::new(PlayerClass::Priest)
        .ranks(priest::HOLY_NOVA, no_threat())
        .talent_points(0, &[(10, 14787)]);
    ranked(
        bundle,
        priest::SILENT_RESOLVE,
        &[0.96, 0.92, 0.88, 0.84, 0.8],
        talent("Silent Resolve").schools(SchoolMask::HOLY.union(SchoolMask::SHADOW)),
    )
}

fn mage() -> ClassBundle {
    let bundle = ranked(
        ClassBundle::new(PlayerClass::Mage),
        mage::ARCANE_SUBTLETY,
        &[0.8, 0.6],
        talent("Arcane Subtlety").schools(SchoolMask::ARCANE),
    );
    let bundle = ranked(
        bundle,
        mage::BURNING_SOUL,
        &[0.85, 0.7],
        talent("Burning Soul").schools(SchoolMask::FIRE),
    );
    ranked(
        bundle,
        mage::FROST_CHANNELING,
        &[0.9667, 0.9333, 0.9],
        talent("Frost Channeling").schools(SchoolMask::FROST),
    )
}

fn warlock() -> ClassBundle {
    ClassBundle::new(PlayerClass::Warlock).ranks(warlock::SEARING_PAIN, linear(2.0, 0.0))
}

fn shaman() -> ClassBundle {
    ranked(
        ClassBundle::new(PlayerClass::Shaman).ranks(shaman::EARTH_SHOCK, linear(2.0, 0.0)),
        shaman::HEALING_GRACE,
        &[0.95, 0.9, 0.85],
        talent("Healing Grace").spells(shaman::HEALING_SPELLS),
    )
}

pub(super) fn bundles() -> Vec<ClassBundle> {
    vec![priest(), mage(), warlock(), shaman()]
}
