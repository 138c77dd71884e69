//! Season of Discovery: the era tables plus rune effects.
//!
//! Runes are engraved into gear and show up in the combatant payload's
//! temporary enchant slot, so their threat auras are inferred like enchants.

use threatline_types::{Edition, ModifierSource};

use super::{ConfigBuilder, ThreatConfig};
use crate::error::Result;
use crate::formulas::taunt;
use crate::modifiers::AuraModifier;
use crate::spells::runes;

pub const VERSION: u32 = 9;

const LAYER: &str = "season of discovery";

pub fn config() -> Result<ThreatConfig> {
    let mut builder = ConfigBuilder::new(Edition::SeasonOfDiscovery, VERSION, super::is_sod);
    super::era::populate(&mut builder)?;
    builder
        .extend_aura_modifiers(
            LAYER,
            vec![
                (
                    runes::WAY_OF_EARTH,
                    AuraModifier::new("Way of Earth", ModifierSource::Talent, 1.5),
                ),
                (
                    runes::METAMORPHOSIS,
                    AuraModifier::new("Metamorphosis", ModifierSource::Talent, 1.77),
                ),
            ],
        )?
        .extend_temporary_enchants(
            LAYER,
            vec![
                (runes::ENGRAVE_WAY_OF_EARTH, runes::WAY_OF_EARTH),
                (runes::ENGRAVE_METAMORPHOSIS, runes::METAMORPHOSIS),
            ],
        )?
        .extend_abilities(
            LAYER,
            vec![
                (runes::HAND_OF_RECKONING, taunt(0.0)),
                (runes::MENACE, taunt(0.0)),
                (runes::TEASE, taunt(0.0)),
            ],
        )?;
    Ok(builder.build())
}
