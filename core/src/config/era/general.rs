//! Class-independent rules: party buffs, trinkets, enchants, set bonuses and
//! the aura classification sets.

use threatline_types::ModifierSource;

use crate::config::ConfigBuilder;
use crate::effects::SetBonusRule;
use crate::error::Result;
use crate::modifiers::AuraModifier;
use crate::spells::{self, items, paladin, shaman, warrior};

const LAYER: &str = "era general";

pub(super) fn populate(builder: &mut ConfigBuilder) -> Result<()> {
    builder
        .extend_aura_modifiers(
            LAYER,
            vec![
                (
                    paladin::BLESSING_OF_SALVATION,
                    AuraModifier::new("Blessing of Salvation", ModifierSource::Buff, 0.7),
                ),
                (
                    paladin::GREATER_BLESSING_OF_SALVATION,
                    AuraModifier::new("Greater Blessing of Salvation", ModifierSource::Buff, 0.7),
                ),
                (
                    shaman::TRANQUIL_AIR,
                    AuraModifier::new("Tranquil Air Totem", ModifierSource::Buff, 0.8),
                ),
                (
                    items::FETISH_OF_THE_SAND_REAVER,
                    AuraModifier::new("Fetish of the Sand Reaver", ModifierSource::Item, 0.3),
                ),
                (
                    items::EYE_OF_DIMINUTION,
                    AuraModifier::new("The Eye of Diminution", ModifierSource::Item, 0.65),
                ),
                (
                    items::GLOVES_THREAT_AURA,
                    AuraModifier::new("Enchant Gloves - Threat", ModifierSource::Gear, 1.02),
                ),
                (
                    items::CLOAK_SUBTLETY_AURA,
                    AuraModifier::new("Enchant Cloak - Subtlety", ModifierSource::Gear, 0.98),
                ),
                (
                    items::MIGHT_8PC_SUNDER,
                    AuraModifier::new("Battlegear of Might 8pc", ModifierSource::Gear, 1.15)
                        .spells(warrior::SUNDER_ARMOR),
                ),
            ],
        )?
        .extend_enchants(
            LAYER,
            vec![
                (items::ENCHANT_GLOVES_THREAT, items::GLOVES_THREAT_AURA),
                (items::ENCHANT_CLOAK_SUBTLETY, items::CLOAK_SUBTLETY_AURA),
            ],
        )?
        .extend_set_bonuses(
            LAYER,
            vec![SetBonusRule {
                set_id: items::BATTLEGEAR_OF_MIGHT,
                pieces: 8,
                aura: items::MIGHT_8PC_SUNDER,
            }],
        )?
        .extend_fixate(LAYER, spells::FIXATE.iter().copied().collect())?
        .extend_aggro_loss(LAYER, spells::AGGRO_LOSS.iter().copied().collect())?
        .extend_invulnerability(LAYER, spells::INVULNERABILITY.iter().copied().collect())?;
    Ok(())
}
