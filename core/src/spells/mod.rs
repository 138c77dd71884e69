//! Spell, aura and item identifiers referenced by the rule tables.
//!
//! Grouped by owner so the rule tables read as `warrior::SUNDER_ARMOR_R5`
//! rather than bare numbers.

mod bosses;
mod sets;

pub use bosses::*;
pub use sets::{AGGRO_LOSS, FIXATE, INVULNERABILITY};

use threatline_types::SpellId;

/// Ids at or above this value are synthetic auras that never appear in logs.
pub const SYNTHETIC_BASE: SpellId = 1_000_000_000;

pub mod warrior {
    use threatline_types::SpellId;

    pub const BATTLE_STANCE: SpellId = 2457;
    pub const DEFENSIVE_STANCE: SpellId = 71;
    pub const BERSERKER_STANCE: SpellId = 2458;
    pub const STANCES: &[SpellId] = &[BATTLE_STANCE, DEFENSIVE_STANCE, BERSERKER_STANCE];

    pub const DEFIANCE: &[SpellId] = &[12303, 12788, 12789, 12791, 12792];

    pub const SUNDER_ARMOR: &[SpellId] = &[7386, 7405, 8380, 11596, 11597];
    pub const HEROIC_STRIKE_R8: SpellId = 11567;
    pub const HEROIC_STRIKE_R9: SpellId = 25286;
    pub const HEROIC_STRIKE_R10: SpellId = 29707;
    pub const REVENGE_R5: SpellId = 11601;
    pub const REVENGE_R6: SpellId = 25288;
    pub const SHIELD_SLAM_R4: SpellId = 23925;
    pub const SHIELD_SLAM_R5: SpellId = 30356;
    pub const CLEAVE_R5: SpellId = 20569;
    pub const THUNDER_CLAP_R6: SpellId = 11581;
    pub const HAMSTRING_R3: SpellId = 7373;
    pub const DEMORALIZING_SHOUT_R5: SpellId = 11556;
    pub const BATTLE_SHOUT_R7: SpellId = 25289;
    pub const TAUNT: SpellId = 355;
    pub const DEVASTATE: &[SpellId] = &[20243, 30016, 30022];
}

pub mod druid {
    use threatline_types::SpellId;

    pub const BEAR_FORM: SpellId = 5487;
    pub const DIRE_BEAR_FORM: SpellId = 9634;
    pub const CAT_FORM: SpellId = 768;
    pub const TRAVEL_FORM: SpellId = 783;
    pub const MOONKIN_FORM: SpellId = 24858;
    pub const FORMS: &[SpellId] = &[BEAR_FORM, DIRE_BEAR_FORM, CAT_FORM, TRAVEL_FORM, MOONKIN_FORM];

    pub const FERAL_INSTINCT: &[SpellId] = &[16947, 16948, 16949, 16950, 16951];
    pub const SUBTLETY: &[SpellId] = &[17118, 17119, 17120, 17121, 17122];

    pub const MAUL: &[SpellId] = &[6807, 6808, 6809, 8972, 9745, 9880, 9881];
    pub const SWIPE: &[SpellId] = &[779, 780, 769, 9754, 9908];
    pub const GROWL: SpellId = 6795;
    pub const FAERIE_FIRE_FERAL: &[SpellId] = &[16857, 17390, 17391, 17392];
    pub const DEMORALIZING_ROAR: &[SpellId] = &[99, 1735, 9490, 9747, 9898];
    pub const COWER: &[(SpellId, f64)] = &[(8998, -240.0), (9000, -390.0), (9892, -600.0)];
    pub const LACERATE: SpellId = 33745;

    /// Abilities only usable in bear forms.
    pub const BEAR_ONLY: &[SpellId] = &[9881, 9880, 9908, 9898, 6795];
    /// Abilities only usable in cat form.
    pub const CAT_ONLY: &[SpellId] = &[9830, 9850, 9904, 31018, 9896];

    pub const HEALING_SPELLS: &[SpellId] = &[9889, 25297, 9841, 25299, 9858, 9863, 18562];
}

pub mod paladin {
    use threatline_types::SpellId;

    pub const RIGHTEOUS_FURY: SpellId = 25780;
    pub const IMPROVED_RIGHTEOUS_FURY: &[SpellId] = &[20468, 20469, 20470];
    pub const BLESSING_OF_SALVATION: SpellId = 1038;
    pub const GREATER_BLESSING_OF_SALVATION: SpellId = 25895;
    pub const RIGHTEOUS_DEFENSE: SpellId = 31789;
    pub const RIGHTEOUS_DEFENSE_DEBUFF: SpellId = 31790;
}

pub mod hunter {
    use threatline_types::SpellId;

    pub const FEIGN_DEATH: SpellId = 5384;
    pub const DISTRACTING_SHOT: &[(SpellId, f64)] = &[
        (20736, 110.0),
        (14274, 160.0),
        (15629, 250.0),
        (15630, 350.0),
        (15631, 465.0),
        (15632, 600.0),
    ];
    pub const DISENGAGE: &[(SpellId, f64)] = &[(781, -140.0), (14272, -280.0), (14273, -405.0)];
    pub const MISDIRECTION: SpellId = 34477;
    pub const MISDIRECTION_BUFF: SpellId = 35079;
    pub const MULTI_SHOT: &[SpellId] = &[25294, 27021];
}

pub mod rogue {
    use threatline_types::SpellId;

    pub const VANISH: &[SpellId] = &[1856, 1857];
    pub const FEINT: &[(SpellId, f64)] = &[
        (1966, -150.0),
        (6768, -240.0),
        (8637, -390.0),
        (11303, -600.0),
        (25302, -800.0),
    ];
    pub const CLASS_MULTIPLIER: f64 = 0.71;
}

pub mod priest {
    use threatline_types::SpellId;

    pub const HOLY_NOVA: &[SpellId] = &[15237, 15430, 15431, 27799, 27800, 27801];
    pub const SILENT_RESOLVE: &[SpellId] = &[14523, 14784, 14785, 14786, 14787];
}

pub mod mage {
    use threatline_types::SpellId;

    pub const ARCANE_SUBTLETY: &[SpellId] = &[11210, 12592];
    pub const BURNING_SOUL: &[SpellId] = &[11083, 12351];
    pub const FROST_CHANNELING: &[SpellId] = &[11160, 12518, 12519];
}

pub mod warlock {
    use threatline_types::SpellId;

    pub const SEARING_PAIN: &[SpellId] = &[5676, 17919, 17920, 17921, 17922, 17923];
}

pub mod shaman {
    use threatline_types::SpellId;

    pub const EARTH_SHOCK: &[SpellId] = &[8042, 8044, 8045, 8046, 10412, 10413, 10414];
    pub const TRANQUIL_AIR: SpellId = 25909;
    pub const HEALING_GRACE: &[SpellId] = &[29187, 29189, 29191];
    pub const HEALING_SPELLS: &[SpellId] = &[10396, 25357, 10468, 10623];
}

pub mod items {
    use threatline_types::SpellId;

    pub const FETISH_OF_THE_SAND_REAVER: SpellId = 26400;
    pub const EYE_OF_DIMINUTION: SpellId = 28862;

    pub const ENCHANT_GLOVES_THREAT: u32 = 2613;
    pub const GLOVES_THREAT_AURA: SpellId = 25072;
    pub const ENCHANT_CLOAK_SUBTLETY: u32 = 2621;
    pub const CLOAK_SUBTLETY_AURA: SpellId = 25084;

    pub const BATTLEGEAR_OF_MIGHT: u32 = 209;
    pub const MIGHT_8PC_SUNDER: SpellId = super::SYNTHETIC_BASE + 1;
}

/// Seasonal rune effects.
pub mod runes {
    use threatline_types::SpellId;

    pub const WAY_OF_EARTH: SpellId = 408531;
    pub const METAMORPHOSIS: SpellId = 403789;
    pub const HAND_OF_RECKONING: SpellId = 407631;
    pub const MENACE: SpellId = 403828;
    pub const TEASE: SpellId = 410412;

    /// Engraving ids as they appear in a combatant's temporary enchant slot.
    pub const ENGRAVE_WAY_OF_EARTH: u32 = 7011;
    pub const ENGRAVE_METAMORPHOSIS: u32 = 6816;
}
