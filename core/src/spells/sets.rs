//! Compile-time aura classification sets shared by every edition.

use phf::phf_set;

/// Taunt-style effects forcing an enemy onto the caster.
pub static FIXATE: phf::Set<u32> = phf_set! {
    355u32,   // Taunt
    6795u32,  // Growl
    694u32,   // Mocking Blow
    7400u32,
    7402u32,
    20559u32,
    20560u32,
    1161u32,  // Challenging Shout
    5209u32,  // Challenging Roar
};

/// Crowd control that drops the affected unit out of threat consideration.
pub static AGGRO_LOSS: phf::Set<u32> = phf_set! {
    18431u32, // Bellowing Roar (Onyxia)
    19408u32, // Panic (Magmadar)
    22686u32, // Bellowing Roar (Nefarian)
    24327u32, // Cause Insanity (Hakkar)
    118u32,   // Polymorph
    12824u32,
    12825u32,
    12826u32,
};

pub static INVULNERABILITY: phf::Set<u32> = phf_set! {
    642u32,   // Divine Shield
    1020u32,
    1022u32,  // Blessing of Protection
    5599u32,
    10278u32,
    19752u32, // Divine Intervention
    11958u32, // Ice Block
    3169u32,  // Limited Invulnerability Potion
};
