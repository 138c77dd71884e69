//! Encounter preprocessors
//!
//! Boss-specific stateful hooks that see every event before per-spell
//! dispatch. Returning a result bypasses the formula registry for that event.
//! One preprocessor is built per fight from the enemy roster.

mod reappearance;
mod twin_emperors;

pub use reappearance::{REAPPEARANCE_GAP_MS, ReappearanceWipe};
pub use twin_emperors::{TELEPORT_SEED_THREAT, TwinEmperors};

use threatline_types::EnemyUnit;

use crate::context::ThreatContext;
use crate::formulas::ThreatFormulaResult;
use crate::spells;

pub trait EncounterPreprocessor: Send {
    /// `Some` short-circuits normal dispatch for this event.
    fn preprocess(&mut self, ctx: &ThreatContext<'_>) -> Option<ThreatFormulaResult>;
}

pub type PreprocessorFactory = fn(&[EnemyUnit]) -> Box<dyn EncounterPreprocessor>;

pub fn ragnaros(enemies: &[EnemyUnit]) -> Box<dyn EncounterPreprocessor> {
    Box::new(ReappearanceWipe::for_npcs(
        "Ragnaros submerge",
        enemies,
        &[spells::RAGNAROS_NPC],
        REAPPEARANCE_GAP_MS,
    ))
}

pub fn nightbane(enemies: &[EnemyUnit]) -> Box<dyn EncounterPreprocessor> {
    Box::new(ReappearanceWipe::for_npcs(
        "Nightbane air phase",
        enemies,
        &[spells::NIGHTBANE_NPC],
        REAPPEARANCE_GAP_MS,
    ))
}

pub fn solarian(enemies: &[EnemyUnit]) -> Box<dyn EncounterPreprocessor> {
    Box::new(ReappearanceWipe::for_npcs(
        "Solarian split",
        enemies,
        &[spells::SOLARIAN_NPC],
        REAPPEARANCE_GAP_MS,
    ))
}

pub fn twin_emperors(enemies: &[EnemyUnit]) -> Box<dyn EncounterPreprocessor> {
    Box::new(TwinEmperors::new(enemies))
}
