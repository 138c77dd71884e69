use threatline_types::{EncounterId, SpellId};

// ─── Encounters ─────────────────────────────────────────────────────────────

pub const RAGNAROS_ENCOUNTER: EncounterId = 672;
pub const RAGNAROS_NPC: u32 = 11502;

pub const TWIN_EMPERORS_ENCOUNTER: EncounterId = 715;
pub const VEKNILASH_NPC: u32 = 15275;
pub const VEKLOR_NPC: u32 = 15276;
pub const TWIN_TELEPORT: SpellId = 800;

pub const NIGHTBANE_ENCOUNTER: EncounterId = 662;
pub const NIGHTBANE_NPC: u32 = 17225;

pub const SOLARIAN_ENCOUNTER: EncounterId = 732;
pub const SOLARIAN_NPC: u32 = 18805;

// ─── Boss abilities ─────────────────────────────────────────────────────────

pub const ONYXIA_KNOCK_AWAY: SpellId = 19633;
pub const BROODLORD_KNOCK_AWAY: SpellId = 18670;
pub const WING_BUFFET: SpellId = 23339;
pub const NOTH_BLINK: &[SpellId] = &[29210, 29211];
pub const VOID_REAVER_KNOCK_AWAY: SpellId = 25778;
