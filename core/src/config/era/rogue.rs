use threatline_types::{PlayerClass, ThreatScope};

use crate::config::ClassBundle;
use crate::formulas::{flat_cast, threat_scale};
use crate::spells::rogue::*;

pub(super) fn bundle() -> ClassBundle {
    let mut bundle = ClassBundle::new(PlayerClass::Rogue)
        .modifier(CLASS_MULTIPLIER)
        .ranks(VANISH, threat_scale(0.0, ThreatScope::All));
    for (id, threat) in FEINT {
        bundle = bundle.ability(*id, flat_cast(*threat));
    }
    bundle
}
