use threatline_types::{PlayerClass, ThreatScope};

use crate::config::ClassBundle;
use crate::formulas::{cast_with_miss_rollback, flat_cast, threat_scale};
use crate::spells::hunter::*;

pub(super) fn bundle() -> ClassBundle {
    let mut bundle = ClassBundle::new(PlayerClass::Hunter)
        .ability(FEIGN_DEATH, threat_scale(0.0, ThreatScope::All));
    for (id, threat) in DISTRACTING_SHOT {
        bundle = bundle.ability(*id, cast_with_miss_rollback(*threat));
    }
    for (id, threat) in DISENGAGE {
        bundle = bundle.ability(*id, flat_cast(*threat));
    }
    bundle
}
